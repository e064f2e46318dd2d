#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Rule`](crate::Rule) with a constant message.
///
/// ```text
/// rule! {
///     id: "has_number",
///     message: "At least one digit",
///     check: |password, _| regex!(r"[0-9]").is_match(password),
///     show_when: |password| ...,   // optional visibility gate
///     copy: "🐹",                  // optional copy hint
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        id: $id:expr,
        message: $message:expr,
        check: $check:expr
        $(, show_when: $show:expr)?
        $(, copy: $copy:expr)?
        $(,)?
    ) => {{
        $crate::Rule::new($id, $message, $check)
            $(.with_visibility($show))?
            $(.with_copy_hint($copy))?
    }};
}
