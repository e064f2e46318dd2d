use crate::Rule;
use crate::rules::helpers::{
    count_occurrences, digits, grapheme_len, graphemes, has_palindrome_window, is_ascii_digit, is_ascii_upper,
    strip_ignored_blocks, two_digits,
};

pub const HAMSTER: &str = "🐹";
pub const EGG: &str = "🥚";
pub const INFINITY: &str = "∞";

const ALKALI_METALS: &[&str] = &["Li", "Na", "Rb", "Cs", "Fr"];

// --- Length ------------------------------------------------------------------

pub fn min_length(len: usize) -> Rule {
    rule! {
        id: format!("min_length_{len}"),
        message: format!("At least {len} characters"),
        check: move |password, _| grapheme_len(password) >= len,
    }
}

pub fn max_length(len: usize) -> Rule {
    rule! {
        id: format!("max_length_{len}"),
        message: format!("At most {len} characters"),
        check: move |password, _| grapheme_len(password) <= len,
    }
}

// --- Letters -----------------------------------------------------------------

pub fn must_start_with(prefix: &'static str) -> Rule {
    rule! {
        id: format!("must_start_with_{prefix}"),
        message: format!("The password may only start with \"{prefix}\""),
        check: move |password, _| !password.is_empty() && password.starts_with(prefix),
    }
}

pub fn has_uppercase() -> Rule {
    rule! {
        id: "has_uppercase",
        message: "At least one uppercase letter",
        check: |password, _| regex!(r"[A-Z]").is_match(password),
    }
}

/// Trap: sprung when an uppercase letter sits at either end.
pub fn no_uppercase_at_edges() -> Rule {
    rule! {
        id: "no_uppercase_at_edges",
        message: "The password cannot end with an uppercase letter",
        check: |password, _| graphemes(password).last().is_some_and(|last| !is_ascii_upper(last)),
        show_when: |password| {
            let chars = graphemes(password);
            match (chars.first(), chars.last()) {
                (Some(first), Some(last)) => is_ascii_upper(first) || is_ascii_upper(last),
                _ => false,
            }
        },
    }
}

// --- Digits ------------------------------------------------------------------

pub fn has_number() -> Rule {
    rule! {
        id: "has_number",
        message: "At least one digit",
        check: |password, _| regex!(r"[0-9]").is_match(password),
    }
}

pub fn not_start_with_number() -> Rule {
    rule! {
        id: "not_start_with_number",
        message: "The password cannot start with a digit",
        check: |password, _| !regex!(r"^[0-9]").is_match(password),
        show_when: |password| regex!(r"^[0-9]").is_match(password),
    }
}

/// Digits outside `^...^` blocks must be non-decreasing.
pub fn numbers_must_be_sorted() -> Rule {
    rule! {
        id: "numbers_must_be_sorted",
        message: "Digits must appear in ascending order (anything between ^ and ^ is ignored)",
        check: |password, _| {
            let nums = digits(&strip_ignored_blocks(password));
            nums.len() < 2 || nums.windows(2).all(|w| w[0] <= w[1])
        },
    }
}

pub fn product_of_numbers_max(max: u64) -> Rule {
    rule! {
        id: format!("product_numbers_max_{max}"),
        message: format!("The product of the digits must not exceed {max}"),
        check: move |password, _| {
            let nums = digits(password);
            if nums.is_empty() {
                return true;
            }
            nums.iter().fold(1u64, |acc, &n| acc.saturating_mul(u64::from(n))) <= max
        },
    }
}

fn digit_sum_matches(password: &str, target: u64) -> bool {
    let nums = digits(password);
    nums.len() < 2 || nums.iter().fold(0u64, |acc, &n| acc.saturating_add(u64::from(n))) == target
}

pub fn sum_of_numbers_equals(target: u64) -> Rule {
    rule! {
        id: format!("sum_numbers_equals_{target}"),
        message: format!("The digits must add up to {target}"),
        check: move |password, _| digit_sum_matches(password, target),
    }
}

/// Like [`sum_of_numbers_equals`], with the target locked into the session context.
pub fn sum_of_numbers_equals_target() -> Rule {
    Rule::contextual(
        "sum_numbers_equals_target",
        |ctx| match ctx.target_number {
            Some(target) => format!("The digits must add up to {target}"),
            None => "The digits must add up to the target number".to_string(),
        },
        |password, ctx| match ctx.target_number {
            Some(target) => digit_sum_matches(password, u64::from(target)),
            None => true,
        },
    )
}

pub fn must_contain_current_hour() -> Rule {
    let rule = rule! {
        id: "must_contain_current_hour",
        message: "The password must contain the current hour (24h, two digits)",
        check: |password, ctx| ctx.hour.is_none_or(|hour| password.contains(&two_digits(hour))),
    };
    rule.reading_context()
}

pub fn must_contain_locked_minute() -> Rule {
    let rule = rule! {
        id: "must_contain_locked_minute",
        message: "The password must contain the minute you started playing (two digits)",
        check: |password, ctx| ctx.minute.is_none_or(|minute| password.contains(&two_digits(minute))),
    };
    rule.reading_context()
}

// --- Special characters ------------------------------------------------------

pub fn has_special_char() -> Rule {
    rule! {
        id: "has_special_char",
        message: "At least one special character",
        check: |password, _| regex!(r"[^a-zA-Z0-9]").is_match(password),
    }
}

pub fn no_repeated_chars() -> Rule {
    rule! {
        id: "no_repeated_chars",
        message: "The same character cannot appear twice in a row",
        check: |password, _| !graphemes(password).windows(2).any(|w| w[0] == w[1]),
    }
}

/// Trap: only shown once a four-character palindrome is hiding in the password.
pub fn no_four_char_palindrome_hidden() -> Rule {
    rule! {
        id: "no_four_char_palindrome_hidden",
        message: "The password cannot contain a four-character palindrome",
        check: |password, _| !has_palindrome_window(password, 4),
        show_when: |password| has_palindrome_window(password, 4),
    }
}

pub fn max_two_carets() -> Rule {
    rule! {
        id: "max_two_carets",
        message: "The password may contain at most two ^ symbols",
        check: |password, _| password.matches('^').count() <= 2,
        show_when: |password| password.matches('^').count() >= 3,
    }
}

pub fn max_one_dot() -> Rule {
    rule! {
        id: "max_one_dot",
        message: "The password may contain at most one dot (.)",
        check: |password, _| password.matches('.').count() <= 1,
        show_when: |password| password.matches('.').count() > 1,
    }
}

pub fn contains_infinity_symbol() -> Rule {
    rule! {
        id: "contains_infinity_symbol",
        message: "The password must contain the infinity symbol",
        check: |password, _| password.contains(INFINITY),
        copy: INFINITY,
    }
}

// --- Trivia ------------------------------------------------------------------

pub fn contains_roman_numeral() -> Rule {
    rule! {
        id: "contains_roman_numeral",
        message: "The password must contain a Roman numeral",
        check: |password, _| regex!(r"[IVXLCDM]").is_match(password),
    }
}

pub fn contains_alkali_metal() -> Rule {
    rule! {
        id: "contains_alkali_metal",
        message: "The password must contain the two-letter symbol of an alkali metal",
        check: |password, _| ALKALI_METALS.iter().any(|symbol| password.contains(symbol)),
    }
}

pub fn contains_planet() -> Rule {
    rule! {
        id: "contains_planet",
        message: "The password must contain the name of a planet in the solar system",
        check: |password, _| regex!(r"(?i)(mercury|venus|earth|mars|jupiter|saturn|uranus|neptune)").is_match(password),
    }
}

/// Trap on a trap: appears once a planet is written in lowercase.
pub fn planet_starts_with_uppercase() -> Rule {
    rule! {
        id: "planet_starts_with_uppercase",
        message: "Planet names start with an uppercase letter",
        check: |password, _| regex!(r"(Mercury|Venus|Earth|Mars|Jupiter|Saturn|Uranus|Neptune)").is_match(password),
        show_when: |password| regex!(r"(mercury|venus|earth|mars|jupiter|saturn|uranus|neptune)").is_match(password),
    }
}

pub fn contains_absolute_zero() -> Rule {
    rule! {
        id: "contains_absolute_zero",
        message: "The password must contain absolute zero in degrees Celsius, with decimals",
        check: |password, _| password.contains("-273.15"),
    }
}

pub fn contains_eiffel_city() -> Rule {
    rule! {
        id: "contains_eiffel_city",
        message: "The password must contain the city the Eiffel Tower stands in",
        check: |password, _| regex!(r"(?i)paris").is_match(password),
    }
}

// --- Pets --------------------------------------------------------------------

pub fn protect_hamster() -> Rule {
    rule! {
        id: "protect_hamster",
        message: "🐹 Your hamster got lost. Hide it in the password and make sure it stays there.",
        check: |password, _| password.contains(HAMSTER),
        copy: HAMSTER,
    }
}

pub fn hamster_between_numbers() -> Rule {
    rule! {
        id: "hamster_between_numbers",
        message: "🐹 The hamster only feels safe between numbers. Put a digit on both sides of it.",
        check: |password, _| {
            graphemes(password)
                .windows(3)
                .any(|w| w[1].starts_with(HAMSTER) && is_ascii_digit(w[0]) && is_ascii_digit(w[2]))
        },
        copy: HAMSTER,
    }
}

pub fn only_one_hamster() -> Rule {
    rule! {
        id: "only_one_hamster",
        message: "🐹 There is only one hamster. Where did the other one come from?",
        check: |password, _| count_occurrences(password, HAMSTER) == 1,
        show_when: |password| count_occurrences(password, HAMSTER) >= 2,
    }
}

pub fn protect_egg() -> Rule {
    rule! {
        id: "protect_egg",
        message: "🥚 This is Paul. Paul has not hatched yet. Keep him in the password; if he disappears, you lose.",
        check: |password, _| password.contains(EGG),
        copy: EGG,
    }
}
