use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Split into user-perceived characters (extended grapheme clusters).
pub fn graphemes(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// Number of user-perceived characters.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Occurrences of `needle`, including copies fused into a larger cluster by a
/// variation selector or joiner.
pub fn count_occurrences(s: &str, needle: &str) -> usize {
    s.matches(needle).count()
}

/// ASCII digits in order of appearance.
pub fn digits(s: &str) -> Vec<u32> {
    s.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Remove `^...^` blocks; their content does not count for digit ordering.
pub fn strip_ignored_blocks(s: &str) -> Cow<'_, str> {
    regex!(r"\^.*?\^").replace_all(s, "")
}

/// True when some window of `width` graphemes reads the same both ways.
pub fn has_palindrome_window(s: &str, width: usize) -> bool {
    if width == 0 {
        return false;
    }
    graphemes(s).windows(width).any(|w| w.iter().eq(w.iter().rev()))
}

pub fn is_ascii_upper(g: &str) -> bool {
    g.len() == 1 && g.as_bytes()[0].is_ascii_uppercase()
}

pub fn is_ascii_digit(g: &str) -> bool {
    g.len() == 1 && g.as_bytes()[0].is_ascii_digit()
}

/// Zero-padded two digit rendering used for hour/minute rules.
pub fn two_digits(n: u32) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphemes_keep_emoji_whole() {
        assert_eq!(grapheme_len("a🐹b"), 3);
        assert_eq!(grapheme_len("👨‍👩‍👧"), 1);
        assert_eq!(count_occurrences("🐹x🐹", "🐹"), 2);
        assert_eq!(count_occurrences("🐹\u{200D}🐹", "🐹"), 2);
        assert_eq!(count_occurrences("🐹\u{FE0F}", "🐹"), 1);
    }

    #[test]
    fn digits_ignore_non_ascii() {
        assert_eq!(digits("a1b٣2"), vec![1, 2]);
        assert!(digits("").is_empty());
    }

    #[test]
    fn strip_blocks_is_lazy() {
        assert_eq!(strip_ignored_blocks("1^9^2^8^3"), "123");
        assert_eq!(strip_ignored_blocks("1^9"), "1^9");
    }

    #[test]
    fn palindrome_windows() {
        assert!(has_palindrome_window("xabba", 4));
        assert!(!has_palindrome_window("abcd", 4));
        assert!(!has_palindrome_window("aba", 4));
        assert!(has_palindrome_window("x🐹🐹x", 4));
    }
}
