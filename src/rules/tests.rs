use crate::rules;
use crate::{Rule, RuleContext};

fn assert_cases(rule: &Rule, cases: &[(&str, bool)]) {
    let ctx = RuleContext::default();
    for (input, expected) in cases {
        assert_eq!(rule.check(input, &ctx), *expected, "rule {} on {:?}", rule.id(), input);
    }
}

fn assert_shown(rule: &Rule, cases: &[(&str, bool)]) {
    for (input, expected) in cases {
        assert_eq!(rule.should_show(input), Some(*expected), "gate of {} on {:?}", rule.id(), input);
    }
}

#[test]
fn length_rules_count_graphemes() {
    let min = rules::min_length(5);
    assert_eq!(min.id(), "min_length_5");
    assert_cases(&min, &[("", false), ("abcd", false), ("abcde", true), ("🐹🐹🐹🐹🐹", true), ("🐹🐹🐹🐹", false)]);

    let max = rules::max_length(3);
    assert_cases(&max, &[("", true), ("abc", true), ("abcd", false), ("👨‍👩‍👧ab", true)]);
}

#[test]
fn character_classes() {
    assert_cases(&rules::has_uppercase(), &[("", false), ("abc", false), ("aBc", true), ("ÄÖ", false)]);
    assert_cases(&rules::has_number(), &[("", false), ("abc", false), ("a1", true)]);
    assert_cases(&rules::has_special_char(), &[("", false), ("abc123", false), ("a b", true), ("a🐹", true)]);
    assert_cases(&rules::contains_roman_numeral(), &[("abc", false), ("aXb", true), ("vi", false)]);
}

#[test]
fn must_start_with_fails_on_empty() {
    let rule = rules::must_start_with("Q");
    assert_cases(&rule, &[("", false), ("Quiz", true), ("quiz", false)]);
}

#[test]
fn uppercase_edges_trap() {
    let rule = rules::no_uppercase_at_edges();
    assert_cases(&rule, &[("", false), ("abC", false), ("Abc", true), ("abc", true), ("ab🐹", true)]);
    assert_shown(&rule, &[("", false), ("abc", false), ("Abc", true), ("abC", true), ("🐹A", true)]);
}

#[test]
fn leading_digit_trap() {
    let rule = rules::not_start_with_number();
    assert_cases(&rule, &[("", true), ("1abc", false), ("abc1", true)]);
    assert_shown(&rule, &[("", false), ("1abc", true), ("abc1", false)]);
}

#[test]
fn sorted_digits_skip_caret_blocks() {
    let rule = rules::numbers_must_be_sorted();
    assert_cases(
        &rule,
        &[
            ("", true),
            ("a7", true),
            ("1a2b3", true),
            ("1a1", true),
            ("3a1", false),
            ("1^9^2", true),
            ("9^1", false),
            ("5^0^6^4^7", true),
        ],
    );
}

#[test]
fn product_of_digits() {
    let rule = rules::product_of_numbers_max(9999);
    assert_eq!(rule.id(), "product_numbers_max_9999");
    assert_cases(&rule, &[("", true), ("abc", true), ("9", true), ("9999", true), ("99999", false), ("99990", true)]);

    // The product saturates on long digit runs but a zero still brings it to 0.
    let long_nines = "9".repeat(21);
    assert!(!rule.check(&long_nines, &RuleContext::default()));
    assert!(rule.check(&format!("{long_nines}0"), &RuleContext::default()));

    let long = "9".repeat(200);
    assert!(!rule.check(&long, &RuleContext::default()));
}

#[test]
fn sum_of_digits() {
    let rule = rules::sum_of_numbers_equals(10);
    assert_cases(&rule, &[("", true), ("7", true), ("55", true), ("46", true), ("19", true), ("123", false)]);
}

#[test]
fn sum_target_comes_from_context() {
    let rule = rules::sum_of_numbers_equals_target();
    let ctx = RuleContext { target_number: Some(12), ..RuleContext::default() };

    assert_eq!(rule.message(&ctx), "The digits must add up to 12");
    assert!(rule.check("3a9", &ctx));
    assert!(!rule.check("3a8", &ctx));
    assert!(rule.check("3a8", &RuleContext::default()));
}

#[test]
fn hour_and_minute_come_from_context() {
    let ctx = RuleContext { minute: Some(7), hour: Some(9), target_number: None };

    let hour = rules::must_contain_current_hour();
    assert!(hour.check("ab09cd", &ctx));
    assert!(!hour.check("ab9cd", &ctx));

    let minute = rules::must_contain_locked_minute();
    assert!(minute.check("x07", &ctx));
    assert!(!minute.check("x7", &ctx));

    let unset = RuleContext::default();
    assert!(hour.check("", &unset));
    assert!(minute.check("", &unset));
}

#[test]
fn repeated_characters() {
    assert_cases(&rules::no_repeated_chars(), &[("", true), ("abab", true), ("abba", false), ("🐹x🐹", true), ("🐹🐹", false)]);
}

#[test]
fn palindrome_uses_graphemes() {
    let rule = rules::no_four_char_palindrome_hidden();
    assert_cases(&rule, &[("", true), ("abc", true), ("abba", false), ("xabcx", true), ("xx🐹🐹xx", false)]);
    assert_shown(&rule, &[("abc", false), ("xx🐹🐹xx", true), ("x🐹y🐹", false)]);
}

#[test]
fn caret_and_dot_limits() {
    let carets = rules::max_two_carets();
    assert_cases(&carets, &[("a^b", true), ("a^b^", true), ("a^b^c^", false)]);
    assert_shown(&carets, &[("a^b", false), ("a^b^c^", true)]);

    let dots = rules::max_one_dot();
    assert_cases(&dots, &[("a.b", true), ("a.b.", false)]);
    assert_shown(&dots, &[("a.b", false), ("a.b.", true)]);
}

#[test]
fn trivia() {
    assert_cases(&rules::contains_alkali_metal(), &[("na", false), ("Na", true), ("xFrx", true), ("K", false)]);
    assert_cases(&rules::contains_absolute_zero(), &[("273.15", false), ("-273.15", true), ("-273,15", false)]);
    assert_cases(&rules::contains_eiffel_city(), &[("PARIS", true), ("par1s", false)]);
    assert_cases(&rules::contains_infinity_symbol(), &[("8", false), ("a∞", true)]);
    assert_eq!(rules::contains_infinity_symbol().copy_hint(), Some(rules::INFINITY));
}

#[test]
fn planets() {
    assert_cases(&rules::contains_planet(), &[("", false), ("mars", true), ("SATURN", true), ("pluto", false)]);

    let capitalized = rules::planet_starts_with_uppercase();
    assert_cases(&capitalized, &[("mars", false), ("Mars", true), ("xNeptune", true)]);
    assert_shown(&capitalized, &[("Mars", false), ("mars", true), ("MARS", false)]);
}

#[test]
fn hamster_rules() {
    let protect = rules::protect_hamster();
    assert_cases(&protect, &[("", false), ("a🐹", true)]);
    assert_eq!(protect.copy_hint(), Some(rules::HAMSTER));

    let between = rules::hamster_between_numbers();
    assert_cases(&between, &[("🐹", false), ("1🐹", false), ("1🐹2", true), ("a🐹2", false), ("x🐹y1🐹2", true)]);

    let only_one = rules::only_one_hamster();
    assert_cases(&only_one, &[("", false), ("🐹", true), ("🐹🐹", false)]);
    assert_shown(&only_one, &[("🐹", false), ("🐹a🐹", true)]);
}

#[test]
fn hamster_fused_with_selector_or_joiner_still_counts() {
    let protect = rules::protect_hamster();
    let between = rules::hamster_between_numbers();
    let only_one = rules::only_one_hamster();

    assert_cases(&protect, &[("1🐹\u{FE0F}2", true), ("🐹\u{200D}🐹", true)]);
    assert_cases(&between, &[("1🐹\u{FE0F}2", true), ("a🐹\u{FE0F}2", false)]);
    assert_cases(&only_one, &[("1🐹\u{FE0F}2", true), ("🐹\u{200D}🐹", false)]);
    assert_shown(&only_one, &[("1🐹\u{FE0F}2", false), ("🐹\u{200D}🐹", true)]);
}

#[test]
fn egg_rule() {
    let rule = rules::protect_egg();
    assert_cases(&rule, &[("", false), ("🥚", true), ("a🥚\u{FE0F}", true)]);
    assert_eq!(rule.copy_hint(), Some(rules::EGG));
}

#[test]
fn checks_are_total_on_odd_input() {
    let ctx = RuleContext { minute: Some(0), hour: Some(23), target_number: Some(99) };
    let inputs = ["", "^", "^^^^", "\u{0301}", "🏳️‍🌈🏳️‍🌈🏳️‍🌈🏳️‍🌈", "\n\t", "0"];
    let catalog = vec![
        rules::min_length(0),
        rules::no_uppercase_at_edges(),
        rules::numbers_must_be_sorted(),
        rules::product_of_numbers_max(0),
        rules::sum_of_numbers_equals_target(),
        rules::must_contain_current_hour(),
        rules::no_four_char_palindrome_hidden(),
        rules::hamster_between_numbers(),
        rules::planet_starts_with_uppercase(),
    ];

    for rule in &catalog {
        for input in inputs {
            let _ = rule.check(input, &ctx);
            let _ = rule.should_show(input);
            assert!(!rule.message(&ctx).is_empty());
        }
    }
}

#[test]
fn fused_emoji_and_long_digit_runs_give_correct_answers() {
    let long_run = format!("{}0", "9".repeat(21));
    let cases: Vec<(Rule, &str, bool)> = vec![
        (rules::protect_hamster(), "🐹\u{FE0F}", true),
        (rules::only_one_hamster(), "🐹\u{FE0F}", true),
        (rules::only_one_hamster(), "🐹\u{200D}🐹", false),
        (rules::hamster_between_numbers(), "🐹\u{200D}🐹", false),
        (rules::min_length(2), "🐹\u{200D}🐹", false),
        (rules::product_of_numbers_max(9999), long_run.as_str(), true),
        (rules::product_of_numbers_max(9999), "99999", false),
        (rules::numbers_must_be_sorted(), long_run.as_str(), false),
        (rules::sum_of_numbers_equals(189), long_run.as_str(), true),
    ];

    let ctx = RuleContext::default();
    for (rule, input, expected) in &cases {
        assert_eq!(rule.check(input, &ctx), *expected, "rule {} on {:?}", rule.id(), input);
    }
}
