//! Image riddles.
//!
//! Factories pick one variant through the injected [`RandomSource`] when the
//! level is built; the returned rule is fixed to that variant for the rest of
//! the session.

use crate::providers::{RandomSource, pick};
use crate::{AssetHandle, Puzzle, Rule};

struct Captcha {
    id: &'static str,
    image: AssetHandle,
    answer: &'static str,
}

const CAPTCHAS: &[Captcha] = &[
    Captcha { id: "captcha_1", image: AssetHandle::new("captcha/1.png"), answer: "TK58P" },
    Captcha { id: "captcha_2", image: AssetHandle::new("captcha/2.png"), answer: "9M4BP" },
    Captcha { id: "captcha_3", image: AssetHandle::new("captcha/3.png"), answer: "B4T9S" },
    Captcha { id: "captcha_4", image: AssetHandle::new("captcha/4.png"), answer: "4NV3A" },
];

struct Shape {
    key: &'static str,
    image: AssetHandle,
}

const SHAPES: &[Shape] = &[
    Shape { key: "square", image: AssetHandle::new("puzzles/square.png") },
    Shape { key: "triangle", image: AssetHandle::new("puzzles/triangle.png") },
    Shape { key: "circle", image: AssetHandle::new("puzzles/circle.png") },
    Shape { key: "rectangle", image: AssetHandle::new("puzzles/rectangle.png") },
];

pub fn random_captcha(random: &mut dyn RandomSource) -> Rule {
    let captcha = pick(random, CAPTCHAS);
    tracing::debug!(variant = captcha.id, "captcha variant picked");

    Rule::puzzle(
        captcha.id,
        "The code in the picture must appear in the password",
        Puzzle::new(captcha.image, captcha.answer),
    )
}

/// Case-insensitive: "Circle" and "CIRCLE" both answer the circle picture.
pub fn random_shape_puzzle(random: &mut dyn RandomSource) -> Rule {
    let shape = pick(random, SHAPES);
    tracing::debug!(variant = shape.key, "shape variant picked");

    Rule::puzzle(
        format!("puzzle_shape_{}", shape.key),
        "The shape in the picture must appear in the password",
        Puzzle::new(shape.image, shape.key).ignoring_case(),
    )
}

pub fn count_the_triangles() -> Rule {
    Rule::puzzle(
        "count_the_triangles",
        "The password must contain how many triangles are in the picture below",
        Puzzle::new(AssetHandle::new("puzzles/count_triangles.png"), "13"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, FixedRandom, RuleContext};

    #[test]
    fn captcha_is_fixed_by_random_source() {
        let ctx = RuleContext::default();
        let rule = random_captcha(&mut FixedRandom(2));

        assert_eq!(rule.id(), "captcha_3");
        let puzzle = rule.puzzle_payload().unwrap();
        assert_eq!(puzzle.expected_answer(), "B4T9S");
        assert_eq!(puzzle.image().path(), "captcha/3.png");
        assert!(rule.check("xxB4T9Sxx", &ctx));
        assert!(!rule.check("xxb4t9sxx", &ctx));
        assert!(!rule.check("TK58P", &ctx));
    }

    #[test]
    fn every_captcha_is_reachable() {
        let ids: Vec<String> = (0..4).map(|i| random_captcha(&mut FixedRandom(i)).id().to_string()).collect();
        assert_eq!(ids, ["captcha_1", "captcha_2", "captcha_3", "captcha_4"]);
    }

    #[test]
    fn shape_answer_ignores_case() {
        let ctx = RuleContext::default();
        let rule = random_shape_puzzle(&mut FixedRandom(1));

        assert_eq!(rule.id(), "puzzle_shape_triangle");
        assert!(rule.capabilities().contains(Capabilities::PUZZLE));
        assert!(rule.check("A-TRIANGLE!", &ctx));
        assert!(!rule.check("tri angle", &ctx));
    }

    #[test]
    fn triangle_count() {
        let ctx = RuleContext::default();
        let rule = count_the_triangles();
        assert!(rule.check("x13y", &ctx));
        assert!(!rule.check("1x3", &ctx));
        assert_eq!(rule.puzzle_payload().map(|p| p.expected_answer()), Some("13"));
    }
}
