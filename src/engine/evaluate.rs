//! Rule evaluation.
//!
//! `evaluate` is a plain map over the ordered rule list: no filtering, no
//! caching, no mutation of the rules or the context. It is cheap enough to run
//! on every keystroke.

use crate::{OrderedRule, Rule, RuleContext};

/// Outcome of one rule for one candidate.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub id: &'a str,
    pub order: usize,
    pub ok: bool,
    pub message: String,
    pub conditional: bool,
    pub rule: &'a Rule,
}

/// Evaluate every rule against `candidate`, preserving input order.
pub fn evaluate<'a>(rules: &[OrderedRule<'a>], candidate: &str, context: &RuleContext) -> Vec<Evaluation<'a>> {
    rules
        .iter()
        .map(|slot| Evaluation {
            id: slot.rule.id(),
            order: slot.order,
            ok: slot.rule.check(candidate, context),
            message: slot.rule.message(context),
            conditional: slot.conditional,
            rule: slot.rule,
        })
        .collect()
}

/// A pass is complete when there is at least one result and every result,
/// ordered or conditional, is satisfied.
pub fn is_complete(results: &[Evaluation<'_>]) -> bool {
    !results.is_empty() && results.iter().all(|r| r.ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::rules;

    fn level() -> Level {
        Level::new(
            9,
            vec![rules::min_length(5), rules::has_number(), rules::has_uppercase()],
            vec![rules::max_two_carets(), rules::not_start_with_number()],
        )
    }

    #[test]
    fn one_result_per_rule_with_contiguous_orders() {
        let level = level();
        let ctx = RuleContext::default();

        for candidate in ["", "Ab123", "^^^1", "🐹🐹🐹"] {
            let results = evaluate(&level.ordered_rules(), candidate, &ctx);
            assert_eq!(results.len(), 5);
            let orders: Vec<usize> = results.iter().map(|r| r.order).collect();
            assert_eq!(orders, vec![1, 2, 3, 4, 5]);
            assert_eq!(results.iter().filter(|r| r.conditional).count(), 2);
        }
    }

    #[test]
    fn results_follow_checks() {
        let level = level();
        let results = evaluate(&level.ordered_rules(), "ab123", &RuleContext::default());

        let ok: Vec<(&str, bool)> = results.iter().map(|r| (r.id, r.ok)).collect();
        assert_eq!(
            ok,
            vec![
                ("min_length_5", true),
                ("has_number", true),
                ("has_uppercase", false),
                ("max_two_carets", true),
                ("not_start_with_number", true),
            ]
        );
        assert_eq!(results[0].message, "At least 5 characters");
    }

    #[test]
    fn completion_needs_every_result() {
        let level = level();
        let ctx = RuleContext::default();

        assert!(!is_complete(&[]));
        assert!(!is_complete(&evaluate(&level.ordered_rules(), "ab123", &ctx)));
        assert!(is_complete(&evaluate(&level.ordered_rules(), "Ab123", &ctx)));
        assert!(!is_complete(&evaluate(&level.ordered_rules(), "Ab123^^^", &ctx)));
    }
}
