//! Progressive disclosure.
//!
//! Ordered rules form a chain. A rule becomes visible once every rule before it
//! has been satisfied in the same pass, and stays visible afterwards even if
//! the player later breaks an earlier rule: the unlock set only grows.
//!
//! ## The walk
//!
//! ```text
//! orders:   1    2    3    4    5
//! ok:       ✓    ✓    ✗    ✓    ✓
//!           │    │    │    │
//! highest:  2    3    3    3    (stop: 5 > 3 + 1)
//! ```
//!
//! The walk inspects at most one rule past the current frontier. Once the
//! chain breaks, later rules no longer move the frontier; they are only
//! scanned to find where the lookahead ends.
//!
//! Conditional rules never take part in the chain. They are traps: visible
//! exactly when their gate fires.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::evaluate::Evaluation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    unlocked: BTreeSet<usize>,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}

impl Disclosure {
    /// Fresh state: only the first rule is unlocked.
    pub fn new() -> Self {
        Disclosure { unlocked: BTreeSet::from([1]) }
    }

    /// Fold one evaluation pass into the unlock set. Returns the frontier
    /// reached by this pass.
    pub fn advance(&mut self, results: &[Evaluation<'_>]) -> usize {
        let highest = chain_frontier(results);
        let before = self.unlocked.len();
        self.unlocked.extend(1..=highest);

        if self.unlocked.len() != before {
            tracing::debug!(frontier = highest, unlocked = self.unlocked.len(), "unlock set grew");
        }

        highest
    }

    pub fn is_unlocked(&self, order: usize) -> bool {
        self.unlocked.contains(&order)
    }

    /// Unlocked orders, ascending.
    pub fn unlocked(&self) -> impl Iterator<Item = usize> + '_ {
        self.unlocked.iter().copied()
    }

    pub fn reset(&mut self) {
        *self = Disclosure::new();
    }

    pub fn is_visible(&self, result: &Evaluation<'_>, candidate: &str) -> bool {
        match (result.conditional, result.rule.should_show(candidate)) {
            (true, Some(shown)) => shown,
            (true, None) => false,
            (false, Some(shown)) => self.is_unlocked(result.order) && shown,
            (false, None) => self.is_unlocked(result.order),
        }
    }

    /// Visible results in display order: traps first, then unsatisfied before
    /// satisfied, then newest (highest order) first.
    pub fn visible<'a>(&self, results: &[Evaluation<'a>], candidate: &str) -> Vec<Evaluation<'a>> {
        let mut shown: Vec<Evaluation<'a>> =
            results.iter().filter(|r| self.is_visible(r, candidate)).cloned().collect();
        shown.sort_by(display_order);
        shown
    }
}

/// Highest order reachable by the chain of consecutively satisfied ordered
/// rules, plus one step of lookahead.
fn chain_frontier(results: &[Evaluation<'_>]) -> usize {
    let mut ordered: Vec<&Evaluation<'_>> = results.iter().filter(|r| !r.conditional).collect();
    ordered.sort_by_key(|r| r.order);

    let mut chain_passed = true;
    let mut highest = 1;

    for result in ordered {
        if result.order > highest + 1 {
            break;
        }
        if chain_passed && result.ok {
            highest = result.order + 1;
        } else {
            chain_passed = false;
        }
    }

    highest
}

fn display_order(a: &Evaluation<'_>, b: &Evaluation<'_>) -> Ordering {
    b.conditional.cmp(&a.conditional).then(a.ok.cmp(&b.ok)).then(b.order.cmp(&a.order))
}
