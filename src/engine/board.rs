//! Presentation-facing output of a pass.

use super::evaluate::Evaluation;

/// One entry of the rendered list.
#[derive(Debug, Clone)]
pub enum Card<'a> {
    /// The protected item was lost; offers a restart.
    Failure,
    /// Every rule holds; offers to generate the password.
    Complete,
    Rule(Evaluation<'a>),
}

impl Card<'_> {
    /// Stable key for list diffing in the presentation layer.
    pub fn key(&self) -> String {
        match self {
            Card::Failure => "__failed__".to_string(),
            Card::Complete => "__complete__".to_string(),
            Card::Rule(result) => format!("rule_{}", result.order),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Board<'a> {
    pub cards: Vec<Card<'a>>,
    /// Every rule (ordered and conditional) holds for the current candidate.
    pub completed: bool,
    pub failed: bool,
    /// Unlocked orders, ascending.
    pub unlocked: Vec<usize>,
}

impl<'a> Board<'a> {
    /// Put the pseudo-cards in front of the visible rules. A failure card hides
    /// the completion card; the completion card disappears once the password
    /// has been generated.
    pub fn assemble(
        visible: Vec<Evaluation<'a>>,
        completed: bool,
        failed: bool,
        finalized: bool,
        unlocked: Vec<usize>,
    ) -> Self {
        let mut cards = Vec::with_capacity(visible.len() + 1);
        if failed {
            cards.push(Card::Failure);
        } else if completed && !finalized {
            cards.push(Card::Complete);
        }
        cards.extend(visible.into_iter().map(Card::Rule));

        Board { cards, completed, failed, unlocked }
    }

    /// The rule cards alone, in display order.
    pub fn rules(&self) -> impl Iterator<Item = &Evaluation<'a>> {
        self.cards.iter().filter_map(|card| match card {
            Card::Rule(result) => Some(result),
            _ => None,
        })
    }

    pub fn shows_order(&self, order: usize) -> bool {
        self.rules().any(|r| r.order == order)
    }
}
