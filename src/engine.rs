//! Evaluation and disclosure engine.
//!
//! A keystroke runs through three stages:
//!
//! ```text
//! [OrderedRule] + candidate + RuleContext
//!        │
//!        v
//!   evaluate (evaluate.rs)        pure; one Evaluation per rule, input order kept
//!        │
//!        v
//!   Disclosure::advance           stateful; grows the unlock set along the
//!   (disclosure.rs)               chain of consecutively satisfied rules
//!        │
//!        v
//!   Disclosure::visible           visibility filter + display sort
//!        │
//!        v
//!   Board::assemble (board.rs)    completion / failure pseudo-cards on top
//! ```
//!
//! ## Responsibilities by module
//!
//! - `evaluate.rs`: the evaluator and the completion predicate.
//! - `disclosure.rs`: the unlock set, the one-step lookahead walk, visibility
//!   and ordering of the displayed list.
//! - `board.rs`: the presentation-facing list of cards.
//!
//! Only `Disclosure` holds state. Everything else is recomputed every pass,
//! since messages and checks may depend on the context.

#[path = "engine/board.rs"]
mod board;
#[path = "engine/disclosure.rs"]
mod disclosure;
#[path = "engine/evaluate.rs"]
mod evaluate;

pub use board::{Board, Card};
pub use disclosure::Disclosure;
pub use evaluate::{Evaluation, evaluate, is_complete};
