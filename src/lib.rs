//! Rule evaluation and progressive disclosure for a password puzzle game.
//!
//! The player types a candidate password and the engine answers, on every
//! keystroke, which rules hold, which rules the player has reached so far and
//! in what order the presentation layer should show them.
//!
//! ```text
//! Level ── ordered_rules() ──▶ [OrderedRule]
//!                                   │
//! candidate + RuleContext ──▶ evaluate (engine/evaluate.rs)
//!                                   │
//!                                   v
//!                           [Evaluation] ──▶ Disclosure::advance / visible
//!                                                 (engine/disclosure.rs)
//!                                   │
//!                                   v
//!                         Board (engine/board.rs) ──▶ presentation
//! ```
//!
//! Most callers drive everything through a [`Session`].

#[macro_use]
mod macros;
mod api;
mod clipboard;
mod engine;
mod levels;
mod providers;
pub mod rules;

use std::borrow::Cow;

pub use api::{Session, SessionError, SessionOptions, Status};
pub use clipboard::{COPY_CONFIRMATION_MS, Clipboard, CopyButton, CopyError};
pub use engine::{Board, Card, Disclosure, Evaluation, evaluate, is_complete};
pub use levels::{Level, LevelError, LevelId, build_level, level_ids};
pub use providers::{Clock, FixedClock, FixedRandom, RandomSource, SeededRandom, SystemClock, ThreadRandom};

// --- Context -----------------------------------------------------------------

/// Values locked once per session and handed to every rule in a pass.
///
/// Rules that depend on the time of day read it from here, never from the
/// system clock, so a pass is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleContext {
    pub minute: Option<u32>,
    pub hour: Option<u32>,
    pub target_number: Option<u32>,
}

// --- Rule --------------------------------------------------------------------

bitflags::bitflags! {
    /// Optional capabilities a rule was built with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Carries a `should_show` predicate.
        const VISIBILITY_GATED = 1 << 0;
        /// Backed by an image and an expected answer.
        const PUZZLE           = 1 << 1;
        /// Offers a literal string for one-tap copy.
        const COPYABLE_HINT    = 1 << 2;
        /// Check or message reads the [`RuleContext`].
        const CONTEXTUAL       = 1 << 3;
    }
}

pub(crate) type CheckFn = Box<dyn Fn(&str, &RuleContext) -> bool + Send + Sync>;
pub(crate) type VisibilityFn = Box<dyn Fn(&str) -> bool + Send + Sync>;
pub(crate) type MessageFn = Box<dyn Fn(&RuleContext) -> String + Send + Sync>;

enum Message {
    Fixed(Cow<'static, str>),
    Contextual(MessageFn),
}

/// Opaque reference to an image the presentation layer knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(&'static str);

impl AssetHandle {
    pub const fn new(path: &'static str) -> Self {
        AssetHandle(path)
    }

    pub fn path(&self) -> &'static str {
        self.0
    }
}

/// How a puzzle answer is looked up in the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMatch {
    Exact,
    /// The candidate is lowercased before the lookup; the answer must already be lowercase.
    IgnoreCase,
}

/// Image riddle payload: the picture shown to the player and the literal they
/// must embed in the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    image: AssetHandle,
    answer: &'static str,
    matching: AnswerMatch,
}

impl Puzzle {
    pub fn new(image: AssetHandle, answer: &'static str) -> Self {
        Puzzle { image, answer, matching: AnswerMatch::Exact }
    }

    pub fn ignoring_case(mut self) -> Self {
        self.matching = AnswerMatch::IgnoreCase;
        self
    }

    pub fn image(&self) -> AssetHandle {
        self.image
    }

    pub fn expected_answer(&self) -> &'static str {
        self.answer
    }

    pub fn is_answered_by(&self, candidate: &str) -> bool {
        match self.matching {
            AnswerMatch::Exact => candidate.contains(self.answer),
            AnswerMatch::IgnoreCase => candidate.to_lowercase().contains(self.answer),
        }
    }
}

/// A named predicate over the candidate password.
///
/// The base capability is `check` + `message`. Visibility gates, puzzle
/// payloads and copy hints are attached at construction and reported through
/// [`Rule::capabilities`].
pub struct Rule {
    id: Cow<'static, str>,
    message: Message,
    check: CheckFn,
    visibility: Option<VisibilityFn>,
    puzzle: Option<Puzzle>,
    copy_hint: Option<&'static str>,
    capabilities: Capabilities,
}

impl Rule {
    /// Rule with a constant message.
    pub fn new<C>(id: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>, check: C) -> Self
    where
        C: Fn(&str, &RuleContext) -> bool + Send + Sync + 'static,
    {
        Rule {
            id: id.into(),
            message: Message::Fixed(message.into()),
            check: Box::new(check),
            visibility: None,
            puzzle: None,
            copy_hint: None,
            capabilities: Capabilities::empty(),
        }
    }

    /// Rule whose message is rendered from the context.
    pub fn contextual<M, C>(id: impl Into<Cow<'static, str>>, message: M, check: C) -> Self
    where
        M: Fn(&RuleContext) -> String + Send + Sync + 'static,
        C: Fn(&str, &RuleContext) -> bool + Send + Sync + 'static,
    {
        Rule {
            id: id.into(),
            message: Message::Contextual(Box::new(message)),
            check: Box::new(check),
            visibility: None,
            puzzle: None,
            copy_hint: None,
            capabilities: Capabilities::CONTEXTUAL,
        }
    }

    /// Image riddle. The check is derived from the payload.
    pub fn puzzle(id: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>, puzzle: Puzzle) -> Self {
        let expected = puzzle.clone();
        let mut rule = Rule::new(id, message, move |candidate, _| expected.is_answered_by(candidate));
        rule.puzzle = Some(puzzle);
        rule.capabilities |= Capabilities::PUZZLE;
        rule
    }

    pub fn with_visibility<V>(mut self, visibility: V) -> Self
    where
        V: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.visibility = Some(Box::new(visibility));
        self.capabilities |= Capabilities::VISIBILITY_GATED;
        self
    }

    /// Attach a copyable literal. Empty hints are ignored.
    pub fn with_copy_hint(mut self, hint: &'static str) -> Self {
        if !hint.is_empty() {
            self.copy_hint = Some(hint);
            self.capabilities |= Capabilities::COPYABLE_HINT;
        }
        self
    }

    /// Mark a rule whose check reads the context even though its message is constant.
    pub fn reading_context(mut self) -> Self {
        self.capabilities |= Capabilities::CONTEXTUAL;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message(&self, context: &RuleContext) -> String {
        match &self.message {
            Message::Fixed(text) => text.to_string(),
            Message::Contextual(render) => render(context),
        }
    }

    pub fn check(&self, candidate: &str, context: &RuleContext) -> bool {
        (self.check)(candidate, context)
    }

    /// `None` when the rule has no visibility gate.
    pub fn should_show(&self, candidate: &str) -> Option<bool> {
        self.visibility.as_ref().map(|gate| gate(candidate))
    }

    pub fn puzzle_payload(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn copy_hint(&self) -> Option<&'static str> {
        self.copy_hint
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("check", &"<function>")
            .field("puzzle", &self.puzzle)
            .field("copy_hint", &self.copy_hint)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// A rule placed in a level's evaluation list.
///
/// `order` is 1-based and continuous across ordered and conditional rules.
#[derive(Debug, Clone, Copy)]
pub struct OrderedRule<'a> {
    pub order: usize,
    pub conditional: bool,
    pub rule: &'a Rule,
}
