use crate::clipboard::CopyError;
use crate::engine::{self, Board, Disclosure, Evaluation};
use crate::levels::Level;
use crate::providers::{Clock, RandomSource};
use crate::rules::count_occurrences;
use crate::RuleContext;
use thiserror::Error;

/// Options that affect how a session reacts to input.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Let an empty candidate advance the unlock chain. Off by default: a
    /// cleared field never unlocks anything, even if the first rules would
    /// accept an empty string.
    pub empty_candidate_unlocks: bool,
}

/// Where a session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// The protected item was removed. Terminal until [`Session::restart`].
    Failed,
    /// The player generated the password; holds the accepted string.
    Finalized(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("the protected item was lost; restart the level")]
    Failed,
    #[error("the password has already been generated")]
    Finalized,
    #[error("not every rule is satisfied yet")]
    NotComplete,
}

/// One play-through of a level.
///
/// The context (hour, minute, target number) is locked when the session
/// starts and survives restarts; the candidate, unlock set and failure flag
/// do not.
#[derive(Debug)]
pub struct Session {
    level: Level,
    context: RuleContext,
    options: SessionOptions,
    candidate: String,
    disclosure: Disclosure,
    status: Status,
}

impl Session {
    /// Start a session, locking its context from `clock` and `random`.
    pub fn start(level: Level, clock: &dyn Clock, random: &mut dyn RandomSource) -> Self {
        Session::with_context(level, RuleContext::locked(clock, random), SessionOptions::default())
    }

    pub fn with_context(level: Level, context: RuleContext, options: SessionOptions) -> Self {
        tracing::info!(level = level.id(), ?context, "session started");
        Session { level, context, options, candidate: String::new(), disclosure: Disclosure::new(), status: Status::Playing }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn context(&self) -> &RuleContext {
        &self.context
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    /// Replace the candidate and run one pass.
    ///
    /// Rejected once the session failed or was finalized.
    pub fn input(&mut self, candidate: impl Into<String>) -> Result<Board<'_>, SessionError> {
        match self.status {
            Status::Playing => {}
            Status::Failed => return Err(SessionError::Failed),
            Status::Finalized(_) => return Err(SessionError::Finalized),
        }

        let candidate = candidate.into();
        if let Some(item) = self.level.protected_item() {
            if count_occurrences(&self.candidate, item) >= 1 && count_occurrences(&candidate, item) == 0 {
                tracing::info!(level = self.level.id(), item, "protected item removed; session failed");
                self.status = Status::Failed;
            }
        }
        self.candidate = candidate;

        if !self.candidate.is_empty() || self.options.empty_candidate_unlocks {
            let results = engine::evaluate(&self.level.ordered_rules(), &self.candidate, &self.context);
            self.disclosure.advance(&results);
        }

        Ok(self.board())
    }

    /// Raw results for the current candidate, unfiltered and in order.
    pub fn evaluate(&self) -> Vec<Evaluation<'_>> {
        engine::evaluate(&self.level.ordered_rules(), &self.candidate, &self.context)
    }

    pub fn is_complete(&self) -> bool {
        engine::is_complete(&self.evaluate())
    }

    /// The current board. Does not change any state.
    pub fn board(&self) -> Board<'_> {
        let results = self.evaluate();
        let completed = engine::is_complete(&results);
        let visible = self.disclosure.visible(&results, &self.candidate);

        Board::assemble(
            visible,
            completed,
            self.status == Status::Failed,
            matches!(self.status, Status::Finalized(_)),
            self.disclosure.unlocked().collect(),
        )
    }

    /// Accept the current candidate as the generated password.
    pub fn finalize(&mut self) -> Result<&str, SessionError> {
        match self.status {
            Status::Playing => {}
            Status::Failed => return Err(SessionError::Failed),
            Status::Finalized(_) => return Err(SessionError::Finalized),
        }
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }

        tracing::info!(level = self.level.id(), "password generated");
        self.status = Status::Finalized(self.candidate.clone());
        Ok(self.candidate.as_str())
    }

    /// Back to an empty candidate with only the first rule unlocked.
    pub fn restart(&mut self) {
        tracing::info!(level = self.level.id(), "session restarted");
        self.candidate.clear();
        self.disclosure.reset();
        self.status = Status::Playing;
    }

    /// The copy hint of the rule at `order`, if that rule is on the board.
    pub fn copy_hint(&self, order: usize) -> Result<&'static str, CopyError> {
        let board = self.board();
        let result = board.rules().find(|r| r.order == order).ok_or(CopyError::NotVisible(order))?;
        result.rule.copy_hint().ok_or(CopyError::NoHint(order))
    }
}
