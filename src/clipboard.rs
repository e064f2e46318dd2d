//! Copy-to-clipboard affordance for rules that carry a hint (emoji or symbols
//! that are awkward to type).

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

/// How long a button reads "Copied!" after a press.
pub const COPY_CONFIRMATION_MS: i64 = 1000;

/// Whatever the presentation layer writes to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str);
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    #[error("rule {0} is not on the board")]
    NotVisible(usize),
    #[error("rule {0} has nothing to copy")]
    NoHint(usize),
}

/// Per-card button state. A press while confirming restarts the deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyButton {
    confirmed_until: Option<NaiveDateTime>,
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, hint: &str, clipboard: &mut dyn Clipboard, now: NaiveDateTime) {
        clipboard.set_text(hint);
        self.confirmed_until = Some(now + Duration::milliseconds(COPY_CONFIRMATION_MS));
        tracing::debug!(hint, "copied to clipboard");
    }

    pub fn is_confirming(&self, now: NaiveDateTime) -> bool {
        self.confirmed_until.is_some_and(|until| now < until)
    }

    pub fn label(&self, now: NaiveDateTime) -> &'static str {
        if self.is_confirming(now) { "Copied!" } else { "Copy" }
    }
}
