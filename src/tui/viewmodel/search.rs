//! Debounced free-text search input.
//!
//! Keystrokes edit a pending buffer and arm a deadline; the buffer is
//! only applied to the filter after a quiet period, so rapid typing
//! coalesces into a single re-render instead of one per keystroke. Each
//! keystroke re-arms the deadline (a cancellable timer, not a queue).

use std::time::{Duration, Instant};

/// Search entry state.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Whether search entry mode is active
    pub active: bool,
    /// The buffer being edited
    pub buffer: String,
    /// The query restored on cancel
    previous: String,
    /// Pending apply deadline, armed by keystrokes
    deadline: Option<Instant>,
    /// Quiet period
    debounce: Duration,
}

impl SearchInput {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            ..Default::default()
        }
    }

    /// Enter search mode, seeding the buffer with the applied query.
    pub fn start(&mut self, applied: &str) {
        self.active = true;
        self.buffer = applied.to_string();
        self.previous = applied.to_string();
        self.deadline = None;
    }

    /// Append a character and re-arm the deadline.
    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
        self.arm();
    }

    /// Remove the last character and re-arm the deadline.
    pub fn pop_char(&mut self) {
        self.buffer.pop();
        self.arm();
    }

    /// Leave search mode keeping the buffer; returns the query to apply
    /// immediately (Enter skips the debounce).
    pub fn commit(&mut self) -> String {
        self.active = false;
        self.deadline = None;
        self.buffer.clone()
    }

    /// Leave search mode discarding edits; returns the query to restore.
    pub fn cancel(&mut self) -> String {
        self.active = false;
        self.deadline = None;
        self.buffer = self.previous.clone();
        self.previous.clone()
    }

    /// Take the pending query if the quiet period has elapsed.
    ///
    /// Called from the tick handler; returns `Some` at most once per
    /// armed deadline.
    pub fn take_if_due(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.buffer.clone())
            }
            _ => None,
        }
    }

    /// Whether an apply is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.debounce);
    }
}
