//! Temporary status message display.

use std::time::{Duration, Instant};

/// Manages transient status messages with auto-clear.
///
/// Used for non-fatal notifications: export results, clipboard copies,
/// selection-capacity rejections. Persistent error banners are separate
/// state; this is only for messages that expire on their own.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status manager that clears messages after `duration`.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    /// Set a status message.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    /// Clear the status message.
    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Get the current message, applying auto-clear if expired.
    pub fn message(&mut self) -> Option<&str> {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.message = None;
                self.set_at = None;
            }
        }
        self.message.as_deref()
    }

    /// Get the current message without mutating state.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_set_and_clear() {
        let mut status = StatusMessage::new();
        assert!(!status.has_message());

        status.set("Copied share string");
        assert_eq!(status.peek(), Some("Copied share string"));

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(30));
        status.set("transient");
        assert!(status.message().is_some());

        thread::sleep(Duration::from_millis(40));
        assert!(status.message().is_none());
    }

    #[test]
    fn test_no_auto_clear_by_default() {
        let mut status = StatusMessage::new();
        status.set("sticky");
        thread::sleep(Duration::from_millis(10));
        assert!(status.message().is_some());
    }
}
