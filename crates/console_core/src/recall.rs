//! Raw-input recall log with ArrowUp/ArrowDown cursor navigation.
//!
//! The recall log is independent of the transcript: `clear` wipes the
//! transcript but recall entries survive for the lifetime of the session.

use serde::{Deserialize, Serialize};

/// What the live input field should show after one recall step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallStep {
    /// No state change; leave the input as-is.
    Unchanged,
    /// Browsing moved past the newest entry; restore the empty live input.
    LiveInput,
    /// Show this previously submitted line.
    Entry(String),
}

/// Ordered raw command strings plus a browse cursor.
///
/// The cursor is `None` while the user is typing live input and `Some(index)`
/// while browsing. Every submission appends and resets the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallLog {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl RecallLog {
    /// Recorded raw lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current browse cursor, if browsing.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Records a submitted line and resets the browse cursor.
    pub fn record(&mut self, raw: impl Into<String>) {
        self.entries.push(raw.into());
        self.cursor = None;
    }

    /// ArrowUp: steps toward older entries, saturating at the oldest.
    pub fn previous(&mut self) -> RecallStep {
        if self.entries.is_empty() {
            return RecallStep::Unchanged;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        RecallStep::Entry(self.entries[index].clone())
    }

    /// ArrowDown: steps toward newer entries; past the newest it returns to
    /// the live input.
    pub fn next(&mut self) -> RecallStep {
        let Some(index) = self.cursor else {
            return RecallStep::Unchanged;
        };
        let next = index + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return RecallStep::LiveInput;
        }
        self.cursor = Some(next);
        RecallStep::Entry(self.entries[next].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with(entries: &[&str]) -> RecallLog {
        let mut log = RecallLog::default();
        for entry in entries {
            log.record(*entry);
        }
        log
    }

    #[test]
    fn previous_on_empty_log_is_a_no_op() {
        let mut log = RecallLog::default();
        assert_eq!(log.previous(), RecallStep::Unchanged);
        assert_eq!(log.cursor(), None);
    }

    #[test]
    fn recall_walks_back_then_forward_then_returns_to_live_input() {
        let mut log = log_with(&["a", "b", "c"]);

        assert_eq!(log.previous(), RecallStep::Entry("c".to_string()));
        assert_eq!(log.cursor(), Some(2));
        assert_eq!(log.previous(), RecallStep::Entry("b".to_string()));
        assert_eq!(log.cursor(), Some(1));
        assert_eq!(log.next(), RecallStep::Entry("c".to_string()));
        assert_eq!(log.cursor(), Some(2));
        assert_eq!(log.next(), RecallStep::LiveInput);
        assert_eq!(log.cursor(), None);
    }

    #[test]
    fn previous_saturates_at_the_oldest_entry() {
        let mut log = log_with(&["a", "b"]);
        log.previous();
        log.previous();
        log.previous();
        assert_eq!(log.cursor(), Some(0));
        assert_eq!(log.previous(), RecallStep::Entry("a".to_string()));
    }

    #[test]
    fn next_without_browsing_is_a_no_op() {
        let mut log = log_with(&["a"]);
        assert_eq!(log.next(), RecallStep::Unchanged);
    }

    #[test]
    fn record_resets_the_cursor() {
        let mut log = log_with(&["a", "b"]);
        log.previous();
        log.record("c");
        assert_eq!(log.cursor(), None);
        assert_eq!(log.entries(), &["a", "b", "c"]);
    }
}
