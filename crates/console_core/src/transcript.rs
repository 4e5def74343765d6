//! Append-only transcript log and renderer-agnostic display payloads.

use serde::{Deserialize, Serialize};

/// Kind tag for one transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Echo of a submitted command line.
    Command,
    /// Output produced by a command handler.
    Output,
}

/// Style hint for one line inside a structured output block.
///
/// The console engine never emits markup; the presentation layer maps these
/// hints onto its own tone tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    /// Default body line.
    Plain,
    /// Highlighted line.
    Accent,
    /// De-emphasized line.
    Muted,
    /// Positive/confirmation line.
    Success,
    /// Cautionary line.
    Warning,
    /// Section heading or rule line.
    Heading,
}

/// One line of a structured output block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLine {
    /// Optional leading label rendered distinctly from the line text.
    pub label: Option<String>,
    /// Line text.
    pub text: String,
    /// Style hint.
    pub style: LineStyle,
}

impl BlockLine {
    /// Plain line without a label.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Plain)
    }

    /// Unlabeled line with an explicit style.
    pub fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            label: None,
            text: text.into(),
            style,
        }
    }

    /// Labeled line, used for field-style rows such as `neofetch` output.
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
            style: LineStyle::Plain,
        }
    }
}

/// Renderer-agnostic payload for one transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DisplayPayload {
    /// Single plain-text line.
    Text {
        /// Line text.
        text: String,
    },
    /// Multi-line structured block.
    Block {
        /// Lines in display order.
        lines: Vec<BlockLine>,
    },
}

impl DisplayPayload {
    /// Single-line text payload.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Structured block payload.
    pub fn block(lines: Vec<BlockLine>) -> Self {
        Self::Block { lines }
    }

    /// Returns the text when this payload is a single line.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Block { .. } => None,
        }
    }
}

/// One transcript entry. Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Kind tag.
    pub kind: EntryKind,
    /// Display payload.
    pub payload: DisplayPayload,
}

impl HistoryEntry {
    /// Command-echo entry for a submitted line.
    pub fn command(line: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Command,
            payload: DisplayPayload::text(line),
        }
    }

    /// Output entry with an arbitrary payload.
    pub fn output(payload: DisplayPayload) -> Self {
        Self {
            kind: EntryKind::Output,
            payload,
        }
    }

    /// Single-line text output entry.
    pub fn output_text(text: impl Into<String>) -> Self {
        Self::output(DisplayPayload::text(text))
    }

    /// Structured block output entry.
    pub fn output_block(lines: Vec<BlockLine>) -> Self {
        Self::output(DisplayPayload::block(lines))
    }
}

/// Append-only, chronologically ordered transcript for one console session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<HistoryEntry>,
}

impl Transcript {
    /// Entries in submission/response order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends one entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Appends a batch of entries, preserving their order.
    pub fn extend(&mut self, entries: Vec<HistoryEntry>) {
        self.entries.extend(entries);
    }

    /// Empties the underlying log. Only the `clear` command calls this.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_preserves_append_order() {
        let mut transcript = Transcript::default();
        transcript.push(HistoryEntry::command("$ skills"));
        transcript.push(HistoryEntry::output_text("done"));
        let kinds: Vec<EntryKind> = transcript.entries().iter().map(|entry| entry.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Command, EntryKind::Output]);
    }

    #[test]
    fn clear_empties_the_underlying_log() {
        let mut transcript = Transcript::default();
        transcript.push(HistoryEntry::output_text("one"));
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn block_payload_is_not_text() {
        let payload = DisplayPayload::block(vec![BlockLine::plain("row")]);
        assert!(payload.as_text().is_none());
        assert_eq!(DisplayPayload::text("row").as_text(), Some("row"));
    }
}
