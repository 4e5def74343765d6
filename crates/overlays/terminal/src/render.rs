//! Transcript entry rendering helpers.

use console_core::{BlockLine, DisplayPayload, EntryKind, HistoryEntry, LineStyle};
use leptos::*;
use system_ui::prelude::*;

/// Maps an engine style hint onto the primitive tone token.
pub(crate) fn line_tone(style: LineStyle) -> TextTone {
    match style {
        LineStyle::Plain => TextTone::Primary,
        LineStyle::Accent | LineStyle::Heading => TextTone::Accent,
        LineStyle::Muted => TextTone::Secondary,
        LineStyle::Success => TextTone::Success,
        LineStyle::Warning => TextTone::Warning,
    }
}

pub(crate) fn render_block_line(line: &BlockLine) -> View {
    let tone = line_tone(line.style);
    let label = line.label.clone();
    let text = line.text.clone();
    view! {
        <TerminalLine tone=tone>
            {label.map(|label| view! {
                <Text role=TextRole::Label tone=TextTone::Accent ui_slot="field-label">{label}</Text>
            })}
            <Text role=TextRole::Code tone=tone>{text}</Text>
        </TerminalLine>
    }
    .into_view()
}

pub(crate) fn render_entry(entry: &HistoryEntry) -> View {
    match (&entry.kind, &entry.payload) {
        (EntryKind::Command, payload) => {
            let echo = payload.as_text().unwrap_or_default().to_string();
            view! {
                <TerminalLine tone=TextTone::Accent layout_class="terminal-echo">
                    <Text role=TextRole::Code tone=TextTone::Accent>{echo}</Text>
                </TerminalLine>
            }
            .into_view()
        }
        (EntryKind::Output, DisplayPayload::Text { text }) => {
            let text = text.clone();
            view! {
                <TerminalLine>
                    <Text role=TextRole::Code>{text}</Text>
                </TerminalLine>
            }
            .into_view()
        }
        (EntryKind::Output, DisplayPayload::Block { lines }) => lines
            .iter()
            .map(render_block_line)
            .collect::<Vec<_>>()
            .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_accent_share_the_accent_tone() {
        assert_eq!(line_tone(LineStyle::Heading), TextTone::Accent);
        assert_eq!(line_tone(LineStyle::Accent), TextTone::Accent);
    }

    #[test]
    fn muted_maps_to_secondary() {
        assert_eq!(line_tone(LineStyle::Muted), TextTone::Secondary);
        assert_eq!(line_tone(LineStyle::Plain), TextTone::Primary);
    }
}
