//! Headless console engine for the portfolio's terminal and command palette.
//!
//! Everything here is plain data and synchronous state transitions: no
//! timers, no DOM, no Leptos. The overlay crates own scheduling and
//! rendering; they drive this engine and execute the pacing delays and
//! side-effect requests it returns. That split keeps the full command
//! vocabulary and both shells' interaction rules testable on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;
pub mod console;
pub mod palette;
pub mod recall;
pub mod registry;
pub mod transcript;

pub use console::{
    CommandContext, CommandEnv, ConsoleEffect, ConsoleReply, DelayedEntries, SubmitOutcome,
    TerminalConsole, TerminalHandler, OPEN_URL_DELAY_MS, OUTPUT_DELAY_MS, SUDO_DELAY_MS,
    WELCOME_DELAY_MS,
};
pub use palette::{navigation_registry, PaletteState, SectionJump};
pub use recall::{RecallLog, RecallStep};
pub use registry::{Registry, RegistryEntry};
pub use transcript::{
    BlockLine, DisplayPayload, EntryKind, HistoryEntry, LineStyle, Transcript,
};
