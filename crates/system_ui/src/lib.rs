//! Shared UI primitive library for the portfolio site and its console overlays.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the site CSS layers. Overlays and sections compose
//! these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, Heading, Kbd, LayoutGap,
    MenuItem, MenuSurface, Stack, TerminalLine, TerminalPrompt, TerminalSurface,
    TerminalTranscript, Text, TextField, TextRole, TextTone, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, Heading, Kbd, LayoutGap,
        MenuItem, MenuSurface, Stack, TerminalLine, TerminalPrompt, TerminalSurface,
        TerminalTranscript, Text, TextField, TextRole, TextTone, WindowBody, WindowControlButton,
        WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
