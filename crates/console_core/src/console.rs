//! Terminal console session: transcript + recall log + command dispatch.

use portfolio_content::PortfolioContent;

use crate::commands;
use crate::recall::RecallLog;
use crate::registry::Registry;
use crate::transcript::{BlockLine, HistoryEntry, LineStyle, Transcript};

/// Pacing delay before the `neofetch` and `skills` blocks appear.
pub const OUTPUT_DELAY_MS: u32 = 100;
/// Pacing delay before the `sudo projects` listing appears.
pub const SUDO_DELAY_MS: u32 = 300;
/// Delay before `github`/`linkedin` request external navigation.
pub const OPEN_URL_DELAY_MS: u32 = 500;
/// Delay before the one-time welcome banner is appended after first open.
pub const WELCOME_DELAY_MS: u32 = 100;

/// Ambient inputs injected into command handlers so the engine stays
/// deterministic under test. Browser adapters supply real values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandEnv {
    /// Human-readable local date/time string for the `date` command.
    pub now_local: String,
    /// Selector for the `quote` pool, already randomized by the caller.
    pub quote_seed: usize,
}

/// Read-only inputs for one handler invocation.
pub struct CommandContext<'a> {
    /// Whitespace-split arguments after the leading token.
    pub args: &'a [String],
    /// Injected content collaborators.
    pub content: &'a PortfolioContent,
    /// Ambient environment.
    pub env: &'a CommandEnv,
}

/// Transcript entries scheduled to land after a cosmetic pacing delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedEntries {
    /// Delay in milliseconds.
    pub after_ms: u32,
    /// Entries to append when the delay elapses.
    pub entries: Vec<HistoryEntry>,
}

/// Side effect requested by a handler, executed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEffect {
    /// Open an external URL in a new browsing context after a pacing delay.
    OpenUrl {
        /// Absolute URL.
        url: String,
        /// Delay in milliseconds.
        after_ms: u32,
    },
    /// Flip the site-wide dark/light theme.
    ToggleTheme,
}

/// Complete result of dispatching one command line.
///
/// Handlers are pure: pacing and navigation are requests carried here, so
/// the engine itself never blocks or touches the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleReply {
    /// Entries appended to the transcript immediately.
    pub entries: Vec<HistoryEntry>,
    /// Entries appended after their pacing delays elapse.
    pub delayed: Vec<DelayedEntries>,
    /// Optional side-effect request.
    pub effect: Option<ConsoleEffect>,
}

impl ConsoleReply {
    /// Reply with one immediate plain-text output line.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::output_text(text)],
            ..Self::default()
        }
    }

    /// Reply whose only output is a block deferred by `after_ms`.
    pub fn delayed_block(after_ms: u32, lines: Vec<BlockLine>) -> Self {
        Self {
            delayed: vec![DelayedEntries {
                after_ms,
                entries: vec![HistoryEntry::output_block(lines)],
            }],
            ..Self::default()
        }
    }
}

/// Scheduling work the shell must perform after a submit: pacing timers and
/// effect execution. Returned separately so `submit` stays synchronous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Deferred transcript batches.
    pub delayed: Vec<DelayedEntries>,
    /// Optional side-effect request.
    pub effect: Option<ConsoleEffect>,
}

/// Handler signature for terminal registry entries.
pub type TerminalHandler = fn(&CommandContext<'_>) -> ConsoleReply;

/// One in-page terminal session: transcript, recall log, and the fixed
/// command registry, parameterized on injected content.
///
/// History survives close/reopen of the window; it lives as long as this
/// value does and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConsole {
    transcript: Transcript,
    recall: RecallLog,
    commands: Registry<TerminalHandler>,
    content: PortfolioContent,
}

impl TerminalConsole {
    /// Creates a session over the given content set.
    pub fn new(content: PortfolioContent) -> Self {
        Self {
            transcript: Transcript::default(),
            recall: RecallLog::default(),
            commands: commands::builtin_registry(),
            content,
        }
    }

    /// The visible transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The recall log (read-only view).
    pub fn recall(&self) -> &RecallLog {
        &self.recall
    }

    /// Mutable recall access for ArrowUp/ArrowDown navigation.
    pub fn recall_mut(&mut self) -> &mut RecallLog {
        &mut self.recall
    }

    /// The injected content set.
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// `user@host` label for the prompt row and window title.
    pub fn prompt_label(&self) -> String {
        self.content.profile.prompt_label()
    }

    /// Appends the one-time welcome banner. The caller guards the
    /// once-per-page-lifetime rule.
    pub fn push_welcome_banner(&mut self) {
        let title = format!("Welcome to {}'s Terminal", self.content.profile.name);
        self.transcript.push(HistoryEntry::output_block(vec![
            BlockLine::styled("╭─────────────────────────────────────────────╮", LineStyle::Heading),
            BlockLine::styled(format!("│  {title}  │"), LineStyle::Heading),
            BlockLine::styled("╰─────────────────────────────────────────────╯", LineStyle::Heading),
            BlockLine::styled("Type 'help' to see available commands", LineStyle::Plain),
            BlockLine::styled("Use Up/Down arrows to navigate command history", LineStyle::Muted),
        ]));
    }

    /// Appends a batch of previously scheduled delayed entries.
    pub fn append_delayed(&mut self, entries: Vec<HistoryEntry>) {
        self.transcript.extend(entries);
    }

    /// Submits one raw input line.
    ///
    /// Whitespace-only input is ignored entirely: no transcript entry, no
    /// recall entry, and `None` is returned. Otherwise the command echo and
    /// recall append always happen, the leading token is dispatched
    /// case-insensitively, and immediate output lands in the transcript
    /// before this returns.
    pub fn submit(&mut self, raw: &str, env: &CommandEnv) -> Option<SubmitOutcome> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.transcript.push(HistoryEntry::command(format!("$ {trimmed}")));
        self.recall.record(trimmed);

        let mut parts = trimmed.split_whitespace();
        let token = parts.next().unwrap_or("");
        let args: Vec<String> = parts.map(str::to_string).collect();

        // `clear` needs the transcript itself, so it bypasses the registry.
        if token.eq_ignore_ascii_case("clear") {
            self.transcript.clear();
            return Some(SubmitOutcome::default());
        }

        let reply = match self.commands.find(token) {
            Some(entry) => (entry.action)(&CommandContext {
                args: &args,
                content: &self.content,
                env,
            }),
            None => ConsoleReply::text(format!(
                "Command not found: {token}. Type 'help' for available commands."
            )),
        };

        self.transcript.extend(reply.entries);
        Some(SubmitOutcome {
            delayed: reply.delayed,
            effect: reply.effect,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transcript::{DisplayPayload, EntryKind};

    fn console() -> TerminalConsole {
        TerminalConsole::new(PortfolioContent::standard())
    }

    fn env() -> CommandEnv {
        CommandEnv {
            now_local: "Friday, January 3, 2025, 10:15:00 AM".to_string(),
            quote_seed: 0,
        }
    }

    fn output_texts(console: &TerminalConsole) -> Vec<String> {
        console
            .transcript()
            .entries()
            .iter()
            .filter(|entry| entry.kind == EntryKind::Output)
            .filter_map(|entry| entry.payload.as_text().map(str::to_string))
            .collect()
    }

    #[test]
    fn empty_submission_is_a_no_op() {
        let mut console = console();
        assert!(console.submit("", &env()).is_none());
        assert!(console.submit("   ", &env()).is_none());
        assert!(console.transcript().is_empty());
        assert!(console.recall().entries().is_empty());
    }

    #[test]
    fn submissions_append_in_order() {
        let mut console = console();
        console.submit("skills", &env());
        console.submit("ls", &env());

        assert_eq!(console.recall().entries(), &["skills", "ls"]);
        let echoes: Vec<&str> = console
            .transcript()
            .entries()
            .iter()
            .filter(|entry| entry.kind == EntryKind::Command)
            .filter_map(|entry| entry.payload.as_text())
            .collect();
        assert_eq!(echoes, vec!["$ skills", "$ ls"]);
    }

    #[test]
    fn unknown_command_reports_not_found_and_is_recalled() {
        let mut console = console();
        console.submit("zzzz", &env());

        assert_eq!(
            output_texts(&console),
            vec!["Command not found: zzzz. Type 'help' for available commands.".to_string()]
        );
        assert_eq!(console.recall().entries(), &["zzzz"]);
    }

    #[test]
    fn dispatch_is_case_insensitive_on_the_leading_token() {
        let mut console = console();
        console.submit("WHOAMI", &env());
        assert_eq!(console.transcript().len(), 2);
        assert!(matches!(
            console.transcript().entries()[1].payload,
            DisplayPayload::Block { .. }
        ));
    }

    #[test]
    fn clear_empties_transcript_but_not_recall_log() {
        let mut console = console();
        console.submit("ls", &env());
        console.submit("clear", &env());

        assert_eq!(console.transcript().len(), 0);
        assert_eq!(console.recall().entries().last().map(String::as_str), Some("clear"));
    }

    #[test]
    fn clear_is_case_insensitive() {
        let mut console = console();
        console.submit("ls", &env());
        console.submit("CLEAR", &env());
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn neofetch_defers_its_block_behind_a_pacing_delay() {
        let mut console = console();
        let outcome = console.submit("neofetch", &env()).expect("outcome");

        // Only the command echo is visible until the timer fires.
        assert_eq!(console.transcript().len(), 1);
        assert_eq!(outcome.delayed.len(), 1);
        assert_eq!(outcome.delayed[0].after_ms, OUTPUT_DELAY_MS);

        let entries = outcome.delayed[0].entries.clone();
        console.append_delayed(entries);
        assert_eq!(console.transcript().len(), 2);
    }

    #[test]
    fn github_requests_navigation_after_a_delay() {
        let mut console = console();
        let outcome = console.submit("github", &env()).expect("outcome");
        let expected = console.content().links.github_url.clone();
        assert_eq!(
            outcome.effect,
            Some(ConsoleEffect::OpenUrl {
                url: expected,
                after_ms: OPEN_URL_DELAY_MS,
            })
        );
        // The confirmation line lands immediately.
        assert_eq!(console.transcript().len(), 2);
    }

    #[test]
    fn theme_requests_a_theme_toggle() {
        let mut console = console();
        let outcome = console.submit("theme", &env()).expect("outcome");
        assert_eq!(outcome.effect, Some(ConsoleEffect::ToggleTheme));
    }

    #[test]
    fn date_renders_the_injected_clock() {
        let mut console = console();
        let env = env();
        console.submit("date", &env);
        assert_eq!(output_texts(&console), vec![env.now_local]);
    }

    #[test]
    fn quote_selects_by_seed() {
        let mut console = console();
        let pool = console.content().quotes.clone();
        let env = CommandEnv {
            quote_seed: pool.len() + 1,
            ..env()
        };
        console.submit("quote", &env);
        assert_eq!(output_texts(&console), vec![pool[1 % pool.len()].clone()]);
    }

    #[test]
    fn welcome_banner_appends_one_output_entry() {
        let mut console = console();
        console.push_welcome_banner();
        assert_eq!(console.transcript().len(), 1);
        assert_eq!(console.transcript().entries()[0].kind, EntryKind::Output);
    }
}
