//! Builtin terminal command vocabulary.
//!
//! Every handler is a pure function from [`CommandContext`] to
//! [`ConsoleReply`]; pacing delays and external navigation are carried as
//! requests in the reply and executed by the presentation layer.

use crate::console::{
    CommandContext, ConsoleEffect, ConsoleReply, TerminalHandler, OPEN_URL_DELAY_MS,
    OUTPUT_DELAY_MS, SUDO_DELAY_MS,
};
use crate::registry::{Registry, RegistryEntry};
use crate::transcript::{BlockLine, HistoryEntry, LineStyle};

const RULE: &str = "═══════════════════════════════════════";

/// Command summaries shown by `help`, in display order. `clear` and `help`
/// are listed here even though `clear` is dispatched outside the registry.
const HELP_ROWS: &[(&str, &str)] = &[
    ("neofetch", "Display system information"),
    ("sudo projects", "List all projects (requires sudo)"),
    ("skills", "Show technical skill tree"),
    ("whoami", "Display user information"),
    ("ls", "List portfolio sections"),
    ("cat [file]", "Read a file (about, contact, education)"),
    ("github", "Open GitHub profile"),
    ("linkedin", "Open LinkedIn profile"),
    ("email", "Show email address"),
    ("theme", "Toggle the color theme"),
    ("date", "Show current date and time"),
    ("uptime", "Show portfolio uptime"),
    ("tree", "Show portfolio structure"),
    ("banner", "Display the name banner"),
    ("quote", "Show a random programming quote"),
    ("clear", "Clear the terminal"),
    ("help", "Show this message"),
];

/// Builds the fixed terminal registry. Entry ids are the dispatch tokens.
pub fn builtin_registry() -> Registry<TerminalHandler> {
    Registry::new(vec![
        entry("neofetch", "Display system information", "system", neofetch),
        entry("sudo", "List all projects (requires sudo)", "projects", sudo),
        entry("skills", "Show technical skill tree", "info", skills),
        entry("whoami", "Display user information", "info", whoami),
        entry("ls", "List portfolio sections", "files", ls),
        entry("cat", "Read a file", "files", cat),
        entry("github", "Open GitHub profile", "links", github),
        entry("linkedin", "Open LinkedIn profile", "links", linkedin),
        entry("email", "Show email address", "links", email),
        entry("theme", "Toggle the color theme", "system", theme),
        entry("date", "Show current date and time", "system", date),
        entry("uptime", "Show portfolio uptime", "system", uptime),
        entry("tree", "Show portfolio structure", "files", tree),
        entry("banner", "Display the name banner", "fun", banner),
        entry("quote", "Show a random programming quote", "fun", quote),
        entry("help", "Show available commands", "system", help),
    ])
}

fn entry(
    id: &'static str,
    title: &'static str,
    category: &'static str,
    action: TerminalHandler,
) -> RegistryEntry<TerminalHandler> {
    RegistryEntry {
        id,
        title,
        category,
        action,
    }
}

fn neofetch(ctx: &CommandContext<'_>) -> ConsoleReply {
    let profile = &ctx.content.profile;
    let mut lines = vec![
        BlockLine::styled("       ▄▄▄▄▄▄▄▄▄▄▄", LineStyle::Accent),
        BlockLine::styled("      ▐░░░░░░░░░░░▌", LineStyle::Accent),
        BlockLine::styled("      ▐░█▀▀▀▀▀▀▀█░▌", LineStyle::Accent),
        BlockLine::styled("      ▐░▌  ◉ ◉  ▐░▌", LineStyle::Accent),
        BlockLine::styled("      ▐░█▄▄▄▄▄▄▄█░▌", LineStyle::Accent),
        BlockLine::styled("      ▐░░░░░░░░░░░▌", LineStyle::Accent),
        BlockLine::styled("       ▀▀▀▀▀▀▀▀▀▀▀", LineStyle::Accent),
        BlockLine::styled(profile.prompt_label(), LineStyle::Accent),
        BlockLine::styled("-----------------", LineStyle::Muted),
        BlockLine::labeled("OS:", "Portfolio v3.0"),
        BlockLine::labeled("Host:", profile.name.clone()),
        BlockLine::labeled("Kernel:", "Rust / Leptos (wasm32)"),
        BlockLine::labeled("Role:", profile.role_line.clone()),
        BlockLine::labeled("Shell:", "zsh 5.9"),
        BlockLine::labeled("Packages:", format!("{} skills", ctx.content.skill_count())),
        BlockLine::labeled("Projects:", format!("{}", ctx.content.projects.len())),
        BlockLine::labeled("Theme:", "Cyberpunk [Dark]"),
        BlockLine::labeled("Terminal:", "console-overlay"),
    ];
    lines.push(BlockLine::styled(profile.tagline.clone(), LineStyle::Muted));
    ConsoleReply::delayed_block(OUTPUT_DELAY_MS, lines)
}

fn sudo(ctx: &CommandContext<'_>) -> ConsoleReply {
    if !matches!(
        ctx.args.first().map(String::as_str),
        Some("projects") | Some("project")
    ) {
        return ConsoleReply::text(format!(
            "sudo: unknown command '{}'",
            ctx.args.join(" ")
        ));
    }

    let mut lines = vec![
        BlockLine::styled(
            format!("[sudo] password for {}: ********", ctx.content.profile.handle),
            LineStyle::Warning,
        ),
        BlockLine::styled("Authentication successful", LineStyle::Success),
        BlockLine::styled(RULE, LineStyle::Heading),
        BlockLine::styled("    PROJECT DIRECTORY LISTING", LineStyle::Heading),
        BlockLine::styled(RULE, LineStyle::Heading),
    ];
    for project in &ctx.content.projects {
        lines.push(BlockLine::styled(format!("▸ {}", project.name), LineStyle::Accent));
        lines.push(BlockLine::styled(
            format!("  └─ {}", project.description),
            LineStyle::Muted,
        ));
        lines.push(BlockLine::styled(
            format!("  └─ Tech: {}", project.tech.join(", ")),
            LineStyle::Muted,
        ));
        lines.push(BlockLine::styled(format!("  └─ {}", project.link), LineStyle::Muted));
    }
    lines.push(BlockLine::styled(RULE, LineStyle::Heading));
    lines.push(BlockLine::styled(
        format!("Total: {} projects loaded", ctx.content.projects.len()),
        LineStyle::Muted,
    ));
    ConsoleReply::delayed_block(SUDO_DELAY_MS, lines)
}

fn skills(ctx: &CommandContext<'_>) -> ConsoleReply {
    let mut lines = vec![
        BlockLine::styled(RULE, LineStyle::Heading),
        BlockLine::styled("    TECHNICAL SKILL TREE", LineStyle::Heading),
        BlockLine::styled(RULE, LineStyle::Heading),
    ];
    for category in &ctx.content.skills {
        lines.push(BlockLine::styled(
            format!("▸ {}", category.name.to_uppercase()),
            LineStyle::Accent,
        ));
        lines.push(BlockLine::styled(
            format!("  {}", category.skills.join(" · ")),
            LineStyle::Success,
        ));
    }
    lines.push(BlockLine::styled(
        format!("Total: {} skills across {} categories", ctx.content.skill_count(), ctx.content.skills.len()),
        LineStyle::Muted,
    ));
    ConsoleReply::delayed_block(OUTPUT_DELAY_MS, lines)
}

fn whoami(ctx: &CommandContext<'_>) -> ConsoleReply {
    let profile = &ctx.content.profile;
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(vec![
            BlockLine::styled(profile.prompt_label(), LineStyle::Accent),
            BlockLine::styled(profile.tagline.clone(), LineStyle::Muted),
            BlockLine::styled(profile.role_line.clone(), LineStyle::Muted),
        ])],
        ..ConsoleReply::default()
    }
}

fn ls(_ctx: &CommandContext<'_>) -> ConsoleReply {
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(vec![BlockLine::styled(
            "about/  projects/  skills/  contact/  education/  publications/",
            LineStyle::Accent,
        )])],
        ..ConsoleReply::default()
    }
}

fn cat(ctx: &CommandContext<'_>) -> ConsoleReply {
    let profile = &ctx.content.profile;
    let requested = ctx.args.first().map(String::as_str).unwrap_or("[file]");
    // Lowercase before stripping so `ABOUT.TXT` resolves like `about.txt`.
    let lowered = requested.to_ascii_lowercase();
    let name = lowered.strip_suffix(".txt").unwrap_or(&lowered);

    let lines = match name {
        "about" => vec![
            BlockLine::styled("about.txt", LineStyle::Accent),
            BlockLine::plain(format!(
                "{} is a software engineer focused on systems and web platforms.",
                profile.name
            )),
            BlockLine::plain(profile.tagline.clone()),
            BlockLine::plain(profile.role_line.clone()),
        ],
        "contact" => vec![
            BlockLine::styled("contact.txt", LineStyle::Accent),
            BlockLine::labeled("Email:", profile.email.clone()),
            BlockLine::labeled("GitHub:", ctx.content.links.github_label.clone()),
            BlockLine::labeled("LinkedIn:", ctx.content.links.linkedin_label.clone()),
        ],
        "education" => {
            let mut rows = vec![BlockLine::styled("education.txt", LineStyle::Accent)];
            for certification in &ctx.content.certifications {
                rows.push(BlockLine::plain(format!(
                    "{} ({}, {})",
                    certification.title, certification.issuer, certification.year
                )));
            }
            for publication in &ctx.content.publications {
                rows.push(BlockLine::styled(
                    format!("{} - {} ({})", publication.title, publication.venue, publication.year),
                    LineStyle::Muted,
                ));
            }
            rows
        }
        _ => {
            return ConsoleReply::text(format!(
                "cat: {requested}: No such file. Try: about, contact, education"
            ));
        }
    };

    ConsoleReply {
        entries: vec![HistoryEntry::output_block(lines)],
        ..ConsoleReply::default()
    }
}

fn github(ctx: &CommandContext<'_>) -> ConsoleReply {
    open_link(
        &ctx.content.links.github_url,
        format!("Opening GitHub profile... {}", ctx.content.links.github_label),
    )
}

fn linkedin(ctx: &CommandContext<'_>) -> ConsoleReply {
    open_link(
        &ctx.content.links.linkedin_url,
        format!("Opening LinkedIn profile... {}", ctx.content.links.linkedin_label),
    )
}

fn open_link(url: &str, confirmation: String) -> ConsoleReply {
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(vec![BlockLine::styled(
            confirmation,
            LineStyle::Success,
        )])],
        effect: Some(ConsoleEffect::OpenUrl {
            url: url.to_string(),
            after_ms: OPEN_URL_DELAY_MS,
        }),
        ..ConsoleReply::default()
    }
}

fn email(ctx: &CommandContext<'_>) -> ConsoleReply {
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(vec![
            BlockLine::styled("Email Address:", LineStyle::Accent),
            BlockLine::plain(ctx.content.profile.email.clone()),
        ])],
        ..ConsoleReply::default()
    }
}

fn theme(_ctx: &CommandContext<'_>) -> ConsoleReply {
    ConsoleReply {
        entries: vec![HistoryEntry::output_text("Toggling color theme...")],
        effect: Some(ConsoleEffect::ToggleTheme),
        ..ConsoleReply::default()
    }
}

fn date(ctx: &CommandContext<'_>) -> ConsoleReply {
    ConsoleReply::text(ctx.env.now_local.clone())
}

fn uptime(ctx: &CommandContext<'_>) -> ConsoleReply {
    ConsoleReply::text(format!(
        "System uptime: Portfolio running since {}",
        ctx.content.profile.since_year
    ))
}

fn tree(ctx: &CommandContext<'_>) -> ConsoleReply {
    let mut lines = vec![
        BlockLine::styled("portfolio/", LineStyle::Accent),
        BlockLine::plain("├── about/"),
        BlockLine::plain("├── projects/"),
    ];
    for (index, project) in ctx.content.projects.iter().enumerate() {
        let connector = if index + 1 == ctx.content.projects.len() {
            "│   └──"
        } else {
            "│   ├──"
        };
        lines.push(BlockLine::plain(format!("{connector} {}/", project.name)));
    }
    lines.push(BlockLine::plain("├── skills/"));
    lines.push(BlockLine::plain("├── publications/"));
    lines.push(BlockLine::plain("├── certifications/"));
    lines.push(BlockLine::plain("└── contact/"));
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(lines)],
        ..ConsoleReply::default()
    }
}

fn banner(ctx: &CommandContext<'_>) -> ConsoleReply {
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(vec![
            BlockLine::styled("     ██╗██╗   ██╗███████╗████████╗██╗███╗   ██╗", LineStyle::Accent),
            BlockLine::styled("     ██║██║   ██║██╔════╝╚══██╔══╝██║████╗  ██║", LineStyle::Accent),
            BlockLine::styled("     ██║██║   ██║███████╗   ██║   ██║██╔██╗ ██║", LineStyle::Accent),
            BlockLine::styled("██   ██║██║   ██║╚════██║   ██║   ██║██║╚██╗██║", LineStyle::Accent),
            BlockLine::styled("╚█████╔╝╚██████╔╝███████║   ██║   ██║██║ ╚████║", LineStyle::Accent),
            BlockLine::styled(" ╚════╝  ╚═════╝ ╚══════╝   ╚═╝   ╚═╝╚═╝  ╚═══╝", LineStyle::Accent),
            BlockLine::styled(ctx.content.profile.tagline.clone(), LineStyle::Muted),
        ])],
        ..ConsoleReply::default()
    }
}

fn quote(ctx: &CommandContext<'_>) -> ConsoleReply {
    let pool = &ctx.content.quotes;
    if pool.is_empty() {
        return ConsoleReply::text("No quotes loaded.");
    }
    ConsoleReply::text(pool[ctx.env.quote_seed % pool.len()].clone())
}

fn help(_ctx: &CommandContext<'_>) -> ConsoleReply {
    let mut lines = vec![BlockLine::styled("AVAILABLE COMMANDS", LineStyle::Heading)];
    for (command, summary) in HELP_ROWS {
        lines.push(BlockLine::labeled(*command, *summary));
    }
    lines.push(BlockLine::styled(
        "Tip: use Up/Down arrows to browse command history",
        LineStyle::Muted,
    ));
    ConsoleReply {
        entries: vec![HistoryEntry::output_block(lines)],
        ..ConsoleReply::default()
    }
}

#[cfg(test)]
mod tests {
    use portfolio_content::PortfolioContent;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::console::CommandEnv;
    use crate::transcript::DisplayPayload;

    fn context<'a>(
        args: &'a [String],
        content: &'a PortfolioContent,
        env: &'a CommandEnv,
    ) -> CommandContext<'a> {
        CommandContext { args, content, env }
    }

    fn first_text(reply: &ConsoleReply) -> &str {
        reply.entries[0].payload.as_text().unwrap_or_default()
    }

    #[test]
    fn every_help_row_has_a_dispatchable_token() {
        let registry = builtin_registry();
        for (command, _) in HELP_ROWS {
            let token = command.split_whitespace().next().unwrap_or_default();
            let known = token == "clear" || registry.find(token).is_some();
            assert!(known, "no handler for help row {command:?}");
        }
    }

    #[test]
    fn sudo_without_projects_reports_unknown() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let args = vec!["make".to_string(), "sandwich".to_string()];
        let reply = sudo(&context(&args, &content, &env));
        assert_eq!(first_text(&reply), "sudo: unknown command 'make sandwich'");
        assert!(reply.delayed.is_empty());
    }

    #[test]
    fn sudo_accepts_the_singular_project_form() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let args = vec!["project".to_string()];
        let reply = sudo(&context(&args, &content, &env));
        assert!(reply.entries.is_empty());
        assert_eq!(reply.delayed.len(), 1);
    }

    #[test]
    fn sudo_projects_lists_every_project_behind_the_delay() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let args = vec!["projects".to_string()];
        let reply = sudo(&context(&args, &content, &env));

        assert!(reply.entries.is_empty());
        assert_eq!(reply.delayed[0].after_ms, SUDO_DELAY_MS);
        let DisplayPayload::Block { lines } = &reply.delayed[0].entries[0].payload else {
            panic!("expected block payload");
        };
        for project in &content.projects {
            assert!(lines.iter().any(|line| line.text.contains(&project.name)));
        }
    }

    #[test]
    fn cat_without_argument_uses_a_placeholder() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let reply = cat(&context(&[], &content, &env));
        assert_eq!(
            first_text(&reply),
            "cat: [file]: No such file. Try: about, contact, education"
        );
    }

    #[test]
    fn cat_accepts_bare_and_txt_suffixed_names() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        for name in ["about", "about.txt", "ABOUT", "ABOUT.TXT", "About.Txt"] {
            let args = vec![name.to_string()];
            let reply = cat(&context(&args, &content, &env));
            assert!(
                matches!(reply.entries[0].payload, DisplayPayload::Block { .. }),
                "cat {name} should print the file"
            );
        }
    }

    #[test]
    fn cat_unknown_file_names_the_request() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let args = vec!["secrets.txt".to_string()];
        let reply = cat(&context(&args, &content, &env));
        assert_eq!(
            first_text(&reply),
            "cat: secrets.txt: No such file. Try: about, contact, education"
        );
    }

    #[test]
    fn linkedin_carries_the_profile_url() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let reply = linkedin(&context(&[], &content, &env));
        assert_eq!(
            reply.effect,
            Some(ConsoleEffect::OpenUrl {
                url: content.links.linkedin_url.clone(),
                after_ms: OPEN_URL_DELAY_MS,
            })
        );
    }

    #[test]
    fn skills_block_covers_every_category() {
        let content = PortfolioContent::standard();
        let env = CommandEnv::default();
        let reply = skills(&context(&[], &content, &env));
        let DisplayPayload::Block { lines } = &reply.delayed[0].entries[0].payload else {
            panic!("expected block payload");
        };
        for category in &content.skills {
            let upper = category.name.to_uppercase();
            assert!(lines.iter().any(|line| line.text.contains(&upper)));
        }
    }
}
