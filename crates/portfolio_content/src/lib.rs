//! Static portfolio content records consumed by the console engine and the site sections.
//!
//! This crate is intentionally data-only. It defines serializable content types and one
//! canonical content set; nothing here depends on Leptos, browser APIs, or the console
//! engine. Command handlers and section components read these records and never mutate them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Identity and profile facts rendered by `neofetch`, `whoami`, and the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Short login-style handle used in prompts (for example `justin`).
    pub handle: String,
    /// Hostname-style suffix used in prompts (for example `portfolio`).
    pub host: String,
    /// One-line professional tagline.
    pub tagline: String,
    /// One-line current-role/education summary.
    pub role_line: String,
    /// Contact email address.
    pub email: String,
    /// Year the site went live, rendered by `uptime`.
    pub since_year: u32,
}

impl Profile {
    /// Returns the `user@host` prompt label.
    pub fn prompt_label(&self) -> String {
        format!("{}@{}", self.handle, self.host)
    }
}

/// One project record: `sudo projects` listing and the projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Technology tags.
    pub tech: Vec<String>,
    /// External repository or writeup URL.
    pub link: String,
}

/// One named skill group rendered by the `skills` command and the tech-stack section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category label (for example `languages`).
    pub name: String,
    /// Skills within the category, in display order.
    pub skills: Vec<String>,
}

/// One publication record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Paper or article title.
    pub title: String,
    /// Venue or publisher.
    pub venue: String,
    /// Publication year.
    pub year: u32,
}

/// One certification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification title.
    pub title: String,
    /// Issuing organization.
    pub issuer: String,
    /// Year earned.
    pub year: u32,
}

/// External profile links opened by the `github` and `linkedin` commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    /// Full GitHub profile URL.
    pub github_url: String,
    /// Short GitHub label shown in transcript output.
    pub github_label: String,
    /// Full LinkedIn profile URL.
    pub linkedin_url: String,
    /// Short LinkedIn label shown in transcript output.
    pub linkedin_label: String,
}

/// Complete read-only content set for one portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Identity facts.
    pub profile: Profile,
    /// Project records in display order.
    pub projects: Vec<Project>,
    /// Skill groups in display order.
    pub skills: Vec<SkillCategory>,
    /// Publication records in display order.
    pub publications: Vec<Publication>,
    /// Certification records in display order.
    pub certifications: Vec<Certification>,
    /// Profile links.
    pub links: ContactLinks,
    /// Quote pool for the `quote` command.
    pub quotes: Vec<String>,
}

impl PortfolioContent {
    /// Total number of skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|category| category.skills.len()).sum()
    }

    /// Returns the canonical content set for this site.
    pub fn standard() -> Self {
        Self {
            profile: Profile {
                name: "Justin Short".to_string(),
                handle: "justin".to_string(),
                host: "portfolio".to_string(),
                tagline: "Systems & Web Engineer | Rust Enthusiast".to_string(),
                role_line: "Building browser-native desktop experiences".to_string(),
                email: "hello@justinshort.dev".to_string(),
                since_year: 2025,
            },
            projects: vec![
                Project {
                    name: "retro-desktop-shell".to_string(),
                    description: "Browser-hosted retro desktop environment with a windowing runtime".to_string(),
                    tech: vec!["Rust".to_string(), "Leptos".to_string(), "WASM".to_string()],
                    link: "https://github.com/justinrayshort/retro-desktop-shell".to_string(),
                },
                Project {
                    name: "headless-shell-core".to_string(),
                    description: "Embeddable command-shell engine with structured pipelines".to_string(),
                    tech: vec!["Rust".to_string(), "serde".to_string()],
                    link: "https://github.com/justinrayshort/headless-shell-core".to_string(),
                },
                Project {
                    name: "wasm-host-bridge".to_string(),
                    description: "Capability bridge between wasm apps and browser storage backends".to_string(),
                    tech: vec!["Rust".to_string(), "wasm-bindgen".to_string(), "IndexedDB".to_string()],
                    link: "https://github.com/justinrayshort/wasm-host-bridge".to_string(),
                },
                Project {
                    name: "ui-primitive-kit".to_string(),
                    description: "Skinnable UI primitive library with a stable DOM data contract".to_string(),
                    tech: vec!["Rust".to_string(), "Leptos".to_string(), "CSS".to_string()],
                    link: "https://github.com/justinrayshort/ui-primitive-kit".to_string(),
                },
            ],
            skills: vec![
                SkillCategory {
                    name: "languages".to_string(),
                    skills: vec![
                        "Rust".to_string(),
                        "TypeScript".to_string(),
                        "Python".to_string(),
                        "SQL".to_string(),
                        "C".to_string(),
                    ],
                },
                SkillCategory {
                    name: "web".to_string(),
                    skills: vec![
                        "Leptos".to_string(),
                        "WebAssembly".to_string(),
                        "HTML5".to_string(),
                        "CSS3".to_string(),
                        "HTTP".to_string(),
                    ],
                },
                SkillCategory {
                    name: "systems".to_string(),
                    skills: vec![
                        "tokio".to_string(),
                        "serde".to_string(),
                        "wasm-bindgen".to_string(),
                        "SQLite".to_string(),
                    ],
                },
                SkillCategory {
                    name: "tools".to_string(),
                    skills: vec![
                        "Git".to_string(),
                        "Docker".to_string(),
                        "Linux".to_string(),
                        "Nix".to_string(),
                        "CI/CD".to_string(),
                    ],
                },
            ],
            publications: vec![
                Publication {
                    title: "Structured Pipelines for Browser-Hosted Shells".to_string(),
                    venue: "Self-published engineering notes".to_string(),
                    year: 2025,
                },
                Publication {
                    title: "A DOM Data Contract for Skinnable UI Primitives".to_string(),
                    venue: "Self-published engineering notes".to_string(),
                    year: 2024,
                },
            ],
            certifications: vec![
                Certification {
                    title: "AWS Certified Solutions Architect - Associate".to_string(),
                    issuer: "Amazon Web Services".to_string(),
                    year: 2023,
                },
                Certification {
                    title: "Certified Kubernetes Application Developer".to_string(),
                    issuer: "CNCF".to_string(),
                    year: 2024,
                },
            ],
            links: ContactLinks {
                github_url: "https://github.com/justinrayshort".to_string(),
                github_label: "github.com/justinrayshort".to_string(),
                linkedin_url: "https://www.linkedin.com/in/justinrayshort/".to_string(),
                linkedin_label: "linkedin.com/in/justinrayshort".to_string(),
            },
            quotes: vec![
                "\"First, solve the problem. Then, write the code.\" - John Johnson".to_string(),
                "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House".to_string(),
                "\"The best error message is the one that never shows up.\" - Thomas Fuchs".to_string(),
                "\"Simplicity is the soul of efficiency.\" - Austin Freeman".to_string(),
                "\"Make it work, make it right, make it fast.\" - Kent Beck".to_string(),
                "\"Any fool can write code that a computer can understand. Good programmers write code that humans can understand.\" - Martin Fowler".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_content_is_nonempty() {
        let content = PortfolioContent::standard();
        assert!(!content.projects.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.quotes.is_empty());
        assert!(content.skill_count() > 0);
    }

    #[test]
    fn prompt_label_joins_handle_and_host() {
        let content = PortfolioContent::standard();
        assert_eq!(
            content.profile.prompt_label(),
            format!("{}@{}", content.profile.handle, content.profile.host)
        );
    }

    #[test]
    fn content_round_trips_through_json() {
        let content = PortfolioContent::standard();
        let raw = serde_json::to_string(&content).expect("serialize");
        let restored: PortfolioContent = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(restored, content);
    }
}
