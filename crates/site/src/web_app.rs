use leptos::*;
use leptos_meta::*;
use overlay_palette::PaletteOverlay;
use overlay_terminal::TerminalOverlay;
use portfolio_content::PortfolioContent;
use system_ui::prelude::*;

use crate::sections::{
    AboutSection, CertificationsSection, ContactSection, HeroSection, ProjectsSection,
    PublicationsSection, SiteFooter, SkillsSection,
};

/// Site-wide color theme, mirrored onto `<html data-theme>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[component]
/// Application root: meta tags, navbar, content sections, and both overlays.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let content = PortfolioContent::standard();
    let theme = create_rw_signal(Theme::Dark);

    create_effect(move |_| {
        let token = theme.get().token();
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            if let Err(err) = root.set_attribute("data-theme", token) {
                logging::warn!("theme attribute update failed: {err:?}");
            }
        }
    });

    let toggle_theme = Callback::new(move |()| theme.update(|theme| *theme = theme.toggled()));

    let title = content.profile.name.clone();
    let description = content.profile.tagline.clone();
    let profile = content.profile.clone();

    view! {
        <Title text=title />
        <Meta name="description" content=description />

        <main class="site-root">
            <Navbar theme=theme on_toggle_theme=toggle_theme />
            <HeroSection profile=profile.clone() />
            <ProjectsSection projects=content.projects.clone() />
            <AboutSection profile=profile.clone() />
            <SkillsSection skills=content.skills.clone() />
            <PublicationsSection publications=content.publications.clone() />
            <CertificationsSection certifications=content.certifications.clone() />
            <ContactSection profile=profile.clone() links=content.links.clone() />
            <SiteFooter profile=profile />
        </main>

        <TerminalOverlay content=content on_toggle_theme=toggle_theme />
        <PaletteOverlay />
    }
}

const NAV_TARGETS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("projects", "Projects"),
    ("about", "About"),
    ("publications", "Publications"),
    ("certifications", "Certifications"),
    ("contact", "Contact"),
];

#[component]
fn Navbar(theme: RwSignal<Theme>, on_toggle_theme: Callback<()>) -> impl IntoView {
    view! {
        <nav class="site-navbar" aria-label="Primary">
            <Cluster gap=LayoutGap::Sm ui_slot="nav-links">
                <For each=move || NAV_TARGETS key=|target| target.0 let:target>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| {
                            if let Err(err) = platform_host_web::scroll_to_anchor(target.0) {
                                logging::warn!("nav scroll failed: {err}");
                            }
                        })
                    >
                        {target.1}
                    </Button>
                </For>
            </Cluster>
            <Cluster gap=LayoutGap::Sm ui_slot="nav-actions">
                <Kbd>"Ctrl+K"</Kbd>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Toggle color theme"
                    on_click=Callback::new(move |_| on_toggle_theme.call(()))
                >
                    {move || match theme.get() {
                        Theme::Dark => "☀",
                        Theme::Light => "☾",
                    }}
                </Button>
            </Cluster>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.token(), "dark");
    }

    #[test]
    fn nav_targets_cover_the_palette_anchors() {
        let registry = console_core::navigation_registry();
        for entry in registry.entries() {
            assert!(
                NAV_TARGETS.iter().any(|target| target.0 == entry.action.anchor),
                "navbar is missing anchor {}",
                entry.action.anchor
            );
        }
    }
}
