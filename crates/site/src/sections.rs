//! Static portfolio sections. Each section owns its slice of the content set
//! and carries the anchor id the palette and navbar jump to.

use leptos::*;
use portfolio_content::{Certification, ContactLinks, Profile, Project, Publication, SkillCategory};
use system_ui::prelude::*;

#[component]
pub(crate) fn HeroSection(profile: Profile) -> impl IntoView {
    view! {
        <section id="hero" class="site-section site-hero" tabindex=-1>
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Title>{profile.name.clone()}</Heading>
                <Text tone=TextTone::Accent>{profile.tagline.clone()}</Text>
                <Text tone=TextTone::Secondary>{profile.role_line.clone()}</Text>
                <Cluster gap=LayoutGap::Sm>
                    <Badge tone=TextTone::Accent>"Ctrl+` terminal"</Badge>
                    <Badge tone=TextTone::Accent>"Ctrl+K palette"</Badge>
                </Cluster>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class="site-section" tabindex=-1>
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Projects"</Heading>
                <For each=move || projects.clone() key=|project| project.name.clone() let:project>
                    <article class="project-card">
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Label>{project.name.clone()}</Heading>
                            <Text tone=TextTone::Secondary>{project.description.clone()}</Text>
                            <Cluster gap=LayoutGap::Sm>
                                <For each=move || project.tech.clone() key=|tag| tag.clone() let:tag>
                                    <Badge>{tag}</Badge>
                                </For>
                            </Cluster>
                            <a href=project.link.clone() target="_blank" rel="noreferrer">
                                <Text role=TextRole::Caption tone=TextTone::Accent>
                                    {project.link.clone()}
                                </Text>
                            </a>
                        </Stack>
                    </article>
                </For>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn AboutSection(profile: Profile) -> impl IntoView {
    view! {
        <section id="about" class="site-section" tabindex=-1>
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Title>"About"</Heading>
                <Text>
                    {format!(
                        "{} is a software engineer focused on systems and web platforms.",
                        profile.name
                    )}
                </Text>
                <Text tone=TextTone::Secondary>{profile.role_line.clone()}</Text>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn SkillsSection(skills: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id="skills" class="site-section" tabindex=-1>
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Tech Stack"</Heading>
                <For each=move || skills.clone() key=|category| category.name.clone() let:category>
                    <Stack gap=LayoutGap::Sm>
                        <Heading role=TextRole::Label tone=TextTone::Accent>
                            {category.name.clone()}
                        </Heading>
                        <Cluster gap=LayoutGap::Sm>
                            <For each=move || category.skills.clone() key=|skill| skill.clone() let:skill>
                                <Badge>{skill}</Badge>
                            </For>
                        </Cluster>
                    </Stack>
                </For>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn PublicationsSection(publications: Vec<Publication>) -> impl IntoView {
    view! {
        <section id="publications" class="site-section" tabindex=-1>
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Publications"</Heading>
                <For each=move || publications.clone() key=|publication| publication.title.clone() let:publication>
                    <Stack gap=LayoutGap::None>
                        <Text>{publication.title.clone()}</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {format!("{} · {}", publication.venue, publication.year)}
                        </Text>
                    </Stack>
                </For>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn CertificationsSection(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <section id="certifications" class="site-section" tabindex=-1>
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>"Certifications"</Heading>
                <For each=move || certifications.clone() key=|certification| certification.title.clone() let:certification>
                    <Stack gap=LayoutGap::None>
                        <Text>{certification.title.clone()}</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {format!("{} · {}", certification.issuer, certification.year)}
                        </Text>
                    </Stack>
                </For>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn ContactSection(profile: Profile, links: ContactLinks) -> impl IntoView {
    view! {
        <section id="contact" class="site-section" tabindex=-1>
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Title>"Contact"</Heading>
                <a href=format!("mailto:{}", profile.email)>
                    <Text tone=TextTone::Accent>{profile.email.clone()}</Text>
                </a>
                <a href=links.github_url.clone() target="_blank" rel="noreferrer">
                    <Text tone=TextTone::Secondary>{links.github_label.clone()}</Text>
                </a>
                <a href=links.linkedin_url.clone() target="_blank" rel="noreferrer">
                    <Text tone=TextTone::Secondary>{links.linkedin_label.clone()}</Text>
                </a>
            </Stack>
        </section>
    }
}

#[component]
pub(crate) fn SiteFooter(profile: Profile) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {format!("© {} {}. Built with Rust and Leptos.", profile.since_year, profile.name)}
            </Text>
        </footer>
    }
}
