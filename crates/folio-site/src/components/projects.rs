//! Projects section: card grid and the detail overlay.

use dioxus::prelude::*;

use crate::content::{Project, SectionId, PROJECTS};
use crate::icons::{Icon, IconGlyph};
use crate::state::ProjectOverlay;

use super::reveal::{reveal_class, stagger_style, transition_style, use_reveal, RevealOptions};

/// Project grid; clicking a card opens its details.
#[component]
pub fn Projects() -> Element {
    let anchor = SectionId::Projects.anchor();
    let revealed = use_reveal(anchor.to_string(), RevealOptions::SECTION);
    let mut overlay = use_signal(ProjectOverlay::new);

    let is_revealed = revealed();
    let open_project = overlay.read().current();

    rsx! {
        section {
            id: "{anchor}",
            class: "projects-section",

            div {
                class: "projects-container {reveal_class(is_revealed)}",
                style: "{transition_style(RevealOptions::SECTION.duration_ms, 0)}",

                h2 { class: "section-title", "My Projects" }

                div {
                    class: "projects-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        ProjectCard {
                            key: "{project.id}",
                            project,
                            index,
                            revealed: is_revealed,
                            on_select: move |p| overlay.write().open(p),
                        }
                    }
                }

                if let Some(project) = open_project {
                    ProjectDetail {
                        project,
                        on_close: move |_| overlay.write().close(),
                    }
                }
            }
        }
    }
}

/// A single project card.
#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    revealed: bool,
    on_select: EventHandler<&'static Project>,
) -> Element {
    rsx! {
        div {
            class: "project-card {reveal_class(revealed)}",
            style: "{stagger_style(index)}",
            onclick: move |_| on_select.call(project),

            div { class: "project-image" }

            div {
                class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.short_description}" }
                ProjectTags { tags: project.tags }
            }
        }
    }
}

/// Full-screen overlay with one project's details.
#[component]
fn ProjectDetail(project: &'static Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_close.call(());
                    },
                    IconGlyph { icon: Icon::Close }
                }

                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.full_description}" }
                ProjectTags { tags: project.tags }

                div {
                    class: "modal-links",
                    a {
                        class: "modal-link",
                        href: "{project.repository_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        IconGlyph { icon: Icon::GitHub }
                        " View Code"
                    }
                    a {
                        class: "modal-link",
                        href: "{project.demo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        IconGlyph { icon: Icon::ExternalLink }
                        " Live Demo"
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectTags(tags: &'static [&'static str]) -> Element {
    rsx! {
        div {
            class: "project-tags",
            for tag in tags.iter() {
                span { key: "{tag}", class: "tag", "{tag}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_card_lifts_on_hover() {
        let css = include_str!("../../assets/styles.css");
        let rule = &css[css.find(".project-card:hover").unwrap()..];
        assert!(rule[..rule.find('}').unwrap()].contains("transform: translateY(-10px);"));
    }
}
