//! About section.

use dioxus::prelude::*;

use crate::content::{SectionId, ABOUT_PARAGRAPHS};

use super::reveal::{reveal_class, transition_style, use_reveal, RevealOptions};

#[component]
pub fn About() -> Element {
    let anchor = SectionId::About.anchor();
    let revealed = use_reveal(anchor.to_string(), RevealOptions::SECTION);

    rsx! {
        section {
            id: "{anchor}",
            class: "about-section",

            div {
                class: "about-content {reveal_class(revealed())}",
                style: "{transition_style(RevealOptions::SECTION.duration_ms, 0)}",

                h2 { class: "section-title", "About Me" }

                for paragraph in ABOUT_PARAGRAPHS.iter() {
                    p { class: "about-description", "{paragraph}" }
                }
            }
        }
    }
}
