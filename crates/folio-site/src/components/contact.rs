//! Contact section with outbound links.

use dioxus::prelude::*;

use crate::content::{ContactLink, SectionId, CONTACT_LINKS};
use crate::icons::IconGlyph;

use super::reveal::{reveal_class, transition_style, use_reveal, RevealOptions};

/// The link list enters this long after the heading.
const LINKS_DELAY_MS: u32 = 200;

#[component]
pub fn Contact() -> Element {
    let anchor = SectionId::Contact.anchor();
    let revealed = use_reveal(anchor.to_string(), RevealOptions::SECTION);
    let class = reveal_class(revealed());
    let duration = RevealOptions::SECTION.duration_ms;

    rsx! {
        section {
            id: "{anchor}",
            class: "contact-section",

            div {
                class: "contact-container {class}",
                style: "{transition_style(duration, 0)}",

                h2 { class: "section-title", "Get In Touch" }

                div {
                    class: "contact-links {class}",
                    style: "{transition_style(duration, LINKS_DELAY_MS)}",
                    for link in CONTACT_LINKS.iter().copied() {
                        ContactRow { key: "{link.label}", link }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactRow(link: ContactLink) -> Element {
    rsx! {
        a {
            class: "contact-link",
            href: "{link.href}",
            target: link.external.then_some("_blank"),
            rel: link.external.then_some("noopener noreferrer"),
            IconGlyph { icon: link.icon(), class: "contact-icon" }
            "{link.label}"
        }
    }
}
