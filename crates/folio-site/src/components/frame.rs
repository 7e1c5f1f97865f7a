//! Decorative browser-window frame around each section.

use dioxus::prelude::*;

use crate::content::SectionId;

use super::reveal::{reveal_class, transition_style, use_reveal, RevealOptions};

/// Traffic-light button colors, left to right.
const BUTTON_COLORS: [&str; 3] = ["#FF5F56", "#FFBD2E", "#27C93F"];

/// Wraps a section in a fake browser window whose body fades in once seen.
#[component]
pub fn BrowserFrame(section: SectionId, children: Element) -> Element {
    let body_id = format!("frame-{}", section.anchor());
    let revealed = use_reveal(body_id.clone(), RevealOptions::FRAME);

    rsx! {
        div {
            class: "browser-frame",

            div {
                class: "browser-header",

                div {
                    class: "browser-buttons",
                    for color in BUTTON_COLORS {
                        span {
                            class: "browser-button",
                            style: "background-color: {color};",
                        }
                    }
                }

                div {
                    class: "browser-address-bar",
                    "{section.address()}"
                }
            }

            div {
                id: "{body_id}",
                class: "frame-body {reveal_class(revealed())}",
                style: "{transition_style(RevealOptions::FRAME.duration_ms, 0)}",
                {children}
            }
        }
    }
}
