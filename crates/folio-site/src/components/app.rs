//! Root component.

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::SectionId;
use crate::theme::ThemedRoot;

use super::{About, BrowserFrame, Contact, Hero, Navbar, Projects, Skills};

/// Whole page: navigation plus every section in its frame, in order.
#[component]
pub fn App() -> Element {
    let config = use_hook(SiteConfig::current);

    use_drop(|| tracing::info!("Portfolio closed"));

    rsx! {
        ThemedRoot {
            initial: config.theme,

            div {
                class: "app-container",

                Navbar {}

                main {
                    class: "page",
                    for section in SectionId::ALL {
                        BrowserFrame {
                            key: "{section.anchor()}",
                            section,
                            SectionBody { section }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionBody(section: SectionId) -> Element {
    match section {
        SectionId::Hero => rsx! { Hero {} },
        SectionId::About => rsx! { About {} },
        SectionId::Projects => rsx! { Projects {} },
        SectionId::Skills => rsx! { Skills {} },
        SectionId::Contact => rsx! { Contact {} },
    }
}
