//! Floating bottom navigation bar with the theme menu.

use dioxus::prelude::*;

use crate::icons::{Icon, IconGlyph};
use crate::page;
use crate::state::{NavId, NavState, NAV_ITEMS};
use crate::theme::{use_theme, ThemeMode};

/// Navigation bar: one item per section plus the theme control.
#[component]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let mut nav = use_signal(NavState::new);

    let mode = theme.current();
    let nav_state = *nav.read();

    rsx! {
        div {
            class: "nav-wrapper",
            nav {
                class: "nav",
                for item in NAV_ITEMS.iter().copied() {
                    {
                        let is_active = nav_state.is_active(item.id);
                        rsx! {
                            div {
                                key: "{item.label}",
                                class: if is_active { "nav-item active" } else { "nav-item" },
                                onclick: move |_| {
                                    if let Some(request) = nav.write().activate(&item) {
                                        tracing::info!(section = request.anchor, "Navigating");
                                        page::scroll_to(request);
                                    }
                                },

                                IconGlyph { icon: item.icon_for(mode), class: "nav-icon" }
                                span { class: "nav-label", "{item.label}" }

                                if item.id == NavId::Theme {
                                    ThemeMenu {
                                        open: nav_state.theme_menu_open(),
                                        current: mode,
                                        on_choose: move |chosen| {
                                            let current = *theme.mode.peek();
                                            if nav.write().choose_theme(current, chosen).is_some() {
                                                theme.toggle();
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Two-option light/dark menu shown above the theme item.
#[component]
fn ThemeMenu(open: bool, current: ThemeMode, on_choose: EventHandler<ThemeMode>) -> Element {
    rsx! {
        div {
            class: if open { "theme-dropdown open" } else { "theme-dropdown" },
            for option in ThemeMode::all().iter().copied() {
                div {
                    key: "{option.css_value()}",
                    class: if option == current { "theme-option active" } else { "theme-option" },
                    // Keep the click from reaching the theme item, which would reopen the menu
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_choose.call(option);
                    },
                    IconGlyph {
                        icon: match option {
                            ThemeMode::Light => Icon::Sun,
                            ThemeMode::Dark => Icon::Moon,
                        },
                        class: "theme-icon",
                    }
                    "{option.display_name()}"
                }
            }
        }
    }
}
