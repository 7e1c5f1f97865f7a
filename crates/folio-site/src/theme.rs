//! Light/dark theme tables and the injected theme context.
//!
//! The root component owns the only shared piece of state, the current
//! [`ThemeMode`], and provides it to descendants through [`ThemeContext`].
//! Styles read the palette through CSS custom properties set on the root.

use dioxus::prelude::*;

/// The two available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns the color tokens for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Returns the CSS data-theme attribute value.
    pub fn css_value(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    /// Returns all available themes, in menu order.
    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark]
    }
}

/// Fixed color tokens for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    /// Fill of the fake address bar in each browser frame.
    pub address_bar: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#E1D2B8",
    secondary: "#000000",
    background: "#F5EFE6",
    text: "#000000",
    address_bar: "#ffffff",
};

pub const DARK: Palette = Palette {
    primary: "#000000",
    secondary: "#E1D2B8",
    background: "#1a1a1a",
    text: "#E1D2B8",
    address_bar: "#2a2a2a",
};

impl Palette {
    /// Renders the palette as CSS custom properties for an inline `style`.
    pub fn css_variables(&self) -> String {
        format!(
            "--primary: {}; --secondary: {}; --background: {}; --text: {}; --address-bar: {};",
            self.primary, self.secondary, self.background, self.text, self.address_bar
        )
    }
}

/// Theme state shared from the root down the component tree.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: Signal<ThemeMode>,
}

impl ThemeContext {
    /// Returns the current mode, subscribing the caller to changes.
    pub fn current(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Flips between light and dark.
    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        tracing::info!(theme = next.css_value(), "Theme changed");
        self.mode.set(next);
    }
}

/// Returns the theme context provided by [`ThemedRoot`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Themed root wrapper component.
///
/// Provides [`ThemeContext`] to its children, starting from `initial`.
#[component]
pub fn ThemedRoot(initial: ThemeMode, children: Element) -> Element {
    let theme = use_context_provider(|| ThemeContext {
        mode: Signal::new(initial),
    });
    let mode = theme.current();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{mode.css_value()}",
            style: "{mode.palette().css_variables()}",
            {children}
        }
    }
}
