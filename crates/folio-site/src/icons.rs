//! Glyph set used by navigation, skills and contact links.

use dioxus::prelude::*;

/// Icons referenced by content records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    User,
    Code,
    Tools,
    Envelope,
    Moon,
    Sun,
    Phone,
    GitHub,
    LinkedIn,
    ExternalLink,
    Close,
    React,
    JavaScript,
    TypeScript,
    Html5,
    Css3,
    NodeJs,
    Express,
    MongoDb,
    Redux,
    Git,
    StyledComponents,
    Database,
}

impl Icon {
    /// Returns the unicode glyph rendered for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "\u{2302}",
            Icon::User => "\u{1F464}",
            Icon::Code => "</>",
            Icon::Tools => "\u{1F6E0}",
            Icon::Envelope => "\u{2709}",
            Icon::Moon => "\u{263E}",
            Icon::Sun => "\u{2600}",
            Icon::Phone => "\u{260E}",
            Icon::GitHub => "\u{2325}",
            Icon::LinkedIn => "in",
            Icon::ExternalLink => "\u{2197}",
            Icon::Close => "\u{00D7}",
            Icon::React => "\u{269B}",
            Icon::JavaScript => "JS",
            Icon::TypeScript => "TS",
            Icon::Html5 => "\u{2039}\u{203A}",
            Icon::Css3 => "#",
            Icon::NodeJs => "\u{2B22}",
            Icon::Express => "ex",
            Icon::MongoDb => "\u{1F343}",
            Icon::Redux => "\u{21BB}",
            Icon::Git => "\u{2387}",
            Icon::StyledComponents => "\u{1F485}",
            Icon::Database => "\u{26C1}",
        }
    }
}

/// Renders an icon glyph inside a sized span.
#[component]
pub fn IconGlyph(icon: Icon, #[props(default, into)] class: String) -> Element {
    rsx! {
        span {
            class: "icon {class}",
            "aria-hidden": "true",
            "{icon.glyph()}"
        }
    }
}
