//! Animated, themeable single-page portfolio.
//!
//! A Dioxus desktop application that renders a personal portfolio: hero
//! with a typewriter tagline, about, projects with a detail overlay, skills
//! and contact, each inside a decorative browser frame that fades in when
//! scrolled into view.

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod page;
pub mod state;
pub mod theme;

pub use error::{Result, SiteError};
