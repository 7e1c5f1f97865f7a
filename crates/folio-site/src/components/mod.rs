//! UI components for the portfolio page.

mod about;
mod app;
mod contact;
mod frame;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use frame::*;
pub use hero::*;
pub use navbar::*;
pub use projects::*;
pub use reveal::*;
pub use skills::*;
