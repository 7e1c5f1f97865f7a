//! Presentation state owned by individual sections.

pub mod navigation;
pub mod overlay;
pub mod reveal;
pub mod typewriter;

pub use navigation::{NavAction, NavId, NavItem, NavState, NavTarget, ScrollRequest, NAV_BAR_OFFSET_PX, NAV_ITEMS};
pub use overlay::ProjectOverlay;
pub use reveal::{RevealLatch, VisibilityReport};
pub use typewriter::{animate, Typewriter, TypewriterState, TypewriterTiming};
