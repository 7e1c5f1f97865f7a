//! Navigation bar items and click dispatch.
//!
//! The active item is whichever section item was clicked last. It is not
//! derived from the scroll position.

use crate::content::SectionId;
use crate::icons::Icon;
use crate::theme::ThemeMode;

/// Height of the floating bar; scroll targets land this far below the top.
pub const NAV_BAR_OFFSET_PX: u32 = 80;

/// Identifies one navigation item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
    Theme,
}

/// Inline actions a navigation item can run instead of scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ToggleThemeMenu,
}

/// What clicking an item does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Section(SectionId),
    Action(NavAction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: NavId,
    pub label: &'static str,
    pub icon: Icon,
    pub target: NavTarget,
}

impl NavItem {
    /// Icon to draw; the theme item shows the mode you would switch to.
    pub fn icon_for(&self, mode: ThemeMode) -> Icon {
        match (self.id, mode) {
            (NavId::Theme, ThemeMode::Light) => Icon::Moon,
            (NavId::Theme, ThemeMode::Dark) => Icon::Sun,
            _ => self.icon,
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: NavId::Home,
        label: "Home",
        icon: Icon::Home,
        target: NavTarget::Section(SectionId::Hero),
    },
    NavItem {
        id: NavId::About,
        label: "About",
        icon: Icon::User,
        target: NavTarget::Section(SectionId::About),
    },
    NavItem {
        id: NavId::Projects,
        label: "Projects",
        icon: Icon::Code,
        target: NavTarget::Section(SectionId::Projects),
    },
    NavItem {
        id: NavId::Skills,
        label: "Skills",
        icon: Icon::Tools,
        target: NavTarget::Section(SectionId::Skills),
    },
    NavItem {
        id: NavId::Contact,
        label: "Contact",
        icon: Icon::Envelope,
        target: NavTarget::Section(SectionId::Contact),
    },
    NavItem {
        id: NavId::Theme,
        label: "Theme",
        icon: Icon::Sun,
        target: NavTarget::Action(NavAction::ToggleThemeMenu),
    },
];

/// Request to smooth-scroll the page to a section anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor: &'static str,
    pub offset_px: u32,
}

/// Presentation state of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    active: NavId,
    theme_menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: NavId::Home,
            theme_menu_open: false,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> NavId {
        self.active
    }

    pub fn is_active(&self, id: NavId) -> bool {
        self.active == id
    }

    pub fn theme_menu_open(&self) -> bool {
        self.theme_menu_open
    }

    /// Handles a click on `item`.
    ///
    /// Section items become active and return where to scroll; the theme
    /// item only toggles its menu.
    pub fn activate(&mut self, item: &NavItem) -> Option<ScrollRequest> {
        match item.target {
            NavTarget::Section(section) => {
                self.active = item.id;
                Some(ScrollRequest {
                    anchor: section.anchor(),
                    offset_px: NAV_BAR_OFFSET_PX,
                })
            }
            NavTarget::Action(NavAction::ToggleThemeMenu) => {
                self.theme_menu_open = !self.theme_menu_open;
                None
            }
        }
    }

    /// Handles a pick from the theme menu and closes it.
    ///
    /// Returns the mode to apply, or `None` when `chosen` is already current.
    pub fn choose_theme(&mut self, current: ThemeMode, chosen: ThemeMode) -> Option<ThemeMode> {
        self.theme_menu_open = false;
        (chosen != current).then_some(chosen)
    }
}
