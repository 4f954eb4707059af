//! Navigation indicators, scroll state and the mobile menu.

pub mod state;

pub use state::{
    active_route, chrome_style, is_scrolled, ChromeStyle, NavItem, NavLink, NavigationState,
    DEFAULT_SCROLL_THRESHOLD, NAV_LINKS,
};
