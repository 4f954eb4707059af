//! Navigation chrome state derived from the current location and scroll offset.
//!
//! The active indicator is recomputed from the location on every change and
//! is never stored independently, so it cannot drift from the current route.

use crate::domain::RouteKey;
use crate::theme::ThemeMode;

/// Scroll offset (in pixels) past which the chrome switches to its scrolled style.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 20;

/// One entry of the primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// The primary navigation table, in display order.
///
/// Profile pages are routable but not listed, so no indicator is active there.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/developers", label: "Developers" },
    NavLink { path: "/projects", label: "Projects" },
    NavLink { path: "/community", label: "Community" },
    NavLink { path: "/about", label: "About" },
    NavLink { path: "/contact", label: "Contact" },
];

/// Returns the registered entry equal to `current_path`, if any.
///
/// Matching is exact string equality: `/developers/` does not activate
/// `/developers` and `/projects?x` does not activate `/projects`.
///
/// ```
/// use devhub::navigation::active_route;
///
/// let registered = ["/", "/developers"];
/// assert_eq!(active_route("/developers", &registered).unwrap().as_str(), "/developers");
/// assert_eq!(active_route("/developers/", &registered), None);
/// ```
#[must_use]
pub fn active_route(current_path: &str, registered: &[&str]) -> Option<RouteKey> {
    registered
        .iter()
        .find(|path| **path == current_path)
        .map(|path| RouteKey::from(*path))
}

/// Whether the viewport has scrolled strictly past `threshold`.
#[must_use]
pub const fn is_scrolled(offset: u32, threshold: u32) -> bool {
    offset > threshold
}

/// Background variant of the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeStyle {
    /// Not scrolled: no background.
    Transparent,
    /// Scrolled in dark mode.
    GlassDark,
    /// Scrolled in light mode.
    GlassLight,
}

/// Derives the chrome variant from the scroll flag and the display mode.
#[must_use]
pub const fn chrome_style(scrolled: bool, mode: ThemeMode) -> ChromeStyle {
    match (scrolled, mode) {
        (false, _) => ChromeStyle::Transparent,
        (true, ThemeMode::Dark) => ChromeStyle::GlassDark,
        (true, ThemeMode::Light) => ChromeStyle::GlassLight,
    }
}

/// A navigation entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub is_active: bool,
}

/// Location-derived navigation state plus the mobile menu flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: RouteKey,
    active: Option<RouteKey>,
    scroll_offset: u32,
    scroll_threshold: u32,
    mobile_menu_open: bool,
}

impl NavigationState {
    /// Creates the state for an initial location.
    #[must_use]
    pub fn new(initial_path: &str, scroll_threshold: u32) -> Self {
        Self {
            current: RouteKey::from(initial_path),
            active: active_route(initial_path, &nav_paths()),
            scroll_offset: 0,
            scroll_threshold,
            mobile_menu_open: false,
        }
    }

    /// Records a location change. The mobile menu always closes.
    ///
    /// Returns whether anything visible changed.
    pub fn on_route_change(&mut self, path: &str) -> bool {
        let menu_was_open = std::mem::replace(&mut self.mobile_menu_open, false);
        if self.current.as_str() == path {
            return menu_was_open;
        }

        self.current = RouteKey::from(path);
        self.active = active_route(path, &nav_paths());
        tracing::debug!(path = %path, active = ?self.active, "navigation location changed");
        true
    }

    /// Records a new scroll offset. Returns whether the scrolled flag flipped.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        let was_scrolled = self.is_scrolled();
        self.scroll_offset = offset;
        was_scrolled != self.is_scrolled()
    }

    /// Opens or closes the mobile menu and returns the new flag.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    #[must_use]
    pub const fn current(&self) -> &RouteKey {
        &self.current
    }

    /// The nav entry matching the current location, if it is listed.
    #[must_use]
    pub const fn active(&self) -> Option<&RouteKey> {
        self.active.as_ref()
    }

    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        is_scrolled(self.scroll_offset, self.scroll_threshold)
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    #[must_use]
    pub const fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// The nav table with the active flag set on at most one entry.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        NAV_LINKS
            .iter()
            .map(|link| NavItem {
                path: link.path,
                label: link.label,
                is_active: self.active.as_ref().is_some_and(|a| a.as_str() == link.path),
            })
            .collect()
    }
}

fn nav_paths() -> [&'static str; NAV_LINKS.len()] {
    NAV_LINKS.map(|link| link.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_route_requires_exact_match() {
        let registered = nav_paths();
        assert_eq!(active_route("/", &registered), Some(RouteKey::from("/")));
        assert_eq!(active_route("/projects?sort=stars", &registered), None);
        assert_eq!(active_route("/profile/1", &registered), None);
        assert_eq!(active_route("", &registered), None);
    }

    #[test]
    fn scroll_threshold_is_strict() {
        assert!(!is_scrolled(20, DEFAULT_SCROLL_THRESHOLD));
        assert!(is_scrolled(21, DEFAULT_SCROLL_THRESHOLD));
        assert!(!is_scrolled(0, 0));
    }

    #[test]
    fn at_most_one_item_is_active() {
        let mut nav = NavigationState::new("/", DEFAULT_SCROLL_THRESHOLD);
        for path in ["/", "/developers", "/contact", "/profile/2", "/nowhere"] {
            nav.on_route_change(path);
            let active: Vec<_> = nav.nav_items().into_iter().filter(|i| i.is_active).collect();
            assert!(active.len() <= 1);
            assert_eq!(active.first().map(|i| i.path), nav.active().map(RouteKey::as_str));
        }
    }

    #[test]
    fn route_change_closes_mobile_menu() {
        let mut nav = NavigationState::new("/", DEFAULT_SCROLL_THRESHOLD);
        assert!(nav.toggle_mobile_menu());
        assert!(nav.on_route_change("/"), "closing the menu is a visible change");
        assert!(!nav.is_mobile_menu_open());
        assert!(!nav.on_route_change("/"));
    }

    #[test]
    fn scroll_reports_only_flag_flips() {
        let mut nav = NavigationState::new("/", DEFAULT_SCROLL_THRESHOLD);
        assert!(!nav.on_scroll(10));
        assert!(nav.on_scroll(400));
        assert!(!nav.on_scroll(500));
        assert!(nav.on_scroll(20));
    }

    #[test]
    fn chrome_follows_scroll_and_mode() {
        assert_eq!(chrome_style(false, ThemeMode::Light), ChromeStyle::Transparent);
        assert_eq!(chrome_style(true, ThemeMode::Dark), ChromeStyle::GlassDark);
        assert_eq!(chrome_style(true, ThemeMode::Light), ChromeStyle::GlassLight);
    }
}
