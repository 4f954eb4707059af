//! View model types representing renderable page state.
//!
//! View models are immutable snapshots computed by
//! `AppState::compute_viewmodel()`. They carry display-ready data only: the
//! host renders them without consulting the engine again.
//!
//! # Example
//!
//! ```
//! use devhub::ui::EmptyState;
//!
//! let empty = EmptyState::for_noun("developer");
//! assert_eq!(empty.message, "No developers found matching your search.");
//! ```

use crate::domain::{RecordId, RouteKey};
use crate::navigation::{ChromeStyle, NavItem};
use crate::theme::ThemeMode;
use crate::transition::TransitionPhase;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub theme: ThemeMode,

    /// Navigation bar background variant.
    pub chrome: ChromeStyle,

    /// Primary navigation with at most one active entry.
    pub nav_items: Vec<NavItem>,

    pub mobile_menu_open: bool,

    /// The mounted view, if its page state exists.
    pub view: Option<ViewInfo>,
}

/// The mounted view and what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
    pub route: RouteKey,
    pub phase: TransitionPhase,
    pub body: PageBody,
}

/// Page-specific content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    /// Pages without engine-owned state (about, contact).
    Static { title: String },
    Home(HomeView),
    Listing(ListingView),
    Feed(FeedView),
    Profile(ProfileCard),
}

/// Search box, facet chips and results of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub query: String,
    pub facet_chips: Vec<FacetChip>,
    pub items: Vec<ListingItem>,

    /// Result count line (e.g. "Showing 2 developers").
    pub summary: String,

    /// Set when the criteria exclude every record.
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetChip {
    pub label: String,
    pub is_selected: bool,
}

/// One card in a listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    pub id: RecordId,
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
}

/// Featured developer and project cards on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub featured_developers: Vec<ListingItem>,
    pub featured_projects: Vec<ListingItem>,
}

/// The community feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub listing: ListingView,
    pub posts: Vec<FeedItem>,
}

/// One post with its live like state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: RecordId,
    pub author: String,
    pub content: String,
    pub liked: bool,
    pub likes: i64,
}

/// Developer profile header, stats and projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub skills: Vec<String>,

    /// `(label, formatted value)` pairs.
    pub stats: Vec<(String, String)>,

    pub follow_label: String,
    pub is_fallback: bool,
    pub project_titles: Vec<String>,
}

/// Message shown instead of an empty result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl EmptyState {
    /// The empty-result message for a listing of `noun`s.
    #[must_use]
    pub fn for_noun(noun: &str) -> Self {
        let message = if noun == "developer" {
            "No developers found matching your search.".to_string()
        } else {
            format!("No {noun}s found.")
        };
        Self {
            message,
            subtitle: "Try a different search term or filter".to_string(),
        }
    }
}
