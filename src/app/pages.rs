//! View-local state of each routable page.
//!
//! A [`PageState`] is created when its route mounts and dropped when it
//! unmounts. Nothing in it outlives the view: search queries, facet
//! selections, likes and the follow flag all start over on every mount.

use crate::domain::{Catalog, Developer, Post, Project, RecordId, Route};
use crate::feed::{FeedState, LikeState};
use crate::filter::ListingState;

/// Community feed page: a searchable post listing plus like state.
#[derive(Debug, Clone)]
pub struct CommunityPage {
    pub listing: ListingState<Post>,
    pub feed: FeedState,
}

impl CommunityPage {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        let feed = FeedState::new(&posts);
        Self {
            listing: ListingState::new(posts),
            feed,
        }
    }

    fn sync_feed(&mut self) {
        self.feed.sync_visible(&self.listing.visible_ids());
    }
}

/// Home page highlights, derived once from the catalog on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub featured_developers: Vec<Developer>,
    pub featured_projects: Vec<Project>,
}

impl HomePage {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            featured_developers: catalog.featured_developers().cloned().collect(),
            featured_projects: catalog.featured_projects().to_vec(),
        }
    }
}

/// Developer profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    /// The developer shown; `None` only when the catalog has no developers.
    pub developer: Option<Developer>,
    /// Id parsed from the location, if it was a positive integer.
    pub requested_id: Option<RecordId>,
    /// Whether the default developer is shown instead of the requested one.
    pub is_fallback: bool,
    pub following: bool,
    pub projects: Vec<Project>,
}

impl ProfileView {
    #[must_use]
    pub fn new(requested_id: Option<RecordId>, catalog: &Catalog) -> Self {
        let developer = catalog.developer_or_default(requested_id).cloned();
        let is_fallback = developer.as_ref().map(|d| d.id) != requested_id;
        if is_fallback {
            tracing::debug!(requested_id = ?requested_id, "profile falls back to default developer");
        }

        Self {
            developer,
            requested_id,
            is_fallback,
            following: false,
            projects: catalog.profile_projects().to_vec(),
        }
    }

    /// Flips the follow flag and returns it.
    pub fn toggle_follow(&mut self) -> bool {
        self.following = !self.following;
        self.following
    }
}

/// State of one mounted page.
#[derive(Debug, Clone)]
pub enum PageState {
    Home(HomePage),
    Developers(ListingState<Developer>),
    Projects(ListingState<Project>),
    Community(CommunityPage),
    Profile(ProfileView),
    About,
    Contact,
}

impl PageState {
    /// Builds the initial state of `route` from the catalog.
    #[must_use]
    pub fn mount(route: Route, catalog: &Catalog) -> Self {
        match route {
            Route::Home => Self::Home(HomePage::new(catalog)),
            Route::Developers => Self::Developers(ListingState::new(catalog.developers().to_vec())),
            Route::Projects => Self::Projects(ListingState::new(catalog.projects().to_vec())),
            Route::Community => Self::Community(CommunityPage::new(catalog.posts().to_vec())),
            Route::Profile { id } => Self::Profile(ProfileView::new(id, catalog)),
            Route::About => Self::About,
            Route::Contact => Self::Contact,
        }
    }

    /// Sets the search query of a listing page. Returns whether anything changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        match self {
            Self::Developers(listing) => listing.set_query(query),
            Self::Projects(listing) => listing.set_query(query),
            Self::Community(page) => {
                let changed = page.listing.set_query(query);
                if changed {
                    page.sync_feed();
                }
                changed
            }
            _ => false,
        }
    }

    /// Selects a facet on a listing page. Returns whether anything changed.
    pub fn select_facet(&mut self, label: &str) -> bool {
        match self {
            Self::Developers(listing) => listing.select_facet(label),
            Self::Projects(listing) => listing.select_facet(label),
            Self::Community(page) => {
                let changed = page.listing.select_facet(label);
                if changed {
                    page.sync_feed();
                }
                changed
            }
            _ => false,
        }
    }

    /// Toggles a like on the community page.
    pub fn toggle_like(&mut self, id: RecordId) -> Option<LikeState> {
        match self {
            Self::Community(page) => page.feed.toggle_like(id),
            _ => None,
        }
    }

    /// Toggles the follow flag on a profile page.
    pub fn toggle_follow(&mut self) -> Option<bool> {
        match self {
            Self::Profile(profile) => Some(profile.toggle_follow()),
            _ => None,
        }
    }
}
