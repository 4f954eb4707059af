//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of every piece of presentation state: the
//! theme store, the navigation chrome, the transition coordinator with its
//! scheduler, and the state of the mounted page. The event handler mutates it;
//! the host reads it back through [`AppState::compute_viewmodel`].
//!
//! # Mounted pages
//!
//! Page state lives in `pages`, keyed by route. It is created on
//! [`TransitionEffect::Mount`] and dropped on [`TransitionEffect::Unmount`], so
//! the map mirrors the coordinator's mounted set and never holds more than one
//! entry.

use std::collections::BTreeMap;

use crate::domain::{Catalog, Developer, Post, Project, Route, RouteKey};
use crate::filter::{Listing, ListingState};
use crate::navigation::{chrome_style, NavigationState};
use crate::storage::PreferenceStore;
use crate::theme::ThemeStore;
use crate::transition::{FrameScheduler, TransitionCoordinator, TransitionEffect, TransitionPhase};
use crate::ui::viewmodel::{
    EmptyState, FacetChip, FeedItem, FeedView, HomeView, ListingItem, ListingView, PageBody,
    ProfileCard, UIViewModel, ViewInfo,
};

use super::actions::Action;
use super::pages::{CommunityPage, PageState, ProfileView};

/// Path shown when the configured initial location is not a registered route.
pub const FALLBACK_PATH: &str = "/";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Current display mode and its persisted preference.
    pub theme: ThemeStore<Box<dyn PreferenceStore>>,

    /// Active indicator, scroll flag and mobile menu.
    pub navigation: NavigationState,

    /// Exit-then-enter sequencing of the mounted view.
    pub transitions: TransitionCoordinator,

    /// Pending phase completions, fired by `Event::Tick`.
    pub scheduler: FrameScheduler,

    /// Read-only datasets the pages are built from.
    pub catalog: Catalog,

    /// State of the mounted page, keyed by route.
    pub pages: BTreeMap<RouteKey, PageState>,

    /// Latest host clock reading in milliseconds.
    pub clock_ms: u64,
}

impl AppState {
    /// Creates the state with `initial_path` mounted and `Active`.
    ///
    /// The theme store is used as given; call `ThemeStore::init` first if the
    /// persisted preference should be loaded. Unregistered initial paths fall
    /// back to [`FALLBACK_PATH`].
    #[must_use]
    pub fn new(
        theme: ThemeStore<Box<dyn PreferenceStore>>,
        catalog: Catalog,
        initial_path: &str,
        scroll_threshold: u32,
        scheduler: FrameScheduler,
    ) -> Self {
        let initial = RouteKey::from(initial_path);
        let (initial, route) = match initial.route() {
            Some(route) => (initial, route),
            None => {
                tracing::warn!(
                    path = %initial_path,
                    fallback = FALLBACK_PATH,
                    "initial path is not a registered route"
                );
                (RouteKey::from(FALLBACK_PATH), Route::Home)
            }
        };

        let mut pages = BTreeMap::new();
        pages.insert(initial.clone(), PageState::mount(route, &catalog));

        Self {
            theme,
            navigation: NavigationState::new(initial.as_str(), scroll_threshold),
            transitions: TransitionCoordinator::new(initial),
            scheduler,
            catalog,
            pages,
            clock_ms: 0,
        }
    }

    /// Applies coordinator effects to the page map and scheduler.
    ///
    /// Returns the host actions the effects imply.
    pub fn apply_effects(&mut self, effects: Vec<TransitionEffect>) -> Vec<Action> {
        let mut actions = vec![];

        for effect in effects {
            match effect {
                TransitionEffect::Mount(key) => {
                    if let Some(route) = key.route() {
                        tracing::debug!(route = %key, "mounting page");
                        self.pages.insert(key, PageState::mount(route, &self.catalog));
                    }
                }
                TransitionEffect::Unmount(key) => {
                    tracing::debug!(route = %key, "unmounting page");
                    self.pages.remove(&key);
                }
                TransitionEffect::Schedule { key, ticket, phase } => {
                    self.scheduler.schedule(ticket, self.clock_ms);
                    actions.push(Action::StartAnimation {
                        route: key,
                        phase,
                        ticket,
                    });
                }
                TransitionEffect::Cancel(ticket) => {
                    self.scheduler.discard(ticket);
                }
                TransitionEffect::Activate(key) => {
                    tracing::debug!(route = %key, "page active");
                }
            }
        }

        actions
    }

    /// Moves the clock forward to `now_ms`; readings from the past are ignored.
    ///
    /// Returns the clock after the update.
    pub fn observe_clock(&mut self, now_ms: u64) -> u64 {
        self.clock_ms = self.clock_ms.max(now_ms);
        self.clock_ms
    }

    /// The page that accepts input: mounted and not exiting.
    pub fn interactive_page_mut(&mut self) -> Option<&mut PageState> {
        let key = self.transitions.mounted();
        if matches!(
            self.transitions.phase_of(key),
            Some(TransitionPhase::Exiting)
        ) {
            return None;
        }
        self.pages.get_mut(key)
    }

    /// Computes a display-ready snapshot of the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let mode = self.theme.get();
        let key = self.transitions.mounted();

        let view = match (self.pages.get(key), self.transitions.phase_of(key)) {
            (Some(page), Some(phase)) => Some(ViewInfo {
                route: key.clone(),
                phase,
                body: Self::compute_body(key, page),
            }),
            _ => None,
        };

        UIViewModel {
            theme: mode,
            chrome: chrome_style(self.navigation.is_scrolled(), mode),
            nav_items: self.navigation.nav_items(),
            mobile_menu_open: self.navigation.is_mobile_menu_open(),
            view,
        }
    }

    fn compute_body(key: &RouteKey, page: &PageState) -> PageBody {
        match page {
            PageState::Home(home) => PageBody::Home(HomeView {
                featured_developers: home.featured_developers.iter().map(developer_card).collect(),
                featured_projects: home.featured_projects.iter().map(project_card).collect(),
            }),
            PageState::About => PageBody::Static {
                title: "About".to_string(),
            },
            PageState::Contact => PageBody::Static {
                title: "Contact".to_string(),
            },
            PageState::Developers(listing) => {
                PageBody::Listing(Self::listing_view(listing, developer_card))
            }
            PageState::Projects(listing) => {
                PageBody::Listing(Self::listing_view(listing, project_card))
            }
            PageState::Community(page) => PageBody::Feed(Self::feed_view(page)),
            PageState::Profile(profile) => {
                tracing::trace!(route = %key, "computing profile card");
                PageBody::Profile(Self::profile_card(profile))
            }
        }
    }

    fn listing_view<T: Listing>(listing: &ListingState<T>, card: fn(&T) -> ListingItem) -> ListingView {
        let selected = listing.criteria().facet.label();
        ListingView {
            query: listing.criteria().query.clone(),
            facet_chips: listing
                .facet_chips()
                .iter()
                .map(|label| FacetChip {
                    label: label.clone(),
                    is_selected: label == selected,
                })
                .collect(),
            items: listing.visible().iter().map(card).collect(),
            summary: listing.summary(),
            empty_state: listing
                .is_empty_result()
                .then(|| EmptyState::for_noun(T::NOUN)),
        }
    }

    fn feed_view(page: &CommunityPage) -> FeedView {
        let posts = page
            .listing
            .visible()
            .iter()
            .filter_map(|post| {
                let like = page.feed.like_state(post.id)?;
                Some(FeedItem {
                    id: post.id,
                    author: post.author.clone(),
                    content: post.content.clone(),
                    liked: like.liked,
                    likes: like.count,
                })
            })
            .collect();

        FeedView {
            listing: Self::listing_view(&page.listing, post_card),
            posts,
        }
    }

    fn profile_card(profile: &ProfileView) -> ProfileCard {
        let follow_label = if profile.following { "Following" } else { "Follow" };
        let project_titles = profile.projects.iter().map(|p| p.title.clone()).collect();

        let Some(developer) = &profile.developer else {
            return ProfileCard {
                name: String::new(),
                username: String::new(),
                bio: String::new(),
                skills: vec![],
                stats: vec![],
                follow_label: follow_label.to_string(),
                is_fallback: profile.is_fallback,
                project_titles,
            };
        };

        let stats = [
            ("Projects", developer.projects),
            ("Followers", developer.followers),
            ("Following", developer.following),
            ("Contributions", developer.contributions),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), Developer::compact_stat(value)))
        .collect();

        ProfileCard {
            name: developer.name.clone(),
            username: format!("@{}", developer.username),
            bio: developer.bio.clone(),
            skills: developer.skills.clone(),
            stats,
            follow_label: follow_label.to_string(),
            is_fallback: profile.is_fallback,
            project_titles,
        }
    }
}

fn developer_card(developer: &Developer) -> ListingItem {
    ListingItem {
        id: developer.id,
        title: developer.name.clone(),
        subtitle: format!("@{}", developer.username),
        badges: developer.skills.clone(),
    }
}

fn project_card(project: &Project) -> ListingItem {
    ListingItem {
        id: project.id,
        title: project.title.clone(),
        subtitle: project.description.clone(),
        badges: project.tech_stack.clone(),
    }
}

fn post_card(post: &Post) -> ListingItem {
    ListingItem {
        id: post.id,
        title: post.author.clone(),
        subtitle: post.content.clone(),
        badges: post.tags.iter().map(|tag| format!("#{tag}")).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;

    fn state_at(path: &str) -> AppState {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryPreferenceStore::new());
        AppState::new(
            ThemeStore::new(store, "devhub-theme"),
            Catalog::embedded().unwrap(),
            path,
            20,
            FrameScheduler::default(),
        )
    }

    #[test]
    fn unregistered_initial_path_falls_back_to_home() {
        let state = state_at("/nowhere");
        assert_eq!(state.transitions.mounted().as_str(), "/");
        assert!(matches!(state.pages.get(&RouteKey::from("/")), Some(PageState::Home(_))));
    }

    #[test]
    fn viewmodel_shows_active_listing() {
        let state = state_at("/developers");
        let vm = state.compute_viewmodel();
        let view = vm.view.unwrap();
        assert_eq!(view.phase, TransitionPhase::Active);

        let PageBody::Listing(listing) = view.body else {
            panic!("expected listing body");
        };
        assert_eq!(listing.summary, "Showing 6 developers");
        assert_eq!(listing.facet_chips.len(), 8);
        assert!(listing.facet_chips[0].is_selected);
        assert_eq!(vm.nav_items.iter().filter(|i| i.is_active).count(), 1);
    }

    #[test]
    fn profile_card_formats_stats() {
        let state = state_at("/profile/1");
        let Some(PageBody::Profile(card)) = state.compute_viewmodel().view.map(|v| v.body) else {
            panic!("expected profile body");
        };
        assert_eq!(card.username, "@sarahchen");
        assert_eq!(card.stats[1], ("Followers".to_string(), "2.8k".to_string()));
        assert_eq!(card.follow_label, "Follow");
        assert_eq!(card.project_titles.len(), 3);
    }

    #[test]
    fn home_view_lists_featured_cards() {
        let state = state_at("/");
        let Some(PageBody::Home(home)) = state.compute_viewmodel().view.map(|v| v.body) else {
            panic!("expected home body");
        };
        let ids: Vec<_> = home.featured_developers.iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
        assert_eq!(home.featured_projects.len(), 3);
        assert_eq!(home.featured_projects[0].title, state.catalog.projects()[0].title);
    }
}
