//! Presentation layer: display-ready snapshots of application state.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → host renderer
//! ```
//!
//! Rendering itself belongs to the host. This module only defines the
//! [`viewmodel`] types the host consumes.

pub mod viewmodel;

pub use viewmodel::{
    EmptyState, FacetChip, FeedItem, FeedView, HomeView, ListingItem, ListingView, PageBody,
    ProfileCard, UIViewModel, ViewInfo,
};
