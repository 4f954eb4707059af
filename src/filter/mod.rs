//! Search and facet filtering for the listing pages.
//!
//! - [`engine`]: Pure [`filter`] and [`facet_options`] over accessor functions
//! - [`listing`]: Per-record-kind field tables ([`Listing`]) and page state
//!   ([`ListingState`])

pub mod engine;
pub mod listing;

pub use engine::{
    facet_options, filter, matches_query, Facet, FacetAccessor, FilterCriteria, TextAccessor,
    ALL_FACET,
};
pub use listing::{filter_listing, Listing, ListingState};
