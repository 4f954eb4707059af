//! Listing-page state built on the filter engine.
//!
//! Each record kind declares which text fields the search box covers and which
//! field drives the facet chips ([`Listing`]). A [`ListingState`] owns one page's
//! dataset, criteria and derived view, and recomputes the view whenever the
//! query or the selected facet changes.

use crate::domain::{Developer, Identified, Post, Project, RecordId};

use super::engine::{facet_options, filter, Facet, FacetAccessor, FilterCriteria, TextAccessor};

/// A record kind that can be listed, searched and faceted.
pub trait Listing: Identified + Clone + 'static {
    /// Singular noun used in result summaries ("developer", "project").
    const NOUN: &'static str;

    /// Maximum number of facet chips a page shows, `None` for all of them.
    const FACET_CHIP_LIMIT: Option<usize> = None;

    /// Text fields covered by the search box.
    fn text_fields() -> &'static [TextAccessor<Self>];

    /// Field whose values populate the facet chips.
    fn facet_field() -> FacetAccessor<Self>;
}

static DEVELOPER_FIELDS: [TextAccessor<Developer>; 3] =
    [developer_name, developer_username, developer_bio];
static PROJECT_FIELDS: [TextAccessor<Project>; 2] = [project_title, project_description];
static POST_FIELDS: [TextAccessor<Post>; 3] = [post_author, post_username, post_content];

fn developer_name(d: &Developer) -> &str {
    &d.name
}

fn developer_username(d: &Developer) -> &str {
    &d.username
}

fn developer_bio(d: &Developer) -> &str {
    &d.bio
}

fn developer_skills(d: &Developer) -> &[String] {
    &d.skills
}

fn project_title(p: &Project) -> &str {
    &p.title
}

fn project_description(p: &Project) -> &str {
    &p.description
}

fn project_category(p: &Project) -> &[String] {
    std::slice::from_ref(&p.category)
}

fn post_author(p: &Post) -> &str {
    &p.author
}

fn post_username(p: &Post) -> &str {
    &p.username
}

fn post_content(p: &Post) -> &str {
    &p.content
}

fn post_tags(p: &Post) -> &[String] {
    &p.tags
}

impl Listing for Developer {
    const NOUN: &'static str = "developer";
    const FACET_CHIP_LIMIT: Option<usize> = Some(8);

    fn text_fields() -> &'static [TextAccessor<Self>] {
        &DEVELOPER_FIELDS
    }

    fn facet_field() -> FacetAccessor<Self> {
        developer_skills
    }
}

impl Listing for Project {
    const NOUN: &'static str = "project";

    fn text_fields() -> &'static [TextAccessor<Self>] {
        &PROJECT_FIELDS
    }

    fn facet_field() -> FacetAccessor<Self> {
        project_category
    }
}

impl Listing for Post {
    const NOUN: &'static str = "post";

    fn text_fields() -> &'static [TextAccessor<Self>] {
        &POST_FIELDS
    }

    fn facet_field() -> FacetAccessor<Self> {
        post_tags
    }
}

/// Filters a dataset with the record kind's own fields.
#[must_use]
pub fn filter_listing<T: Listing>(records: &[T], criteria: &FilterCriteria) -> Vec<T> {
    filter(records, criteria, T::text_fields(), T::facet_field())
}

/// State of one listing page: dataset, current criteria and the derived view.
///
/// The facet options are computed once per dataset; the visible records are
/// recomputed on every criteria change, so reads never see a stale view.
#[derive(Debug, Clone)]
pub struct ListingState<T: Listing> {
    records: Vec<T>,
    criteria: FilterCriteria,
    facet_options: Vec<String>,
    visible: Vec<T>,
}

impl<T: Listing> ListingState<T> {
    /// Creates a page state showing the whole dataset.
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        let facet_options = facet_options(&records, T::facet_field());
        let visible = records.clone();
        Self {
            records,
            criteria: FilterCriteria::default(),
            facet_options,
            visible,
        }
    }

    /// Replaces the search query. Returns whether the criteria changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.criteria.query == query {
            return false;
        }
        self.criteria.query = query.to_string();
        self.refresh();
        true
    }

    /// Selects a facet by label. Returns whether the criteria changed.
    ///
    /// Labels that are not among [`ListingState::facet_options`] select `All`.
    pub fn select_facet(&mut self, label: &str) -> bool {
        let facet = if self.facet_options.iter().any(|option| option == label) {
            Facet::parse(label)
        } else {
            tracing::debug!(label = %label, noun = T::NOUN, "unknown facet, selecting All");
            Facet::All
        };

        if self.criteria.facet == facet {
            return false;
        }
        self.criteria.facet = facet;
        self.refresh();
        true
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Records matching the current criteria, in dataset order.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    /// Ids of the visible records, in order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible.iter().map(Identified::id).collect()
    }

    /// All facet labels, `"All"` first.
    #[must_use]
    pub fn facet_options(&self) -> &[String] {
        &self.facet_options
    }

    /// Facet labels offered as chips, honoring the record kind's chip limit.
    #[must_use]
    pub fn facet_chips(&self) -> &[String] {
        let limit = T::FACET_CHIP_LIMIT.unwrap_or(self.facet_options.len());
        &self.facet_options[..limit.min(self.facet_options.len())]
    }

    /// Whether the current criteria exclude every record.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Result count line, e.g. `Showing 1 developer` or `Showing 4 projects`.
    #[must_use]
    pub fn summary(&self) -> String {
        let count = self.visible.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("Showing {count} {}{plural}", T::NOUN)
    }

    fn refresh(&mut self) {
        let _span = tracing::debug_span!(
            "apply_listing_filter",
            noun = T::NOUN,
            total = self.records.len(),
            query_len = self.criteria.query.len(),
            facet = %self.criteria.facet.label()
        )
        .entered();

        self.visible = filter_listing(&self.records, &self.criteria);

        tracing::debug!(visible = self.visible.len(), "listing filter applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn developers() -> ListingState<Developer> {
        ListingState::new(Catalog::embedded().unwrap().developers().to_vec())
    }

    #[test]
    fn starts_with_identity_view() {
        let state = developers();
        assert_eq!(state.visible(), state.records());
        assert_eq!(state.facet_options()[0], "All");
    }

    #[test]
    fn query_searches_username_and_bio() {
        let mut state = developers();
        assert!(state.set_query("MARCUSJ"));
        assert_eq!(state.visible_ids(), vec![2]);

        assert!(state.set_query("webassembly tinkerer"));
        assert_eq!(state.visible_ids(), vec![6]);

        assert!(!state.set_query("webassembly tinkerer"));
    }

    #[test]
    fn unknown_facet_selects_all() {
        let mut state = developers();
        assert!(state.select_facet("Rust"));
        assert_eq!(state.visible_ids(), vec![2, 6]);

        assert!(state.select_facet("COBOL"));
        assert_eq!(state.criteria().facet, Facet::All);
        assert_eq!(state.visible().len(), state.records().len());
    }

    #[test]
    fn developer_chips_are_capped() {
        let state = developers();
        assert!(state.facet_options().len() > 8);
        assert_eq!(state.facet_chips().len(), 8);
        assert_eq!(state.facet_chips()[0], "All");
    }

    #[test]
    fn project_category_is_a_single_valued_facet() {
        let mut state = ListingState::new(Catalog::embedded().unwrap().projects().to_vec());
        assert_eq!(
            state.facet_options(),
            ["All", "AI/ML", "DevOps", "Systems", "Web App"]
        );
        state.select_facet("Systems");
        assert_eq!(state.visible_ids(), vec![2, 5]);
        assert_eq!(state.summary(), "Showing 2 projects");
    }

    #[test]
    fn empty_result_is_reported_not_raised() {
        let mut state = developers();
        state.set_query("no such developer anywhere");
        assert!(state.is_empty_result());
        assert_eq!(state.summary(), "Showing 0 developers");
    }
}
