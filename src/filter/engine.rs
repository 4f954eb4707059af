//! Pure filtering and facet enumeration.
//!
//! [`filter`] derives the visible subset of a dataset from a free-text query and
//! a categorical facet. It keeps no state: the same inputs always produce the
//! same, value-equal output, in the original relative order.

use std::collections::BTreeSet;

/// Label of the facet value that matches every record.
pub const ALL_FACET: &str = "All";

/// Reads one searchable text field of a record.
pub type TextAccessor<T> = fn(&T) -> &str;

/// Reads the facet values a record belongs to.
pub type FacetAccessor<T> = fn(&T) -> &[String];

/// A single-valued categorical filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Facet {
    /// Matches every record.
    #[default]
    All,
    /// Matches records whose facet set contains exactly this value.
    Value(String),
}

impl Facet {
    /// Parses a facet label; `"All"` maps to [`Facet::All`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_FACET {
            Self::All
        } else {
            Self::Value(label.to_string())
        }
    }

    /// Returns the label shown on the facet control.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_FACET,
            Self::Value(value) => value,
        }
    }

    /// Exact membership test against a record's facet values.
    #[must_use]
    pub fn matches(&self, values: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Value(wanted) => values.iter().any(|v| v == wanted),
        }
    }
}

impl From<&str> for Facet {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

/// Query and facet for one derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free text, matched case-insensitively as a substring.
    pub query: String,
    pub facet: Facet,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, facet: impl Into<Facet>) -> Self {
        Self {
            query: query.into(),
            facet: facet.into(),
        }
    }

    /// Whether these criteria return the dataset unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.facet == Facet::All
    }
}

/// Filters `records` by free text across `fields` AND by facet.
///
/// A record passes the text test if the lowercased query is a substring of any
/// lowercased field; an empty query passes everything. It passes the facet test
/// if the facet is [`Facet::All`] or appears in the record's facet values.
///
/// ```
/// use devhub::filter::{filter, FilterCriteria};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Tool { name: String, kinds: Vec<String> }
///
/// fn name(t: &Tool) -> &str { &t.name }
/// fn kinds(t: &Tool) -> &[String] { &t.kinds }
///
/// let tools = vec![
///     Tool { name: "Cargo".into(), kinds: vec!["Build".into()] },
///     Tool { name: "Clippy".into(), kinds: vec!["Lint".into()] },
/// ];
/// let found = filter(&tools, &FilterCriteria::new("CL", "All"), &[name], kinds);
/// assert_eq!(found, vec![tools[1].clone()]);
/// ```
#[must_use]
pub fn filter<T: Clone>(
    records: &[T],
    criteria: &FilterCriteria,
    fields: &[TextAccessor<T>],
    facet: FacetAccessor<T>,
) -> Vec<T> {
    let needle = criteria.query.to_lowercase();

    records
        .iter()
        .filter(|&record| criteria.facet.matches(facet(record)) && matches_query(record, &needle, fields))
        .cloned()
        .collect()
}

/// Case-insensitive substring test over the union of `fields`.
///
/// `needle` must already be lowercased.
#[must_use]
pub fn matches_query<T>(record: &T, needle: &str, fields: &[TextAccessor<T>]) -> bool {
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field(record).to_lowercase().contains(needle))
}

/// Enumerates the facet values of a dataset for the filter controls.
///
/// Values are deduplicated and sorted ascending, with `"All"` prepended. A
/// record value literally equal to `"All"` is folded into the leading entry.
#[must_use]
pub fn facet_options<T>(records: &[T], facet: FacetAccessor<T>) -> Vec<String> {
    let values: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| facet(record).iter().map(String::as_str))
        .filter(|value| *value != ALL_FACET)
        .collect();

    std::iter::once(ALL_FACET)
        .chain(values)
        .map(String::from)
        .collect()
}
