//! Read-only catalog of developers, projects and posts.
//!
//! The catalog stands in for the site's static datasets. It is loaded once and
//! handed to pages as order-preserving slices; nothing in the engine mutates it.
//! The bundled datasets are embedded at compile time from `data/*.json`.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use super::error::{DevHubError, Result};
use super::records::{Developer, Identified, Post, Project, RecordId};

const DEVELOPERS_JSON: &str = include_str!("../../data/developers.json");
const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const POSTS_JSON: &str = include_str!("../../data/posts.json");

/// Number of projects shown on a developer profile.
pub const PROFILE_PROJECT_COUNT: usize = 3;

/// Number of featured developers shown on the home page.
pub const FEATURED_DEVELOPER_LIMIT: usize = 4;

/// Number of projects shown on the home page.
pub const FEATURED_PROJECT_COUNT: usize = 3;

/// The static datasets consumed by the listing, feed and profile pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    developers: Vec<Developer>,
    projects: Vec<Project>,
    posts: Vec<Post>,
}

impl Catalog {
    /// Builds a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`DevHubError::Catalog`] if any dataset contains a duplicate id.
    pub fn new(developers: Vec<Developer>, projects: Vec<Project>, posts: Vec<Post>) -> Result<Self> {
        ensure_unique_ids("developers", &developers)?;
        ensure_unique_ids("projects", &projects)?;
        ensure_unique_ids("posts", &posts)?;

        Ok(Self {
            developers,
            projects,
            posts,
        })
    }

    /// Parses a catalog from three JSON arrays.
    ///
    /// # Errors
    ///
    /// Returns [`DevHubError::Catalog`] if a document is not a valid record
    /// array or contains duplicate ids.
    pub fn from_json(developers: &str, projects: &str, posts: &str) -> Result<Self> {
        let _span = tracing::debug_span!("catalog_from_json").entered();

        let catalog = Self::new(
            parse_dataset("developers", developers)?,
            parse_dataset("projects", projects)?,
            parse_dataset("posts", posts)?,
        )?;

        tracing::debug!(
            developers = catalog.developers.len(),
            projects = catalog.projects.len(),
            posts = catalog.posts.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads the datasets bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`DevHubError::Catalog`] if the embedded JSON is malformed.
    ///
    /// ```
    /// use devhub::domain::Catalog;
    ///
    /// let catalog = Catalog::embedded()?;
    /// assert!(!catalog.developers().is_empty());
    /// # Ok::<(), devhub::DevHubError>(())
    /// ```
    pub fn embedded() -> Result<Self> {
        Self::from_json(DEVELOPERS_JSON, PROJECTS_JSON, POSTS_JSON)
    }

    #[must_use]
    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Looks up a developer for a profile page.
    ///
    /// Unknown or missing ids resolve to the first developer in the dataset.
    /// Returns `None` only when the dataset is empty.
    #[must_use]
    pub fn developer_or_default(&self, id: Option<RecordId>) -> Option<&Developer> {
        id.and_then(|id| self.developers.iter().find(|d| d.id == id))
            .or_else(|| self.developers.first())
    }

    /// Projects listed on a profile page (the first few of the dataset).
    #[must_use]
    pub fn profile_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(PROFILE_PROJECT_COUNT)]
    }

    /// Developers flagged `featured`, in dataset order, at most
    /// [`FEATURED_DEVELOPER_LIMIT`] of them.
    pub fn featured_developers(&self) -> impl Iterator<Item = &Developer> {
        self.developers
            .iter()
            .filter(|developer| developer.featured)
            .take(FEATURED_DEVELOPER_LIMIT)
    }

    /// Leading projects of the dataset shown on the home page.
    #[must_use]
    pub fn featured_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(FEATURED_PROJECT_COUNT)]
    }
}

fn parse_dataset<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json)
        .map_err(|e| DevHubError::Catalog(format!("failed to parse {name}: {e}")))
}

fn ensure_unique_ids<T: Identified>(name: &str, records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DevHubError::Catalog(format!(
                "duplicate id {} in {name}",
                record.id()
            )));
        }
    }
    Ok(())
}
