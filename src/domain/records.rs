//! Read-only record types supplied by the static data source.
//!
//! Developers, projects and feed posts are created once when the catalog is
//! loaded and are never mutated by the presentation engine. Field names follow
//! the camelCase layout of the bundled JSON datasets.

use serde::{Deserialize, Serialize};

/// Unique identifier shared by every record kind.
pub type RecordId = u32;

/// Access to the identifier of a record.
pub trait Identified {
    /// Returns the record's unique id.
    fn id(&self) -> RecordId;
}

/// A community member shown on the developers page and on profile pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: RecordId,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub contributions: u32,
    /// Highlighted on the home page.
    #[serde(default)]
    pub featured: bool,
}

/// A showcased project.
///
/// Projects carry a single `category` used as the facet on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
}

/// A community feed post.
///
/// `likes` is the baseline counter a feed item starts from every time it is
/// mounted; the live counter is owned by [`crate::feed::FeedState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: RecordId,
    pub author: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub shares: u32,
    #[serde(default)]
    pub timestamp: String,
}

impl Identified for Developer {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Project {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for Post {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Developer {
    /// Formats a statistic the way profile cards display it (`1.2k` above 999).
    ///
    /// ```
    /// use devhub::domain::Developer;
    ///
    /// assert_eq!(Developer::compact_stat(950), "950");
    /// assert_eq!(Developer::compact_stat(1240), "1.2k");
    /// ```
    #[must_use]
    pub fn compact_stat(value: u32) -> String {
        if value >= 1000 {
            format!("{:.1}k", f64::from(value) / 1000.0)
        } else {
            value.to_string()
        }
    }
}
