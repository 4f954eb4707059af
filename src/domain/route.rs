//! Route table and route keys.
//!
//! A [`RouteKey`] is the canonical path of a navigable view; two locations with
//! the same key share one mounted-view identity. A [`Route`] is what a key
//! resolves to once matched against the registered route table. Matching is
//! exact: there is no prefix matching and no trailing-slash normalization.

use std::fmt;

use super::records::RecordId;

/// Path prefix of the profile route (`/profile/{id}`).
const PROFILE_PREFIX: &str = "/profile/";

/// The fixed table of registered route patterns.
pub const REGISTERED_ROUTES: [&str; 7] = [
    "/",
    "/developers",
    "/projects",
    "/community",
    "/profile/{id}",
    "/about",
    "/contact",
];

/// Canonical identifier of a navigable view: the location path as requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(String);

impl RouteKey {
    /// Wraps a location path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the key against the registered route table.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        Route::resolve(&self.0)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteKey {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RouteKey {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// A view reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Developers,
    Projects,
    Community,
    /// Developer profile. `id` is `None` when the path segment is not a
    /// positive integer; the profile view then falls back to the default record.
    Profile { id: Option<RecordId> },
    About,
    Contact,
}

impl Route {
    /// Matches a location path against the registered route table.
    ///
    /// Returns `None` for paths that are not registered. The profile pattern
    /// accepts any single non-empty segment after `/profile/`.
    ///
    /// ```
    /// use devhub::domain::Route;
    ///
    /// assert_eq!(Route::resolve("/developers"), Some(Route::Developers));
    /// assert_eq!(Route::resolve("/profile/3"), Some(Route::Profile { id: Some(3) }));
    /// assert_eq!(Route::resolve("/profile/abc"), Some(Route::Profile { id: None }));
    /// assert_eq!(Route::resolve("/developers/"), None);
    /// ```
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let route = match path {
            "/" => Self::Home,
            "/developers" => Self::Developers,
            "/projects" => Self::Projects,
            "/community" => Self::Community,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            other => {
                let segment = other.strip_prefix(PROFILE_PREFIX)?;
                if segment.is_empty() || segment.contains('/') {
                    return None;
                }
                Self::Profile {
                    id: parse_profile_id(segment),
                }
            }
        };
        Some(route)
    }

    /// Returns the registered pattern this route was matched by.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Home => REGISTERED_ROUTES[0],
            Self::Developers => REGISTERED_ROUTES[1],
            Self::Projects => REGISTERED_ROUTES[2],
            Self::Community => REGISTERED_ROUTES[3],
            Self::Profile { .. } => REGISTERED_ROUTES[4],
            Self::About => REGISTERED_ROUTES[5],
            Self::Contact => REGISTERED_ROUTES[6],
        }
    }
}

/// Parses a profile path segment as a positive integer id.
fn parse_profile_id(segment: &str) -> Option<RecordId> {
    segment.parse::<RecordId>().ok().filter(|id| *id > 0)
}
