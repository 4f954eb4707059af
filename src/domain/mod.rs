//! Domain layer for the DevHub presentation engine.
//!
//! This module contains the read-only record types, the route table and the
//! static catalog, independent of any presentation state.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`records`]: Developer, project and post records
//! - [`route`]: Registered routes and route keys
//! - [`catalog`]: The static datasets consumed by pages
//!
//! # Examples
//!
//! ```
//! use devhub::domain::{Catalog, Route};
//!
//! let catalog = Catalog::embedded()?;
//! let route = Route::resolve("/profile/999").unwrap();
//! if let Route::Profile { id } = route {
//!     let developer = catalog.developer_or_default(id).unwrap();
//!     assert_eq!(developer.id, catalog.developers()[0].id);
//! }
//! # Ok::<(), devhub::DevHubError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod records;
pub mod route;

pub use catalog::{Catalog, FEATURED_DEVELOPER_LIMIT, FEATURED_PROJECT_COUNT};
pub use error::{DevHubError, Result};
pub use records::{Developer, Identified, Post, Project, RecordId};
pub use route::{Route, RouteKey, REGISTERED_ROUTES};
