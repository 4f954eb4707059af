//! Path helpers for the preference and trace files.
//!
//! Configured file names may start with `~` or be relative. Relative names are
//! placed in the DevHub data directory, which follows the XDG base directory
//! layout (`$XDG_DATA_HOME/devhub`, else `~/.local/share/devhub`).

use std::path::{Path, PathBuf};

/// Name of the data directory below the platform data home.
const APP_DIR: &str = "devhub";

/// Returns the data directory for DevHub files.
///
/// Falls back to a relative `.devhub` directory when neither `XDG_DATA_HOME`
/// nor `HOME` is set.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    home_dir().map_or_else(
        || PathBuf::from(".devhub"),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use devhub::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("~user/file"), std::path::PathBuf::from("~user/file"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Resolves a configured file name: `~` is expanded and relative names are
/// placed in [`data_dir`].
#[must_use]
pub fn resolve_data_path(path: &str) -> PathBuf {
    resolve_in(&data_dir(), path)
}

fn resolve_in(base: &Path, path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
