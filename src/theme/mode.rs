//! The display mode flag consumed by every visual component.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DevHubError;

/// Process-wide color mode.
///
/// Persisted as the lowercase strings `"dark"` and `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Returns the persisted representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Resolves a persisted slot value, falling back to [`ThemeMode::Dark`] when
    /// the value is missing or not one of the two known strings.
    ///
    /// ```
    /// use devhub::theme::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::from_persisted(Some("light")), ThemeMode::Light);
    /// assert_eq!(ThemeMode::from_persisted(Some("neon")), ThemeMode::Dark);
    /// assert_eq!(ThemeMode::from_persisted(None), ThemeMode::Dark);
    /// ```
    #[must_use]
    pub fn from_persisted(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for ThemeMode {
    type Err = DevHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(DevHubError::Config(format!("unknown theme mode: {other}"))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
