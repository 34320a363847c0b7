//! Shopify API version definitions.
//!
//! [`ApiVersion`] selects the `/admin/api/{version}` segment of every REST path.

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Shopify API version.
///
/// Shopify releases new API versions quarterly (January, April, July, October).
/// Known stable releases have their own variants; `Unstable` targets the
/// development channel and `Custom` carries any other well-formed `YYYY-MM`.
///
/// # Example
///
/// ```rust
/// use shopify_fulfillment_orders::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(version.to_string(), "2024-10");
/// assert!(ApiVersion::latest().is_stable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-01
    V2024_01,
    /// API version 2024-04
    V2024_04,
    /// API version 2024-07
    V2024_07,
    /// API version 2024-10
    V2024_10,
    /// API version 2025-01
    V2025_01,
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// API version 2025-10
    V2025_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Known stable releases, oldest first.
    const STABLE: [(Self, &'static str); 8] = [
        (Self::V2024_01, "2024-01"),
        (Self::V2024_04, "2024-04"),
        (Self::V2024_07, "2024-07"),
        (Self::V2024_10, "2024-10"),
        (Self::V2025_01, "2025-01"),
        (Self::V2025_04, "2025-04"),
        (Self::V2025_07, "2025-07"),
        (Self::V2025_10, "2025-10"),
    ];

    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns the oldest version inside Shopify's roughly 12-month support window.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_01
    }

    /// Returns all supported stable versions in chronological order.
    #[must_use]
    pub fn supported_versions() -> Vec<Self> {
        Self::STABLE
            .into_iter()
            .map(|(version, _)| version)
            .filter(Self::is_supported)
            .collect()
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns `true` if this version is within Shopify's support window.
    ///
    /// `Unstable` and `Custom` versions are always considered supported.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.is_deprecated()
    }

    /// Returns `true` for stable versions older than [`Self::minimum_supported`].
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.is_stable() && *self < Self::minimum_supported()
    }

    fn ordinal(&self) -> usize {
        match self {
            Self::Unstable => Self::STABLE.len(),
            Self::Custom(_) => Self::STABLE.len() + 1,
            stable => Self::STABLE
                .iter()
                .position(|(known, _)| known == stable)
                .unwrap_or_default(),
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        match s.split_once('-') {
            Some((year, month)) => {
                year.len() == 4
                    && year.chars().all(|c| c.is_ascii_digit())
                    && matches!(month, "01" | "04" | "07" | "10")
            }
            None => false,
        }
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(s) => f.write_str(s),
            stable => {
                let name = Self::STABLE
                    .iter()
                    .find(|(known, _)| known == stable)
                    .map_or("", |(_, name)| name);
                f.write_str(name)
            }
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some((version, _)) = Self::STABLE.into_iter().find(|(_, name)| *name == s) {
            return Ok(version);
        }
        if Self::is_valid_version_format(&s) {
            Ok(Self::Custom(s))
        } else {
            Err(ConfigError::InvalidApiVersion { version: s })
        }
    }
}
