//! Hazard severity level

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How dangerous the weather is
///
/// The ordering is `Normal < Severe < Extreme` and is defined by
/// [`Severity::rank`], not by declaration order, so taking the maximum
/// of several severities is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No hazardous conditions
    #[default]
    Normal,
    /// Adverse conditions, caution advised
    Severe,
    /// Dangerous conditions
    Extreme,
}

impl Severity {
    /// Numeric rank backing the total order
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Severe => 1,
            Self::Extreme => 2,
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Severe => "severe",
            Self::Extreme => "extreme",
        }
    }

    /// Headline shown above the list of detected conditions
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Normal => "Weather conditions are normal.",
            Self::Severe => "Caution: Adverse weather conditions detected.",
            Self::Extreme => "Warning: Extreme weather conditions detected!",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Normal => "🟢",
            Self::Severe => "🟠",
            Self::Extreme => "🔴",
        }
    }

    /// Maximum severity of an iterator, `Normal` when empty
    pub fn max_of(severities: impl IntoIterator<Item = Self>) -> Self {
        severities.into_iter().max().unwrap_or_default()
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
