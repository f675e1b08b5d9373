// Rust guideline compliant 2026-02-06

//! Filter and sort state owned by a listing screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel used on the wire and in the category bar for "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Client-side sort criterion, also sent to the server as an ordering directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Keep the order the server returned.
    #[default]
    None,
    /// By name (the client fallback compares last names).
    Name,
    /// By city.
    City,
    /// Nearest first; requires the viewer's location and is ordered server-side only.
    Distance,
}

impl SortCriterion {
    /// Returns the `ordering` query value for this criterion.
    #[must_use]
    pub fn ordering(self) -> Option<&'static str> {
        match self {
            SortCriterion::None => None,
            SortCriterion::Name => Some("first_name"),
            SortCriterion::City => Some("city"),
            SortCriterion::Distance => Some("distance"),
        }
    }

    /// Whether this criterion needs the viewer's coordinates.
    #[must_use]
    pub fn needs_location(self) -> bool {
        self == SortCriterion::Distance
    }
}

impl FromStr for SortCriterion {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.to_lowercase().as_str() {
            "none" | "" => Ok(SortCriterion::None),
            "name" | "by-name" | "by_name" => Ok(SortCriterion::Name),
            "city" | "by-city" | "by_city" => Ok(SortCriterion::City),
            "distance" | "by-distance" | "by_distance" | "nearest" => {
                Ok(SortCriterion::Distance)
            }
            _ => Err(crate::Error::InvalidInput(format!(
                "Invalid sort criterion: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortCriterion::None => "none",
            SortCriterion::Name => "name",
            SortCriterion::City => "city",
            SortCriterion::Distance => "distance",
        };
        f.write_str(label)
    }
}

/// Category selection: either every category or one exact label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exact, case-sensitive category label.
    Only(String),
}

impl CategoryFilter {
    /// Builds a filter from a category bar entry, mapping the sentinel to `All`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES || label.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Returns the category to send to the server, if any.
    #[must_use]
    pub fn as_query(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.as_str()),
        }
    }

    /// Whether a record with this category passes the filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query().unwrap_or(ALL_CATEGORIES))
    }
}

/// Local search/filter/sort state of a listing screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively.
    pub search: String,
    /// Selected category.
    pub category: CategoryFilter,
    /// Active sort criterion.
    pub sort: SortCriterion,
}
