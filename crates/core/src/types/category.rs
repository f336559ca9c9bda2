//! Product categories.
//!
//! The storefront groups its handloom products into a small fixed set of
//! categories. Categories are derived from product titles, never stored.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a category slug is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0}")]
pub struct CategoryError(pub String);

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Kurtas,
    Suits,
    Bags,
    Mats,
    Other,
}

impl Category {
    /// All categories, in classification precedence order.
    pub const ALL: [Self; 5] = [
        Self::Kurtas,
        Self::Suits,
        Self::Bags,
        Self::Mats,
        Self::Other,
    ];

    /// Classify a product by its title.
    ///
    /// Matching is a case-insensitive substring test. The first matching rule
    /// wins: kurta, then suit, then bag, then mat (which also covers doormat).
    ///
    /// ```
    /// use navjyoti_core::Category;
    ///
    /// assert_eq!(Category::classify("Cotton Kurta Suit"), Category::Kurtas);
    /// assert_eq!(Category::classify("Jute DOORMAT"), Category::Mats);
    /// assert_eq!(Category::classify("Table Runner"), Category::Other);
    /// ```
    #[must_use]
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("kurta") {
            Self::Kurtas
        } else if title.contains("suit") {
            Self::Suits
        } else if title.contains("bag") {
            Self::Bags
        } else if title.contains("mat") || title.contains("doormat") {
            Self::Mats
        } else {
            Self::Other
        }
    }

    /// Returns the slug used in filter values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kurtas => "kurtas",
            Self::Suits => "suits",
            Self::Bags => "bags",
            Self::Mats => "mats",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label (slug with a capitalized first letter).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kurtas => "Kurtas",
            Self::Suits => "Suits",
            Self::Bags => "Bags",
            Self::Mats => "Mats",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kurtas" => Ok(Self::Kurtas),
            "suits" => Ok(Self::Suits),
            "bags" => Ok(Self::Bags),
            "mats" => Ok(Self::Mats),
            "other" => Ok(Self::Other),
            _ => Err(CategoryError(s.to_owned())),
        }
    }
}
