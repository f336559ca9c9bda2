//! Product catalog built from rendered product cards.
//!
//! The presentation layer hands over each product card's title and body text
//! in page order. Scanning is a pure transform: the same cards always produce
//! the same catalog.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use navjyoti_core::{Category, Price};

/// Digits directly after a rupee marker (`₹`, `Rs`, `Rs.`).
static MARKED_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:₹|(?i:\brs\.?))\s*([0-9]+)").expect("Invalid regex")
});

/// Any run of ASCII digits.
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid regex"));

/// A product card as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    /// Card title.
    pub title: String,
    /// Card body: description and price text.
    #[serde(default)]
    pub text: String,
}

impl ProductCard {
    /// Create a card from its title and body text.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A searchable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntry {
    pub display_title: String,
    pub normalized_title: String,
    pub normalized_description: String,
    /// Whole rupees parsed from the card text, 0 when absent.
    pub price: u64,
    pub category: Category,
}

impl ProductEntry {
    /// Build an entry from a rendered card.
    #[must_use]
    pub fn from_card(card: &ProductCard) -> Self {
        Self {
            display_title: card.title.clone(),
            normalized_title: card.title.to_lowercase(),
            normalized_description: card.text.to_lowercase(),
            price: extract_price(&card.text),
            category: Category::classify(&card.title),
        }
    }

    /// Price as a [`Price`] value.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_units(self.price)
    }

    /// Whether the search query occurs in the title or description.
    ///
    /// `query` must already be lowercase. An empty query matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty()
            || self.normalized_title.contains(query)
            || self.normalized_description.contains(query)
    }
}

/// Extract a whole-rupee price from card text.
///
/// Digits following a rupee marker take precedence, so quantities mentioned
/// in the description ("pack of 2") do not shadow the price. Without a marker
/// the first run of digits is used. No digits, or a number too large for
/// `u64`, yields 0.
///
/// ```
/// use navjyoti_storefront::catalog::extract_price;
///
/// assert_eq!(extract_price("Handwoven cotton. ₹500"), 500);
/// assert_eq!(extract_price("Pack of 2 mats, ₹450"), 450);
/// assert_eq!(extract_price("Price: 1200 only"), 1200);
/// assert_eq!(extract_price("Price on request"), 0);
/// ```
#[must_use]
pub fn extract_price(text: &str) -> u64 {
    let digits = MARKED_PRICE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .or_else(|| DIGITS_RE.find(text));

    digits.map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0))
}

/// A category choice offered in the filter drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Filter value (`all` or a category slug).
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// The scanned product catalog, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ProductEntry>,
}

impl Catalog {
    /// Scan rendered cards into a catalog.
    #[must_use]
    pub fn scan(cards: &[ProductCard]) -> Self {
        let entries: Vec<ProductEntry> = cards.iter().map(ProductEntry::from_card).collect();
        tracing::debug!(products = entries.len(), "Catalog scanned");
        Self { entries }
    }

    /// Entries in page order.
    #[must_use]
    pub fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProductEntry> {
        self.entries.get(index)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Options for the category filter: `all`, then each category present in
    /// the catalog in first-seen order.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryOption> {
        let mut seen: Vec<Category> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }

        std::iter::once(CategoryOption {
            value: "all",
            label: "All",
        })
        .chain(seen.into_iter().map(|category| CategoryOption {
            value: category.as_str(),
            label: category.label(),
        }))
        .collect()
    }
}
