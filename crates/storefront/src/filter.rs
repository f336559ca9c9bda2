//! Search, category filter and sort over the catalog.

use core::fmt;
use std::cmp::Ordering;

use feruca::Collator;

use navjyoti_core::{Category, CategoryError};

use crate::catalog::{Catalog, ProductEntry};

/// Catalog sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    /// Parse from the sort drop-down value. Unknown values sort by name.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            _ => Self::Name,
        }
    }

    /// Convert to the drop-down value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    fn compare(self, collator: &mut Collator, a: &ProductEntry, b: &ProductEntry) -> Ordering {
        match self {
            Self::Name => compare_titles(collator, a, b),
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
        }
    }
}

/// Category selection: everything, or a single category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse from the category drop-down value.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError` for values that are neither `all` nor a
    /// category slug.
    pub fn parse(s: &str) -> Result<Self, CategoryError> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }

    /// Whether `category` passes this filter.
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Current search, category and sort selection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    search_query: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Criteria that match everything, sorted by name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text. It is stored lowercased.
    #[must_use]
    pub fn with_search(mut self, query: &str) -> Self {
        self.set_search(query);
        self
    }

    /// Set the category filter.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the search text. It is stored lowercased.
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_lowercase();
    }

    /// The lowercased search text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    fn admits(&self, entry: &ProductEntry) -> bool {
        entry.matches_query(&self.search_query) && self.category.admits(entry.category)
    }
}

/// Filter and sort the catalog.
///
/// Returns catalog indices in display order. The sort is stable, so entries
/// with equal keys keep their page order.
#[must_use]
pub fn apply(catalog: &Catalog, criteria: &FilterCriteria) -> FilterOutcome {
    let entries = catalog.entries();
    let mut order: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| criteria.admits(entry))
        .map(|(index, _)| index)
        .collect();

    let mut collator = Collator::default();
    order.sort_by(|&a, &b| match (entries.get(a), entries.get(b)) {
        (Some(a), Some(b)) => criteria.sort.compare(&mut collator, a, b),
        _ => Ordering::Equal,
    });

    FilterOutcome {
        order,
        total: entries.len(),
    }
}

/// Alphabetical title order using the Unicode Collation Algorithm (CLDR root
/// collation), so accented letters sort next to their base letters.
fn compare_titles(collator: &mut Collator, a: &ProductEntry, b: &ProductEntry) -> Ordering {
    collator.collate(&a.normalized_title, &b.normalized_title)
}

/// Result of applying criteria to a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Matching catalog indices in display order.
    pub order: Vec<usize>,
    /// Number of products in the catalog.
    pub total: usize,
}

impl FilterOutcome {
    /// Per-product visibility, indexed like the catalog.
    #[must_use]
    pub fn visibility(&self) -> Vec<bool> {
        let mut shown = vec![false; self.total];
        for &index in &self.order {
            if let Some(flag) = shown.get_mut(index) {
                *flag = true;
            }
        }
        shown
    }

    /// Matching and total product counts.
    #[must_use]
    pub fn count(&self) -> ResultCount {
        ResultCount {
            shown: self.order.len(),
            total: self.total,
        }
    }

    /// Resolve the display order into entries.
    pub fn entries<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a ProductEntry> + 'a {
        self.order.iter().filter_map(|&index| catalog.get(index))
    }
}

/// Counts shown next to the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCount {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} products", self.shown, self.total)
    }
}
