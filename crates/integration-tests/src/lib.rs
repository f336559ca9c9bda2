//! Integration tests for the Navjyoti storefront client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p navjyoti-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart state surviving client restarts on disk
//! - `catalog_filtering` - Search, category and sort over a scanned page
//! - `checkout_flow` - Form validation, hand-off and timed UI effects
//!
//! Tests run against a [`FileStore`] in a temporary directory, so no
//! external services are needed.

use std::path::Path;

use tempfile::TempDir;

use navjyoti_storefront::{FileStore, ProductCard, StoreClient, TimingConfig};

/// A data directory that is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// A store over the data directory.
    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(self.dir.path())
    }

    /// A client over the data directory with default timing. Each call
    /// restores the cart from disk, like a page load.
    #[must_use]
    pub fn client(&self) -> StoreClient<FileStore> {
        StoreClient::new(self.store(), TimingConfig::default())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Product cards as rendered on the shop page.
#[must_use]
pub fn shop_page() -> Vec<ProductCard> {
    vec![
        ProductCard::new("Cotton Kurta", "Breathable handloom cotton. ₹500"),
        ProductCard::new("Jute Bag", "Sturdy jute tote. Rs. 300"),
        ProductCard::new("Silk Suit", "Festive silk suit set. ₹1200"),
        ProductCard::new("Coir Doormat", "Pack of 2 doormats. ₹450"),
        ProductCard::new("Hand-dyed Stole", "Price on request"),
    ]
}
