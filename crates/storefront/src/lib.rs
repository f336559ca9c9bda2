//! Navjyoti Handloom storefront client core.
//!
//! Everything the storefront pages do on the client, without the DOM: a
//! persisted shopping cart, a catalog scanned from rendered product cards,
//! search/category/sort filtering, toast notifications with timed dismissal,
//! and checkout form validation. [`StoreClient`] ties the pieces together.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod client;
pub mod config;
pub mod effects;
pub mod error;
pub mod filter;
pub mod notify;
pub mod store;

pub use cart::{Cart, CartError, CartItem, CartManager, CartSummary};
pub use catalog::{Catalog, ProductCard, ProductEntry};
pub use checkout::{CheckoutError, CheckoutForm, CheckoutHandoff, FormField, FormValidation};
pub use client::{Action, Dispatched, StoreClient};
pub use config::{ClientConfig, TimingConfig};
pub use error::{AppError, Result};
pub use filter::{CategoryFilter, FilterCriteria, SortKey};
pub use notify::{Toast, ToastKind};
pub use store::{FileStore, KeyValueStore, MemoryStore};
