//! Navjyoti Core - Shared value types.
//!
//! This crate provides the value types used across the Navjyoti storefront
//! components:
//! - `storefront` - Cart, catalog, filtering and checkout logic
//! - `cli` - Terminal front-end driving the storefront client
//!
//! # Architecture
//!
//! The core crate contains only types and parsing - no I/O, no storage,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices, product categories, mobile numbers
//!   and postal codes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
