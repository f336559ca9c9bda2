//! Core types for Navjyoti.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod mobile;
pub mod pincode;
pub mod price;

pub use category::{Category, CategoryError};
pub use mobile::{MobileNumber, MobileNumberError};
pub use pincode::{Pincode, PincodeError};
pub use price::{Price, PriceError};
