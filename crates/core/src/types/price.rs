//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are rupee amounts. They serialize as plain JSON numbers so that
//! persisted carts stay readable by anything that stored `{"price": 500}`.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price in rupees.
///
/// ## Examples
///
/// ```
/// use navjyoti_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(500, 0)).unwrap();
/// assert_eq!(price.line_total(3), Price::from_units(1500));
/// assert_eq!(price.to_string(), "₹500");
///
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    amount: Decimal,
}

impl Price {
    /// A price of zero rupees.
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
    };

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self {
            amount: amount.normalize(),
        })
    }

    /// Create a price from a whole number of rupees.
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self {
            amount: Decimal::from(units),
        }
    }

    /// Returns the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Self {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .unwrap_or(Decimal::MAX);
        Self {
            amount: amount.normalize(),
        }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let amount = self
            .amount
            .checked_add(rhs.amount)
            .unwrap_or(Decimal::MAX);
        Self {
            amount: amount.normalize(),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.amount.normalize())
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole rupees stay integers so stored carts read `500`, not `500.0`
        if self.amount.fract().is_zero()
            && let Some(units) = self.amount.to_u64()
        {
            return serializer.serialize_u64(units);
        }
        rust_decimal::serde::float::serialize(&self.amount, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}
