//! Indian postal index number (PIN code) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Pincode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PincodeError {
    /// The input is not exactly six ASCII digits.
    #[error("pincode must be exactly {expected} digits")]
    Invalid {
        /// Required number of digits.
        expected: usize,
    },
}

/// A six-digit postal code.
///
/// ```
/// use navjyoti_core::Pincode;
///
/// assert!(Pincode::parse("123456").is_ok());
/// assert!(Pincode::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Pincode(String);

impl Pincode {
    /// Number of digits in a pincode.
    pub const LENGTH: usize = 6;

    /// Parse a `Pincode` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PincodeError::Invalid`] unless the input is exactly six
    /// ASCII digits.
    pub fn parse(s: &str) -> Result<Self, PincodeError> {
        if s.len() != Self::LENGTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PincodeError::Invalid {
                expected: Self::LENGTH,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the pincode as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pincode {
    type Err = PincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pincode {
    type Error = PincodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pincode> for String {
    fn from(value: Pincode) -> Self {
        value.0
    }
}
