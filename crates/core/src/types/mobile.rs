//! Indian mobile number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`MobileNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MobileNumberError {
    /// The input string is empty.
    #[error("mobile number cannot be empty")]
    Empty,
    /// The input does not have exactly ten characters.
    #[error("mobile number must be exactly {expected} digits (got {actual})")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
    /// The input contains something other than ASCII digits.
    #[error("mobile number must contain only digits")]
    NonDigit,
    /// The first digit is outside 6-9.
    #[error("mobile number must start with 6, 7, 8 or 9")]
    InvalidLeadingDigit,
}

/// A ten-digit Indian mobile number.
///
/// ## Constraints
///
/// - Exactly 10 ASCII digits
/// - First digit is 6, 7, 8 or 9
///
/// ## Examples
///
/// ```
/// use navjyoti_core::MobileNumber;
///
/// assert!(MobileNumber::parse("9876543210").is_ok());
///
/// assert!(MobileNumber::parse("98765").is_err());      // too short
/// assert!(MobileNumber::parse("5876543210").is_err()); // leading digit < 6
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Number of digits in a mobile number.
    pub const LENGTH: usize = 10;

    /// Parse a `MobileNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is not exactly 10 characters long
    /// - Contains non-digit characters
    /// - Starts with a digit below 6
    pub fn parse(s: &str) -> Result<Self, MobileNumberError> {
        if s.is_empty() {
            return Err(MobileNumberError::Empty);
        }

        let actual = s.chars().count();
        if actual != Self::LENGTH {
            return Err(MobileNumberError::WrongLength {
                expected: Self::LENGTH,
                actual,
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MobileNumberError::NonDigit);
        }

        if !matches!(s.as_bytes().first(), Some(b'6'..=b'9')) {
            return Err(MobileNumberError::InvalidLeadingDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `MobileNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MobileNumber {
    type Err = MobileNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = MobileNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MobileNumber> for String {
    fn from(value: MobileNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
