//! Checkout form validation and order hand-off.
//!
//! Validation checks every field and flags each invalid one; it never stops
//! at the first failure. The hand-off carries the serialized cart and its
//! total to whatever processes orders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use navjyoti_core::{MobileNumber, Pincode, Price};

use crate::cart::Cart;

/// Names of fields with format rules.
pub mod fields {
    /// Mobile number field.
    pub const MOBILE: &str = "mobile";
    /// Postal code field.
    pub const PINCODE: &str = "pincode";
}

/// Checkout errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("invalid checkout fields: {}", fields.join(", "))]
    InvalidForm { fields: Vec<String> },
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One input of the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    /// A required field.
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    /// An optional field.
    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }

    fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// The checkout form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutForm {
    pub fields: Vec<FormField>,
}

impl CheckoutForm {
    /// Build a form from its fields in page order.
    #[must_use]
    pub const fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// First field named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Validation rule classes. Each failing class produces one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormRule {
    Required,
    Mobile,
    Pincode,
}

impl FormRule {
    /// Message shown when this rule fails.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Please fill in all required fields",
            Self::Mobile => "Please enter a valid mobile number",
            Self::Pincode => "Please enter a valid 6-digit pincode",
        }
    }
}

/// Outcome of validating the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    invalid_fields: Vec<String>,
    failed_rules: Vec<FormRule>,
}

impl FormValidation {
    /// Whether every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed_rules.is_empty()
    }

    /// Names of flagged fields, in form order, each listed once.
    #[must_use]
    pub fn invalid_fields(&self) -> &[String] {
        &self.invalid_fields
    }

    /// Whether the field named `name` was flagged.
    #[must_use]
    pub fn is_flagged(&self, name: &str) -> bool {
        self.invalid_fields.iter().any(|field| field == name)
    }

    /// Failing rule classes, each listed once.
    #[must_use]
    pub fn failed_rules(&self) -> &[FormRule] {
        &self.failed_rules
    }

    fn flag(&mut self, field: &str, rule: FormRule) {
        if !self.is_flagged(field) {
            self.invalid_fields.push(field.to_owned());
        }
        if !self.failed_rules.contains(&rule) {
            self.failed_rules.push(rule);
        }
    }

    /// Convert a failed validation into an error.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidForm`] listing the flagged fields.
    pub fn into_result(self) -> Result<(), CheckoutError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CheckoutError::InvalidForm {
                fields: self.invalid_fields,
            })
        }
    }
}

/// Validate the checkout form.
///
/// - every required field must be non-blank after trimming
/// - a non-blank `mobile` field must be a 10-digit number starting with 6-9
/// - a non-blank `pincode` field must be exactly 6 digits
///
/// Values are trimmed before the format checks.
#[must_use]
pub fn validate_checkout_form(form: &CheckoutForm) -> FormValidation {
    let mut validation = FormValidation::default();

    for field in form.fields.iter().filter(|field| field.required && field.is_blank()) {
        validation.flag(&field.name, FormRule::Required);
    }

    if let Some(mobile) = form.field(fields::MOBILE).filter(|field| !field.is_blank())
        && let Err(e) = MobileNumber::parse(mobile.value.trim())
    {
        tracing::debug!(error = %e, "Mobile number rejected");
        validation.flag(&mobile.name, FormRule::Mobile);
    }

    if let Some(pincode) = form.field(fields::PINCODE).filter(|field| !field.is_blank())
        && let Err(e) = Pincode::parse(pincode.value.trim())
    {
        tracing::debug!(error = %e, "Pincode rejected");
        validation.flag(&pincode.name, FormRule::Pincode);
    }

    validation
}

/// Order data handed to the order-processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutHandoff {
    /// The cart in its persisted JSON form.
    pub cart_json: String,
    /// Grand total of the cart.
    pub total: Price,
}

impl CheckoutHandoff {
    /// Prepare the hand-off for `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart.
    pub fn from_cart(cart: &Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            cart_json: cart.to_json()?,
            total: cart.grand_total(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(mobile: &str, pincode: &str) -> CheckoutForm {
        CheckoutForm::new(vec![
            FormField::required("name", "Asha"),
            FormField::required(fields::MOBILE, mobile),
            FormField::required(fields::PINCODE, pincode),
            FormField::optional("landmark", ""),
        ])
    }

    #[test]
    fn test_valid_form() {
        let validation = validate_checkout_form(&form("9876543210", "123456"));
        assert!(validation.is_valid());
        assert!(validation.invalid_fields().is_empty());
        assert!(validation.into_result().is_ok());
    }

    #[test]
    fn test_mobile_examples() {
        assert!(!validate_checkout_form(&form("98765", "123456")).is_valid());
        assert!(validate_checkout_form(&form("9876543210", "123456")).is_valid());
        assert!(!validate_checkout_form(&form("5876543210", "123456")).is_valid());
    }

    #[test]
    fn test_pincode_examples() {
        assert!(!validate_checkout_form(&form("9876543210", "12345")).is_valid());
        assert!(validate_checkout_form(&form("9876543210", "123456")).is_valid());
    }

    #[test]
    fn test_checks_every_field() {
        let form = CheckoutForm::new(vec![
            FormField::required("name", "   "),
            FormField::required("address", ""),
            FormField::optional(fields::MOBILE, "12345"),
            FormField::optional(fields::PINCODE, "abcdef"),
        ]);
        let validation = validate_checkout_form(&form);

        assert_eq!(
            validation.invalid_fields(),
            ["name", "address", "mobile", "pincode"]
        );
        assert_eq!(
            validation.failed_rules(),
            [FormRule::Required, FormRule::Mobile, FormRule::Pincode]
        );
    }

    #[test]
    fn test_blank_optional_format_fields_pass() {
        let form = CheckoutForm::new(vec![
            FormField::optional(fields::MOBILE, " "),
            FormField::optional(fields::PINCODE, ""),
        ]);
        assert!(validate_checkout_form(&form).is_valid());
    }

    #[test]
    fn test_blank_required_mobile_flagged_once() {
        let validation = validate_checkout_form(&form("", "123456"));
        assert_eq!(validation.invalid_fields(), ["mobile"]);
        assert_eq!(validation.failed_rules(), [FormRule::Required]);
    }

    #[test]
    fn test_missing_format_fields_pass() {
        let form = CheckoutForm::new(vec![FormField::required("name", "Asha")]);
        assert!(validate_checkout_form(&form).is_valid());
    }

    #[test]
    fn test_values_are_trimmed() {
        assert!(validate_checkout_form(&form(" 9876543210 ", "123456\n")).is_valid());
    }

    #[test]
    fn test_into_result_lists_fields() {
        let err = validate_checkout_form(&form("1", "2")).into_result().unwrap_err();
        assert_eq!(err.to_string(), "invalid checkout fields: mobile, pincode");
    }

    #[test]
    fn test_form_deserializes_from_list() {
        let form: CheckoutForm = serde_json::from_str(
            r#"[{"name": "name", "value": "Asha", "required": true}, {"name": "mobile"}]"#,
        )
        .unwrap();
        assert_eq!(form.fields.len(), 2);
        assert!(!form.field("mobile").unwrap().required);
    }

    #[test]
    fn test_handoff_rejects_empty_cart() {
        assert!(matches!(
            CheckoutHandoff::from_cart(&Cart::new()),
            Err(CheckoutError::EmptyCart)
        ));
    }

    #[test]
    fn test_handoff_carries_cart_and_total() {
        let mut cart = Cart::new();
        cart.add("Jute Bag", Price::from_units(300), 2).unwrap();
        let handoff = CheckoutHandoff::from_cart(&cart).unwrap();

        assert_eq!(handoff.total, Price::from_units(600));
        assert_eq!(Cart::from_json(&handoff.cart_json).unwrap(), cart);
    }
}
