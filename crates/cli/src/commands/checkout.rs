//! Checkout commands.

use std::path::Path;

use navjyoti_storefront::{CheckoutForm, CheckoutHandoff, KeyValueStore, StoreClient};

use super::{CommandError, load_file};

/// Id of the order button put into its loading state on submit.
const SUBMIT_BUTTON: &str = "place-order";
const SUBMIT_LABEL: &str = "Place Order";

/// Print the order hand-off for the current cart.
///
/// # Errors
///
/// Returns an error when the cart is empty.
pub fn proceed<S: KeyValueStore>(client: &mut StoreClient<S>) -> Result<(), CommandError> {
    let handoff = client.proceed_to_checkout()?;
    print_handoff(&handoff)
}

/// Validate the form in `path`, optionally submitting it.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, or when `submit` is set and
/// validation or checkout fails.
pub fn validate<S: KeyValueStore>(
    client: &mut StoreClient<S>,
    path: &Path,
    submit: bool,
) -> Result<(), CommandError> {
    let form: CheckoutForm = load_file(path)?;

    if submit {
        let handoff = client.submit_checkout(&form, SUBMIT_BUTTON, SUBMIT_LABEL)?;
        return print_handoff(&handoff);
    }

    let validation = client.validate_checkout_form(&form);
    if validation.is_valid() {
        println!("Form is valid");
    } else {
        for field in validation.invalid_fields() {
            println!("invalid: {field}");
        }
    }
    Ok(())
}

fn print_handoff(handoff: &CheckoutHandoff) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(handoff)?);
    Ok(())
}
