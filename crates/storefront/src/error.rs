//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for every failure the storefront client
//! can observe. Nothing here is fatal: callers absorb the error after passing
//! it to [`report`], which logs it and captures internal faults to Sentry.

use sentry::integrations::tracing as sentry_tracing;
use thiserror::Error;

use navjyoti_core::{CategoryError, PriceError};

use crate::cart::CartError;
use crate::checkout::CheckoutError;
use crate::store::StoreError;

/// Application-level error type for the storefront client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Unknown category selection.
    #[error("Filter error: {0}")]
    Category(#[from] CategoryError),

    /// Invalid price supplied.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),
}

impl AppError {
    /// Whether this error indicates a fault in the client rather than bad
    /// user input.
    ///
    /// Out-of-range cart indices count as internal: the presentation layer
    /// derives them from rendered rows, so a bad index means the view and the
    /// cart disagree.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Cart(CartError::IndexOutOfRange { .. })
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Log target for errors already sent to Sentry with `capture_error`.
///
/// The tracing layer must not turn these log lines into a second event.
pub const CAPTURED_TARGET: &str = "navjyoti_storefront::captured";

/// Log an error and capture internal faults to Sentry.
///
/// User-facing rejections are logged at info so they only show up as
/// breadcrumbs on a later fault.
pub fn report(err: &AppError) {
    if err.is_internal() {
        let event_id = sentry::capture_error(err);
        tracing::error!(
            target: CAPTURED_TARGET,
            error = %err,
            sentry_event_id = %event_id,
            "Storefront client error"
        );
    } else {
        tracing::info!(error = %err, "Storefront action rejected");
    }
}

/// How a tracing event reaches Sentry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentryRouting {
    Ignore,
    Breadcrumb,
    Event,
}

impl SentryRouting {
    /// Route an event by level and target.
    ///
    /// Errors and warnings become events, info and debug become breadcrumbs.
    /// Anything logged under [`CAPTURED_TARGET`] is ignored.
    #[must_use]
    pub fn for_event(level: tracing::Level, target: &str) -> Self {
        if target == CAPTURED_TARGET {
            return Self::Ignore;
        }
        match level {
            tracing::Level::ERROR | tracing::Level::WARN => Self::Event,
            tracing::Level::INFO | tracing::Level::DEBUG => Self::Breadcrumb,
            _ => Self::Ignore,
        }
    }
}

/// Event filter for the Sentry tracing layer.
pub fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match SentryRouting::for_event(*metadata.level(), metadata.target()) {
        SentryRouting::Event => sentry_tracing::EventFilter::Event,
        SentryRouting::Breadcrumb => sentry_tracing::EventFilter::Breadcrumb,
        SentryRouting::Ignore => sentry_tracing::EventFilter::Ignore,
    }
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("name", "Jute Bag")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
