//! Subcommand implementations.
//!
//! Each command drives the [`StoreClient`](navjyoti_storefront::StoreClient)
//! and prints what a page would render. Toasts raised along the way are
//! printed once the command finishes.

#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use navjyoti_storefront::notify::ToastKind;
use navjyoti_storefront::{AppError, Toast};

pub mod cart;
pub mod catalog;
pub mod checkout;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid YAML or JSON for the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storefront client rejected the action.
    #[error(transparent)]
    App(#[from] AppError),
}

impl CommandError {
    /// Whether this is a fault rather than a rejected action or bad input.
    ///
    /// Client rejections were already passed to `error::report`.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Serialize(_))
    }
}

/// Read a YAML (or JSON) file into `T`.
fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| CommandError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Print toasts, oldest first.
pub fn print_toasts(toasts: &[Toast]) {
    for toast in toasts {
        let marker = match toast.kind {
            ToastKind::Success => "+",
            ToastKind::Error => "!",
            ToastKind::Info => "i",
        };
        println!("[{marker}] {}", toast.message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::io::Write;

    use navjyoti_storefront::ProductCard;

    use super::*;

    #[test]
    fn test_load_yaml_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- title: Cotton Kurta\n  text: Breathable cotton ₹500\n- title: Jute Bag").unwrap();

        let cards: Vec<ProductCard> = load_file(file.path()).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1], ProductCard::new("Jute Bag", ""));
    }

    #[test]
    fn test_load_json_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Silk Suit", "text": "₹1200"}}]"#).unwrap();

        let cards: Vec<ProductCard> = load_file(file.path()).unwrap();
        assert_eq!(cards, [ProductCard::new("Silk Suit", "₹1200")]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file::<Vec<ProductCard>>(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CommandError::Read { .. }));
    }

    #[test]
    fn test_only_serialization_failures_are_internal() {
        let rejected = CommandError::App(AppError::from(
            navjyoti_storefront::CheckoutError::EmptyCart,
        ));
        assert!(!rejected.is_internal());

        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(CommandError::Serialize(err).is_internal());
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "title: [unclosed").unwrap();

        let err = load_file::<Vec<ProductCard>>(file.path()).unwrap_err();
        assert!(matches!(err, CommandError::Parse { .. }));
    }
}
