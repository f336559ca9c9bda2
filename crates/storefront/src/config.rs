//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `NAVJYOTI_DATA_DIR` - Directory for the file-backed store (default: `.navjyoti`)
//! - `NAVJYOTI_TOAST_DURATION_MS` - Toast auto-dismiss delay (default: 3000)
//! - `NAVJYOTI_BUTTON_RESET_MS` - Button loading-state duration (default: 1000)
//! - `NAVJYOTI_REVEAL_STAGGER_MS` - Delay between product reveals (default: 100)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".navjyoti";
const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
const DEFAULT_BUTTON_RESET_MS: u64 = 1000;
const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Timing of deferred UI effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// How long a toast stays on screen
    pub toast_duration: Duration,
    /// How long a button stays in its loading state
    pub button_reset: Duration,
    /// Delay between consecutive product reveals after filtering
    pub reveal_stagger: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            button_reset: Duration::from_millis(DEFAULT_BUTTON_RESET_MS),
            reveal_stagger: Duration::from_millis(DEFAULT_REVEAL_STAGGER_MS),
        }
    }
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory holding the file-backed durable store
    pub data_dir: PathBuf,
    /// Deferred effect timing
    pub timing: TimingConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            timing: TimingConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a duration variable is not a whole number of
    /// milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("NAVJYOTI_DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let timing = TimingConfig {
            toast_duration: get_millis(
                &lookup,
                "NAVJYOTI_TOAST_DURATION_MS",
                DEFAULT_TOAST_DURATION_MS,
            )?,
            button_reset: get_millis(&lookup, "NAVJYOTI_BUTTON_RESET_MS", DEFAULT_BUTTON_RESET_MS)?,
            reveal_stagger: get_millis(
                &lookup,
                "NAVJYOTI_REVEAL_STAGGER_MS",
                DEFAULT_REVEAL_STAGGER_MS,
            )?,
        };

        Ok(Self {
            data_dir,
            timing,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a millisecond duration, falling back to `default` when unset.
fn get_millis<F>(lookup: &F, key: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(Duration::from_millis(default));
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".navjyoti"));
        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.timing.toast_duration, Duration::from_millis(3000));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("NAVJYOTI_DATA_DIR", "/tmp/shop"),
            ("NAVJYOTI_TOAST_DURATION_MS", "1500"),
            ("NAVJYOTI_REVEAL_STAGGER_MS", " 0 "),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.timing.toast_duration, Duration::from_millis(1500));
        assert_eq!(config.timing.reveal_stagger, Duration::ZERO);
        assert_eq!(config.timing.button_reset, Duration::from_millis(1000));
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_invalid_duration() {
        let result =
            ClientConfig::from_lookup(lookup_from(&[("NAVJYOTI_BUTTON_RESET_MS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "NAVJYOTI_BUTTON_RESET_MS"
        ));
    }

    #[test]
    fn test_empty_dsn_is_none() {
        let config = ClientConfig::from_lookup(lookup_from(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
