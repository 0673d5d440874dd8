//! Configuration for the catalog.
//!
//! Loads policy switches from environment variables with defaults that keep
//! the catalog's historical behavior.

use serde::{Deserialize, Serialize};
use std::env;

/// Screen cap applied by [`CatalogConfig::strict`].
pub const STRICT_MAX_SCREENS_PER_THEATRE: u32 = 64;

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Reject `add_show` when the screen already has a show at the same date
    /// and time (default: `false`, callers check with `show_exists` first)
    pub reject_double_booking: bool,
    /// Reject `add_movie` when a movie with the same title exists
    /// (default: `false`)
    pub reject_duplicate_titles: bool,
    /// Upper bound for `num_screens` in `add_theatre` (default: none)
    pub max_screens_per_theatre: Option<u32>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to [`CatalogConfig::default`].
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            reject_double_booking: env::var("MARQUEE_REJECT_DOUBLE_BOOKING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.reject_double_booking),
            reject_duplicate_titles: env::var("MARQUEE_REJECT_DUPLICATE_TITLES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.reject_duplicate_titles),
            max_screens_per_theatre: env::var("MARQUEE_MAX_SCREENS_PER_THEATRE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|max: &u32| *max > 0)
                .or(defaults.max_screens_per_theatre),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Configuration with every uniqueness rule and the screen cap enforced.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_double_booking: true,
            reject_duplicate_titles: true,
            max_screens_per_theatre: Some(STRICT_MAX_SCREENS_PER_THEATRE),
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            reject_double_booking: false,
            reject_duplicate_titles: false,
            max_screens_per_theatre: None,
            log_level: "info".to_string(),
        }
    }
}
