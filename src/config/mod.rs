//! Configuration module for Link-Sieve
//!
//! Runtime settings are built from defaults and optional command-line
//! overrides; there is no configuration file. The keyword table is not part
//! of the settings, see [`crate::classify::KeywordTable`].
//!
//! # Example
//!
//! ```
//! use link_sieve::config::{validate, Settings};
//!
//! let settings = Settings::default();
//! validate(&settings).unwrap();
//! assert_eq!(settings.fetch.timeout_secs, 10);
//! ```

mod types;
mod validation;

// Re-export types
pub use types::{
    FetchConfig, FilterConfig, OutputConfig, Settings, DEFAULT_DETAIL_PATTERN,
    DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

pub use validation::validate;
