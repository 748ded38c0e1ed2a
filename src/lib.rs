//! Environment-aware configuration for Harmony client libraries.
//!
//! [`Config`] selects one of the four Harmony deployment environments and
//! resolves every runtime setting through a fixed precedence chain:
//! in-process overrides, process environment variables (including entries
//! imported from an optional `.env` settings file at construction), then
//! built-in defaults and environment-derived properties.
//!
//! ```no_run
//! use harmony_config::{Config, Environment};
//!
//! let cfg = Config::default(); // UAT
//! assert_eq!(cfg.resolve("NUM_REQUESTS_WORKERS").as_deref(), Some("3"));
//!
//! let prod = Config::new(Environment::Prod);
//! assert_eq!(prod.harmony_hostname(), "harmony.earthdata.nasa.gov");
//! assert_eq!(prod.edl_validation_url(), "https://harmony.earthdata.nasa.gov/jobs");
//! ```

pub mod config;
pub mod environment;
pub mod error;
mod sources;

pub use config::{Config, DOWNLOAD_CHUNK_SIZE, NUM_REQUESTS_WORKERS};
pub use environment::Environment;
pub use error::ConfigError;
