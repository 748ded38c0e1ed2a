//! Crate-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A string that names none of the four deployment environments.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}
