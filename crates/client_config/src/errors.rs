//! Configuration accessor error types.
//!
//! Domain-specific errors for typed property access. A missing key is never
//! an error (typed getters report it as `None`); these variants cover the
//! case where a value is present but cannot be interpreted as the requested
//! type, which indicates a mistake in the supplied properties and must not
//! be masked by a default.

use thiserror::Error;

/// Typed property access errors.
///
/// Raised by the integer and boolean getters when the stored text cannot be
/// parsed. The `key` is always the full (prefixed) key so the offending
/// entry can be located in the original property source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Property '{key}' has invalid integer value '{value}'")]
    InvalidInteger { key: String, value: String },

    #[error("Property '{key}' has invalid boolean value '{value}' (expected 'true' or 'false')")]
    InvalidBoolean { key: String, value: String },
}

/// Result type alias for typed property access.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
