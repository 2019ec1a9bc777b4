// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for settings resolution.
//!
//! Every fallible operation in the crate returns [`ConfigError`]. Lookups of
//! unknown keys are not errors (they fall back to a default), so the variants
//! here cover loading, parsing, strict conversions and secret decryption.

use std::num::ParseIntError;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for settings operations.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without a
/// breaking release.
///
/// # Examples
///
/// ```
/// use sweester_config::domain::errors::ConfigError;
///
/// fn decrypt_db_password() -> Result<String, ConfigError> {
///     Err(ConfigError::DecryptionError {
///         key: "db.password".to_string(),
///         message: "access denied".to_string(),
///         source: None,
///     })
/// }
///
/// assert!(decrypt_db_password().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to convert a resolved value to the requested type.
    #[error("Setting '{key}' is not a valid {target_type}: {source}")]
    TypeConversionError {
        /// Settings key whose value was converted
        key: String,
        /// Name of the requested type
        target_type: String,
        /// Why the conversion failed
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The settings file exists but could not be read.
    #[error("Settings source '{source_name}': {message}")]
    SourceError {
        /// Which source failed (`yaml-file`, `vault`)
        source_name: String,
        /// What went wrong
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The settings file is not valid YAML.
    #[error("Invalid settings document: {message}")]
    ParseError {
        /// What the parser reported
        message: String,
        /// Parser error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A value that looked encrypted could not be decrypted.
    ///
    /// The raw ciphertext is never returned in place of this error.
    #[error("Failed to decrypt value for key '{key}': {message}")]
    DecryptionError {
        /// The settings key whose value failed to decrypt
        key: String,
        /// The error message
        message: String,
        /// The underlying decryptor error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a DecryptionError for `key` with no underlying cause.
    pub fn decryption(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::DecryptionError {
            key: key.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Returns `true` if this error came from secret decryption.
    pub fn is_decryption(&self) -> bool {
        matches!(self, ConfigError::DecryptionError { .. })
    }
}

/// A specialized Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
