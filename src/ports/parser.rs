// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.

use crate::domain::{FlatSettings, Result};

/// A trait for parsing configuration documents into flattened settings.
///
/// # Key Format
///
/// Parsers flatten nested structures into dotted keys. Underscores in mapping
/// keys also become dots, and sequence elements use their index. A document
/// like:
///
/// ```yaml
/// db_user: bar
/// sys:
///   users:
///     - foo
/// ```
///
/// is parsed into:
/// - `db.user` -> `"bar"`
/// - `sys.users.0` -> `"foo"`
///
/// # Examples
///
/// ```rust
/// use sweester_config::ports::ConfigParser;
/// use sweester_config::domain::{FlatSettings, Result};
///
/// struct EmptyParser;
///
/// impl ConfigParser for EmptyParser {
///     fn parse(&self, _content: &str) -> Result<FlatSettings> {
///         Ok(FlatSettings::new())
///     }
/// }
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into flattened settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the content is malformed.
    fn parse(&self, content: &str) -> Result<FlatSettings>;
}
