// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings key newtype.
//!
//! A settings key is a dotted path such as `db.user` or `sys.users.2`. Besides
//! naming a value in the flattened settings, a key determines which environment
//! variable overrides it and whether its value is a decryption candidate.

use std::fmt;

/// Substrings that mark a key name as holding a secret.
const SECRET_MARKERS: [&str; 2] = ["password", "key"];

/// A type-safe wrapper for dotted settings keys.
///
/// # Examples
///
/// ```
/// use sweester_config::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("db.port");
/// assert_eq!(key.as_str(), "db.port");
/// assert_eq!(key.env_var_name(), "DB_PORT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` for the empty key, which selects the whole settings map.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name of the environment variable that overrides this key.
    ///
    /// Dots become underscores and the result is upper-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweester_config::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from("mysql.database").env_var_name(), "MYSQL_DATABASE");
    /// assert_eq!(ConfigKey::from("sys.users.2").env_var_name(), "SYS_USERS_2");
    /// ```
    pub fn env_var_name(&self) -> String {
        self.0.replace('.', "_").to_uppercase()
    }

    /// Returns `true` if the key name suggests a secret value.
    ///
    /// A key is a secret name when it contains `password` or `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweester_config::domain::config_key::ConfigKey;
    ///
    /// assert!(ConfigKey::from("db.password").is_secret_name());
    /// assert!(ConfigKey::from("api.key").is_secret_name());
    /// assert!(!ConfigKey::from("db.user").is_secret_name());
    /// ```
    pub fn is_secret_name(&self) -> bool {
        SECRET_MARKERS.iter().any(|marker| self.0.contains(marker))
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
