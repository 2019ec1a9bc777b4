// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings service trait definition.
//!
//! `SettingsService` is the lookup API application code consumes. Implementors
//! provide raw resolution; the typed accessors are provided methods built on
//! top of [`SettingsService::resolve`], so every implementation coerces values
//! the same way.

use crate::domain::{ConfigKey, ConfigValue, FlatSettings, Resolved, Result};
use std::fmt;
use std::str::FromStr;

/// Decides which keys are eligible for secret decryption.
///
/// Decrypting only secret-looking keys keeps long base64 payloads stored
/// under ordinary keys untouched. `AllKeys` decrypts every value that looks
/// encrypted, for deployments that already rely on that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecryptionGate {
    /// Only keys containing `password` or `key` are decrypted.
    #[default]
    SecretKeysOnly,
    /// Any key is decrypted when its value looks encrypted.
    AllKeys,
}

impl DecryptionGate {
    /// Returns `true` if a value under `key` may be decrypted.
    pub fn admits(&self, key: &ConfigKey) -> bool {
        match self {
            DecryptionGate::SecretKeysOnly => key.is_secret_name(),
            DecryptionGate::AllKeys => true,
        }
    }
}

impl fmt::Display for DecryptionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecryptionGate::SecretKeysOnly => f.write_str("secret-keys"),
            DecryptionGate::AllKeys => f.write_str("all-keys"),
        }
    }
}

impl FromStr for DecryptionGate {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "secret-keys" => Ok(DecryptionGate::SecretKeysOnly),
            "all-keys" => Ok(DecryptionGate::AllKeys),
            other => Err(format!(
                "unknown decryption gate '{}', expected 'secret-keys' or 'all-keys'",
                other
            )),
        }
    }
}

/// The settings lookup interface.
///
/// # Examples
///
/// ```rust
/// use sweester_config::domain::{ConfigValue, FlatSettings, Result, SettingsService};
///
/// struct Fixed;
///
/// impl SettingsService for Fixed {
///     fn all(&self) -> Result<FlatSettings> {
///         Ok(FlatSettings::new())
///     }
///
///     fn resolve(&self, _key: &str, _default: &str) -> Result<ConfigValue> {
///         Ok(ConfigValue::from("yes"))
///     }
///
///     fn reload(&self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// assert!(Fixed.get_boolean("feature.enabled", false).unwrap());
/// ```
pub trait SettingsService {
    /// Returns the whole flattened mapping, without overrides or decryption.
    fn all(&self) -> Result<FlatSettings>;

    /// Resolves a single key.
    ///
    /// An environment override wins over the file value; a missing or empty
    /// value yields `default`. Values that look encrypted may be decrypted
    /// depending on the implementation's decryption policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings could not be loaded or a decryption
    /// attempt failed. An unknown key is never an error.
    fn resolve(&self, key: &str, default: &str) -> Result<ConfigValue>;

    /// Drops any cached settings so the next lookup reloads them.
    fn reload(&self) -> Result<()>;

    /// Looks up `key`, or returns every setting when `key` is empty.
    fn settings(&self, key: &str, default: &str) -> Result<Resolved> {
        if key.is_empty() {
            return Ok(Resolved::All(self.all()?));
        }
        Ok(Resolved::Value(self.resolve(key, default)?))
    }

    /// Resolves `key` as a boolean.
    ///
    /// An empty key returns `default` without a lookup. Otherwise `1`, `on`,
    /// `true` and `yes` (any case) are true, other non-empty values are false,
    /// and an empty value gives `default`.
    fn get_boolean(&self, key: &str, default: bool) -> Result<bool> {
        if key.is_empty() {
            return Ok(default);
        }
        Ok(self.resolve(key, "")?.as_flag(default))
    }

    /// Resolves `key` as a positive integer.
    ///
    /// An empty key returns `default`. Values that are not plain decimal digits
    /// count as zero, and zero yields `default`.
    fn get_uint(&self, key: &str, default: u64) -> Result<u64> {
        if key.is_empty() {
            return Ok(default);
        }
        Ok(self.resolve(key, "")?.as_uint(default))
    }
}
