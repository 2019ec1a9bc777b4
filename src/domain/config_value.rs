// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved value type with strict and permissive conversions.
//!
//! A `ConfigValue` is the text produced by one lookup: an environment override,
//! the stringified file value, decrypted plaintext, or the caller's default.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower-cased spellings that the permissive boolean conversion treats as true.
const TRUTHY: [&str; 4] = ["1", "on", "true", "yes"];

/// A type-safe wrapper for resolved settings values.
///
/// # Examples
///
/// ```
/// use sweester_config::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("064");
/// assert_eq!(value.as_uint(99), 64);
/// assert_eq!(value.as_u64("x").unwrap(), 64);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns `true` if the value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strict boolean conversion.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// Anything else is a `TypeConversionError`.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Permissive boolean conversion used by the typed accessors.
    ///
    /// `1`, `on`, `true` and `yes` (any case) are true, every other non-empty
    /// value is false, and the empty value yields `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweester_config::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("On").as_flag(false));
    /// assert!(!ConfigValue::from("random").as_flag(true));
    /// assert!(ConfigValue::from("").as_flag(true));
    /// ```
    pub fn as_flag(&self, default: bool) -> bool {
        if self.0.is_empty() {
            return default;
        }
        let lowered = self.0.to_lowercase();
        TRUTHY.contains(&lowered.as_str())
    }

    /// Strict conversion to `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Permissive unsigned conversion used by the typed accessors.
    ///
    /// A value made only of ASCII digits is parsed; anything else (a sign, a
    /// decimal point, letters, the empty string, or a number too large for
    /// `u64`) counts as zero. Zero yields `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweester_config::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("31415926").as_uint(1), 31415926);
    /// assert_eq!(ConfigValue::from("-5").as_uint(99), 99);
    /// assert_eq!(ConfigValue::from("0").as_uint(7), 7);
    /// ```
    pub fn as_uint(&self, default: u64) -> u64 {
        let all_digits = !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit());
        let parsed = if all_digits {
            self.0.parse::<u64>().unwrap_or(0)
        } else {
            0
        };
        if parsed > 0 {
            parsed
        } else {
            default
        }
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sweester_config::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("db.host").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_config_value_basics() {
        let value = ConfigValue::new("bar".to_string());
        assert_eq!(value.as_str(), "bar");
        assert_eq!(value.as_string(), "bar");
        assert_eq!(format!("{}", value), "bar");
        assert!(!value.is_empty());
        assert!(ConfigValue::default().is_empty());
    }

    #[test]
    fn test_as_bool_strict() {
        for val in ["true", "Yes", "1", "ON"] {
            assert!(ConfigValue::from(val).as_bool("k").unwrap(), "{}", val);
        }
        for val in ["false", "No", "0", "off"] {
            assert!(!ConfigValue::from(val).as_bool("k").unwrap(), "{}", val);
        }
        assert!(ConfigValue::from("maybe").as_bool("k").is_err());
    }

    #[test]
    fn test_as_flag_truth_table() {
        let cases = [
            ("1", None, true),
            ("11", None, false),
            ("yes", None, true),
            ("Yes", None, true),
            ("on", None, true),
            ("ON", None, true),
            ("true", None, true),
            ("True", None, true),
            ("test", None, false),
            ("YES", Some(false), true),
            ("On", Some(false), true),
            ("TRUE", Some(false), true),
            ("NaN", Some(false), false),
            ("1234567", Some(true), false),
            ("111", Some(true), false),
            ("0", Some(true), false),
            ("no", Some(true), false),
            ("", None, false),
            ("", Some(false), false),
            ("", Some(true), true),
        ];
        for (raw, default, expected) in cases {
            let value = ConfigValue::from(raw);
            let result = value.as_flag(default.unwrap_or(false));
            assert_eq!(result, expected, "value: {:?}, default: {:?}", raw, default);
        }
    }

    #[test]
    fn test_as_uint_table() {
        let cases = [
            ("", 0, 0),
            ("NaN", 1, 1),
            ("31415926", 123456, 31415926),
            ("-31415926", 654321, 654321),
            ("abc", 333, 333),
            ("064", 0, 64),
            ("0", 5, 5),
            ("000", 5, 5),
            ("+5", 9, 9),
            ("1.5", 9, 9),
            (" 7", 9, 9),
        ];
        for (raw, default, expected) in cases {
            assert_eq!(
                ConfigValue::from(raw).as_uint(default),
                expected,
                "value: {:?}, default: {}",
                raw,
                default
            );
        }
    }

    #[test]
    fn test_as_uint_overflow_falls_back() {
        let value = ConfigValue::from("99999999999999999999999");
        assert_eq!(value.as_uint(42), 42);
    }

    #[test]
    fn test_as_uint_rejects_non_ascii_digits() {
        let value = ConfigValue::from("١٢٣");
        assert_eq!(value.as_uint(8), 8);
    }

    #[test]
    fn test_as_u64_strict() {
        assert_eq!(ConfigValue::from("13306").as_u64("db.port").unwrap(), 13306);
        assert!(ConfigValue::from("-1").as_u64("db.port").is_err());
    }

    #[test]
    fn test_parse_custom_type() {
        let ip: IpAddr = ConfigValue::from("10.0.0.1").parse("db.host").unwrap();
        assert_eq!(ip.to_string(), "10.0.0.1");

        let result: Result<IpAddr> = ConfigValue::from("not_an_ip").parse("db.host");
        assert!(result.is_err());
    }

    #[test]
    fn test_conversions() {
        let value = ConfigValue::from("x".to_string());
        let s: &str = value.as_ref();
        assert_eq!(s, "x");
        let s: String = value.into();
        assert_eq!(s, "x");
    }
}
