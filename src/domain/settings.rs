// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattened settings and their leaf values.

use crate::domain::ConfigValue;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A leaf value of a configuration document, kept with the type it was parsed as.
///
/// # Examples
///
/// ```
/// use sweester_config::domain::Scalar;
///
/// assert_eq!(Scalar::Integer(13306).to_string(), "13306");
/// assert_eq!(Scalar::Null.to_string(), "");
/// assert!(Scalar::Null.is_empty());
/// assert!(!Scalar::Bool(false).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An explicit null (`~`, `null`, or a key with no value).
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer that fits in `i64`.
    Integer(i64),
    /// A positive integer above `i64::MAX`.
    Unsigned(u64),
    /// A floating-point number, rendered the way YAML writes it (`1.0`, `1e131`, `.inf`).
    Float(f64),
    /// A string.
    String(String),
}

impl Scalar {
    /// Returns `true` for values that resolve as absent: null and the empty string.
    ///
    /// `false` and `0` are real values and are not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Converts the scalar to its resolved text form.
    pub fn to_config_value(&self) -> ConfigValue {
        ConfigValue::from(self.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Unsigned(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", serde_yaml::Number::from(*n)),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

/// A single-level mapping from dotted settings key to leaf value.
///
/// Iteration order is sorted by key.
pub type FlatSettings = BTreeMap<String, Scalar>;

/// The result of a settings lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    /// The empty key was requested: the whole flattened mapping.
    All(FlatSettings),
    /// A single resolved value.
    Value(ConfigValue),
}

impl Resolved {
    /// Returns the single value, or `None` in dump mode.
    pub fn into_value(self) -> Option<ConfigValue> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::All(_) => None,
        }
    }

    /// Returns the whole mapping, or `None` for a single value.
    pub fn into_all(self) -> Option<FlatSettings> {
        match self {
            Resolved::All(all) => Some(all),
            Resolved::Value(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from("bar").to_string(), "bar");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::from(-5i64).to_string(), "-5");
        assert_eq!(Scalar::Float(0.5).to_string(), "0.5");
        assert_eq!(Scalar::Null.to_string(), "");
    }

    #[test]
    fn test_numbers_render_without_precision_loss() {
        assert_eq!(Scalar::Unsigned(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(1e131).to_string(), "1e131");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), ".inf");
        assert_eq!(Scalar::Float(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn test_scalar_is_empty() {
        assert!(Scalar::Null.is_empty());
        assert!(Scalar::from("").is_empty());
        assert!(!Scalar::from(" ").is_empty());
        assert!(!Scalar::Integer(0).is_empty());
        assert!(!Scalar::Bool(false).is_empty());
    }

    #[test]
    fn test_scalar_to_config_value() {
        assert_eq!(Scalar::Integer(64).to_config_value().as_str(), "64");
        assert_eq!(Scalar::from("foo").to_config_value().as_str(), "foo");
    }

    #[test]
    fn test_scalar_serializes_untagged() {
        let mut settings = FlatSettings::new();
        settings.insert("db.port".to_string(), Scalar::Integer(3306));
        settings.insert("db.user".to_string(), Scalar::from("bar"));
        settings.insert("debug".to_string(), Scalar::Bool(true));
        settings.insert("empty".to_string(), Scalar::Null);
        settings.insert("limits.max".to_string(), Scalar::Unsigned(u64::MAX));
        settings.insert("version".to_string(), Scalar::Float(1.0));

        let yaml = serde_yaml::to_string(&settings).unwrap();
        assert!(yaml.contains("db.port: 3306"));
        assert!(yaml.contains("db.user: bar"));
        assert!(yaml.contains("debug: true"));
        assert!(yaml.contains("empty: null"));
        assert!(yaml.contains("limits.max: 18446744073709551615"));
        assert!(yaml.contains("version: 1.0"));
    }

    #[test]
    fn test_resolved_accessors() {
        let value = Resolved::Value(ConfigValue::from("x"));
        assert_eq!(value.clone().into_value(), Some(ConfigValue::from("x")));
        assert_eq!(value.into_all(), None);

        let all = Resolved::All(FlatSettings::new());
        assert_eq!(all.clone().into_all(), Some(FlatSettings::new()));
        assert_eq!(all.into_value(), None);
    }
}
