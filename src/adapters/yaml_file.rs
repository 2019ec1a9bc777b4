// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML settings file adapter.
//!
//! This module parses YAML documents and flattens them into dotted settings
//! keys, and reads the settings file from disk.

use crate::domain::{ConfigError, FlatSettings, Result, Scalar};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML settings files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used when a settings file is located by directory only.
pub const DEFAULT_FILE_NAME: &str = "config.yaml";

/// Flattens a parsed document into dotted settings keys.
///
/// Mapping keys have `_` replaced by `.` and are joined with `.`; sequence
/// elements use their zero-based index as a segment. Entries are visited in
/// document order, so when two paths flatten to the same key the later one
/// wins. A null document flattens to an empty mapping.
///
/// # Examples
///
/// ```rust
/// use sweester_config::adapters::yaml_file::flatten_document;
/// use sweester_config::domain::Scalar;
///
/// let doc: serde_yaml::Value = serde_yaml::from_str("db_user: bar\nusers: [foo]").unwrap();
/// let flat = flatten_document(&doc);
/// assert_eq!(flat.get("db.user"), Some(&Scalar::from("bar")));
/// assert_eq!(flat.get("users.0"), Some(&Scalar::from("foo")));
/// ```
pub fn flatten_document(document: &Value) -> FlatSettings {
    let mut result = FlatSettings::new();
    if !document.is_null() {
        flatten_into(document, String::new(), &mut result);
    }
    result
}

fn flatten_into(value: &Value, prefix: String, result: &mut FlatSettings) {
    match value {
        Value::Mapping(map) => {
            for (key, val) in map {
                match key_segment(key) {
                    Some(segment) => {
                        let path = format!("{}{}.", prefix, segment.replace('_', "."));
                        flatten_into(val, path, result);
                    }
                    None => {
                        tracing::debug!(
                            "Skipping non-scalar mapping key under '{}'",
                            prefix.strip_suffix('.').unwrap_or(&prefix)
                        );
                    }
                }
            }
        }
        Value::Sequence(seq) => {
            for (index, val) in seq.iter().enumerate() {
                flatten_into(val, format!("{}{}.", prefix, index), result);
            }
        }
        Value::Tagged(tagged) => flatten_into(&tagged.value, prefix, result),
        leaf => {
            let key = prefix.strip_suffix('.').unwrap_or(&prefix).to_string();
            result.insert(key, to_scalar(leaf));
        }
    }
}

/// Text of a mapping key as a path segment; `None` for keys that have none.
fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => key_segment(&tagged.value),
        _ => None,
    }
}

fn to_scalar(leaf: &Value) -> Scalar {
    match leaf {
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Scalar::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Scalar::Unsigned(u)
            } else {
                n.as_f64()
                    .map(Scalar::Float)
                    .unwrap_or_else(|| Scalar::String(n.to_string()))
            }
        }
        Value::String(s) => Scalar::String(s.clone()),
        _ => Scalar::Null,
    }
}

/// YAML parser implementation.
///
/// # Examples
///
/// ```rust
/// use sweester_config::adapters::YamlParser;
/// use sweester_config::domain::Scalar;
/// use sweester_config::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let result = parser.parse("db:\n  user: bar\n  port: 3306").unwrap();
/// assert_eq!(result.get("db.user"), Some(&Scalar::from("bar")));
/// assert_eq!(result.get("db.port"), Some(&Scalar::Integer(3306)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<FlatSettings> {
        let document: Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        Ok(flatten_document(&document))
    }
}

/// Reads flattened settings from a YAML file.
///
/// A missing file is not an error: [`YamlFileAdapter::load`] returns an empty
/// mapping for it.
///
/// # Examples
///
/// ```rust,no_run
/// use sweester_config::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::new("/etc/sweester/config.yaml");
/// let settings = adapter.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// YAML parser
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Creates an adapter for the file at `path`. The file is not touched yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            parser: YamlParser::new(),
        }
    }

    /// Creates an adapter for `config.yaml` in the OS-appropriate config directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "sweester")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SourceError` if no home directory can be determined.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir().join(DEFAULT_FILE_NAME)))
    }

    /// Returns the path to the settings file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads and flattens the file, or returns an empty mapping if it does not exist.
    ///
    /// # Errors
    ///
    /// * `ConfigError::SourceError` - the file exists but is too large or unreadable
    /// * `ConfigError::ParseError` - the file is not valid YAML
    pub fn load(&self) -> Result<FlatSettings> {
        if !self.file_path.is_file() {
            tracing::debug!(
                "Settings file {} not found, using empty settings",
                self.file_path.display()
            );
            return Ok(FlatSettings::new());
        }

        let metadata = fs::metadata(&self.file_path).map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!("Failed to read file metadata: {}", self.display_name()),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "Settings file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        tracing::info!("Reading settings from {}", self.file_path.display());
        let content =
            fs::read_to_string(&self.file_path).map_err(|e| ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!("Failed to read settings file: {}", self.display_name()),
                source: Some(Box::new(e)),
            })?;

        let settings = self.parser.parse(&content)?;
        tracing::debug!(
            "Loaded {} settings from {}",
            settings.len(),
            self.display_name()
        );
        Ok(settings)
    }

    fn display_name(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }
}
