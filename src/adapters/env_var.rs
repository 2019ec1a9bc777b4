// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable providers.
//!
//! [`ProcessEnv`] reads the real process environment; [`MapEnv`] serves a
//! fixed mapping so tests never have to mutate global state.

use crate::ports::EnvProvider;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Reads overrides from the process environment on every lookup.
///
/// Names or values over the size limits and values that are not valid
/// unicode are treated as unset.
///
/// # Examples
///
/// ```rust
/// use sweester_config::adapters::ProcessEnv;
/// use sweester_config::ports::EnvProvider;
///
/// let env = ProcessEnv::new();
/// assert_eq!(env.name(), "process-env");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a provider over the process environment.
    pub fn new() -> Self {
        ProcessEnv
    }
}

impl EnvProvider for ProcessEnv {
    fn name(&self) -> &str {
        "process-env"
    }

    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.len() > MAX_ENV_KEY_LEN || name.contains(['=', '\0']) {
            return None;
        }

        match env::var(name) {
            Ok(value) if value.len() > MAX_ENV_VALUE_LEN => {
                tracing::debug!(
                    "Ignoring oversized environment variable {}: value_len={} (max {})",
                    name,
                    value.len(),
                    MAX_ENV_VALUE_LEN
                );
                None
            }
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!("Ignoring non-unicode environment variable {}", name);
                None
            }
        }
    }
}

/// Serves overrides from a fixed mapping of variable names to values.
///
/// # Examples
///
/// ```rust
/// use sweester_config::adapters::MapEnv;
/// use sweester_config::ports::EnvProvider;
///
/// let env = MapEnv::new().with_var("DB_PORT", "13306");
/// assert_eq!(env.var("DB_PORT").as_deref(), Some("13306"));
/// assert_eq!(env.var("DB_USER"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty mapping: every variable is unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider over pre-populated values.
    pub fn with_values(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Adds one variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvProvider for MapEnv {
    fn name(&self) -> &str {
        "map-env"
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
