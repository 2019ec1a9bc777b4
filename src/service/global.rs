// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide settings.
//!
//! The first lookup builds one shared [`SettingsResolver`] over the file named
//! by `SWEESTER_CONFIG` (or `config.yaml` in the working directory). Every
//! caller sees the same loaded settings until [`reset`] or [`configure`].
//!
//! ```rust,no_run
//! use sweester_config::service::global;
//!
//! # fn main() -> sweester_config::domain::Result<()> {
//! let port = global::get_uint("db.port", 3306)?;
//! let debug = global::get_boolean("app.debug", false)?;
//! # Ok(())
//! # }
//! ```

use crate::adapters::yaml_file::DEFAULT_FILE_NAME;
use crate::domain::{ConfigValue, Resolved, Result, SettingsService};
use crate::service::SettingsResolver;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Environment variable naming the settings file for the global resolver.
pub const CONFIG_PATH_VAR: &str = "SWEESTER_CONFIG";

static GLOBAL: Lazy<RwLock<Option<Arc<SettingsResolver>>>> = Lazy::new(|| RwLock::new(None));

/// Returns the path the global resolver reads when none is configured.
pub fn default_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_FILE_NAME),
    }
}

/// Returns the shared resolver, building it on first use.
pub fn resolver() -> Arc<SettingsResolver> {
    if let Some(resolver) = GLOBAL.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Arc::clone(resolver);
    }

    let mut global = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(resolver) = global.as_ref() {
        return Arc::clone(resolver);
    }

    let path = default_path();
    tracing::debug!("Creating global settings resolver for {}", path.display());
    let resolver = Arc::new(SettingsResolver::new(path));
    *global = Some(Arc::clone(&resolver));
    resolver
}

/// Installs `resolver` as the shared resolver, replacing any existing one.
pub fn configure(resolver: SettingsResolver) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(resolver));
}

/// Drops the shared resolver; the next lookup builds and loads a fresh one.
pub fn reset() {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner).take();
}

/// Looks up `key` in the shared resolver, or dumps every setting when `key` is empty.
pub fn settings(key: &str, default: &str) -> Result<Resolved> {
    resolver().settings(key, default)
}

/// Resolves `key` with the shared resolver.
pub fn resolve(key: &str, default: &str) -> Result<ConfigValue> {
    resolver().resolve(key, default)
}

/// Resolves `key` as a boolean with the shared resolver.
pub fn get_boolean(key: &str, default: bool) -> Result<bool> {
    resolver().get_boolean(key, default)
}

/// Resolves `key` as a positive integer with the shared resolver.
pub fn get_uint(key: &str, default: u64) -> Result<u64> {
    resolver().get_uint(key, default)
}
