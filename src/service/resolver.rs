// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings resolver implementation.
//!
//! Combines a [`SettingsStore`], an environment provider and an optional
//! decryptor into a [`SettingsService`]. A lookup checks the environment
//! override first, then the settings file, then the caller's default, and
//! decrypts the result when it looks like a ciphertext under an eligible key.

use crate::adapters::yaml_file::DEFAULT_FILE_NAME;
use crate::adapters::{MapEnv, ProcessEnv};
use crate::domain::secret::{decode_ciphertext, looks_encrypted};
use crate::domain::{
    ConfigError, ConfigKey, ConfigValue, DecryptionGate, FlatSettings, Result, SettingsService,
};
use crate::ports::{Decryptor, EnvProvider};
use crate::service::SettingsStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves settings keys against the environment, a YAML file and a decryptor.
///
/// # Examples
///
/// ```rust
/// use sweester_config::prelude::*;
/// use sweester_config::adapters::MapEnv;
///
/// # fn main() -> Result<()> {
/// let mut flat = FlatSettings::new();
/// flat.insert("db.port".to_string(), Scalar::from(3306));
///
/// let resolver = SettingsResolver::builder()
///     .with_settings(flat)
///     .with_env(MapEnv::new().with_var("DB_PORT", "13306"))
///     .build()?;
///
/// assert_eq!(resolver.resolve("db.port", "")?.as_str(), "13306");
/// assert_eq!(resolver.get_uint("db.port", 0)?, 13306);
/// assert_eq!(resolver.resolve("db.host", "localhost")?.as_str(), "localhost");
/// # Ok(())
/// # }
/// ```
pub struct SettingsResolver {
    store: SettingsStore,
    env: Box<dyn EnvProvider>,
    decryptor: Option<Box<dyn Decryptor>>,
    gate: DecryptionGate,
}

impl SettingsResolver {
    /// Creates a resolver over the YAML file at `path` with the process
    /// environment and no decryptor.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            store: SettingsStore::new(path),
            env: Box::new(ProcessEnv::new()),
            decryptor: None,
            gate: DecryptionGate::default(),
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> SettingsResolverBuilder {
        SettingsResolverBuilder::new()
    }

    /// Returns the underlying settings store.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Returns the decryption gate in effect.
    pub fn gate(&self) -> DecryptionGate {
        self.gate
    }

    /// Returns `true` if a decryptor is configured.
    pub fn has_decryptor(&self) -> bool {
        self.decryptor.is_some()
    }

    fn env_override(&self, key: &ConfigKey) -> Option<String> {
        let name = key.env_var_name();
        match self.env.var(&name) {
            Some(value) if !value.is_empty() => {
                tracing::debug!(
                    "Key '{}' overridden by {} variable {}",
                    key,
                    self.env.name(),
                    name
                );
                Some(value)
            }
            _ => None,
        }
    }

    fn file_value(&self, key: &ConfigKey) -> Result<Option<String>> {
        let settings = self.store.settings()?;
        Ok(settings
            .get(key.as_str())
            .filter(|scalar| !scalar.is_empty())
            .map(|scalar| scalar.to_string()))
    }

    fn decrypt(&self, key: &ConfigKey, candidate: &str) -> Result<String> {
        let decryptor = self
            .decryptor
            .as_ref()
            .ok_or_else(|| ConfigError::decryption(key.as_str(), "no decryptor configured"))?;

        let ciphertext = decode_ciphertext(candidate).map_err(|e| ConfigError::DecryptionError {
            key: key.to_string(),
            message: "value is not valid base64".to_string(),
            source: Some(Box::new(e)),
        })?;

        let plaintext = decryptor
            .decrypt(&ciphertext)
            .map_err(|e| ConfigError::DecryptionError {
                key: key.to_string(),
                message: format!("{} decryptor rejected the ciphertext", decryptor.name()),
                source: Some(Box::new(e)),
            })?;

        tracing::debug!(
            "Decrypted key '{}' with {}: ciphertext_len={}",
            key,
            decryptor.name(),
            ciphertext.len()
        );

        String::from_utf8(plaintext).map_err(|e| ConfigError::DecryptionError {
            key: key.to_string(),
            message: "plaintext is not valid UTF-8".to_string(),
            source: Some(Box::new(e)),
        })
    }
}

impl SettingsService for SettingsResolver {
    fn all(&self) -> Result<FlatSettings> {
        Ok(self.store.settings()?.as_ref().clone())
    }

    fn resolve(&self, key: &str, default: &str) -> Result<ConfigValue> {
        if key.is_empty() {
            return Ok(ConfigValue::from(default));
        }
        let key = ConfigKey::from(key);

        let candidate = match self.env_override(&key) {
            Some(value) => value,
            None => match self.file_value(&key)? {
                Some(value) => value,
                None => default.to_string(),
            },
        };

        let candidate = if looks_encrypted(&candidate) {
            if self.gate.admits(&key) {
                self.decrypt(&key, &candidate)?
            } else {
                tracing::warn!(
                    "Key '{}' holds an encrypted-looking value but the {} gate leaves it as is",
                    key,
                    self.gate
                );
                candidate
            }
        } else {
            candidate
        };

        if candidate.is_empty() {
            Ok(ConfigValue::from(default))
        } else {
            Ok(ConfigValue::from(candidate))
        }
    }

    fn reload(&self) -> Result<()> {
        self.store.reset();
        Ok(())
    }
}

impl std::fmt::Debug for SettingsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsResolver")
            .field("store", &self.store)
            .field("env", &self.env.name())
            .field("decryptor", &self.decryptor.as_ref().map(|d| d.name()))
            .field("gate", &self.gate)
            .finish()
    }
}

enum StoreSource {
    File(PathBuf),
    Store(SettingsStore),
    Settings(FlatSettings),
}

/// Builder for constructing a `SettingsResolver`.
///
/// Unset parts default to `config.yaml` in the working directory, the
/// process environment, no decryptor and [`DecryptionGate::SecretKeysOnly`].
///
/// # Examples
///
/// ```rust,no_run
/// use sweester_config::prelude::*;
///
/// # fn main() -> Result<()> {
/// let resolver = SettingsResolverBuilder::new()
///     .with_yaml_file("/etc/myapp/config.yaml")
///     .with_decryption_gate(DecryptionGate::AllKeys)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SettingsResolverBuilder {
    source: StoreSource,
    env: Option<Box<dyn EnvProvider>>,
    decryptor: Option<Box<dyn Decryptor>>,
    gate: DecryptionGate,
}

impl SettingsResolverBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            source: StoreSource::File(PathBuf::from(DEFAULT_FILE_NAME)),
            env: None,
            decryptor: None,
            gate: DecryptionGate::default(),
        }
    }

    /// Reads settings from the YAML file at `path`. A missing file is not an error.
    pub fn with_yaml_file(mut self, path: impl AsRef<Path>) -> Self {
        self.source = StoreSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Uses an existing store.
    pub fn with_store(mut self, store: SettingsStore) -> Self {
        self.source = StoreSource::Store(store);
        self
    }

    /// Serves already flattened settings instead of reading a file.
    pub fn with_settings(mut self, settings: FlatSettings) -> Self {
        self.source = StoreSource::Settings(settings);
        self
    }

    /// Reads overrides from `env`.
    pub fn with_env(mut self, env: impl EnvProvider + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Reads overrides from a fixed mapping of variable names to values.
    pub fn with_env_values(self, values: HashMap<String, String>) -> Self {
        self.with_env(MapEnv::with_values(values))
    }

    /// Decrypts secret values with `decryptor`.
    pub fn with_decryptor(mut self, decryptor: impl Decryptor + 'static) -> Self {
        self.decryptor = Some(Box::new(decryptor));
        self
    }

    /// Sets which keys are eligible for decryption.
    pub fn with_decryption_gate(mut self, gate: DecryptionGate) -> Self {
        self.gate = gate;
        self
    }

    /// Builds the resolver.
    pub fn build(self) -> Result<SettingsResolver> {
        let store = match self.source {
            StoreSource::File(path) => SettingsStore::new(path),
            StoreSource::Store(store) => store,
            StoreSource::Settings(settings) => SettingsStore::preloaded(settings),
        };

        Ok(SettingsResolver {
            store,
            env: self.env.unwrap_or_else(|| Box::new(ProcessEnv::new())),
            decryptor: self.decryptor,
            gate: self.gate,
        })
    }
}

impl Default for SettingsResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
