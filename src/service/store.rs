// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazily loaded settings store.
//!
//! A `SettingsStore` owns one flattened settings mapping for as long as it
//! lives. The file is read on the first lookup, cached, and read again only
//! after [`SettingsStore::reset`].

use crate::adapters::YamlFileAdapter;
use crate::domain::{FlatSettings, Result};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Where a store's settings come from.
#[derive(Debug)]
enum Origin {
    File(YamlFileAdapter),
    Fixed(Arc<FlatSettings>),
}

/// Holds the flattened settings loaded from a YAML file.
///
/// Concurrent first lookups load the file once: readers take the fast path
/// through a read lock, and the loader re-checks under the write lock.
///
/// # Examples
///
/// ```rust
/// use sweester_config::service::SettingsStore;
///
/// let store = SettingsStore::new("/nonexistent/config.yaml");
/// assert!(store.settings().unwrap().is_empty());
/// assert!(store.is_loaded());
///
/// store.reset();
/// assert!(!store.is_loaded());
/// ```
#[derive(Debug)]
pub struct SettingsStore {
    origin: Origin,
    cache: RwLock<Option<Arc<FlatSettings>>>,
}

impl SettingsStore {
    /// Creates a store backed by the YAML file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::from_adapter(YamlFileAdapter::new(path))
    }

    /// Creates a store backed by an existing file adapter.
    pub fn from_adapter(adapter: YamlFileAdapter) -> Self {
        Self {
            origin: Origin::File(adapter),
            cache: RwLock::new(None),
        }
    }

    /// Creates a store backed by `config.yaml` in the OS-appropriate config directory.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Ok(Self::from_adapter(YamlFileAdapter::from_default_location(
            app_name, qualifier,
        )?))
    }

    /// Creates a store over settings that are already flattened.
    ///
    /// `reset` has nothing to reload for such a store; the same mapping is
    /// served again.
    pub fn preloaded(settings: FlatSettings) -> Self {
        let settings = Arc::new(settings);
        Self {
            origin: Origin::Fixed(Arc::clone(&settings)),
            cache: RwLock::new(Some(settings)),
        }
    }

    /// Returns the settings file path, if the store is file-backed.
    pub fn file_path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::File(adapter) => Some(adapter.file_path()),
            Origin::Fixed(_) => None,
        }
    }

    /// Returns the settings, loading them on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. A
    /// failed load is not cached; the next call tries again.
    pub fn settings(&self) -> Result<Arc<FlatSettings>> {
        if let Some(settings) = self.read_cache().as_ref() {
            return Ok(Arc::clone(settings));
        }

        let mut cache = self.write_cache();
        if let Some(settings) = cache.as_ref() {
            return Ok(Arc::clone(settings));
        }

        let loaded = Arc::new(self.load()?);
        *cache = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Returns `true` once settings have been loaded and not reset since.
    pub fn is_loaded(&self) -> bool {
        self.read_cache().is_some()
    }

    /// Drops the cached settings so the next lookup reloads them.
    pub fn reset(&self) {
        let mut cache = self.write_cache();
        if cache.take().is_some() {
            tracing::debug!("Settings cache cleared");
        }
    }

    fn load(&self) -> Result<FlatSettings> {
        match &self.origin {
            Origin::File(adapter) => adapter.load(),
            Origin::Fixed(settings) => Ok(settings.as_ref().clone()),
        }
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Option<Arc<FlatSettings>>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<Arc<FlatSettings>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
