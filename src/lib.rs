// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings resolution over a YAML file, environment overrides and encrypted secrets.
//!
//! A nested YAML document is flattened into dotted keys (`db.user`,
//! `sys.users.0`). Lookups check an environment variable derived from the key
//! first (`db.port` → `DB_PORT`), then the file, then the caller's default.
//! Values that look like ciphertext under secret-named keys are handed to a
//! [`Decryptor`](ports::Decryptor) before they are returned.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: keys, values, flattened settings, the secret heuristic
//!   and the `SettingsService` trait with its typed accessors
//! - **Ports**: `ConfigParser`, `EnvProvider` and `Decryptor`
//! - **Adapters**: the YAML flattener and file reader, process and fixed
//!   environments, and the local ChaCha20-Poly1305 vault
//! - **Service**: the lazily loaded store, the resolver and the global instance
//!
//! # Feature Flags
//!
//! - `cli`: Build the `sweester-settings` binary (default)
//! - `vault`: Enable the local `VaultDecryptor` (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sweester_config::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let resolver = SettingsResolver::builder()
//!     .with_yaml_file("config.yaml")
//!     .build()?;
//!
//! let user = resolver.resolve("db.user", "root")?;
//! let port = resolver.get_uint("db.port", 3306)?;
//! let debug = resolver.get_boolean("app.debug", false)?;
//! # Ok(())
//! # }
//! ```
//!
//! Code that does not want to pass a resolver around can use the
//! [`service::global`] functions instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        looks_encrypted, ConfigError, ConfigKey, ConfigValue, DecryptionGate, FlatSettings,
        Resolved, Result, Scalar, SettingsService,
    };
    pub use crate::ports::{ConfigParser, Decryptor, EnvProvider};
    pub use crate::service::{SettingsResolver, SettingsResolverBuilder, SettingsStore};

    pub use crate::adapters::{MapEnv, ProcessEnv, YamlFileAdapter, YamlParser};
    #[cfg(feature = "vault")]
    pub use crate::adapters::VaultDecryptor;
}
