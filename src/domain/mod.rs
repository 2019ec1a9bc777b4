// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and rules.
//!
//! Nothing here touches files, the process environment or a key-management
//! service; those concerns live behind the ports.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod secret;
pub mod service;
pub mod settings;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use secret::looks_encrypted;
pub use service::{DecryptionGate, SettingsService};
pub use settings::{FlatSettings, Resolved, Scalar};
