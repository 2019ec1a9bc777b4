// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the settings resolver.
//!
//! [`SettingsStore`] caches the flattened file, [`SettingsResolver`] applies
//! overrides and decryption on top of it, and [`global`] holds the shared
//! process-wide instance.

pub mod global;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use resolver::{SettingsResolver, SettingsResolverBuilder};
pub use store::SettingsStore;
