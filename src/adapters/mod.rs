// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! The YAML adapter parses and reads settings files, the env adapters provide
//! overrides, and the vault adapter decrypts secrets with a local key.

pub mod env_var;
#[cfg(feature = "vault")]
pub mod vault;
pub mod yaml_file;

pub use env_var::{MapEnv, ProcessEnv};
#[cfg(feature = "vault")]
pub use vault::VaultDecryptor;
pub use yaml_file::{YamlFileAdapter, YamlParser};
