// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use sweester_config::domain::{ConfigError, Result};
use sweester_config::ports::Decryptor;
use tempfile::NamedTempFile;

/// The settings document used throughout the integration tests.
pub const SAMPLE_YAML: &str = "\
db:
    user: bar
    pass: barcode
sys:
    users:
        - foo
        - bar
        - test
        - zoo
";

/// Creates a temporary YAML file with the given content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
pub fn create_temp_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Decrypts by XOR-ing every byte with a fixed mask and counts calls.
#[derive(Debug, Clone)]
pub struct XorDecryptor {
    mask: u8,
    calls: Arc<AtomicUsize>,
}

impl XorDecryptor {
    pub fn new(mask: u8) -> Self {
        Self {
            mask,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Produces the base64 text a settings file would hold for `plaintext`.
    pub fn seal(&self, plaintext: &str) -> String {
        let masked: Vec<u8> = plaintext.bytes().map(|b| b ^ self.mask).collect();
        STANDARD.encode(masked)
    }

    /// Shares the call counter so it can be read after the decryptor is moved.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Decryptor for XorDecryptor {
    fn name(&self) -> &str {
        "xor"
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ciphertext.iter().map(|b| b ^ self.mask).collect())
    }
}

/// Refuses every ciphertext, like a key service without access.
#[derive(Debug, Clone, Copy)]
pub struct DeniedDecryptor;

impl Decryptor for DeniedDecryptor {
    fn name(&self) -> &str {
        "denied"
    }

    fn decrypt(&self, _ciphertext: &[u8]) -> Result<Vec<u8>> {
        Err(ConfigError::decryption("", "AccessDeniedException"))
    }
}

/// Helper to set and clean up environment variables
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        env::remove_var(key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
