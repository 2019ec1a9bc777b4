// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local key-management stand-in built on ChaCha20-Poly1305.
//!
//! Blobs are laid out as `nonce (12 bytes) || ciphertext || tag (16 bytes)`
//! and stored base64-encoded in settings files, the same shape a KMS
//! ciphertext blob has. Useful for development, tests and hosts without a
//! cloud key service.

use crate::domain::{ConfigError, Result};
use crate::ports::Decryptor;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::rngs::OsRng;
use zeroize::Zeroize;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Symmetric decryptor for vault blobs.
///
/// # Examples
///
/// ```rust
/// use sweester_config::adapters::VaultDecryptor;
/// use sweester_config::ports::Decryptor;
///
/// let vault = VaultDecryptor::from_key_bytes(&[7u8; 32]).unwrap();
/// let blob = vault.encrypt(b"bamboozles").unwrap();
/// assert_eq!(vault.decrypt(&blob).unwrap(), b"bamboozles");
/// ```
pub struct VaultDecryptor {
    key: Key,
}

impl VaultDecryptor {
    /// Builds a vault from raw key bytes. The key must be 32 bytes.
    pub fn from_key_bytes(key_bytes: &[u8]) -> Result<Self> {
        if key_bytes.len() != KEY_LEN {
            return Err(ConfigError::SourceError {
                source_name: "vault".to_string(),
                message: format!(
                    "invalid key length: {} bytes (expected {})",
                    key_bytes.len(),
                    KEY_LEN
                ),
                source: None,
            });
        }
        let mut key = Key::default();
        key.copy_from_slice(key_bytes);
        Ok(Self { key })
    }

    /// Reads a base64-encoded key from the environment variable `var`.
    pub fn from_env_var(var: &str) -> Result<Self> {
        let encoded = std::env::var(var).map_err(|e| ConfigError::SourceError {
            source_name: "vault".to_string(),
            message: format!("key variable {} unreadable", var),
            source: Some(Box::new(e)),
        })?;
        let mut decoded = STANDARD
            .decode(encoded.trim().as_bytes())
            .map_err(|e| ConfigError::SourceError {
                source_name: "vault".to_string(),
                message: format!("key variable {} is not base64", var),
                source: Some(Box::new(e)),
            })?;
        let vault = Self::from_key_bytes(&decoded);
        decoded.zeroize();
        vault
    }

    /// Encrypts `plaintext` into a blob under a fresh random nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = ChaCha20Poly1305::new(&self.key);
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let sealed = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| ConfigError::SourceError {
                source_name: "vault".to_string(),
                message: format!("encryption failed: {}", e),
                source: None,
            })?;

        let mut blob = Vec::with_capacity(NONCE_LEN + sealed.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&sealed);
        Ok(blob)
    }

    /// Encrypts `plaintext` and base64-encodes the blob for a settings file.
    pub fn encrypt_to_base64(&self, plaintext: &[u8]) -> Result<String> {
        Ok(STANDARD.encode(self.encrypt(plaintext)?))
    }
}

impl Decryptor for VaultDecryptor {
    fn name(&self) -> &str {
        "vault"
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < NONCE_LEN + TAG_LEN {
            return Err(ConfigError::decryption(
                "",
                format!(
                    "ciphertext too short: {} bytes (min {})",
                    ciphertext.len(),
                    NONCE_LEN + TAG_LEN
                ),
            ));
        }
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
        let cipher = ChaCha20Poly1305::new(&self.key);
        cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| ConfigError::decryption("", "authentication failed"))
    }
}

impl Drop for VaultDecryptor {
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}
