// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decryption service trait definition.
//!
//! Settings values that look like ciphertext are handed to a `Decryptor`, the
//! crate's view of an external key-management service. The resolver does the
//! base64 decoding; a decryptor only sees raw ciphertext bytes.

use crate::domain::Result;

/// A key-management decryption service.
///
/// Failures are reported as `ConfigError::DecryptionError`; the resolver
/// attaches the settings key before returning them to the caller.
///
/// # Examples
///
/// ```rust
/// use sweester_config::ports::Decryptor;
/// use sweester_config::domain::Result;
///
/// struct Reverse;
///
/// impl Decryptor for Reverse {
///     fn name(&self) -> &str {
///         "reverse"
///     }
///
///     fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
///         Ok(ciphertext.iter().rev().copied().collect())
///     }
/// }
///
/// assert_eq!(Reverse.decrypt(b"cba").unwrap(), b"abc");
/// ```
pub trait Decryptor: Send + Sync {
    /// Returns a short name for logging, such as `"vault"` or `"kms"`.
    fn name(&self) -> &str;

    /// Decrypts a ciphertext blob into plaintext bytes.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed ciphertext, a wrong key, or a refused
    /// request. The error must not be swallowed by callers.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
