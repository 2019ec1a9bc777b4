// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic detection of ciphertext-looking values.
//!
//! KMS-style ciphertext blobs are long base64 strings with no whitespace. The
//! check here decides whether decryption should be attempted; it proves
//! nothing about the value actually being ciphertext.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};

/// Values must be strictly longer than this (in characters) to look encrypted.
pub const MIN_CIPHERTEXT_LEN: usize = 128;

/// Standard alphabet, padding required, non-zero trailing bits accepted.
const CIPHERTEXT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Returns `true` if `value` looks like base64-encoded ciphertext.
///
/// The value must be longer than [`MIN_CIPHERTEXT_LEN`] characters, contain no
/// space and decode as standard base64.
///
/// # Examples
///
/// ```
/// use sweester_config::domain::secret::looks_encrypted;
///
/// assert!(looks_encrypted(&format!("{}=", "ABC".repeat(45))));
/// assert!(!looks_encrypted(&format!("{}=", "ABA".repeat(41))));
/// assert!(!looks_encrypted("hunter2"));
/// ```
pub fn looks_encrypted(value: &str) -> bool {
    if value.chars().count() <= MIN_CIPHERTEXT_LEN || value.contains(' ') {
        return false;
    }
    decode_ciphertext(value).is_ok()
}

/// Decodes a base64 ciphertext blob with the same rules [`looks_encrypted`] uses.
pub fn decode_ciphertext(value: &str) -> Result<Vec<u8>, DecodeError> {
    CIPHERTEXT_ENGINE.decode(value.as_bytes())
}
