// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the resolver and the outside world:
//! document parsing, the environment and the decryption service. Adapters in
//! the adapters layer implement them.

pub mod decryptor;
pub mod env;
pub mod parser;

// Re-export commonly used types
pub use decryptor::Decryptor;
pub use env::EnvProvider;
pub use parser::ConfigParser;
