//! Cryptographic primitives for the cipher engine.
//!
//! Provides Argon2id key derivation, AES-256-GCM sealing and OS randomness.

pub mod aead;
pub mod kdf;

pub use aead::{generate_nonce, generate_salt, open, seal};
pub use kdf::derive_key;

/// Length of the salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the nonce (12 bytes for AES-GCM).
pub const NONCE_LEN: usize = 12;
/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;
