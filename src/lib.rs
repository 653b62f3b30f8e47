//! Password-based encryption of short text messages.
//!
//! A key is derived from the password with Argon2id under a named
//! [`SecurityPreset`], the message is sealed with AES-256-GCM, and the result
//! is framed as `salt | nonce | ciphertext+tag` in URL-safe base64.
//!
//! ```no_run
//! let preset = smsseal::preset::resolve("Medium")?;
//! let blob = smsseal::encrypt("HELLO", "correct-horse", preset)?;
//! assert_eq!(smsseal::decrypt(&blob, "correct-horse", preset)?, "HELLO");
//! # Ok::<(), smsseal::CipherError>(())
//! ```

mod crypto;
mod error;
pub mod format;
pub mod preset;

pub use crate::error::{CipherError, Result};
pub use crate::format::{Blob, BlobInfo};
pub use crate::preset::SecurityPreset;

use crypto::{NONCE_LEN, SALT_LEN};
use zeroize::Zeroize;

/// Encrypts `plaintext` under a key derived from `password`.
///
/// Every call draws a fresh salt and nonce, so encrypting the same message
/// twice yields different text.
pub fn encrypt(plaintext: &str, password: &str, preset: &SecurityPreset) -> Result<String> {
    let salt = crypto::generate_salt()?;
    let nonce = crypto::generate_nonce()?;
    seal_with(plaintext, password, preset, salt, nonce).map(|blob| blob.encode())
}

/// Decrypts text produced by [`encrypt`] with the same password and preset.
///
/// No plaintext is returned unless the authentication tag verifies.
pub fn decrypt(encoded: &str, password: &str, preset: &SecurityPreset) -> Result<String> {
    let blob = Blob::decode(encoded)?;

    let key = crypto::derive_key(password, blob.salt(), preset)?;
    let mut plaintext = crypto::open(&key, blob.nonce(), blob.ciphertext())?;

    String::from_utf8(std::mem::take(&mut *plaintext)).map_err(|e| {
        e.into_bytes().zeroize();
        CipherError::NotUtf8
    })
}

fn seal_with(
    plaintext: &str,
    password: &str,
    preset: &SecurityPreset,
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
) -> Result<Blob> {
    let key = crypto::derive_key(password, &salt, preset)?;
    let ciphertext = crypto::seal(&key, &nonce, plaintext.as_bytes())?;
    Ok(Blob::new(salt, nonce, ciphertext))
}
