use thiserror::Error;

/// Errors returned by preset resolution and the cipher engine.
///
/// Decryption failures caused by a wrong password, a wrong preset or a
/// modified blob all surface as [`CipherError::Authentication`] and carry no
/// detail about which one occurred.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("unknown security preset '{name}' (expected one of: {expected})")]
    UnknownPreset { name: String, expected: String },

    #[error("invalid security preset: {0}")]
    InvalidPreset(String),

    #[error("OS random generator unavailable: {0}")]
    RandomSource(getrandom::Error),

    #[error("argon2 key derivation failed: {0}")]
    KeyDerivation(argon2::Error),

    #[error("failed to construct AES-256-GCM cipher")]
    CipherConstruction,

    #[error("message too long to encrypt")]
    MessageTooLong,

    #[error("malformed encrypted text: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("encrypted text too short: {len} bytes, need at least {min}")]
    TruncatedBlob { len: usize, min: usize },

    #[error("wrong password, wrong security level, or corrupted data")]
    Authentication,

    #[error("decrypted message is not valid UTF-8")]
    NotUtf8,
}

pub type Result<T> = std::result::Result<T, CipherError>;
