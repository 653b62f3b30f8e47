//! Binary framing of an encrypted message and its text armor.
//!
//! Layout:
//! ```text
//! SALT (16) | NONCE (12) | CIPHERTEXT | TAG (16)
//! ```
//! encoded as URL-safe base64 with padding (RFC 4648 §5).

use base64::{Engine, engine::general_purpose::URL_SAFE};
use serde::Serialize;

use crate::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::{CipherError, Result};

/// Smallest decodable blob: salt and nonce with an empty ciphertext.
pub const MIN_LEN: usize = SALT_LEN + NONCE_LEN;

/// A parsed encrypted message.
pub struct Blob {
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    ciphertext: Vec<u8>,
}

/// Sizes of the parts of a blob, for display.
#[derive(Debug, Serialize)]
pub struct BlobInfo {
    pub total_len: usize,
    pub salt_len: usize,
    pub nonce_len: usize,
    pub ciphertext_len: usize,
    pub tag_len: usize,
    /// `None` when the ciphertext cannot even hold a tag.
    pub plaintext_len: Option<usize>,
}

impl Blob {
    pub fn new(salt: [u8; SALT_LEN], nonce: [u8; NONCE_LEN], ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext with the authentication tag appended.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MIN_LEN + self.ciphertext.len());
        buf.extend_from_slice(&self.salt);
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.ciphertext);
        buf
    }

    /// Splits raw bytes into salt, nonce and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::TruncatedBlob`] if fewer than 28 bytes are given.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let truncated = || CipherError::TruncatedBlob {
            len: data.len(),
            min: MIN_LEN,
        };

        let (salt, rest) = data.split_first_chunk::<SALT_LEN>().ok_or_else(truncated)?;
        let (nonce, ciphertext) = rest.split_first_chunk::<NONCE_LEN>().ok_or_else(truncated)?;

        Ok(Self {
            salt: *salt,
            nonce: *nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }

    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.to_bytes())
    }

    /// Decodes URL-safe base64 text and splits it.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Decode`] for malformed base64 and
    /// [`CipherError::TruncatedBlob`] for short input.
    pub fn decode(text: &str) -> Result<Self> {
        let data = URL_SAFE.decode(text)?;
        Self::from_bytes(&data)
    }

    pub fn info(&self) -> BlobInfo {
        let ciphertext_len = self.ciphertext.len();
        BlobInfo {
            total_len: MIN_LEN + ciphertext_len,
            salt_len: SALT_LEN,
            nonce_len: NONCE_LEN,
            ciphertext_len,
            tag_len: TAG_LEN,
            plaintext_len: ciphertext_len.checked_sub(TAG_LEN),
        }
    }
}

impl std::fmt::Display for BlobInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total:      {} bytes", self.total_len)?;
        writeln!(f, "salt:       {} bytes", self.salt_len)?;
        writeln!(f, "nonce:      {} bytes", self.nonce_len)?;
        writeln!(f, "ciphertext: {} bytes (incl. {} byte tag)", self.ciphertext_len, self.tag_len)?;
        match self.plaintext_len {
            Some(n) => write!(f, "message:    {n} bytes"),
            None => write!(f, "message:    invalid (ciphertext shorter than tag)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_salt_nonce_ciphertext() {
        let blob = Blob::new([1u8; 16], [2u8; 12], vec![3u8; 21]);
        let bytes = blob.to_bytes();

        assert_eq!(bytes.len(), 49);
        assert_eq!(&bytes[..16], &[1u8; 16]);
        assert_eq!(&bytes[16..28], &[2u8; 12]);
        assert_eq!(&bytes[28..], &[3u8; 21]);
    }

    #[test]
    fn encoding_is_padded_url_safe() {
        // 0xfb bytes land on indices 62 and 63, i.e. - and _
        let blob = Blob::new([0xfb; 16], [0xff; 12], vec![0xfe; 21]);
        let text = blob.encode();

        assert_eq!(text.len(), 68);
        assert!(text.ends_with('='));
        assert!(!text.contains('+') && !text.contains('/'));
        assert!(text.contains('-') || text.contains('_'));
    }

    #[test]
    fn decode_splits_parts() {
        let text = Blob::new([9u8; 16], [8u8; 12], vec![7u8; 16]).encode();
        let parsed = Blob::decode(&text).unwrap();

        assert_eq!(parsed.salt(), &[9u8; 16]);
        assert_eq!(parsed.nonce(), &[8u8; 12]);
        assert_eq!(parsed.ciphertext(), &[7u8; 16]);
    }

    #[test]
    fn short_input_is_truncated() {
        for len in [0, 1, 16, 27] {
            match Blob::from_bytes(&vec![0u8; len]) {
                Err(CipherError::TruncatedBlob { len: l, min }) => {
                    assert_eq!(l, len);
                    assert_eq!(min, 28);
                }
                _ => panic!("expected TruncatedBlob for {len} bytes"),
            }
        }
    }

    #[test]
    fn exactly_min_len_parses_with_empty_ciphertext() {
        let parsed = Blob::from_bytes(&[0u8; 28]).unwrap();
        assert!(parsed.ciphertext().is_empty());
        assert_eq!(parsed.info().plaintext_len, None);
    }

    #[test]
    fn standard_alphabet_is_rejected() {
        let text = "++++//////++++//////++++//////++++//////";
        assert!(matches!(Blob::decode(text), Err(CipherError::Decode(_))));
    }

    #[test]
    fn missing_padding_is_rejected() {
        let text = Blob::new([0u8; 16], [0u8; 12], vec![0u8; 21]).encode();
        let unpadded = text.trim_end_matches('=');
        assert!(matches!(Blob::decode(unpadded), Err(CipherError::Decode(_))));
    }

    #[test]
    fn info_reports_message_length() {
        let info = Blob::new([0u8; 16], [0u8; 12], vec![0u8; 21]).info();
        assert_eq!(info.total_len, 49);
        assert_eq!(info.plaintext_len, Some(5));
    }
}
