use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use super::KEY_LEN;
use crate::error::{CipherError, Result};
use crate::preset::SecurityPreset;

/// Derives a 32-byte AES key from `password` with Argon2id.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    preset: &SecurityPreset,
) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    preset.validate()?;

    let params = Params::new(
        preset.mem_cost_kib(),
        preset.time_cost(),
        u32::from(preset.parallelism()),
        Some(KEY_LEN),
    )
    .map_err(CipherError::KeyDerivation)?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key[..])
        .map_err(CipherError::KeyDerivation)?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light(mem_cost_kib: u32) -> SecurityPreset {
        SecurityPreset::new("Test", 1, mem_cost_kib, 1).unwrap()
    }

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; 16];
        let preset = light(64);

        let k1 = derive_key("password", &salt, &preset).unwrap();
        let k2 = derive_key("password", &salt, &preset).unwrap();

        assert_eq!(*k1, *k2);
    }

    #[test]
    fn kdf_known_answer() {
        let salt: [u8; 16] = std::array::from_fn(|i| i as u8);
        let key = derive_key("correct-horse", &salt, &light(64)).unwrap();

        let expected: [u8; KEY_LEN] = [
            0x94, 0xba, 0x59, 0xd7, 0x24, 0x5e, 0x94, 0x03, 0x51, 0x54, 0x01, 0x71, 0x25, 0x75,
            0x08, 0x5c, 0x91, 0xde, 0xee, 0xfd, 0x60, 0x68, 0xa2, 0xba, 0xfb, 0x4b, 0x90, 0x57,
            0x23, 0x52, 0xcc, 0x05,
        ];
        assert_eq!(*key, expected);
    }

    #[test]
    fn kdf_params_affect_output() {
        let salt = [7u8; 16];

        let k1 = derive_key("pw", &salt, &light(64)).unwrap();
        let k2 = derive_key("pw", &salt, &light(128)).unwrap();

        assert_ne!(*k1, *k2);
    }

    #[test]
    fn kdf_salt_affects_output() {
        let preset = light(64);

        let k1 = derive_key("pw", &[1u8; 16], &preset).unwrap();
        let k2 = derive_key("pw", &[2u8; 16], &preset).unwrap();

        assert_ne!(*k1, *k2);
    }

    #[test]
    fn kdf_accepts_empty_password() {
        assert!(derive_key("", &[0u8; 16], &light(64)).is_ok());
    }
}
