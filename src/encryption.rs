//! At-rest encryption for the persisted session token.
//!
//! The session record survives restarts on disk; the bearer token inside it
//! is encrypted with AES-256-GCM so a copied file does not leak a usable
//! credential. Key resolution order:
//! 1. ENCRYPTION_KEY environment variable (derived to 32 bytes)
//! 2. Key file in the app data dir (generated on first run)

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;
use std::path::Path;
use std::sync::OnceLock;
use std::{env, fs};

const NONCE_LEN: usize = 12;

static ENCRYPTION_KEY: OnceLock<[u8; 32]> = OnceLock::new();

/// Derive a 32-byte key from an arbitrary passphrase.
fn derive_key(passphrase: &str) -> [u8; 32] {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut key = [0u8; 32];
    for chunk in 0..4 {
        let mut hasher = DefaultHasher::new();
        passphrase.hash(&mut hasher);
        chunk.hash(&mut hasher);
        key[chunk * 8..(chunk + 1) * 8].copy_from_slice(&hasher.finish().to_le_bytes());
    }
    key
}

/// Initialize the encryption key for this process.
///
/// Reads ENCRYPTION_KEY if set; otherwise loads (or creates) the key file
/// under the app data dir so the session survives restarts.
pub fn init_encryption_key(app_data_dir: &Path) -> Result<(), String> {
    if ENCRYPTION_KEY.get().is_some() {
        return Ok(());
    }

    let key = if let Ok(passphrase) = env::var("ENCRYPTION_KEY") {
        derive_key(&passphrase)
    } else {
        let key_path = crate::config::get_config().get_key_file_path(app_data_dir);
        load_or_create_key_file(&key_path)?
    };

    let _ = ENCRYPTION_KEY.set(key);
    Ok(())
}

fn load_or_create_key_file(path: &Path) -> Result<[u8; 32], String> {
    if let Ok(encoded) = fs::read_to_string(path) {
        let bytes = general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| format!("Invalid key file: {}", e))?;
        if bytes.len() != 32 {
            return Err("Invalid key file: wrong length".to_string());
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        return Ok(key);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create data dir: {}", e))?;
    }

    let mut key = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut key);
    fs::write(path, general_purpose::STANDARD.encode(key))
        .map_err(|e| format!("Failed to write key file: {}", e))?;
    Ok(key)
}

/// Key for this process; without prior init falls back to an ephemeral
/// random key (fine for tests, useless across restarts).
fn current_key() -> [u8; 32] {
    *ENCRYPTION_KEY.get_or_init(|| {
        if let Ok(passphrase) = env::var("ENCRYPTION_KEY") {
            return derive_key(&passphrase);
        }
        let mut key = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut key);
        key
    })
}

/// Encrypt a string; output is base64(nonce || ciphertext).
pub fn encrypt(plaintext: &str) -> Result<String, String> {
    let key = current_key();
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| format!("Encryption failed: {}", e))?;

    let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(general_purpose::STANDARD.encode(combined))
}

/// Decrypt a string produced by [`encrypt`].
pub fn decrypt(encoded: &str) -> Result<String, String> {
    let key = current_key();
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));

    let combined = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| format!("Invalid base64: {}", e))?;

    if combined.len() < NONCE_LEN {
        return Err("Ciphertext too short".to_string());
    }

    let nonce = Nonce::from_slice(&combined[..NONCE_LEN]);
    let ciphertext = &combined[NONCE_LEN..];

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| format!("Decryption failed: {}", e))?;

    String::from_utf8(plaintext).map_err(|e| format!("Invalid UTF-8 in decrypted data: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let original = "eyJhbGciOiJIUzI1NiJ9.test-token";
        let encrypted = encrypt(original).unwrap();
        let decrypted = decrypt(&encrypted).unwrap();
        assert_eq!(original, decrypted);
    }

    #[test]
    fn test_random_nonce_per_call() {
        let a = encrypt("same-token").unwrap();
        let b = encrypt("same-token").unwrap();
        assert_ne!(a, b);
        assert_eq!(decrypt(&a).unwrap(), "same-token");
        assert_eq!(decrypt(&b).unwrap(), "same-token");
    }

    #[test]
    fn test_garbage_input_fails() {
        assert!(decrypt("not-base64!!!").is_err());
        assert!(decrypt("AAAA").is_err());
    }
}
