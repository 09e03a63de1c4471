//! Confidential-mode URI encryption.
//!
//! AES-256-CTR with a fresh random IV per call, so repeated encryptions of
//! the same URI are unlinkable to an observer. The IV is not secret; it is
//! prepended to the ciphertext so the service can decrypt. Output is
//! `base64(iv || ciphertext)`.

use crate::error::PdfBucketError;
use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine};
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand::{rngs::OsRng, RngCore};

/// OpenSSL-compatible AES-256-CTR: 128-bit big-endian counter block.
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Cipher block size; the IV travels as the first 16 bytes of the payload.
pub const IV_LEN: usize = 16;

/// Encrypt `source_uri` under the base64-encoded 256-bit key `api_secret`.
///
/// Non-deterministic: every call draws a new IV from the OS CSPRNG. CTR mode
/// uses no padding, so the ciphertext length equals the plaintext length.
pub fn encrypt(source_uri: &str, api_secret: &str) -> Result<String, PdfBucketError> {
    let key = STANDARD.decode(api_secret).map_err(|e| {
        PdfBucketError::EncryptionError(format!("api secret is not valid base64: {e}"))
    })?;

    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let mut cipher = Aes256Ctr::new_from_slices(&key, &iv).map_err(|_| {
        PdfBucketError::EncryptionError(format!(
            "api secret decodes to {} bytes, expected a 32-byte key",
            key.len()
        ))
    })?;

    let mut payload = Vec::with_capacity(IV_LEN + source_uri.len());
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(source_uri.as_bytes());
    cipher.apply_keystream(&mut payload[IV_LEN..]);

    Ok(STANDARD.encode(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "5jqzA88Qzdpy+nz/ouWMAVSwzq3AOCV8LjvwflKmLQs=";
    const URI: &str = "https://www.google.com";

    fn decrypt(envelope: &str, api_secret: &str) -> String {
        let payload = STANDARD.decode(envelope).unwrap();
        let (iv, ciphertext) = payload.split_at(IV_LEN);
        let key = STANDARD.decode(api_secret).unwrap();
        let mut cipher = Aes256Ctr::new_from_slices(&key, iv).unwrap();
        let mut plaintext = ciphertext.to_vec();
        cipher.apply_keystream(&mut plaintext);
        String::from_utf8(plaintext).unwrap()
    }

    #[test]
    fn round_trip() {
        let envelope = encrypt(URI, SECRET).unwrap();
        assert_eq!(decrypt(&envelope, SECRET), URI);
    }

    #[test]
    fn fresh_iv_per_call() {
        let a = encrypt(URI, SECRET).unwrap();
        let b = encrypt(URI, SECRET).unwrap();
        assert_ne!(a, b);
        assert_eq!(decrypt(&a, SECRET), decrypt(&b, SECRET));
    }

    #[test]
    fn ciphertext_length_equals_plaintext_length() {
        let payload = STANDARD.decode(encrypt(URI, SECRET).unwrap()).unwrap();
        assert_eq!(payload.len(), IV_LEN + URI.len());
    }

    #[test]
    fn rejects_non_base64_secret() {
        let err = encrypt(URI, "not base64!!!").unwrap_err();
        assert!(matches!(err, PdfBucketError::EncryptionError(_)));
    }

    #[test]
    fn rejects_short_key() {
        // "Uw==" decodes to a single byte, not a 256-bit key.
        let err = encrypt(URI, "Uw==").unwrap_err();
        assert!(matches!(err, PdfBucketError::EncryptionError(_)));
        assert!(err.to_string().contains("expected a 32-byte key"));
    }
}
