//! AES-256-GCM-SIV [`EncryptionProvider`] with a synthetic nonce.
//!
//! **Algorithm choice:** AES-256-GCM-SIV (RFC 8452) is nonce-misuse-resistant.
//! The nonce is the truncated HMAC-SHA256 of the plaintext under a sub-key
//! derived from the token key, so the same identifier pair always yields the
//! same token.
//!
//! **Do NOT substitute plain AES-256-GCM here.** A derived nonce repeats for
//! repeated plaintext, and GCM nonce reuse breaks both confidentiality and
//! authentication.

use aes_gcm_siv::{
    aead::{Aead, KeyInit},
    Aes256GcmSiv, Nonce,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{EncryptionError, EncryptionProvider, KeyBytes, KEY_LEN};

type HmacSha256 = Hmac<Sha256>;

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the AES-GCM-SIV authentication tag.
pub const TAG_LEN: usize = 16;

/// Domain-separation label for the nonce sub-key.
const NONCE_KEY_LABEL: &[u8] = b"idcodec/v1/synthetic-nonce";

/// Deterministic AES-256-GCM-SIV provider.
///
/// Holds only immutable state; share it across threads behind an `Arc`.
#[derive(Clone)]
pub struct AesGcmSivProvider {
    cipher: Aes256GcmSiv,
    nonce_mac: HmacSha256,
}

impl AesGcmSivProvider {
    /// Build a provider from a raw 32-byte key.
    ///
    /// # Errors
    ///
    /// Returns [`EncryptionError::InvalidKeyLength`] if `key` is not
    /// [`KEY_LEN`] bytes.
    pub fn new(key: &[u8]) -> Result<Self, EncryptionError> {
        let key = KeyBytes::from_slice(key)?;

        let cipher = <Aes256GcmSiv as KeyInit>::new_from_slice(key.as_bytes())
            .map_err(|_| EncryptionError::InvalidKeyLength(KEY_LEN))?;

        let mut derive = <HmacSha256 as Mac>::new_from_slice(key.as_bytes())
            .map_err(|_| EncryptionError::InvalidKeyLength(KEY_LEN))?;
        derive.update(NONCE_KEY_LABEL);
        let nonce_key = KeyBytes::from_slice(&derive.finalize().into_bytes())?;
        let nonce_mac = <HmacSha256 as Mac>::new_from_slice(nonce_key.as_bytes())
            .map_err(|_| EncryptionError::InvalidKeyLength(KEY_LEN))?;

        Ok(Self { cipher, nonce_mac })
    }

    fn synthetic_nonce(&self, plaintext: &[u8]) -> [u8; NONCE_LEN] {
        let mut mac = self.nonce_mac.clone();
        mac.update(plaintext);
        let digest = mac.finalize().into_bytes();
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&digest[..NONCE_LEN]);
        nonce
    }
}

impl EncryptionProvider for AesGcmSivProvider {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        let nonce = self.synthetic_nonce(plaintext);
        let sealed = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| EncryptionError::AeadFailure)?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
        if ciphertext.len() < NONCE_LEN + TAG_LEN {
            return Err(EncryptionError::AeadFailure);
        }
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| EncryptionError::AeadFailure)
    }
}

impl std::fmt::Debug for AesGcmSivProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AesGcmSivProvider([REDACTED])")
    }
}
