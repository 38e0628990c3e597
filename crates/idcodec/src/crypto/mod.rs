//! Symmetric encryption seam used by the token codec.
//!
//! The codec never touches key material directly. It is handed an
//! [`EncryptionProvider`] at construction and calls it once per encode or
//! decode. Key fetch, distribution, and rotation live outside this crate.
//!
//! # Provided implementation
//!
//! [`AesGcmSivProvider`] encrypts with AES-256-GCM-SIV under a synthetic nonce,
//! so identical plaintext under the same key yields identical ciphertext:
//!
//! ```text
//! nonce(12) || ciphertext || tag(16)
//! ```

pub mod cipher;
pub mod key;

pub use cipher::AesGcmSivProvider;
pub use key::KeyBytes;

use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Errors produced by the encryption layer.
#[derive(Debug, Error)]
pub enum EncryptionError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key length: expected {KEY_LEN} bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The AEAD operation failed: wrong key, tampered or truncated input.
    #[error("aead operation failed")]
    AeadFailure,
}

/// Symmetric encrypt/decrypt primitive shared by every codec in the process.
///
/// Implementations must be safe to call concurrently from many threads;
/// the codec does not serialise access.
#[cfg_attr(test, mockall::automock)]
pub trait EncryptionProvider: Send + Sync {
    /// Encrypt `plaintext` under the provider's key.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, EncryptionError>;

    /// Invert [`EncryptionProvider::encrypt`] under the same key.
    ///
    /// Must fail, rather than return garbage, for input that was not
    /// produced by a matching `encrypt` call.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, EncryptionError>;
}
