//! Reversible, URL-safe tokens for a (user id, project id) pair.
//!
//! # Token format
//!
//! ```text
//! base36( 0x01 || encrypt( hex16(project_id) || utf8(user_id) ) )
//! ```
//!
//! - [`plaintext`] owns the fixed-width field layout.
//! - [`radix`] owns the guard byte and the base-36 text.
//! - The [`EncryptionProvider`] owns the key.
//!
//! # Failure policy
//!
//! [`Codec::encode`] only ever sees trusted internal values, so it fails loudly.
//! Tokens arrive from URLs and may be attacker-controlled, so
//! [`Codec::decode_user`] and [`Codec::decode_project_id`] never fail: any
//! problem becomes `None` or [`INVALID_PROJECT_ID`].

pub mod plaintext;
pub mod radix;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::crypto::{AesGcmSivProvider, EncryptionProvider};
use crate::CodecError;

/// Numeric project identifier.
pub type ProjectId = i64;

/// Returned by [`Codec::decode_project_id`] when the token is not valid.
pub const INVALID_PROJECT_ID: ProjectId = 0;

/// A decoded identifier pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPair {
    /// Application-assigned user identifier; never empty.
    pub user_id: String,
    /// Storage-layer project identifier.
    pub project_id: ProjectId,
}

/// Encodes and decodes identifier tokens under a shared encryption provider.
///
/// Cloning is cheap; every clone shares the same provider.
#[derive(Clone)]
pub struct Codec {
    provider: Arc<dyn EncryptionProvider>,
}

impl Codec {
    /// Create a codec around an injected provider.
    pub fn new(provider: Arc<dyn EncryptionProvider>) -> Self {
        Self { provider }
    }

    /// Create a codec backed by [`AesGcmSivProvider`] under a raw 32-byte key.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EncryptionFailure`] if the key has the wrong length.
    pub fn with_key(key: &[u8]) -> Result<Self, CodecError> {
        Ok(Self::new(Arc::new(AesGcmSivProvider::new(key)?)))
    }

    /// Encode `user_id` and `project_id` into a base-36 token.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidInput`] if `user_id` is empty.
    /// - [`CodecError::EncryptionFailure`] if the provider fails.
    pub fn encode(&self, user_id: &str, project_id: ProjectId) -> Result<String, CodecError> {
        if user_id.is_empty() {
            return Err(CodecError::InvalidInput("user id must not be empty".into()));
        }
        let plain = plaintext::build(user_id, project_id);
        let sealed = self.provider.encrypt(&plain)?;
        Ok(radix::encode(&sealed))
    }

    /// Decode both fields of `token`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - [`CodecError::MalformedToken`] if the text or the decrypted payload
    ///   has the wrong shape.
    /// - [`CodecError::EncryptionFailure`] if the provider cannot decrypt.
    pub fn decode(&self, token: &str) -> Result<IdPair, CodecError> {
        let sealed = radix::decode(token)?;
        let plain = self.provider.decrypt(&sealed)?;
        let (user_id, project_id) = plaintext::split(&plain)?;
        Ok(IdPair {
            user_id,
            project_id,
        })
    }

    /// Decode the user id from `token`, or `None` if the token is invalid.
    pub fn decode_user(&self, token: &str) -> Option<String> {
        self.decode_soft(token).map(|pair| pair.user_id)
    }

    /// Decode the project id from `token`, or [`INVALID_PROJECT_ID`] if the
    /// token is invalid.
    pub fn decode_project_id(&self, token: &str) -> ProjectId {
        self.decode_soft(token)
            .map_or(INVALID_PROJECT_ID, |pair| pair.project_id)
    }

    fn decode_soft(&self, token: &str) -> Option<IdPair> {
        match self.decode(token) {
            Ok(pair) => Some(pair),
            Err(CodecError::EncryptionFailure(e)) => {
                warn!(error = %e, token_len = token.len(), "token decryption failed");
                None
            }
            Err(e) => {
                debug!(error = %e, token_len = token.len(), "rejected malformed token");
                None
            }
        }
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}
