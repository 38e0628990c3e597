//! Error types returned by the token codec.

use thiserror::Error;

use crate::crypto::EncryptionError;

/// Top-level codec error type.
///
/// Only [`Codec::encode`](crate::Codec::encode) and
/// [`Codec::decode`](crate::Codec::decode) surface these; the soft accessors
/// fold every variant into `None` or the invalid project sentinel.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The caller violated a precondition, e.g. an empty user identifier.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The encryption provider could not encrypt or decrypt.
    #[error("encryption failure: {0}")]
    EncryptionFailure(#[from] EncryptionError),

    /// The token text or its decrypted payload does not have the expected shape.
    #[error("malformed token: {0}")]
    MalformedToken(String),
}

impl CodecError {
    /// Returns a short machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::InvalidInput(_) => "invalid_input",
            CodecError::EncryptionFailure(_) => "encryption_failure",
            CodecError::MalformedToken(_) => "malformed_token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(CodecError::InvalidInput("x".into()).code(), "invalid_input");
        assert_eq!(
            CodecError::EncryptionFailure(EncryptionError::AeadFailure).code(),
            "encryption_failure"
        );
        assert_eq!(CodecError::MalformedToken("x".into()).code(), "malformed_token");
    }

    #[test]
    fn display_includes_message() {
        let e = CodecError::InvalidInput("user id must not be empty".into());
        assert!(e.to_string().contains("user id must not be empty"));
    }

    #[test]
    fn encryption_error_converts() {
        let e: CodecError = EncryptionError::AeadFailure.into();
        assert!(matches!(e, CodecError::EncryptionFailure(_)));
        assert!(e.to_string().contains("aead operation failed"));
    }
}
