//! JSON documents printed on stdout by each command.

use idcodec::{CodecError, IdPair, ProjectId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// encode
// ---------------------------------------------------------------------------

/// Output of `idcodec encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOutput {
    /// Base-36 token, safe to embed in a URL path segment.
    pub token: String,
}

// ---------------------------------------------------------------------------
// decode
// ---------------------------------------------------------------------------

/// Output of `idcodec decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeOutput {
    pub user_id: String,
    pub project_id: ProjectId,
}

impl From<IdPair> for DecodeOutput {
    fn from(pair: IdPair) -> Self {
        Self {
            user_id: pair.user_id,
            project_id: pair.project_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Error output
// ---------------------------------------------------------------------------

/// Printed instead of the command output when a command fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Short machine-readable error code (e.g. `"malformed_token"`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ErrorOutput {
    /// Construct an [`ErrorOutput`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&CodecError> for ErrorOutput {
    fn from(e: &CodecError) -> Self {
        Self::new(e.code(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_output_from_pair() {
        let out = DecodeOutput::from(IdPair {
            user_id: "alice@example.com".into(),
            project_id: 1001,
        });
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["user_id"], "alice@example.com");
        assert_eq!(json["project_id"], 1001);
    }

    #[test]
    fn error_output_from_codec_error() {
        let e = CodecError::MalformedToken("empty token".into());
        let out = ErrorOutput::from(&e);
        assert_eq!(out.code, "malformed_token");
        assert!(out.message.contains("empty token"));
    }

    #[test]
    fn encode_output_serde() {
        let json = serde_json::to_string(&EncodeOutput { token: "e7".into() }).unwrap();
        assert_eq!(json, r#"{"token":"e7"}"#);
    }
}
