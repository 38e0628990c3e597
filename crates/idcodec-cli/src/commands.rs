//! `encode` and `decode` command bodies.

use idcodec::{Codec, ProjectId};
use tracing::{info, warn};

use crate::output::{DecodeOutput, EncodeOutput, ErrorOutput};

/// Issue a token for `user_id` / `project_id`.
pub fn encode(codec: &Codec, user_id: &str, project_id: ProjectId) -> Result<EncodeOutput, ErrorOutput> {
    match codec.encode(user_id, project_id) {
        Ok(token) => {
            info!(token_len = token.len(), "token issued");
            Ok(EncodeOutput { token })
        }
        Err(e) => {
            warn!(code = e.code(), error = %e, "encode failed");
            Err(ErrorOutput::from(&e))
        }
    }
}

/// Recover the identifier pair carried by `token`.
pub fn decode(codec: &Codec, token: &str) -> Result<DecodeOutput, ErrorOutput> {
    match codec.decode(token) {
        Ok(pair) => {
            info!("token decoded");
            Ok(pair.into())
        }
        Err(e) => {
            warn!(code = e.code(), token_len = token.len(), "decode failed");
            Err(ErrorOutput::from(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idcodec::crypto::KEY_LEN;

    fn codec() -> Codec {
        Codec::with_key(&[0x17; KEY_LEN]).unwrap()
    }

    #[test]
    fn encode_then_decode() {
        let codec = codec();
        let issued = encode(&codec, "alice@example.com", 1001).unwrap();
        let out = decode(&codec, &issued.token).unwrap();
        assert_eq!(out.user_id, "alice@example.com");
        assert_eq!(out.project_id, 1001);
    }

    #[test]
    fn encode_empty_user_reports_invalid_input() {
        let err = encode(&codec(), "", 42).unwrap_err();
        assert_eq!(err.code, "invalid_input");
    }

    #[test]
    fn decode_garbage_reports_malformed() {
        let err = decode(&codec(), "!!!").unwrap_err();
        assert_eq!(err.code, "malformed_token");
    }

    #[test]
    fn decode_foreign_token_reports_encryption_failure() {
        let token = encode(&codec(), "bob", 5).unwrap().token;
        let other = Codec::with_key(&[0x71; KEY_LEN]).unwrap();
        let err = decode(&other, &token).unwrap_err();
        assert_eq!(err.code, "encryption_failure");
    }
}
