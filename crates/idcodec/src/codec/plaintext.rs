//! Layout of the buffer handed to the encryption provider.
//!
//! ```text
//! hex16(project_id) || utf8(user_id)
//! ```
//!
//! `hex16` is the 64-bit two's-complement pattern as exactly
//! [`PROJECT_ID_DIGITS`] lowercase hex digits; the fixed width makes the split
//! unambiguous.

use super::ProjectId;
use crate::CodecError;

/// Number of hex digits for the project id (bits in a `u64` / bits per digit).
pub const PROJECT_ID_DIGITS: usize = (u64::BITS / 4) as usize;

/// Build the plaintext for an identifier pair.
pub fn build(user_id: &str, project_id: ProjectId) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PROJECT_ID_DIGITS + user_id.len());
    buf.extend_from_slice(format!("{:016x}", project_id as u64).as_bytes());
    buf.extend_from_slice(user_id.as_bytes());
    buf
}

/// Split a decrypted plaintext back into `(user_id, project_id)`.
///
/// # Errors
///
/// Returns [`CodecError::MalformedToken`] if the buffer is too short, the
/// project field is not hex, or the user field is empty or not UTF-8.
pub fn split(plaintext: &[u8]) -> Result<(String, ProjectId), CodecError> {
    if plaintext.len() <= PROJECT_ID_DIGITS {
        return Err(CodecError::MalformedToken(format!(
            "plaintext shorter than {} bytes",
            PROJECT_ID_DIGITS + 1
        )));
    }
    let (hex, user) = plaintext.split_at(PROJECT_ID_DIGITS);

    // u64::from_str_radix would also accept a leading '+'.
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return Err(CodecError::MalformedToken("project id is not hex".into()));
    }
    let hex = std::str::from_utf8(hex)
        .map_err(|_| CodecError::MalformedToken("project id is not hex".into()))?;
    let project_id = u64::from_str_radix(hex, 16)
        .map_err(|e| CodecError::MalformedToken(e.to_string()))? as ProjectId;

    let user_id = String::from_utf8(user.to_vec())
        .map_err(|_| CodecError::MalformedToken("user id is not utf-8".into()))?;

    Ok((user_id, project_id))
}
