//! Guard-byte padding and base-36 rendering of byte buffers.
//!
//! A byte buffer is turned into text by reading it as one big-endian unsigned
//! integer. Leading zero bytes would vanish in that conversion, so every
//! buffer is prefixed with [`GUARD_BYTE`] first and the prefix is checked and
//! stripped on the way back.

use num_bigint::BigUint;
use num_traits::Num;

use crate::CodecError;

/// Radix of the token text: `0-9a-z`.
pub const TOKEN_RADIX: u32 = 36;

/// Non-zero, high-bit-clear byte prepended before integer conversion.
pub const GUARD_BYTE: u8 = 0x01;

/// Prefix `bytes` with the guard byte and render them in base 36.
pub fn encode(bytes: &[u8]) -> String {
    let mut padded = Vec::with_capacity(bytes.len() + 1);
    padded.push(GUARD_BYTE);
    padded.extend_from_slice(bytes);
    BigUint::from_bytes_be(&padded).to_str_radix(TOKEN_RADIX)
}

/// Parse base-36 `text` and return the bytes that followed the guard byte.
///
/// # Errors
///
/// Returns [`CodecError::MalformedToken`] if `text` is empty, contains
/// anything but ASCII letters and digits, does not start with the guard byte,
/// or carries no payload after it.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    if text.is_empty() {
        return Err(CodecError::MalformedToken("empty token".into()));
    }
    // from_str_radix also tolerates '+' and '_', which never appear in a token.
    if !text.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(CodecError::MalformedToken("non base-36 character".into()));
    }
    let value = BigUint::from_str_radix(text, TOKEN_RADIX)
        .map_err(|e| CodecError::MalformedToken(e.to_string()))?;

    let mut bytes = value.to_bytes_be();
    match bytes.first() {
        Some(&GUARD_BYTE) if bytes.len() > 1 => {
            bytes.remove(0);
            Ok(bytes)
        }
        Some(&GUARD_BYTE) => Err(CodecError::MalformedToken("missing payload".into())),
        _ => Err(CodecError::MalformedToken("missing guard byte".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn guard_byte_keeps_leading_zeros() {
        let bytes = [0x00, 0x00, 0x7f, 0x80];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn high_bit_payload_survives() {
        let bytes = [0xff; 48];
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn known_rendering() {
        // 0x01ff == 511 == 14 * 36 + 7
        assert_eq!(encode(&[0xff]), "e7");
        assert_eq!(decode("e7").unwrap(), vec![0xff]);
    }

    #[test]
    fn output_is_lowercase_base36() {
        let text = encode(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x42]);
        assert!(text
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn uppercase_is_accepted() {
        let text = encode(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(
            decode(&text.to_ascii_uppercase()).unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
    }

    #[test_case(""; "empty")]
    #[test_case("!!!"; "punctuation")]
    #[test_case("+e7"; "leading plus")]
    #[test_case("e_7"; "underscore separator")]
    #[test_case("e7 "; "trailing space")]
    #[test_case("-e7"; "negative sign")]
    #[test_case("é7"; "non ascii letter")]
    fn rejects_bad_text(text: &str) {
        assert!(matches!(decode(text), Err(CodecError::MalformedToken(_))));
    }

    #[test_case("0"; "zero")]
    #[test_case("1"; "guard byte alone")]
    #[test_case("zz"; "wrong leading byte")]
    #[test_case("2s"; "two as leading byte")]
    fn rejects_missing_guard_or_payload(text: &str) {
        assert!(matches!(decode(text), Err(CodecError::MalformedToken(_))));
    }
}
