//! UTF-8 validation at the byte boundary. SIMD-accelerated with the `simd`
//! feature, scalar otherwise. Both report the same error position.

use crate::error::Error;

#[cfg(feature = "simd")]
#[inline]
pub fn validate_utf8(bytes: &[u8]) -> Result<&str, Error> {
    simdutf8::compat::from_utf8(bytes).map_err(|e| Error::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })
}

#[cfg(not(feature = "simd"))]
#[inline]
pub fn validate_utf8(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|e| Error::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        assert_eq!(validate_utf8(b"").unwrap(), "");
        assert_eq!(validate_utf8("héllo".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn reports_first_invalid_byte() {
        match validate_utf8(b"ab\xFFcd") {
            Err(Error::InvalidEncoding { valid_up_to }) => assert_eq!(valid_up_to, 2),
            other => panic!("unexpected: {other:?}"),
        }
        // truncated multi-byte sequence
        match validate_utf8(b"caf\xC3") {
            Err(Error::InvalidEncoding { valid_up_to }) => assert_eq!(valid_up_to, 3),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
