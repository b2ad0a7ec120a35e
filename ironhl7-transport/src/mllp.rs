//! Pure MLLP envelope functions.
//!
//! The envelope is a 0x0B start block before the payload and the two-byte
//! trailer 0x1C 0x0D after it.

use crate::error::TransportError;

/// MLLP start-block byte (vertical tab).
pub const START_BLOCK: u8 = 0x0B;
/// MLLP end-block byte (file separator).
pub const END_BLOCK: u8 = 0x1C;
/// Trailing carriage return of the envelope.
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// Outcome of [`from_mllp`] on well-prefixed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deframed<'a> {
    /// The interior of a whole envelope.
    Frame(&'a [u8]),
    /// The envelope has started but its trailer has not arrived.
    Incomplete,
}

/// Wraps a payload in the MLLP envelope.
#[must_use]
pub fn to_mllp(payload: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(payload.len() + 3);
    framed.push(START_BLOCK);
    framed.extend_from_slice(payload);
    framed.push(END_BLOCK);
    framed.push(CARRIAGE_RETURN);
    framed
}

/// Strips the MLLP envelope from a buffer.
///
/// Returns [`Deframed::Incomplete`] for input that starts an envelope but
/// does not yet close it.
///
/// # Errors
/// Returns [`TransportError::BadFraming`] when the input does not start
/// with the start-block byte.
pub fn from_mllp(input: &[u8]) -> Result<Deframed<'_>, TransportError> {
    if input.first() != Some(&START_BLOCK) {
        return Err(TransportError::BadFraming);
    }
    if input.len() >= 3 && input[input.len() - 2..] == [END_BLOCK, CARRIAGE_RETURN] {
        Ok(Deframed::Frame(&input[1..input.len() - 2]))
    } else {
        Ok(Deframed::Incomplete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        assert_eq!(to_mllp(b"MSA|AA"), b"\x0bMSA|AA\x1c\x0d".to_vec());
        assert_eq!(to_mllp(b""), b"\x0b\x1c\x0d".to_vec());
    }

    #[test]
    fn test_involution() {
        for payload in [&b""[..], b"x", b"MSH|^~\\&|APP\r"] {
            let framed = to_mllp(payload);
            assert_eq!(from_mllp(&framed).unwrap(), Deframed::Frame(payload));
        }
    }

    #[test]
    fn test_bad_framing() {
        assert!(matches!(
            from_mllp(b"MSA|AA\x1c\x0d"),
            Err(TransportError::BadFraming)
        ));
        assert!(matches!(from_mllp(b""), Err(TransportError::BadFraming)));
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(from_mllp(b"\x0b").unwrap(), Deframed::Incomplete);
        assert_eq!(from_mllp(b"\x0bMSA|AA").unwrap(), Deframed::Incomplete);
        assert_eq!(from_mllp(b"\x0bMSA|AA\x1c").unwrap(), Deframed::Incomplete);
    }

    #[test]
    fn test_trailer_needs_start_block() {
        // A lone trailer is not a degenerate empty frame.
        assert_eq!(from_mllp(b"\x0b\x1c").unwrap(), Deframed::Incomplete);
    }
}
