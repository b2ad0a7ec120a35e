//! Segment identifiers.

use crate::error::LexError;
use std::fmt;
use std::str::FromStr;

/// Three-byte segment identifier (`MSH`, `PID`, `OBX`, ...).
///
/// The grammar is an uppercase ASCII letter followed by two bytes that are
/// each an uppercase letter or a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId([u8; 3]);

impl SegmentId {
    /// The message header segment identifier.
    pub const MSH: Self = Self(*b"MSH");

    /// Creates a segment identifier from three bytes.
    ///
    /// Returns `None` if the bytes do not match the identifier grammar.
    #[must_use]
    pub fn new(bytes: [u8; 3]) -> Option<Self> {
        if Self::is_valid(&bytes) {
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Returns true if the given bytes form a valid segment identifier.
    #[must_use]
    pub fn is_valid(bytes: &[u8]) -> bool {
        bytes.len() == 3
            && bytes[0].is_ascii_uppercase()
            && bytes[1..]
                .iter()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }

    /// Returns the identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // The constructor only admits uppercase ASCII letters and digits.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Returns true for the `MSH` message header identifier.
    #[must_use]
    pub fn is_msh(&self) -> bool {
        *self == Self::MSH
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentId {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| LexError::BadSegmentId {
                found: s.to_string(),
            })?;
        Self::new(bytes).ok_or_else(|| LexError::BadSegmentId {
            found: s.to_string(),
        })
    }
}

impl TryFrom<&[u8]> for SegmentId {
    type Error = LexError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let id: [u8; 3] = bytes.try_into().map_err(|_| LexError::BadSegmentId {
            found: String::from_utf8_lossy(bytes).into_owned(),
        })?;
        Self::new(id).ok_or_else(|| LexError::BadSegmentId {
            found: String::from_utf8_lossy(bytes).into_owned(),
        })
    }
}

impl PartialEq<&str> for SegmentId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
