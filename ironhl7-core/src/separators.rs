//! Delimiter set for the four-level HL7 value hierarchy.

use crate::error::LexError;

/// The delimiter levels inside a segment, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterKind {
    /// Separates fields within a segment.
    Field,
    /// Separates repetitions within a field.
    Repetition,
    /// Separates components within a repetition.
    Component,
    /// Separates subcomponents within a component.
    Subcomponent,
}

/// The four delimiter bytes of a message plus its escape byte.
///
/// A message declares its own separators in the five bytes following `MSH`;
/// the defaults (`|`, `^`, `&`, `~`, `\`) are only used when synthesizing
/// new messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Field separator byte.
    pub field: u8,
    /// Component separator byte.
    pub component: u8,
    /// Subcomponent separator byte.
    pub subcomponent: u8,
    /// Repetition separator byte.
    pub repetition: u8,
    /// Escape byte, independent of the four delimiters.
    pub escape: u8,
}

impl Separators {
    /// The standard HL7 delimiter set: `|^&~\`.
    pub const DEFAULT: Self = Self::new(b'|', b'^', b'&', b'~', b'\\');

    /// Creates a separator set from explicit bytes.
    #[must_use]
    pub const fn new(field: u8, component: u8, subcomponent: u8, repetition: u8, escape: u8) -> Self {
        Self {
            field,
            component,
            subcomponent,
            repetition,
            escape,
        }
    }

    /// Classifies a byte against the four delimiters.
    #[must_use]
    pub fn kind_of(&self, byte: u8) -> Option<DelimiterKind> {
        if byte == self.field {
            Some(DelimiterKind::Field)
        } else if byte == self.repetition {
            Some(DelimiterKind::Repetition)
        } else if byte == self.component {
            Some(DelimiterKind::Component)
        } else if byte == self.subcomponent {
            Some(DelimiterKind::Subcomponent)
        } else {
            None
        }
    }

    /// Returns the byte for a delimiter kind.
    #[must_use]
    pub const fn byte_of(&self, kind: DelimiterKind) -> u8 {
        match kind {
            DelimiterKind::Field => self.field,
            DelimiterKind::Repetition => self.repetition,
            DelimiterKind::Component => self.component,
            DelimiterKind::Subcomponent => self.subcomponent,
        }
    }

    /// Returns true if the byte is one of the four delimiters.
    #[must_use]
    pub fn is_delimiter(&self, byte: u8) -> bool {
        self.kind_of(byte).is_some()
    }

    /// Returns true if a byte may serve as a delimiter or escape.
    ///
    /// HL7 profiles differ here; this keeps the permissive rule of printable
    /// non-alphanumeric ASCII.
    #[must_use]
    pub fn is_candidate(byte: u8) -> bool {
        (0x20..=0x7E).contains(&byte) && !byte.is_ascii_alphanumeric()
    }

    /// Adopts a separator set from the five bytes following `MSH`.
    ///
    /// The wire order is field separator, then the four encoding characters:
    /// component, repetition, escape, subcomponent.
    ///
    /// # Errors
    /// Returns [`LexError::BadDelimiters`] if any byte is not a valid
    /// delimiter candidate.
    pub fn from_msh_header(bytes: &[u8; 5]) -> Result<Self, LexError> {
        if !bytes.iter().copied().all(Self::is_candidate) {
            return Err(LexError::BadDelimiters {
                found: String::from_utf8_lossy(bytes).into_owned(),
            });
        }
        Ok(Self::new(bytes[0], bytes[1], bytes[4], bytes[2], bytes[3]))
    }

    /// Returns the five header bytes in wire order.
    #[must_use]
    pub const fn msh_header(&self) -> [u8; 5] {
        [
            self.field,
            self.component,
            self.repetition,
            self.escape,
            self.subcomponent,
        ]
    }

    /// Returns the four-byte encoding characters field (`MSH.2`).
    #[must_use]
    pub const fn encoding_characters(&self) -> [u8; 4] {
        [self.component, self.repetition, self.escape, self.subcomponent]
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let seps = Separators::default();
        assert_eq!(seps.field, b'|');
        assert_eq!(seps.component, b'^');
        assert_eq!(seps.subcomponent, b'&');
        assert_eq!(seps.repetition, b'~');
        assert_eq!(seps.escape, b'\\');
    }

    #[test]
    fn test_kind_of() {
        let seps = Separators::default();
        assert_eq!(seps.kind_of(b'|'), Some(DelimiterKind::Field));
        assert_eq!(seps.kind_of(b'~'), Some(DelimiterKind::Repetition));
        assert_eq!(seps.kind_of(b'^'), Some(DelimiterKind::Component));
        assert_eq!(seps.kind_of(b'&'), Some(DelimiterKind::Subcomponent));
        assert_eq!(seps.kind_of(b'\\'), None);
        assert_eq!(seps.kind_of(b'A'), None);
    }

    #[test]
    fn test_byte_of_round_trip() {
        let seps = Separators::default();
        for kind in [
            DelimiterKind::Field,
            DelimiterKind::Repetition,
            DelimiterKind::Component,
            DelimiterKind::Subcomponent,
        ] {
            assert_eq!(seps.kind_of(seps.byte_of(kind)), Some(kind));
        }
    }

    #[test]
    fn test_from_msh_header() {
        let seps = Separators::from_msh_header(b"|^~\\&").unwrap();
        assert_eq!(seps, Separators::default());

        let custom = Separators::from_msh_header(b"#!*%@").unwrap();
        assert_eq!(custom.field, b'#');
        assert_eq!(custom.component, b'!');
        assert_eq!(custom.repetition, b'*');
        assert_eq!(custom.escape, b'%');
        assert_eq!(custom.subcomponent, b'@');
    }

    #[test]
    fn test_from_msh_header_rejects_alphanumeric() {
        assert!(Separators::from_msh_header(b"|^~A&").is_err());
        assert!(Separators::from_msh_header(b"1^~\\&").is_err());
        assert!(Separators::from_msh_header(b"|^~\\\x7f").is_err());
    }

    #[test]
    fn test_header_round_trip() {
        let seps = Separators::default();
        assert_eq!(&seps.msh_header(), b"|^~\\&");
        assert_eq!(Separators::from_msh_header(&seps.msh_header()).unwrap(), seps);
    }

    #[test]
    fn test_encoding_characters() {
        assert_eq!(&Separators::default().encoding_characters(), b"^~\\&");
    }
}
