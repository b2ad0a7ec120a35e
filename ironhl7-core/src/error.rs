//! Error types for lexing, value coding and message reading.

use crate::segment::SegmentId;
use crate::value::{Value, ValueKind};
use thiserror::Error;

/// Byte-level errors raised by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Three bytes did not match the segment identifier grammar.
    #[error("invalid segment id {found:?}")]
    BadSegmentId {
        /// The offending bytes, lossily decoded.
        found: String,
    },

    /// The five `MSH` header bytes were not valid delimiter candidates.
    #[error("invalid delimiter set {found:?} in MSH header")]
    BadDelimiters {
        /// The offending bytes, lossily decoded.
        found: String,
    },

    /// A byte after a field's end was neither a field separator nor the
    /// segment terminator.
    #[error("unexpected byte {byte:#04x} between fields")]
    BadSeparator {
        /// The offending byte.
        byte: u8,
    },

    /// A field's payload contained a non-printable byte.
    #[error("non-printable byte {byte:#04x} in field data")]
    BadField {
        /// The offending byte.
        byte: u8,
    },
}

/// Errors raised when converting between wire text and typed values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The wire text could not be decoded into its declared kind.
    #[error("cannot decode {value:?} as {kind}")]
    BadValue {
        /// The raw text that failed to decode.
        value: String,
        /// The declared kind.
        kind: ValueKind,
    },

    /// The supplied value does not match its declared kind on encode.
    #[error("value {value} does not match declared kind {kind}")]
    KindMismatch {
        /// The mismatched value.
        value: Value,
        /// The declared kind.
        kind: ValueKind,
    },
}

impl CodecError {
    /// Creates a decode failure for the given raw text.
    pub fn bad_value(value: impl Into<String>, kind: ValueKind) -> Self {
        Self::BadValue {
            value: value.into(),
            kind,
        }
    }
}

/// Errors surfaced by the reader, annotated with the position at which the
/// failure occurred.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadError {
    /// Three bytes did not match the segment identifier grammar.
    #[error("invalid segment id {found:?}")]
    BadSegmentId {
        /// The offending bytes, lossily decoded.
        found: String,
    },

    /// The five `MSH` header bytes were not valid delimiter candidates.
    #[error("invalid delimiter set {found:?} in MSH header")]
    BadDelimiters {
        /// The offending bytes, lossily decoded.
        found: String,
    },

    /// A byte after a field's end was neither a field separator nor the
    /// segment terminator.
    #[error("unexpected byte {byte:#04x} after field {sequence} of {segment}")]
    BadSeparator {
        /// The offending byte.
        byte: u8,
        /// Segment being read.
        segment: SegmentId,
        /// 1-based field sequence number.
        sequence: u16,
    },

    /// A field's payload contained a non-printable byte.
    #[error("non-printable byte {byte:#04x} in field {sequence} of {segment}")]
    BadField {
        /// The offending byte.
        byte: u8,
        /// Segment being read.
        segment: SegmentId,
        /// 1-based field sequence number.
        sequence: u16,
    },

    /// A value could not be decoded into its declared primitive kind.
    #[error("field {sequence} of {segment}: {source}")]
    BadValue {
        /// Segment being read.
        segment: SegmentId,
        /// 1-based field sequence number.
        sequence: u16,
        /// The underlying codec failure.
        source: CodecError,
    },

    /// No segment spec is registered for an identifier found on input.
    #[error("no segment definition for {id}")]
    UnknownSegmentId {
        /// The unrecognized identifier.
        id: SegmentId,
    },
}
