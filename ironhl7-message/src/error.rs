//! Error types for message writing.

use ironhl7_core::{CodecError, SegmentId};
use thiserror::Error;

/// Error type for turning a message back into its wire form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WriteError {
    /// No segment spec is registered for a segment of the message.
    #[error("no segment definition for {id}")]
    UnknownSegmentId {
        /// The unrecognized identifier.
        id: SegmentId,
    },

    /// A stored value does not match its declared kind.
    #[error("field {sequence} of {segment}: {source}")]
    BadField {
        /// Segment being written.
        segment: SegmentId,
        /// 1-based field sequence number.
        sequence: u16,
        /// The underlying codec failure.
        source: CodecError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironhl7_core::{Value, ValueKind};

    #[test]
    fn test_display_carries_context() {
        let err = WriteError::BadField {
            segment: "AUT".parse().unwrap(),
            sequence: 8,
            source: CodecError::KindMismatch {
                value: Value::from("x"),
                kind: ValueKind::Integer,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("AUT"));
        assert!(msg.contains('8'));
    }
}
