//! Error types for spec validation.

use crate::coordinate::Coordinate;
use thiserror::Error;

/// Error type for spec-table validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The segment identifier does not match the identifier grammar.
    #[error("invalid segment id {id:?}")]
    BadSegmentId {
        /// The offending identifier.
        id: String,
    },

    /// Sequence numbers are not strictly ascending.
    #[error("sequence {sequence} of segment {segment} is out of order")]
    SequenceOutOfOrder {
        /// Segment identifier.
        segment: &'static str,
        /// The offending sequence number.
        sequence: u16,
    },

    /// Two field specs of a segment share a coordinate at one sequence.
    #[error("duplicate coordinate {coordinate} at sequence {sequence} of segment {segment}")]
    DuplicateCoordinate {
        /// Segment identifier.
        segment: &'static str,
        /// Sequence number.
        sequence: u16,
        /// The duplicated coordinate.
        coordinate: Coordinate,
    },

    /// Two field specs of a segment share a name.
    #[error("duplicate field name {name:?} in segment {segment}")]
    DuplicateName {
        /// Segment identifier.
        segment: &'static str,
        /// The duplicated name.
        name: &'static str,
    },

    /// Field specs at one repetition mix scalar and nested coordinates.
    #[error("conflicting coordinate depths at sequence {sequence} of segment {segment}")]
    DepthConflict {
        /// Segment identifier.
        segment: &'static str,
        /// Sequence number.
        sequence: u16,
    },

    /// A coordinate does not fit the composite its sequence declares.
    #[error(
        "field {name:?} at {coordinate} of segment {segment} does not fit composite {composite}"
    )]
    CompositeMismatch {
        /// Segment identifier.
        segment: &'static str,
        /// The offending field name.
        name: &'static str,
        /// The offending coordinate.
        coordinate: Coordinate,
        /// Declared composite name.
        composite: &'static str,
    },

    /// Two components of a composite share a name.
    #[error("duplicate component name {name:?} in composite {composite}")]
    DuplicateComponent {
        /// Composite name.
        composite: &'static str,
        /// The duplicated name.
        name: &'static str,
    },

    /// A composite nests deeper than components-of-subcomponents.
    #[error("composite {composite} exceeds the maximum nesting depth")]
    TooDeep {
        /// Composite name.
        composite: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = SchemaError::DuplicateCoordinate {
            segment: "PID",
            sequence: 3,
            coordinate: Coordinate::Component(1, 1),
        };
        let msg = err.to_string();
        assert!(msg.contains("PID"));
        assert!(msg.contains("(1,1)"));
    }

    #[test]
    fn test_composite_mismatch_display() {
        let err = SchemaError::CompositeMismatch {
            segment: "AUT",
            name: "plan_id",
            coordinate: Coordinate::Component(1, 9),
            composite: "CE",
        };
        let msg = err.to_string();
        assert!(msg.contains("plan_id"));
        assert!(msg.contains("CE"));
    }
}
