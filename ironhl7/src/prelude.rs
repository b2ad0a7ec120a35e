//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use ironhl7::prelude::*;
//! ```

// Core types
pub use ironhl7_core::escape::{escape, unescape};
pub use ironhl7_core::{
    CodecError, Component, DelimiterKind, Field, LexError, ReadError, Repetition, Scalar,
    SegmentId, Separators, Value, ValueKind, WireFormat,
};
pub use ironhl7_core::{ReaderOptions, WriterOptions};

// Schema types
pub use ironhl7_schema::{
    composite_spec, segment_spec, Coordinate, FieldSpec, SchemaError, SegmentSpec, SequenceSpec,
};

// Message types and operations
pub use ironhl7_message::{read, write, Message, ReadContinuation, ReadOutcome, Segment, WriteError};

// Transport
pub use ironhl7_transport::{from_mllp, to_mllp, Deframed, MllpCodec, TransportError};
