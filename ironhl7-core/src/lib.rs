//! # IronHL7 Core
//!
//! Core types and codec machinery for HL7 v2.x delimiter-based messages.
//!
//! This crate provides:
//! - Separator set and escape-sequence handling for the four-level
//!   delimiter hierarchy (field / repetition / component / subcomponent)
//! - Typed primitive values and the recursive field representation
//! - Field codec: decode/encode of a single field's nested structure
//! - Incremental byte-level lexer with a resumable `read` interface
//! - Reader and writer pairing tokens with sequence numbering, the `MSH`
//!   header special case and trailing-empties elision
//! - Error types for lexing, value coding and message reading

pub mod codec;
pub mod error;
pub mod escape;
pub mod field;
pub mod lexer;
pub mod reader;
pub mod segment;
pub mod separators;
pub mod value;
pub mod writer;

pub use error::{CodecError, LexError, ReadError};
pub use field::{Component, Field, Repetition, Scalar};
pub use lexer::{Lexer, Scan, SeparatorKind, Token, WireFormat};
pub use reader::{ReadEvent, Reader, ReaderOptions, Step};
pub use segment::SegmentId;
pub use separators::{DelimiterKind, Separators};
pub use value::{Value, ValueKind};
pub use writer::{Writer, WriterOptions};
