//! # IronHL7 Message
//!
//! Message-level operations over typed segments.
//!
//! This crate provides:
//! - The [`Message`] and [`Segment`] runtime values
//! - Top-level [`read`] and [`write`] driving the reader, the spec
//!   registry and the segment IR bridge
//! - Positional segment access, paired-group scanning with gap tolerance,
//!   reduce-over-groups and purely functional edit primitives

pub mod error;
pub mod message;
pub mod read;
pub mod write;

pub use error::WriteError;
pub use message::{Message, Segment};
pub use read::{read, ReadContinuation, ReadOutcome};
pub use write::write;
