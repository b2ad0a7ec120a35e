//! # IronHL7 Transport
//!
//! MLLP (Minimal Lower Layer Protocol) framing for HL7 messages.
//!
//! This crate provides:
//! - [`mllp`] - pure envelope functions over byte slices
//! - [`codec`] - a `tokio_util` codec for framing messages over streams
//!
//! Everything above the envelope (sockets, TLS, pooling) belongs to the
//! application.

pub mod codec;
pub mod error;
pub mod mllp;

pub use codec::MllpCodec;
pub use error::TransportError;
pub use mllp::{from_mllp, to_mllp, Deframed};
