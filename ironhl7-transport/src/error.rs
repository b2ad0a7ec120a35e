//! Error types for transport operations.

use thiserror::Error;

/// Error type for MLLP framing operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The envelope does not start with the MLLP start-block byte.
    #[error("bad MLLP framing: input does not start with 0x0b")]
    BadFraming,

    /// Frame exceeds the configured maximum size.
    #[error("frame too large: {size} bytes exceeds maximum {max} bytes")]
    FrameTooLarge {
        /// Actual frame size.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    /// Creates a frame too large error.
    #[must_use]
    pub fn frame_too_large(size: usize, max: usize) -> Self {
        Self::FrameTooLarge { size, max }
    }
}
