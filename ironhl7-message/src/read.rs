//! Schema-driven reading of whole messages.

use crate::message::{Message, Segment};
use ironhl7_core::{ReadError, ReadEvent, Reader, ReaderOptions, Step};
use ironhl7_schema::{bridge, registry, SegmentSpec};

/// Outcome of a [`read`] call.
#[derive(Debug, Clone)]
pub enum ReadOutcome {
    /// The input held a whole message.
    Complete(Message),
    /// The input ended mid-message; feed more bytes to the continuation.
    Incomplete(ReadContinuation),
}

impl ReadOutcome {
    /// Unwraps the message of a complete outcome.
    #[must_use]
    pub fn into_message(self) -> Option<Message> {
        match self {
            Self::Complete(message) => Some(message),
            Self::Incomplete(_) => None,
        }
    }
}

/// Snapshot of an interrupted read: the reader state, the segments read so
/// far, the partially assembled segment and the unconsumed input suffix.
///
/// Resuming with additional bytes behaves exactly like reading the suffix
/// concatenated with those bytes from the original position.
#[derive(Debug, Clone)]
pub struct ReadContinuation {
    reader: Reader,
    message: Message,
    current: Option<(&'static SegmentSpec, Segment)>,
    carry: Vec<u8>,
}

impl ReadContinuation {
    /// Creates an empty continuation that has consumed no input yet.
    #[must_use]
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            reader: Reader::new(options),
            message: Message::new(),
            current: None,
            carry: Vec::new(),
        }
    }

    /// Continues reading with additional bytes.
    ///
    /// # Errors
    /// Returns a [`ReadError`] when the combined input is not a valid
    /// message prefix; partial results are discarded.
    pub fn resume(mut self, more: &[u8]) -> Result<ReadOutcome, ReadError> {
        let mut buf = std::mem::take(&mut self.carry);
        buf.extend_from_slice(more);
        let mut pos = 0;
        loop {
            match self.reader.read(&buf[pos..])? {
                Step::Event(event, rest) => {
                    pos = buf.len() - rest.len();
                    self.apply(event)?;
                }
                Step::Complete(_) => {
                    return Ok(ReadOutcome::Complete(self.message));
                }
                Step::Incomplete(rest) => {
                    self.carry = rest.to_vec();
                    return Ok(ReadOutcome::Incomplete(self));
                }
            }
        }
    }

    fn apply(&mut self, event: ReadEvent) -> Result<(), ReadError> {
        match event {
            ReadEvent::SegmentStart(id) => {
                let spec = registry::segment_spec(id)
                    .ok_or(ReadError::UnknownSegmentId { id })?;
                self.current = Some((spec, Segment::new(id)));
            }
            ReadEvent::Field { sequence, field } => {
                if let Some((spec, segment)) = &mut self.current {
                    if let Some(seq_spec) = spec.sequence(sequence) {
                        let updates =
                            bridge::parse_field(&field, seq_spec).map_err(|source| {
                                ReadError::BadValue {
                                    segment: segment.id(),
                                    sequence,
                                    source,
                                }
                            })?;
                        for (name, value) in updates {
                            segment.set(name, value);
                        }
                    }
                }
            }
            ReadEvent::SegmentEnd => {
                if let Some((_, segment)) = self.current.take() {
                    self.message.push(segment);
                }
            }
        }
        Ok(())
    }
}

/// Reads a message from its wire form.
///
/// Returns [`ReadOutcome::Complete`] when the input is exhausted at a
/// segment boundary and [`ReadOutcome::Incomplete`] with a resumable
/// continuation when it ends mid-segment.
///
/// # Errors
/// Returns a [`ReadError`] annotated with the failing segment and
/// sequence; nothing read before the failure is retained.
pub fn read(input: &[u8], options: ReaderOptions) -> Result<ReadOutcome, ReadError> {
    ReadContinuation::new(options).resume(input)
}
