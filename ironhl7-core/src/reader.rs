//! Stateful pairing of lexer tokens with segment and sequence tracking.

use crate::codec;
use crate::error::{LexError, ReadError};
use crate::field::{Field, Scalar};
use crate::lexer::{Lexer, Scan, SeparatorKind, Token, WireFormat};
use crate::segment::SegmentId;
use crate::separators::Separators;

/// Options controlling how a message is read.
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Segment terminator dialect of the input.
    pub format: WireFormat,
    /// Whether trailing empty positions are elided while decoding fields.
    pub trim: bool,
    /// Starting separators, replaced by the set the `MSH` header declares.
    pub separators: Separators,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            format: WireFormat::Wire,
            trim: true,
            separators: Separators::DEFAULT,
        }
    }
}

/// One structural event produced while reading a message.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadEvent {
    /// A new segment begins.
    SegmentStart(SegmentId),
    /// A field of the current segment, 1-based sequence number attached.
    Field {
        /// 1-based position of the field within its segment.
        sequence: u16,
        /// Decoded field content.
        field: Field,
    },
    /// The current segment ended.
    SegmentEnd,
}

/// Outcome of one [`Reader::read`] step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<'a> {
    /// An event and the unconsumed rest of the input.
    Event(ReadEvent, &'a [u8]),
    /// Input ended gracefully at a segment boundary.
    Complete(&'a [u8]),
    /// More bytes are required; the returned suffix was not consumed.
    Incomplete(&'a [u8]),
}

/// Incremental reader layering sequence numbering and field decoding on
/// top of the [`Lexer`].
///
/// The reader is a pure value: cloning it snapshots the read position, and
/// resuming a clone with the unconsumed suffix plus fresh bytes behaves
/// like reading the concatenation from scratch.
#[derive(Debug, Clone)]
pub struct Reader {
    lexer: Lexer,
    trim: bool,
    segment: Option<SegmentId>,
    sequence: u16,
}

impl Reader {
    /// Creates a reader from options.
    #[must_use]
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            lexer: Lexer::new(options.separators, options.format),
            trim: options.trim,
            segment: None,
            sequence: 0,
        }
    }

    /// Returns the active separator set (the discovered one once the `MSH`
    /// header has been read).
    #[must_use]
    pub fn separators(&self) -> &Separators {
        self.lexer.separators()
    }

    /// Returns the identifier of the segment currently being read.
    #[must_use]
    pub fn current_segment(&self) -> Option<SegmentId> {
        self.segment
    }

    /// Produces the next read event from `input`.
    ///
    /// Returns [`Step::Complete`] when the input is exhausted at a segment
    /// boundary and [`Step::Incomplete`] when it is exhausted anywhere
    /// else, in both cases handing back the unconsumed suffix.
    ///
    /// # Errors
    /// Returns a [`ReadError`] annotated with the current segment and
    /// sequence when the input violates the wire grammar.
    pub fn read<'a>(&mut self, input: &'a [u8]) -> Result<Step<'a>, ReadError> {
        let mut rest = input;
        loop {
            match self.lexer.read(rest).map_err(|e| self.annotate(e))? {
                Scan::Incomplete(unconsumed) => {
                    let graceful = unconsumed.is_empty()
                        && self.segment.is_none()
                        && self.lexer.at_segment_boundary();
                    return Ok(if graceful {
                        Step::Complete(unconsumed)
                    } else {
                        Step::Incomplete(unconsumed)
                    });
                }
                Scan::Token(token, r) => {
                    rest = r;
                    match token {
                        Token::Literal(bytes) if self.segment.is_none() => {
                            let id = SegmentId::try_from(bytes.as_slice())
                                .map_err(|e| self.annotate(e))?;
                            self.segment = Some(id);
                            self.sequence = 0;
                            return Ok(Step::Event(ReadEvent::SegmentStart(id), rest));
                        }
                        Token::Literal(bytes) => {
                            // MSH.1 arrives without a preceding separator.
                            if self.sequence == 0 {
                                self.sequence = 1;
                            }
                            let field =
                                Field::Value(Scalar::Text(codec::text_from_wire(&bytes)));
                            return Ok(Step::Event(
                                ReadEvent::Field {
                                    sequence: self.sequence,
                                    field,
                                },
                                rest,
                            ));
                        }
                        Token::Value(bytes) => {
                            let field =
                                codec::decode_field(&bytes, self.lexer.separators(), self.trim);
                            return Ok(Step::Event(
                                ReadEvent::Field {
                                    sequence: self.sequence,
                                    field,
                                },
                                rest,
                            ));
                        }
                        Token::Separator(SeparatorKind::Field) => {
                            self.sequence += 1;
                        }
                        Token::Separator(SeparatorKind::Segment) => {
                            self.segment = None;
                            self.sequence = 0;
                            return Ok(Step::Event(ReadEvent::SegmentEnd, rest));
                        }
                        Token::Separator(_) => {}
                    }
                }
            }
        }
    }

    fn annotate(&self, err: LexError) -> ReadError {
        match (err, self.segment) {
            (LexError::BadSegmentId { found }, _) => ReadError::BadSegmentId { found },
            (LexError::BadDelimiters { found }, _) => ReadError::BadDelimiters { found },
            (LexError::BadSeparator { byte }, Some(segment)) => ReadError::BadSeparator {
                byte,
                segment,
                sequence: self.sequence,
            },
            (LexError::BadField { byte }, Some(segment)) => ReadError::BadField {
                byte,
                segment,
                sequence: self.sequence,
            },
            // The lexer only raises separator and field errors inside a
            // segment; a missing id means the surrounding bytes were bad.
            (LexError::BadSeparator { byte }, None) | (LexError::BadField { byte }, None) => {
                ReadError::BadSegmentId {
                    found: format!("{byte:#04x}"),
                }
            }
        }
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new(ReaderOptions::default())
    }
}
