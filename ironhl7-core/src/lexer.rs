//! Incremental byte-level tokenization of the wire form.
//!
//! The lexer is a four-state machine that never consumes input it cannot
//! turn into a whole token: when more bytes are required mid-state it
//! returns [`Scan::Incomplete`] with the unconsumed suffix, and resuming
//! with that suffix concatenated to fresh bytes behaves exactly like lexing
//! the whole input at once.

use crate::error::LexError;
use crate::separators::Separators;
use std::collections::VecDeque;

/// Segment terminator dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireFormat {
    /// Carriage-return terminated segments (the HL7 wire form).
    #[default]
    Wire,
    /// Line-feed terminated segments, for messages kept in text files.
    Text,
}

impl WireFormat {
    /// Returns the segment terminator byte for this dialect.
    #[must_use]
    pub const fn terminator(self) -> u8 {
        match self {
            Self::Wire => 0x0D,
            Self::Text => 0x0A,
        }
    }
}

/// Separator kinds observable in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorKind {
    /// Field separator.
    Field,
    /// Repetition separator.
    Repetition,
    /// Component separator.
    Component,
    /// Subcomponent separator.
    Subcomponent,
    /// End of segment.
    Segment,
}

/// A lexed token.
///
/// `Literal` bytes are structural (segment identifiers and the two `MSH`
/// header fields) and must not be run through the field codec; `Value`
/// bytes are ordinary field payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Structural bytes, verbatim.
    Literal(Vec<u8>),
    /// Field payload bytes.
    Value(Vec<u8>),
    /// A separator.
    Separator(SeparatorKind),
}

/// Outcome of one [`Lexer::read`] step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan<'a> {
    /// A token and the unconsumed rest of the input.
    Token(Token, &'a [u8]),
    /// More bytes are required; the returned suffix was not consumed.
    Incomplete(&'a [u8]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    SegmentId,
    Delimiters,
    Separator,
    Characters,
}

/// Incremental lexer over the delimiter-based wire form.
#[derive(Debug, Clone)]
pub struct Lexer {
    state: State,
    separators: Separators,
    terminator: u8,
    pending: VecDeque<Token>,
}

impl Lexer {
    /// Creates a lexer with the given starting separators and dialect.
    ///
    /// The separators are replaced by the set discovered in the `MSH`
    /// header as soon as one is read.
    #[must_use]
    pub fn new(separators: Separators, format: WireFormat) -> Self {
        Self {
            state: State::SegmentId,
            separators,
            terminator: format.terminator(),
            pending: VecDeque::new(),
        }
    }

    /// Returns the active separator set.
    #[must_use]
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Returns true when the lexer sits between segments with nothing
    /// buffered, i.e. a point at which input may gracefully end.
    #[must_use]
    pub fn at_segment_boundary(&self) -> bool {
        self.state == State::SegmentId && self.pending.is_empty()
    }

    /// Reads the next token from `input`.
    ///
    /// Consumes exactly the bytes of the returned token; the rest is handed
    /// back for the next call. Returns [`Scan::Incomplete`] when `input`
    /// does not hold a whole token for the current state.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the input violates the wire grammar at
    /// the current state.
    pub fn read<'a>(&mut self, input: &'a [u8]) -> Result<Scan<'a>, LexError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Scan::Token(token, input));
        }
        match self.state {
            State::SegmentId => self.read_segment_id(input),
            State::Delimiters => self.read_delimiters(input),
            State::Separator => self.read_separator(input),
            State::Characters => self.read_characters(input),
        }
    }

    fn read_segment_id<'a>(&mut self, input: &'a [u8]) -> Result<Scan<'a>, LexError> {
        if input.len() < 3 {
            return Ok(Scan::Incomplete(input));
        }
        let (id, rest) = input.split_at(3);
        if id == b"MSH" {
            self.state = State::Delimiters;
            return Ok(Scan::Token(Token::Literal(id.to_vec()), rest));
        }
        if !crate::segment::SegmentId::is_valid(id) {
            return Err(LexError::BadSegmentId {
                found: String::from_utf8_lossy(id).into_owned(),
            });
        }
        self.state = State::Separator;
        Ok(Scan::Token(Token::Literal(id.to_vec()), rest))
    }

    fn read_delimiters<'a>(&mut self, input: &'a [u8]) -> Result<Scan<'a>, LexError> {
        if input.len() < 5 {
            return Ok(Scan::Incomplete(input));
        }
        let (header, rest) = input.split_at(5);
        let mut bytes = [0u8; 5];
        bytes.copy_from_slice(header);
        self.separators = Separators::from_msh_header(&bytes)?;
        // MSH.1 is emitted now; a synthetic field separator and MSH.2 are
        // buffered so callers observe the whole header as ordinary tokens.
        self.pending
            .push_back(Token::Separator(SeparatorKind::Field));
        self.pending
            .push_back(Token::Literal(self.separators.encoding_characters().to_vec()));
        self.state = State::Separator;
        Ok(Scan::Token(Token::Literal(vec![self.separators.field]), rest))
    }

    fn read_separator<'a>(&mut self, input: &'a [u8]) -> Result<Scan<'a>, LexError> {
        let Some((&byte, rest)) = input.split_first() else {
            return Ok(Scan::Incomplete(input));
        };
        if byte == self.separators.field {
            self.state = State::Characters;
            Ok(Scan::Token(Token::Separator(SeparatorKind::Field), rest))
        } else if byte == self.terminator {
            self.state = State::SegmentId;
            Ok(Scan::Token(Token::Separator(SeparatorKind::Segment), rest))
        } else {
            Err(LexError::BadSeparator { byte })
        }
    }

    fn read_characters<'a>(&mut self, input: &'a [u8]) -> Result<Scan<'a>, LexError> {
        for (i, &byte) in input.iter().enumerate() {
            if byte == self.separators.field || byte == self.terminator {
                self.state = State::Separator;
                return Ok(Scan::Token(Token::Value(input[..i].to_vec()), &input[i..]));
            }
            if !is_printable(byte) {
                return Err(LexError::BadField { byte });
            }
        }
        Ok(Scan::Incomplete(input))
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(Separators::DEFAULT, WireFormat::Wire)
    }
}

/// Permitted byte range inside values: printable ASCII and Latin-1.
#[must_use]
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte) || byte >= 0xA0
}
