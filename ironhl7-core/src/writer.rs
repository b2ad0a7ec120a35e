//! Emission of the delimiter-based wire form, the inverse of the reader.

use crate::codec;
use crate::field::Field;
use crate::lexer::WireFormat;
use crate::segment::SegmentId;
use crate::separators::Separators;
use bytes::{BufMut, Bytes, BytesMut};

/// Options controlling how a message is written.
#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    /// Segment terminator dialect of the output.
    pub format: WireFormat,
    /// Whether trailing empty positions are stripped before emission.
    pub trim: bool,
    /// Separator set used for the whole output.
    pub separators: Separators,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            format: WireFormat::Wire,
            trim: true,
            separators: Separators::DEFAULT,
        }
    }
}

/// Accumulating writer for the wire form.
///
/// `start_segment` with the `MSH` identifier enters a two-step mode in
/// which the next two [`Writer::put_field`] calls emit the literal field
/// separator and the literal encoding characters instead of running the
/// codec, matching how the header is lexed on input.
#[derive(Debug)]
pub struct Writer {
    options: WriterOptions,
    buf: BytesMut,
    msh_literals: u8,
    floor: usize,
}

impl Writer {
    /// Creates a writer from options.
    #[must_use]
    pub fn new(options: WriterOptions) -> Self {
        Self {
            options,
            buf: BytesMut::new(),
            msh_literals: 0,
            floor: 0,
        }
    }

    /// Returns the writer's options.
    #[must_use]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Resets the accumulator for a new message.
    pub fn start_message(&mut self) {
        self.buf.clear();
        self.msh_literals = 0;
        self.floor = 0;
    }

    /// Begins a segment by writing its three-byte identifier.
    pub fn start_segment(&mut self, id: SegmentId) {
        self.buf.put_slice(id.as_bytes());
        self.floor = self.buf.len();
        self.msh_literals = if id.is_msh() { 2 } else { 0 };
    }

    /// Appends one field: a field separator followed by the encoded field.
    pub fn put_field(&mut self, field: &Field) {
        match self.msh_literals {
            2 => {
                self.buf.put_u8(self.options.separators.field);
                self.msh_literals = 1;
                // Header literals are never subject to trimming.
                self.floor = self.buf.len();
            }
            1 => {
                self.buf
                    .put_slice(&self.options.separators.encoding_characters());
                self.msh_literals = 0;
                self.floor = self.buf.len();
            }
            _ => {
                self.buf.put_u8(self.options.separators.field);
                self.buf.put_slice(&codec::encode_field(
                    field,
                    &self.options.separators,
                    self.options.trim,
                ));
            }
        }
    }

    /// Ends the current segment, stripping the trailing delimiter run when
    /// trimming is on, then writing the segment terminator.
    pub fn end_segment(&mut self) {
        if self.options.trim {
            while self.buf.len() > self.floor
                && self
                    .buf
                    .last()
                    .is_some_and(|&b| self.options.separators.is_delimiter(b))
            {
                self.buf.truncate(self.buf.len() - 1);
            }
        }
        self.buf.put_u8(self.options.format.terminator());
    }

    /// Drains the accumulated output.
    pub fn end_message(&mut self) -> Bytes {
        self.msh_literals = 0;
        self.floor = 0;
        self.buf.split().freeze()
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}
