//! MLLP framing codec for byte streams.
//!
//! Decodes 0x0B ... 0x1C 0x0D envelopes out of buffered stream data and
//! encodes payloads into them, for use with `tokio_util` framed transports.

use crate::error::TransportError;
use crate::mllp::{CARRIAGE_RETURN, END_BLOCK, START_BLOCK};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// MLLP framing codec with a maximum frame size.
pub struct MllpCodec {
    max_frame_size: usize,
}

impl MllpCodec {
    /// Creates a new codec with the specified maximum frame size.
    #[must_use]
    pub fn new(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }

    /// Returns the maximum frame size.
    #[must_use]
    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }
}

impl Default for MllpCodec {
    fn default() -> Self {
        Self::new(1024 * 1024)
    }
}

impl Decoder for MllpCodec {
    type Item = BytesMut;
    type Error = TransportError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        if src[0] != START_BLOCK {
            tracing::warn!("stream out of sync: expected start block, got {:#04x}", src[0]);
            return Err(TransportError::BadFraming);
        }

        let trailer = src
            .windows(2)
            .position(|pair| pair == [END_BLOCK, CARRIAGE_RETURN]);
        let Some(end) = trailer else {
            if src.len() > self.max_frame_size {
                return Err(TransportError::frame_too_large(
                    src.len(),
                    self.max_frame_size,
                ));
            }
            return Ok(None);
        };

        if end - 1 > self.max_frame_size {
            return Err(TransportError::frame_too_large(
                end - 1,
                self.max_frame_size,
            ));
        }

        src.advance(1);
        let payload = src.split_to(end - 1);
        src.advance(2);
        tracing::trace!(bytes = payload.len(), "decoded MLLP frame");
        Ok(Some(payload))
    }
}

impl Encoder<&[u8]> for MllpCodec {
    type Error = TransportError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<(), Self::Error> {
        if item.len() > self.max_frame_size {
            return Err(TransportError::frame_too_large(
                item.len(),
                self.max_frame_size,
            ));
        }
        dst.reserve(item.len() + 3);
        dst.put_u8(START_BLOCK);
        dst.put_slice(item);
        dst.put_u8(END_BLOCK);
        dst.put_u8(CARRIAGE_RETURN);
        Ok(())
    }
}

impl Encoder<BytesMut> for MllpCodec {
    type Error = TransportError;

    fn encode(&mut self, item: BytesMut, dst: &mut BytesMut) -> Result<(), Self::Error> {
        <Self as Encoder<&[u8]>>::encode(self, &item, dst)
    }
}

impl Encoder<Vec<u8>> for MllpCodec {
    type Error = TransportError;

    fn encode(&mut self, item: Vec<u8>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        <Self as Encoder<&[u8]>>::encode(self, &item, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let mut codec = MllpCodec::new(1024);
        let mut buf = BytesMut::new();

        let data = b"MSH|^~\\&|APP\r";
        codec.encode(data.as_slice(), &mut buf).unwrap();
        assert_eq!(buf.len(), data.len() + 3);

        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&decoded[..], data);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_partial_frame() {
        let mut codec = MllpCodec::new(1024);
        let mut buf = BytesMut::new();

        buf.put_u8(START_BLOCK);
        buf.put_slice(b"MSA|AA");
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.put_u8(END_BLOCK);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.put_u8(CARRIAGE_RETURN);
        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&decoded[..], b"MSA|AA");
    }

    #[test]
    fn test_out_of_sync_stream() {
        let mut codec = MllpCodec::default();
        let mut buf = BytesMut::from(&b"garbage"[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(TransportError::BadFraming)
        ));
    }

    #[test]
    fn test_frame_too_large() {
        let mut codec = MllpCodec::new(4);
        let mut buf = BytesMut::new();
        codec
            .encode(b"12345".as_slice(), &mut buf)
            .expect_err("oversized frame must not encode");

        let mut incoming = BytesMut::new();
        incoming.put_u8(START_BLOCK);
        incoming.put_slice(&[b'x'; 10]);
        assert!(matches!(
            codec.decode(&mut incoming),
            Err(TransportError::FrameTooLarge { .. })
        ));
    }

    #[test]
    fn test_multiple_frames() {
        let mut codec = MllpCodec::new(1024);
        let mut buf = BytesMut::new();
        codec.encode(b"one".as_slice(), &mut buf).unwrap();
        codec.encode(b"two".as_slice(), &mut buf).unwrap();

        assert_eq!(&codec.decode(&mut buf).unwrap().unwrap()[..], b"one");
        assert_eq!(&codec.decode(&mut buf).unwrap().unwrap()[..], b"two");
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_empty_frame() {
        let mut codec = MllpCodec::new(1024);
        let mut buf = BytesMut::new();
        codec.encode(b"".as_slice(), &mut buf).unwrap();
        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert!(decoded.is_empty());
    }

    #[tokio::test]
    async fn test_framed_stream_round_trip() {
        use futures::{SinkExt, StreamExt};
        use tokio_util::codec::{FramedRead, FramedWrite};

        let (client, server) = tokio::io::duplex(256);
        let mut sink = FramedWrite::new(client, MllpCodec::default());
        let mut stream = FramedRead::new(server, MllpCodec::default());

        sink.send(b"MSA|AA|1".as_slice()).await.unwrap();
        sink.send(b"MSA|AA|2".as_slice()).await.unwrap();

        assert_eq!(&stream.next().await.unwrap().unwrap()[..], b"MSA|AA|1");
        assert_eq!(&stream.next().await.unwrap().unwrap()[..], b"MSA|AA|2");
    }
}
