//! Schema-driven writing of whole messages.

use crate::error::WriteError;
use crate::message::Message;
use bytes::Bytes;
use ironhl7_core::{Field, Writer, WriterOptions};
use ironhl7_schema::{bridge, registry};

/// Writes a message to its wire form.
///
/// Every sequence from 1 to the highest the segment spec addresses is
/// emitted; with trimming on, the writer strips the trailing empties
/// again, so only interior gaps survive.
///
/// # Errors
/// Returns a [`WriteError`] when a segment has no registered spec or a
/// stored value does not match its declared kind.
pub fn write(message: &Message, options: WriterOptions) -> Result<Bytes, WriteError> {
    let mut writer = Writer::new(options);
    writer.start_message();
    for segment in message.segments() {
        let id = segment.id();
        let spec =
            registry::segment_spec(id).ok_or(WriteError::UnknownSegmentId { id })?;
        writer.start_segment(id);
        for sequence in 1..=spec.max_sequence() {
            let field = match spec.sequence(sequence) {
                Some(seq_spec) => bridge::build_field(|name| segment.get(name), seq_spec)
                    .map_err(|source| WriteError::BadField {
                        segment: id,
                        sequence,
                        source,
                    })?,
                None => Field::empty(),
            };
            writer.put_field(&field);
        }
        writer.end_segment();
    }
    Ok(writer.end_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Segment;
    use crate::read::{read, ReadOutcome};
    use chrono::NaiveDate;
    use ironhl7_core::{ReaderOptions, Value, WireFormat};

    const WIRE: &[u8] = b"MSH|^~\\&|CLIENTHL7|CLI01020304|SERVHL7|PREPAGA^112233^IIN|20120201101155||ZQA^Z02^ZQA_Z02|00XX20120201101155|P|2.4|||ER|SU|ARG\rPID|1||504599^^^223344&&IIN||APELLIDO^NOMBRE\rPR1|1||420101^CONSULTA EN CONSULTORIO^NA\rOBX|1|ST|COPAGO||10.50\rAUT|PLAN123^PLAN|112233^PREPAGA||20120201|20121231|5699||1|1\r";

    fn read_complete(input: &[u8]) -> Message {
        match read(input, ReaderOptions::default()).expect("read failure") {
            ReadOutcome::Complete(message) => message,
            ReadOutcome::Incomplete(_) => panic!("message should be complete"),
        }
    }

    #[test]
    fn test_wire_round_trip() {
        let message = read_complete(WIRE);
        let written = write(&message, WriterOptions::default()).unwrap();
        assert_eq!(&written[..], WIRE);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let message = read_complete(WIRE);
        let written = write(&message, WriterOptions::default()).unwrap();
        let reread = read_complete(&written);
        assert_eq!(reread, message);
    }

    #[test]
    fn test_write_synthesized_message() {
        let msh = Segment::new("MSH".parse().unwrap())
            .with("sending_application", "APP")
            .with("message_code", "ADT")
            .with("trigger_event", "A04")
            .with("processing_id", "P")
            .with("version", "2.4");
        let evn = Segment::new("EVN".parse().unwrap())
            .with("event_type_code", "A04")
            .with(
                "recorded_datetime",
                NaiveDate::from_ymd_opt(2012, 8, 23)
                    .unwrap()
                    .and_hms_opt(10, 32, 0)
                    .unwrap(),
            );
        let message = Message::from_segments(vec![msh, evn]);
        let written = write(&message, WriterOptions::default()).unwrap();
        assert_eq!(
            &written[..],
            &b"MSH|^~\\&|APP||||||ADT^A04||P|2.4\rEVN|A04|201208231032\r"[..]
        );
    }

    #[test]
    fn test_write_text_dialect() {
        let message = Message::from_segments(vec![Segment::new("DSC".parse().unwrap())
            .with("continuation_pointer", "NEXT")]);
        let options = WriterOptions {
            format: WireFormat::Text,
            ..WriterOptions::default()
        };
        let written = write(&message, options).unwrap();
        assert_eq!(&written[..], b"DSC|NEXT\n");
    }

    #[test]
    fn test_write_null_field() {
        let message = Message::from_segments(vec![Segment::new("PID".parse().unwrap())
            .with("set_id", Value::Null)]);
        let written = write(&message, WriterOptions::default()).unwrap();
        assert_eq!(&written[..], b"PID|\"\"\r");
    }

    #[test]
    fn test_write_unknown_segment() {
        let message =
            Message::from_segments(vec![Segment::new("ZZZ".parse().unwrap())]);
        let err = write(&message, WriterOptions::default()).unwrap_err();
        assert!(matches!(err, WriteError::UnknownSegmentId { .. }));
    }

    #[test]
    fn test_write_kind_mismatch() {
        let message = Message::from_segments(vec![Segment::new("PID".parse().unwrap())
            .with("set_id", "not a number")]);
        let err = write(&message, WriterOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WriteError::BadField {
                sequence: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_no_trim_preserves_tail() {
        let message = Message::from_segments(vec![Segment::new("QAK".parse().unwrap())
            .with("query_tag", "TAG01")]);
        let trimmed = write(&message, WriterOptions::default()).unwrap();
        assert_eq!(&trimmed[..], b"QAK|TAG01\r");

        let options = WriterOptions {
            trim: false,
            ..WriterOptions::default()
        };
        let untrimmed = write(&message, options).unwrap();
        assert_eq!(&untrimmed[..], b"QAK|TAG01|\r");
    }
}
