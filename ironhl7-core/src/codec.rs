//! Field codec: decode/encode of a single field's nested structure and
//! conversion between wire text and typed values.
//!
//! Decoding never fails at the structural level; all structural input is
//! some arrangement of delimiters and printable bytes. Typed conversion
//! ([`decode_value`] / [`encode_value`]) is where [`CodecError`] arises.

use crate::error::CodecError;
use crate::escape::{escape, unescape};
use crate::field::{Component, Field, Repetition, Scalar};
use crate::separators::Separators;
use crate::value::{Value, ValueKind};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// The two-byte wire marker for the explicit HL7 null.
pub const NULL_MARKER: &[u8] = b"\"\"";

/// Decodes a complete field, honoring repetitions.
///
/// With `trim` set, trailing empty positions are dropped at every level; a
/// field reduced to a single repetition is returned as that repetition
/// itself.
#[must_use]
pub fn decode_field(bytes: &[u8], seps: &Separators, trim: bool) -> Field {
    if bytes.is_empty() {
        return Field::empty();
    }
    if bytes == NULL_MARKER {
        return Field::null();
    }
    let mut parts = split_on(bytes, seps.repetition);
    if trim {
        trim_trailing(&mut parts);
    }
    match parts.len() {
        0 => Field::empty(),
        1 => decode_repetition(parts[0], seps, trim).into(),
        _ => Field::Repetitions(
            parts
                .iter()
                .map(|p| decode_repetition(p, seps, trim))
                .collect(),
        ),
    }
}

/// Decodes the single-repetition form of a field.
///
/// A repetition whose only component itself splits into subcomponents keeps
/// its component level, so the nesting depth remains observable.
#[must_use]
pub fn decode_repetition(bytes: &[u8], seps: &Separators, trim: bool) -> Repetition {
    let mut parts = split_on(bytes, seps.component);
    if trim {
        trim_trailing(&mut parts);
    }
    match parts.len() {
        0 => Repetition::Value(Scalar::empty()),
        1 => match decode_component(parts[0], seps, trim) {
            Component::Value(s) => Repetition::Value(s),
            nested @ Component::Subcomponents(_) => Repetition::Components(vec![nested]),
        },
        _ => Repetition::Components(
            parts
                .iter()
                .map(|p| decode_component(p, seps, trim))
                .collect(),
        ),
    }
}

/// Decodes one component, splitting on the subcomponent separator.
#[must_use]
pub fn decode_component(bytes: &[u8], seps: &Separators, trim: bool) -> Component {
    let mut parts = split_on(bytes, seps.subcomponent);
    if trim {
        trim_trailing(&mut parts);
    }
    match parts.len() {
        0 => Component::empty(),
        1 => Component::Value(decode_scalar(parts[0], seps)),
        _ => Component::Subcomponents(parts.iter().map(|p| decode_scalar(p, seps)).collect()),
    }
}

/// Decodes a leaf: the null marker, or unescaped text.
#[must_use]
pub fn decode_scalar(bytes: &[u8], seps: &Separators) -> Scalar {
    if bytes == NULL_MARKER {
        Scalar::Null
    } else {
        Scalar::Text(unescape(&text_from_wire(bytes), seps))
    }
}

/// Encodes a complete field, the dual of [`decode_field`].
#[must_use]
pub fn encode_field(field: &Field, seps: &Separators, trim: bool) -> Vec<u8> {
    match field {
        Field::Value(s) => encode_scalar(s, seps),
        Field::Components(comps) => encode_components(comps, seps, trim),
        Field::Repetitions(reps) => {
            let mut parts: Vec<Vec<u8>> = reps
                .iter()
                .map(|r| encode_repetition(r, seps, trim))
                .collect();
            if trim {
                trim_trailing_encoded(&mut parts);
            }
            join(&parts, seps.repetition)
        }
    }
}

/// Encodes one repetition.
#[must_use]
pub fn encode_repetition(rep: &Repetition, seps: &Separators, trim: bool) -> Vec<u8> {
    match rep {
        Repetition::Value(s) => encode_scalar(s, seps),
        Repetition::Components(comps) => encode_components(comps, seps, trim),
    }
}

/// Encodes one component.
#[must_use]
pub fn encode_component(comp: &Component, seps: &Separators, trim: bool) -> Vec<u8> {
    match comp {
        Component::Value(s) => encode_scalar(s, seps),
        Component::Subcomponents(subs) => {
            let mut parts: Vec<Vec<u8>> = subs.iter().map(|s| encode_scalar(s, seps)).collect();
            if trim {
                trim_trailing_encoded(&mut parts);
            }
            join(&parts, seps.subcomponent)
        }
    }
}

fn encode_components(comps: &[Component], seps: &Separators, trim: bool) -> Vec<u8> {
    let mut parts: Vec<Vec<u8>> = comps
        .iter()
        .map(|c| encode_component(c, seps, trim))
        .collect();
    if trim {
        trim_trailing_encoded(&mut parts);
    }
    join(&parts, seps.component)
}

/// Encodes a leaf: the null marker, or escaped text.
#[must_use]
pub fn encode_scalar(scalar: &Scalar, seps: &Separators) -> Vec<u8> {
    match scalar {
        Scalar::Null => NULL_MARKER.to_vec(),
        Scalar::Text(t) => text_to_wire(&escape(t, seps)),
    }
}

/// Decodes wire text into a typed value.
///
/// The empty string passes through unchanged for every kind so the schema
/// layer may substitute a typed default, and the null marker decodes to
/// null irrespective of the declared kind.
///
/// # Errors
/// Returns [`CodecError::BadValue`] when the text does not parse as the
/// declared kind.
pub fn decode_value(input: &str, kind: ValueKind) -> Result<Value, CodecError> {
    if input.is_empty() {
        return Ok(Value::Text(String::new()));
    }
    if input.as_bytes() == NULL_MARKER {
        return Ok(Value::Null);
    }
    match kind {
        ValueKind::String => Ok(Value::Text(input.to_string())),
        ValueKind::Integer => input
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| CodecError::bad_value(input, kind)),
        ValueKind::Float => parse_float(input)
            .map(Value::Float)
            .ok_or_else(|| CodecError::bad_value(input, kind)),
        ValueKind::Date => parse_date(input)
            .map(Value::Date)
            .ok_or_else(|| CodecError::bad_value(input, kind)),
        ValueKind::DateTime => parse_datetime(input)
            .map(Value::DateTime)
            .ok_or_else(|| CodecError::bad_value(input, kind)),
    }
}

/// Encodes a typed value as wire text.
///
/// Null becomes the null marker and the empty text value stays empty for
/// every kind. Dates emit exactly 8 digits; datetimes emit 12 digits when
/// seconds are zero and 14 otherwise.
///
/// # Errors
/// Returns [`CodecError::KindMismatch`] when the value does not belong to
/// the declared kind.
pub fn encode_value(value: &Value, kind: ValueKind) -> Result<String, CodecError> {
    match (value, kind) {
        (Value::Null, _) => Ok("\"\"".to_string()),
        (Value::Text(t), _) if t.is_empty() => Ok(String::new()),
        (Value::Text(t), ValueKind::String) => Ok(t.clone()),
        (Value::Integer(i), ValueKind::Integer) => Ok(i.to_string()),
        (Value::Float(f), ValueKind::Float) => Ok(f.to_string()),
        (Value::Date(d), ValueKind::Date) => Ok(d.format("%Y%m%d").to_string()),
        (Value::DateTime(dt), ValueKind::DateTime) => {
            if dt.second() == 0 {
                Ok(dt.format("%Y%m%d%H%M").to_string())
            } else {
                Ok(dt.format("%Y%m%d%H%M%S").to_string())
            }
        }
        _ => Err(CodecError::KindMismatch {
            value: value.clone(),
            kind,
        }),
    }
}

/// Maps wire bytes to a string, treating 0xA0-0xFF as Latin-1.
///
/// The mapping is 1:1 with the first Unicode block, so [`text_to_wire`]
/// restores the original bytes exactly.
#[must_use]
pub fn text_from_wire(bytes: &[u8]) -> String {
    if bytes.is_ascii() {
        // Already validated printable by the lexer.
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

/// Maps a string back to wire bytes, the inverse of [`text_from_wire`].
#[must_use]
pub fn text_to_wire(s: &str) -> Vec<u8> {
    if s.is_ascii() {
        s.as_bytes().to_vec()
    } else {
        let mut out = Vec::with_capacity(s.len());
        for c in s.chars() {
            let cp = c as u32;
            if cp <= 0xFF {
                out.push(cp as u8);
            } else {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
        out
    }
}

fn split_on(bytes: &[u8], sep: u8) -> Vec<&[u8]> {
    bytes.split(|&b| b == sep).collect()
}

fn trim_trailing(parts: &mut Vec<&[u8]>) {
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
}

fn trim_trailing_encoded(parts: &mut Vec<Vec<u8>>) {
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
}

fn join(parts: &[Vec<u8>], sep: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts.iter().map(Vec::len).sum::<usize>() + parts.len());
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.extend_from_slice(part);
    }
    out
}

fn parse_float(s: &str) -> Option<f64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    s.parse().ok()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = parse_date(s.get(0..8)?)?;
    match s.len() {
        8 => date.and_hms_opt(0, 0, 0),
        12 | 14 => {
            let hour: u32 = s[8..10].parse().ok()?;
            let minute: u32 = s[10..12].parse().ok()?;
            let second: u32 = if s.len() == 14 {
                s[12..14].parse().ok()?
            } else {
                0
            };
            date.and_hms_opt(hour, minute, second)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seps() -> Separators {
        Separators::default()
    }

    #[test]
    fn test_decode_empty_field() {
        assert_eq!(decode_field(b"", &seps(), true), Field::empty());
        assert_eq!(decode_field(b"", &seps(), false), Field::empty());
    }

    #[test]
    fn test_decode_null_field() {
        assert_eq!(decode_field(b"\"\"", &seps(), true), Field::null());
        assert_eq!(decode_field(b"\"\"", &seps(), false), Field::null());
    }

    #[test]
    fn test_decode_scalar_field() {
        assert_eq!(decode_field(b"504599", &seps(), true), Field::text("504599"));
    }

    #[test]
    fn test_decode_components() {
        let field = decode_field(b"ZQA^Z02^ZQA_Z02", &seps(), true);
        assert_eq!(
            field,
            Field::Components(vec![
                Component::text("ZQA"),
                Component::text("Z02"),
                Component::text("ZQA_Z02"),
            ])
        );
    }

    #[test]
    fn test_decode_trim_elision() {
        // Trailing empties vanish at every level with trim=true.
        let field = decode_field(b"504599^223344&&IIN&^~", &seps(), true);
        assert_eq!(
            field,
            Field::Components(vec![
                Component::text("504599"),
                Component::Subcomponents(vec![
                    Scalar::text("223344"),
                    Scalar::empty(),
                    Scalar::text("IIN"),
                ]),
            ])
        );
        assert_eq!(
            encode_field(&field, &seps(), true),
            b"504599^223344&&IIN".to_vec()
        );
    }

    #[test]
    fn test_decode_no_trim_preserves_positions() {
        let field = decode_field(b"a^b^^", &seps(), false);
        assert_eq!(
            field,
            Field::Components(vec![
                Component::text("a"),
                Component::text("b"),
                Component::empty(),
                Component::empty(),
            ])
        );
        assert_eq!(encode_field(&field, &seps(), false), b"a^b^^".to_vec());
    }

    #[test]
    fn test_decode_repetitions() {
        let field = decode_field(b"one~two", &seps(), true);
        assert_eq!(
            field,
            Field::Repetitions(vec![
                Repetition::Value(Scalar::text("one")),
                Repetition::Value(Scalar::text("two")),
            ])
        );
    }

    #[test]
    fn test_single_repetition_unwraps() {
        // One repetition is the repetition itself, not a one-element list.
        let field = decode_field(b"one~", &seps(), true);
        assert_eq!(field, Field::text("one"));
    }

    #[test]
    fn test_empty_repetitions_kept_without_trim() {
        let field = decode_field(b"~~", &seps(), false);
        assert_eq!(
            field,
            Field::Repetitions(vec![
                Repetition::Value(Scalar::empty()),
                Repetition::Value(Scalar::empty()),
                Repetition::Value(Scalar::empty()),
            ])
        );
        assert_eq!(decode_field(b"~~", &seps(), true), Field::empty());
    }

    #[test]
    fn test_component_wrap() {
        // A lone component with subcomponents keeps its component level.
        let field = decode_field(b"a&b", &seps(), true);
        assert_eq!(
            field,
            Field::Components(vec![Component::Subcomponents(vec![
                Scalar::text("a"),
                Scalar::text("b"),
            ])])
        );
        assert_eq!(encode_field(&field, &seps(), true), b"a&b".to_vec());
    }

    #[test]
    fn test_null_survives_nesting() {
        for (input, trim) in [
            (&b"\"\"^x"[..], true),
            (b"x&\"\"", true),
            (b"\"\"~y", true),
            (b"\"\"^x", false),
        ] {
            let field = decode_field(input, &seps(), trim);
            let encoded = encode_field(&field, &seps(), trim);
            assert_eq!(encoded, input.to_vec(), "null lost in {input:?}");
        }
    }

    #[test]
    fn test_escaped_delimiters_round_trip() {
        let field = decode_field(b"a\\F\\b", &seps(), true);
        assert_eq!(field, Field::text("a|b"));
        assert_eq!(encode_field(&field, &seps(), true), b"a\\F\\b".to_vec());
    }

    #[test]
    fn test_round_trip_normal_forms() {
        for input in [
            &b"simple"[..],
            b"a^b^c",
            b"a^b&c&d^e",
            b"r1~r2~r3",
            b"a^b~c^d",
            b"\"\"",
            b"x&y",
        ] {
            let field = decode_field(input, &seps(), true);
            assert_eq!(encode_field(&field, &seps(), true), input.to_vec());
        }
    }

    #[test]
    fn test_decode_value_integer() {
        assert_eq!(
            decode_value("42", ValueKind::Integer).unwrap(),
            Value::Integer(42)
        );
        assert_eq!(
            decode_value("-7", ValueKind::Integer).unwrap(),
            Value::Integer(-7)
        );
        assert!(decode_value("4.2", ValueKind::Integer).is_err());
        assert!(decode_value("x", ValueKind::Integer).is_err());
    }

    #[test]
    fn test_decode_value_float() {
        assert_eq!(
            decode_value("4.25", ValueKind::Float).unwrap(),
            Value::Float(4.25)
        );
        assert_eq!(
            decode_value("42", ValueKind::Float).unwrap(),
            Value::Float(42.0)
        );
        assert!(decode_value("1e5", ValueKind::Float).is_err());
        assert!(decode_value("nan", ValueKind::Float).is_err());
    }

    #[test]
    fn test_decode_value_date() {
        assert_eq!(
            decode_value("20120823", ValueKind::Date).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2012, 8, 23).unwrap())
        );
        // 2012 is a leap year, 2013 is not.
        assert!(decode_value("20120229", ValueKind::Date).is_ok());
        assert!(decode_value("20130229", ValueKind::Date).is_err());
        assert!(decode_value("2012082", ValueKind::Date).is_err());
        assert!(decode_value("20121323", ValueKind::Date).is_err());
    }

    #[test]
    fn test_decode_value_datetime() {
        let expected = NaiveDate::from_ymd_opt(2012, 8, 23)
            .unwrap()
            .and_hms_opt(10, 32, 11)
            .unwrap();
        assert_eq!(
            decode_value("20120823103211", ValueKind::DateTime).unwrap(),
            Value::DateTime(expected)
        );
        assert!(decode_value("201208231032", ValueKind::DateTime).is_ok());
        assert!(decode_value("20120823", ValueKind::DateTime).is_ok());
        assert!(decode_value("2012082310", ValueKind::DateTime).is_err());
        assert!(decode_value("20120823246000", ValueKind::DateTime).is_err());
    }

    #[test]
    fn test_decode_value_empty_passthrough() {
        for kind in [
            ValueKind::String,
            ValueKind::Integer,
            ValueKind::Float,
            ValueKind::Date,
            ValueKind::DateTime,
        ] {
            assert_eq!(
                decode_value("", kind).unwrap(),
                Value::Text(String::new()),
                "empty must pass through for {kind}"
            );
        }
    }

    #[test]
    fn test_decode_value_null_for_any_kind() {
        for kind in [ValueKind::String, ValueKind::Integer, ValueKind::Date] {
            assert_eq!(decode_value("\"\"", kind).unwrap(), Value::Null);
        }
    }

    #[test]
    fn test_encode_value() {
        assert_eq!(
            encode_value(&Value::Integer(42), ValueKind::Integer).unwrap(),
            "42"
        );
        assert_eq!(encode_value(&Value::Null, ValueKind::Date).unwrap(), "\"\"");
        assert_eq!(
            encode_value(&Value::Text(String::new()), ValueKind::Integer).unwrap(),
            ""
        );
        let dt = NaiveDate::from_ymd_opt(2012, 2, 1)
            .unwrap()
            .and_hms_opt(10, 11, 0)
            .unwrap();
        assert_eq!(
            encode_value(&Value::DateTime(dt), ValueKind::DateTime).unwrap(),
            "201202011011"
        );
    }

    #[test]
    fn test_encode_value_kind_mismatch() {
        assert!(encode_value(&Value::Integer(1), ValueKind::Date).is_err());
        assert!(encode_value(&Value::Text("x".into()), ValueKind::Integer).is_err());
    }

    #[test]
    fn test_latin1_text_round_trip() {
        let bytes: Vec<u8> = vec![b'J', 0xF3, b's', b'e'];
        let text = text_from_wire(&bytes);
        assert_eq!(text, "Jóse");
        assert_eq!(text_to_wire(&text), bytes);
    }
}
