//! Typed primitive values carried by segment fields.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// The closed set of primitive value kinds a field spec may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text.
    String,
    /// Strict decimal integer.
    Integer,
    /// Decimal number, integer or fractional form.
    Float,
    /// Calendar date (`YYYYMMDD` on the wire).
    Date,
    /// Date with time of day (`YYYYMMDD[HHMM[SS]]` on the wire).
    DateTime,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Date => "date",
            Self::DateTime => "datetime",
        };
        f.write_str(name)
    }
}

/// A typed field value.
///
/// The explicit HL7 null (`""` on the wire) is distinct from the empty
/// string, and both are distinct from a name being absent from a segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The explicit HL7 null.
    Null,
    /// Text value; `Text(String::new())` is the empty value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time of day.
    DateTime(NaiveDateTime),
}

impl Value {
    /// Returns the kind this value belongs to, or `None` for null.
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Text(_) => Some(ValueKind::String),
            Self::Integer(_) => Some(ValueKind::Integer),
            Self::Float(_) => Some(ValueKind::Float),
            Self::Date(_) => Some(ValueKind::Date),
            Self::DateTime(_) => Some(ValueKind::DateTime),
        }
    }

    /// Returns true for the explicit null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for the empty text value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(t) if t.is_empty())
    }

    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float content, if this is a float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the date content, if this is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the datetime content, if this is a datetime value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("\"\""),
            Self::Text(t) => f.write_str(t),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::DateTime(dt) => {
                if dt.second() == 0 {
                    write!(f, "{}", dt.format("%Y%m%d%H%M"))
                } else {
                    write!(f, "{}", dt.format("%Y%m%d%H%M%S"))
                }
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}
