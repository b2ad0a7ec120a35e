//! Recursive representation of a single field's nested structure.
//!
//! The shape mirrors the delimiter hierarchy with exactly three nesting
//! levels. A component holding subcomponents keeps its component level even
//! when it is the only component of a repetition, which is what
//! distinguishes `a&b` from `a` nested one level down.

use crate::value::Value;

/// Leaf of the field representation: present text or the explicit null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// Text content; the empty string is the empty value.
    Text(String),
    /// The explicit HL7 null (`""` on the wire).
    Null,
}

impl Scalar {
    /// Creates a text scalar.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// The empty text scalar.
    #[must_use]
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Returns true for the empty text scalar; null is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(t) if t.is_empty())
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Null => None,
        }
    }

    /// Converts the scalar into the corresponding typed value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Text(t) => Value::Text(t),
            Self::Null => Value::Null,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One component of a repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// A scalar component.
    Value(Scalar),
    /// A component split into subcomponents.
    Subcomponents(Vec<Scalar>),
}

impl Component {
    /// Creates a scalar text component.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Value(Scalar::text(s))
    }

    /// The empty component.
    #[must_use]
    pub fn empty() -> Self {
        Self::Value(Scalar::empty())
    }
}

/// One repetition of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repetition {
    /// A scalar repetition.
    Value(Scalar),
    /// A repetition split into components.
    Components(Vec<Component>),
}

impl From<Repetition> for Field {
    fn from(rep: Repetition) -> Self {
        match rep {
            Repetition::Value(s) => Self::Value(s),
            Repetition::Components(c) => Self::Components(c),
        }
    }
}

/// A complete field.
///
/// A field with exactly one repetition is represented as that repetition
/// itself rather than a one-element list, on both the decode and encode
/// paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A scalar field.
    Value(Scalar),
    /// A single-repetition field split into components.
    Components(Vec<Component>),
    /// A field with multiple repetitions.
    Repetitions(Vec<Repetition>),
}

impl Field {
    /// The empty field.
    #[must_use]
    pub fn empty() -> Self {
        Self::Value(Scalar::empty())
    }

    /// Creates a scalar text field.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Value(Scalar::text(s))
    }

    /// The explicit null field.
    #[must_use]
    pub fn null() -> Self {
        Self::Value(Scalar::Null)
    }

    /// Number of repetitions present.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        match self {
            Self::Repetitions(reps) => reps.len(),
            _ => 1,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_empty_vs_null() {
        assert!(Scalar::empty().is_empty());
        assert!(!Scalar::Null.is_empty());
        assert_eq!(Scalar::Null.as_text(), None);
    }

    #[test]
    fn test_repetition_promotes_to_field() {
        let rep = Repetition::Components(vec![Component::text("a"), Component::text("b")]);
        let field: Field = rep.into();
        assert!(matches!(field, Field::Components(ref c) if c.len() == 2));
    }

    #[test]
    fn test_repetition_count() {
        assert_eq!(Field::text("x").repetition_count(), 1);
        let field = Field::Repetitions(vec![
            Repetition::Value(Scalar::text("a")),
            Repetition::Value(Scalar::text("b")),
        ]);
        assert_eq!(field.repetition_count(), 2);
    }

    #[test]
    fn test_scalar_into_value() {
        assert_eq!(Scalar::text("a").into_value(), Value::Text("a".to_string()));
        assert_eq!(Scalar::Null.into_value(), Value::Null);
    }
}
