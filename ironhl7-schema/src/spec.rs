//! Segment specs: named, typed attributes mapped onto field coordinates.

use crate::composite::CompositeSpec;
use crate::coordinate::Coordinate;
use ironhl7_core::ValueKind;

/// One named attribute of a segment: a coordinate inside a field, a
/// primitive kind and an advisory maximum length.
///
/// The maximum length is metadata only; it never gates encoding.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Attribute name, unique within the segment.
    pub name: &'static str,
    /// Location of the value inside the field.
    pub coordinate: Coordinate,
    /// Declared primitive kind.
    pub kind: ValueKind,
    /// Advisory maximum length in bytes.
    pub max_len: u32,
}

impl FieldSpec {
    /// Declares a field spec.
    #[must_use]
    pub const fn new(
        name: &'static str,
        coordinate: Coordinate,
        kind: ValueKind,
        max_len: u32,
    ) -> Self {
        Self {
            name,
            coordinate,
            kind,
            max_len,
        }
    }
}

/// The field specs sharing one sequence number, with the composite the
/// field logically carries, when it carries one.
///
/// Field specs are stored in ascending coordinate write order, which is the
/// order the bridge renders them in.
#[derive(Debug, Clone, Copy)]
pub struct SequenceSpec {
    /// 1-based position of the field within the segment.
    pub sequence: u16,
    /// Composite type of the field, if any.
    pub composite: Option<&'static CompositeSpec>,
    /// Field specs addressing coordinates inside this field.
    pub fields: &'static [FieldSpec],
}

impl SequenceSpec {
    /// Declares a sequence of plain (non-composite) field specs.
    #[must_use]
    pub const fn plain(sequence: u16, fields: &'static [FieldSpec]) -> Self {
        Self {
            sequence,
            composite: None,
            fields,
        }
    }

    /// Declares a sequence carrying a composite.
    #[must_use]
    pub const fn of(
        sequence: u16,
        composite: &'static CompositeSpec,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            sequence,
            composite: Some(composite),
            fields,
        }
    }
}

/// An addressable map from sequence number to field specs for one segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentSpec {
    /// Three-character segment identifier.
    pub id: &'static str,
    /// Sequences in ascending order; gaps are unnamed fields.
    pub sequences: &'static [SequenceSpec],
}

impl SegmentSpec {
    /// Returns the sequence spec at the given sequence number.
    #[must_use]
    pub fn sequence(&self, sequence: u16) -> Option<&'static SequenceSpec> {
        self.sequences.iter().find(|s| s.sequence == sequence)
    }

    /// Returns the highest sequence number the spec addresses.
    #[must_use]
    pub fn max_sequence(&self) -> u16 {
        self.sequences.last().map_or(0, |s| s.sequence)
    }

    /// Looks up a field spec by attribute name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(&'static SequenceSpec, &'static FieldSpec)> {
        self.sequences.iter().find_map(|seq| {
            seq.fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| (seq, f))
        })
    }

    /// Iterates all field specs of the segment.
    pub fn all_fields(&self) -> impl Iterator<Item = (&'static SequenceSpec, &'static FieldSpec)> {
        self.sequences
            .iter()
            .flat_map(|seq| seq.fields.iter().map(move |f| (seq, f)))
    }
}
