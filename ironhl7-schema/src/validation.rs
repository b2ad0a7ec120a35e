//! Validation of spec tables against the schema invariants.

use crate::composite::{ComponentKind, CompositeSpec};
use crate::defs;
use crate::error::SchemaError;
use crate::spec::{SegmentSpec, SequenceSpec};
use ironhl7_core::SegmentId;
use std::collections::HashSet;

/// Validates every static spec table.
///
/// # Errors
/// Returns the first invariant violation found.
pub fn validate_registry() -> Result<(), SchemaError> {
    for composite in defs::composites::ALL {
        validate_composite(composite)?;
    }
    for segment in defs::segments::ALL {
        validate_segment(segment)?;
    }
    Ok(())
}

/// Validates one composite spec: unique component names and a nesting
/// depth of at most two.
///
/// # Errors
/// Returns the first invariant violation found.
pub fn validate_composite(spec: &CompositeSpec) -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    for component in spec.components {
        if !names.insert(component.name) {
            return Err(SchemaError::DuplicateComponent {
                composite: spec.name,
                name: component.name,
            });
        }
        if let ComponentKind::Composite(nested) = component.kind {
            if nested.depth() > 1 {
                return Err(SchemaError::TooDeep {
                    composite: spec.name,
                });
            }
        }
    }
    Ok(())
}

/// Validates one segment spec: identifier grammar, ascending sequences,
/// unique names, unique coordinates, consistent depths and composite fit.
///
/// # Errors
/// Returns the first invariant violation found.
pub fn validate_segment(spec: &SegmentSpec) -> Result<(), SchemaError> {
    if spec.id.parse::<SegmentId>().is_err() {
        return Err(SchemaError::BadSegmentId {
            id: spec.id.to_string(),
        });
    }

    let mut names = HashSet::new();
    let mut previous_sequence = 0u16;
    for sequence in spec.sequences {
        if sequence.sequence <= previous_sequence {
            return Err(SchemaError::SequenceOutOfOrder {
                segment: spec.id,
                sequence: sequence.sequence,
            });
        }
        previous_sequence = sequence.sequence;
        validate_sequence(spec.id, sequence, &mut names)?;
    }
    Ok(())
}

fn validate_sequence(
    segment: &'static str,
    seq: &SequenceSpec,
    names: &mut HashSet<&'static str>,
) -> Result<(), SchemaError> {
    let mut coordinates = HashSet::new();
    let mut scalar_reps = HashSet::new();
    let mut nested_reps = HashSet::new();
    let mut scalar_components = HashSet::new();
    let mut nested_components = HashSet::new();

    for field in seq.fields {
        if !names.insert(field.name) {
            return Err(SchemaError::DuplicateName {
                segment,
                name: field.name,
            });
        }
        if !coordinates.insert(field.coordinate) {
            return Err(SchemaError::DuplicateCoordinate {
                segment,
                sequence: seq.sequence,
                coordinate: field.coordinate,
            });
        }

        let rep = field.coordinate.repetition();
        match field.coordinate.component() {
            None => {
                scalar_reps.insert(rep);
            }
            Some(component) => {
                nested_reps.insert(rep);
                match field.coordinate.subcomponent() {
                    None => {
                        scalar_components.insert((rep, component));
                    }
                    Some(_) => {
                        nested_components.insert((rep, component));
                    }
                }
            }
        }

        if let Some(composite) = seq.composite {
            validate_against_composite(segment, field, composite)?;
        }
    }

    if scalar_reps.intersection(&nested_reps).next().is_some()
        || scalar_components
            .intersection(&nested_components)
            .next()
            .is_some()
    {
        return Err(SchemaError::DepthConflict {
            segment,
            sequence: seq.sequence,
        });
    }
    Ok(())
}

fn validate_against_composite(
    segment: &'static str,
    field: &crate::spec::FieldSpec,
    composite: &CompositeSpec,
) -> Result<(), SchemaError> {
    let mismatch = || SchemaError::CompositeMismatch {
        segment,
        name: field.name,
        coordinate: field.coordinate,
        composite: composite.name,
    };

    // Whole-repetition coordinates bypass the composite structure.
    let Some(component_index) = field.coordinate.component() else {
        return Ok(());
    };
    let component = composite
        .components
        .get(component_index as usize - 1)
        .ok_or_else(mismatch)?;

    match (field.coordinate.subcomponent(), component.kind) {
        (None, ComponentKind::Primitive(kind)) => {
            if kind == field.kind {
                Ok(())
            } else {
                Err(mismatch())
            }
        }
        (None, ComponentKind::Composite(_)) => {
            // Addressing a nested composite at component depth reads its
            // first subcomponent; allow it only for strings.
            if field.kind == ironhl7_core::ValueKind::String {
                Ok(())
            } else {
                Err(mismatch())
            }
        }
        (Some(sub_index), ComponentKind::Composite(nested)) => {
            let sub = nested
                .components
                .get(sub_index as usize - 1)
                .ok_or_else(mismatch)?;
            match sub.kind {
                ComponentKind::Primitive(kind) if kind == field.kind => Ok(()),
                _ => Err(mismatch()),
            }
        }
        (Some(_), ComponentKind::Primitive(_)) => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::spec::FieldSpec;
    use ironhl7_core::ValueKind;

    #[test]
    fn test_static_tables_are_valid() {
        validate_registry().expect("static spec tables must satisfy the invariants");
    }

    #[test]
    fn test_duplicate_coordinate_rejected() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "ZZT",
            sequences: &[SequenceSpec::plain(
                1,
                &[
                    FieldSpec::new("a", Coordinate::Component(1, 1), ValueKind::String, 10),
                    FieldSpec::new("b", Coordinate::Component(1, 1), ValueKind::String, 10),
                ],
            )],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::DuplicateCoordinate { sequence: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "ZZT",
            sequences: &[
                SequenceSpec::plain(
                    1,
                    &[FieldSpec::new("a", Coordinate::Repetition(1), ValueKind::String, 10)],
                ),
                SequenceSpec::plain(
                    2,
                    &[FieldSpec::new("a", Coordinate::Repetition(1), ValueKind::String, 10)],
                ),
            ],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::DuplicateName { name: "a", .. })
        ));
    }

    #[test]
    fn test_sequence_order_enforced() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "ZZT",
            sequences: &[
                SequenceSpec::plain(
                    2,
                    &[FieldSpec::new("a", Coordinate::Repetition(1), ValueKind::String, 10)],
                ),
                SequenceSpec::plain(
                    1,
                    &[FieldSpec::new("b", Coordinate::Repetition(1), ValueKind::String, 10)],
                ),
            ],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::SequenceOutOfOrder { sequence: 1, .. })
        ));
    }

    #[test]
    fn test_depth_conflict_rejected() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "ZZT",
            sequences: &[SequenceSpec::plain(
                1,
                &[
                    FieldSpec::new("a", Coordinate::Repetition(1), ValueKind::String, 10),
                    FieldSpec::new("b", Coordinate::Component(1, 2), ValueKind::String, 10),
                ],
            )],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::DepthConflict { sequence: 1, .. })
        ));
    }

    #[test]
    fn test_composite_overflow_rejected() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "ZZT",
            sequences: &[SequenceSpec::of(
                1,
                &crate::defs::composites::MO,
                &[FieldSpec::new("a", Coordinate::Component(1, 9), ValueKind::String, 10)],
            )],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::CompositeMismatch { .. })
        ));
    }

    #[test]
    fn test_composite_kind_mismatch_rejected() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "ZZT",
            sequences: &[SequenceSpec::of(
                1,
                &crate::defs::composites::MO,
                &[FieldSpec::new("a", Coordinate::Component(1, 1), ValueKind::Date, 10)],
            )],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::CompositeMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_id_rejected() {
        static BAD: SegmentSpec = SegmentSpec {
            id: "zzt",
            sequences: &[],
        };
        assert!(matches!(
            validate_segment(&BAD),
            Err(SchemaError::BadSegmentId { .. })
        ));
    }
}
