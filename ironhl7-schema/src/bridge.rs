//! The segment IR bridge: marshalling between named, typed values and the
//! field codec representation.
//!
//! Building renders a sparse coordinate map by iterating every index from 1
//! to the highest addressed, emitting empties where nothing is addressed,
//! so coordinates remain stable regardless of which values are present.

use crate::coordinate::Coordinate;
use crate::spec::SequenceSpec;
use ironhl7_core::codec;
use ironhl7_core::{CodecError, Component, Field, Repetition, Scalar, Value};
use std::collections::BTreeMap;

type Slots = BTreeMap<(u16, u16, u16), Scalar>;

/// Builds the field for one sequence from named values.
///
/// `lookup` resolves an attribute name to its value; absent names become
/// empty positions. A field whose coordinates stay within repetition 1 is
/// returned unwrapped, and a component level is kept whenever any
/// coordinate addresses components, which is what marks composite-carrying
/// fields on the wire.
///
/// # Errors
/// Returns [`CodecError::KindMismatch`] when a value does not match its
/// declared kind.
pub fn build_field<'a, F>(lookup: F, seq: &SequenceSpec) -> Result<Field, CodecError>
where
    F: Fn(&str) -> Option<&'a Value>,
{
    let mut slots = Slots::new();
    for field in seq.fields {
        let scalar = match lookup(field.name) {
            None => Scalar::empty(),
            Some(Value::Null) => Scalar::Null,
            Some(value) => Scalar::Text(codec::encode_value(value, field.kind)?),
        };
        slots.insert(field.coordinate.write_order(), scalar);
    }

    let Some(max_repetition) = slots.keys().map(|k| k.0).max() else {
        return Ok(Field::empty());
    };
    let mut repetitions: Vec<Repetition> = (1..=max_repetition)
        .map(|r| render_repetition(&slots, r))
        .collect();
    if repetitions.len() == 1 {
        Ok(repetitions.remove(0).into())
    } else {
        Ok(Field::Repetitions(repetitions))
    }
}

fn render_repetition(slots: &Slots, repetition: u16) -> Repetition {
    if let Some(scalar) = slots.get(&(repetition, 0, 0)) {
        return Repetition::Value(scalar.clone());
    }
    let max_component = slots
        .keys()
        .filter(|k| k.0 == repetition)
        .map(|k| k.1)
        .max()
        .unwrap_or(0);
    if max_component == 0 {
        return Repetition::Value(Scalar::empty());
    }
    Repetition::Components(
        (1..=max_component)
            .map(|c| render_component(slots, repetition, c))
            .collect(),
    )
}

fn render_component(slots: &Slots, repetition: u16, component: u16) -> Component {
    if let Some(scalar) = slots.get(&(repetition, component, 0)) {
        return Component::Value(scalar.clone());
    }
    let max_sub = slots
        .keys()
        .filter(|k| k.0 == repetition && k.1 == component)
        .map(|k| k.2)
        .max()
        .unwrap_or(0);
    if max_sub == 0 {
        return Component::empty();
    }
    Component::Subcomponents(
        (1..=max_sub)
            .map(|s| {
                slots
                    .get(&(repetition, component, s))
                    .cloned()
                    .unwrap_or_else(Scalar::empty)
            })
            .collect(),
    )
}

/// Reads named values back out of a decoded field.
///
/// Navigation follows the 1-based coordinate indices; an index into a
/// scalar yields the scalar at position 1 and empty above it, and a path
/// running past a tuple's arity means the spec is skipped.
///
/// # Errors
/// Returns [`CodecError::BadValue`] when a retrieved value does not parse
/// as its declared kind.
pub fn parse_field(
    field: &Field,
    seq: &SequenceSpec,
) -> Result<Vec<(&'static str, Value)>, CodecError> {
    let mut updates = Vec::new();
    for spec in seq.fields {
        if let Some(scalar) = scalar_at(field, spec.coordinate) {
            let value = match scalar {
                Scalar::Null => Value::Null,
                Scalar::Text(text) => codec::decode_value(&text, spec.kind)?,
            };
            updates.push((spec.name, value));
        }
    }
    Ok(updates)
}

fn scalar_at(field: &Field, coordinate: Coordinate) -> Option<Scalar> {
    let repetition_index = (coordinate.repetition() as usize).checked_sub(1)?;
    let component_index = coordinate.component().unwrap_or(1) as usize;
    let sub_index = coordinate.subcomponent().unwrap_or(1) as usize;

    let repetition = match field {
        Field::Repetitions(reps) => reps.get(repetition_index)?.clone(),
        Field::Value(scalar) if repetition_index == 0 => Repetition::Value(scalar.clone()),
        Field::Components(comps) if repetition_index == 0 => {
            Repetition::Components(comps.clone())
        }
        _ => return None,
    };

    let component = match repetition {
        Repetition::Value(scalar) => {
            return if component_index == 1 && sub_index == 1 {
                Some(scalar)
            } else {
                Some(Scalar::empty())
            };
        }
        Repetition::Components(comps) => comps.get(component_index.checked_sub(1)?)?.clone(),
    };

    match component {
        Component::Value(scalar) => {
            if sub_index == 1 {
                Some(scalar)
            } else {
                Some(Scalar::empty())
            }
        }
        Component::Subcomponents(subs) => subs.get(sub_index.checked_sub(1)?).cloned(),
    }
}
