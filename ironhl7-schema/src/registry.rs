//! Lookup of static spec tables by identifier.

use crate::composite::CompositeSpec;
use crate::defs;
use crate::spec::SegmentSpec;
use ironhl7_core::SegmentId;

/// Resolves the spec for a segment identifier.
#[must_use]
pub fn segment_spec(id: SegmentId) -> Option<&'static SegmentSpec> {
    segment_spec_by_name(id.as_str())
}

/// Resolves the spec for a segment identifier given as text.
#[must_use]
pub fn segment_spec_by_name(id: &str) -> Option<&'static SegmentSpec> {
    defs::segments::ALL.iter().copied().find(|s| s.id == id)
}

/// Resolves a composite spec by type name.
#[must_use]
pub fn composite_spec(name: &str) -> Option<&'static CompositeSpec> {
    defs::composites::ALL.iter().copied().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_lookup() {
        assert!(segment_spec_by_name("MSH").is_some());
        assert!(segment_spec_by_name("PID").is_some());
        assert!(segment_spec_by_name("XYZ").is_none());
        let id: SegmentId = "AUT".parse().unwrap();
        assert_eq!(segment_spec(id).unwrap().id, "AUT");
    }

    #[test]
    fn test_composite_lookup() {
        assert!(composite_spec("CE").is_some());
        assert!(composite_spec("CX").is_some());
        assert!(composite_spec("??").is_none());
    }

    #[test]
    fn test_registry_ids_are_distinct() {
        for (i, a) in defs::segments::ALL.iter().enumerate() {
            for b in &defs::segments::ALL[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
