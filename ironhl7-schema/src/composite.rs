//! Composite specs: ordered, named components of a field.

use ironhl7_core::ValueKind;

/// The kind of one component of a composite.
#[derive(Debug, Clone, Copy)]
pub enum ComponentKind {
    /// A primitive value of the given kind.
    Primitive(ValueKind),
    /// A nested composite, realized as subcomponents on the wire.
    Composite(&'static CompositeSpec),
}

/// One named component of a composite.
#[derive(Debug, Clone, Copy)]
pub struct CompositeComponent {
    /// Component name, unique within the composite.
    pub name: &'static str,
    /// Component kind.
    pub kind: ComponentKind,
}

impl CompositeComponent {
    /// Declares a primitive component.
    #[must_use]
    pub const fn primitive(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind: ComponentKind::Primitive(kind),
        }
    }

    /// Declares a nested composite component.
    #[must_use]
    pub const fn composite(name: &'static str, spec: &'static CompositeSpec) -> Self {
        Self {
            name,
            kind: ComponentKind::Composite(spec),
        }
    }
}

/// An ordered list of named components describing one composite type.
///
/// Nesting depth is at most two: a composite may contain composites whose
/// components are all primitive.
#[derive(Debug, Clone, Copy)]
pub struct CompositeSpec {
    /// Composite type name (`CE`, `CX`, ...).
    pub name: &'static str,
    /// Components in wire order.
    pub components: &'static [CompositeComponent],
}

impl CompositeSpec {
    /// Looks up a component by name, returning its 1-based index and kind.
    #[must_use]
    pub fn component(&self, key: &str) -> Option<(u16, &ComponentKind)> {
        self.components
            .iter()
            .position(|c| c.name == key)
            .map(|i| (i as u16 + 1, &self.components[i].kind))
    }

    /// Looks up a subcomponent through a nested composite, returning its
    /// 1-based (component, subcomponent) indices and primitive kind.
    #[must_use]
    pub fn subcomponent(&self, key: &str, subkey: &str) -> Option<((u16, u16), ValueKind)> {
        let (index, kind) = self.component(key)?;
        let ComponentKind::Composite(nested) = kind else {
            return None;
        };
        let (subindex, subkind) = nested.component(subkey)?;
        let ComponentKind::Primitive(value_kind) = subkind else {
            return None;
        };
        Some(((index, subindex), *value_kind))
    }

    /// Nesting depth: 1 when all components are primitive, 2 otherwise.
    #[must_use]
    pub fn depth(&self) -> u8 {
        if self
            .components
            .iter()
            .any(|c| matches!(c.kind, ComponentKind::Composite(_)))
        {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::composites::{CE, CX, HD};

    #[test]
    fn test_component_lookup() {
        let (index, kind) = CE.component("identifier").unwrap();
        assert_eq!(index, 1);
        assert!(matches!(kind, ComponentKind::Primitive(ValueKind::String)));
        assert!(CE.component("no_such_component").is_none());
    }

    #[test]
    fn test_subcomponent_lookup() {
        let ((index, subindex), kind) = CX
            .subcomponent("assigning_authority", "universal_id_type")
            .unwrap();
        assert_eq!(index, 4);
        assert_eq!(subindex, 3);
        assert_eq!(kind, ValueKind::String);
    }

    #[test]
    fn test_subcomponent_requires_nested_composite() {
        assert!(CX.subcomponent("id", "anything").is_none());
        assert!(CX.subcomponent("assigning_authority", "missing").is_none());
    }

    #[test]
    fn test_depth() {
        assert_eq!(HD.depth(), 1);
        assert_eq!(CX.depth(), 2);
    }
}
