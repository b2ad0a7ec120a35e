//! # IronHL7 Schema
//!
//! Schema-driven shape machinery for HL7 v2.x segments.
//!
//! This crate provides:
//! - Coordinates addressing values inside a field by 1-based
//!   (repetition, component, subcomponent) indices
//! - Segment specs mapping named, typed attributes onto coordinates
//! - Composite specs with name-to-coordinate lookups
//! - Static spec tables for a practical set of segments and composites
//! - Spec validation
//! - The bridge marshalling between named values and the field codec

pub mod bridge;
pub mod composite;
pub mod coordinate;
pub mod defs;
pub mod error;
pub mod registry;
pub mod spec;
pub mod validation;

pub use composite::{ComponentKind, CompositeComponent, CompositeSpec};
pub use coordinate::Coordinate;
pub use error::SchemaError;
pub use registry::{composite_spec, segment_spec, segment_spec_by_name};
pub use spec::{FieldSpec, SegmentSpec, SequenceSpec};
