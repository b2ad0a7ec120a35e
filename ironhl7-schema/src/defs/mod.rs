//! Static spec tables.
//!
//! These are declarations, not machinery: each entry is a mechanical port
//! of the corresponding HL7 v2.4 table, restricted to the attributes the
//! library exposes by name.

pub mod composites;
pub mod segments;
