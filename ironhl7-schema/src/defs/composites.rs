//! Composite type tables.

use crate::composite::{CompositeComponent, CompositeSpec};
use ironhl7_core::ValueKind;

/// Hierarchic designator.
pub static HD: CompositeSpec = CompositeSpec {
    name: "HD",
    components: &[
        CompositeComponent::primitive("namespace_id", ValueKind::String),
        CompositeComponent::primitive("universal_id", ValueKind::String),
        CompositeComponent::primitive("universal_id_type", ValueKind::String),
    ],
};

/// Coded element.
pub static CE: CompositeSpec = CompositeSpec {
    name: "CE",
    components: &[
        CompositeComponent::primitive("identifier", ValueKind::String),
        CompositeComponent::primitive("text", ValueKind::String),
        CompositeComponent::primitive("coding_system", ValueKind::String),
        CompositeComponent::primitive("alternate_identifier", ValueKind::String),
        CompositeComponent::primitive("alternate_text", ValueKind::String),
        CompositeComponent::primitive("alternate_coding_system", ValueKind::String),
    ],
};

/// Extended composite ID with check digit.
pub static CX: CompositeSpec = CompositeSpec {
    name: "CX",
    components: &[
        CompositeComponent::primitive("id", ValueKind::String),
        CompositeComponent::primitive("check_digit", ValueKind::String),
        CompositeComponent::primitive("check_digit_scheme", ValueKind::String),
        CompositeComponent::composite("assigning_authority", &HD),
        CompositeComponent::primitive("identifier_type_code", ValueKind::String),
        CompositeComponent::composite("assigning_facility", &HD),
    ],
};

/// Entity identifier.
pub static EI: CompositeSpec = CompositeSpec {
    name: "EI",
    components: &[
        CompositeComponent::primitive("entity_id", ValueKind::String),
        CompositeComponent::primitive("namespace_id", ValueKind::String),
        CompositeComponent::primitive("universal_id", ValueKind::String),
        CompositeComponent::primitive("universal_id_type", ValueKind::String),
    ],
};

/// Extended person name.
pub static XPN: CompositeSpec = CompositeSpec {
    name: "XPN",
    components: &[
        CompositeComponent::primitive("family_name", ValueKind::String),
        CompositeComponent::primitive("given_name", ValueKind::String),
        CompositeComponent::primitive("middle_name", ValueKind::String),
        CompositeComponent::primitive("suffix", ValueKind::String),
        CompositeComponent::primitive("prefix", ValueKind::String),
        CompositeComponent::primitive("degree", ValueKind::String),
    ],
};

/// Extended composite ID number and name for persons.
pub static XCN: CompositeSpec = CompositeSpec {
    name: "XCN",
    components: &[
        CompositeComponent::primitive("id_number", ValueKind::String),
        CompositeComponent::primitive("family_name", ValueKind::String),
        CompositeComponent::primitive("given_name", ValueKind::String),
        CompositeComponent::primitive("middle_name", ValueKind::String),
        CompositeComponent::primitive("suffix", ValueKind::String),
        CompositeComponent::primitive("prefix", ValueKind::String),
        CompositeComponent::primitive("degree", ValueKind::String),
        CompositeComponent::primitive("source_table", ValueKind::String),
        CompositeComponent::composite("assigning_authority", &HD),
    ],
};

/// Extended address.
pub static XAD: CompositeSpec = CompositeSpec {
    name: "XAD",
    components: &[
        CompositeComponent::primitive("street_address", ValueKind::String),
        CompositeComponent::primitive("other_designation", ValueKind::String),
        CompositeComponent::primitive("city", ValueKind::String),
        CompositeComponent::primitive("state", ValueKind::String),
        CompositeComponent::primitive("zip", ValueKind::String),
        CompositeComponent::primitive("country", ValueKind::String),
        CompositeComponent::primitive("address_type", ValueKind::String),
    ],
};

/// Extended telecommunication number.
pub static XTN: CompositeSpec = CompositeSpec {
    name: "XTN",
    components: &[
        CompositeComponent::primitive("telephone_number", ValueKind::String),
        CompositeComponent::primitive("use_code", ValueKind::String),
        CompositeComponent::primitive("equipment_type", ValueKind::String),
        CompositeComponent::primitive("email_address", ValueKind::String),
    ],
};

/// Person location.
pub static PL: CompositeSpec = CompositeSpec {
    name: "PL",
    components: &[
        CompositeComponent::primitive("point_of_care", ValueKind::String),
        CompositeComponent::primitive("room", ValueKind::String),
        CompositeComponent::primitive("bed", ValueKind::String),
        CompositeComponent::composite("facility", &HD),
        CompositeComponent::primitive("location_status", ValueKind::String),
        CompositeComponent::primitive("person_location_type", ValueKind::String),
    ],
};

/// Money.
pub static MO: CompositeSpec = CompositeSpec {
    name: "MO",
    components: &[
        CompositeComponent::primitive("quantity", ValueKind::Float),
        CompositeComponent::primitive("denomination", ValueKind::String),
    ],
};

/// Message type.
pub static MSG: CompositeSpec = CompositeSpec {
    name: "MSG",
    components: &[
        CompositeComponent::primitive("message_code", ValueKind::String),
        CompositeComponent::primitive("trigger_event", ValueKind::String),
        CompositeComponent::primitive("message_structure", ValueKind::String),
    ],
};

/// Error location and description.
pub static ELD: CompositeSpec = CompositeSpec {
    name: "ELD",
    components: &[
        CompositeComponent::primitive("segment_id", ValueKind::String),
        CompositeComponent::primitive("segment_sequence", ValueKind::Integer),
        CompositeComponent::primitive("field_position", ValueKind::Integer),
        CompositeComponent::composite("error_code", &CE),
    ],
};

/// Person identifier.
pub static PI: CompositeSpec = CompositeSpec {
    name: "PI",
    components: &[
        CompositeComponent::primitive("id_number", ValueKind::String),
        CompositeComponent::primitive("type_of_id_number", ValueKind::String),
        CompositeComponent::primitive("other_qualifying_info", ValueKind::String),
    ],
};

/// Every composite table, for registry lookups and validation.
pub static ALL: &[&CompositeSpec] = &[
    &HD, &CE, &CX, &EI, &XPN, &XCN, &XAD, &XTN, &PL, &MO, &MSG, &ELD, &PI,
];
