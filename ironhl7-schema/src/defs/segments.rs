//! Segment spec tables.

use super::composites;
use crate::coordinate::Coordinate::{Component, Repetition, Subcomponent};
use crate::spec::{FieldSpec, SegmentSpec, SequenceSpec};
use ironhl7_core::ValueKind::{Date, DateTime, Float, Integer, String};

/// Message header.
pub static MSH: SegmentSpec = SegmentSpec {
    id: "MSH",
    sequences: &[
        SequenceSpec::plain(
            1,
            &[FieldSpec::new("field_separator", Repetition(1), String, 1)],
        ),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("encoding_characters", Repetition(1), String, 4)],
        ),
        SequenceSpec::plain(
            3,
            &[FieldSpec::new("sending_application", Repetition(1), String, 180)],
        ),
        SequenceSpec::plain(
            4,
            &[FieldSpec::new("sending_facility", Repetition(1), String, 180)],
        ),
        SequenceSpec::plain(
            5,
            &[FieldSpec::new("receiving_application", Repetition(1), String, 180)],
        ),
        SequenceSpec::of(
            6,
            &composites::HD,
            &[
                FieldSpec::new("receiving_facility_id", Component(1, 1), String, 20),
                FieldSpec::new("receiving_facility_universal_id", Component(1, 2), String, 20),
                FieldSpec::new("receiving_facility_id_type", Component(1, 3), String, 20),
            ],
        ),
        SequenceSpec::plain(
            7,
            &[FieldSpec::new("message_datetime", Repetition(1), DateTime, 26)],
        ),
        SequenceSpec::plain(8, &[FieldSpec::new("security", Repetition(1), String, 40)]),
        SequenceSpec::of(
            9,
            &composites::MSG,
            &[
                FieldSpec::new("message_code", Component(1, 1), String, 3),
                FieldSpec::new("trigger_event", Component(1, 2), String, 3),
                FieldSpec::new("message_structure", Component(1, 3), String, 7),
            ],
        ),
        SequenceSpec::plain(
            10,
            &[FieldSpec::new("message_control_id", Repetition(1), String, 20)],
        ),
        SequenceSpec::plain(
            11,
            &[FieldSpec::new("processing_id", Repetition(1), String, 3)],
        ),
        SequenceSpec::plain(12, &[FieldSpec::new("version", Repetition(1), String, 60)]),
        SequenceSpec::plain(
            13,
            &[FieldSpec::new("sequence_number", Repetition(1), Integer, 15)],
        ),
        SequenceSpec::plain(
            14,
            &[FieldSpec::new("continuation_pointer", Repetition(1), String, 180)],
        ),
        SequenceSpec::plain(
            15,
            &[FieldSpec::new("accept_ack_type", Repetition(1), String, 2)],
        ),
        SequenceSpec::plain(
            16,
            &[FieldSpec::new("application_ack_type", Repetition(1), String, 2)],
        ),
        SequenceSpec::plain(
            17,
            &[FieldSpec::new("country_code", Repetition(1), String, 3)],
        ),
    ],
};

/// Message acknowledgment.
pub static MSA: SegmentSpec = SegmentSpec {
    id: "MSA",
    sequences: &[
        SequenceSpec::plain(
            1,
            &[FieldSpec::new("ack_code", Repetition(1), String, 2)],
        ),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("message_control_id", Repetition(1), String, 20)],
        ),
        SequenceSpec::plain(
            3,
            &[FieldSpec::new("text_message", Repetition(1), String, 80)],
        ),
        SequenceSpec::plain(
            4,
            &[FieldSpec::new("expected_sequence_number", Repetition(1), Integer, 15)],
        ),
        SequenceSpec::of(
            6,
            &composites::CE,
            &[
                FieldSpec::new("error_code", Component(1, 1), String, 10),
                FieldSpec::new("error_text", Component(1, 2), String, 61),
            ],
        ),
    ],
};

/// Error detail.
pub static ERR: SegmentSpec = SegmentSpec {
    id: "ERR",
    sequences: &[SequenceSpec::of(
        1,
        &composites::ELD,
        &[
            FieldSpec::new("error_segment_id", Component(1, 1), String, 3),
            FieldSpec::new("error_segment_sequence", Component(1, 2), Integer, 2),
            FieldSpec::new("error_field_position", Component(1, 3), Integer, 2),
            FieldSpec::new("error_code", Subcomponent(1, 4, 1), String, 10),
            FieldSpec::new("error_text", Subcomponent(1, 4, 2), String, 61),
        ],
    )],
};

/// Event type.
pub static EVN: SegmentSpec = SegmentSpec {
    id: "EVN",
    sequences: &[
        SequenceSpec::plain(
            1,
            &[FieldSpec::new("event_type_code", Repetition(1), String, 3)],
        ),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("recorded_datetime", Repetition(1), DateTime, 26)],
        ),
        SequenceSpec::plain(
            3,
            &[FieldSpec::new("planned_datetime", Repetition(1), DateTime, 26)],
        ),
        SequenceSpec::plain(
            4,
            &[FieldSpec::new("event_reason_code", Repetition(1), String, 3)],
        ),
        SequenceSpec::plain(
            6,
            &[FieldSpec::new("event_occurred", Repetition(1), DateTime, 26)],
        ),
    ],
};

/// Patient identification.
pub static PID: SegmentSpec = SegmentSpec {
    id: "PID",
    sequences: &[
        SequenceSpec::plain(1, &[FieldSpec::new("set_id", Repetition(1), Integer, 4)]),
        SequenceSpec::of(
            3,
            &composites::CX,
            &[
                FieldSpec::new("patient_id", Component(1, 1), String, 20),
                FieldSpec::new("patient_id_check_digit", Component(1, 2), String, 1),
                FieldSpec::new("patient_id_authority", Subcomponent(1, 4, 1), String, 20),
                FieldSpec::new("patient_id_authority_universal", Subcomponent(1, 4, 2), String, 20),
                FieldSpec::new("patient_id_authority_type", Subcomponent(1, 4, 3), String, 20),
                FieldSpec::new("patient_id_type_code", Component(1, 5), String, 5),
            ],
        ),
        SequenceSpec::of(
            5,
            &composites::XPN,
            &[
                FieldSpec::new("last_name", Component(1, 1), String, 40),
                FieldSpec::new("first_name", Component(1, 2), String, 40),
                FieldSpec::new("middle_name", Component(1, 3), String, 40),
            ],
        ),
        SequenceSpec::plain(7, &[FieldSpec::new("birth_date", Repetition(1), Date, 26)]),
        SequenceSpec::plain(8, &[FieldSpec::new("sex", Repetition(1), String, 1)]),
        SequenceSpec::of(
            11,
            &composites::XAD,
            &[
                FieldSpec::new("address_street", Component(1, 1), String, 120),
                FieldSpec::new("address_city", Component(1, 3), String, 50),
                FieldSpec::new("address_state", Component(1, 4), String, 50),
                FieldSpec::new("address_zip", Component(1, 5), String, 12),
                FieldSpec::new("address_country", Component(1, 6), String, 3),
            ],
        ),
        SequenceSpec::of(
            13,
            &composites::XTN,
            &[FieldSpec::new("phone_home", Component(1, 1), String, 40)],
        ),
        SequenceSpec::of(
            18,
            &composites::CX,
            &[FieldSpec::new("account_number", Component(1, 1), String, 20)],
        ),
        SequenceSpec::plain(
            19,
            &[FieldSpec::new("ssn", Repetition(1), String, 16)],
        ),
    ],
};

/// Patient visit.
pub static PV1: SegmentSpec = SegmentSpec {
    id: "PV1",
    sequences: &[
        SequenceSpec::plain(1, &[FieldSpec::new("set_id", Repetition(1), Integer, 4)]),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("patient_class", Repetition(1), String, 1)],
        ),
        SequenceSpec::of(
            3,
            &composites::PL,
            &[
                FieldSpec::new("point_of_care", Component(1, 1), String, 20),
                FieldSpec::new("room", Component(1, 2), String, 20),
                FieldSpec::new("bed", Component(1, 3), String, 20),
            ],
        ),
        SequenceSpec::of(
            7,
            &composites::XCN,
            &[
                FieldSpec::new("attending_doctor_id", Component(1, 1), String, 20),
                FieldSpec::new("attending_doctor_last_name", Component(1, 2), String, 40),
                FieldSpec::new("attending_doctor_first_name", Component(1, 3), String, 40),
            ],
        ),
        SequenceSpec::of(
            19,
            &composites::CX,
            &[FieldSpec::new("visit_number", Component(1, 1), String, 20)],
        ),
        SequenceSpec::plain(
            44,
            &[FieldSpec::new("admit_datetime", Repetition(1), DateTime, 26)],
        ),
    ],
};

/// Procedures.
pub static PR1: SegmentSpec = SegmentSpec {
    id: "PR1",
    sequences: &[
        SequenceSpec::plain(1, &[FieldSpec::new("set_id", Repetition(1), Integer, 4)]),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("coding_method", Repetition(1), String, 3)],
        ),
        SequenceSpec::of(
            3,
            &composites::CE,
            &[
                FieldSpec::new("procedure_id", Component(1, 1), String, 10),
                FieldSpec::new("procedure_description", Component(1, 2), String, 40),
                FieldSpec::new("procedure_coding_system", Component(1, 3), String, 12),
            ],
        ),
        SequenceSpec::plain(
            5,
            &[FieldSpec::new("procedure_datetime", Repetition(1), DateTime, 26)],
        ),
        SequenceSpec::plain(
            6,
            &[FieldSpec::new("functional_type", Repetition(1), String, 2)],
        ),
    ],
};

/// Observation/result.
pub static OBX: SegmentSpec = SegmentSpec {
    id: "OBX",
    sequences: &[
        SequenceSpec::plain(1, &[FieldSpec::new("set_id", Repetition(1), Integer, 10)]),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("value_type", Repetition(1), String, 3)],
        ),
        SequenceSpec::of(
            3,
            &composites::CE,
            &[
                FieldSpec::new("observation_id", Component(1, 1), String, 30),
                FieldSpec::new("observation_text", Component(1, 2), String, 40),
                FieldSpec::new("observation_coding_system", Component(1, 3), String, 12),
            ],
        ),
        SequenceSpec::plain(
            4,
            &[FieldSpec::new("observation_sub_id", Repetition(1), String, 20)],
        ),
        SequenceSpec::plain(
            5,
            &[FieldSpec::new("observation_value", Repetition(1), String, 65536)],
        ),
        SequenceSpec::of(
            6,
            &composites::CE,
            &[
                FieldSpec::new("units_id", Component(1, 1), String, 30),
                FieldSpec::new("units_text", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::plain(
            7,
            &[FieldSpec::new("reference_range", Repetition(1), String, 60)],
        ),
        SequenceSpec::plain(
            11,
            &[FieldSpec::new("result_status", Repetition(1), String, 1)],
        ),
        SequenceSpec::plain(
            14,
            &[FieldSpec::new("observation_datetime", Repetition(1), DateTime, 26)],
        ),
    ],
};

/// Notes and comments.
pub static NTE: SegmentSpec = SegmentSpec {
    id: "NTE",
    sequences: &[
        SequenceSpec::plain(1, &[FieldSpec::new("set_id", Repetition(1), Integer, 4)]),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("source_of_comment", Repetition(1), String, 8)],
        ),
        SequenceSpec::plain(
            3,
            &[FieldSpec::new("comment", Repetition(1), String, 65536)],
        ),
    ],
};

/// Authorization information.
pub static AUT: SegmentSpec = SegmentSpec {
    id: "AUT",
    sequences: &[
        SequenceSpec::of(
            1,
            &composites::CE,
            &[
                FieldSpec::new("plan_id", Component(1, 1), String, 10),
                FieldSpec::new("plan_name", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::of(
            2,
            &composites::CE,
            &[
                FieldSpec::new("company_id", Component(1, 1), String, 10),
                FieldSpec::new("company_name", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::plain(
            4,
            &[FieldSpec::new("effective_date", Repetition(1), Date, 8)],
        ),
        SequenceSpec::plain(
            5,
            &[FieldSpec::new("expiration_date", Repetition(1), Date, 8)],
        ),
        SequenceSpec::of(
            6,
            &composites::EI,
            &[
                FieldSpec::new("authorization_id", Component(1, 1), String, 30),
                FieldSpec::new("authorization_namespace", Component(1, 2), String, 30),
            ],
        ),
        SequenceSpec::of(
            7,
            &composites::MO,
            &[FieldSpec::new("reimbursement_limit", Component(1, 1), Float, 25)],
        ),
        SequenceSpec::plain(
            8,
            &[FieldSpec::new("requested_treatments", Repetition(1), Integer, 2)],
        ),
        SequenceSpec::plain(
            9,
            &[FieldSpec::new("authorized_treatments", Repetition(1), Integer, 2)],
        ),
        SequenceSpec::plain(
            10,
            &[FieldSpec::new("process_date", Repetition(1), DateTime, 26)],
        ),
    ],
};

/// Authorization extension (site-defined).
pub static ZAU: SegmentSpec = SegmentSpec {
    id: "ZAU",
    sequences: &[
        SequenceSpec::of(
            1,
            &composites::EI,
            &[FieldSpec::new("prior_authorization_id", Component(1, 1), String, 30)],
        ),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("authorization_status", Repetition(1), String, 4)],
        ),
        SequenceSpec::of(
            3,
            &composites::CE,
            &[
                FieldSpec::new("denial_reason", Component(1, 1), String, 10),
                FieldSpec::new("denial_text", Component(1, 2), String, 61),
            ],
        ),
        SequenceSpec::of(
            4,
            &composites::MO,
            &[
                FieldSpec::new("copay_amount", Component(1, 1), Float, 25),
                FieldSpec::new("copay_denomination", Component(1, 2), String, 12),
            ],
        ),
    ],
};

/// Insurance.
pub static IN1: SegmentSpec = SegmentSpec {
    id: "IN1",
    sequences: &[
        SequenceSpec::plain(1, &[FieldSpec::new("set_id", Repetition(1), Integer, 4)]),
        SequenceSpec::of(
            2,
            &composites::CE,
            &[
                FieldSpec::new("plan_id", Component(1, 1), String, 10),
                FieldSpec::new("plan_text", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::of(
            3,
            &composites::CX,
            &[FieldSpec::new("company_id", Component(1, 1), String, 20)],
        ),
        SequenceSpec::plain(
            4,
            &[FieldSpec::new("company_name", Repetition(1), String, 130)],
        ),
        SequenceSpec::of(
            5,
            &composites::XAD,
            &[
                FieldSpec::new("company_street", Component(1, 1), String, 120),
                FieldSpec::new("company_city", Component(1, 3), String, 50),
            ],
        ),
        SequenceSpec::plain(
            36,
            &[FieldSpec::new("policy_number", Repetition(1), String, 15)],
        ),
    ],
};

/// Query acknowledgment.
pub static QAK: SegmentSpec = SegmentSpec {
    id: "QAK",
    sequences: &[
        SequenceSpec::plain(
            1,
            &[FieldSpec::new("query_tag", Repetition(1), String, 32)],
        ),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("query_response_status", Repetition(1), String, 2)],
        ),
    ],
};

/// Query parameter definition.
pub static QPD: SegmentSpec = SegmentSpec {
    id: "QPD",
    sequences: &[
        SequenceSpec::of(
            1,
            &composites::CE,
            &[
                FieldSpec::new("query_name", Component(1, 1), String, 20),
                FieldSpec::new("query_name_text", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::plain(
            2,
            &[FieldSpec::new("query_tag", Repetition(1), String, 32)],
        ),
        SequenceSpec::plain(
            3,
            &[FieldSpec::new("user_parameters", Repetition(1), String, 256)],
        ),
    ],
};

/// Provider data.
pub static PRD: SegmentSpec = SegmentSpec {
    id: "PRD",
    sequences: &[
        SequenceSpec::of(
            1,
            &composites::CE,
            &[
                FieldSpec::new("provider_role", Component(1, 1), String, 10),
                FieldSpec::new("provider_role_text", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::of(
            2,
            &composites::XPN,
            &[
                FieldSpec::new("provider_last_name", Component(1, 1), String, 40),
                FieldSpec::new("provider_first_name", Component(1, 2), String, 40),
            ],
        ),
        SequenceSpec::of(
            3,
            &composites::XAD,
            &[
                FieldSpec::new("provider_street", Component(1, 1), String, 120),
                FieldSpec::new("provider_city", Component(1, 3), String, 50),
            ],
        ),
        SequenceSpec::of(
            7,
            &composites::PI,
            &[
                FieldSpec::new("provider_id", Component(1, 1), String, 20),
                FieldSpec::new("provider_id_type", Component(1, 2), String, 8),
                FieldSpec::new("alternate_provider_id", Component(2, 1), String, 20),
                FieldSpec::new("alternate_provider_id_type", Component(2, 2), String, 8),
            ],
        ),
    ],
};

/// Continuation pointer.
pub static DSC: SegmentSpec = SegmentSpec {
    id: "DSC",
    sequences: &[SequenceSpec::plain(
        1,
        &[FieldSpec::new("continuation_pointer", Repetition(1), String, 180)],
    )],
};

/// Every segment table, for registry lookups and validation.
pub static ALL: &[&SegmentSpec] = &[
    &MSH, &MSA, &ERR, &EVN, &PID, &PV1, &PR1, &OBX, &NTE, &AUT, &ZAU, &IN1, &QAK, &QPD, &PRD, &DSC,
];
