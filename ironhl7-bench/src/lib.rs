//! # IronHL7 Bench
//!
//! Benchmarking utilities for IronHL7 performance testing.

/// A representative authorization request message in wire form.
pub const SAMPLE_WIRE: &[u8] = b"MSH|^~\\&|CLIENTHL7|CLI01020304|SERVHL7|PREPAGA^112233^IIN|20120201101155||ZQA^Z02^ZQA_Z02|00XX20120201101155|P|2.4|||ER|SU|ARG\rPID|1||504599^^^223344&&IIN||APELLIDO^NOMBRE\rPR1|1||420101^CONSULTA EN CONSULTORIO^NA\rOBX|1|ST|COPAGO||10.50\rAUT|PLAN123^PLAN|112233^PREPAGA||20120201|20121231|5699||1|1\r";

/// A single dense field exercising every delimiter level.
pub const SAMPLE_FIELD: &[u8] = b"504599^223344&&IIN&^~504600^223355&&IIN";
