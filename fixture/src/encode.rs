//! Record serialization against a declarative layout.

use bytestream::ByteWriter;
use layout::{FieldEncoding, FieldSource, RecordLayout};
use sweep::SweepState;

/// Returns the value a field source produces at the given cursor position.
///
/// Values are derived in `f64` and narrowed once at encode time, so the
/// truncation policy is owned entirely by the field's encoding.
#[must_use]
pub fn source_value(source: FieldSource, state: SweepState) -> f64 {
    match source {
        FieldSource::DirectCurrent => f64::from(state.id),
        FieldSource::QuadratureCurrent => f64::from(state.iq),
        FieldSource::TorqueEstimate => state.torque_estimate(),
        FieldSource::Constant(value) => value,
    }
}

/// Serializes one record at the cursor position into the writer.
///
/// Fields are written in declared order at their fixed widths, little-endian,
/// with no padding. Int16 fields truncate toward zero; float32 fields narrow
/// with a single `f64 -> f32` cast.
pub fn encode_record(layout: &RecordLayout, state: SweepState, writer: &mut ByteWriter) {
    for field in &layout.fields {
        let value = source_value(field.source, state);
        match field.encoding {
            FieldEncoding::Int16Le => writer.write_i16_le(value as i16),
            FieldEncoding::Float32Le => writer.write_f32_le(value as f32),
        }
    }
}
