//! The two shipped record layouts and their motor parameters.

use crate::{FieldDef, FieldEncoding, FieldSource, RecordLayout};

/// Constant mechanical speed reported in every sample [RPM].
pub const SPEED_RPM: f64 = 500.0;

/// Direct-axis inductance [H].
pub const D_AXIS_INDUCTANCE_H: f64 = 0.01;

/// Quadrature-axis inductance [H].
pub const Q_AXIS_INDUCTANCE_H: f64 = 0.02;

/// Stator winding resistance [Ohm].
pub const STATOR_RESISTANCE_OHM: f64 = 0.001;

/// Permanent-magnet flux linkage [Wb].
pub const FLUX_LINKAGE_WB: f64 = 0.003;

/// Winding temperature [degC].
pub const WINDING_TEMPERATURE_C: f64 = 80.0;

/// Inclusive direct-axis bound for the extended layout; the index wraps back
/// to zero once it would exceed this.
pub const EXTENDED_ID_MAX: i32 = 1000;

/// A shipped layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    /// Four int16le fields: `id, iq, speed, torque`. The direct axis never
    /// wraps.
    Basic,

    /// Nine float32le fields:
    /// `id, iq, speed, torque, ld, lq, rs, lambda, temp`. The direct axis
    /// wraps past [`EXTENDED_ID_MAX`].
    Extended,
}

impl LayoutKind {
    /// Returns the layout definition for this selector.
    #[must_use]
    pub fn layout(self) -> RecordLayout {
        match self {
            Self::Basic => RecordLayout::basic(),
            Self::Extended => RecordLayout::extended(),
        }
    }

    /// Returns the sample count used by the reference fixture configuration.
    #[must_use]
    pub const fn reference_sample_count(self) -> u64 {
        match self {
            Self::Basic => 32,
            Self::Extended => 8_000_000,
        }
    }

    /// Returns the selector's canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Extended => "extended",
        }
    }
}

impl RecordLayout {
    /// The basic fixture layout: 8-byte records of four int16le fields.
    #[must_use]
    pub fn basic() -> Self {
        Self::builder()
            .field(FieldDef::new(
                "id",
                FieldEncoding::Int16Le,
                FieldSource::DirectCurrent,
            ))
            .field(FieldDef::new(
                "iq",
                FieldEncoding::Int16Le,
                FieldSource::QuadratureCurrent,
            ))
            .field(FieldDef::constant(
                "speed",
                FieldEncoding::Int16Le,
                SPEED_RPM,
            ))
            .field(FieldDef::new(
                "torque",
                FieldEncoding::Int16Le,
                FieldSource::TorqueEstimate,
            ))
            .build()
            .expect("basic layout definition is valid")
    }

    /// The extended fixture layout: 36-byte records of nine float32le fields.
    #[must_use]
    pub fn extended() -> Self {
        Self::builder()
            .field(FieldDef::new(
                "id",
                FieldEncoding::Float32Le,
                FieldSource::DirectCurrent,
            ))
            .field(FieldDef::new(
                "iq",
                FieldEncoding::Float32Le,
                FieldSource::QuadratureCurrent,
            ))
            .field(FieldDef::constant(
                "speed",
                FieldEncoding::Float32Le,
                SPEED_RPM,
            ))
            .field(FieldDef::new(
                "torque",
                FieldEncoding::Float32Le,
                FieldSource::TorqueEstimate,
            ))
            .field(FieldDef::constant(
                "ld",
                FieldEncoding::Float32Le,
                D_AXIS_INDUCTANCE_H,
            ))
            .field(FieldDef::constant(
                "lq",
                FieldEncoding::Float32Le,
                Q_AXIS_INDUCTANCE_H,
            ))
            .field(FieldDef::constant(
                "rs",
                FieldEncoding::Float32Le,
                STATOR_RESISTANCE_OHM,
            ))
            .field(FieldDef::constant(
                "lambda",
                FieldEncoding::Float32Le,
                FLUX_LINKAGE_WB,
            ))
            .field(FieldDef::constant(
                "temp",
                FieldEncoding::Float32Le,
                WINDING_TEMPERATURE_C,
            ))
            .id_max(EXTENDED_ID_MAX)
            .build()
            .expect("extended layout definition is valid")
    }
}
