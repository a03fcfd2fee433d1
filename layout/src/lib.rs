//! Record layout and field definitions for the drivebin fixture generator.
//!
//! This crate defines how a telemetry sample is laid out on disk:
//! - Field encodings (int16le, float32le) and serialization order
//! - Value sources tying each field to the sweep state or a constant
//! - The shipped `basic` and `extended` layouts with their motor parameters
//! - Deterministic layout hashing
//!
//! # Design Principles
//!
//! - **Declarative** - A layout is plain data; interpretation lives in the
//!   generator.
//! - **Validated** - Layouts are checked at build time, before any byte is
//!   written.
//! - **Deterministic hashing** - The layout hash is stable given the same
//!   definition.

mod error;
mod field;
mod hash;
mod layout;
mod presets;

pub use error::{LayoutError, LayoutResult};
pub use field::{FieldDef, FieldEncoding, FieldSource};
pub use hash::layout_hash;
pub use layout::{LayoutBuilder, RecordLayout};
pub use presets::{
    LayoutKind, D_AXIS_INDUCTANCE_H, EXTENDED_ID_MAX, FLUX_LINKAGE_WB, Q_AXIS_INDUCTANCE_H,
    SPEED_RPM, STATOR_RESISTANCE_OHM, WINDING_TEMPERATURE_C,
};
