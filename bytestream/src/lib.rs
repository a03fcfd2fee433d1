//! Little-endian byte packing primitives for the drivebin fixture generator.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for fixed-width
//! little-endian encoding and decoding. It is designed for bounded,
//! panic-free operation with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about layouts,
//!   sweeps, or telemetry fields.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteWriter, ByteReader};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_i16_le(500);
//! writer.write_f32_le(0.01);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_i16_le().unwrap(), 500);
//! assert_eq!(reader.read_f32_le().unwrap(), 0.01);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
