//! Sample-sweep generation and binary serialization for drivebin telemetry
//! fixtures.
//!
//! This crate is the generator core: it interprets a declarative
//! [`RecordLayout`](layout::RecordLayout) against the
//! [`SweepState`](sweep::SweepState) cursor and streams fixed-size binary
//! records into any [`std::io::Write`] sink or straight into a file.
//!
//! # Design Principles
//!
//! - **Deterministic** - Identical configuration produces byte-identical
//!   output; there is no clock, randomness, or environment dependence.
//! - **Fail fast** - Configuration errors surface before any byte is
//!   written; I/O faults abort immediately with no retry.
//! - **Layouts stay data** - All interpretation of field sources happens
//!   here, keeping the layout crate free of generation logic.
//!
//! # Example
//!
//! ```
//! use fixture::write_samples;
//! use layout::RecordLayout;
//!
//! let mut buf = Vec::new();
//! let bytes = write_samples(&mut buf, &RecordLayout::basic(), 32).unwrap();
//! assert_eq!(bytes, 32 * 8);
//! ```

mod encode;
mod error;
mod generator;

pub use encode::{encode_record, source_value};
pub use error::{GenerateError, GenerateResult};
pub use generator::{generate_file, validate_config, write_samples, GenerateReport};

#[cfg(test)]
mod tests {
    use super::*;
    use layout::RecordLayout;

    #[test]
    fn public_api_exports() {
        let _ = validate_config(&RecordLayout::basic(), 1);
        let mut sink = Vec::new();
        let _ = write_samples(&mut sink, &RecordLayout::basic(), 1);
    }

    #[test]
    fn doctest_example() {
        let mut buf = Vec::new();
        let bytes = write_samples(&mut buf, &RecordLayout::basic(), 32).unwrap();
        assert_eq!(bytes, 32 * 8);
    }
}
