//! The sample-sweep generator loop and file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytestream::ByteWriter;
use layout::RecordLayout;
use sweep::SweepState;

use crate::encode::encode_record;
use crate::error::{GenerateError, GenerateResult};

/// Outcome of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    /// Number of records written.
    pub records: u64,
    /// Total bytes written (`records * record_size`).
    pub bytes_written: u64,
}

/// Validates a generation configuration without writing anything.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidSampleCount`] for a zero sample count and
/// [`GenerateError::Layout`] for an invalid layout.
pub fn validate_config(layout: &RecordLayout, sample_count: u64) -> GenerateResult<()> {
    if sample_count == 0 {
        return Err(GenerateError::InvalidSampleCount);
    }
    layout.validate()?;
    Ok(())
}

/// Appends exactly `sample_count` records to `out` in generation order.
///
/// Records are fixed-size with no gaps or padding; the sweep cursor starts at
/// `(0, 0)` and advances once per record under the layout's wrap bound.
/// Returns the number of bytes written.
///
/// # Errors
///
/// Fails fast on configuration errors before any byte is written; a write
/// failure aborts immediately and is propagated as [`GenerateError::Io`].
pub fn write_samples<W: Write>(
    out: &mut W,
    layout: &RecordLayout,
    sample_count: u64,
) -> GenerateResult<u64> {
    validate_config(layout, sample_count)?;

    let id_max = layout.id_max;
    let mut state = SweepState::origin();
    let mut scratch = ByteWriter::with_capacity(layout.record_size());

    for _ in 0..sample_count {
        scratch.clear();
        encode_record(layout, state, &mut scratch);
        out.write_all(scratch.as_bytes())?;
        state = state.advance(id_max);
    }

    Ok(sample_count * layout.record_size() as u64)
}

/// Generates a fixture file at `path`, creating or overwriting it.
///
/// Configuration is validated before the destination is opened, so a bad
/// configuration leaves the filesystem untouched. Output is buffered and
/// flushed; the file handle is released on both success and failure. A
/// mid-write I/O fault leaves a truncated file behind (no retry, no cleanup).
///
/// # Errors
///
/// Returns [`GenerateError::InvalidSampleCount`] / [`GenerateError::Layout`]
/// for bad configuration and [`GenerateError::Io`] for open/write/flush
/// failures.
pub fn generate_file(
    path: &Path,
    layout: &RecordLayout,
    sample_count: u64,
) -> GenerateResult<GenerateReport> {
    validate_config(layout, sample_count)?;

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let bytes_written = write_samples(&mut out, layout, sample_count)?;
    out.flush()?;

    Ok(GenerateReport {
        records: sample_count,
        bytes_written,
    })
}
