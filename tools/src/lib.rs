//! Fixture generation tooling for drivebin.
//!
//! This crate backs the `drivebin` binary:
//!
//! - Run summaries tying a generated fixture to the exact layout, sample
//!   count, and byte count that produced it
//! - Layout reports for the `describe` subcommand, as JSON or a
//!   human-readable table
//!
//! # Design Principles
//!
//! - **First-class tooling** - These helpers are part of the product, not
//!   afterthoughts.
//! - **Configuration only** - Nothing here reads fixture data back; the
//!   generator's output is owned by downstream consumers.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fixture::GenerateReport;
use layout::{layout_hash, FieldEncoding, LayoutKind, RecordLayout};
use serde::Serialize;

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Layout selector name (`basic` or `extended`).
    pub layout: String,
    /// Deterministic layout hash, zero-padded hex.
    pub layout_hash: String,
    /// Serialized size of one record in bytes.
    pub record_size: usize,
    /// Number of records written.
    pub sample_count: u64,
    /// Total bytes written.
    pub bytes_written: u64,
    /// Destination path of the fixture.
    pub output: String,
}

impl RunSummary {
    /// Builds a summary from a finished run.
    #[must_use]
    pub fn new(
        kind: LayoutKind,
        layout: &RecordLayout,
        report: GenerateReport,
        output: &Path,
    ) -> Self {
        Self {
            layout: kind.as_str().to_string(),
            layout_hash: format_hash(layout_hash(layout)),
            record_size: layout.record_size(),
            sample_count: report.records,
            bytes_written: report.bytes_written,
            output: output.display().to_string(),
        }
    }
}

/// Writes a run summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(path, contents).with_context(|| format!("write summary {}", path.display()))?;
    Ok(())
}

/// One row of a layout report.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRow {
    pub name: String,
    pub encoding: &'static str,
    pub width: usize,
    pub offset: usize,
}

/// A layout described for humans and scripts.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub layout: String,
    pub layout_hash: String,
    pub record_size: usize,
    pub id_max: Option<i32>,
    pub reference_sample_count: u64,
    pub fields: Vec<FieldRow>,
    /// The full declarative definition, including value sources.
    pub definition: RecordLayout,
}

/// Builds the report for a shipped layout.
#[must_use]
pub fn describe_layout(kind: LayoutKind) -> LayoutReport {
    let layout = kind.layout();
    let mut offset = 0;
    let fields = layout
        .fields
        .iter()
        .map(|field| {
            let row = FieldRow {
                name: field.name.clone(),
                encoding: encoding_name(field.encoding),
                width: field.encoding.width(),
                offset,
            };
            offset += field.encoding.width();
            row
        })
        .collect();

    LayoutReport {
        layout: kind.as_str().to_string(),
        layout_hash: format_hash(layout_hash(&layout)),
        record_size: layout.record_size(),
        id_max: layout.id_max,
        reference_sample_count: kind.reference_sample_count(),
        fields,
        definition: layout,
    }
}

/// Formats a layout report as a human-readable table.
#[must_use]
pub fn format_describe_pretty(report: &LayoutReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "layout: {} (hash {})", report.layout, report.layout_hash);
    let wrap = match report.id_max {
        Some(id_max) => format!("id wraps past {id_max}"),
        None => "id unbounded".to_string(),
    };
    let _ = writeln!(
        out,
        "record size: {} bytes, {}, reference samples: {}",
        report.record_size, wrap, report.reference_sample_count
    );
    let _ = writeln!(out, "{:>8}  {:>5}  {:<10} name", "offset", "width", "encoding");
    for row in &report.fields {
        let _ = writeln!(
            out,
            "{:>8}  {:>5}  {:<10} {}",
            row.offset, row.width, row.encoding, row.name
        );
    }
    out
}

fn encoding_name(encoding: FieldEncoding) -> &'static str {
    match encoding {
        FieldEncoding::Int16Le => "int16le",
        FieldEncoding::Float32Le => "float32le",
    }
}

fn format_hash(hash: u64) -> String {
    format!("{hash:016x}")
}
