//! Output formatting for CLI tools.
//!
//! Supports human-readable, JSON, and raw output formats.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::cli::hints;
use crate::{Version, WalkRecord};

/// Result of a get or walk, ready for output.
#[derive(Debug, Serialize)]
pub struct OperationResult {
    pub target: String,
    pub version: String,
    pub results: Vec<ValueResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_ms: Option<f64>,
}

/// A single OID/value result.
#[derive(Debug, Serialize)]
pub struct ValueResult {
    pub oid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub value: String,
}

/// Output context for formatting.
pub struct OutputContext {
    pub format: OutputFormat,
    pub show_hints: bool,
    pub show_timing: bool,
}

impl OutputContext {
    /// Create a new output context with default settings.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_hints: true,
            show_timing: false,
        }
    }

    /// Write results to stdout.
    pub fn write_results(
        &self,
        target: &str,
        version: Version,
        records: &[WalkRecord],
        elapsed: Option<Duration>,
    ) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, target, version, records, elapsed)
    }

    /// Write results to any writer.
    pub fn write_to<W: Write>(
        &self,
        w: &mut W,
        target: &str,
        version: Version,
        records: &[WalkRecord],
        elapsed: Option<Duration>,
    ) -> io::Result<()> {
        let result = self.build_result(target, version, records, elapsed);
        match self.format {
            OutputFormat::Human => self.write_human(w, &result),
            OutputFormat::Json => self.write_json(w, &result),
            OutputFormat::Raw => self.write_raw(w, &result),
        }
    }

    fn build_result(
        &self,
        target: &str,
        version: Version,
        records: &[WalkRecord],
        elapsed: Option<Duration>,
    ) -> OperationResult {
        let results = records
            .iter()
            .map(|record| ValueResult {
                oid: record.oid.clone(),
                hint: if self.show_hints {
                    hints::lookup(&record.oid).map(String::from)
                } else {
                    None
                },
                value: record.value.clone(),
            })
            .collect();

        OperationResult {
            target: target.to_string(),
            version: version.to_string(),
            results,
            timing_ms: elapsed.map(|d| d.as_secs_f64() * 1000.0),
        }
    }

    fn write_human<W: Write>(&self, w: &mut W, result: &OperationResult) -> io::Result<()> {
        for vb in &result.results {
            if let Some(ref hint) = vb.hint {
                write!(w, "{} ({})", vb.oid, hint)?;
            } else {
                write!(w, "{}", vb.oid)?;
            }

            if vb.value.is_empty() {
                writeln!(w, " = \"\"")?;
            } else {
                writeln!(w, " = {}", vb.value)?;
            }
        }

        if self.show_timing
            && let Some(ms) = result.timing_ms
        {
            writeln!(w, "\nTiming: {:.1}ms", ms)?;
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W, result: &OperationResult) -> io::Result<()> {
        let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
        writeln!(w, "{}", json)
    }

    fn write_raw<W: Write>(&self, w: &mut W, result: &OperationResult) -> io::Result<()> {
        for vb in &result.results {
            writeln!(w, "{}\t{}", vb.oid, vb.value)?;
        }
        Ok(())
    }
}

/// Write an error message to stderr.
pub fn write_error(err: &crate::Error) {
    eprintln!("Error: {}", err);
}
