//! Walk response shaping.
//!
//! Turns the raw output of either transport into ordered [`WalkRecord`]s.
//! Records whose raw value contains a banned substring are dropped outright,
//! as are records whose value is the literal `NULL`; everything else is kept
//! in the order the transport returned it, even when its normalized value is
//! empty.

use crate::config::Config;
use crate::format::normalize;
use crate::transport::RawResult;

/// One OID/value pair from a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkRecord {
    /// Numeric OID without the leading dot.
    pub oid: String,
    /// Normalized value.
    pub value: String,
}

impl WalkRecord {
    /// Create a record.
    pub fn new(oid: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for WalkRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}

/// Shape whatever a transport returned for a walk.
pub(crate) fn shape(raw: &RawResult, config: &Config) -> Vec<WalkRecord> {
    match raw {
        RawResult::Lines(lines) => from_lines(lines, config),
        RawResult::Records(records) => from_records(records, config),
        RawResult::Text(text) => from_lines(std::slice::from_ref(text), config),
    }
}

/// `OID = value` lines from the external walk tools.
fn from_lines(lines: &[String], config: &Config) -> Vec<WalkRecord> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if config.is_banned(line) || line == "NULL" {
            continue;
        }
        let Some((oid, _)) = line.split_once('=') else {
            tracing::trace!(target: "snmp_query::client", %line, "skipping walk line without '='");
            continue;
        };
        out.push(WalkRecord {
            oid: oid_key(oid),
            value: normalize(line, true, config),
        });
    }
    out
}

/// OID/value pairs from a binding.
fn from_records(records: &[(String, String)], config: &Config) -> Vec<WalkRecord> {
    records
        .iter()
        .filter(|(_, value)| !config.is_banned(value) && value != "NULL")
        .map(|(oid, value)| WalkRecord {
            oid: oid_key(oid),
            value: normalize(value, false, config),
        })
        .collect()
}

fn oid_key(oid: &str) -> String {
    let oid = oid.trim();
    oid.strip_prefix('.').unwrap_or(oid).to_string()
}
