//! Host-supplied configuration.
//!
//! The poller owns its configuration store; this crate only reads the handful
//! of values that shape a query. A [`Config`] is built once, wrapped in an
//! `Arc` by the client, and never mutated afterwards, so concurrent queries
//! can share it freely.

use std::path::PathBuf;

/// Retries used when neither the request nor the config supplies a count.
pub const DEFAULT_RETRIES: u32 = 3;

/// OIDs per bulk request used when neither the request nor the config supplies one.
pub const DEFAULT_MAX_OIDS: u32 = 10;

/// Configuration read by the query executor and the normalizer.
///
/// # Example
///
/// ```rust
/// use snmp_query::Config;
///
/// let config = Config {
///     snmp_retries: Some(2),
///     banned_snmp_strings: vec!["No Response".into(), "Error".into()],
///     ..Config::default()
/// };
/// assert_eq!(config.default_retries(), 2);
/// assert_eq!(config.default_max_oids(), 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Default retry count for requests that carry none.
    pub snmp_retries: Option<u32>,
    /// Default max OIDs per bulk request for walks that carry none.
    pub max_get_size: Option<u32>,
    /// Path to `snmpget`.
    pub path_snmpget: PathBuf,
    /// Path to `snmpgetnext`.
    pub path_snmpgetnext: PathBuf,
    /// Path to `snmpwalk`.
    pub path_snmpwalk: PathBuf,
    /// Path to `snmpbulkwalk`.
    pub path_snmpbulkwalk: PathBuf,
    /// Pass `-Cc` so the tools do not abort on non-increasing OIDs.
    pub oid_increasing_check_disable: bool,
    /// Emit warnings for unresponsive agents.
    pub snmp_logging: bool,
    /// Substrings that mark a value as garbage (vendor error banners and the like).
    pub banned_snmp_strings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snmp_retries: None,
            max_get_size: None,
            path_snmpget: PathBuf::from("/usr/bin/snmpget"),
            path_snmpgetnext: PathBuf::from("/usr/bin/snmpgetnext"),
            path_snmpwalk: PathBuf::from("/usr/bin/snmpwalk"),
            path_snmpbulkwalk: PathBuf::from("/usr/bin/snmpbulkwalk"),
            oid_increasing_check_disable: false,
            snmp_logging: true,
            banned_snmp_strings: Vec::new(),
        }
    }
}

impl Config {
    /// Retry count applied when a request has none (or zero).
    pub fn default_retries(&self) -> u32 {
        self.snmp_retries.unwrap_or(DEFAULT_RETRIES)
    }

    /// Max OIDs per bulk request applied when a walk has none (or zero).
    pub fn default_max_oids(&self) -> u32 {
        match self.max_get_size {
            Some(n) if n > 0 => n,
            _ => DEFAULT_MAX_OIDS,
        }
    }

    /// Whether `value` contains any banned substring.
    pub fn is_banned(&self, value: &str) -> bool {
        self.banned_snmp_strings
            .iter()
            .any(|item| !item.is_empty() && value.contains(item.as_str()))
    }
}
