//! Command-line argument structures for the snmp-query CLI tools.
//!
//! This module provides reusable clap argument structures for the `snmpq-*` tools.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Version;
use crate::client::{DEFAULT_PORT, Request};
use crate::config::Config;

/// SNMP version for CLI argument parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SnmpVersion {
    /// SNMPv1
    #[value(name = "1")]
    V1,
    /// SNMPv2c (default)
    #[default]
    #[value(name = "2c")]
    V2c,
    /// SNMPv3
    #[value(name = "3")]
    V3,
}

impl From<SnmpVersion> for Version {
    fn from(v: SnmpVersion) -> Self {
        match v {
            SnmpVersion::V1 => Version::V1,
            SnmpVersion::V2c => Version::V2c,
            SnmpVersion::V3 => Version::V3,
        }
    }
}

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `OID = value` lines.
    #[default]
    Human,
    /// JSON output for scripting.
    Json,
    /// Raw tab-separated output for scripting.
    Raw,
}

/// Common arguments shared across all CLI tools.
#[derive(Debug, Parser)]
pub struct CommonArgs {
    /// Target host or host:port (default port 161).
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// SNMP version: 1, 2c, or 3.
    #[arg(short = 'v', long = "snmp-version", default_value = "2c")]
    pub snmp_version: SnmpVersion,

    /// Community string (v1/v2c).
    #[arg(short = 'c', long = "community", default_value = "public")]
    pub community: String,

    /// Request timeout in milliseconds.
    #[arg(short = 't', long = "timeout", default_value = "1000")]
    pub timeout_ms: u32,

    /// Retry count (0 uses the configured default).
    #[arg(short = 'r', long = "retries", default_value = "0")]
    pub retries: u32,

    /// OIDs per bulk request for walks (0 uses the configured default).
    #[arg(long = "max-oids", default_value = "0")]
    pub max_oids: u32,
}

impl CommonArgs {
    /// Split the target into host and port, defaulting to port 161.
    ///
    /// A bare IPv6 address is taken as a host; use `[addr]:port` to give a
    /// port with one.
    pub fn host_port(&self) -> Result<(String, u16), String> {
        let target = self.target.trim();
        if target.is_empty() {
            return Err("empty target".into());
        }

        if let Some(rest) = target.strip_prefix('[') {
            let (host, tail) = rest
                .split_once(']')
                .ok_or_else(|| format!("invalid target '{}': unclosed '['", target))?;
            let port = match tail.strip_prefix(':') {
                Some(port) => parse_port(target, port)?,
                None if tail.is_empty() => DEFAULT_PORT,
                None => return Err(format!("invalid target '{}'", target)),
            };
            return Ok((host.to_string(), port));
        }

        match target.split_once(':') {
            Some((host, port)) if !port.contains(':') => {
                Ok((host.to_string(), parse_port(target, port)?))
            }
            _ => Ok((target.to_string(), DEFAULT_PORT)),
        }
    }
}

fn parse_port(target: &str, port: &str) -> Result<u16, String> {
    port.parse()
        .map_err(|_| format!("invalid port in target '{}'", target))
}

/// SNMPv3 security arguments.
#[derive(Debug, Parser)]
pub struct V3Args {
    /// Security name/username (implies -v 3).
    #[arg(short = 'u', long = "username")]
    pub username: Option<String>,

    /// Authentication protocol: MD5, SHA, SHA-224, SHA-256, SHA-384, SHA-512.
    #[arg(short = 'a', long = "auth-protocol", default_value = "MD5")]
    pub auth_protocol: String,

    /// Authentication passphrase.
    #[arg(short = 'A', long = "auth-password")]
    pub auth_password: Option<String>,

    /// Privacy protocol: [None], DES, AES, AES-192, AES-256.
    #[arg(short = 'x', long = "priv-protocol", default_value = "[None]")]
    pub priv_protocol: String,

    /// Privacy passphrase.
    #[arg(short = 'X', long = "priv-password")]
    pub priv_password: Option<String>,

    /// Context name.
    #[arg(short = 'n', long = "context")]
    pub context: Option<String>,
}

impl V3Args {
    /// Check if V3 mode is enabled (username provided).
    pub fn is_v3(&self) -> bool {
        self.username.is_some()
    }

    /// Validate V3 arguments and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.is_some() {
            if self.auth_password.is_none() {
                return Err("authentication password (-A) required for SNMPv3".into());
            }
        }
        Ok(())
    }
}

/// Locations of the net-snmp tools and poller-wide query settings.
#[derive(Debug, Parser)]
pub struct ToolArgs {
    /// Path to snmpget.
    #[arg(long = "snmpget", default_value = "/usr/bin/snmpget")]
    pub snmpget: PathBuf,

    /// Path to snmpgetnext.
    #[arg(long = "snmpgetnext", default_value = "/usr/bin/snmpgetnext")]
    pub snmpgetnext: PathBuf,

    /// Path to snmpwalk.
    #[arg(long = "snmpwalk", default_value = "/usr/bin/snmpwalk")]
    pub snmpwalk: PathBuf,

    /// Path to snmpbulkwalk.
    #[arg(long = "snmpbulkwalk", default_value = "/usr/bin/snmpbulkwalk")]
    pub snmpbulkwalk: PathBuf,

    /// Blank any value containing this text (repeatable).
    #[arg(long = "banned", value_name = "TEXT")]
    pub banned: Vec<String>,

    /// Do not abort walks on non-increasing OIDs (-Cc).
    #[arg(long = "no-increasing-check")]
    pub no_increasing_check: bool,

    /// Suppress timeout warnings.
    #[arg(long = "quiet-timeouts")]
    pub quiet_timeouts: bool,
}

impl ToolArgs {
    /// Build the client configuration.
    pub fn config(&self) -> Config {
        Config {
            path_snmpget: self.snmpget.clone(),
            path_snmpgetnext: self.snmpgetnext.clone(),
            path_snmpwalk: self.snmpwalk.clone(),
            path_snmpbulkwalk: self.snmpbulkwalk.clone(),
            oid_increasing_check_disable: self.no_increasing_check,
            snmp_logging: !self.quiet_timeouts,
            banned_snmp_strings: self.banned.clone(),
            ..Config::default()
        }
    }
}

/// Build a request from the common and V3 arguments.
pub fn build_request(common: &CommonArgs, v3: &V3Args) -> Result<Request, String> {
    let (host, port) = common.host_port()?;
    let version = if v3.is_v3() {
        Version::V3
    } else {
        common.snmp_version.into()
    };

    let mut request = Request::new(host, version.as_number())
        .port(port)
        .timeout_ms(common.timeout_ms)
        .retries(common.retries)
        .max_oids(common.max_oids);

    if version.uses_community() {
        request = request.community(common.community.as_str());
    } else {
        request = request
            .username(v3.username.clone().unwrap_or_default())
            .auth_protocol(v3.auth_protocol.as_str())
            .auth_password(v3.auth_password.clone().unwrap_or_default())
            .priv_protocol(v3.priv_protocol.as_str())
            .priv_password(v3.priv_password.clone().unwrap_or_default())
            .context(v3.context.clone().unwrap_or_default());
    }
    Ok(request)
}

/// Output control arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format: human, json, or raw.
    #[arg(short = 'O', long = "output", default_value = "human")]
    pub format: OutputFormat,

    /// Show request timing.
    #[arg(long = "timing")]
    pub timing: bool,

    /// Disable well-known OID name hints.
    #[arg(long = "no-hints")]
    pub no_hints: bool,

    /// Enable debug logging (snmp_query=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (snmp_query=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Initialize tracing based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "snmp_query=trace"
        } else if self.debug {
            "snmp_query=debug"
        } else {
            "snmp_query=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
