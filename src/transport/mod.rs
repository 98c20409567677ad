//! Transport layer abstraction.
//!
//! A query reaches the agent one of two ways: through an in-process protocol
//! [`Binding`] supplied by the host, or by running the net-snmp command-line
//! tools through a [`CommandRunner`]. [`select`] picks one per call; both
//! produce a [`RawResult`] for the client to normalize.

mod binding;
mod external;
mod select;
mod shell;

#[cfg(test)]
pub(crate) mod mock;

pub(crate) use binding::InProcess;
pub(crate) use external::ExternalProcess;
pub use select::{Method, select};
pub use shell::{CommandRunner, ShellRunner};

use std::future::Future;

use crate::client::{AuthContext, Target};
use crate::error::{Error, Result};
use crate::version::Version;

/// The protocol operation a call performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch one value.
    Get,
    /// Fetch the lexicographically next value.
    GetNext,
    /// Fetch a whole subtree.
    Walk,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::GetNext => write!(f, "getnext"),
            Self::Walk => write!(f, "walk"),
        }
    }
}

/// Untyped transport output, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResult {
    /// A single value from a binding.
    Text(String),
    /// Stdout lines from an external tool.
    Lines(Vec<String>),
    /// OID/value pairs from a binding walk. Values carry no OID prefix.
    Records(Vec<(String, String)>),
}

impl RawResult {
    /// Everything in the result as one space-joined string.
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join(" "),
            Self::Records(records) => records
                .iter()
                .map(|(_, value)| value.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Arguments of one in-process binding call.
#[derive(Debug)]
pub struct Session<'a> {
    /// Validated target.
    pub target: &'a Target,
    /// Authentication for the target's version.
    pub auth: &'a AuthContext,
    /// OID to query, or the subtree root for walks.
    pub oid: &'a str,
}

impl Session<'_> {
    /// Timeout in microseconds.
    pub fn timeout_micros(&self) -> u64 {
        self.target.timeout_micros()
    }

    /// Retry count.
    pub fn retries(&self) -> u32 {
        self.target.retries
    }
}

/// An in-process SNMP protocol implementation provided by the host.
///
/// Implementations receive the credentials as typed fields, never as a
/// command line. An agent that does not answer must be reported as
/// [`Error::Timeout`] so the client can log it with host and OID.
pub trait Binding: Send + Sync {
    /// Whether this binding can speak `version`.
    fn supports(&self, version: Version) -> bool;

    /// Whether walks through this binding are reliable enough to use even
    /// when the external bulk-walk tool is installed.
    fn trusts_walk(&self) -> bool {
        true
    }

    /// Fetch one value.
    fn get(&self, session: &Session<'_>) -> impl Future<Output = Result<String>> + Send;

    /// Fetch the value following the session OID.
    fn get_next(&self, session: &Session<'_>) -> impl Future<Output = Result<String>> + Send;

    /// Fetch every OID/value pair below the session OID, in agent order.
    fn walk(
        &self,
        session: &Session<'_>,
    ) -> impl Future<Output = Result<Vec<(String, String)>>> + Send;
}

/// A host without an in-process binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBinding;

impl NoBinding {
    fn unavailable() -> Error {
        Error::binding("", "no in-process SNMP binding available")
    }
}

impl Binding for NoBinding {
    fn supports(&self, _version: Version) -> bool {
        false
    }

    async fn get(&self, _session: &Session<'_>) -> Result<String> {
        Err(Self::unavailable())
    }

    async fn get_next(&self, _session: &Session<'_>) -> Result<String> {
        Err(Self::unavailable())
    }

    async fn walk(&self, _session: &Session<'_>) -> Result<Vec<(String, String)>> {
        Err(Self::unavailable())
    }
}

/// One way of executing an operation against a target.
pub(crate) trait Strategy {
    fn execute(
        &self,
        op: Operation,
        auth: &AuthContext,
        target: &Target,
        oid: &str,
    ) -> impl Future<Output = Result<RawResult>> + Send;
}
