//! Per-call query requests.
//!
//! A poller keeps device settings as loosely typed columns, so a [`Request`]
//! carries them unparsed. [`Request::resolve`] validates them against the
//! [`Config`] defaults and produces the typed [`Target`] the transports use.

use std::time::Duration;

use zeroize::Zeroize;

use crate::client::auth::Credentials;
use crate::config::Config;
use crate::error::{Error, ParamErrorKind, Result};
use crate::util::{parse_count, parse_numeric};
use crate::version::Version;

/// Default SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

/// Default timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 500;

/// A single query against one device.
///
/// Numeric fields are kept as the strings the poller stored; a blank or
/// garbage value is only rejected when the request is resolved.
///
/// # Example
///
/// ```rust
/// use snmp_query::{Config, Request, Version};
///
/// let request = Request::new("192.0.2.10", 2)
///     .community("public")
///     .timeout_ms(1500)
///     .retries(0);
///
/// let target = request.resolve(&Config::default()).unwrap();
/// assert_eq!(target.version, Version::V2c);
/// assert_eq!(target.port, 161);
/// assert_eq!(target.retries, 3); // zero falls back to the configured default
/// assert_eq!(target.timeout_secs_ceil(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    host: String,
    port: String,
    version: String,
    timeout_ms: String,
    retries: String,
    max_oids: String,
    credentials: Credentials,
}

impl Request {
    /// Create a request for `host` using the stored `version` (1, 2 or 3).
    pub fn new(host: impl Into<String>, version: impl ToString) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT.to_string(),
            version: version.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS.to_string(),
            retries: "0".to_string(),
            max_oids: "0".to_string(),
            credentials: Credentials::default(),
        }
    }

    /// Set the agent port.
    pub fn port(mut self, port: impl ToString) -> Self {
        self.port = port.to_string();
        self
    }

    /// Set the timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout: impl ToString) -> Self {
        self.timeout_ms = timeout.to_string();
        self
    }

    /// Set the retry count. Zero means "use the configured default".
    pub fn retries(mut self, retries: impl ToString) -> Self {
        self.retries = retries.to_string();
        self
    }

    /// Set the max OIDs per bulk request. Zero means "use the configured default".
    pub fn max_oids(mut self, max_oids: impl ToString) -> Self {
        self.max_oids = max_oids.to_string();
        self
    }

    /// Replace all credential fields at once.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials.zeroize();
        self.credentials = credentials;
        self
    }

    /// Set the community string (v1/v2c).
    pub fn community(mut self, community: impl Into<String>) -> Self {
        self.credentials.community = community.into();
        self
    }

    /// Set the security name (v3).
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.credentials.username = username.into();
        self
    }

    /// Set the authentication passphrase (v3).
    pub fn auth_password(mut self, password: impl Into<String>) -> Self {
        self.credentials.auth_password = password.into();
        self
    }

    /// Set the authentication protocol name (v3).
    pub fn auth_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.credentials.auth_protocol = protocol.into();
        self
    }

    /// Set the privacy passphrase (v3).
    pub fn priv_password(mut self, password: impl Into<String>) -> Self {
        self.credentials.priv_password = password.into();
        self
    }

    /// Set the privacy protocol name (v3), `[None]` for none.
    pub fn priv_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.credentials.priv_protocol = protocol.into();
        self
    }

    /// Set the context name (v3).
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.credentials.context = context.into();
        self
    }

    /// Target host name or address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Stored credentials.
    pub fn creds(&self) -> &Credentials {
        &self.credentials
    }

    /// Validate the request and apply configured defaults.
    ///
    /// Retries and max OIDs fall back to the config when zero or not numeric.
    /// The version must be 1, 2 or 3, the port and timeout must be numeric,
    /// and v1/v2c requests need a community.
    pub fn resolve(&self, config: &Config) -> Result<Target> {
        let retries = match parse_count(&self.retries) {
            Some(n) if n > 0 => n,
            _ => config.default_retries(),
        };

        let max_oids = match parse_count(&self.max_oids) {
            Some(n) if n > 0 => n,
            _ => config.default_max_oids(),
        };

        let version = parse_count(&self.version)
            .and_then(Version::from_number)
            .ok_or_else(|| Error::param(ParamErrorKind::Version))?;

        let port = parse_count(&self.port)
            .and_then(|p| u16::try_from(p).ok())
            .ok_or_else(|| Error::param(ParamErrorKind::Port))?;

        let timeout = parse_numeric(&self.timeout_ms)
            .filter(|ms| *ms >= 0.0)
            .and_then(|ms| Duration::try_from_secs_f64(ms / 1000.0).ok())
            .ok_or_else(|| Error::param(ParamErrorKind::Timeout))?;

        if version.uses_community() && self.credentials.community.is_empty() {
            return Err(Error::param(ParamErrorKind::EmptyCommunity));
        }

        Ok(Target {
            host: self.host.clone(),
            port,
            version,
            timeout,
            retries,
            max_oids,
        })
    }
}

impl Drop for Request {
    fn drop(&mut self) {
        self.credentials.zeroize();
    }
}

/// A validated request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host name or address.
    pub host: String,
    /// Agent port.
    pub port: u16,
    /// Protocol version.
    pub version: Version,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retry count passed to the transport.
    pub retries: u32,
    /// Max OIDs per bulk request (walk only).
    pub max_oids: u32,
}

impl Target {
    /// Timeout in whole seconds, rounded up, as the external tools expect.
    pub fn timeout_secs_ceil(&self) -> u64 {
        let secs = self.timeout.as_secs();
        if self.timeout.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Timeout in microseconds, as in-process bindings expect.
    pub fn timeout_micros(&self) -> u64 {
        u64::try_from(self.timeout.as_micros()).unwrap_or(u64::MAX)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
