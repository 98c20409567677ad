//! Error types for snmp-query.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//!
//! The public query operations on [`Client`](crate::Client) never return these
//! errors: a poller has to keep going across thousands of unreliable devices,
//! so failures are folded into the sentinel return values (`"U"`, an empty
//! string, an empty walk) and logged. The `try_*` variants expose them for
//! callers that want to distinguish the cases.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Request parameter error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamErrorKind {
    /// Version missing, non-numeric, zero, or not one of 1/2/3.
    Version,
    /// Port missing, non-numeric, or out of range.
    Port,
    /// Timeout missing or non-numeric.
    Timeout,
    /// Community string empty for SNMPv1/v2c.
    EmptyCommunity,
    /// No OID given.
    EmptyOid,
}

impl std::fmt::Display for ParamErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Version => write!(f, "version must be 1, 2 or 3"),
            Self::Port => write!(f, "port must be numeric"),
            Self::Timeout => write!(f, "timeout must be numeric"),
            Self::EmptyCommunity => write!(f, "community string required for SNMPv1/v2c"),
            Self::EmptyOid => write!(f, "no OID given"),
        }
    }
}

/// Credential error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialErrorKind {
    /// Community string empty for SNMPv1/v2c.
    EmptyCommunity,
    /// Username empty for SNMPv3.
    EmptyUsername,
}

impl std::fmt::Display for CredentialErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommunity => write!(f, "empty community string"),
            Self::EmptyUsername => write!(f, "empty SNMPv3 username"),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Request parameters failed validation.
    #[error("invalid request: {kind}")]
    InvalidParameter { kind: ParamErrorKind },

    /// Credentials do not form a usable authentication context.
    #[error("invalid credentials: {kind}")]
    InvalidCredentials { kind: CredentialErrorKind },

    /// The in-process binding reported that the agent did not respond.
    #[error("no response from {target} for {oid}")]
    Timeout { target: String, oid: String },

    /// The in-process binding failed for a reason other than a timeout.
    #[error("binding error{}: {message}", if target.is_empty() { String::new() } else { format!(" for {}", target) })]
    Binding { target: String, message: String },

    /// The external command could not be spawned or read.
    #[error("I/O error{}: {source}", target.as_ref().map(|t| format!(" querying {}", t)).unwrap_or_default())]
    Io {
        target: Option<String>,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parameter validation error.
    pub fn param(kind: ParamErrorKind) -> Self {
        Self::InvalidParameter { kind }
    }

    /// Create a credential error.
    pub fn credentials(kind: CredentialErrorKind) -> Self {
        Self::InvalidCredentials { kind }
    }

    /// Create a binding failure for a target.
    pub fn binding(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Binding {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Whether this error means the request itself was unusable.
    ///
    /// Such errors map to the `"U"` sentinel on the scalar path and to an
    /// empty sequence on the walk path. They are never worth retrying.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::InvalidCredentials { .. }
        )
    }

    /// Whether this error reports an unresponsive agent.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Get the target this error refers to, if it has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Timeout { target, .. } => Some(target),
            Self::Binding { target, .. } if !target.is_empty() => Some(target),
            Self::Io { target, .. } => target.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_classification() {
        assert!(Error::param(ParamErrorKind::Version).is_invalid_request());
        assert!(Error::credentials(CredentialErrorKind::EmptyUsername).is_invalid_request());
        assert!(
            !Error::Timeout {
                target: "10.0.0.1:161".into(),
                oid: ".1.3.6.1.2.1.1.3.0".into(),
            }
            .is_invalid_request()
        );
    }

    #[test]
    fn test_display() {
        let err = Error::param(ParamErrorKind::EmptyCommunity);
        assert_eq!(
            err.to_string(),
            "invalid request: community string required for SNMPv1/v2c"
        );

        let err = Error::binding("", "session closed");
        assert_eq!(err.to_string(), "binding error: session closed");

        let err = Error::binding("router1:161", "session closed");
        assert_eq!(err.to_string(), "binding error for router1:161: session closed");
    }

    #[test]
    fn test_target() {
        let err = Error::Timeout {
            target: "router1:161".into(),
            oid: ".1.3.6.1.2.1.1.5.0".into(),
        };
        assert_eq!(err.target(), Some("router1:161"));
        assert!(err.is_timeout());

        let err = Error::Io {
            target: None,
            source: std::io::Error::other("boom"),
        };
        assert_eq!(err.target(), None);
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
