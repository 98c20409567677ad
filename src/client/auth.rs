//! Credentials and per-call authentication contexts.
//!
//! A poller stores one flat set of credential columns per device regardless
//! of SNMP version. [`AuthContext::build`] turns those columns into the shape
//! the requested version actually uses: a community string for v1/v2c, or a
//! USM user for v3. Both transports consume the same context.

use zeroize::Zeroize;

use crate::error::{CredentialErrorKind, Error, Result};
use crate::v3::{AuthProtocol, PRIV_NONE, ParseProtocolError, PrivProtocol};
use crate::version::Version;

/// Raw credential fields as the poller stores them.
///
/// Unused fields are simply left empty: a v2c device has no username, a v3
/// device has no community. The privacy protocol may be `[None]`.
///
/// The owning [`Request`](crate::Request) zeroizes these fields when dropped.
#[derive(Clone, Default, Zeroize)]
pub struct Credentials {
    /// Community string (v1/v2c).
    pub community: String,
    /// Security name (v3).
    pub username: String,
    /// Authentication passphrase (v3).
    pub auth_password: String,
    /// Authentication protocol name, e.g. `MD5` or `SHA` (v3).
    pub auth_protocol: String,
    /// Privacy passphrase (v3). Empty means no privacy.
    pub priv_password: String,
    /// Privacy protocol name, e.g. `AES`, or `[None]` (v3).
    pub priv_protocol: String,
    /// Context name (v3). Empty means the default context.
    pub context: String,
}

impl Credentials {
    /// Community-only credentials for v1/v2c.
    pub fn community(community: impl Into<String>) -> Self {
        Self {
            community: community.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("community", &redact(&self.community))
            .field("username", &self.username)
            .field("auth_password", &redact(&self.auth_password))
            .field("auth_protocol", &self.auth_protocol)
            .field("priv_password", &redact(&self.priv_password))
            .field("priv_protocol", &self.priv_protocol)
            .field("context", &self.context)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "***" }
}

/// SNMPv3 security level.
///
/// Pollers never issue noAuthNoPriv requests, so only the two authenticated
/// levels exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    /// Authentication only.
    AuthNoPriv,
    /// Authentication and encryption.
    AuthPriv,
}

impl SecurityLevel {
    /// The `-l` token understood by the net-snmp tools.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthNoPriv => "authNoPriv",
            Self::AuthPriv => "authPriv",
        }
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privacy settings of an authPriv context.
#[derive(Clone)]
pub struct Privacy {
    /// Privacy protocol name as stored, e.g. `AES`.
    pub protocol: String,
    /// Privacy passphrase.
    pub password: String,
}

impl Privacy {
    /// Parse the stored protocol name, for bindings that need it typed.
    pub fn parsed_protocol(&self) -> std::result::Result<PrivProtocol, ParseProtocolError> {
        self.protocol.parse()
    }
}

/// Version-appropriate authentication, built fresh for every call.
#[derive(Clone)]
pub enum AuthContext {
    /// SNMPv1/v2c community.
    Community {
        /// Community string.
        community: String,
    },
    /// SNMPv3 User-based Security Model.
    UserAuth {
        /// Security name.
        username: String,
        /// Authentication protocol name as stored, e.g. `SHA`.
        auth_protocol: String,
        /// Authentication passphrase.
        auth_password: String,
        /// Privacy settings; `None` for authNoPriv.
        privacy: Option<Privacy>,
        /// Context name; empty for the default context.
        context: String,
    },
}

impl AuthContext {
    /// Build the authentication context for `version` from stored credentials.
    ///
    /// Fails with [`Error::InvalidCredentials`] when the field the version
    /// depends on is missing: community for v1/v2c, username for v3. Callers
    /// treat that like any other invalid request.
    ///
    /// Protocol names are carried verbatim. A `[None]` privacy protocol or an
    /// empty privacy passphrase gives authNoPriv.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snmp_query::{AuthContext, Credentials, SecurityLevel, Version};
    ///
    /// let creds = Credentials {
    ///     username: "poller".into(),
    ///     auth_protocol: "SHA".into(),
    ///     auth_password: "authpass123".into(),
    ///     priv_protocol: "[None]".into(),
    ///     ..Default::default()
    /// };
    /// let auth = AuthContext::build(Version::V3, &creds).unwrap();
    /// assert_eq!(auth.security_level(), Some(SecurityLevel::AuthNoPriv));
    /// ```
    pub fn build(version: Version, creds: &Credentials) -> Result<Self> {
        if version.uses_community() {
            if creds.community.is_empty() {
                return Err(Error::credentials(CredentialErrorKind::EmptyCommunity));
            }
            return Ok(Self::Community {
                community: creds.community.clone(),
            });
        }

        if creds.username.is_empty() {
            return Err(Error::credentials(CredentialErrorKind::EmptyUsername));
        }

        let privacy = if creds.priv_password.is_empty() || creds.priv_protocol == PRIV_NONE {
            None
        } else {
            Some(Privacy {
                protocol: creds.priv_protocol.clone(),
                password: creds.priv_password.clone(),
            })
        };

        Ok(Self::UserAuth {
            username: creds.username.clone(),
            auth_protocol: creds.auth_protocol.clone(),
            auth_password: creds.auth_password.clone(),
            privacy,
            context: creds.context.clone(),
        })
    }

    /// The v3 security level, or `None` for community contexts.
    pub fn security_level(&self) -> Option<SecurityLevel> {
        match self {
            Self::Community { .. } => None,
            Self::UserAuth { privacy: None, .. } => Some(SecurityLevel::AuthNoPriv),
            Self::UserAuth {
                privacy: Some(_), ..
            } => Some(SecurityLevel::AuthPriv),
        }
    }

    /// Parse the stored authentication protocol name, for bindings that need
    /// it typed. `None` for community contexts.
    pub fn parsed_auth_protocol(
        &self,
    ) -> Option<std::result::Result<AuthProtocol, ParseProtocolError>> {
        match self {
            Self::Community { .. } => None,
            Self::UserAuth { auth_protocol, .. } => Some(auth_protocol.parse()),
        }
    }

    /// The v3 context name, or an empty string.
    pub fn context(&self) -> &str {
        match self {
            Self::Community { .. } => "",
            Self::UserAuth { context, .. } => context,
        }
    }
}

impl Drop for AuthContext {
    fn drop(&mut self) {
        match self {
            Self::Community { community } => community.zeroize(),
            Self::UserAuth {
                auth_password,
                privacy,
                ..
            } => {
                auth_password.zeroize();
                if let Some(p) = privacy {
                    p.password.zeroize();
                }
            }
        }
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Community { .. } => f
                .debug_struct("Community")
                .field("community", &"***")
                .finish(),
            Self::UserAuth {
                username,
                auth_protocol,
                privacy,
                context,
                ..
            } => f
                .debug_struct("UserAuth")
                .field("username", username)
                .field("auth_protocol", auth_protocol)
                .field("priv_protocol", &privacy.as_ref().map(|p| p.protocol.as_str()))
                .field("context", context)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v3_creds() -> Credentials {
        Credentials {
            username: "poller".into(),
            auth_password: "authpass123".into(),
            auth_protocol: "SHA".into(),
            priv_password: "privpass123".into(),
            priv_protocol: "AES".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_community_context() {
        let auth = AuthContext::build(Version::V2c, &Credentials::community("public")).unwrap();
        assert!(matches!(&auth, AuthContext::Community { community } if community == "public"));
        assert_eq!(auth.security_level(), None);
    }

    #[test]
    fn test_empty_community_rejected() {
        for version in [Version::V1, Version::V2c] {
            let err = AuthContext::build(version, &Credentials::default()).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidCredentials {
                    kind: CredentialErrorKind::EmptyCommunity
                }
            ));
        }
    }

    #[test]
    fn test_community_ignored_for_v3() {
        let mut creds = v3_creds();
        creds.community = String::new();
        assert!(AuthContext::build(Version::V3, &creds).is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut creds = v3_creds();
        creds.username.clear();
        creds.community = "public".into();
        let err = AuthContext::build(Version::V3, &creds).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCredentials {
                kind: CredentialErrorKind::EmptyUsername
            }
        ));
    }

    #[test]
    fn test_auth_priv() {
        let auth = AuthContext::build(Version::V3, &v3_creds()).unwrap();
        assert_eq!(auth.security_level(), Some(SecurityLevel::AuthPriv));
        match &auth {
            AuthContext::UserAuth {
                auth_protocol,
                privacy: Some(p),
                ..
            } => {
                assert_eq!(auth_protocol, "SHA");
                assert_eq!(p.protocol, "AES");
                assert_eq!(p.password, "privpass123");
            }
            other => panic!("unexpected context: {other:?}"),
        }
    }

    #[test]
    fn test_priv_none_is_auth_no_priv() {
        let mut creds = v3_creds();
        creds.priv_protocol = "[None]".into();
        let auth = AuthContext::build(Version::V3, &creds).unwrap();
        assert_eq!(auth.security_level(), Some(SecurityLevel::AuthNoPriv));
    }

    #[test]
    fn test_empty_priv_password_is_auth_no_priv() {
        let mut creds = v3_creds();
        creds.priv_password.clear();
        let auth = AuthContext::build(Version::V3, &creds).unwrap();
        assert_eq!(auth.security_level(), Some(SecurityLevel::AuthNoPriv));
    }

    #[test]
    fn test_protocol_names_kept_verbatim() {
        let mut creds = v3_creds();
        creds.auth_protocol = "SHA256".into();
        creds.priv_protocol = "3DES".into();
        let auth = AuthContext::build(Version::V3, &creds).unwrap();
        assert_eq!(auth.security_level(), Some(SecurityLevel::AuthPriv));
        match &auth {
            AuthContext::UserAuth {
                auth_protocol,
                privacy: Some(p),
                ..
            } => {
                assert_eq!(auth_protocol, "SHA256");
                assert_eq!(p.protocol, "3DES");
                assert!(p.parsed_protocol().is_err());
            }
            other => panic!("unexpected context: {other:?}"),
        }
        assert_eq!(
            auth.parsed_auth_protocol().unwrap().unwrap(),
            AuthProtocol::Sha256
        );
    }

    #[test]
    fn test_empty_auth_protocol_accepted() {
        let mut creds = v3_creds();
        creds.auth_protocol.clear();
        let auth = AuthContext::build(Version::V3, &creds).unwrap();
        assert!(auth.parsed_auth_protocol().unwrap().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = v3_creds();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("authpass123"));
        assert!(!debug.contains("privpass123"));

        let auth = AuthContext::build(Version::V3, &creds).unwrap();
        let debug = format!("{auth:?}");
        assert!(!debug.contains("authpass123"));
        assert!(debug.contains("poller"));
    }
}
