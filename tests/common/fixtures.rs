//! Common test fixtures and constants.

use snmp_query::{Config, Request};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub const SYS_DESCR: &str = ".1.3.6.1.2.1.1.1.0";
pub const SYS_OBJECT_ID: &str = ".1.3.6.1.2.1.1.2.0";
pub const SYS_UPTIME: &str = ".1.3.6.1.2.1.1.3.0";
pub const SYS_CONTACT: &str = ".1.3.6.1.2.1.1.4.0";
pub const SYS_NAME: &str = ".1.3.6.1.2.1.1.5.0";
pub const SYS_LOCATION: &str = ".1.3.6.1.2.1.1.6.0";

// =============================================================================
// Subtree roots (for walks)
// =============================================================================

/// System subtree root: 1.3.6.1.2.1.1
pub const SYSTEM_SUBTREE: &str = ".1.3.6.1.2.1.1";

/// ifDescr column: 1.3.6.1.2.1.2.2.1.2
pub const IF_DESCR: &str = ".1.3.6.1.2.1.2.2.1.2";

/// ifPhysAddress column: 1.3.6.1.2.1.2.2.1.6
pub const IF_PHYS_ADDRESS: &str = ".1.3.6.1.2.1.2.2.1.6";

// =============================================================================
// Test OIDs
// =============================================================================

/// Nonexistent OID for testing NoSuchObject/NoSuchInstance
pub const NONEXISTENT_OID: &str = ".1.3.6.1.99.99.99.0";

// =============================================================================
// Credentials
// =============================================================================

/// Agent address used by every fake
pub const HOST: &str = "192.0.2.10";

/// V2c read-only community
pub const COMMUNITY_RO: &str = "public";

/// V3 username
pub const V3_USER: &str = "poller";
/// Auth password for V3 requests
pub const AUTH_PASSWORD: &str = "authpass123";
/// Privacy password for V3 requests
pub const PRIV_PASSWORD: &str = "privpass123";

/// An SNMPv2c request against [`HOST`].
pub fn v2c_request() -> Request {
    Request::new(HOST, 2).community(COMMUNITY_RO)
}

/// An SNMPv1 request against [`HOST`].
pub fn v1_request() -> Request {
    Request::new(HOST, 1).community(COMMUNITY_RO)
}

/// An authPriv SNMPv3 request against [`HOST`].
pub fn v3_request() -> Request {
    Request::new(HOST, 3)
        .username(V3_USER)
        .auth_protocol("SHA")
        .auth_password(AUTH_PASSWORD)
        .priv_protocol("AES")
        .priv_password(PRIV_PASSWORD)
}

/// Config with the vendor banners seen in the field.
pub fn banned_config() -> Config {
    Config {
        banned_snmp_strings: vec!["Vendor Banner".into(), "No Response".into()],
        ..Config::default()
    }
}
