//! SNMP version enumeration.

/// SNMP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Version {
    /// SNMPv1 (RFC 1157)
    V1,
    /// SNMPv2c (RFC 1901)
    #[default]
    V2c,
    /// SNMPv3 (RFC 3411-3418)
    V3,
}

impl Version {
    /// All versions, in selection order.
    pub const ALL: [Version; 3] = [Version::V1, Version::V2c, Version::V3];

    /// The number pollers store for this version (1, 2 or 3).
    pub const fn as_number(self) -> u32 {
        match self {
            Version::V1 => 1,
            Version::V2c => 2,
            Version::V3 => 3,
        }
    }

    /// Create from the number pollers store (1, 2 or 3).
    pub const fn from_number(value: u32) -> Option<Self> {
        match value {
            1 => Some(Version::V1),
            2 => Some(Version::V2c),
            3 => Some(Version::V3),
            _ => None,
        }
    }

    /// The `-v` token understood by the net-snmp tools.
    ///
    /// net-snmp accepts a bare `2`, but `2c` is what it documents.
    pub const fn cli_token(self) -> &'static str {
        match self {
            Version::V1 => "1",
            Version::V2c => "2c",
            Version::V3 => "3",
        }
    }

    /// Whether this version authenticates with a community string.
    pub const fn uses_community(self) -> bool {
        matches!(self, Version::V1 | Version::V2c)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Version::V1 => write!(f, "SNMPv1"),
            Version::V2c => write!(f, "SNMPv2c"),
            Version::V3 => write!(f, "SNMPv3"),
        }
    }
}
