//! Well-known OID name hints.
//!
//! This module provides a small hardcoded table of common OID names for display purposes.
//! This is NOT MIB support - just friendly names for common system and interface OIDs.

/// Well-known OID entries, dotted without the leading dot.
static WELL_KNOWN_OIDS: &[(&str, &str)] = &[
    // SNMPv2-MIB::system
    ("1.3.6.1.2.1.1.1.0", "sysDescr.0"),
    ("1.3.6.1.2.1.1.2.0", "sysObjectID.0"),
    ("1.3.6.1.2.1.1.3.0", "sysUpTime.0"),
    ("1.3.6.1.2.1.1.4.0", "sysContact.0"),
    ("1.3.6.1.2.1.1.5.0", "sysName.0"),
    ("1.3.6.1.2.1.1.6.0", "sysLocation.0"),
    ("1.3.6.1.2.1.1.7.0", "sysServices.0"),
    // IF-MIB::interfaces
    ("1.3.6.1.2.1.2.1.0", "ifNumber.0"),
    // Common table roots (without instance)
    ("1.3.6.1.2.1.1", "system"),
    ("1.3.6.1.2.1.2", "interfaces"),
    ("1.3.6.1.2.1.2.2", "ifTable"),
    ("1.3.6.1.2.1.2.2.1", "ifEntry"),
    ("1.3.6.1.2.1.2.2.1.2", "ifDescr"),
    ("1.3.6.1.2.1.2.2.1.10", "ifInOctets"),
    ("1.3.6.1.2.1.2.2.1.16", "ifOutOctets"),
    ("1.3.6.1.2.1.31.1.1", "ifXTable"),
    ("1.3.6.1.2.1.31.1.1.1.1", "ifName"),
    ("1.3.6.1.2.1.31.1.1.1.6", "ifHCInOctets"),
    ("1.3.6.1.2.1.31.1.1.1.10", "ifHCOutOctets"),
    ("1.3.6.1.2.1.31.1.1.1.18", "ifAlias"),
];

/// Look up a friendly name for a dotted OID, with or without the leading dot.
///
/// Returns `None` if the OID is not in the well-known table.
pub fn lookup(oid: &str) -> Option<&'static str> {
    let oid = oid.strip_prefix('.').unwrap_or(oid);
    WELL_KNOWN_OIDS
        .iter()
        .find(|(dotted, _)| *dotted == oid)
        .map(|(_, name)| *name)
}

/// Parse an OID argument, supporting both dotted notation and well-known names.
///
/// Accepts:
/// - Dotted notation: "1.3.6.1.2.1.1.1.0" or ".1.3.6.1.2.1.1.1.0"
/// - Well-known names: "sysDescr.0", "system", "ifTable"
///
/// Returns the OID in dotted notation with a leading dot, as the net-snmp
/// tools print it.
pub fn parse_oid(s: &str) -> Result<String, String> {
    let s = s.trim();
    let dotted = s.strip_prefix('.').unwrap_or(s);

    if dotted
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
    {
        let valid = dotted
            .split('.')
            .all(|arc| !arc.is_empty() && arc.parse::<u32>().is_ok());
        if !valid {
            return Err(format!("invalid OID '{}'", s));
        }
        return Ok(format!(".{}", dotted));
    }

    // Try well-known names (case-insensitive)
    WELL_KNOWN_OIDS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(s))
        .map(|(dotted, _)| format!(".{}", dotted))
        .ok_or_else(|| {
            format!(
                "unknown OID name '{}'; use dotted notation (e.g., 1.3.6.1.2.1.1.1.0)",
                s
            )
        })
}
