//! Value normalization.
//!
//! Agents, bindings and the net-snmp tools all render values slightly
//! differently: with or without type tags, with the OID in front, quoted,
//! hex-encoded, or with vendor garbage appended. [`normalize`] folds all of
//! that into the plain string a poller stores.

mod hex;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::util::is_numeric;

static TYPE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(hex|counter(32|64)|gauge|gauge(32|64)|float|ipaddress|string|integer):")
        .expect("static regex")
});

static TIMETICKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Timeticks:\s\((\d+)\)\s").expect("static regex"));

/// Normalize a raw value returned by a transport.
///
/// `oid_prefix_present` says the value still carries the `OID = ` prefix the
/// external tools print; it is dropped when the left-hand side looks like an
/// OID. The result is empty for "No Such" answers and for anything that
/// contains one of `config.banned_snmp_strings`. Numeric values come back
/// trimmed and otherwise untouched.
///
/// # Example
///
/// ```rust
/// use snmp_query::{normalize, Config};
///
/// let config = Config::default();
/// assert_eq!(normalize("Counter32: 42", false, &config), "42");
/// assert_eq!(normalize("Hex-STRING: 41 42 43", false, &config), "ABC");
/// assert_eq!(
///     normalize(".1.3.6.1.2.1.1.1.0 = STRING: Linux host", true, &config),
///     "Linux host"
/// );
/// ```
pub fn normalize(raw: &str, oid_prefix_present: bool, config: &Config) -> String {
    let value = TYPE_TAG.replace_all(raw.trim(), "");
    let value = value.trim();

    if value.starts_with("No Such") {
        return String::new();
    }

    let value = if oid_prefix_present {
        strip_oid_prefix(value)
    } else {
        value
    };

    // Walk lines carry the exception text after the OID.
    if value.is_empty() || value.starts_with("No Such") {
        return String::new();
    }
    if is_numeric(value) {
        return value.trim().to_string();
    }

    let mut value: String = value
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '>' | '<' | '\\'))
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if value.contains("Wrong Type") {
        value = after_last_colon(&value);
    }

    let value = printable(&value);

    let value = if hex::has_hex_label(&value) {
        hex::decode_hex_string(&value)
    } else if hex::is_mac_like(&value) {
        hex::canonical_mac(&value)
    } else if let Some(ticks) = TIMETICKS.captures(&value).and_then(|c| c.get(1)) {
        ticks.as_str().to_string()
    } else {
        value
    };

    if config.is_banned(&value) {
        return String::new();
    }
    value
}

/// Drop a leading `OID =` segment when the left-hand side looks like an OID.
fn strip_oid_prefix(value: &str) -> &str {
    match value.split_once('=') {
        Some((lhs, rhs)) if lhs.starts_with('.') || lhs.contains("::") => rhs.trim(),
        _ => value.trim(),
    }
}

/// Keep only the text after the last `:`, unless that colon ends the string.
fn after_last_colon(value: &str) -> String {
    match value.rfind(':') {
        Some(pos) if pos + 1 < value.len() => value[pos + 1..].trim().to_string(),
        _ => value.trim().to_string(),
    }
}

/// Replace every byte outside printable ASCII with a space, then trim.
///
/// Works on bytes, so a multibyte character turns into one space per byte.
fn printable(value: &str) -> String {
    let cleaned: String = value
        .bytes()
        .map(|b| if b <= 31 || b >= 127 { ' ' } else { char::from(b) })
        .collect();
    cleaned.trim().to_string()
}
