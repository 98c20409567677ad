//! Hex-STRING decoding and MAC address canonicalisation.

use std::sync::LazyLock;

use regex::Regex;

use crate::util::parse_numeric;

static HEX_STRING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Hex-STRING: ?").expect("static regex"));
static HEX_COLON_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Hex: ?").expect("static regex"));
static HEX_DASH_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Hex- ?").expect("static regex"));

static MAC_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(hex:\?)?([a-f0-9]{1,2}(:|\s)){5}").expect("static regex")
});
static MAC_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s|:").expect("static regex"));

/// Whether a value carries a hex label from net-snmp or a binding.
pub(crate) fn has_hex_label(s: &str) -> bool {
    s.contains("Hex-STRING:") || s.contains("Hex-") || s.contains("Hex:")
}

/// Decode a labelled, space-separated hex byte string.
///
/// Returns the decoded ASCII text when every byte is printable. Otherwise
/// returns the bytes as a colon-delimited dump, e.g. `01:02:00`. A single
/// zero byte in the last position is a NUL terminator: it is left out of the
/// decoded text and never forces the dump form, but it still appears in the
/// dump.
pub(crate) fn decode_hex_string(s: &str) -> String {
    let s = HEX_STRING_LABEL.replace_all(s, "");
    let s = HEX_COLON_LABEL.replace_all(&s, "");
    let s = HEX_DASH_LABEL.replace_all(&s, "");

    let tokens: Vec<&str> = s.split(' ').collect();
    let last = tokens.len().saturating_sub(1);

    let mut text = Vec::with_capacity(tokens.len());
    let mut dump = String::with_capacity(tokens.len() * 3);
    let mut non_printable = false;

    for (i, token) in tokens.iter().enumerate() {
        if token.is_empty() {
            continue;
        }

        let value = hex_value(token);
        let terminator = i == last && parse_numeric(token) == Some(0.0);

        if !terminator {
            text.push((value % 256) as u8);
            if value <= 31 || value >= 127 {
                non_printable = true;
            }
        }

        dump.push_str(&pad_octet(token));
        if i < last {
            dump.push(':');
        }
    }

    if non_printable {
        dump
    } else {
        // Only printable ASCII reaches this point.
        String::from_utf8_lossy(&text).into_owned()
    }
}

/// Whether a value looks like a MAC address or similar octet list.
pub(crate) fn is_mac_like(s: &str) -> bool {
    MAC_LIKE.is_match(s)
}

/// Canonicalise an octet list as zero-padded, colon-delimited upper-case hex.
///
/// `AA:bb:1:2:3:4` becomes `AA:BB:01:02:03:04`.
pub(crate) fn canonical_mac(s: &str) -> String {
    let s = HEX_COLON_LABEL.replace_all(s, "");
    MAC_SEPARATOR
        .split(&s)
        .map(pad_octet)
        .collect::<Vec<_>>()
        .join(":")
        .to_ascii_uppercase()
}

/// Numeric value of the hex digits in a token, ignoring anything else.
fn hex_value(token: &str) -> u64 {
    token
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u64, |acc, d| acc.saturating_mul(16).saturating_add(u64::from(d)))
}

fn pad_octet(token: &str) -> String {
    format!("{:0>2}", token)
}
