//! Internal utilities.

/// Check whether a string is a plain decimal number.
///
/// Accepts what pollers historically stored in numeric columns: optional
/// surrounding whitespace, an optional sign, digits with an optional
/// fractional part, and an optional exponent. Rejects hex, `inf`, `nan`
/// and the empty string.
pub(crate) fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
    }

    i == bytes.len()
}

/// Parse a numeric string as accepted by [`is_numeric`].
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    if !is_numeric(s) {
        return None;
    }
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a numeric string as a non-negative whole number, truncating any fraction.
pub(crate) fn parse_count(s: &str) -> Option<u32> {
    let v = parse_numeric(s)?;
    if v < 0.0 || v > f64::from(u32::MAX) {
        return None;
    }
    Some(v.trunc() as u32)
}
