//! Resistance value parsing and unit-scaled display.

/// Parse a catalog or CLI resistance token with an optional unit suffix.
///
/// Accepts plain decimal or scientific notation plus the suffixes `k`/`K`
/// (kilo-ohm) and `m`/`M` (mega-ohm; parts catalogs write "m" for mega,
/// milliohm resistors do not occur in them). A trailing `ohm`/`ohms` marker
/// is tolerated. Returns `None` when the token does not parse as a finite
/// number.
pub fn parse_resistance(s: &str) -> Option<f64> {
    let mut s = s.trim().to_lowercase();
    for marker in ["ohms", "ohm"] {
        if let Some(stripped) = s.strip_suffix(marker) {
            s = stripped.trim_end().to_string();
            break;
        }
    }

    let (num, multiplier) = if let Some(stripped) = s.strip_suffix('k') {
        (stripped, 1e3)
    } else if let Some(stripped) = s.strip_suffix('m') {
        (stripped, 1e6)
    } else {
        (s.as_str(), 1.0)
    };

    let value: f64 = num.trim_end().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value * multiplier)
}

/// Scaled rendering for a group member: ohms below 1k, then k, then M,
/// one decimal place.
pub fn format_member(ohms: f64) -> String {
    if ohms >= 1e6 {
        format!("{:.1}M", ohms / 1e6)
    } else if ohms >= 1e3 {
        format!("{:.1}k", ohms / 1e3)
    } else {
        format!("{:.1}", ohms)
    }
}

/// Scaled rendering for an equivalent total, three decimal places.
pub fn format_total(ohms: f64) -> String {
    if ohms >= 1e6 {
        format!("{:.3}M", ohms / 1e6)
    } else if ohms >= 1e3 {
        format!("{:.3}k", ohms / 1e3)
    } else {
        format!("{:.3}", ohms)
    }
}
