//! Duration and byte-count literal unit arithmetic.
//!
//! These are plain string-in, number-out helpers so the parser (which
//! merges a numeric literal with an immediately-following unit
//! identifier) and any later pass that re-parses a unit string from
//! outside the AST can share one policy.

/// The seven duration units VCL recognizes, in the order `parse_duration`
/// checks them. `ns`/`us`/`sec`/`min` are deliberately not here.
const DURATION_UNITS: &[(&str, f64)] = &[
    ("ms", 0.001),
    ("s", 1.0),
    ("m", 60.0),
    ("h", 3600.0),
    ("d", 86400.0),
    ("w", 604800.0),
    ("y", 31536000.0),
];

/// The five byte-count units, smallest to largest. Multipliers are
/// binary (`1024^k`): this is the pinned policy for the open question
/// of binary vs. decimal `kb`/`mb` multipliers.
const BYTE_UNITS: &[(&str, u64)] = &[
    ("b", 1),
    ("kb", 1024),
    ("mb", 1024 * 1024),
    ("gb", 1024 * 1024 * 1024),
    ("tb", 1024 * 1024 * 1024 * 1024),
];

pub fn is_duration_unit(s: &str) -> bool {
    DURATION_UNITS.iter().any(|(u, _)| *u == s)
}

pub fn is_byte_unit(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    BYTE_UNITS.iter().any(|(u, _)| *u == lower)
}

pub fn get_supported_duration_units() -> Vec<&'static str> {
    DURATION_UNITS.iter().map(|(u, _)| *u).collect()
}

pub fn get_supported_byte_units() -> Vec<&'static str> {
    BYTE_UNITS.iter().map(|(u, _)| *u).collect()
}

fn split_unit<'a>(s: &'a str, units: &[(&str, impl Copy)]) -> (&'a str, Option<&'a str>) {
    // Units are matched longest-first so "ms" doesn't get treated as a
    // bare "m" with a dangling "s".
    let mut sorted: Vec<&str> = units.iter().map(|(u, _)| *u).collect();
    sorted.sort_by_key(|u| std::cmp::Reverse(u.len()));
    for unit in sorted {
        if let Some(prefix) = s.strip_suffix(unit) {
            return (prefix, Some(unit));
        }
    }
    (s, None)
}

/// Parse a duration string like `"500ms"` or `"1.5s"` to seconds.
///
/// Policy (pinned by the design): an empty string, a missing unit, or
/// an unrecognized unit all silently yield `0.0` rather than an error,
/// since unit-less numeric durations (`0`) are valid VCL. An error is
/// only raised when a recognized unit is present but the numeric prefix
/// in front of it does not parse as a float.
pub fn parse_duration(s: &str) -> Result<f64, String> {
    if s.is_empty() {
        return Ok(0.0);
    }

    let (prefix, unit) = split_unit(s, DURATION_UNITS);
    let Some(unit) = unit else {
        return Ok(0.0);
    };

    match prefix.parse::<f64>() {
        Ok(n) => {
            let seconds_per_unit = DURATION_UNITS
                .iter()
                .find(|(u, _)| *u == unit)
                .map(|(_, secs)| *secs)
                .expect("unit came from DURATION_UNITS");
            Ok(n * seconds_per_unit)
        }
        Err(_) => Err(format!("malformed duration literal: {s:?}")),
    }
}

/// Parse a byte-count string like `"10kb"` to a byte count.
///
/// Same silent-zero policy as [`parse_duration`] for a missing or
/// unrecognized unit; an error on a malformed numeric prefix in front
/// of a recognized unit.
pub fn parse_bytes(s: &str) -> Result<u64, String> {
    if s.is_empty() {
        return Ok(0);
    }

    let lower = s.to_ascii_lowercase();
    let (prefix, unit) = split_unit(&lower, BYTE_UNITS);
    let Some(unit) = unit else {
        return Ok(0);
    };

    match prefix.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => {
            let bytes_per_unit = BYTE_UNITS
                .iter()
                .find(|(u, _)| *u == unit)
                .map(|(_, b)| *b)
                .expect("unit came from BYTE_UNITS");
            Ok((n * bytes_per_unit as f64).round() as u64)
        }
        _ => Err(format!("malformed byte-count literal: {s:?}")),
    }
}

/// True only if `s` has both a valid numeric part and a recognized
/// duration unit suffix - unlike [`parse_duration`], a missing or
/// unknown unit makes this `false` rather than silently `0`.
pub fn validate_duration_string(s: &str) -> bool {
    let (prefix, unit) = split_unit(s, DURATION_UNITS);
    unit.is_some() && prefix.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_every_supported_unit() {
        assert_eq!(parse_duration("500ms").unwrap(), 0.5);
        assert_eq!(parse_duration("1.5s").unwrap(), 1.5);
        assert_eq!(parse_duration("0.5h").unwrap(), 1800.0);
        assert_eq!(parse_duration("1y").unwrap(), 31536000.0);
    }

    #[test]
    fn empty_and_unitless_are_zero_not_errors() {
        assert_eq!(parse_duration("").unwrap(), 0.0);
        assert_eq!(parse_duration("42").unwrap(), 0.0);
        assert_eq!(parse_duration("42xyz").unwrap(), 0.0);
    }

    #[test]
    fn malformed_numeric_prefix_is_an_error() {
        assert!(parse_duration("10.5.5s").is_err());
    }

    #[test]
    fn negative_durations_parse() {
        assert_eq!(parse_duration("-5s").unwrap(), -5.0);
    }

    #[test]
    fn is_duration_unit_matches_get_supported_duration_units() {
        let supported = get_supported_duration_units();
        for unit in &supported {
            assert!(is_duration_unit(unit));
        }
        assert!(!is_duration_unit("ns"));
        assert!(!is_duration_unit("sec"));
    }

    #[test]
    fn validate_duration_string_requires_both_parts() {
        assert!(validate_duration_string("5s"));
        assert!(!validate_duration_string("5"));
        assert!(!validate_duration_string("s"));
    }

    #[test]
    fn byte_units_use_binary_multipliers() {
        assert_eq!(parse_bytes("1kb").unwrap(), 1024);
        assert_eq!(parse_bytes("1MB").unwrap(), 1024 * 1024);
        assert_eq!(parse_bytes("2GB").unwrap(), 2 * 1024 * 1024 * 1024);
    }
}
