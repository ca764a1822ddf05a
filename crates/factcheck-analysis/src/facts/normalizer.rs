//! Numeral normalization
//!
//! Turns `1,250`, `2.5 million`, `$3k` into plain `f64` values. Anything that
//! does not parse yields `None`; callers drop the match.

use std::sync::LazyLock;

use regex::Regex;

/// `$`-prefixed amount: digits with optional separators and fraction, then an
/// optional magnitude.
static CURRENCY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\$\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s*(thousand|million|k|m)?$")
        .expect("valid currency regex")
});

/// Multiplier for a magnitude suffix, or `None` if the suffix is unknown.
pub fn magnitude_multiplier(suffix: &str) -> Option<f64> {
    match suffix {
        "" => Some(1.0),
        "k" | "K" => Some(1_000.0),
        "m" | "M" => Some(1_000_000.0),
        s if s.eq_ignore_ascii_case("thousand") => Some(1_000.0),
        s if s.eq_ignore_ascii_case("million") => Some(1_000_000.0),
        _ => None,
    }
}

/// Parse a numeral with an optional magnitude suffix.
///
/// Thousands separators must sit between digits (`1,250`, not `,125` or `12,`).
pub fn normalize_numeral(numeral: &str, magnitude: Option<&str>) -> Option<f64> {
    let numeral = numeral.trim();
    if numeral.is_empty() || numeral.starts_with(',') || numeral.ends_with(',') {
        return None;
    }
    if numeral.contains(",,") || numeral.contains(",.") {
        return None;
    }

    let plain: String = numeral.chars().filter(|c| *c != ',').collect();
    if !plain.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    let base: f64 = plain.parse().ok()?;

    let multiplier = magnitude_multiplier(magnitude.map(str::trim).unwrap_or(""))?;
    let value = base * multiplier;

    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse a `$<number>[<magnitude>]` amount.
pub fn normalize_currency(raw: &str) -> Option<f64> {
    let caps = CURRENCY_REGEX.captures(raw.trim())?;
    let numeral = caps.get(1)?.as_str();
    let magnitude = caps.get(2).map(|m| m.as_str());
    normalize_numeral(numeral, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers_and_decimals() {
        assert_eq!(normalize_numeral("42", None), Some(42.0));
        assert_eq!(normalize_numeral("3.75", None), Some(3.75));
        assert_eq!(normalize_numeral("1,250,000", None), Some(1_250_000.0));
    }

    #[test]
    fn test_magnitude_suffixes() {
        assert_eq!(normalize_numeral("5", Some("million")), Some(5_000_000.0));
        assert_eq!(normalize_numeral("5", Some("M")), Some(5_000_000.0));
        assert_eq!(normalize_numeral("5", Some("m")), Some(5_000_000.0));
        assert_eq!(normalize_numeral("2.5", Some("k")), Some(2_500.0));
        assert_eq!(normalize_numeral("3", Some("Thousand")), Some(3_000.0));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert_eq!(normalize_numeral("", None), None);
        assert_eq!(normalize_numeral("1.2.3", None), None);
        assert_eq!(normalize_numeral(",100", None), None);
        assert_eq!(normalize_numeral("100,", None), None);
        assert_eq!(normalize_numeral("-5", None), None);
        assert_eq!(normalize_numeral("5", Some("billion")), None);
    }

    #[test]
    fn test_currency() {
        assert_eq!(normalize_currency("$5 million"), Some(5_000_000.0));
        assert_eq!(normalize_currency("$1,200.50"), Some(1_200.5));
        assert_eq!(normalize_currency("$3k"), Some(3_000.0));
        assert_eq!(normalize_currency("$"), None);
        assert_eq!(normalize_currency("5 million"), None);
    }
}
