//! Currency string normalization.

/// Parse a currency-formatted price such as `£51.77` into a number.
///
/// Every character that is not an ASCII digit or `.` is dropped before
/// parsing. Returns `None` when nothing numeric remains or the remainder is
/// malformed (for example two decimal points); this never panics.
pub fn parse_price(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to two decimal places for reporting.
///
/// Rounds the exact binary value, with ties to even, so `0.125` becomes
/// `0.12` and a mean stored just below `x.xx5` rounds down. Scaling by 100
/// first would push such values across the tie.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
