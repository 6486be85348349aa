//! Compact general formatting of results

/// Exponents at or beyond this switch to scientific notation.
const SCIENTIFIC_UPPER: i32 = 6;
/// Exponents below this switch to scientific notation.
const SCIENTIFIC_LOWER: i32 = -4;

/// Format a value with the shortest digits that round-trip, choosing plain or
/// scientific notation by the decimal exponent.
///
/// ```
/// use hello_remote::format_general;
///
/// assert_eq!(format_general(6.0), "6");
/// assert_eq!(format_general(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(format_general(1e6), "1e+06");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "-1.25e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return value.to_string(),
    };

    if (SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
