//! Parsing of user-typed numerals

use crate::error::{Result, SessionError};

/// Parse one line of user input as an `f64`.
///
/// The text is taken as-is: surrounding whitespace makes it invalid. Finite
/// literals too large for `f64` are rejected rather than rounded to infinity.
pub fn parse_number(text: &str) -> Result<f64> {
    if signed_nan(text) {
        return Err(SessionError::InvalidNumber(text.to_string()));
    }

    let value: f64 = text
        .parse()
        .map_err(|_| SessionError::InvalidNumber(text.to_string()))?;

    if value.is_infinite() && !spells_infinity(text) {
        return Err(SessionError::InvalidNumber(text.to_string()));
    }

    Ok(value)
}

fn signed_nan(text: &str) -> bool {
    text.strip_prefix(['+', '-'])
        .is_some_and(|rest| rest.eq_ignore_ascii_case("nan"))
}

fn spells_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("4").unwrap(), 4.0);
        assert_eq!(parse_number("-2.5").unwrap(), -2.5);
        assert_eq!(parse_number("+3").unwrap(), 3.0);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["abc", "", "4 ", " 4", "1,5", "--1", "0x10", "-nan", "+NaN"] {
            match parse_number(bad) {
                Err(SessionError::InvalidNumber(text)) => assert_eq!(text, bad),
                other => panic!("Expected InvalidNumber for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_special_values() {
        assert_eq!(parse_number("inf").unwrap(), f64::INFINITY);
        assert_eq!(parse_number("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse_number("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_parse_overflow_is_invalid() {
        assert!(matches!(
            parse_number("1e400"),
            Err(SessionError::InvalidNumber(_))
        ));
        assert_eq!(parse_number("1e-400").unwrap(), 0.0);
    }
}
