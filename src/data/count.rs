//! Count parsing and identifier formatting shared by all tables.

use crate::error::{PlotDataError, Result};

/// Largest float below which every integral value is exactly representable.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Parse a count cell into an integer.
///
/// Accepts unsigned integers and integral floating-point literals such as
/// `10.0` or `1e3`, which is how counts look after passing through a
/// float-typed tool. Fractional, negative, non-finite and empty values are
/// rejected rather than truncated, as are floats at or above 2^53 whose
/// integer value cannot be recovered exactly.
///
/// `row` and `column` only feed the error message.
pub fn parse_count(raw: &str, row: usize, column: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }

    let invalid = || PlotDataError::InvalidCount {
        value: raw.to_string(),
        row,
        column: column.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= MAX_EXACT_FLOAT {
        return Err(invalid());
    }
    Ok(value as u64)
}

/// Parse a cell that must hold a plain unsigned integer.
///
/// Unlike [`parse_count`], float literals such as `10.0` are rejected.
pub fn parse_integer_count(raw: &str, row: usize, column: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| PlotDataError::InvalidCount {
        value: raw.to_string(),
        row,
        column: column.to_string(),
    })
}

/// Render a normalized identifier.
///
/// Uses the shortest representation that round-trips and always keeps a
/// decimal point, so `1/1` is written as `1.0`.
pub fn format_id(id: f64) -> String {
    format!("{:?}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_count("42", 0, "Count").unwrap(), 42);
        assert_eq!(parse_count(" 7 ", 0, "Count").unwrap(), 7);
        assert_eq!(parse_count("+3", 0, "Count").unwrap(), 3);
    }

    #[test]
    fn test_parse_integral_float() {
        assert_eq!(parse_count("10.0", 0, "Count").unwrap(), 10);
        assert_eq!(parse_count("1e3", 0, "Count").unwrap(), 1000);
    }

    #[test]
    fn test_reject_non_integral() {
        let err = parse_count("10.5", 3, "Count").unwrap_err();
        match err {
            PlotDataError::InvalidCount { value, row, column } => {
                assert_eq!(value, "10.5");
                assert_eq!(row, 3);
                assert_eq!(column, "Count");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reject_garbage() {
        assert!(parse_count("", 0, "Count").is_err());
        assert!(parse_count("abc", 0, "Count").is_err());
        assert!(parse_count("-1", 0, "Count").is_err());
        assert!(parse_count("NaN", 0, "Count").is_err());
        assert!(parse_count("inf", 0, "Count").is_err());
    }

    #[test]
    fn test_reject_out_of_range_floats() {
        assert!(parse_count("18446744073709551616", 0, "Count").is_err());
        assert!(parse_count("1e300", 0, "Count").is_err());
        assert!(parse_count("9007199254740993.0", 0, "Count").is_err());
        assert_eq!(
            parse_count("18446744073709551615", 0, "Count").unwrap(),
            u64::MAX
        );
        assert_eq!(
            parse_count("9007199254740991.0", 0, "Count").unwrap(),
            9_007_199_254_740_991
        );
    }

    #[test]
    fn test_integer_count_is_strict() {
        assert_eq!(parse_integer_count(" 7 ", 0, "Freq:").unwrap(), 7);
        assert!(parse_integer_count("10.0", 0, "Freq:").is_err());
        assert!(parse_integer_count("1e3", 0, "Freq:").is_err());
        assert!(parse_integer_count("", 0, "Freq:").is_err());
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1.0), "1.0");
        assert_eq!(format_id(0.5), "0.5");
        assert_eq!(format_id(1.0 / 3.0), "0.3333333333333333");
    }
}
