//! Conversion of raw path segments and form fields into typed arguments.

use crate::error::{Result, StoreError};

/// Parse a todo id from a path segment.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| StoreError::InvalidArgument("id is not numeric".to_string()))
}

/// Parse a completion flag from a form value.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Everything else, including an empty value, is rejected.
pub fn parse_status(raw: &str) -> Result<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(StoreError::InvalidArgument(
            "failed to parse bool".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_signed_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("+3").unwrap(), 3);
        assert_eq!(parse_id("-1").unwrap(), -1);
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        for raw in ["abc", "", "1.5", " 1", "0x10"] {
            let err = parse_id(raw).unwrap_err();
            assert!(matches!(err, StoreError::InvalidArgument(_)), "{raw:?}");
        }
    }

    #[test]
    fn parse_status_true_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_status(raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn parse_status_false_spellings() {
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_status(raw).unwrap(), "{raw}");
        }
    }

    #[test]
    fn parse_status_rejects_other_values() {
        for raw in ["", "yes", "tRUE", "2", "done"] {
            let err = parse_status(raw).unwrap_err();
            assert_eq!(err.to_string(), "failed to parse bool");
        }
    }
}
