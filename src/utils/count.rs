//! Address count parsing.
//!
//! This module validates the positional count argument before any work is
//! done, so a bad invocation never creates an output file.

/// Errors produced while parsing a requested address count
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    #[error("'{0}' is not a number, please provide a valid positive number")]
    NotNumeric(String),

    #[error("{0} is not positive, please provide a valid positive number")]
    NotPositive(i128),

    #[error("{0} is too large for this platform")]
    TooLarge(String),
}

/// Parse a requested address count (e.g. "500000")
///
/// Leading and trailing whitespace is ignored. Zero, negative values and
/// anything that is not a base-10 integer are rejected.
///
/// # Examples
/// ```
/// use ipsynth::utils::count::parse_count;
///
/// assert_eq!(parse_count("500000"), Ok(500000));
/// assert!(parse_count("0").is_err());
/// assert!(parse_count("-5").is_err());
/// assert!(parse_count("lots").is_err());
/// ```
pub fn parse_count(value: &str) -> Result<usize, CountError> {
    let value = value.trim();

    let parsed: i128 = value
        .parse()
        .map_err(|_| CountError::NotNumeric(value.to_string()))?;

    if parsed <= 0 {
        return Err(CountError::NotPositive(parsed));
    }

    usize::try_from(parsed).map_err(|_| CountError::TooLarge(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1"), Ok(1));
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count(" 500000 "), Ok(500000));
        assert_eq!(parse_count("+12"), Ok(12));

        assert_eq!(parse_count("0"), Err(CountError::NotPositive(0)));
        assert_eq!(parse_count("-5"), Err(CountError::NotPositive(-5)));
        assert_eq!(parse_count("abc"), Err(CountError::NotNumeric("abc".to_string())));
        assert_eq!(parse_count("1.5"), Err(CountError::NotNumeric("1.5".to_string())));
        assert!(parse_count("").is_err());
        assert!(matches!(
            parse_count("999999999999999999999999999999"),
            Err(CountError::TooLarge(_))
        ));
    }
}
