// ============================================================
// Layer 3 — Time of Day
// ============================================================
// Turns a clock string like "7:45" into minutes since midnight
// (7 * 60 + 45 = 465).
//
// Rules:
//   - exactly one ':' separator
//   - each side is an integer, surrounding whitespace allowed
//   - no range check: "25:99" is accepted as 1599
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// Why a time string could not be converted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time value '{0}' has no ':' separator")]
    MissingSeparator(String),

    #[error("time value '{0}' must have exactly one ':' separator")]
    TooManyParts(String),

    #[error("time value '{value}' has a non-integer {part} component")]
    NotAnInteger { value: String, part: &'static str },

    #[error("time value '{0}' is out of range")]
    Overflow(String),
}

/// Convert "H:MM" into minutes since midnight.
pub fn minutes_since_midnight(value: &str) -> Result<i64, TimeParseError> {
    let mut parts = value.split(':');

    // split() always yields at least one item
    let hours_str = parts.next().unwrap_or_default();
    let minutes_str = parts
        .next()
        .ok_or_else(|| TimeParseError::MissingSeparator(value.to_string()))?;
    if parts.next().is_some() {
        return Err(TimeParseError::TooManyParts(value.to_string()));
    }

    let hours = parse_component(value, hours_str, "hours")?;
    let minutes = parse_component(value, minutes_str, "minutes")?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| TimeParseError::Overflow(value.to_string()))
}

fn parse_component(value: &str, part: &str, label: &'static str) -> Result<i64, TimeParseError> {
    part.trim()
        .parse::<i64>()
        .map_err(|_| TimeParseError::NotAnInteger {
            value: value.to_string(),
            part:  label,
        })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morning_time() {
        assert_eq!(minutes_since_midnight("7:45"), Ok(465));
    }

    #[test]
    fn test_midnight() {
        assert_eq!(minutes_since_midnight("0:00"), Ok(0));
    }

    #[test]
    fn test_leading_zero_and_whitespace() {
        assert_eq!(minutes_since_midnight("07:05"), Ok(425));
        assert_eq!(minutes_since_midnight(" 23 : 59 "), Ok(1439));
    }

    #[test]
    fn test_no_range_check() {
        assert_eq!(minutes_since_midnight("25:99"), Ok(1599));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            minutes_since_midnight("abc"),
            Err(TimeParseError::MissingSeparator("abc".to_string()))
        );
    }

    #[test]
    fn test_seconds_are_rejected() {
        assert!(matches!(
            minutes_since_midnight("7:45:00"),
            Err(TimeParseError::TooManyParts(_))
        ));
    }

    #[test]
    fn test_non_integer_parts() {
        assert!(matches!(
            minutes_since_midnight("x:10"),
            Err(TimeParseError::NotAnInteger { part: "hours", .. })
        ));
        assert!(matches!(
            minutes_since_midnight("7:4.5"),
            Err(TimeParseError::NotAnInteger { part: "minutes", .. })
        ));
        assert!(minutes_since_midnight(":").is_err());
    }

    #[test]
    fn test_overflow() {
        let huge = format!("{}:00", i64::MAX);
        assert!(matches!(
            minutes_since_midnight(&huge),
            Err(TimeParseError::Overflow(_))
        ));
    }
}
