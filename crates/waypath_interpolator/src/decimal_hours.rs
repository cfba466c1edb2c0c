//! Conversions between wall-clock values and decimal hours (5:30 is 5.5).

use jiff::civil::{DateTime, Time};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecimalHoursError {
    #[error("invalid time {0:?}, expected decimal hours or HH:MM[:SS]")]
    Invalid(String),

    #[error(transparent)]
    OutOfRange(#[from] jiff::Error),
}

pub fn from_time(time: Time) -> f64 {
    f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + f64::from(time.second()) / 3600.0
        + f64::from(time.subsec_nanosecond()) / 3_600_000_000_000.0
}

pub fn from_datetime(datetime: DateTime) -> f64 {
    from_time(datetime.time())
}

/// Parses either a finite decimal number (`"17.5"`) or a wall-clock time
/// (`"17:30"`, `"17:30:15"`).
pub fn parse(input: &str) -> Result<f64, DecimalHoursError> {
    let input = input.trim();

    if !input.contains(':') {
        return input
            .parse::<f64>()
            .ok()
            .filter(|hours| hours.is_finite())
            .ok_or_else(|| DecimalHoursError::Invalid(input.to_owned()));
    }

    let parts = input
        .split(':')
        .map(|part| part.parse::<i8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| DecimalHoursError::Invalid(input.to_owned()))?;

    let time = match parts.as_slice() {
        [hour, minute] => Time::new(*hour, *minute, 0, 0)?,
        [hour, minute, second] => Time::new(*hour, *minute, *second, 0)?,
        _ => return Err(DecimalHoursError::Invalid(input.to_owned())),
    };

    Ok(from_time(time))
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_from_time() {
        assert_eq!(from_time(time(5, 0, 0, 0)), 5.0);
        assert_eq!(from_time(time(22, 30, 0, 0)), 22.5);
        assert_eq!(from_time(time(0, 0, 36, 0)), 0.01);
    }

    #[test]
    fn test_from_datetime_ignores_date() {
        let datetime = date(2016, 10, 21).at(17, 0, 0, 0);
        assert_eq!(from_datetime(datetime), 17.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("17").unwrap(), 17.0);
        assert_eq!(parse("17.25").unwrap(), 17.25);
        assert_eq!(parse("22:30").unwrap(), 22.5);
        assert_eq!(parse(" 08:15 ").unwrap(), 8.25);
        assert_eq!(parse("00:00:36").unwrap(), 0.01);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse("noon"), Err(DecimalHoursError::Invalid(_))));
        assert!(matches!(parse("1:2:3:4"), Err(DecimalHoursError::Invalid(_))));
        assert!(matches!(parse("25:00"), Err(DecimalHoursError::OutOfRange(_))));
    }

    #[test]
    fn test_parse_rejects_non_finite_numbers() {
        for input in ["inf", "-inf", "infinity", "NaN", "1e400"] {
            assert!(
                matches!(parse(input), Err(DecimalHoursError::Invalid(_))),
                "{input} should be rejected"
            );
        }
    }
}
