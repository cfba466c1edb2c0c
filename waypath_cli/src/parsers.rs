use jiff::SpanRelativeTo;
use waypath_interpolator::decimal_hours;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        if seconds < 0 {
            return Err(String::from("Duration must not be negative"));
        }
        return Ok(jiff::SignedDuration::from_secs(seconds));
    }

    Err(String::from("Invalid duration"))
}

pub fn parse_decimal_hours(input: &str) -> Result<f64, String> {
    decimal_hours::parse(input).map_err(|error| error.to_string())
}
