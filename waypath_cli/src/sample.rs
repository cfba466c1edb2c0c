use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use serde::Serialize;
use tracing::debug;
use waypath_interpolator::{MultilinePositionInterpolator, Position};

use crate::{parsers, spec_file};

const MAX_SAMPLES: usize = 100_000;

#[derive(Args)]
pub struct SampleArgs {
    /// Path specification file (JSON). Falls back to $WAYPATH_SPEC.
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// First sampled instant, as decimal hours or wall-clock
    #[arg(long, value_parser = parsers::parse_decimal_hours)]
    start: f64,

    /// Last sampled instant (inclusive)
    #[arg(long, value_parser = parsers::parse_decimal_hours)]
    end: f64,

    /// Sampling step (e.g., "15m", "PT1H", "90")
    #[arg(long, value_parser = parsers::parse_duration)]
    step: jiff::SignedDuration,
}

#[derive(Serialize)]
pub struct Sample {
    pub hours: f64,
    pub position: Position,
}

pub fn run(args: SampleArgs) -> Result<(), anyhow::Error> {
    let path = spec_file::resolve_spec_path(args.spec)?;
    let interpolator = spec_file::load_interpolator(&path)?;

    let samples = sample(&interpolator, args.start, args.end, args.step)?;
    debug!("Sampled {} positions", samples.len());

    println!("{}", serde_json::to_string_pretty(&samples)?);

    Ok(())
}

pub fn sample(
    interpolator: &MultilinePositionInterpolator,
    start: f64,
    end: f64,
    step: jiff::SignedDuration,
) -> Result<Vec<Sample>, anyhow::Error> {
    let step_hours = step.as_secs_f64() / 3600.0;

    if step_hours <= 0.0 {
        bail!("step must be positive, got {step}");
    }
    if end < start {
        bail!("end ({end}) is before start ({start})");
    }

    if !start.is_finite() || !end.is_finite() {
        bail!("start ({start}) and end ({end}) must be finite");
    }

    // Count steps up front so the sampled instants don't accumulate rounding.
    let steps = ((end - start) / step_hours).floor();
    if steps >= MAX_SAMPLES as f64 {
        bail!("{start}..{end} every {step} exceeds {MAX_SAMPLES} samples");
    }
    let count = steps as usize;

    Ok((0..=count)
        .map(|i| {
            let hours = start + i as f64 * step_hours;
            Sample {
                hours,
                position: interpolator.interpolate(hours),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn interpolator() -> MultilinePositionInterpolator {
        MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [3, 4], [5, 6]],
            "speed": { "value": 30, "units": "km/h" },
            "time": { "from": 10, "to": 22 },
            "return": "geo:point"
        }))
        .unwrap()
    }

    #[test]
    fn test_sample_includes_both_ends() {
        let samples = sample(
            &interpolator(),
            8.0,
            12.0,
            jiff::SignedDuration::from_mins(30),
        )
        .unwrap();

        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0].hours, 8.0);
        assert_eq!(samples[8].hours, 12.0);
        assert_eq!(samples[0].position, Position::GeoPoint("1,2".to_owned()));
    }

    #[test]
    fn test_sample_rejects_bad_ranges() {
        let interpolator = interpolator();

        assert!(sample(&interpolator, 8.0, 12.0, jiff::SignedDuration::ZERO).is_err());
        assert!(sample(&interpolator, 12.0, 8.0, jiff::SignedDuration::from_mins(5)).is_err());
    }

    #[test]
    fn test_sample_rejects_unbounded_ranges() {
        let interpolator = interpolator();
        let step = jiff::SignedDuration::from_mins(30);

        assert!(sample(&interpolator, 0.0, f64::INFINITY, step).is_err());
        assert!(sample(&interpolator, f64::NAN, 12.0, step).is_err());
        assert!(sample(&interpolator, 0.0, 1e12, step).is_err());
        assert!(sample(&interpolator, 0.0, 1e12, jiff::SignedDuration::from_nanos(1)).is_err());
    }

    #[test]
    fn test_sample_at_the_limit() {
        let samples = sample(
            &interpolator(),
            0.0,
            (MAX_SAMPLES - 1) as f64,
            jiff::SignedDuration::from_hours(1),
        )
        .unwrap();

        assert_eq!(samples.len(), MAX_SAMPLES);
    }
}
