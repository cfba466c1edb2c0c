use geo_types::LineString;

use crate::{
    output::ReturnFormat,
    units::{DistanceUnit, Speed},
};

/// Where a query instant falls relative to the travel window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelPhase {
    NotStarted,
    Travelling,
    Finished,
}

/// Travel window in decimal hours. `from <= to` is not required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    from: f64,
    to: f64,
}

impl TimeWindow {
    pub fn new(from: f64, to: f64) -> Self {
        TimeWindow { from, to }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    /// Scheduled travel time, in hours. Negative when the window is reversed.
    pub fn duration(&self) -> f64 {
        self.to - self.from
    }

    pub fn phase(&self, decimal_hours: f64) -> TravelPhase {
        if decimal_hours < self.from {
            TravelPhase::NotStarted
        } else if decimal_hours > self.to {
            TravelPhase::Finished
        } else {
            TravelPhase::Travelling
        }
    }
}

/// A validated path specification. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpecification {
    coordinates: LineString<f64>,
    speed: Speed,
    time: TimeWindow,
    return_format: Option<ReturnFormat>,
}

impl PathSpecification {
    pub(crate) fn new(
        coordinates: LineString<f64>,
        speed: Speed,
        time: TimeWindow,
        return_format: Option<ReturnFormat>,
    ) -> Self {
        PathSpecification {
            coordinates,
            speed,
            time,
            return_format,
        }
    }

    pub fn coordinates(&self) -> &LineString<f64> {
        &self.coordinates
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn time(&self) -> TimeWindow {
        self.time
    }

    /// The requested format, `None` when the specification did not set one.
    pub fn return_format(&self) -> Option<ReturnFormat> {
        self.return_format
    }

    pub fn output_format(&self) -> ReturnFormat {
        self.return_format.unwrap_or_default()
    }

    pub fn distance_unit(&self) -> DistanceUnit {
        self.speed.units().distance_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase() {
        let window = TimeWindow::new(10.0, 22.0);

        assert_eq!(window.phase(5.0), TravelPhase::NotStarted);
        assert_eq!(window.phase(9.999), TravelPhase::NotStarted);
        assert_eq!(window.phase(10.0), TravelPhase::Travelling);
        assert_eq!(window.phase(17.0), TravelPhase::Travelling);
        assert_eq!(window.phase(22.0), TravelPhase::Travelling);
        assert_eq!(window.phase(22.5), TravelPhase::Finished);
        assert_eq!(window.duration(), 12.0);
    }

    #[test]
    fn test_phase_of_non_finite_hours() {
        let window = TimeWindow::new(10.0, 22.0);

        assert_eq!(window.phase(f64::NEG_INFINITY), TravelPhase::NotStarted);
        assert_eq!(window.phase(f64::INFINITY), TravelPhase::Finished);
        assert_eq!(window.phase(f64::NAN), TravelPhase::Travelling);
    }

    #[test]
    fn test_reversed_window_is_kept() {
        let window = TimeWindow::new(22.0, 10.0);

        assert_eq!(window.duration(), -12.0);
        // Every instant is either before `from` or after `to`.
        assert_eq!(window.phase(15.0), TravelPhase::NotStarted);
        assert_eq!(window.phase(23.0), TravelPhase::Finished);
    }
}
