use geo_types::Point;
use tracing::{debug, instrument, trace};

use crate::{
    error::InvalidInterpolationSpec,
    geometry::{GeometryProvider, SphericalGeometry},
    mapper,
    output::Position,
    path_model::PathModel,
    spec::{PathSpecification, SpecInput, validator},
};

/// Places an entity travelling at constant speed along a multi-point path at
/// any query instant.
///
/// Built once from a specification; every query afterwards is pure, so a
/// single interpolator can be shared between threads.
#[derive(Debug, Clone)]
pub struct MultilinePositionInterpolator<G = SphericalGeometry> {
    spec: PathSpecification,
    path: PathModel<G>,
}

impl MultilinePositionInterpolator {
    pub fn new(input: impl Into<SpecInput>) -> Result<Self, InvalidInterpolationSpec> {
        Self::with_provider(input, SphericalGeometry)
    }
}

impl<G> MultilinePositionInterpolator<G>
where
    G: GeometryProvider,
{
    #[instrument(skip_all)]
    pub fn with_provider(
        input: impl Into<SpecInput>,
        provider: G,
    ) -> Result<Self, InvalidInterpolationSpec> {
        let input = input.into();
        let raw = input.raw();

        let spec = validator::validate(input)?;
        let path = PathModel::build(spec.coordinates().clone(), spec.distance_unit(), provider)
            .map_err(|violation| {
                debug!(?violation, "rejected path geometry");
                InvalidInterpolationSpec::new(raw, violation)
            })?;

        debug!(
            vertices = spec.coordinates().0.len(),
            unit = %path.unit(),
            total_length = path.total_length(),
            "built multiline position interpolator"
        );

        Ok(MultilinePositionInterpolator { spec, path })
    }

    pub fn spec(&self) -> &PathSpecification {
        &self.spec
    }

    pub fn path(&self) -> &PathModel<G> {
        &self.path
    }

    /// Distance along the path at `decimal_hours`, in `[0, total_length)`.
    pub fn traveled_distance_at(&self, decimal_hours: f64) -> f64 {
        let distance =
            mapper::traveled_distance(self.spec.speed(), self.spec.time(), decimal_hours);
        mapper::wrap_distance(distance, self.path.total_length())
    }

    pub fn position_at(&self, decimal_hours: f64) -> Point<f64> {
        let distance = self.traveled_distance_at(decimal_hours);
        trace!(decimal_hours, distance, "resolving position");
        self.path.point_at_distance(distance)
    }

    /// Position at `decimal_hours`, rendered in the requested return format.
    pub fn interpolate(&self, decimal_hours: f64) -> Position {
        Position::format(self.position_at(decimal_hours), self.spec.output_format())
    }

    /// Turns the interpolator into its query function.
    pub fn into_fn(self) -> impl Fn(f64) -> Position {
        move |decimal_hours| self.interpolate(decimal_hours)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{error::SpecViolation, units::DistanceUnit};

    fn interpolator() -> MultilinePositionInterpolator {
        MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [3, 4], [5, 6]],
            "speed": { "value": 30, "units": "km/h" },
            "time": { "from": 10, "to": 22 }
        }))
        .unwrap()
    }

    #[test]
    fn test_before_start_sits_at_first_vertex() {
        let interpolator = interpolator();

        assert_eq!(interpolator.position_at(5.0), Point::new(1.0, 2.0));
        assert_eq!(interpolator.position_at(9.99), Point::new(1.0, 2.0));
        assert_eq!(interpolator.position_at(f64::NEG_INFINITY), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_after_end_is_frozen() {
        let interpolator = interpolator();
        let frozen = interpolator.position_at(22.0);

        assert_eq!(interpolator.position_at(22.5), frozen);
        assert_eq!(interpolator.position_at(23.0), frozen);
        assert_eq!(interpolator.position_at(f64::INFINITY), frozen);
    }

    #[test]
    fn test_wraps_around_inside_window() {
        // Long window: 30 km/h for 100 h covers the ~628 km path several times.
        let interpolator = MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [3, 4], [5, 6]],
            "speed": { "value": 30, "units": "km/h" },
            "time": { "from": 0, "to": 100 }
        }))
        .unwrap();

        let total_length = interpolator.path().total_length();
        let lap_hours = total_length / 30.0;

        let distance = interpolator.traveled_distance_at(lap_hours + 7.0);
        assert!((distance - 210.0).abs() < 1e-9);

        let first_lap = interpolator.position_at(7.0);
        let second_lap = interpolator.position_at(lap_hours + 7.0);
        assert!((first_lap.x() - second_lap.x()).abs() < 1e-9);
        assert!((first_lap.y() - second_lap.y()).abs() < 1e-9);
    }

    #[test]
    fn test_miles_use_miles_for_distance() {
        let interpolator = MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [3, 4], [5, 6]],
            "speed": { "value": 30, "units": "mi/h" },
            "time": { "from": 10, "to": 22 }
        }))
        .unwrap();

        assert_eq!(interpolator.path().unit(), DistanceUnit::Miles);
        assert!((interpolator.traveled_distance_at(17.0) - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_hours_propagate() {
        let point = interpolator().position_at(f64::NAN);
        assert!(point.x().is_nan() && point.y().is_nan());
    }

    #[test]
    fn test_reversed_window_stays_on_path() {
        let interpolator = MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [3, 4], [5, 6]],
            "speed": { "value": 30, "units": "km/h" },
            "time": { "from": 22, "to": 10 }
        }))
        .unwrap();

        let total_length = interpolator.path().total_length();
        for hours in [5.0, 15.0, 23.0] {
            let distance = interpolator.traveled_distance_at(hours);
            assert!((0.0..total_length).contains(&distance));
        }
    }

    #[test]
    fn test_degenerate_path_is_rejected() {
        let error = MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [1, 2]],
            "speed": { "value": 30, "units": "km/h" },
            "time": { "from": 10, "to": 22 }
        }))
        .unwrap_err();

        assert_eq!(
            error.violation(),
            &SpecViolation::DegeneratePath { length: 0.0 }
        );
    }

    #[test]
    fn test_huge_speed_is_rejected_at_construction() {
        let error = MultilinePositionInterpolator::new(json!({
            "coordinates": [[1, 2], [3, 4], [5, 6]],
            "speed": { "value": 1e308, "units": "km/h" },
            "time": { "from": 10, "to": 22 }
        }))
        .unwrap_err();

        assert_eq!(error.violation(), &SpecViolation::UnboundedTravel);
    }

    #[test]
    fn test_query_function() {
        let query = interpolator().into_fn();
        assert_eq!(query(5.0).coordinates(), Some([1.0, 2.0]));
    }

    #[test]
    fn test_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MultilinePositionInterpolator>();
    }
}
