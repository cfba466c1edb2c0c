use geo_types::{LineString, Point};

use crate::units::DistanceUnit;

/// Distance and point-at-distance computations over an ordered sequence of
/// `[longitude, latitude]` vertices.
///
/// Implementations must be pure: the interpolator calls them from any number
/// of threads against the same line.
pub trait GeometryProvider {
    /// Total length of the line, in `unit`. Never negative.
    fn line_length(&self, line: &LineString<f64>, unit: DistanceUnit) -> f64;

    /// Point located `distance` along the line, measured in `unit`.
    ///
    /// Distances below zero resolve to the first vertex and distances past the
    /// end of the line resolve to the last one.
    fn point_at_distance(
        &self,
        line: &LineString<f64>,
        distance: f64,
        unit: DistanceUnit,
    ) -> Point<f64>;
}

impl<G> GeometryProvider for &G
where
    G: GeometryProvider + ?Sized,
{
    fn line_length(&self, line: &LineString<f64>, unit: DistanceUnit) -> f64 {
        (**self).line_length(line, unit)
    }

    fn point_at_distance(
        &self,
        line: &LineString<f64>,
        distance: f64,
        unit: DistanceUnit,
    ) -> Point<f64> {
        (**self).point_at_distance(line, distance, unit)
    }
}
