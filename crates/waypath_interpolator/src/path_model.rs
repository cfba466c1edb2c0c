use geo_types::{LineString, Point};

use crate::{
    error::SpecViolation,
    geometry::{GeometryProvider, SphericalGeometry},
    units::DistanceUnit,
};

/// Validated path geometry with its total length computed once.
#[derive(Debug, Clone)]
pub struct PathModel<G = SphericalGeometry> {
    line: LineString<f64>,
    unit: DistanceUnit,
    total_length: f64,
    provider: G,
}

impl<G> PathModel<G>
where
    G: GeometryProvider,
{
    /// Fails when the path has no positive, finite length, since positions are
    /// wrapped modulo that length.
    pub fn build(
        line: LineString<f64>,
        unit: DistanceUnit,
        provider: G,
    ) -> Result<Self, SpecViolation> {
        let total_length = provider.line_length(&line, unit);

        if !total_length.is_finite() || total_length <= 0.0 {
            return Err(SpecViolation::DegeneratePath {
                length: total_length,
            });
        }

        Ok(PathModel {
            line,
            unit,
            total_length,
            provider,
        })
    }

    pub fn line(&self) -> &LineString<f64> {
        &self.line
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Point `distance` along the path, clamped to `[0, total_length]`.
    /// A `NaN` distance yields a point with `NaN` coordinates.
    pub fn point_at_distance(&self, distance: f64) -> Point<f64> {
        if distance.is_nan() {
            return Point::new(f64::NAN, f64::NAN);
        }

        let distance = distance.clamp(0.0, self.total_length);
        self.provider
            .point_at_distance(&self.line, distance, self.unit)
    }

    pub fn start(&self) -> Point<f64> {
        self.point_at_distance(0.0)
    }
}
