use geo_types::{Coord, LineString, Point};

use crate::{geometry::GeometryProvider, units::DistanceUnit};

/// Great-circle geometry over a sphere whose radius depends on the distance
/// unit (see [`DistanceUnit::earth_radius`]).
///
/// Points inside a segment are found by walking back from the segment's end
/// vertex along the reverse bearing, which keeps results identical to the
/// usual web mapping toolkits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SphericalGeometry;

impl GeometryProvider for SphericalGeometry {
    fn line_length(&self, line: &LineString<f64>, unit: DistanceUnit) -> f64 {
        line.lines()
            .map(|segment| haversine_distance(segment.start, segment.end, unit))
            .sum()
    }

    fn point_at_distance(
        &self,
        line: &LineString<f64>,
        distance: f64,
        unit: DistanceUnit,
    ) -> Point<f64> {
        let coords = &line.0;
        let mut travelled = 0.0;

        for (i, coord) in coords.iter().enumerate() {
            if travelled >= distance {
                let overshot = distance - travelled;
                if i == 0 || overshot == 0.0 {
                    return Point::from(*coord);
                }

                let direction = bearing(*coord, coords[i - 1]) - 180.0;
                return destination(*coord, overshot, direction, unit);
            }

            if let Some(next) = coords.get(i + 1) {
                travelled += haversine_distance(*coord, *next, unit);
            }
        }

        match coords.last() {
            Some(last) => Point::from(*last),
            None => Point::new(f64::NAN, f64::NAN),
        }
    }
}

pub fn haversine_distance(from: Coord<f64>, to: Coord<f64>, unit: DistanceUnit) -> f64 {
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    c * unit.earth_radius()
}

/// Initial bearing from `from` to `to`, in degrees within `[-180, 180]`.
pub fn bearing(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lon1 = from.x.to_radians();
    let lon2 = to.x.to_radians();
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();

    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();

    a.atan2(b).to_degrees()
}

/// Point reached after travelling `distance` from `origin` with the given
/// initial `bearing` (degrees). A negative distance travels backwards.
pub fn destination(
    origin: Coord<f64>,
    distance: f64,
    bearing: f64,
    unit: DistanceUnit,
) -> Point<f64> {
    let lon1 = origin.x.to_radians();
    let lat1 = origin.y.to_radians();
    let bearing = bearing.to_radians();
    let angular_distance = distance / unit.earth_radius();

    let lat2 = (lat1.sin() * angular_distance.cos()
        + lat1.cos() * angular_distance.sin() * bearing.cos())
    .asin();
    let lon2 = lon1
        + (bearing.sin() * angular_distance.sin() * lat1.cos())
            .atan2(angular_distance.cos() - lat1.sin() * lat2.sin());

    Point::new(lon2.to_degrees(), lat2.to_degrees())
}
