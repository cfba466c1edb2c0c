use std::fmt;

use geo_types::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ReturnFormat {
    /// A GeoJSON `Point` geometry.
    #[default]
    #[serde(rename = "geo:json")]
    GeoJson,
    /// `"<longitude>,<latitude>"`.
    #[serde(rename = "geo:point")]
    GeoPoint,
}

impl ReturnFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "geo:json" => Some(ReturnFormat::GeoJson),
            "geo:point" => Some(ReturnFormat::GeoPoint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnFormat::GeoJson => "geo:json",
            ReturnFormat::GeoPoint => "geo:point",
        }
    }
}

/// A rendered position, as returned by the interpolator queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Position {
    GeoJson(geojson::Geometry),
    GeoPoint(String),
}

impl Position {
    pub fn format(point: Point<f64>, format: ReturnFormat) -> Self {
        match format {
            ReturnFormat::GeoJson => Position::GeoJson(geojson::Geometry::new(
                geojson::Value::Point(vec![point.x(), point.y()]),
            )),
            ReturnFormat::GeoPoint => Position::GeoPoint(format!("{},{}", point.x(), point.y())),
        }
    }

    pub fn as_geometry(&self) -> Option<&geojson::Geometry> {
        match self {
            Position::GeoJson(geometry) => Some(geometry),
            Position::GeoPoint(_) => None,
        }
    }

    pub fn as_geo_point(&self) -> Option<&str> {
        match self {
            Position::GeoJson(_) => None,
            Position::GeoPoint(value) => Some(value),
        }
    }

    /// The `[longitude, latitude]` pair of a GeoJSON position.
    pub fn coordinates(&self) -> Option<[f64; 2]> {
        match self.as_geometry().map(|geometry| &geometry.value) {
            Some(geojson::Value::Point(position)) if position.len() == 2 => {
                Some([position[0], position[1]])
            }
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::GeoJson(geometry) => {
                let json = serde_json::to_string(geometry).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            Position::GeoPoint(value) => f.write_str(value),
        }
    }
}
