use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Units a speed can be expressed in. The distance unit used to measure the
/// path follows from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SpeedUnits {
    #[serde(rename = "km/h")]
    KilometersPerHour,
    #[serde(rename = "mi/h")]
    MilesPerHour,
}

impl SpeedUnits {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "km/h" => Some(SpeedUnits::KilometersPerHour),
            "mi/h" => Some(SpeedUnits::MilesPerHour),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedUnits::KilometersPerHour => "km/h",
            SpeedUnits::MilesPerHour => "mi/h",
        }
    }

    pub fn distance_unit(&self) -> DistanceUnit {
        match self {
            SpeedUnits::KilometersPerHour => DistanceUnit::Kilometers,
            SpeedUnits::MilesPerHour => DistanceUnit::Miles,
        }
    }
}

impl fmt::Display for SpeedUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Radius of the sphere used for geodesic computations, in this unit.
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 6373.0,
            DistanceUnit::Miles => 3960.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constant travel speed, in distance units per hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    value: f64,
    units: SpeedUnits,
}

impl Speed {
    pub fn new(value: f64, units: SpeedUnits) -> Self {
        Speed { value, units }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn units(&self) -> SpeedUnits {
        self.units
    }

    /// Distance covered after `hours`, in [`SpeedUnits::distance_unit`].
    pub fn distance_after(&self, hours: f64) -> f64 {
        self.value * hours
    }
}
