use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    output::ReturnFormat, spec::path_specification::PathSpecification, units::SpeedUnits,
};

/// Wire form of a path specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "PathSpecification")]
pub struct JsonPathSpecification {
    /// `[longitude, latitude]` vertices, in travel order.
    pub coordinates: Vec<[f64; 2]>,
    pub speed: JsonSpeed,
    pub time: JsonTimeWindow,

    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub return_format: Option<ReturnFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Speed")]
pub struct JsonSpeed {
    pub value: f64,
    pub units: SpeedUnits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "TimeWindow")]
pub struct JsonTimeWindow {
    /// Decimal hours.
    pub from: f64,
    /// Decimal hours.
    pub to: f64,
}

impl From<&PathSpecification> for JsonPathSpecification {
    fn from(value: &PathSpecification) -> Self {
        JsonPathSpecification {
            coordinates: value
                .coordinates()
                .coords()
                .map(|coord| [coord.x, coord.y])
                .collect(),
            speed: JsonSpeed {
                value: value.speed().value(),
                units: value.speed().units(),
            },
            time: JsonTimeWindow {
                from: value.time().from(),
                to: value.time().to(),
            },
            return_format: value.return_format(),
        }
    }
}
