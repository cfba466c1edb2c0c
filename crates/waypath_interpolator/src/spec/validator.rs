use geo_types::{Coord, LineString};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{InvalidInterpolationSpec, SpecViolation},
    output::ReturnFormat,
    spec::{
        path_specification::{PathSpecification, TimeWindow},
        spec_input::SpecInput,
    },
    units::{Speed, SpeedUnits},
};

/// Validates a raw specification. Checks run in order (coordinates, speed,
/// time, return format) and stop at the first violation.
pub fn validate(
    input: impl Into<SpecInput>,
) -> Result<PathSpecification, InvalidInterpolationSpec> {
    let input = input.into();
    let raw = input.raw();

    let result = input
        .into_value()
        .map_err(|error| SpecViolation::UnparsableText(error.to_string()))
        .and_then(|value| validate_value(&value));

    result.map_err(|violation| {
        debug!(?violation, "rejected path specification");
        InvalidInterpolationSpec::new(raw, violation)
    })
}

pub fn validate_value(value: &Value) -> Result<PathSpecification, SpecViolation> {
    let object = value.as_object().ok_or(SpecViolation::NotAnObject)?;

    let coordinates = validate_coordinates(object)?;
    let speed = validate_speed(object)?;
    let time = validate_time(object)?;

    if !speed.distance_after(time.duration().abs()).is_finite() {
        return Err(SpecViolation::UnboundedTravel);
    }

    let return_format = validate_return_format(object)?;

    Ok(PathSpecification::new(
        coordinates,
        speed,
        time,
        return_format,
    ))
}

/// Absent and `null` members are treated the same.
fn member<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn validate_coordinates(object: &Map<String, Value>) -> Result<LineString<f64>, SpecViolation> {
    let points = member(object, "coordinates")
        .ok_or(SpecViolation::MissingCoordinates)?
        .as_array()
        .ok_or(SpecViolation::MalformedCoordinates { index: None })?;

    let coords = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            parse_coordinate(point).ok_or(SpecViolation::MalformedCoordinates {
                index: Some(index),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if coords.len() < 2 {
        return Err(SpecViolation::TooFewCoordinates {
            count: coords.len(),
        });
    }

    Ok(LineString::new(coords))
}

fn parse_coordinate(point: &Value) -> Option<Coord<f64>> {
    match point.as_array()?.as_slice() {
        [x, y] => {
            let x = x.as_f64().filter(|x| x.is_finite())?;
            let y = y.as_f64().filter(|y| y.is_finite())?;
            Some(Coord { x, y })
        }
        _ => None,
    }
}

fn validate_speed(object: &Map<String, Value>) -> Result<Speed, SpecViolation> {
    let speed = member(object, "speed")
        .ok_or(SpecViolation::MissingSpeed)?
        .as_object()
        .ok_or(SpecViolation::MalformedSpeed)?;

    let value = speed
        .get("value")
        .and_then(Value::as_f64)
        .ok_or(SpecViolation::MalformedSpeed)?;

    let units = speed.get("units").unwrap_or(&Value::Null);
    let units = units
        .as_str()
        .and_then(SpeedUnits::parse)
        .ok_or_else(|| SpecViolation::UnknownSpeedUnits(units.to_string()))?;

    Ok(Speed::new(value, units))
}

fn validate_time(object: &Map<String, Value>) -> Result<TimeWindow, SpecViolation> {
    let time = member(object, "time")
        .ok_or(SpecViolation::MissingTime)?
        .as_object()
        .ok_or(SpecViolation::MalformedTime)?;

    let from = time.get("from").and_then(Value::as_f64);
    let to = time.get("to").and_then(Value::as_f64);

    match (from, to) {
        (Some(from), Some(to)) => Ok(TimeWindow::new(from, to)),
        _ => Err(SpecViolation::MalformedTime),
    }
}

fn validate_return_format(
    object: &Map<String, Value>,
) -> Result<Option<ReturnFormat>, SpecViolation> {
    let Some(format) = member(object, "return") else {
        return Ok(None);
    };

    format
        .as_str()
        .and_then(ReturnFormat::parse)
        .map(Some)
        .ok_or_else(|| SpecViolation::UnknownReturnFormat(format.to_string()))
}
