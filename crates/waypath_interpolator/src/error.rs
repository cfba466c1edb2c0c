use thiserror::Error;

const EXPECTED_SCHEMA: &str = "it should include the following properties: \"coordinates\" \
(array of points (array of 2 floats or integers)), \"speed\" (an object with a \"value\" (number) \
property and a \"units\" (\"km/h\" or \"mi/h\") property), \"time\" (an object with a \"from\" \
(decimal hours) and \"to\" (decimal hours) properties) and an optional \"return\" (with possible \
values \"geo:json\" or \"geo:point\")";

/// The reason a path specification was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecViolation {
    #[error("unparsable JSON text: {0}")]
    UnparsableText(String),

    #[error("the specification is not an object")]
    NotAnObject,

    #[error("missing \"coordinates\"")]
    MissingCoordinates,

    /// `index` is `None` when `coordinates` is not an array at all.
    #[error("\"coordinates\" must be an array of pairs of finite numbers (at {index:?})")]
    MalformedCoordinates { index: Option<usize> },

    #[error("\"coordinates\" must be an array of at least 2 points, got {count}")]
    TooFewCoordinates { count: usize },

    #[error("missing \"speed\"")]
    MissingSpeed,

    #[error("\"speed\" must be an object with a numeric \"value\"")]
    MalformedSpeed,

    #[error("unknown speed units {0}")]
    UnknownSpeedUnits(String),

    #[error("missing \"time\"")]
    MissingTime,

    #[error("\"time\" must be an object with numeric \"from\" and \"to\"")]
    MalformedTime,

    /// `speed * |to - from|` overflows, so no position could be computed.
    #[error("travelling at this speed over the time window covers no finite distance")]
    UnboundedTravel,

    #[error("unknown return format {0}")]
    UnknownReturnFormat(String),

    #[error("the path has no measurable length ({length})")]
    DegeneratePath { length: f64 },
}

/// Raised when an interpolator cannot be built from the provided
/// specification. No interpolator exists after this error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "The provided interpolation object or specification ({input}) is not valid ({schema}): {violation}",
    schema = EXPECTED_SCHEMA
)]
pub struct InvalidInterpolationSpec {
    input: String,
    violation: SpecViolation,
}

impl InvalidInterpolationSpec {
    pub fn new(input: impl Into<String>, violation: SpecViolation) -> Self {
        Self {
            input: input.into(),
            violation,
        }
    }

    /// The raw input, as received.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn violation(&self) -> &SpecViolation {
        &self.violation
    }
}
