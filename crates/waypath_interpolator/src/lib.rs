pub mod decimal_hours;
pub mod error;
pub mod geometry;
pub mod interpolator;
pub mod json;
pub mod mapper;
pub mod output;
pub mod path_model;
pub mod spec;
pub mod units;

pub use error::{InvalidInterpolationSpec, SpecViolation};
pub use interpolator::MultilinePositionInterpolator;
pub use output::{Position, ReturnFormat};
