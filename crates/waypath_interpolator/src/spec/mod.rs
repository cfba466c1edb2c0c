pub mod path_specification;
pub mod spec_input;
pub mod validator;

pub use path_specification::{PathSpecification, TimeWindow, TravelPhase};
pub use spec_input::SpecInput;
pub use validator::validate;
