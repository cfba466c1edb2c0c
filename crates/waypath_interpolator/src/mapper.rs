use crate::{
    spec::path_specification::{TimeWindow, TravelPhase},
    units::Speed,
};

/// Distance travelled at `decimal_hours`, before wrapping around the path.
///
/// Nothing is travelled before the window opens and the distance stays frozen
/// at `speed * (to - from)` once it closes.
pub fn traveled_distance(speed: Speed, window: TimeWindow, decimal_hours: f64) -> f64 {
    match window.phase(decimal_hours) {
        TravelPhase::NotStarted => 0.0,
        TravelPhase::Travelling => speed.distance_after(decimal_hours - window.from()),
        TravelPhase::Finished => speed.distance_after(window.duration()),
    }
}

/// Wraps `distance` into `[0, total_length)`.
pub fn wrap_distance(distance: f64, total_length: f64) -> f64 {
    let wrapped = distance.rem_euclid(total_length);

    // rem_euclid rounds up to `total_length` for tiny negative inputs.
    if wrapped >= total_length {
        0.0
    } else {
        wrapped
    }
}
