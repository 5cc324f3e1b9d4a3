use crate::physics::lerp;

/// Time, altitude and downrange distance at one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,      // s
    pub altitude: f64,  // m
    pub distance: f64,  // m
}

/// Outcome of one firing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub range: f64,      // m
    pub hang_time: f64,  // s
}

/// Locate the ground crossing between two samples straddling zero altitude.
///
/// Solves for the time at which altitude is zero on the line through
/// `(prev.altitude, prev.time)` and `(current.altitude, current.time)`, then
/// reads the distance off the time/distance line at that instant.
pub fn refine(prev: Sample, current: Sample) -> SimulationResult {
    if prev.altitude == current.altitude {
        return SimulationResult { range: current.distance, hang_time: current.time };
    }

    let hang_time = lerp(0.0, (prev.altitude, prev.time), (current.altitude, current.time));
    let range = lerp(hang_time, (prev.time, prev.distance), (current.time, current.distance));

    SimulationResult { range, hang_time }
}
