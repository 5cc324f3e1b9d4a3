use crate::dynamics::state::{ProjectileState, Shell, SimConfig, Vec2};
use crate::dynamics::Forces;
use crate::error::SimError;
use super::event::{ApogeeDetector, EventDetector, FlightEvent, ImpactDetector};
use super::impact::{self, Sample, SimulationResult};
use super::integrator::euler_step;

// ---------------------------------------------------------------------------
// Step trace
// ---------------------------------------------------------------------------

/// State after one integration step, with the forces that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    pub step: usize,
    pub time: f64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub forces: Forces,
}

/// A traced firing: refined result, every step, and detected events.
#[derive(Debug, Clone)]
pub struct Flight {
    pub result: SimulationResult,
    pub trace: Vec<TraceSample>,
    pub events: Vec<FlightEvent>,
}

impl Flight {
    /// Highest altitude reached at a step boundary, m.
    pub fn apogee(&self) -> f64 {
        self.trace.iter().map(|s| s.pos.y).fold(0.0_f64, f64::max)
    }

    pub fn max_mach(&self) -> f64 {
        self.trace.iter().map(|s| s.forces.mach).fold(0.0_f64, f64::max)
    }

    /// Speed at the last integrated step, m/s.
    pub fn impact_speed(&self) -> f64 {
        self.trace.last().map_or(0.0, |s| s.vel.norm())
    }
}

// ---------------------------------------------------------------------------
// Flight loop
// ---------------------------------------------------------------------------

fn sample(state: &ProjectileState) -> Sample {
    Sample {
        time: state.time,
        altitude: state.altitude(),
        distance: state.distance(),
    }
}

/// Integrate from the muzzle until the shell reaches the ground.
///
/// `observe` sees the state before and after every step along with the
/// forces applied. The last two states bracket ground level and are handed
/// to the impact refiner.
fn fly<F>(
    shell: &Shell,
    config: &SimConfig,
    angle_deg: f64,
    mut observe: F,
) -> Result<SimulationResult, SimError>
where
    F: FnMut(&ProjectileState, &ProjectileState, &Forces),
{
    config.validate()?;
    if !angle_deg.is_finite() {
        return Err(SimError::InvalidAngle(angle_deg));
    }

    let mut state = ProjectileState::launch(shell, angle_deg);

    loop {
        let prev = state;
        let forces = euler_step(&mut state, config.dt);
        observe(&prev, &state, &forces);

        // Ground impact
        if !state.is_airborne() {
            return Ok(impact::refine(sample(&prev), sample(&state)));
        }

        if state.time >= config.max_time {
            return Err(SimError::NoImpact { elapsed: state.time });
        }
    }
}

/// Fire the M795 at `angle_deg` from vertical with the default step.
pub fn simulate(angle_deg: f64) -> Result<SimulationResult, SimError> {
    simulate_with(&Shell::m795(), &SimConfig::default(), angle_deg)
}

/// Fire an arbitrary shell with an explicit config.
pub fn simulate_with(
    shell: &Shell,
    config: &SimConfig,
    angle_deg: f64,
) -> Result<SimulationResult, SimError> {
    fly(shell, config, angle_deg, |_, _, _| {})
}

/// Like [`simulate_with`], also recording every step and flight events.
pub fn simulate_traced(
    shell: &Shell,
    config: &SimConfig,
    angle_deg: f64,
) -> Result<Flight, SimError> {
    let capacity = (config.max_time / config.dt) as usize + 1;
    let mut trace = Vec::with_capacity(capacity.min(100_000));
    let mut events = Vec::new();
    let mut apogee_det = ApogeeDetector::default();
    let mut impact_det = ImpactDetector::default();

    let result = fly(shell, config, angle_deg, |prev, current, forces| {
        trace.push(TraceSample {
            step: trace.len() + 1,
            time: current.time,
            pos: current.pos,
            vel: current.vel,
            forces: *forces,
        });

        let detectors: [&mut dyn EventDetector; 2] = [&mut apogee_det, &mut impact_det];
        for det in detectors {
            if let Some(kind) = det.check(prev, current) {
                events.push(FlightEvent { time: current.time, kind, state: *current });
            }
        }
    })?;

    Ok(Flight { result, trace, events })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
