use crate::dynamics::{self, Forces};
use crate::dynamics::state::ProjectileState;

// ---------------------------------------------------------------------------
// Semi-implicit Euler step
// ---------------------------------------------------------------------------

/// Advance `state` by `dt` in place.
///
/// Position moves first with the velocity carried in from the previous step;
/// forces are then evaluated at the new position and applied to velocity.
/// Returns the forces used so callers can trace the step.
pub fn euler_step(state: &mut ProjectileState, dt: f64) -> Forces {
    state.pos += state.vel * dt;

    let forces = dynamics::evaluate(state);
    state.vel -= forces.decel * dt;
    state.time += dt;

    forces
}
