//! Planar artillery shell flight from muzzle to ground impact.
//!
//! Gravity, air density, speed of sound and drag coefficient come from
//! piecewise-linear lookup tables; the trajectory is stepped with
//! semi-implicit Euler and the ground crossing is refined by interpolation.

pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;

pub use dynamics::state::{ProjectileState, Shell, SimConfig, Vec2};
pub use error::{SimError, TableError};
pub use sim::{simulate, simulate_traced, simulate_with, Flight, SimulationResult};
