pub mod event;
pub mod impact;
pub mod integrator;
pub mod runner;

pub use impact::SimulationResult;
pub use integrator::euler_step;
pub use runner::{simulate, simulate_traced, simulate_with, Flight, TraceSample};
