//! Table-driven physical properties: atmosphere, gravity and shell aerodynamics.

pub mod aerodynamics;
pub mod atmosphere;
pub mod gravity;
pub mod table;

pub use aerodynamics::{drag_coefficient, drag_force, mach_number, reference_area};
pub use atmosphere::{density, speed_of_sound};
pub use gravity::gravity;
pub use table::{lerp, Boundary, LookupTable};
