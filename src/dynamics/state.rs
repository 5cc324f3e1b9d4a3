use nalgebra::Vector2;

use crate::error::SimError;
use crate::physics::reference_area;

// ---------------------------------------------------------------------------
// Planar vectors
// ---------------------------------------------------------------------------

/// Planar vector: x = horizontal range, y = altitude (m or m/s).
pub type Vec2 = Vector2<f64>;

/// Direction of `v` in radians, measured from the vertical (+y) toward +x.
pub fn heading(v: &Vec2) -> f64 {
    v.x.atan2(v.y)
}

/// Unit vector for a heading measured from the vertical.
pub fn from_heading(angle: f64) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

// ---------------------------------------------------------------------------
// Shell definition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Shell {
    pub name: String,
    pub diameter: f64,      // m
    pub mass: f64,          // kg
    pub muzzle_speed: f64,  // m/s
}

impl Shell {
    /// 155 mm M795 high-explosive round.
    pub fn m795() -> Self {
        Self {
            name: "M795".into(),
            diameter: 0.15489,
            mass: 46.7,
            muzzle_speed: 827.0,
        }
    }

    /// Cross-sectional area presented to the airflow, m^2.
    pub fn reference_area(&self) -> f64 {
        reference_area(self.diameter)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::m795()
    }
}

// ---------------------------------------------------------------------------
// Projectile state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    pub time: f64,        // s since firing
    pub pos: Vec2,        // m   [range, altitude]
    pub vel: Vec2,        // m/s
    pub diameter: f64,    // m
    pub mass: f64,        // kg
    pub area: f64,        // m^2
}

impl ProjectileState {
    /// State at the muzzle for a launch angle in degrees from vertical
    /// (0 = straight up, 90 = horizontal).
    pub fn launch(shell: &Shell, angle_deg: f64) -> Self {
        Self {
            time: 0.0,
            pos: Vec2::zeros(),
            vel: from_heading(angle_deg.to_radians()) * shell.muzzle_speed,
            diameter: shell.diameter,
            mass: shell.mass,
            area: shell.reference_area(),
        }
    }

    pub fn altitude(&self) -> f64 {
        self.pos.y
    }

    pub fn distance(&self) -> f64 {
        self.pos.x
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    pub fn is_airborne(&self) -> bool {
        self.pos.y > 0.0
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,
    pub max_time: f64,
}

impl SimConfig {
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidConfig("dt must be positive and finite"));
        }
        if !(self.max_time.is_finite() && self.max_time > 0.0) {
            return Err(SimError::InvalidConfig("max_time must be positive and finite"));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.5,          // coarse; impact is refined by interpolation
            max_time: 600.0,  // well past any physical flight of the shell
        }
    }
}
