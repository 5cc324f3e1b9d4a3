use crate::dynamics::state::ProjectileState;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Apogee,
    Impact,
}

/// A discrete event observed during a traced run.
#[derive(Debug, Clone)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: ProjectileState,
}

/// Passive detector over consecutive states.
pub trait EventDetector {
    fn check(&mut self, prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind>;
}

/// Vertical velocity changes sign from climbing to falling.
#[derive(Debug, Default)]
pub struct ApogeeDetector {
    fired: bool,
}

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.vel.y > 0.0 && current.vel.y <= 0.0 {
            self.fired = true;
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Altitude reaches or drops below ground level.
#[derive(Debug, Default)]
pub struct ImpactDetector {
    fired: bool,
}

impl EventDetector for ImpactDetector {
    fn check(&mut self, _prev: &ProjectileState, current: &ProjectileState) -> Option<EventKind> {
        if !self.fired && !current.is_airborne() {
            self.fired = true;
            Some(EventKind::Impact)
        } else {
            None
        }
    }
}
