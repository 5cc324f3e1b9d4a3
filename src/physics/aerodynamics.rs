use std::f64::consts::PI;

use once_cell::sync::Lazy;

use super::atmosphere;
use super::table::LookupTable;

/// Shell drag coefficient samples: (Mach, Cd).
pub const DRAG_POINTS: [(f64, f64); 16] = [
    (0.300, 0.1629),
    (0.500, 0.1659),
    (0.700, 0.2031),
    (0.890, 0.2597),
    (0.920, 0.3010),
    (0.960, 0.3287),
    (0.980, 0.4002),
    (1.000, 0.4258),
    (1.020, 0.4335),
    (1.060, 0.4483),
    (1.240, 0.4064),
    (1.530, 0.3663),
    (1.990, 0.2897),
    (2.870, 0.2297),
    (2.890, 0.2306),
    (5.000, 0.2656),
];

pub static DRAG_COEFFICIENT: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(DRAG_POINTS).expect("drag table is strictly increasing")
});

/// Drag coefficient for a shell travelling at `mach`.
pub fn drag_coefficient(mach: f64) -> f64 {
    DRAG_COEFFICIENT.lookup(mach)
}

/// Mach number of `speed` (m/s) at `altitude` (m).
pub fn mach_number(altitude: f64, speed: f64) -> f64 {
    speed / atmosphere::speed_of_sound(altitude)
}

/// Drag force magnitude, N: `0.5 * Cd * rho * v^2 * A`.
pub fn drag_force(cd: f64, density: f64, speed: f64, area: f64) -> f64 {
    0.5 * cd * density * speed * speed * area
}

/// Circular cross-section area for a shell of `diameter` metres.
pub fn reference_area(diameter: f64) -> f64 {
    let r = diameter / 2.0;
    PI * r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_drag_samples() {
        for &(m, cd) in DRAG_POINTS.iter() {
            assert_eq!(drag_coefficient(m), cd, "Cd at Mach {}", m);
        }
    }

    #[test]
    fn drag_coefficient_stays_within_bracket() {
        for pair in DRAG_POINTS.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            let (min_cd, max_cd) = (lo.1.min(hi.1), lo.1.max(hi.1));
            for k in 1..10 {
                let m = lo.0 + (hi.0 - lo.0) * k as f64 / 10.0;
                let cd = drag_coefficient(m);
                assert!(
                    cd >= min_cd && cd <= max_cd,
                    "Cd {} at Mach {:.3} escapes [{}, {}]",
                    cd, m, min_cd, max_cd
                );
            }
        }
    }

    #[test]
    fn mach_one_at_sea_level() {
        assert!((mach_number(0.0, 340.0) - 1.0).abs() < 1e-12);
        assert!((mach_number(10_000.0, 598.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn drag_equation() {
        let f = drag_force(0.3, 1.2, 100.0, 0.01);
        assert!((f - 18.0).abs() < 1e-9);
        assert_eq!(drag_force(0.3, 1.2, 0.0, 0.01), 0.0);
    }

    #[test]
    fn m795_cross_section() {
        let a = reference_area(0.15489);
        assert!((a - 0.018_842).abs() < 1e-5, "got {}", a);
    }
}
