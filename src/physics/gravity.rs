use once_cell::sync::Lazy;

use super::table::LookupTable;

/// Gravitational acceleration samples: (altitude m, g m/s^2).
pub const GRAVITY_POINTS: [(f64, f64); 14] = [
    (0.0, 9.807),
    (1_000.0, 9.804),
    (2_000.0, 9.801),
    (3_000.0, 9.797),
    (4_000.0, 9.794),
    (5_000.0, 9.791),
    (6_000.0, 9.788),
    (7_000.0, 9.785),
    (8_000.0, 9.782),
    (9_000.0, 9.779),
    (10_000.0, 9.776),
    (15_000.0, 9.761),
    (20_000.0, 9.745),
    (25_000.0, 9.730),
];

/// Sea-level gravity from the table, m/s^2.
pub const G_SEA_LEVEL: f64 = 9.807;

pub static GRAVITY: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(GRAVITY_POINTS).expect("gravity table is strictly increasing")
});

/// Magnitude of gravitational acceleration at `altitude_m` (acts downward).
pub fn gravity(altitude_m: f64) -> f64 {
    GRAVITY.lookup(altitude_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_gravity() {
        assert_eq!(gravity(0.0), G_SEA_LEVEL);
    }

    #[test]
    fn exact_samples() {
        for &(h, g) in GRAVITY_POINTS.iter() {
            assert_eq!(gravity(h), g, "gravity at {} m", h);
        }
    }

    #[test]
    fn gravity_decreases_with_altitude() {
        assert!(gravity(12_500.0) < gravity(2_500.0));
        assert!((gravity(500.0) - 9.8055).abs() < 1e-9);
    }

    #[test]
    fn above_table_top_is_extrapolated() {
        // 25-30 km continues the last interval's slope of -0.003 m/s^2 per km
        let g = gravity(30_000.0);
        assert!((g - 9.715).abs() < 1e-9, "got {}", g);
        assert!(gravity(100_000.0).is_finite());
    }
}
