use once_cell::sync::Lazy;

use super::table::LookupTable;

// ---------------------------------------------------------------------------
// Tabulated standard atmosphere (sea level to 80 km)
// ---------------------------------------------------------------------------

/// Air density samples: (altitude m, density kg/m^3).
pub const DENSITY_POINTS: [(f64, f64); 20] = [
    (0.0, 1.225_000_0),
    (1_000.0, 1.112_000_0),
    (2_000.0, 1.007_000_0),
    (3_000.0, 0.909_300_0),
    (4_000.0, 0.819_400_0),
    (5_000.0, 0.736_400_0),
    (6_000.0, 0.660_100_0),
    (7_000.0, 0.590_000_0),
    (8_000.0, 0.525_800_0),
    (9_000.0, 0.467_100_0),
    (10_000.0, 0.413_500_0),
    (15_000.0, 0.194_800_0),
    (20_000.0, 0.088_910_0),
    (25_000.0, 0.040_080_0),
    (30_000.0, 0.018_410_0),
    (40_000.0, 0.003_996_0),
    (50_000.0, 0.001_027_0),
    (60_000.0, 0.000_309_7),
    (70_000.0, 0.000_082_8),
    (80_000.0, 0.000_018_5),
];

/// Speed of sound samples: (altitude m, speed m/s).
pub const SOUND_SPEED_POINTS: [(f64, f64); 16] = [
    (0.0, 340.0),
    (1_000.0, 336.0),
    (2_000.0, 332.0),
    (3_000.0, 328.0),
    (4_000.0, 324.0),
    (5_000.0, 320.0),
    (6_000.0, 316.0),
    (7_000.0, 312.0),
    (8_000.0, 308.0),
    (9_000.0, 303.0),
    (10_000.0, 299.0),
    (15_000.0, 295.0),
    (20_000.0, 295.0),
    (25_000.0, 295.0),
    (30_000.0, 305.0),
    (40_000.0, 324.0),
];

pub static DENSITY: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(DENSITY_POINTS).expect("density table is strictly increasing")
});

pub static SOUND_SPEED: Lazy<LookupTable> = Lazy::new(|| {
    LookupTable::new(SOUND_SPEED_POINTS).expect("speed of sound table is strictly increasing")
});

/// Atmospheric properties at a given altitude.
#[derive(Debug, Clone, Copy)]
pub struct Atmo {
    pub density: f64,      // kg/m^3
    pub sound_speed: f64,  // m/s
}

/// Air density at `altitude_m`, extrapolated beyond the table edges.
pub fn density(altitude_m: f64) -> f64 {
    DENSITY.lookup(altitude_m)
}

/// Local speed of sound at `altitude_m`.
pub fn speed_of_sound(altitude_m: f64) -> f64 {
    SOUND_SPEED.lookup(altitude_m)
}

pub fn at(altitude_m: f64) -> Atmo {
    Atmo {
        density: density(altitude_m),
        sound_speed: speed_of_sound(altitude_m),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_values() {
        let a = at(0.0);
        assert_eq!(a.density, 1.225);
        assert_eq!(a.sound_speed, 340.0);
    }

    #[test]
    fn exact_samples_for_both_tables() {
        for &(h, rho) in DENSITY_POINTS.iter() {
            assert_eq!(density(h), rho, "density at {} m", h);
        }
        for &(h, c) in SOUND_SPEED_POINTS.iter() {
            assert_eq!(speed_of_sound(h), c, "sound speed at {} m", h);
        }
    }

    #[test]
    fn density_between_samples() {
        let rho = density(500.0);
        assert!((rho - 1.1685).abs() < 1e-9);
    }

    #[test]
    fn density_monotonically_decreases() {
        let mut prev = density(0.0);
        for h in (250..80_000).step_by(250) {
            let rho = density(h as f64);
            assert!(rho < prev, "density rose at {} m", h);
            prev = rho;
        }
    }

    #[test]
    fn out_of_domain_queries_are_defined() {
        assert!(density(80_000.0).is_finite());
        assert!(density(85_000.0).is_finite());
        assert!(speed_of_sound(45_000.0).is_finite());
        // Just below ground: line through the first two samples
        assert!((density(-100.0) - 1.2363).abs() < 1e-9);
        assert!((speed_of_sound(-500.0) - 342.0).abs() < 1e-9);
    }
}
