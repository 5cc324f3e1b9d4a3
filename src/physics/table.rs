use crate::error::TableError;

// ---------------------------------------------------------------------------
// Piecewise-linear lookup tables
// ---------------------------------------------------------------------------

/// Linear interpolation through `(x0, y0)` and `(x1, y1)` evaluated at `x`.
///
/// Extends the line when `x` lies outside `[x0, x1]`. Callers guarantee
/// `x0 != x1`.
pub fn lerp(x: f64, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 {
    (y1 - y0) * (x - x0) / (x1 - x0) + y0
}

/// What a table returns for queries outside its sampled domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Extend the nearest edge interval linearly.
    #[default]
    Extrapolate,
    /// Hold the edge sample's value.
    Clamp,
}

/// Sorted `(independent, dependent)` samples with linear interpolation between them.
///
/// Independent values are strictly increasing and there are at least two
/// samples, so every bracket has a non-zero width.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    points: Vec<(f64, f64)>,
    boundary: Boundary,
}

impl LookupTable {
    /// Build a table, rejecting short, non-finite or unsorted input.
    pub fn new(points: impl Into<Vec<(f64, f64)>>) -> Result<Self, TableError> {
        let points = points.into();
        if points.len() < 2 {
            return Err(TableError::TooShort { len: points.len() });
        }
        for (index, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(TableError::NonFinite { index });
            }
        }
        if let Some(index) = (1..points.len()).find(|&i| points[i].0 <= points[i - 1].0) {
            return Err(TableError::NotIncreasing { index });
        }
        Ok(Self { points, boundary: Boundary::default() })
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid table has at least two samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest sampled independent values.
    pub fn domain(&self) -> (f64, f64) {
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }

    /// Index of the first sample whose independent value is not less than `x`.
    ///
    /// `0` when `x` precedes every sample, `len()` when it exceeds every sample.
    pub fn insertion_index(&self, x: f64) -> usize {
        self.points.partition_point(|&(xi, _)| xi < x)
    }

    /// Interpolated dependent value at `x`.
    ///
    /// The bracket is the insertion index and its predecessor, clamped so both
    /// ends are real samples. Exact sample hits return the stored value.
    pub fn lookup(&self, x: f64) -> f64 {
        let n = self.points.len();
        let i = self.insertion_index(x);

        if i < n && self.points[i].0 == x {
            return self.points[i].1;
        }

        if self.boundary == Boundary::Clamp {
            if i == 0 {
                return self.points[0].1;
            }
            if i == n {
                return self.points[n - 1].1;
            }
        }

        let hi = i.clamp(1, n - 1);
        lerp(x, self.points[hi - 1], self.points[hi])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> LookupTable {
        LookupTable::new(vec![(0.0, 10.0), (10.0, 20.0), (20.0, 0.0)]).unwrap()
    }

    #[test]
    fn lerp_midpoint_and_extension() {
        assert!((lerp(5.0, (0.0, 0.0), (10.0, 100.0)) - 50.0).abs() < 1e-12);
        assert!((lerp(15.0, (0.0, 0.0), (10.0, 100.0)) - 150.0).abs() < 1e-12);
        // Reversed endpoints describe the same line
        assert!((lerp(2.5, (10.0, 100.0), (0.0, 0.0)) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            LookupTable::new(Vec::<(f64, f64)>::new()),
            Err(TableError::TooShort { len: 0 })
        );
        assert_eq!(
            LookupTable::new(vec![(1.0, 1.0)]),
            Err(TableError::TooShort { len: 1 })
        );
        assert_eq!(
            LookupTable::new(vec![(0.0, 1.0), (0.0, 2.0)]),
            Err(TableError::NotIncreasing { index: 1 })
        );
        assert_eq!(
            LookupTable::new(vec![(0.0, 1.0), (2.0, 2.0), (1.0, 3.0)]),
            Err(TableError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            LookupTable::new(vec![(0.0, 1.0), (1.0, f64::NAN)]),
            Err(TableError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn insertion_index_brackets() {
        let t = ramp();
        assert_eq!(t.insertion_index(-1.0), 0);
        assert_eq!(t.insertion_index(0.0), 0);
        assert_eq!(t.insertion_index(0.1), 1);
        assert_eq!(t.insertion_index(10.0), 1);
        assert_eq!(t.insertion_index(19.9), 2);
        assert_eq!(t.insertion_index(25.0), 3);
    }

    #[test]
    fn exact_samples_returned_verbatim() {
        let t = ramp();
        for &(x, y) in t.points() {
            assert_eq!(t.lookup(x), y);
        }
    }

    #[test]
    fn interior_queries_interpolate() {
        let t = ramp();
        assert!((t.lookup(5.0) - 15.0).abs() < 1e-12);
        assert!((t.lookup(15.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_past_both_edges() {
        let t = ramp();
        assert!((t.lookup(-10.0) - 0.0).abs() < 1e-12);
        assert!((t.lookup(30.0) + 20.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_holds_edge_values() {
        let t = ramp().with_boundary(Boundary::Clamp);
        assert_eq!(t.lookup(-10.0), 10.0);
        assert_eq!(t.lookup(1e9), 0.0);
        assert!((t.lookup(5.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn two_point_table_works_everywhere() {
        let t = LookupTable::new(vec![(1.0, 1.0), (3.0, 5.0)]).unwrap();
        assert_eq!(t.domain(), (1.0, 3.0));
        assert!((t.lookup(2.0) - 3.0).abs() < 1e-12);
        assert!((t.lookup(0.0) + 1.0).abs() < 1e-12);
        assert!((t.lookup(4.0) - 7.0).abs() < 1e-12);
    }
}
