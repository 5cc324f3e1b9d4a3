use std::error::Error;
use std::fmt;

/// Reasons a lookup table is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Fewer than two samples; no interval to interpolate over.
    TooShort { len: usize },
    /// A sample contains NaN or an infinity.
    NonFinite { index: usize },
    /// `independent[index]` is not strictly greater than its predecessor.
    NotIncreasing { index: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooShort { len } => {
                write!(f, "lookup table needs at least 2 samples, got {}", len)
            }
            TableError::NonFinite { index } => {
                write!(f, "lookup table sample {} is not finite", index)
            }
            TableError::NotIncreasing { index } => write!(
                f,
                "lookup table independent values must strictly increase (sample {})",
                index
            ),
        }
    }
}

impl Error for TableError {}

/// Errors surfaced by a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Launch angle was NaN or infinite.
    InvalidAngle(f64),
    /// Time step or time limit is not a positive finite number.
    InvalidConfig(&'static str),
    /// The shell was still airborne when the time limit ran out.
    NoImpact { elapsed: f64 },
    Table(TableError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidAngle(a) => write!(f, "launch angle must be finite, got {}", a),
            SimError::InvalidConfig(what) => write!(f, "invalid simulation config: {}", what),
            SimError::NoImpact { elapsed } => {
                write!(f, "no ground impact within {:.1} s of flight", elapsed)
            }
            SimError::Table(e) => write!(f, "{}", e),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Table(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for SimError {
    fn from(e: TableError) -> Self {
        SimError::Table(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = TableError::NotIncreasing { index: 3 };
        assert!(e.to_string().contains("sample 3"));

        let e: SimError = TableError::TooShort { len: 1 }.into();
        assert!(e.to_string().contains("got 1"));
        assert!(e.source().is_some());
    }
}
