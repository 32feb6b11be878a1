//! Error types for trace verification.

use std::fmt;

/// Errors found while building or verifying a state trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceError {
    /// The snapshot list is empty; a trace always holds at least the
    /// initial state.
    Empty,
    /// Two consecutive snapshots have different lengths.
    LengthMismatch {
        /// Length of the earlier snapshot.
        prev: usize,
        /// Length of the later snapshot.
        next: usize,
    },
    /// Two consecutive snapshots are identical; every recorded step
    /// applies exactly one operation.
    NoOperation,
    /// The delta between two consecutive snapshots is not a unit
    /// prefix increment.
    NotUnitStep {
        /// First reservoir whose delta breaks the prefix shape.
        index: usize,
    },
    /// The final snapshot is not constant.
    NotLevel {
        /// First reservoir whose volume differs from reservoir 0.
        index: usize,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "trace holds no snapshots"),
            Self::LengthMismatch { prev, next } => {
                write!(f, "snapshot length changed mid-trace: {prev} -> {next}")
            }
            Self::NoOperation => write!(f, "consecutive snapshots are identical"),
            Self::NotUnitStep { index } => {
                write!(f, "delta at reservoir {index} is not a unit prefix increment")
            }
            Self::NotLevel { index } => {
                write!(f, "final snapshot is not level at reservoir {index}")
            }
        }
    }
}

impl std::error::Error for TraceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_name_the_offender() {
        let e = TraceError::LengthMismatch { prev: 3, next: 2 };
        assert_eq!(e.to_string(), "snapshot length changed mid-trace: 3 -> 2");

        let e = TraceError::NotLevel { index: 4 };
        assert_eq!(e.to_string(), "final snapshot is not level at reservoir 4");
    }
}
