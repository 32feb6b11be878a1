//! Error types shared across the weir workspace.
//!
//! Infeasible input is a defined outcome, not a fault: the typed
//! surfaces report it as [`PlanError::NonMonotone`], the plain-integer
//! surfaces as [`INFEASIBLE`](crate::INFEASIBLE). Nothing here is
//! raised as a panic.

use std::error::Error;
use std::fmt;

/// Errors from planning a leveling over a volume sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The sequence decreases somewhere, so no schedule of prefix
    /// operations can level it.
    NonMonotone {
        /// First index, scanning left to right, whose volume is below
        /// its predecessor.
        index: usize,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonMonotone { index } => {
                write!(f, "volume at reservoir {index} drops below its predecessor")
            }
        }
    }
}

impl Error for PlanError {}

/// Errors from applying a [`PrefixOp`](crate::PrefixOp).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpError {
    /// Width 0 covers no reservoir; the empty prefix is not an operation.
    ZeroWidth,
    /// The op covers more reservoirs than the sequence holds.
    WidthExceedsLen {
        /// The op's width.
        width: usize,
        /// Length of the sequence it was applied to.
        len: usize,
    },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "prefix op has width 0"),
            Self::WidthExceedsLen { width, len } => {
                write!(f, "prefix op width {width} exceeds sequence length {len}")
            }
        }
    }
}

impl Error for OpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_name_the_offender() {
        let e = PlanError::NonMonotone { index: 3 };
        assert_eq!(
            e.to_string(),
            "volume at reservoir 3 drops below its predecessor"
        );

        let e = OpError::WidthExceedsLen { width: 5, len: 2 };
        assert_eq!(e.to_string(), "prefix op width 5 exceeds sequence length 2");
    }
}
