//! The prefix operation: the only mutation the engine performs.

use std::fmt;

use crate::error::OpError;
use crate::volume::Volume;

/// Add exactly one unit of liquid to the first `width` reservoirs.
///
/// Operation-as-data: plans and traces carry `PrefixOp`s,
/// [`apply()`](PrefixOp::apply) executes them. The width counts
/// reservoirs from the left, so `width == 1` pours into the first
/// reservoir only and `width == n` pours into all of them. Validation
/// happens at the seam that executes the op, not at construction.
///
/// # Examples
///
/// ```
/// use weir_core::{PrefixOp, Volume};
///
/// let op = PrefixOp { width: 2 };
/// let mut volumes: Vec<Volume> = vec![1, 2, 4];
/// op.apply(&mut volumes).unwrap();
/// assert_eq!(volumes, [2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixOp {
    /// Number of reservoirs this op covers, counted from the left.
    pub width: usize,
}

impl PrefixOp {
    /// Whether the reservoir at `index` receives liquid from this op.
    pub fn covers(&self, index: usize) -> bool {
        index < self.width
    }

    /// Pour one unit into the first `width` reservoirs of `volumes`.
    ///
    /// # Errors
    ///
    /// [`OpError::ZeroWidth`] for the empty prefix, and
    /// [`OpError::WidthExceedsLen`] when the sequence is shorter than
    /// the op's width. `volumes` is left untouched on error.
    pub fn apply(&self, volumes: &mut [Volume]) -> Result<(), OpError> {
        if self.width == 0 {
            return Err(OpError::ZeroWidth);
        }
        if self.width > volumes.len() {
            return Err(OpError::WidthExceedsLen {
                width: self.width,
                len: volumes.len(),
            });
        }
        for v in &mut volumes[..self.width] {
            *v += 1;
        }
        Ok(())
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prefix({})", self.width)
    }
}
