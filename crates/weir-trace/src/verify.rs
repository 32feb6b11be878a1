//! Trace verification: recover each operation and check the outcome.
//!
//! The per-step check is exact rather than hash-based: between two
//! snapshots every delta must be 0 or 1 and the 1s must form a
//! non-empty prefix, which pins down the one prefix operation that
//! ran. A trace that survives every step check and ends constant is a
//! faithful record of a complete leveling run.

use smallvec::SmallVec;
use weir_core::{PrefixOp, Volume};

use crate::error::TraceError;
use crate::trace::StateTrace;

/// Summary of a verified trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceSummary {
    /// Unit operations recovered from the trace.
    pub op_count: u64,
    /// The constant level of the final snapshot; `None` for the empty
    /// sequence.
    pub level: Option<Volume>,
    /// Distinct prefix widths fired, in first-use order.
    pub widths: SmallVec<[usize; 8]>,
}

/// Recover the unit prefix operation between two consecutive snapshots.
///
/// # Errors
///
/// [`TraceError::LengthMismatch`] when the snapshots disagree on
/// length, [`TraceError::NoOperation`] when nothing changed, and
/// [`TraceError::NotUnitStep`] when the delta is not a single unit
/// poured into a prefix (a delta outside {0, 1}, or a raise after the
/// prefix already ended).
///
/// # Examples
///
/// ```
/// use weir_trace::step_between;
///
/// let op = step_between(&[1, 2, 4], &[2, 3, 4]).unwrap();
/// assert_eq!(op.width, 2);
/// assert!(step_between(&[1, 2], &[1, 3]).is_err());
/// ```
pub fn step_between(prev: &[Volume], next: &[Volume]) -> Result<PrefixOp, TraceError> {
    if prev.len() != next.len() {
        return Err(TraceError::LengthMismatch {
            prev: prev.len(),
            next: next.len(),
        });
    }

    let mut width = 0usize;
    for (i, (&p, &n)) in prev.iter().zip(next).enumerate() {
        match n.wrapping_sub(p) {
            1 if i == width => width = i + 1,
            0 if i >= width => {}
            _ => return Err(TraceError::NotUnitStep { index: i }),
        }
    }
    if width == 0 {
        return Err(TraceError::NoOperation);
    }
    Ok(PrefixOp { width })
}

/// Verify a trace end to end.
///
/// Recovers the operation between every consecutive snapshot pair,
/// then checks that the final snapshot is constant. Any legal
/// operation order passes; the engine's canonical widest-first order
/// is not required.
///
/// # Errors
///
/// The first per-step error encountered (see [`step_between`]), or
/// [`TraceError::NotLevel`] when the run does not end constant.
pub fn verify_trace(trace: &StateTrace) -> Result<TraceSummary, TraceError> {
    let mut op_count = 0u64;
    let mut widths: SmallVec<[usize; 8]> = SmallVec::new();

    for pair in trace.snapshots().windows(2) {
        let op = step_between(&pair[0], &pair[1])?;
        op_count += 1;
        if !widths.contains(&op.width) {
            widths.push(op.width);
        }
    }

    let last = trace.last();
    if let Some(index) = (1..last.len()).find(|&i| last[i] != last[0]) {
        return Err(TraceError::NotLevel { index });
    }

    Ok(TraceSummary {
        op_count,
        level: last.first().copied(),
        widths,
    })
}
