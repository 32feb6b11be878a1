//! Eager simulation: the full state trace, one snapshot per operation.

use weir_core::{PlanError, Volume, INFEASIBLE};

use crate::leveler::Leveler;

/// Level `volumes`, recording every intermediate state.
///
/// Returns the operation count and the chronological snapshots: the
/// initial state first, one snapshot per unit operation, the final
/// constant state last, `count + 1` snapshots in total. A sequence
/// that cannot be leveled returns `(INFEASIBLE, vec![initial])`; no
/// partial progress is recorded.
///
/// The trace holds `count + 1` snapshots of `n` volumes each, and the
/// count is not bounded by `n`. For a deep gap ahead of a long
/// constant tail that is a lot of memory; use
/// [`Leveler::into_states`] when the trace should stay lazy.
///
/// # Examples
///
/// ```
/// use weir_engine::simulate;
///
/// let (count, trace) = simulate(&[1, 2]);
/// assert_eq!(count, 1);
/// assert_eq!(trace, [vec![1, 2], vec![2, 2]]);
///
/// let (count, trace) = simulate(&[3, 2, 1]);
/// assert_eq!(count, -1);
/// assert_eq!(trace, [vec![3, 2, 1]]);
/// ```
pub fn simulate(volumes: &[Volume]) -> (i64, Vec<Vec<Volume>>) {
    let mut leveler = match Leveler::new(volumes) {
        Ok(leveler) => leveler,
        Err(PlanError::NonMonotone { .. }) => return (INFEASIBLE, vec![volumes.to_vec()]),
    };

    let mut trace = vec![volumes.to_vec()];
    while leveler.step().is_some() {
        trace.push(leveler.state().to_vec());
    }

    let count = i64::try_from(leveler.total_ops()).unwrap_or(i64::MAX);
    (count, trace)
}
