//! Leveling plans: feasibility plus the unique gap decomposition.

use smallvec::SmallVec;
use weir_core::{PlanError, PrefixOp, Volume, INFEASIBLE};

/// One planned firing: a prefix op and how many times it must run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Firing {
    /// The op to fire.
    pub op: PrefixOp,
    /// How many unit applications of `op` the plan calls for.
    pub count: u64,
}

/// The minimum-operation leveling plan for a volume sequence.
///
/// Built by a single right-to-left scan over adjacent gaps. Any
/// operation that reaches reservoir `i` has width at least `i + 1`
/// and therefore also reaches every reservoir left of `i`. Once all
/// wider firings have run, both sides of each remaining adjacent pair
/// have been raised by the same amount, so the residual gap at `i`
/// equals the original gap `volumes[i + 1] - volumes[i]`; closing it
/// takes exactly that many width-`i + 1` firings, and no schedule can
/// spend fewer. The decomposition of the total into per-width counts
/// is unique.
///
/// # Examples
///
/// ```
/// use weir_engine::LevelPlan;
///
/// let plan = LevelPlan::for_volumes(&[1, 1, 5, 5, 5]).unwrap();
/// assert_eq!(plan.total_ops(), 4);
/// assert_eq!(plan.target(), Some(5));
///
/// // Already-level sequences plan zero firings.
/// let plan = LevelPlan::for_volumes(&[7, 7, 7]).unwrap();
/// assert!(plan.is_noop());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelPlan {
    /// Planned firings, widest prefix first.
    firings: SmallVec<[Firing; 8]>,
    total_ops: u64,
    target: Option<Volume>,
    len: usize,
}

impl LevelPlan {
    /// Plan the minimum operation schedule for `volumes`.
    ///
    /// `volumes` is read-only; the plan keeps no copy of it. Empty and
    /// single-element sequences yield the empty plan.
    ///
    /// # Errors
    ///
    /// [`PlanError::NonMonotone`] when the sequence decreases
    /// somewhere; no schedule of prefix operations can level it.
    pub fn for_volumes(volumes: &[Volume]) -> Result<Self, PlanError> {
        if let Some(index) = first_drop(volumes) {
            return Err(PlanError::NonMonotone { index });
        }

        let mut firings = SmallVec::new();
        let mut total_ops = 0u64;
        for i in (0..volumes.len().saturating_sub(1)).rev() {
            let gap = adjacent_gap(volumes[i], volumes[i + 1]);
            if gap > 0 {
                firings.push(Firing {
                    op: PrefixOp { width: i + 1 },
                    count: gap,
                });
                total_ops += gap;
            }
        }

        Ok(Self {
            firings,
            total_ops,
            target: volumes.last().copied(),
            len: volumes.len(),
        })
    }

    /// Number of unit operations the plan calls for.
    pub fn total_ops(&self) -> u64 {
        self.total_ops
    }

    /// The planned firings, widest prefix first.
    pub fn firings(&self) -> &[Firing] {
        &self.firings
    }

    /// The level every reservoir reaches when the plan runs.
    ///
    /// For a non-decreasing sequence this is its last element (the
    /// maximum). `None` for the empty sequence.
    pub fn target(&self) -> Option<Volume> {
        self.target
    }

    /// Length of the sequence the plan was built for.
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    /// True when the sequence is already level and no firing is planned.
    pub fn is_noop(&self) -> bool {
        self.total_ops == 0
    }
}

/// Minimum number of unit operations to level `volumes`, or
/// [`INFEASIBLE`] when the sequence cannot be leveled.
///
/// The plain-integer twin of [`LevelPlan::for_volumes`] for callers
/// that check for `-1` instead of matching on [`PlanError`]. The
/// caller's slice is never mutated. Totals beyond `i64::MAX`
/// (reachable only with near-full-range volumes) saturate.
///
/// # Examples
///
/// ```
/// use weir_engine::min_operations;
///
/// assert_eq!(min_operations(&[1, 2]), 1);
/// assert_eq!(min_operations(&[3, 2, 1]), -1);
/// assert_eq!(min_operations(&[1, 1, 1, 1]), 0);
/// ```
pub fn min_operations(volumes: &[Volume]) -> i64 {
    match LevelPlan::for_volumes(volumes) {
        Ok(plan) => i64::try_from(plan.total_ops()).unwrap_or(i64::MAX),
        Err(PlanError::NonMonotone { .. }) => INFEASIBLE,
    }
}

/// First index, scanning left to right, whose volume drops below its
/// predecessor.
fn first_drop(volumes: &[Volume]) -> Option<usize> {
    (1..volumes.len()).find(|&i| volumes[i] < volumes[i - 1])
}

/// Gap between a non-decreasing adjacent pair.
///
/// Exact for any `lo <= hi` pair of `i64`s: the true difference lies
/// in `[0, 2^64)` and wrapping subtraction preserves it mod `2^64`.
fn adjacent_gap(lo: Volume, hi: Volume) -> u64 {
    hi.wrapping_sub(lo) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_reservoirs_one_unit_apart() {
        let plan = LevelPlan::for_volumes(&[1, 2]).unwrap();
        assert_eq!(plan.total_ops(), 1);
        assert_eq!(plan.firings(), [Firing {
            op: PrefixOp { width: 1 },
            count: 1,
        }]);
        assert_eq!(plan.target(), Some(2));
    }

    #[test]
    fn plateau_then_rise_decomposes_on_the_gap() {
        // Only the single 1 -> 5 gap contributes; the duplicates on
        // either side of it do not.
        let plan = LevelPlan::for_volumes(&[1, 1, 5, 5, 5]).unwrap();
        assert_eq!(plan.total_ops(), 4);
        assert_eq!(plan.firings(), [Firing {
            op: PrefixOp { width: 2 },
            count: 4,
        }]);
    }

    #[test]
    fn strict_ramp_fires_every_width_once() {
        let plan = LevelPlan::for_volumes(&[0, 1, 2, 3]).unwrap();
        assert_eq!(plan.total_ops(), 3);
        let widths: Vec<usize> = plan.firings().iter().map(|f| f.op.width).collect();
        assert_eq!(widths, [3, 2, 1]);
        assert!(plan.firings().iter().all(|f| f.count == 1));
    }

    #[test]
    fn single_deep_gap_before_a_tail() {
        let plan = LevelPlan::for_volumes(&[0, 0, 0, 5]).unwrap();
        assert_eq!(plan.total_ops(), 5);
        assert_eq!(plan.firings(), [Firing {
            op: PrefixOp { width: 3 },
            count: 5,
        }]);
    }

    #[test]
    fn level_input_plans_nothing() {
        let plan = LevelPlan::for_volumes(&[1, 1, 1, 1]).unwrap();
        assert!(plan.is_noop());
        assert_eq!(plan.total_ops(), 0);
        assert!(plan.firings().is_empty());
    }

    #[test]
    fn empty_and_singleton_plans_are_noops() {
        let plan = LevelPlan::for_volumes(&[]).unwrap();
        assert!(plan.is_noop());
        assert_eq!(plan.target(), None);
        assert_eq!(plan.sequence_len(), 0);

        let plan = LevelPlan::for_volumes(&[9]).unwrap();
        assert!(plan.is_noop());
        assert_eq!(plan.target(), Some(9));
    }

    #[test]
    fn non_monotone_input_reports_the_first_drop() {
        let err = LevelPlan::for_volumes(&[3, 2, 1]).unwrap_err();
        assert_eq!(err, PlanError::NonMonotone { index: 1 });

        let err = LevelPlan::for_volumes(&[1, 4, 2, 9]).unwrap_err();
        assert_eq!(err, PlanError::NonMonotone { index: 2 });
    }

    #[test]
    fn negative_volumes_plan_like_any_others() {
        let plan = LevelPlan::for_volumes(&[-3, -1, 0]).unwrap();
        assert_eq!(plan.total_ops(), 3);
        assert_eq!(plan.target(), Some(0));
    }

    #[test]
    fn min_operations_keeps_the_sentinel_contract() {
        assert_eq!(min_operations(&[1, 2]), 1);
        assert_eq!(min_operations(&[1, 1, 5, 5, 5]), 4);
        assert_eq!(min_operations(&[3, 2, 1]), INFEASIBLE);
        assert_eq!(min_operations(&[1, 1, 1, 1]), 0);
        assert_eq!(min_operations(&[0, 0, 0, 5]), 5);
        assert_eq!(min_operations(&[0, 1, 2, 3]), 3);
        assert_eq!(min_operations(&[]), 0);
    }

    #[test]
    fn full_range_gap_is_exact_on_the_typed_surface() {
        let plan = LevelPlan::for_volumes(&[i64::MIN, i64::MAX]).unwrap();
        assert_eq!(plan.total_ops(), u64::MAX);
        // The sentinel surface saturates rather than wrapping negative.
        assert_eq!(min_operations(&[i64::MIN, i64::MAX]), i64::MAX);
    }
}
