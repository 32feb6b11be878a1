//! Volume sequences and their predicates.
//!
//! A volume sequence is the engine's sole input: one [`Volume`] per
//! reservoir, slice order = reservoir order. Everything here is pure
//! and allocation-free; anything that mutates lives in `weir-engine`.

/// Liquid volume held by a single reservoir.
///
/// Signed on purpose: the leveling logic only ever compares and
/// subtracts adjacent values, so negative volumes behave exactly like
/// non-negative ones.
pub type Volume = i64;

/// Sentinel operation count for sequences that cannot be leveled.
///
/// Returned by the plain-integer surfaces (`min_operations`,
/// `simulate` in `weir-engine`). The typed surfaces report
/// [`PlanError`](crate::PlanError) instead.
pub const INFEASIBLE: i64 = -1;

/// True iff `volumes` can be leveled by prefix operations.
///
/// A prefix operation raises every reservoir up to some width by one
/// and leaves the rest untouched. For a pair `i < j` it either
/// touches neither, raises both, or raises only `i`, so it can
/// narrow the gap `volumes[j] - volumes[i]` but never widen it, and
/// it can never raise `j` without raising `i`. A pair that starts
/// inverted stays inverted forever; feasibility is therefore exactly
/// "non-decreasing".
///
/// Empty and single-element sequences are trivially equalizable.
///
/// # Examples
///
/// ```
/// use weir_core::is_equalizable;
///
/// assert!(is_equalizable(&[1, 1, 5, 5, 5]));
/// assert!(is_equalizable(&[]));
/// assert!(!is_equalizable(&[3, 2, 1]));
/// ```
pub fn is_equalizable(volumes: &[Volume]) -> bool {
    volumes.windows(2).all(|w| w[0] <= w[1])
}

/// True iff every reservoir already holds the same volume.
pub fn is_level(volumes: &[Volume]) -> bool {
    volumes.windows(2).all(|w| w[0] == w[1])
}

/// The level every reservoir ends at after a successful leveling.
///
/// This is the maximum of the sequence; for a non-decreasing
/// sequence, its last element. `None` for an empty sequence.
pub fn target_level(volumes: &[Volume]) -> Option<Volume> {
    volumes.iter().copied().max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn non_decreasing_sequences_are_equalizable() {
        assert!(is_equalizable(&[1, 2]));
        assert!(is_equalizable(&[1, 1, 5, 5, 5]));
        assert!(is_equalizable(&[1, 1, 1, 1]));
        assert!(is_equalizable(&[0, 0, 1, 2, 3]));
        assert!(is_equalizable(&[-4, -4, 0, 7]));
    }

    #[test]
    fn inverted_sequences_are_not_equalizable() {
        assert!(!is_equalizable(&[3, 2, 1]));
        assert!(!is_equalizable(&[5, 1, 3, 2]));
        assert!(!is_equalizable(&[10, 5, 7, 8]));
        assert!(!is_equalizable(&[0, -1]));
    }

    #[test]
    fn trivial_sequences_are_equalizable() {
        assert!(is_equalizable(&[]));
        assert!(is_equalizable(&[42]));
    }

    #[test]
    fn is_level_detects_constant_sequences() {
        assert!(is_level(&[]));
        assert!(is_level(&[7]));
        assert!(is_level(&[5, 5, 5]));
        assert!(!is_level(&[5, 5, 6]));
    }

    #[test]
    fn target_level_is_the_maximum() {
        assert_eq!(target_level(&[]), None);
        assert_eq!(target_level(&[3]), Some(3));
        assert_eq!(target_level(&[1, 1, 5, 5, 5]), Some(5));
        assert_eq!(target_level(&[-9, -2]), Some(-2));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn sorting_makes_any_sequence_equalizable(
            mut volumes in prop::collection::vec(-1000i64..1000, 0..64),
        ) {
            volumes.sort_unstable();
            prop_assert!(is_equalizable(&volumes));
        }

        #[test]
        fn an_adjacent_inversion_defeats_equalizability(
            mut volumes in prop::collection::vec(-1000i64..1000, 2..64),
            at in 1usize..64,
        ) {
            volumes.sort_unstable();
            let at = at % (volumes.len() - 1) + 1;
            // Force volumes[at] strictly below its predecessor.
            volumes[at] = volumes[at - 1] - 1;
            prop_assert!(!is_equalizable(&volumes));
        }

        #[test]
        fn equalizable_sequences_end_at_their_last_element(
            mut volumes in prop::collection::vec(-1000i64..1000, 1..64),
        ) {
            volumes.sort_unstable();
            prop_assert_eq!(target_level(&volumes), volumes.last().copied());
        }
    }
}
