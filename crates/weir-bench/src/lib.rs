//! Benchmark profiles for the weir leveling engine.
//!
//! Deterministic input shapes shared by the criterion benches and the
//! engine's integration tests:
//!
//! - [`ramp_profile`]: strictly increasing, one firing per width
//! - [`plateau_profile`]: already level, the no-op case
//! - [`deep_tail_profile`]: one reservoir far below a long constant
//!   tail, the worst case for trace size, since the operation count
//!   is the gap depth regardless of sequence length
//! - [`inversion_profile`]: strictly decreasing, never levelable

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use weir_core::Volume;

/// Strictly increasing sequence `[0, 1, .., n - 1]`.
///
/// Plans one firing per width; total operation count `n - 1`.
pub fn ramp_profile(n: usize) -> Vec<Volume> {
    (0..n as Volume).collect()
}

/// Constant sequence of `n` reservoirs at `level`.
pub fn plateau_profile(n: usize, level: Volume) -> Vec<Volume> {
    vec![level; n]
}

/// One empty reservoir ahead of a constant tail at `depth`.
///
/// The single width-`(n - 1)` firing must run `depth` times, so the
/// operation count is `depth` and the eager trace holds
/// `(depth + 1) * n` cells however long the tail is.
pub fn deep_tail_profile(n: usize, depth: u64) -> Vec<Volume> {
    let mut volumes = vec![depth as Volume; n];
    if let Some(first) = volumes.first_mut() {
        *first = 0;
    }
    volumes
}

/// Strictly decreasing sequence `[n, .., 2, 1]`; never levelable for
/// `n >= 2`.
pub fn inversion_profile(n: usize) -> Vec<Volume> {
    (1..=n as Volume).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use weir_core::{is_equalizable, is_level};

    #[test]
    fn profiles_have_the_advertised_shapes() {
        assert_eq!(ramp_profile(4), [0, 1, 2, 3]);
        assert!(is_level(&plateau_profile(3, 7)));
        assert_eq!(deep_tail_profile(4, 5), [0, 5, 5, 5]);
        assert!(!is_equalizable(&inversion_profile(3)));
    }

    #[test]
    fn degenerate_profile_sizes_are_fine() {
        assert!(ramp_profile(0).is_empty());
        assert_eq!(deep_tail_profile(1, 9), [0]);
        assert!(inversion_profile(0).is_empty());
    }
}
