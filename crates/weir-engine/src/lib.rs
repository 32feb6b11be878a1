//! Leveling engine for reservoir volume sequences.
//!
//! The only allowed mutation is the unit prefix operation: pour one
//! unit of liquid into the first `k` reservoirs simultaneously. This
//! crate answers three questions about a sequence of volumes:
//!
//! - can it be leveled at all ([`LevelPlan::for_volumes`],
//!   [`min_operations`]),
//! - what is the minimum number of unit operations
//!   ([`LevelPlan::total_ops`]), and
//! - what does every intermediate state look like ([`Leveler`] for
//!   lazy stepping, [`simulate`] for the eager trace).
//!
//! The caller's slice is never mutated: the engine plans over a
//! read-only borrow and steps over its own private working copy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod leveler;
pub mod plan;
pub mod simulate;

pub use leveler::{Leveler, States};
pub use plan::{min_operations, Firing, LevelPlan};
pub use simulate::simulate;
