//! Weir: a minimum-operation leveling engine for reservoir volume
//! sequences.
//!
//! The model: `n` consecutively numbered reservoirs hold liquid, and
//! the only allowed move pours exactly one unit into the first `k`
//! reservoirs simultaneously. Weir decides whether a sequence can be
//! leveled at all, computes the provably minimum number of unit
//! operations, and replays the run state by state.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all weir sub-crates. For most users, adding `weir` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weir::prelude::*;
//!
//! let volumes = [1, 1, 5, 5, 5];
//!
//! // Feasibility: a sequence levels iff it is non-decreasing.
//! assert!(is_equalizable(&volumes));
//! assert_eq!(min_operations(&[3, 2, 1]), INFEASIBLE);
//!
//! // The minimum schedule, as data.
//! let plan = LevelPlan::for_volumes(&volumes).unwrap();
//! assert_eq!(plan.total_ops(), 4);
//! assert_eq!(plan.target(), Some(5));
//!
//! // Step one unit operation at a time.
//! let mut leveler = Leveler::new(&volumes).unwrap();
//! leveler.step();
//! assert_eq!(leveler.state(), [2, 2, 5, 5, 5]);
//!
//! // Or materialize the whole trace and verify it after the fact.
//! let (count, states) = simulate(&volumes);
//! let trace = StateTrace::new(states).unwrap();
//! let summary = verify_trace(&trace).unwrap();
//! assert_eq!(summary.op_count as i64, count);
//! assert_eq!(summary.level, Some(5));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weir-core` | `Volume`, `PrefixOp`, sequence predicates, errors |
//! | [`engine`] | `weir-engine` | `LevelPlan`, `Leveler`, `simulate` |
//! | [`trace`] | `weir-trace` | `StateTrace`, trace verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and predicates (`weir-core`).
///
/// The [`types::Volume`] alias, the [`types::PrefixOp`] operation,
/// the sequence predicates, and the shared error enums.
pub use weir_core as types;

/// Planning, stepping, and simulation (`weir-engine`).
///
/// [`engine::LevelPlan`] for the minimum schedule,
/// [`engine::Leveler`] for lazy stepping, and [`engine::simulate`]
/// for the eager trace.
pub use weir_engine as engine;

/// State traces and replay verification (`weir-trace`).
///
/// Wrap recorded snapshots in [`trace::StateTrace`] and verify them
/// with [`trace::verify_trace`].
pub use weir_trace as trace;

/// Common imports for typical weir usage.
///
/// ```rust
/// use weir::prelude::*;
/// ```
pub mod prelude {
    // Core types and predicates
    pub use weir_core::{is_equalizable, is_level, target_level, PrefixOp, Volume, INFEASIBLE};

    // Errors
    pub use weir_core::{OpError, PlanError};

    // Engine
    pub use weir_engine::{min_operations, simulate, Firing, LevelPlan, Leveler, States};

    // Trace
    pub use weir_trace::{step_between, verify_trace, StateTrace, TraceError, TraceSummary};
}
