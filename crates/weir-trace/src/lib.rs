//! State traces and replay verification for weir leveling runs.
//!
//! A leveling run is fully described by its snapshots: the initial
//! state, then one snapshot per unit prefix operation. This crate
//! wraps that snapshot list as [`StateTrace`] and verifies it after
//! the fact: [`step_between`] recovers the operation between two
//! consecutive snapshots, [`verify_trace`] walks a whole trace and
//! confirms it ends level.
//!
//! Verification accepts any legal operation order, not only the
//! engine's canonical widest-first order, so hand-built traces verify
//! too. Everything is in-memory; there is no trace file format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod trace;
pub mod verify;

pub use error::TraceError;
pub use trace::StateTrace;
pub use verify::{step_between, verify_trace, TraceSummary};
