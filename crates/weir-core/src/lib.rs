//! Core types for the weir leveling engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the volume sequence predicates, the prefix operation (the only
//! mutation the engine is allowed to perform), and the error types
//! shared by the engine and trace crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod op;
pub mod volume;

pub use error::{OpError, PlanError};
pub use op::PrefixOp;
pub use volume::{is_equalizable, is_level, target_level, Volume, INFEASIBLE};
