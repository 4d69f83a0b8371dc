//! modlist-diff
//!
//! Compares two mod list snapshots: which mods were added, which were removed,
//! and which changed version between them.

pub mod diff;
pub mod resolve;

pub use diff::{compose, compose_available};
pub use resolve::{ComparisonInputs, NameSource, ResolvedInputs};
