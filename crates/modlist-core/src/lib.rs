//! modlist-core
//!
//! This crate provides the data model and error handling shared across all
//! modlist-changelog components.

pub mod error;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::*;
