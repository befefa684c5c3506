//! Storage boundaries for tenpin.
//!
//! This crate provides the trait-based goal store and game history
//! interfaces with a JSON-file reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_store;

pub use trait_::{GameHistory, GoalStore, Result, StorageError};
pub use json_store::{JsonGameLog, JsonGoalStore};
