//! Tenpin core data models.
//!
//! This crate defines the fundamental data structures for the bowling
//! goal-tracking engine: completed game records and user-declared goals.

#![warn(missing_docs)]

// Core identities
mod id;

// Domain models
mod game;
mod goal;

// Re-exports
pub use id::GoalId;

pub use game::GameRecord;
pub use goal::{Goal, GoalMetric, Priority};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
