//! Goal Progress Engine
//!
//! Metric evaluation over the game history, progress recomputation with a
//! one-way completion latch, and read-side goal filtering.

#![warn(missing_docs)]

pub mod evaluator;
pub mod engine;
pub mod filter;

pub use evaluator::evaluate;
pub use engine::{recompute_goals, ProgressEngine, Recompute, SkipReason, SkippedGoal};
pub use filter::{count_goals, days_until_deadline, filter_goals, GoalCounts, GoalView};
