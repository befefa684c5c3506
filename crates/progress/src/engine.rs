//! Progress recomputation engine.
//!
//! Re-derives every goal's current value and progress from the game
//! history, applies the one-way completion latch, and writes the full
//! goal set back to the store.

use tenpin_core::{GameRecord, Goal, GoalId, Time};
use tenpin_storage::{GameHistory, GoalStore, Result};
use tracing::{debug, warn};

use crate::evaluator::evaluate;

/// Outcome of one recomputation pass.
#[derive(Debug, Clone)]
pub struct Recompute {
    /// The full updated goal set, replacing the stored collection.
    pub goals: Vec<Goal>,

    /// Goals left untouched because their data was malformed.
    pub skipped: Vec<SkippedGoal>,
}

/// Diagnostic for a goal the engine refused to recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedGoal {
    /// The offending goal
    pub id: GoalId,

    /// Its title, for display
    pub title: String,

    /// Why it was skipped
    pub reason: SkipReason,
}

/// Why a goal was skipped during recomputation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    /// The target is zero, negative, NaN or infinite
    #[error("target must be a positive number, got {0}")]
    InvalidTarget(f64),
}

/// Recompute every goal against the game history.
///
/// Pure with respect to storage: callers pass the stored goals in and get
/// the replacement collection out. `games` must be ordered
/// oldest-to-newest. Each goal is handled independently; a malformed goal
/// is emitted unchanged and reported in `skipped` rather than failing the
/// pass.
pub fn recompute_goals(goals: &[Goal], games: &[GameRecord], now: Time) -> Recompute {
    let mut updated = Vec::with_capacity(goals.len());
    let mut skipped = Vec::new();

    for stored in goals {
        let mut goal = stored.clone();

        if !(goal.target.is_finite() && goal.target > 0.0) {
            warn!(goal = %goal.id, target = goal.target, "skipping goal with invalid target");
            skipped.push(SkippedGoal {
                id: goal.id,
                title: goal.title.clone(),
                reason: SkipReason::InvalidTarget(goal.target),
            });
            updated.push(goal);
            continue;
        }

        match evaluate(goal.metric, games) {
            Some(value) => {
                goal.current_value = value;
                goal.progress = (100.0 * value / goal.target).clamp(0.0, 100.0);

                // One-way latch: merge against the stored flag so a later
                // dip below target never un-completes a goal.
                let completed = stored.is_completed || value >= goal.target;
                if completed && !stored.is_completed {
                    goal.completed_at = Some(now);
                }
                goal.is_completed = completed;
            }
            None => {
                // Not enough games for a windowed metric: keep the stored
                // value, progress and completion state as they are.
                debug!(goal = %goal.id, "sample too small, goal left unchanged");
            }
        }

        updated.push(goal);
    }

    Recompute {
        goals: updated,
        skipped,
    }
}

/// Engine wiring the pure recomputation to a goal store and game history.
///
/// Holds no goal state between invocations; every `recompute` re-reads
/// both boundaries and replaces the stored set wholesale. Recomputations
/// against the same store must be serialized by the caller.
pub struct ProgressEngine<S: GoalStore, H: GameHistory> {
    store: S,
    history: H,
}

impl<S: GoalStore, H: GameHistory> ProgressEngine<S, H> {
    /// Create an engine over a goal store and game history provider.
    pub fn new(store: S, history: H) -> Self {
        Self { store, history }
    }

    /// Access the underlying goal store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load, recompute and write back the full goal set.
    ///
    /// Any storage failure aborts the cycle before the write, so the
    /// stored set is either fully replaced or untouched.
    pub async fn recompute(&mut self) -> Result<Recompute> {
        let goals = self.store.load_goals().await?;
        let games = self.history.games().await?;

        let outcome = recompute_goals(&goals, &games, chrono::Utc::now());
        self.store.save_goals(&outcome.goals).await?;

        Ok(outcome)
    }
}
