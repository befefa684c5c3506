//! Goal model - a user-declared target over the game history.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use crate::id::GoalId;
use crate::Time;

/// A goal pins a numeric target to one metric of the bowler's game history.
///
/// The derived fields (`current_value`, `progress`, `is_completed`,
/// `completed_at`) are owned by the progress engine; everything else is
/// edited directly by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, stable across edits
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Which metric this goal measures
    pub metric: GoalMetric,

    /// Numeric threshold to reach; must be finite and > 0
    pub target: f64,

    /// Last value the engine computed for the metric
    pub current_value: f64,

    /// Percentage toward the target (0-100)
    pub progress: f64,

    /// When the goal should be reached
    pub deadline: Time,

    /// User-assigned priority
    pub priority: Priority,

    /// One-way completion latch: once true, recomputation never clears it
    pub is_completed: bool,

    /// Set exactly once, the instant `is_completed` first becomes true
    pub completed_at: Option<Time>,

    /// When created
    pub created_at: Time,
}

/// The metric a goal is measured against.
///
/// `Score`, `Strikes`, `Spares` and `Games` are lifetime milestones over
/// the full history. `Average` and `Consistency` are windowed over the
/// most recent games, since they describe current skill rather than an
/// accumulated total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalMetric {
    /// Highest single-game score
    Score,
    /// Rounded mean score over the 10 most recent games
    Average,
    /// Total strikes thrown across all games
    Strikes,
    /// Total spares picked up across all games
    Spares,
    /// Number of games bowled
    Games,
    /// Score steadiness over recent games, 0-100
    Consistency,
}

/// Goal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Nice to have
    Low,
    /// Default
    Medium,
    /// Front of mind
    High,
}

impl Goal {
    /// Create a goal with derived fields reset.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        metric: GoalMetric,
        target: f64,
        deadline: Time,
        priority: Priority,
    ) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            description: description.into(),
            metric,
            target,
            current_value: 0.0,
            progress: 0.0,
            deadline,
            priority,
            is_completed: false,
            completed_at: None,
            created_at: chrono::Utc::now(),
        }
    }

    /// Default goals seeded on first use, when the store is empty.
    pub fn starter_goals(now: Time) -> Vec<Goal> {
        vec![
            Goal {
                id: GoalId::new(),
                title: "Break 200".to_string(),
                description: "Bowl a single game of 200 or better".to_string(),
                metric: GoalMetric::Score,
                target: 200.0,
                current_value: 0.0,
                progress: 0.0,
                deadline: now + Duration::days(90),
                priority: Priority::High,
                is_completed: false,
                completed_at: None,
                created_at: now,
            },
            Goal {
                id: GoalId::new(),
                title: "150 average".to_string(),
                description: "Hold a 150 average over your last ten games".to_string(),
                metric: GoalMetric::Average,
                target: 150.0,
                current_value: 0.0,
                progress: 0.0,
                deadline: now + Duration::days(180),
                priority: Priority::Medium,
                is_completed: false,
                completed_at: None,
                created_at: now,
            },
            Goal {
                id: GoalId::new(),
                title: "50 games".to_string(),
                description: "Bowl fifty games".to_string(),
                metric: GoalMetric::Games,
                target: 50.0,
                current_value: 0.0,
                progress: 0.0,
                deadline: now + Duration::days(365),
                priority: Priority::Low,
                is_completed: false,
                completed_at: None,
                created_at: now,
            },
        ]
    }
}
