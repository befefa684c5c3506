//! Storage trait abstractions.

use async_trait::async_trait;
use tenpin_core::{GameRecord, Goal};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Persistence boundary for the goal collection.
///
/// The store always holds the full set: `save_goals` replaces everything
/// in one atomic write, never patches individual goals. Callers must not
/// interleave concurrent saves against the same store instance.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Load the full goal set. An empty store yields the starter goals
    /// (without persisting them).
    async fn load_goals(&self) -> Result<Vec<Goal>>;

    /// Replace the full goal set atomically.
    async fn save_goals(&mut self, goals: &[Goal]) -> Result<()>;
}

/// Read-side boundary for the completed-game history.
#[async_trait]
pub trait GameHistory: Send + Sync {
    /// All completed games, ordered oldest-to-newest.
    ///
    /// Implementations must sort by `created_at` before returning; the
    /// progress engine relies on "most recent N" being the last N
    /// elements.
    async fn games(&self) -> Result<Vec<GameRecord>>;
}
