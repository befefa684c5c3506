//! Completed game records.

use serde::{Deserialize, Serialize};
use crate::Time;

/// A single completed game, as supplied by the game history provider.
///
/// Records are read-only to the progress engine. Collections of records
/// are ordered oldest-to-newest: "the most recent N games" always means
/// the last N elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Final score for the game (0-300)
    pub total_score: u32,

    /// Strikes thrown in the game
    pub strikes: u32,

    /// Spares picked up in the game
    pub spares: u32,

    /// When the game was bowled
    pub created_at: Time,
}
