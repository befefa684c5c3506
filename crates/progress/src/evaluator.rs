//! Metric evaluators.
//!
//! Each evaluator is a pure, total function reducing the ordered game
//! history to one number. Windowed metrics (`Average`, `Consistency`)
//! return `None` below their minimum sample size, which tells the engine
//! to leave the stored goal untouched rather than regress it.

use tenpin_core::{GameRecord, GoalMetric};

/// Window size for recency-based metrics.
pub const RECENT_WINDOW: usize = 10;

/// Minimum games before an average is considered meaningful.
pub const AVERAGE_MIN_GAMES: usize = 10;

/// Minimum games before consistency is considered meaningful.
pub const CONSISTENCY_MIN_GAMES: usize = 5;

/// Compute the current value of `metric` over `games`.
///
/// `games` must be ordered oldest-to-newest; the last N elements are the
/// N most recent games. Returns `None` when a windowed metric's sample
/// precondition is unmet.
pub fn evaluate(metric: GoalMetric, games: &[GameRecord]) -> Option<f64> {
    match metric {
        GoalMetric::Score => Some(
            games
                .iter()
                .map(|g| g.total_score)
                .max()
                .unwrap_or(0) as f64,
        ),
        GoalMetric::Average => {
            if games.len() < AVERAGE_MIN_GAMES {
                return None;
            }
            let scores = recent_scores(games, RECENT_WINDOW);
            Some(mean(&scores).round())
        }
        GoalMetric::Strikes => Some(games.iter().map(|g| g.strikes as f64).sum()),
        GoalMetric::Spares => Some(games.iter().map(|g| g.spares as f64).sum()),
        GoalMetric::Games => Some(games.len() as f64),
        GoalMetric::Consistency => {
            if games.len() < CONSISTENCY_MIN_GAMES {
                return None;
            }
            let scores = recent_scores(games, RECENT_WINDOW);
            Some(consistency(&scores))
        }
    }
}

/// Scores of the up-to-`n` most recent games.
fn recent_scores(games: &[GameRecord], n: usize) -> Vec<f64> {
    games[games.len().saturating_sub(n)..]
        .iter()
        .map(|g| g.total_score as f64)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Steadiness score in [0, 100]: 100 − 100·σ/μ, floored at 0.
///
/// σ is the population standard deviation (divide by N). A zero mean is
/// defined as consistency 0 so the ratio never divides by zero.
fn consistency(scores: &[f64]) -> f64 {
    let m = mean(scores);
    if m == 0.0 {
        return 0.0;
    }
    let variance = scores.iter().map(|s| (s - m).powi(2)).sum::<f64>() / scores.len() as f64;
    let stddev = variance.sqrt();
    (100.0 - 100.0 * stddev / m).max(0.0).round()
}
