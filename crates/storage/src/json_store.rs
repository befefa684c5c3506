//! JSON file storage implementation.
//!
//! Goals live in a single `goals.json` file and are always written as the
//! full collection: a save stages the new contents in a temp file and
//! renames it over the old one, so readers never observe a partial set.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tenpin_core::{GameRecord, Goal};
use tokio::fs;
use tracing::debug;

use super::{GameHistory, GoalStore, Result};

/// File-based goal store backed by a single JSON document.
pub struct JsonGoalStore {
    root: PathBuf,
}

impl JsonGoalStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn goals_path(&self) -> PathBuf {
        self.root.join("goals.json")
    }
}

#[async_trait]
impl GoalStore for JsonGoalStore {
    async fn load_goals(&self) -> Result<Vec<Goal>> {
        match read_json::<Vec<Goal>>(&self.goals_path()).await? {
            Some(goals) => Ok(goals),
            None => {
                debug!("no goal file found, seeding starter goals");
                Ok(Goal::starter_goals(chrono::Utc::now()))
            }
        }
    }

    async fn save_goals(&mut self, goals: &[Goal]) -> Result<()> {
        write_json_atomic(&self.goals_path(), &goals).await
    }
}

/// File-based game log backed by a single JSON document.
pub struct JsonGameLog {
    root: PathBuf,
}

impl JsonGameLog {
    /// Open a game log rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn games_path(&self) -> PathBuf {
        self.root.join("games.json")
    }

    /// Record a completed game.
    pub async fn append_game(&mut self, game: GameRecord) -> Result<()> {
        let mut games = read_json::<Vec<GameRecord>>(&self.games_path())
            .await?
            .unwrap_or_default();
        games.push(game);
        write_json_atomic(&self.games_path(), &games).await
    }
}

#[async_trait]
impl GameHistory for JsonGameLog {
    async fn games(&self) -> Result<Vec<GameRecord>> {
        let mut games = read_json::<Vec<GameRecord>>(&self.games_path())
            .await?
            .unwrap_or_default();
        // Oldest-to-newest is part of the GameHistory contract.
        games.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(games)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json.as_bytes()).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tenpin_core::{GoalMetric, Priority};

    fn sample_goal(title: &str) -> Goal {
        Goal::new(
            title,
            "test goal",
            GoalMetric::Score,
            200.0,
            Utc::now() + Duration::days(30),
            Priority::Medium,
        )
    }

    #[tokio::test]
    async fn empty_store_seeds_starter_goals() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGoalStore::new(dir.path()).await.unwrap();

        let goals = store.load_goals().await.unwrap();
        assert!(!goals.is_empty());
        assert!(goals.iter().all(|g| !g.is_completed));

        // Seeding does not persist; the file only appears after a save.
        assert!(!dir.path().join("goals.json").exists());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonGoalStore::new(dir.path()).await.unwrap();

        let goals = vec![sample_goal("a"), sample_goal("b")];
        store.save_goals(&goals).await.unwrap();

        let loaded = store.load_goals().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, goals[0].id);
        assert_eq!(loaded[1].title, "b");

        // save(load()) leaves the contents equivalent.
        store.save_goals(&loaded).await.unwrap();
        let again = store.load_goals().await.unwrap();
        assert_eq!(again.len(), loaded.len());
        assert_eq!(again[0].id, loaded[0].id);
    }

    #[tokio::test]
    async fn save_replaces_the_full_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonGoalStore::new(dir.path()).await.unwrap();

        store
            .save_goals(&[sample_goal("a"), sample_goal("b")])
            .await
            .unwrap();
        let remaining = vec![sample_goal("c")];
        store.save_goals(&remaining).await.unwrap();

        let loaded = store.load_goals().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "c");
    }

    #[tokio::test]
    async fn game_log_returns_games_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = JsonGameLog::new(dir.path()).await.unwrap();

        let now = Utc::now();
        // Append out of chronological order.
        log.append_game(GameRecord {
            total_score: 180,
            strikes: 4,
            spares: 3,
            created_at: now,
        })
        .await
        .unwrap();
        log.append_game(GameRecord {
            total_score: 150,
            strikes: 2,
            spares: 5,
            created_at: now - Duration::days(1),
        })
        .await
        .unwrap();

        let games = log.games().await.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].total_score, 150);
        assert_eq!(games[1].total_score, 180);
    }

    #[tokio::test]
    async fn empty_game_log_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonGameLog::new(dir.path()).await.unwrap();
        assert!(log.games().await.unwrap().is_empty());
    }
}
