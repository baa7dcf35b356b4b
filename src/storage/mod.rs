use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::Difficulty;
use crate::game::GameResult;

const PREFERENCES_FILE: &str = "preferences.json";
const HISTORY_FILE: &str = "game_results.txt";

/// On-disk shape of the preferences store.
#[derive(Debug, Serialize, Deserialize)]
struct PreferencesRecord {
    difficulty: u8,
    best_score: i64,
}

impl Default for PreferencesRecord {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium.index(),
            best_score: 0,
        }
    }
}

/// Key-value settings persisted as JSON under the data directory.
///
/// A missing or unreadable file yields defaults; the store is rewritten in
/// full on every change.
pub struct Preferences {
    path: PathBuf,
    record: PreferencesRecord,
}

impl Preferences {
    pub async fn load<P: AsRef<Path>>(data_dir: P) -> Self {
        let path = data_dir.as_ref().join(PREFERENCES_FILE);
        let record = match fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Preferences file is corrupt ({e}), using defaults");
                    PreferencesRecord::default()
                }
            },
            Err(_) => PreferencesRecord::default(),
        };
        Self { path, record }
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_index(self.record.difficulty)
    }

    pub async fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.record.difficulty = difficulty.index();
        self.save().await
    }

    pub fn best_score(&self) -> i64 {
        self.record.best_score
    }

    /// Record a new best score. Returns true when `score` beats the stored
    /// best; lower or equal scores leave the store untouched.
    pub async fn update_best_score(&mut self, score: i64) -> Result<bool> {
        if score <= self.record.best_score {
            return Ok(false);
        }
        self.record.best_score = score;
        self.save().await?;
        Ok(true)
    }

    async fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.record)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Append-only log of finished games, one line per game.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(HISTORY_FILE),
        }
    }

    /// Append one finished game:
    /// `Date: <timestamp>, Player 1: <score>, Player 2: <score>`
    pub async fn append(&self, result: &GameResult) -> Result<()> {
        let line = format!(
            "Date: {}, Player 1: {}, Player 2: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            result.player1_score,
            result.player2_score,
        );

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .await
            .context("failed to append game result")?;
        Ok(())
    }

    /// Read the full history. `None` when no game has been recorded yet.
    pub async fn read_all(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(anyhow::Error::new(e).context("failed to read game history"))
            }
        }
    }

    /// Delete the history file. Returns true when there was one to delete.
    pub async fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("failed to clear game history")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;

    fn result(p1: i64, p2: i64) -> GameResult {
        GameResult {
            player1_score: p1,
            player2_score: p2,
            outcome: if p1 > p2 {
                Outcome::PlayerOneWins
            } else if p2 > p1 {
                Outcome::PlayerTwoWins
            } else {
                Outcome::Tie
            },
        }
    }

    #[tokio::test]
    async fn test_preferences_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path()).await;
        assert_eq!(prefs.difficulty(), Difficulty::Medium);
        assert_eq!(prefs.best_score(), 0);
    }

    #[tokio::test]
    async fn test_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut prefs = Preferences::load(dir.path()).await;
        prefs.set_difficulty(Difficulty::Hard).await.unwrap();
        assert!(prefs.update_best_score(42).await.unwrap());

        let reloaded = Preferences::load(dir.path()).await;
        assert_eq!(reloaded.difficulty(), Difficulty::Hard);
        assert_eq!(reloaded.best_score(), 42);
    }

    #[tokio::test]
    async fn test_best_score_only_improves() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::load(dir.path()).await;

        assert!(prefs.update_best_score(10).await.unwrap());
        assert!(!prefs.update_best_score(10).await.unwrap());
        assert!(!prefs.update_best_score(5).await.unwrap());
        assert_eq!(prefs.best_score(), 10);
    }

    #[tokio::test]
    async fn test_corrupt_preferences_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "{not json")
            .await
            .unwrap();

        let prefs = Preferences::load(dir.path()).await;
        assert_eq!(prefs.difficulty(), Difficulty::Medium);
        assert_eq!(prefs.best_score(), 0);
    }

    #[tokio::test]
    async fn test_history_append_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path());

        assert_eq!(log.read_all().await.unwrap(), None);

        log.append(&result(12, 7)).await.unwrap();
        log.append(&result(3, 3)).await.unwrap();

        let history = log.read_all().await.unwrap().unwrap();
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Date: "));
        assert!(lines[0].ends_with("Player 1: 12, Player 2: 7"));
        assert!(lines[1].ends_with("Player 1: 3, Player 2: 3"));
    }

    #[tokio::test]
    async fn test_history_clear() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path());

        assert!(!log.clear().await.unwrap());

        log.append(&result(1, 0)).await.unwrap();
        assert!(log.clear().await.unwrap());
        assert_eq!(log.read_all().await.unwrap(), None);
    }
}
