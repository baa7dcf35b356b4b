use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

/// Round duration setting. Stored in preferences as 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map the persisted integer to a difficulty. Anything out of range
    /// falls back to Medium, matching the stored default.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Difficulty::Easy,
            2 => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Countdown duration for each round, in seconds.
    pub fn round_seconds(&self) -> u32 {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 30,
            Difficulty::Hard => 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub two_player: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            two_player: env::var("TWO_PLAYER")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("TWO_PLAYER must be true or false")?,
        };

        let storage = StorageConfig {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string()),
        };

        Ok(Config { game, storage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_index(difficulty.index()), difficulty);
        }
    }

    #[test]
    fn test_out_of_range_difficulty_is_medium() {
        assert_eq!(Difficulty::from_index(3), Difficulty::Medium);
        assert_eq!(Difficulty::from_index(255), Difficulty::Medium);
    }

    #[test]
    fn test_round_seconds() {
        assert_eq!(Difficulty::Easy.round_seconds(), 45);
        assert_eq!(Difficulty::Medium.round_seconds(), 30);
        assert_eq!(Difficulty::Hard.round_seconds(), 20);
    }
}
