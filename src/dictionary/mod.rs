use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use tokio::fs;

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Ok(Self { words })
    }

    /// Create an empty dictionary. Used when the word list is missing; no
    /// word validates against it.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a dictionary from an in-memory word list (for testing).
    pub fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_uppercase()).collect(),
        }
    }

    /// Check if a word exists in the dictionary (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
