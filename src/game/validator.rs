use crate::dictionary::Dictionary;

pub struct WordValidator;

impl WordValidator {
    /// Check that a submitted word is in the dictionary and can be spelled
    /// from the drawn tiles, consuming each tile at most once.
    pub fn is_valid_word(word: &str, tiles: &[char], dictionary: &Dictionary) -> bool {
        let word = word.trim().to_uppercase();
        if word.is_empty() || !dictionary.contains(&word) {
            return false;
        }

        // Multiset subset check: remove each letter from the available
        // tiles, failing if any letter has no tile left.
        let mut available: Vec<char> = tiles.to_vec();
        for ch in word.chars() {
            match available.iter().position(|&t| t == ch) {
                Some(idx) => {
                    available.swap_remove(idx);
                }
                None => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|w| w.to_string()))
    }

    #[test]
    fn test_valid_word_from_tiles() {
        let d = dict(&["CRANE"]);
        let tiles = ['C', 'R', 'A', 'N', 'E', 'T', 'S', 'O', 'B'];
        assert!(WordValidator::is_valid_word("CRANE", &tiles, &d));
        assert!(WordValidator::is_valid_word("crane", &tiles, &d));
    }

    #[test]
    fn test_word_not_in_dictionary() {
        let d = dict(&["CRANE"]);
        let tiles = ['C', 'R', 'A', 'N', 'E'];
        assert!(!WordValidator::is_valid_word("CARNE", &tiles, &d));
    }

    #[test]
    fn test_tiles_are_not_reusable() {
        // One 'L' drawn, word needs two.
        let d = dict(&["LLAMA"]);
        let tiles = ['L', 'A', 'M', 'A', 'X'];
        assert!(!WordValidator::is_valid_word("LLAMA", &tiles, &d));

        let tiles = ['L', 'L', 'A', 'M', 'A'];
        assert!(WordValidator::is_valid_word("LLAMA", &tiles, &d));
    }

    #[test]
    fn test_missing_letter() {
        let d = dict(&["QUIZ"]);
        let tiles = ['Q', 'U', 'I', 'T'];
        assert!(!WordValidator::is_valid_word("QUIZ", &tiles, &d));
    }

    #[test]
    fn test_empty_word_and_empty_dictionary() {
        let d = dict(&["CRANE"]);
        assert!(!WordValidator::is_valid_word("", &['C', 'R'], &d));

        let empty = Dictionary::empty();
        assert!(!WordValidator::is_valid_word(
            "CRANE",
            &['C', 'R', 'A', 'N', 'E'],
            &empty
        ));
    }
}
