pub struct Scorer;

impl Scorer {
    /// Score for a valid word.
    ///
    /// Scoring rules:
    /// - 1 point per letter
    /// - +50 bonus for using every drawn tile
    pub fn score_word(word: &str, tile_count: usize) -> i64 {
        let length = word.trim().chars().count();
        let mut score = length as i64;
        if length == tile_count {
            score += 50;
        }
        score
    }

    /// Score for a numbers-round result against the target.
    ///
    /// Scoring rules:
    /// - exact: 10 points
    /// - within 5: 7 points
    /// - within 10: 5 points
    /// - further away: 0
    pub fn score_calculation(result: i64, target: i64) -> i64 {
        match (target - result).abs() {
            0 => 10,
            1..=5 => 7,
            6..=10 => 5,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_score_is_length() {
        assert_eq!(Scorer::score_word("CRANE", 9), 5);
        assert_eq!(Scorer::score_word("AX", 9), 2);
    }

    #[test]
    fn test_all_tiles_bonus() {
        // Word length equals tile count: +50
        assert_eq!(Scorer::score_word("CRANE", 5), 55);
        assert_eq!(Scorer::score_word("CRANES", 6), 56);
    }

    #[test]
    fn test_calculation_score_bands() {
        assert_eq!(Scorer::score_calculation(500, 500), 10);
        assert_eq!(Scorer::score_calculation(504, 500), 7);
        assert_eq!(Scorer::score_calculation(495, 500), 7);
        assert_eq!(Scorer::score_calculation(510, 500), 5);
        assert_eq!(Scorer::score_calculation(490, 500), 5);
        assert_eq!(Scorer::score_calculation(520, 500), 0);
        assert_eq!(Scorer::score_calculation(480, 500), 0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(Scorer::score_calculation(505, 500), 7);
        assert_eq!(Scorer::score_calculation(506, 500), 5);
        assert_eq!(Scorer::score_calculation(511, 500), 0);
    }
}
