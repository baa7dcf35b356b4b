use once_cell::sync::Lazy;
use rand::Rng;

/// Consonant pool for letters rounds (21 letters, drawn uniformly).
pub const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

/// Vowel pool for letters rounds.
pub const VOWELS: &str = "AEIOU";

/// Maximum letter tiles per letters round.
pub const MAX_LETTERS: usize = 9;

/// Maximum number tiles per numbers round.
pub const MAX_NUMBERS: usize = 6;

/// Small-number pool: each of 1..=10 appears twice.
pub static SMALL_NUMBERS: Lazy<Vec<i64>> =
    Lazy::new(|| (1..=10).flat_map(|n| [n, n]).collect());

/// Large-number pool. Draws never deplete the pool, so duplicate large
/// numbers can appear within one round.
pub const LARGE_NUMBERS: [i64; 4] = [25, 50, 75, 100];

pub fn draw_consonant(rng: &mut impl Rng) -> char {
    draw_letter(CONSONANTS, rng)
}

pub fn draw_vowel(rng: &mut impl Rng) -> char {
    draw_letter(VOWELS, rng)
}

fn draw_letter(pool: &str, rng: &mut impl Rng) -> char {
    let bytes = pool.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

pub fn draw_small_number(rng: &mut impl Rng) -> i64 {
    SMALL_NUMBERS[rng.random_range(0..SMALL_NUMBERS.len())]
}

pub fn draw_large_number(rng: &mut impl Rng) -> i64 {
    LARGE_NUMBERS[rng.random_range(0..LARGE_NUMBERS.len())]
}

/// Target for a numbers round, uniform in 100..=999.
pub fn draw_target(rng: &mut impl Rng) -> i64 {
    rng.random_range(100..1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_number_pool_shape() {
        assert_eq!(SMALL_NUMBERS.len(), 20);
        for n in 1..=10 {
            assert_eq!(SMALL_NUMBERS.iter().filter(|&&v| v == n).count(), 2);
        }
    }

    #[test]
    fn test_draws_come_from_pools() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!(CONSONANTS.contains(draw_consonant(&mut rng)));
            assert!(VOWELS.contains(draw_vowel(&mut rng)));
            assert!((1..=10).contains(&draw_small_number(&mut rng)));
            assert!(LARGE_NUMBERS.contains(&draw_large_number(&mut rng)));
        }
    }

    #[test]
    fn test_target_range() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let target = draw_target(&mut rng);
            assert!((100..=999).contains(&target));
        }
    }

    #[test]
    fn test_pools_are_disjoint() {
        for vowel in VOWELS.chars() {
            assert!(!CONSONANTS.contains(vowel));
        }
        assert_eq!(CONSONANTS.len(), 21);
        assert_eq!(VOWELS.len(), 5);
    }
}
