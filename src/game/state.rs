use rand::Rng;

use crate::dictionary::Dictionary;

use super::expr;
use super::scorer::Scorer;
use super::tiles;
use super::validator::WordValidator;

/// Rounds per game. Odd rounds are letters, even rounds are numbers.
pub const ROUNDS_PER_GAME: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    Letters,
    Numbers,
}

impl RoundKind {
    fn for_round(round: u8) -> Self {
        if round % 2 == 1 {
            RoundKind::Letters
        } else {
            RoundKind::Numbers
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InRound,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

/// Final standings once round 5 has expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub player1_score: i64,
    pub player2_score: i64,
    pub outcome: Outcome,
}

impl GameResult {
    /// The score recorded against the best-score preference.
    pub fn best_score(&self) -> i64 {
        self.player1_score.max(self.player2_score)
    }
}

/// What a one-second tick did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No round is running; nothing to count down.
    Idle,
    /// Seconds remaining in the current round.
    Running { remaining: u32 },
    /// The timer expired and the next round began.
    RoundStarted { round: u8, kind: RoundKind },
    /// The timer expired on the final round.
    GameOver(GameResult),
}

/// Result of submitting a word or calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Valid submission: `points` were credited to `player`.
    Scored { player: Player, points: i64 },
    /// Invalid submission: nothing credited, turn does not pass.
    Rejected,
}

/// The complete round/scoring state for one game.
///
/// All mutation happens through the methods below, driven by an external
/// scheduler calling [`Game::tick`] once per second. The engine itself never
/// touches a clock, the filesystem, or any UI.
#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    round: u8,
    kind: RoundKind,
    letters: Vec<char>,
    numbers: Vec<i64>,
    target: Option<i64>,
    player1_score: i64,
    player2_score: i64,
    two_player: bool,
    active_player: Player,
    round_seconds: u32,
    time_remaining: u32,
}

impl Game {
    pub fn new(two_player: bool, round_seconds: u32) -> Self {
        Self {
            phase: Phase::NotStarted,
            round: 1,
            kind: RoundKind::Letters,
            letters: Vec::new(),
            numbers: Vec::new(),
            target: None,
            player1_score: 0,
            player2_score: 0,
            two_player,
            active_player: Player::One,
            round_seconds,
            time_remaining: round_seconds,
        }
    }

    /// Start (or restart) a game: scores zeroed, round 1, letters.
    pub fn start(&mut self, rng: &mut impl Rng) {
        self.player1_score = 0;
        self.player2_score = 0;
        self.active_player = Player::One;
        self.round = 1;
        self.phase = Phase::InRound;
        self.begin_round(rng);
    }

    fn begin_round(&mut self, rng: &mut impl Rng) {
        self.kind = RoundKind::for_round(self.round);
        self.letters.clear();
        self.numbers.clear();
        self.target = match self.kind {
            RoundKind::Letters => None,
            RoundKind::Numbers => Some(tiles::draw_target(rng)),
        };
        self.time_remaining = self.round_seconds;
    }

    /// Advance the countdown by one second. At zero the round ends: either
    /// the next round begins or, after round 5, the game is over.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Tick {
        if self.phase != Phase::InRound {
            return Tick::Idle;
        }

        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            return Tick::Running {
                remaining: self.time_remaining,
            };
        }

        self.advance_round(rng)
    }

    fn advance_round(&mut self, rng: &mut impl Rng) -> Tick {
        self.round += 1;
        if self.round > ROUNDS_PER_GAME {
            self.phase = Phase::GameOver;
            return Tick::GameOver(self.result());
        }

        self.begin_round(rng);
        Tick::RoundStarted {
            round: self.round,
            kind: self.kind,
        }
    }

    fn result(&self) -> GameResult {
        use std::cmp::Ordering;

        let outcome = match self.player1_score.cmp(&self.player2_score) {
            Ordering::Greater => Outcome::PlayerOneWins,
            Ordering::Less => Outcome::PlayerTwoWins,
            Ordering::Equal => Outcome::Tie,
        };
        GameResult {
            player1_score: self.player1_score,
            player2_score: self.player2_score,
            outcome,
        }
    }

    /// Draw a random consonant tile. `None` outside a letters round or once
    /// nine letters are on the board.
    pub fn draw_consonant(&mut self, rng: &mut impl Rng) -> Option<char> {
        self.push_letter(tiles::draw_consonant(rng))
    }

    /// Draw a random vowel tile.
    pub fn draw_vowel(&mut self, rng: &mut impl Rng) -> Option<char> {
        self.push_letter(tiles::draw_vowel(rng))
    }

    fn push_letter(&mut self, letter: char) -> Option<char> {
        if self.phase != Phase::InRound
            || self.kind != RoundKind::Letters
            || self.letters.len() >= tiles::MAX_LETTERS
        {
            return None;
        }
        self.letters.push(letter);
        Some(letter)
    }

    /// Draw a random small number tile (1..=10). `None` outside a numbers
    /// round or once six numbers are on the board.
    pub fn draw_small_number(&mut self, rng: &mut impl Rng) -> Option<i64> {
        self.push_number(tiles::draw_small_number(rng))
    }

    /// Draw a random large number tile (25, 50, 75 or 100).
    pub fn draw_large_number(&mut self, rng: &mut impl Rng) -> Option<i64> {
        self.push_number(tiles::draw_large_number(rng))
    }

    fn push_number(&mut self, number: i64) -> Option<i64> {
        if self.phase != Phase::InRound
            || self.kind != RoundKind::Numbers
            || self.numbers.len() >= tiles::MAX_NUMBERS
        {
            return None;
        }
        self.numbers.push(number);
        Some(number)
    }

    /// Submit a word during a letters round.
    pub fn submit_word(&mut self, word: &str, dictionary: &Dictionary) -> Submission {
        if self.phase != Phase::InRound || self.kind != RoundKind::Letters {
            return Submission::Rejected;
        }
        if !WordValidator::is_valid_word(word, &self.letters, dictionary) {
            return Submission::Rejected;
        }

        let points = Scorer::score_word(word, self.letters.len());
        self.apply_score(points)
    }

    /// Submit a calculation during a numbers round. The expression must
    /// evaluate cleanly and hit the target exactly.
    pub fn submit_calculation(&mut self, expression: &str) -> Submission {
        if self.phase != Phase::InRound || self.kind != RoundKind::Numbers {
            return Submission::Rejected;
        }
        let Some(target) = self.target else {
            return Submission::Rejected;
        };

        match expr::evaluate(expression) {
            Ok(result) if result == target => {
                let points = Scorer::score_calculation(result, target);
                self.apply_score(points)
            }
            Ok(_) | Err(_) => Submission::Rejected,
        }
    }

    /// Credit points: the active player in two-player mode (then the turn
    /// passes), always player one otherwise.
    fn apply_score(&mut self, points: i64) -> Submission {
        let player = if self.two_player {
            self.active_player
        } else {
            Player::One
        };

        match player {
            Player::One => self.player1_score += points,
            Player::Two => self.player2_score += points,
        }

        if self.two_player {
            self.active_player = match self.active_player {
                Player::One => Player::Two,
                Player::Two => Player::One,
            };
        }

        Submission::Scored { player, points }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn round_kind(&self) -> RoundKind {
        self.kind
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn scores(&self) -> (i64, i64) {
        (self.player1_score, self.player2_score)
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn two_player(&self) -> bool {
        self.two_player
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }
}
