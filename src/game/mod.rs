// Round/scoring engine

pub mod expr;
pub mod scorer;
pub mod state;
pub mod tiles;
pub mod validator;

pub use expr::EvalError;
pub use scorer::Scorer;
pub use state::{Game, GameResult, Outcome, Phase, Player, RoundKind, Submission, Tick};
pub use validator::WordValidator;
