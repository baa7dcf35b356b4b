mod config;
mod dictionary;
mod game;
mod storage;

use std::time::Duration;

use anyhow::Result;
use config::{Config, Difficulty};
use dictionary::Dictionary;
use game::{Game, GameResult, Outcome, Phase, RoundKind, Submission, Tick};
use storage::{HistoryLog, Preferences};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "countdown_game=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Countdown...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path).await {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!("Failed to load dictionary: {}. No word will validate.", e);
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty()
        }
    };

    let mut preferences = Preferences::load(&config.storage.data_dir).await;
    let history = HistoryLog::new(&config.storage.data_dir);

    let mut rng = rand::rng();
    let mut game = Game::new(
        config.game.two_player,
        preferences.difficulty().round_seconds(),
    );
    game.start(&mut rng);

    print_help();
    announce_round(&game);

    let mut lines = BufReader::new(stdin()).lines();
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately; consume it so the countdown
    // starts a full second from now.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match game.tick(&mut rng) {
                    Tick::Idle => {}
                    Tick::Running { remaining } => {
                        if remaining <= 5 || remaining % 10 == 0 {
                            println!("  {remaining}s left");
                        }
                    }
                    Tick::RoundStarted { .. } => {
                        println!("Time's up! The round is over.");
                        announce_round(&game);
                    }
                    Tick::GameOver(result) => {
                        finish_game(&result, &mut preferences, &history).await;
                        game.start(&mut rng);
                        announce_round(&game);
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !handle_command(line.trim(), &mut game, &mut rng, &dictionary,
                                   &mut preferences, &history).await {
                    break;
                }
            }
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}

/// Handle one line of input. Returns false when the player quits.
async fn handle_command(
    line: &str,
    game: &mut Game,
    rng: &mut impl rand::Rng,
    dictionary: &Dictionary,
    preferences: &mut Preferences,
    history: &HistoryLog,
) -> bool {
    match line {
        "" => {}
        "quit" | "exit" => return false,
        "help" => print_help(),
        "new" => {
            *game = Game::new(game.two_player(), preferences.difficulty().round_seconds());
            game.start(rng);
            announce_round(game);
        }
        "c" => match game.draw_consonant(rng) {
            Some(letter) => print_letters(game, letter),
            None => println!("Cannot draw a consonant right now."),
        },
        "v" => match game.draw_vowel(rng) {
            Some(letter) => print_letters(game, letter),
            None => println!("Cannot draw a vowel right now."),
        },
        "s" => match game.draw_small_number(rng) {
            Some(number) => print_numbers(game, number),
            None => println!("Cannot draw a small number right now."),
        },
        "l" => match game.draw_large_number(rng) {
            Some(number) => print_numbers(game, number),
            None => println!("Cannot draw a large number right now."),
        },
        "best" => println!("Best score: {}", preferences.best_score()),
        "history" => match history.read_all().await {
            Ok(Some(text)) => print!("{text}"),
            Ok(None) => println!("No game history available."),
            Err(e) => println!("Failed to load game history: {e}"),
        },
        "clear-history" => match history.clear().await {
            Ok(true) => println!("Game history has been cleared."),
            Ok(false) => println!("No game history to clear."),
            Err(e) => println!("Failed to clear game history: {e}"),
        },
        _ if line.starts_with("difficulty") => {
            set_difficulty(line, preferences).await;
        }
        submission => submit(submission, game, dictionary),
    }
    true
}

fn submit(submission: &str, game: &mut Game, dictionary: &Dictionary) {
    if game.phase() != Phase::InRound {
        println!("No round in progress. Type 'new' to start a game.");
        return;
    }

    let outcome = match game.round_kind() {
        RoundKind::Letters => game.submit_word(submission, dictionary),
        RoundKind::Numbers => game.submit_calculation(submission),
    };

    match outcome {
        Submission::Scored { player, points } => {
            let (p1, p2) = game.scores();
            println!("Valid! Player {} scored {points} points.", player_number(player));
            println!("Scores -- Player 1: {p1}, Player 2: {p2}");
        }
        Submission::Rejected => println!("Invalid. Please try again."),
    }
}

async fn set_difficulty(line: &str, preferences: &mut Preferences) {
    let difficulty = line
        .split_whitespace()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .map(Difficulty::from_index);

    match difficulty {
        Some(difficulty) => {
            match preferences.set_difficulty(difficulty).await {
                Ok(()) => println!(
                    "Difficulty set to {difficulty:?} ({}s rounds). Takes effect next game.",
                    difficulty.round_seconds()
                ),
                Err(e) => println!("Failed to save difficulty: {e}"),
            }
        }
        None => println!("Usage: difficulty <0|1|2> (0 = Easy, 1 = Medium, 2 = Hard)"),
    }
}

/// Report the result, persist best score and history, and announce it all.
async fn finish_game(result: &GameResult, preferences: &mut Preferences, history: &HistoryLog) {
    let winner = match result.outcome {
        Outcome::PlayerOneWins => "Player 1 wins!",
        Outcome::PlayerTwoWins => "Player 2 wins!",
        Outcome::Tie => "It's a tie!",
    };
    println!("Game over. {winner}");
    println!(
        "Player 1 score: {}, Player 2 score: {}",
        result.player1_score, result.player2_score
    );

    match preferences.update_best_score(result.best_score()).await {
        Ok(true) => println!("New best score: {}!", result.best_score()),
        Ok(false) => {}
        Err(e) => println!("Failed to save best score: {e}"),
    }

    match history.append(result).await {
        Ok(()) => println!("Game result has been saved."),
        Err(e) => println!("Failed to save game result: {e}"),
    }
}

fn announce_round(game: &Game) {
    match game.round_kind() {
        RoundKind::Letters => println!(
            "-- Round {} of 5: Letters ({}s). Draw with 'c'/'v', then type a word. --",
            game.round(),
            game.time_remaining()
        ),
        RoundKind::Numbers => println!(
            "-- Round {} of 5: Numbers ({}s). Target: {}. Draw with 's'/'l', then type an expression. --",
            game.round(),
            game.time_remaining(),
            game.target().unwrap_or_default()
        ),
    }
}

fn print_letters(game: &Game, drawn: char) {
    let board: String = game.letters().iter().collect();
    println!("Drew '{drawn}'. Letters: {board}");
}

fn print_numbers(game: &Game, drawn: i64) {
    let board = game
        .numbers()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Drew {drawn}. Numbers: {board}");
}

fn player_number(player: game::Player) -> u8 {
    match player {
        game::Player::One => 1,
        game::Player::Two => 2,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  c / v            draw a consonant / vowel (letters rounds)");
    println!("  s / l            draw a small / large number (numbers rounds)");
    println!("  <word>           submit a word (letters rounds)");
    println!("  <expression>     submit e.g. '100 + 25 * 2' (numbers rounds)");
    println!("  difficulty <n>   0 = Easy, 1 = Medium, 2 = Hard");
    println!("  best / history / clear-history / new / quit");
}
