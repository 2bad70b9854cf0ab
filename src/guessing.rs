// 🎯 Guessing game - one hidden target, one session
//
// States: Active -> Won. Won is terminal.
// Every call counts as a guess, including calls made after the win.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Targets are drawn from [0, DEFAULT_UPPER_BOUND)
pub const DEFAULT_UPPER_BOUND: u32 = 100;

pub const GAME_OVER_MESSAGE: &str = "The game is over, you already won!";

// ============================================================================
// OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    TooHigh { guess: i64 },
    TooLow { guess: i64 },
    Won { guess: i64, guesses: u32 },
    AlreadyWon,
}

impl GuessOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, GuessOutcome::Won { .. })
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::TooHigh { guess } => write!(f, "{} is too high!", guess),
            GuessOutcome::TooLow { guess } => write!(f, "{} is too low!", guess),
            GuessOutcome::Won { guess, guesses } => {
                write!(f, "You win! You found {} in {} guesses.", guess, guesses)
            }
            GuessOutcome::AlreadyWon => f.write_str(GAME_OVER_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Won,
}

// ============================================================================
// GAME
// ============================================================================

#[derive(Clone)]
pub struct GuessingGame {
    target: u32,
    won: bool,
    guess_count: u32,
}

impl GuessingGame {
    /// New game with a random target in [0, 100)
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// New game drawing its target from `rng` (seed it for reproducible games)
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::from_rng_bounded(rng, DEFAULT_UPPER_BOUND)
    }

    /// Random target in [0, upper_bound). A bound of 0 is treated as 1.
    pub fn with_upper_bound(upper_bound: u32) -> Self {
        Self::from_rng_bounded(&mut rand::thread_rng(), upper_bound)
    }

    pub fn from_rng_bounded<R: Rng>(rng: &mut R, upper_bound: u32) -> Self {
        Self::with_target(rng.gen_range(0..upper_bound.max(1)))
    }

    /// Game with a fixed target
    pub fn with_target(target: u32) -> Self {
        GuessingGame {
            target,
            won: false,
            guess_count: 0,
        }
    }

    pub fn guess(&mut self, guess: i64) -> GuessOutcome {
        self.guess_count = self.guess_count.saturating_add(1);

        if self.won {
            debug!(guess, guesses = self.guess_count, "guess after game over");
            return GuessOutcome::AlreadyWon;
        }

        let target = i64::from(self.target);
        if guess == target {
            self.won = true;
            info!(guess, guesses = self.guess_count, "target found");
            GuessOutcome::Won {
                guess,
                guesses: self.guess_count,
            }
        } else if guess > target {
            debug!(guess, "too high");
            GuessOutcome::TooHigh { guess }
        } else {
            debug!(guess, "too low");
            GuessOutcome::TooLow { guess }
        }
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn state(&self) -> GameState {
        if self.won {
            GameState::Won
        } else {
            GameState::Active
        }
    }
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self::new()
    }
}

// Keep the target out of debug output.
impl fmt::Debug for GuessingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuessingGame")
            .field("won", &self.won)
            .field("guess_count", &self.guess_count)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Binary search over [0, 100) until the game reports a win
    fn play_to_win(game: &mut GuessingGame) -> i64 {
        let (mut low, mut high) = (0i64, 99i64);
        loop {
            let mid = (low + high) / 2;
            match game.guess(mid) {
                GuessOutcome::Won { guess, .. } => return guess,
                GuessOutcome::TooHigh { .. } => high = mid - 1,
                GuessOutcome::TooLow { .. } => low = mid + 1,
                GuessOutcome::AlreadyWon => panic!("game already over"),
            }
        }
    }

    #[test]
    fn test_high_and_low_messages() {
        let mut game = GuessingGame::with_target(42);

        assert_eq!(game.guess(50).message(), "50 is too high!");
        assert_eq!(game.guess(10).message(), "10 is too low!");
        assert_eq!(game.guess(-3).message(), "-3 is too low!");
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn test_win_message_counts_guesses() {
        let mut game = GuessingGame::with_target(42);
        game.guess(50);
        game.guess(10);

        let outcome = game.guess(42);
        assert_eq!(outcome, GuessOutcome::Won { guess: 42, guesses: 3 });
        assert_eq!(outcome.message(), "You win! You found 42 in 3 guesses.");
        assert!(game.is_won());
    }

    #[test]
    fn test_first_guess_win() {
        let mut game = GuessingGame::with_target(0);
        assert_eq!(game.guess(0).message(), "You win! You found 0 in 1 guesses.");
    }

    #[test]
    fn test_won_is_terminal() {
        let mut game = GuessingGame::with_target(7);
        assert!(game.guess(7).is_win());

        for g in [7, 0, 99, 7] {
            let outcome = game.guess(g);
            assert_eq!(outcome, GuessOutcome::AlreadyWon);
            assert_eq!(outcome.message(), "The game is over, you already won!");
            assert_eq!(game.state(), GameState::Won);
        }
    }

    #[test]
    fn test_win_fires_exactly_once() {
        let mut game = GuessingGame::with_target(13);
        let wins = [13, 13, 13].iter().filter(|&&g| game.guess(g).is_win()).count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_guess_count_increments_after_win() {
        let mut game = GuessingGame::with_target(5);
        game.guess(1);
        game.guess(5);
        assert_eq!(game.guess_count(), 2);

        game.guess(5);
        game.guess(6);
        assert_eq!(game.guess_count(), 4);
    }

    #[test]
    fn test_guess_count_monotonic() {
        let mut game = GuessingGame::with_target(60);
        let mut last = game.guess_count();
        for g in [10, 90, 60, 60, 1] {
            game.guess(g);
            assert!(game.guess_count() > last);
            last = game.guess_count();
        }
    }

    #[test]
    fn test_random_targets_in_range() {
        for _ in 0..50 {
            let mut game = GuessingGame::new();
            let found = play_to_win(&mut game);
            assert!((0..100).contains(&found));
            assert!(game.guess_count() <= 7);
        }
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let mut a = GuessingGame::from_rng(&mut StdRng::seed_from_u64(99));
        let mut b = GuessingGame::from_rng(&mut StdRng::seed_from_u64(99));
        assert_eq!(play_to_win(&mut a), play_to_win(&mut b));
    }

    #[test]
    fn test_upper_bound() {
        let mut game = GuessingGame::with_upper_bound(1);
        assert!(game.guess(0).is_win());

        let mut degenerate = GuessingGame::with_upper_bound(0);
        assert!(degenerate.guess(0).is_win());
    }

    #[test]
    fn test_debug_hides_target() {
        let game = GuessingGame::with_target(77);
        assert!(!format!("{:?}", game).contains("77"));
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_string(&GuessOutcome::Won { guess: 3, guesses: 2 }).unwrap();
        assert_eq!(json, r#"{"Won":{"guess":3,"guesses":2}}"#);
    }
}
