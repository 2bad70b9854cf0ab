// Closure Drills - Core Library
// Three independent stateful components: PIN-gated account, curried accumulator,
// number-guessing game. Used by the demo binary and tests.

pub mod account;
pub mod accumulator;
pub mod guessing;
pub mod settings;

// Re-export commonly used types
pub use account::{
    Account, AccountError, AccountResult, AccountSnapshot, EntryKind, LedgerEntry,
    SharedAccount, into_message,
};
pub use accumulator::CurriedAdd;
pub use guessing::{GameState, GuessOutcome, GuessingGame};
pub use settings::Settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Open an account guarded by `pin` holding `amount`
pub fn create_account<P>(pin: P, amount: f64) -> Account<P> {
    Account::with_balance(pin, amount)
}

pub fn curried_add() -> CurriedAdd {
    CurriedAdd::new()
}

/// Start a game with a random target in [0, 100)
pub fn guessing_game() -> GuessingGame {
    GuessingGame::new()
}
