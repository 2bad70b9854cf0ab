use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::io::{self, BufRead, Write};
use tracing::info;

use closure_drills::{
    create_account, curried_add, into_message, GuessOutcome, GuessingGame, Settings,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("demo");

    let settings = match args.get(2) {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    info!(?settings, mode, "starting closure-drills v{}", closure_drills::VERSION);

    match mode {
        "demo" => run_demo(&settings),
        "play" => run_play(&settings),
        other => {
            eprintln!("❌ Unknown mode: {}", other);
            eprintln!("   Usage: closure-drills [demo|play] [settings.json]");
            std::process::exit(2);
        }
    }
}

fn new_game(settings: &Settings) -> GuessingGame {
    match settings.seed {
        Some(seed) => {
            GuessingGame::from_rng_bounded(&mut StdRng::seed_from_u64(seed), settings.upper_bound)
        }
        None => GuessingGame::with_upper_bound(settings.upper_bound),
    }
}

fn run_demo(settings: &Settings) -> Result<()> {
    let pin = settings.demo_pin;

    println!("💳 Account");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut account = create_account(pin, settings.opening_balance);
    println!("{}", into_message(account.check_balance(&pin)));
    println!("{}", into_message(account.deposit(&pin, 50.0)));
    println!("{}", into_message(account.withdraw(&pin, 20.0)));
    println!("{}", into_message(account.withdraw(&pin, 1_000_000.0)));
    println!("{}", into_message(account.check_balance(&pin.wrapping_add(1))));
    println!("{}", into_message(account.change_pin(&pin, pin.wrapping_add(1))));

    let snapshot = account
        .snapshot(&pin.wrapping_add(1))
        .context("Snapshot after PIN change")?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    println!("\n➕ Curried add");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("1 + 2 + 3 = {}", curried_add().add(1.0).add(2.0).add(3.0).total());

    println!("\n🎯 Guessing game");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let mut game = new_game(settings);
    let (mut low, mut high) = (0i64, i64::from(settings.upper_bound) - 1);
    while !game.is_won() && low <= high {
        let mid = low + (high - low) / 2;
        let outcome = game.guess(mid);
        println!("{}", outcome);
        match outcome {
            GuessOutcome::TooHigh { .. } => high = mid - 1,
            GuessOutcome::TooLow { .. } => low = mid + 1,
            _ => {}
        }
    }
    println!("{}", game.guess(low));

    Ok(())
}

fn run_play(settings: &Settings) -> Result<()> {
    let mut game = new_game(settings);
    println!(
        "🎯 Guess a number between 0 and {} (Ctrl-D to quit)",
        settings.upper_bound - 1
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim();

        let guess: i64 = match input.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("'{}' is not a number, try again.", input);
                continue;
            }
        };

        let outcome = game.guess(guess);
        println!("{}", outcome);
        stdout.flush()?;

        if outcome.is_win() {
            break;
        }
    }

    if !game.is_won() {
        println!("\n👋 Quit after {} guesses", game.guess_count());
    }

    Ok(())
}
