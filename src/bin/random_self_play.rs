//! Plays one game of random clicks for both sides and prints the result.
//!
//! Run with:
//! `cargo run --release --bin random_self_play`
//! `cargo run --release --bin random_self_play -- --seed 42 --plies 300 --verbose`

use tabletop_chess::config::GameConfig;
use tabletop_chess::errors::GameError;
use tabletop_chess::utils::self_play::{play_random_game, SelfPlayConfig};

fn main() -> Result<(), GameError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let mut config = SelfPlayConfig::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => config.seed = Some(parse_flag(arg, iter.next())?),
            "--plies" => config.max_plies = parse_flag(arg, iter.next())?,
            "--verbose" | "-v" => {}
            other => return Err(GameError::MalformedCommand(other.to_owned())),
        }
    }

    let report = play_random_game(&GameConfig::default(), config);
    if verbose {
        for line in &report.log {
            println!("{line}");
        }
    }
    println!("{}", report.summary());
    Ok(())
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, GameError> {
    let value = value.ok_or_else(|| GameError::MalformedCommand(format!("{flag} needs a value")))?;
    value
        .parse::<T>()
        .map_err(|_| GameError::InvalidOptionValue(flag.to_owned(), value.clone()))
}
