//! Strictly Arena - CLI
//!
//! Runs matches between computer opponents.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use strictly_arena::{Arena, ArenaConfig};
use strictly_nrow::GameConfig;
use strictly_nrow::rules::line_count;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_nrow=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_match(args),
        Command::Lines { size, win } => print_lines(size, win),
    }
}

/// Merges the config file with command-line overrides.
#[instrument(skip(args))]
fn build_config(args: &PlayArgs) -> Result<ArenaConfig> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::from_file(path)?,
        None => ArenaConfig::default(),
    };

    if args.size.is_some() || args.win.is_some() {
        let size = args.size.unwrap_or(*config.game().board_size());
        let win = args.win.unwrap_or(*config.game().win_length());
        config = config.with_game(GameConfig::new(size, win));
    }
    if let Some(rounds) = args.rounds {
        config = config.with_rounds(rounds);
    }
    if let Some(x) = args.x {
        config = config.with_x(x);
    }
    if let Some(o) = args.o {
        config = config.with_o(o);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.parallel {
        config = config.with_parallel_search(true);
    }

    config.validate()?;
    Ok(config)
}

/// Run a match and print the tally
fn run_match(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    info!(?config, "Starting match");

    let mut arena = Arena::new(config)?;
    let report = arena.run()?;

    if args.show_boards {
        for (round, board) in arena.final_boards().iter().enumerate() {
            println!("Round {}:\n{}\n", round + 1, board);
        }
    }
    println!("{}", report);
    Ok(())
}

/// Print the candidate line count for a board
fn print_lines(size: usize, win: usize) -> Result<()> {
    GameConfig::new(size, win).validate()?;
    println!("{}", line_count(size, win));
    Ok(())
}
