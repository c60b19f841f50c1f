//! Command-line interface for strictly_arena.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_nrow::ai::Difficulty;

/// Strictly Arena - computer-vs-computer N-in-a-row matches
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Pit N-in-a-row opponents against each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match
    Play(PlayArgs),

    /// Print how many candidate lines a board has
    Lines {
        /// Cells per side
        #[arg(long, default_value = "3")]
        size: usize,

        /// Marks in a row needed to win
        #[arg(long, default_value = "3")]
        win: usize,
    },
}

/// Options for `play`; each overrides the config file.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Path to a TOML match config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cells per side
    #[arg(long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    pub win: Option<usize>,

    /// Strategy for X (easy, medium, hard, adaptive)
    #[arg(long)]
    pub x: Option<Difficulty>,

    /// Strategy for O (easy, medium, hard, adaptive)
    #[arg(long)]
    pub o: Option<Difficulty>,

    /// Rounds to play
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Seed for the random strategies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search Hard's root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print the final board of every round
    #[arg(long)]
    pub show_boards: bool,
}
