//! Command-line definitions for the pokerc binary.
//!
//! Argument parsing is declarative via clap derive; all semantic validation
//! (card tokens, counts, duplicates) lives in [`crate::validation`] and the
//! engine so it can be tested without a terminal.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pokerc",
    version,
    about = "Texas Hold'em win-probability estimator"
)]
pub struct PokercCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the hero's probability of winning by Monte Carlo simulation
    Sim {
        /// Number of players at the table, hero included (2-8)
        players: usize,
        /// Hero hole cards as one argument of two tokens, e.g. "BSA RHA"
        hand: String,
        /// Known community cards: 0, 3, 4, or 5 tokens
        board: Vec<String>,
        /// Number of trials to run (default from config; 100000 baseline)
        #[arg(long)]
        trials: Option<u64>,
        /// RNG seed for reproducible estimates
        #[arg(long)]
        seed: Option<u64>,
        /// Append a JSONL run record to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Rank a hand of 5 to 7 cards and print its category
    Eval {
        /// Cards as one argument, e.g. "BSA BSK BSQ BSJ BS10"
        cards: String,
    },
    /// Show resolved configuration values and their sources
    Cfg,
    /// Verify RNG determinism by printing a seeded sample
    Rng {
        /// Seed for the sample (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
