//! # pokerc CLI Library
//!
//! Command-line interface for the pokerc Monte Carlo equity engine. The
//! binary estimates a Texas Hold'em player's probability of winning a hand
//! against 1 to 7 opponents, from fixed hole cards and any known community
//! cards.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerc", "sim", "2", "BSA RHA", "--trials", "1000", "--seed", "42"];
//! let code = pokerc_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Estimate the hero's win probability by Monte Carlo simulation
//! - `eval`: Rank a 5-7 card hand and print its category
//! - `cfg`: Display current configuration settings with sources
//! - `rng`: Verify RNG determinism

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod ui;
pub mod validation;

use cli::{Commands, PokercCli};

use commands::{
    handle_cfg_command, handle_eval_command, handle_rng_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokerc", "rng", "--seed", "42"];
/// let code = pokerc_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["sim", "eval", "cfg", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PokercCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "pokerc - Hold'em win-probability estimator").is_err()
                        || writeln!(err, "Usage: pokerc <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: pokerc --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Sim {
                players,
                hand,
                board,
                trials,
                seed,
                output,
            } => match handle_sim_command(players, &hand, &board, trials, seed, output, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Eval { cards } => match handle_eval_command(&cards, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec![
                "pokerc", "sim", "2", "BSA RHA", "--trials", "500", "--seed", "1",
            ],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Winning probability:"));
    }

    #[test]
    fn test_eval_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["pokerc", "eval", "BS5 RH5 BD5 RC2 BS2"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("FullHouse"));
    }

    #[test]
    fn test_cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["pokerc", "cfg"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_rng_command_dispatch_with_seed() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["pokerc", "rng", "--seed", "42"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("RNG sample"));
    }

    #[test]
    fn test_unknown_command_exits_with_error_and_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["pokerc", "bogus"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);

        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("Usage: pokerc"));
        assert!(error_output.contains("sim"));
    }

    #[test]
    fn test_help_prints_to_stdout_and_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["pokerc", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(!out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_sim_error_exits_with_error_code() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["pokerc", "sim", "9", "BSA RHA", "--trials", "100"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);

        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("Error:"));
    }
}
