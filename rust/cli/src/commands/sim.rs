//! Simulation command handler: the win-probability estimate.
//!
//! Parses the hero hand and board tokens, resolves the trial count and seed
//! against configuration, runs the Monte Carlo engine, and prints the
//! estimate as a percentage. With `--output` the completed run is also
//! appended to a JSONL history file.

use std::io::Write;

use pokerc_engine::engine::Simulation;
use pokerc_engine::logger::{RunLogger, RunRecord};

use crate::config;
use crate::error::CliError;
use crate::ui;
use crate::validation;

/// Handle the sim command: estimate the hero's win probability.
///
/// # Arguments
///
/// * `players` - Players at the table, hero included (2-8)
/// * `hand` - Hero hole cards, one argument of two tokens (e.g. "BSA RHA")
/// * `board` - Known community card tokens (0, 3, 4, or 5)
/// * `trials` - Trial count override (config / 100000 default when `None`)
/// * `seed` - RNG seed override (config / process entropy when `None`)
/// * `output` - Optional JSONL file to append the run record to
/// * `out` - Output stream for the estimate
/// * `err` - Output stream for error messages
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    players: usize,
    hand: &str,
    board: &[String],
    trials: Option<u64>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    let trials = trials.unwrap_or(cfg.trials);
    if trials == 0 {
        ui::write_error(err, "trials must be >= 1")?;
        return Err(CliError::InvalidInput("trials must be >= 1".to_string()));
    }

    let hero = match validation::parse_hand(hand) {
        Ok(h) => h,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::InvalidInput(e));
        }
    };
    let community = match validation::parse_board(board) {
        Ok(b) => b,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::InvalidInput(e));
        }
    };

    let seed = seed.or(cfg.seed);
    let mut sim = Simulation::new(players, hero, &community, seed)?;
    let estimate = sim.run(trials)?;

    writeln!(
        out,
        "Winning probability: {:.2}%",
        estimate.probability() * 100.0
    )?;

    if let Some(path) = output {
        let mut logger = RunLogger::create(&path)?;
        let record = RunRecord {
            run_id: logger.next_id(),
            seed: Some(sim.seed()),
            players,
            hero: hero.to_vec(),
            community,
            trials,
            wins: estimate.wins,
            equity: estimate.probability(),
            ts: None,
            meta: None,
        };
        logger.write(&record)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_tokens() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn test_sim_command_basic_execution() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_sim_command(
            2,
            "BSA RHA",
            &no_tokens(),
            Some(2_000),
            Some(42),
            None,
            &mut out,
            &mut err,
        );
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Winning probability: "));
        assert!(output.trim_end().ends_with('%'));
    }

    #[test]
    fn test_sim_command_is_deterministic_with_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        let mut err = Vec::new();

        handle_sim_command(
            3,
            "BSA RHA",
            &no_tokens(),
            Some(3_000),
            Some(7),
            None,
            &mut out1,
            &mut err,
        )
        .unwrap();
        handle_sim_command(
            3,
            "BSA RHA",
            &no_tokens(),
            Some(3_000),
            Some(7),
            None,
            &mut out2,
            &mut err,
        )
        .unwrap();

        assert_eq!(out1, out2, "same seed should produce same output");
    }

    #[test]
    fn test_sim_command_zero_trials() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_sim_command(
            2,
            "BSA RHA",
            &no_tokens(),
            Some(0),
            Some(42),
            None,
            &mut out,
            &mut err,
        );
        assert!(result.is_err());

        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("trials must be >= 1"));
    }

    #[test]
    fn test_sim_command_rejects_malformed_hand() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_sim_command(
            2,
            "BSA",
            &no_tokens(),
            Some(100),
            Some(42),
            None,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_sim_command_rejects_duplicate_cards() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let board: Vec<String> = ["BSA", "RC5", "BD9"].iter().map(|s| s.to_string()).collect();
        let result = handle_sim_command(
            2,
            "BSA RHA",
            &board,
            Some(100),
            Some(42),
            None,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::Engine(_))));
    }

    #[test]
    fn test_sim_command_rejects_bad_player_count() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_sim_command(
            9,
            "BSA RHA",
            &no_tokens(),
            Some(100),
            Some(42),
            None,
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
