//! Eval command handler: rank a hand without running a simulation.
//!
//! Takes 5 to 7 card tokens, rejects duplicates, and prints the formatted
//! cards together with the matched category and its ordinal. Gives direct
//! access to the same ranking used inside the simulation loop.

use std::io::Write;

use pokerc_engine::hand::hand_value;

use crate::error::CliError;
use crate::formatters;
use crate::ui;
use crate::validation;

/// Handle the eval command.
///
/// # Arguments
///
/// * `cards` - One argument holding 5 to 7 card tokens
/// * `out` - Output stream for the formatted hand and category
/// * `err` - Output stream for error messages
pub fn handle_eval_command(
    cards: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = match validation::parse_cards(cards, 5, 7) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::InvalidInput(e));
        }
    };

    let category = hand_value(&parsed);
    writeln!(out, "Cards: {}", formatters::format_cards(&parsed))?;
    writeln!(out, "Category: {:?} ({})", category, category.value())?;
    Ok(())
}
