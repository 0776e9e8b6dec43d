//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, environment, or configuration file) as formatted JSON.

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "trials": {
            "value": config.trials,
            "source": sources.trials,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_command_outputs_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert!(parsed.get("trials").is_some());
        assert!(parsed.get("seed").is_some());
    }
}
