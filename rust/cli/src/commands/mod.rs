//! Command handler modules for the pokerc CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters for testability
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod eval;
pub mod rng;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
