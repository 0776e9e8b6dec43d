//! Random number generator verification command.
//!
//! The `rng` command verifies the properties of the ChaCha20 random number
//! generator used by the simulation engine. It generates sample random
//! values and displays them for inspection.
//!
//! ## Purpose
//!
//! - Verifying RNG determinism (same seed produces same sequence)
//! - Debugging random number generation issues

use crate::error::CliError;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command - verify random number generator properties.
///
/// Generates and displays a sample of random numbers using the ChaCha20 RNG
/// with the specified seed (or a random seed if not provided).
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample: {:?}", vals)?;
    Ok(())
}
