use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("invalid player count: {count} (2 to 8 players allowed)")]
    InvalidPlayerCount { count: usize },
    #[error("invalid community card count: {count} (must be 0, 3, 4, or 5)")]
    InvalidCommunityCount { count: usize },
    #[error("trial count must be at least 1")]
    InvalidTrialCount,
    #[error("duplicate card in input: {0:?}")]
    DuplicateCard(Card),
    #[error("deck exhausted while dealing")]
    DeckExhausted,
}
