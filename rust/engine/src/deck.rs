use std::collections::HashSet;

use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::SimulationError;

/// The unseen portion of the 52-card universe for one trial.
///
/// A deck is built from the full universe minus every card already assigned
/// to the hero hand or the known community, then consumed by random draws.
/// One deck serves exactly one trial; nothing persists across trials.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52-card universe minus all cards in `excluded`.
    ///
    /// The excluded groups (hero hand, known community) are flattened into a
    /// single exclusion set. Any card appearing twice, within one group or
    /// across groups, is a fatal input error.
    pub fn without<'a, I>(excluded: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = &'a [Card]>,
    {
        let mut seen: HashSet<Card> = HashSet::new();
        for group in excluded {
            for &card in group {
                if !seen.insert(card) {
                    return Err(SimulationError::DuplicateCard(card));
                }
            }
        }
        let cards = full_deck()
            .into_iter()
            .filter(|c| !seen.contains(c))
            .collect();
        Ok(Self { cards })
    }

    /// Removes and returns one uniformly random card (sampling without
    /// replacement). Draw order is irrelevant, so the vacated slot is
    /// back-filled with a swap.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Result<Card, SimulationError> {
        if self.cards.is_empty() {
            return Err(SimulationError::DeckExhausted);
        }
        let i = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(i))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
