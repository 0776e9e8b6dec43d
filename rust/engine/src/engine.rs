use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::SimulationError;
use crate::hand::hand_value;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const BOARD_SIZE: usize = 5;
pub const HOLE_CARDS: usize = 2;

/// Outcome of a completed simulation run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Estimate {
    pub wins: u64,
    pub trials: u64,
}

impl Estimate {
    /// Empirical win probability in [0, 1].
    pub fn probability(&self) -> f64 {
        self.wins as f64 / self.trials as f64
    }
}

/// Monte Carlo estimator for the hero's probability of winning a hand.
///
/// The hero's 2 hole cards and the known community cards are fixed for the
/// lifetime of the simulation; each trial completes the board and deals
/// fresh opponent hands from a fresh deck. The generator is seeded once per
/// simulation, never per trial, so trial outcomes are independent draws from
/// a single reproducible stream.
#[derive(Debug, Clone)]
pub struct Simulation {
    players: usize,
    hero: [Card; HOLE_CARDS],
    community: Vec<Card>,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Simulation {
    /// Validates inputs and prepares a simulation.
    ///
    /// `players` counts the hero plus opponents and must lie in [2, 8].
    /// `community` must hold 0, 3, 4, or 5 cards. Duplicate cards across the
    /// hero hand and the community are rejected here, before any trial runs.
    /// When `seed` is `None` a fresh one is drawn from process entropy; the
    /// seed actually used is available via [`Simulation::seed`].
    pub fn new(
        players: usize,
        hero: [Card; HOLE_CARDS],
        community: &[Card],
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(SimulationError::InvalidPlayerCount { count: players });
        }
        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(SimulationError::InvalidCommunityCount {
                count: community.len(),
            });
        }
        // surfaces duplicates now instead of on the first trial
        Deck::without([&hero[..], community])?;

        let seed = seed.unwrap_or_else(rand::random);
        Ok(Self {
            players,
            hero,
            community: community.to_vec(),
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn hero(&self) -> &[Card; HOLE_CARDS] {
        &self.hero
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The seed driving this simulation's generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs `trials` independent trials and tallies hero wins.
    ///
    /// A trial is won only when the hero's category strictly exceeds every
    /// opponent's; an opponent matching the hero's category takes the trial.
    pub fn run(&mut self, trials: u64) -> Result<Estimate, SimulationError> {
        if trials == 0 {
            return Err(SimulationError::InvalidTrialCount);
        }
        let mut wins = 0u64;
        for _ in 0..trials {
            if self.run_trial()? {
                wins += 1;
            }
        }
        Ok(Estimate { wins, trials })
    }

    /// One complete deal: finish the board, then pit the hero against each
    /// opponent in turn, short-circuiting on the first opponent that ties or
    /// beats the hero.
    fn run_trial(&mut self) -> Result<bool, SimulationError> {
        let mut deck = Deck::without([&self.hero[..], &self.community[..]])?;

        let mut board = self.community.clone();
        while board.len() < BOARD_SIZE {
            board.push(deck.deal(&mut self.rng)?);
        }

        let mut cards: Vec<Card> = Vec::with_capacity(HOLE_CARDS + BOARD_SIZE);
        cards.extend_from_slice(&self.hero);
        cards.extend_from_slice(&board);
        let hero_value = hand_value(&cards);

        for _ in 0..self.players - 1 {
            let opponent = [deck.deal(&mut self.rng)?, deck.deal(&mut self.rng)?];
            cards.clear();
            cards.extend_from_slice(&opponent);
            cards.extend_from_slice(&board);
            if hand_value(&cards) >= hero_value {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
