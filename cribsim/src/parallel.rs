//! Parallel hand simulation using stateless independent hands.
//!
//! This module provides a simple supervisor/worker split:
//! - Supervisor derives one u64 seed per hand (trivially fast)
//! - Workers simulate hands from seeds (fully independent, no state sharing)
//!
//! # Determinism
//!
//! Every hand is a pure function of its seed, and totals are combined with
//! commutative addition, so a given master seed produces identical totals
//! regardless of how many threads are used.

use cribsim_core::{deal_with, split_and_play, Deck, SamplingStrategy, SeedSequence};
use rayon::prelude::*;
use simrandom::Xoshiro256PlusPlus;

/// Aggregate outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimTotals {
    /// Hands simulated
    pub hands: u64,
    /// Cards played across all turn loops
    pub cards_played: u64,
    /// Turn-loop ticks across all hands, including passes
    pub ticks: u64,
}

impl SimTotals {
    /// Combine two partial totals
    pub fn merge(self, other: SimTotals) -> SimTotals {
        SimTotals {
            hands: self.hands + other.hands,
            cards_played: self.cards_played + other.cards_played,
            ticks: self.ticks + other.ticks,
        }
    }
}

/// Simulate one hand from its seed: deal, and unless `play` is off,
/// shuffle/split/play. The result depends only on the arguments.
pub fn simulate_hand(seed: u64, deck: &Deck, strategy: SamplingStrategy, play: bool) -> SimTotals {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let hand = deal_with(&mut rng, deck, strategy);

    let mut totals = SimTotals {
        hands: 1,
        ..Default::default()
    };

    if play {
        let record = split_and_play(hand, &mut rng);
        totals.cards_played = record.cards_played as u64;
        totals.ticks = record.ticks as u64;
    }

    totals
}

/// Run the simulation across worker threads.
///
/// `num_threads` of 0 lets rayon auto-detect.
pub fn simulate_parallel(
    seed: u64,
    hands: u64,
    strategy: SamplingStrategy,
    play: bool,
    num_threads: usize,
) -> SimTotals {
    if num_threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if pool already initialized
    }

    let deck = Deck::standard();
    let mut seeds = SeedSequence::new(seed);
    let batch = seeds.next_seeds(hands as usize);

    batch
        .into_par_iter()
        .map(|hand_seed| simulate_hand(hand_seed, &deck, strategy, play))
        .reduce(SimTotals::default, SimTotals::merge)
}
