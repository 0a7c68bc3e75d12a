use crate::play::{split_and_play, PlayRecord};
use crate::{DealtHand, Deck, DECK_SIZE};
use simrandom::Xoshiro256PlusPlus;

/// Number of cards dealt per hand
pub const HAND_SIZE: usize = 8;

/// How an 8-card hand is drawn from the deck.
///
/// Both strategies produce a uniformly random 8-subset; they differ in cost
/// and in the order the cards come out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Single-pass selection sampling over the deck sequence. O(deck size),
    /// keeps the dealt cards in deck order.
    #[default]
    Selection,
    /// Draw indices uniform in [0, 52) and discard duplicates until 8
    /// distinct cards are collected. Simpler, slower in expectation.
    Rejection,
}

/// Deal one hand from the deck using the given generator and strategy.
pub fn deal_with(
    rng: &mut Xoshiro256PlusPlus,
    deck: &Deck,
    strategy: SamplingStrategy,
) -> DealtHand {
    match strategy {
        SamplingStrategy::Selection => deal_selection(rng, deck),
        SamplingStrategy::Rejection => deal_rejection(rng, deck),
    }
}

/// Selection sampling (Knuth's Algorithm S): walk the deck once, keeping
/// card i with probability needed/remaining. Uniform over 8-subsets.
fn deal_selection(rng: &mut Xoshiro256PlusPlus, deck: &Deck) -> DealtHand {
    let mut cards = Vec::with_capacity(HAND_SIZE);
    let mut needed = HAND_SIZE as u32;
    let mut remaining = DECK_SIZE as u32;

    for &card in deck.cards() {
        if rng.next_index(remaining) < needed {
            cards.push(card);
            needed -= 1;
            if needed == 0 {
                break;
            }
        }
        remaining -= 1;
    }

    DealtHand::from_cards(cards)
}

/// Rejection sampling: draw deck indices until 8 distinct cards accumulate.
/// Duplicates cost extra draws but the result stays uniform.
fn deal_rejection(rng: &mut Xoshiro256PlusPlus, deck: &Deck) -> DealtHand {
    let mut seen = [false; DECK_SIZE];
    let mut cards = Vec::with_capacity(HAND_SIZE);

    while cards.len() < HAND_SIZE {
        let index = rng.next_index(DECK_SIZE as u32) as usize;
        if !seen[index] {
            seen[index] = true;
            cards.push(deck.cards()[index]);
        }
    }

    DealtHand::from_cards(cards)
}

/// Deal a hand from a single seed, independent of any other hand.
///
/// The same seed always produces the same hand. This is the parallel-mode
/// path: workers need no shared state beyond their per-hand seed.
pub fn deal_hand_from_seed(seed: u64, strategy: SamplingStrategy) -> DealtHand {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    deal_with(&mut rng, &Deck::standard(), strategy)
}

/// Stateful dealer for the sequential simulation loop.
///
/// Owns the generator for its entire lifetime: seeded once at construction,
/// then reused for every draw, giving one deterministic stream of hands per
/// seed.
pub struct HandDealer {
    deck: Deck,
    rng: Xoshiro256PlusPlus,
    strategy: SamplingStrategy,
    dealt: u64,
}

impl HandDealer {
    /// Create a dealer with the default selection-sampling strategy
    pub fn new(seed: u64) -> Self {
        Self::with_strategy(seed, SamplingStrategy::default())
    }

    /// Create a dealer with an explicit sampling strategy
    pub fn with_strategy(seed: u64, strategy: SamplingStrategy) -> Self {
        HandDealer {
            deck: Deck::standard(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            strategy,
            dealt: 0,
        }
    }

    /// Deal the next hand
    pub fn deal(&mut self) -> DealtHand {
        self.dealt += 1;
        deal_with(&mut self.rng, &self.deck, self.strategy)
    }

    /// Shuffle a dealt hand, split it into two player hands, and run the
    /// turn loop, drawing any randomness from this dealer's generator.
    pub fn split_and_play(&mut self, hand: DealtHand) -> PlayRecord {
        split_and_play(hand, &mut self.rng)
    }

    /// Get the sampling strategy in use
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Get the number of hands dealt so far
    pub fn dealt_count(&self) -> u64 {
        self.dealt
    }
}

/// Derives one u64 seed per hand from a master generator.
///
/// The supervisor uses this to hand out seeds; workers then simulate hands
/// independently. The seed stream is itself deterministic per master seed.
pub struct SeedSequence {
    master: Xoshiro256PlusPlus,
    generated: u64,
}

impl SeedSequence {
    /// Create a new sequence from a master seed
    pub fn new(seed: u64) -> Self {
        SeedSequence {
            master: Xoshiro256PlusPlus::seed_from_u64(seed),
            generated: 0,
        }
    }

    /// Generate the next hand seed
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.generated += 1;
        self.master.next_u64()
    }

    /// Generate a batch of seeds
    pub fn next_seeds(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.next_seed()).collect()
    }

    /// Get the number of seeds generated so far
    pub fn generated_count(&self) -> u64 {
        self.generated
    }
}
