//! The simplified alternating play loop.
//!
//! A dealt hand is shuffled, split into two 4-card player hands, and drained
//! in strict turn order: the seat to play discards the last card of its hand
//! if it has one, and the turn advances to the other seat either way. A seat
//! with an empty hand still consumes a tick as a pass, so the other seat
//! plays out its remaining cards one per two ticks. There is no scoring and
//! no legality checking; the loop models turn alternation only.
//!
//! Termination is bounded: every tick either removes a card or passes over
//! an already-empty hand, and the card total (8) never increases, so the
//! loop finishes within 2x8 ticks.

use crate::{Card, DealtHand};
use simrandom::Xoshiro256PlusPlus;

/// The two seats at the simulated table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    First = 0,
    Second = 1,
}

impl Seat {
    /// Both seats in turn order
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Get the opposing seat
    pub fn other(&self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// One player's ordered cards; play removes from the tail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    cards: Vec<Card>,
}

impl PlayerHand {
    /// Create a player hand from a vector of cards
    pub fn from_cards(cards: Vec<Card>) -> Self {
        PlayerHand { cards }
    }

    /// Get all cards remaining in the hand
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the number of cards remaining
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the last card, if any
    pub fn play_last(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

/// Outcome of one hand's turn loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayRecord {
    /// Turn-loop iterations, including passes over an empty hand
    pub ticks: u32,
    /// Cards actually played
    pub cards_played: u32,
}

/// Drain two player hands in strict alternating turn order.
///
/// Starting with the first seat, each tick plays the last card of the
/// current seat's hand when it is non-empty, then advances the turn
/// unconditionally. Returns once both hands are empty.
pub fn play_out(mut first: PlayerHand, mut second: PlayerHand) -> PlayRecord {
    let mut record = PlayRecord::default();
    let mut to_play = Seat::First;

    while !first.is_empty() || !second.is_empty() {
        let hand = match to_play {
            Seat::First => &mut first,
            Seat::Second => &mut second,
        };

        if let Some(card) = hand.play_last() {
            log::trace!("player {} plays {}", to_play as u8, card);
            record.cards_played += 1;
        }

        // Turn advances even on an empty-hand pass
        record.ticks += 1;
        to_play = to_play.other();
    }

    record
}

/// Shuffle a dealt hand, split it in half, and run the turn loop.
pub fn split_and_play(mut hand: DealtHand, rng: &mut Xoshiro256PlusPlus) -> PlayRecord {
    hand.shuffle(rng);
    let (first, second) = hand.split_in_half();
    play_out(first, second)
}
