use crate::play::PlayerHand;
use crate::Card;
use simrandom::Xoshiro256PlusPlus;

/// An 8-card hand dealt from the deck for one simulated round.
///
/// Semantically unordered; the cards arrive in whatever order the sampling
/// strategy produced them and can be permuted in place before a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtHand {
    cards: Vec<Card>,
}

impl DealtHand {
    /// Create a hand from a vector of cards
    pub fn from_cards(cards: Vec<Card>) -> Self {
        DealtHand { cards }
    }

    /// Get all cards in the hand
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the number of cards in the hand
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if the hand contains a specific card
    pub fn has_card(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Total cribbage counting value of the hand
    pub fn counting_total(&self) -> u32 {
        self.cards.iter().map(|c| c.counting_value() as u32).sum()
    }

    /// Permute the hand in place with a Fisher-Yates shuffle
    pub fn shuffle(&mut self, rng: &mut Xoshiro256PlusPlus) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.next_index((i + 1) as u32) as usize;
            self.cards.swap(i, j);
        }
    }

    /// Split into two player hands: first half and second half.
    /// The standard 8-card deal yields two hands of 4.
    pub fn split_in_half(self) -> (PlayerHand, PlayerHand) {
        let mut cards = self.cards;
        let second = cards.split_off(cards.len() / 2);
        (PlayerHand::from_cards(cards), PlayerHand::from_cards(second))
    }
}
