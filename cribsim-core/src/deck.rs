use crate::Card;

/// Number of cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// The fixed universe of 52 distinct cards, in index order.
/// Immutable after construction; dealing never mutates the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Create the standard 52-card deck with cards in index order
    pub fn standard() -> Self {
        let cards = std::array::from_fn(|i| {
            Card::from_index(i as u8).expect("deck index in range")
        });
        Deck { cards }
    }

    /// Get all cards in the deck
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the number of cards in the deck
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A standard deck is never empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
