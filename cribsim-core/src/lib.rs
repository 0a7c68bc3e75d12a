mod card;
mod deal;
mod deck;
mod hand;
mod play;

pub use card::{Card, Rank, Suit};
pub use deal::{
    deal_hand_from_seed, deal_with, HandDealer, SamplingStrategy, SeedSequence, HAND_SIZE,
};
pub use deck::{Deck, DECK_SIZE};
pub use hand::DealtHand;
pub use play::{play_out, split_and_play, PlayRecord, PlayerHand, Seat};
