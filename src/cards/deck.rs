//! The dungeon deck - an ordered draw pile.
//!
//! The deck is conceptually a stack: draws remove from the top, cards
//! returned by running go to the bottom. It is built once at game start
//! from the fixed 44-card set and never replenished except by "run".
//!
//! Drawing fewer cards than requested is not an error: near the end of a
//! game the deck simply runs dry and rooms shrink below four cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, MAX_CARD_VALUE, MIN_CARD_VALUE};
use crate::rng::GameRng;

/// Number of cards in the full dungeon deck.
pub const DUNGEON_DECK_SIZE: usize = 44;

/// An ordered draw pile. Index 0 is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the fixed 44-card dungeon set, unshuffled.
    ///
    /// All 13 clubs, all 13 spades, diamonds 2-10, hearts 2-10.
    /// Construction is deterministic; call [`Deck::shuffle`] before play.
    #[must_use]
    pub fn dungeon() -> Self {
        let mut cards = Vec::with_capacity(DUNGEON_DECK_SIZE);

        for suit in [Suit::Clubs, Suit::Spades] {
            for value in MIN_CARD_VALUE..=MAX_CARD_VALUE {
                cards.push(Card::new(suit, value));
            }
        }
        for suit in [Suit::Diamonds, Suit::Hearts] {
            for value in MIN_CARD_VALUE..=10 {
                cards.push(Card::new(suit, value));
            }
        }

        debug_assert_eq!(cards.len(), DUNGEON_DECK_SIZE);
        Self { cards }
    }

    /// Rebuild a deck from an explicit ordering (save restore).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the deck in place with an injectable RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw up to `n` cards from the top.
    ///
    /// Returns fewer than `n` cards when the deck is short, and an empty
    /// vec when it is exhausted.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Append cards to the bottom, preserving their given order.
    pub fn return_to_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck exhausted?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Count of monster cards still in the deck.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_monster()).count()
    }

    /// The cards in draw order (top first).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
