//! Card and deck model for the Scoundrel dungeon.
//!
//! ## Key Types
//!
//! - `Suit`: the four suits; suit alone determines what a card does
//! - `CardKind`: Monster / Weapon / Potion, derived from suit
//! - `Card`: immutable (suit, value) pair, value 2..=14
//! - `Deck`: the ordered draw pile, built once from the fixed 44-card set
//!
//! The dungeon deck is a modified standard deck: all clubs and spades
//! (monsters), diamonds 2-10 (weapons), hearts 2-10 (potions). Red face
//! cards and aces are removed, which is why the deck is 44 cards.

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Suit};
pub use deck::Deck;
