//! Card values - immutable (suit, value) pairs.
//!
//! A card's behavior is a pure function of its suit: clubs and spades are
//! monsters, diamonds are weapons, hearts are potions. The engine matches
//! on `CardKind` at the single point where an action is applied, so the
//! suit-to-behavior mapping lives here and nowhere else.

use serde::{Deserialize, Serialize};

/// Minimum printed card value (deuce).
pub const MIN_CARD_VALUE: u8 = 2;

/// Maximum printed card value (ace).
pub const MAX_CARD_VALUE: u8 = 14;

/// The four suits of the dungeon deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
}

impl Suit {
    /// The symbol used when formatting a card (e.g. `A♣`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

/// What a card does when played, derived from its suit.
///
/// This is a closed set: adding a card kind means extending the dispatch
/// in the game state machine, and the compiler will point at every match
/// that needs a new arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Clubs and spades. Fought barehanded or with the equipped weapon.
    Monster,
    /// Diamonds. Equipped, replacing any current weapon.
    Weapon,
    /// Hearts. Heals once per room.
    Potion,
}

/// An immutable dungeon card.
///
/// `value` is the printed value mapped to 2-14: number cards keep their
/// number, jack = 11, queen = 12, king = 13, ace = 14. Cards never mutate
/// after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Suit; determines `kind`.
    pub suit: Suit,
    /// Printed value, 2..=14.
    pub value: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }

    /// What this card does when played.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self.suit {
            Suit::Clubs | Suit::Spades => CardKind::Monster,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Hearts => CardKind::Potion,
        }
    }

    /// Is this card a monster?
    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.kind(), CardKind::Monster)
    }

    /// The rank label used when formatting (e.g. `A`, `K`, `7`).
    #[must_use]
    pub fn rank_label(self) -> String {
        match self.value {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            v => v.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_suit() {
        assert_eq!(Card::new(Suit::Clubs, 5).kind(), CardKind::Monster);
        assert_eq!(Card::new(Suit::Spades, 14).kind(), CardKind::Monster);
        assert_eq!(Card::new(Suit::Diamonds, 7).kind(), CardKind::Weapon);
        assert_eq!(Card::new(Suit::Hearts, 9).kind(), CardKind::Potion);
    }

    #[test]
    fn test_is_monster() {
        assert!(Card::new(Suit::Clubs, 2).is_monster());
        assert!(Card::new(Suit::Spades, 11).is_monster());
        assert!(!Card::new(Suit::Diamonds, 2).is_monster());
        assert!(!Card::new(Suit::Hearts, 2).is_monster());
    }

    #[test]
    fn test_display_number_cards() {
        assert_eq!(format!("{}", Card::new(Suit::Hearts, 2)), "2♥");
        assert_eq!(format!("{}", Card::new(Suit::Diamonds, 10)), "10♦");
    }

    #[test]
    fn test_display_face_cards() {
        assert_eq!(format!("{}", Card::new(Suit::Clubs, 11)), "J♣");
        assert_eq!(format!("{}", Card::new(Suit::Spades, 12)), "Q♠");
        assert_eq!(format!("{}", Card::new(Suit::Clubs, 13)), "K♣");
        assert_eq!(format!("{}", Card::new(Suit::Spades, 14)), "A♠");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Diamonds, 8);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
