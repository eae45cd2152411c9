//! The current room - up to four face-up cards and the three-play rule.
//!
//! A room is dealt with four cards (fewer once the deck runs short). The
//! player works through it one card at a time; after exactly three of the
//! original four have been played the room is resolved, the last card is
//! carried over, and the room replenishes from the deck.
//!
//! ## Phases
//!
//! - `AwaitingAction`: no card played yet; running is still possible
//! - `InProgress`: one or two cards played; running is off the table
//! - `Resolved`: three cards played; replenishment is due
//!
//! The room only validates structure (index in range, play count). Card
//! effects and run legality across rooms belong to the game state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Deck};
use crate::game::error::{ActionError, InvalidActionReason};

/// Cards dealt to a full room.
pub const ROOM_SIZE: usize = 4;

/// Plays that resolve a room.
pub const PLAYS_PER_ROOM: u8 = 3;

/// Where a room stands in its three-play lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomPhase {
    /// No card played yet.
    AwaitingAction,
    /// One or two cards played.
    InProgress,
    /// Three cards played; awaiting replenishment.
    Resolved,
}

/// The active set of face-up cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    cards: SmallVec<[Card; ROOM_SIZE]>,
    cards_played: u8,
}

impl Room {
    /// Deal a fresh room of up to four cards from the deck.
    #[must_use]
    pub fn deal(deck: &mut Deck) -> Self {
        Self {
            cards: deck.draw(ROOM_SIZE).into(),
            cards_played: 0,
        }
    }

    /// Rebuild a room from an explicit card list and play count
    /// (save restore).
    #[must_use]
    pub fn from_parts(cards: impl IntoIterator<Item = Card>, cards_played: u8) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            cards_played,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoomPhase {
        match self.cards_played {
            0 => RoomPhase::AwaitingAction,
            n if n >= PLAYS_PER_ROOM => RoomPhase::Resolved,
            _ => RoomPhase::InProgress,
        }
    }

    /// True once three cards of the original four were played.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cards_played >= PLAYS_PER_ROOM
    }

    /// True while no card has been played from this room.
    #[must_use]
    pub fn awaiting_action(&self) -> bool {
        self.cards_played == 0
    }

    /// The card at `index`, if present.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// The remaining cards in room order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards still in the room.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the room out of cards?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards played from the current room so far.
    #[must_use]
    pub fn cards_played(&self) -> u8 {
        self.cards_played
    }

    /// Remove and return the card at `index`, counting it as played.
    ///
    /// Rejects a room that is already resolved and an index with no card;
    /// both leave the room untouched.
    pub fn take_card(&mut self, index: usize) -> Result<Card, ActionError> {
        if self.is_resolved() {
            return Err(InvalidActionReason::RoomResolved.into());
        }
        if index >= self.cards.len() {
            return Err(InvalidActionReason::NoSuchCard { index }.into());
        }

        let card = self.cards.remove(index);
        self.cards_played += 1;
        Ok(card)
    }

    /// Take every remaining card in order, clearing the room (run).
    ///
    /// Legality of running is the game state machine's call; this only
    /// hands the cards over.
    pub fn take_all(&mut self) -> SmallVec<[Card; ROOM_SIZE]> {
        self.cards_played = 0;
        std::mem::take(&mut self.cards)
    }

    /// Draw from the deck until the room holds four cards or the deck is
    /// exhausted, and start the next room's play count.
    ///
    /// A short room is not an error; the game simply continues with fewer
    /// cards until the deck runs out.
    pub fn replenish(&mut self, deck: &mut Deck) {
        let needed = ROOM_SIZE.saturating_sub(self.cards.len());
        self.cards.extend(deck.draw(needed));
        self.cards_played = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn fixed_deck() -> Deck {
        Deck::from_cards(vec![
            Card::new(Suit::Clubs, 2),
            Card::new(Suit::Spades, 3),
            Card::new(Suit::Diamonds, 4),
            Card::new(Suit::Hearts, 5),
            Card::new(Suit::Clubs, 6),
            Card::new(Suit::Spades, 7),
        ])
    }

    #[test]
    fn test_deal_takes_four_from_top() {
        let mut deck = fixed_deck();
        let room = Room::deal(&mut deck);

        assert_eq!(room.len(), 4);
        assert_eq!(room.card(0), Some(Card::new(Suit::Clubs, 2)));
        assert_eq!(deck.len(), 2);
        assert_eq!(room.phase(), RoomPhase::AwaitingAction);
    }

    #[test]
    fn test_three_plays_resolve_the_room() {
        let mut deck = fixed_deck();
        let mut room = Room::deal(&mut deck);

        room.take_card(0).unwrap();
        assert_eq!(room.phase(), RoomPhase::InProgress);
        room.take_card(0).unwrap();
        assert_eq!(room.phase(), RoomPhase::InProgress);
        room.take_card(0).unwrap();
        assert_eq!(room.phase(), RoomPhase::Resolved);
        assert_eq!(room.len(), 1);
    }

    #[test]
    fn test_fourth_play_rejected() {
        let mut deck = fixed_deck();
        let mut room = Room::deal(&mut deck);
        for _ in 0..3 {
            room.take_card(0).unwrap();
        }

        let before = room.clone();
        let err = room.take_card(0).unwrap_err();
        assert_eq!(err, ActionError::InvalidAction(InvalidActionReason::RoomResolved));
        assert_eq!(room, before);
    }

    #[test]
    fn test_missing_index_rejected() {
        let mut deck = fixed_deck();
        let mut room = Room::deal(&mut deck);

        let before = room.clone();
        let err = room.take_card(4).unwrap_err();
        assert_eq!(
            err,
            ActionError::InvalidAction(InvalidActionReason::NoSuchCard { index: 4 })
        );
        assert_eq!(room, before);
    }

    #[test]
    fn test_replenish_keeps_carried_card() {
        let mut deck = fixed_deck();
        let mut room = Room::deal(&mut deck);
        for _ in 0..3 {
            room.take_card(0).unwrap();
        }
        let carried = room.card(0).unwrap();

        room.replenish(&mut deck);
        assert_eq!(room.len(), 3); // carried + the 2 left in the fixture deck
        assert_eq!(room.card(0), Some(carried));
        assert!(deck.is_empty());
        assert_eq!(room.phase(), RoomPhase::AwaitingAction);
    }

    #[test]
    fn test_replenish_on_empty_deck_leaves_short_room() {
        let mut deck = Deck::from_cards(vec![]);
        let mut room = Room::from_parts([Card::new(Suit::Clubs, 9)], PLAYS_PER_ROOM);

        room.replenish(&mut deck);
        assert_eq!(room.len(), 1);
        assert_eq!(room.cards_played(), 0);
    }

    #[test]
    fn test_take_all_clears_room_in_order() {
        let mut deck = fixed_deck();
        let mut room = Room::deal(&mut deck);
        let expected: Vec<Card> = room.cards().to_vec();

        let taken = room.take_all();
        assert_eq!(taken.to_vec(), expected);
        assert!(room.is_empty());
        assert!(room.awaiting_action());
    }
}
