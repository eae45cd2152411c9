//! Persisted game record.
//!
//! The save/load layer lives outside the engine; it serializes this
//! record however it likes (the crate ships `bincode` for a compact
//! encoding, and any serde format works). The record mirrors the game
//! state field for field, plus `cards_played_this_room`: without it a
//! three-card room would be ambiguous between "one card played" and
//! "dealt short from an exhausted deck", and run legality would not
//! survive a round-trip.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::state::Outcome;
use crate::weapon::WeaponState;

/// Structured save record. `GameState::restore(state.save())` rebuilds
/// an identical game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    /// Current health.
    pub health: i32,
    /// Equipped weapon with its dulling threshold, or absent.
    pub weapon: Option<WeaponState>,
    /// Remaining room cards in order.
    pub room: Vec<Card>,
    /// Cards played from the current room so far.
    pub cards_played_this_room: u8,
    /// Draw pile in order, top first.
    pub deck: Vec<Card>,
    /// Discard pile in discard order.
    pub discard: Vec<Card>,
    /// Was the previous room run from?
    pub ran_last_room: bool,
    /// Has a potion healed in the current room?
    pub potion_used_this_room: bool,
    /// Undefeated monsters left.
    pub monsters_remaining: u8,
    /// Terminal classification.
    pub outcome: Outcome,
}

impl SaveState {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a bincode record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
