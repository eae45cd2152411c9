//! Equipped weapon state and the dulling rule.
//!
//! A freshly equipped weapon can strike any monster. After each weapon
//! kill it "dulls" to the value of the monster it just defeated and can
//! then only strike monsters strictly weaker than that. Equipping a new
//! weapon resets the threshold.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};

/// The currently equipped weapon.
///
/// Owned exclusively by the game state; all mutation flows through the
/// state machine's single entry point per action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponState {
    /// The weapon card's printed value.
    pub value: u8,
    /// Value of the last monster defeated with this weapon.
    /// `None` means the weapon is fresh and can strike anything.
    pub dull_threshold: Option<u8>,
}

impl WeaponState {
    /// Equip a weapon card, replacing any current weapon.
    ///
    /// The threshold starts unset. The caller is responsible for only
    /// passing weapon cards; the game state machine enforces this.
    #[must_use]
    pub fn equip(card: Card) -> Self {
        debug_assert_eq!(card.kind(), CardKind::Weapon);
        Self {
            value: card.value,
            dull_threshold: None,
        }
    }

    /// Can this weapon strike a monster of the given value?
    ///
    /// Strict less-than: a monster equal to the threshold is out of reach,
    /// the weapon has dulled exactly there.
    #[must_use]
    pub fn can_defeat(&self, monster_value: u8) -> bool {
        match self.dull_threshold {
            None => true,
            Some(threshold) => monster_value < threshold,
        }
    }

    /// Record a successful weapon kill, dulling the weapon to the
    /// defeated monster's value.
    pub fn record_kill(&mut self, monster_value: u8) {
        self.dull_threshold = Some(monster_value);
    }
}
