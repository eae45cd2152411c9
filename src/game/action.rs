//! Player actions and their structured outcomes.
//!
//! One action is applied per engine call. The action must match the
//! card's kind: monsters are fought, weapons are equipped, potions are
//! drunk. Mismatches are rejected before any state changes.
//!
//! The engine reports what happened as structured facts ([`PlayOutcome`])
//! and leaves all wording to the UI layer.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};

/// What the player does with a room card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Fight a monster without the weapon, taking its full value.
    FightBarehanded,
    /// Fight a monster with the equipped weapon, subject to dulling.
    FightWithWeapon,
    /// Equip a weapon card, replacing any current weapon.
    Equip,
    /// Drink a potion; only the first per room heals.
    Drink,
}

impl Action {
    /// Does this action apply to a card of the given kind?
    #[must_use]
    pub const fn applies_to(self, kind: CardKind) -> bool {
        matches!(
            (self, kind),
            (Action::FightBarehanded | Action::FightWithWeapon, CardKind::Monster)
                | (Action::Equip, CardKind::Weapon)
                | (Action::Drink, CardKind::Potion)
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::FightBarehanded => "fight barehanded",
            Action::FightWithWeapon => "fight with weapon",
            Action::Equip => "equip",
            Action::Drink => "drink",
        };
        f.write_str(name)
    }
}

/// Effect of a single accepted play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Fought a monster barehanded; full damage taken.
    FoughtBarehanded { damage: u8 },
    /// Fought a monster with the weapon; reduced damage, weapon dulled.
    FoughtWithWeapon { damage: u8 },
    /// Equipped a weapon; `replaced` is the discarded weapon's value.
    Equipped { replaced: Option<u8> },
    /// Drank the first potion of the room.
    Healed { amount: u8 },
    /// Drank a second potion this room; discarded with no effect.
    PotionWasted,
}

/// Result of an accepted `play_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The card that was played.
    pub card: Card,
    /// What it did.
    pub effect: CardEffect,
    /// Whether this play resolved the room and dealt the next one.
    pub entered_new_room: bool,
}
