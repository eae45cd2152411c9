//! Read-only snapshots for the UI layer.
//!
//! The UI never touches `GameState` directly: it reads a [`Snapshot`]
//! and issues the next action. The snapshot pre-computes which actions
//! are legal per room card so the UI can highlight or disable choices
//! without re-implementing any rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::combat::can_use_weapon;
use crate::game::action::Action;
use crate::game::state::{GameState, Outcome};
use crate::weapon::WeaponState;

/// One room card with its index and the actions it currently accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCardView {
    /// Index to pass to `play_card`.
    pub index: usize,
    /// The card itself.
    pub card: Card,
    /// Actions this card accepts right now. A drink on a used-up room is
    /// still listed; it is accepted as a deliberate no-op.
    pub legal_actions: Vec<Action>,
}

/// Equipped weapon as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponView {
    /// Printed weapon value.
    pub value: u8,
    /// Dulling threshold, or `None` while the weapon is fresh.
    pub dull_threshold: Option<u8>,
}

impl From<WeaponState> for WeaponView {
    fn from(weapon: WeaponState) -> Self {
        Self {
            value: weapon.value,
            dull_threshold: weapon.dull_threshold,
        }
    }
}

/// Read-only view of the whole game for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current health.
    pub health: i32,
    /// Equipped weapon, if any.
    pub weapon: Option<WeaponView>,
    /// Room cards with per-card legal actions.
    pub room: Vec<RoomCardView>,
    /// Is `run_from_room` legal right now?
    pub can_run: bool,
    /// Has a potion already healed in this room?
    pub potion_used_this_room: bool,
    /// Was the previous room run from?
    pub ran_last_room: bool,
    /// Cards left in the draw pile.
    pub deck_count: usize,
    /// Cards in the discard pile.
    pub discard_count: usize,
    /// Undefeated monsters left.
    pub monsters_remaining: u8,
    /// Terminal classification.
    pub outcome: Outcome,
}

impl Snapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let weapon = state.weapon();
        let room = state
            .room()
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| RoomCardView {
                index,
                card,
                legal_actions: legal_actions_for(card, weapon.as_ref()),
            })
            .collect();

        Self {
            health: state.health(),
            weapon: weapon.map(WeaponView::from),
            room,
            can_run: state.can_run(),
            potion_used_this_room: state.potion_used_this_room(),
            ran_last_room: state.ran_last_room(),
            deck_count: state.deck().len(),
            discard_count: state.discard().len(),
            monsters_remaining: state.monsters_remaining(),
            outcome: state.outcome(),
        }
    }
}

fn legal_actions_for(card: Card, weapon: Option<&WeaponState>) -> Vec<Action> {
    match card.kind() {
        CardKind::Monster => {
            let mut actions = vec![Action::FightBarehanded];
            if can_use_weapon(weapon, card.value) {
                actions.push(Action::FightWithWeapon);
            }
            actions
        }
        CardKind::Weapon => vec![Action::Equip],
        CardKind::Potion => vec![Action::Drink],
    }
}
