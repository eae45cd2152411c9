//! The game state machine - the aggregate root of a Scoundrel game.
//!
//! One `GameState` is created per game and owned by the caller (a session
//! or UI layer); there is no process-wide game singleton, so multiple
//! games can run side by side. All mutation flows through two entry
//! points, [`GameState::play_card`] and [`GameState::run_from_room`], one
//! call per player decision.
//!
//! ## Atomicity
//!
//! Every entry point validates the whole action before touching any
//! field. A rejected action returns an [`ActionError`] and leaves the
//! state exactly as it was, so callers can re-prompt safely.
//!
//! ## End conditions
//!
//! Re-evaluated after every accepted play: health at or below zero is an
//! immediate defeat, even mid-room; zero monsters remaining is a victory
//! on that same call, even with unplayed cards on the table. Once the
//! outcome is decided the state is read-only and further actions fail
//! with [`ActionError::GameOver`].

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Suit};
use crate::combat::resolve_damage;
use crate::rng::GameRng;
use crate::room::Room;
use crate::weapon::WeaponState;

use super::action::{Action, CardEffect, PlayOutcome};
use super::error::{ActionError, InvalidActionReason};
use super::save::SaveState;
use super::snapshot::Snapshot;

/// Health a scoundrel starts the dungeon with.
pub const STARTING_HEALTH: i32 = 20;

/// Terminal classification of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still being played.
    #[default]
    InProgress,
    /// Every monster has been defeated.
    Victory,
    /// Health reached zero.
    Defeat,
}

/// Complete state of one Scoundrel game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    health: i32,
    weapon: Option<WeaponState>,
    room: Room,
    deck: Deck,
    discard: Vec<Card>,
    ran_last_room: bool,
    potion_used_this_room: bool,
    monsters_remaining: u8,
    outcome: Outcome,
}

impl GameState {
    /// Start a new game with a shuffle drawn from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Start a new game with a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Start a new game with an injected RNG.
    ///
    /// The RNG is consumed once, to shuffle the dungeon; there is no
    /// re-shuffling mid-game.
    #[must_use]
    pub fn with_rng(mut rng: GameRng) -> Self {
        let mut deck = Deck::dungeon();
        let monsters_remaining = deck.monster_count() as u8;
        deck.shuffle(&mut rng);
        let room = Room::deal(&mut deck);

        Self {
            health: STARTING_HEALTH,
            weapon: None,
            room,
            deck,
            discard: Vec::new(),
            ran_last_room: false,
            potion_used_this_room: false,
            monsters_remaining,
            outcome: Outcome::InProgress,
        }
    }

    // === Read-only views ===

    /// Current health. Can be negative once the player is defeated.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// The equipped weapon, if any.
    #[must_use]
    pub fn weapon(&self) -> Option<WeaponState> {
        self.weapon
    }

    /// The current room.
    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Resolved cards, in the order they were discarded.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Did the player run from the previous room?
    #[must_use]
    pub fn ran_last_room(&self) -> bool {
        self.ran_last_room
    }

    /// Has a potion already healed in the current room?
    #[must_use]
    pub fn potion_used_this_room(&self) -> bool {
        self.potion_used_this_room
    }

    /// Undefeated monsters left in the dungeon (deck plus room).
    #[must_use]
    pub fn monsters_remaining(&self) -> u8 {
        self.monsters_remaining
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Is running from the current room legal right now?
    #[must_use]
    pub fn can_run(&self) -> bool {
        self.outcome == Outcome::InProgress
            && !self.ran_last_room
            && self.room.awaiting_action()
    }

    /// Read-only snapshot for the UI layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    // === Actions ===

    /// Play the room card at `index` with the given action.
    ///
    /// Validates the whole action first; on any rejection the state is
    /// unchanged. On success the card's effect is applied, the room is
    /// replenished if this was its third play, and the outcome is
    /// re-evaluated.
    pub fn play_card(&mut self, index: usize, action: Action) -> Result<PlayOutcome, ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if self.room.is_resolved() {
            return Err(InvalidActionReason::RoomResolved.into());
        }
        let card = self
            .room
            .card(index)
            .ok_or(InvalidActionReason::NoSuchCard { index })?;
        if !action.applies_to(card.kind()) {
            return Err(InvalidActionReason::WrongCardKind {
                action,
                kind: card.kind(),
            }
            .into());
        }

        let effect = match action {
            Action::FightBarehanded => CardEffect::FoughtBarehanded {
                damage: resolve_damage(card.value, None),
            },
            Action::FightWithWeapon => {
                let weapon = self.weapon.as_ref().ok_or(InvalidActionReason::NoWeapon)?;
                if let Some(threshold) = weapon.dull_threshold {
                    if card.value >= threshold {
                        return Err(InvalidActionReason::WeaponDulled {
                            threshold,
                            monster: card.value,
                        }
                        .into());
                    }
                }
                CardEffect::FoughtWithWeapon {
                    damage: resolve_damage(card.value, Some(weapon.value)),
                }
            }
            Action::Equip => CardEffect::Equipped {
                replaced: self.weapon.map(|w| w.value),
            },
            Action::Drink => {
                if self.potion_used_this_room {
                    CardEffect::PotionWasted
                } else {
                    CardEffect::Healed { amount: card.value }
                }
            }
        };

        // Everything validated; from here the action cannot fail.
        let card = self.room.take_card(index)?;
        self.apply_effect(card, effect);

        self.outcome = self.evaluate_outcome();
        let mut entered_new_room = false;
        if self.outcome == Outcome::InProgress && self.room.is_resolved() {
            self.ran_last_room = false;
            self.potion_used_this_room = false;
            self.room.replenish(&mut self.deck);
            entered_new_room = true;
        }

        Ok(PlayOutcome {
            card,
            effect,
            entered_new_room,
        })
    }

    /// Run from the current room.
    ///
    /// Legal only when no card has been played from this room and the
    /// previous room was not also run from. The room's cards go to the
    /// bottom of the deck in order and a fresh room is dealt. Health,
    /// weapon and discard are untouched; the potion flag resets because
    /// the next room is a new room.
    pub fn run_from_room(&mut self) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        if self.ran_last_room || !self.room.awaiting_action() {
            return Err(ActionError::IllegalRun);
        }

        let fled = self.room.take_all();
        self.deck.return_to_bottom(fled);
        self.room.replenish(&mut self.deck);
        self.ran_last_room = true;
        self.potion_used_this_room = false;

        Ok(())
    }

    fn apply_effect(&mut self, card: Card, effect: CardEffect) {
        match effect {
            CardEffect::FoughtBarehanded { damage } | CardEffect::FoughtWithWeapon { damage } => {
                self.health -= i32::from(damage);
                if let (CardEffect::FoughtWithWeapon { .. }, Some(weapon)) =
                    (effect, self.weapon.as_mut())
                {
                    weapon.record_kill(card.value);
                }
                self.monsters_remaining = self.monsters_remaining.saturating_sub(1);
                self.discard.push(card);
            }
            CardEffect::Equipped { .. } => {
                // Weapons are always diamonds, so the replaced card is
                // reconstructable from its value alone.
                if let Some(old) = self.weapon.take() {
                    self.discard.push(Card::new(Suit::Diamonds, old.value));
                }
                self.weapon = Some(WeaponState::equip(card));
            }
            CardEffect::Healed { amount } => {
                self.health += i32::from(amount);
                self.potion_used_this_room = true;
                self.discard.push(card);
            }
            CardEffect::PotionWasted => {
                self.discard.push(card);
            }
        }
    }

    fn evaluate_outcome(&self) -> Outcome {
        if self.health <= 0 {
            Outcome::Defeat
        } else if self.monsters_remaining == 0 {
            Outcome::Victory
        } else {
            Outcome::InProgress
        }
    }

    // === Persistence ===

    /// Capture the structured save record for this game.
    #[must_use]
    pub fn save(&self) -> SaveState {
        SaveState {
            health: self.health,
            weapon: self.weapon,
            room: self.room.cards().to_vec(),
            cards_played_this_room: self.room.cards_played(),
            deck: self.deck.cards().to_vec(),
            discard: self.discard.clone(),
            ran_last_room: self.ran_last_room,
            potion_used_this_room: self.potion_used_this_room,
            monsters_remaining: self.monsters_remaining,
            outcome: self.outcome,
        }
    }

    /// Rebuild a game from a save record.
    ///
    /// `restore(save())` reproduces a state equal to the original. The
    /// record comes from the trusted save/load layer; the engine does not
    /// re-validate it.
    #[must_use]
    pub fn restore(save: SaveState) -> Self {
        Self {
            health: save.health,
            weapon: save.weapon,
            room: Room::from_parts(save.room, save.cards_played_this_room),
            deck: Deck::from_cards(save.deck),
            discard: save.discard,
            ran_last_room: save.ran_last_room,
            potion_used_this_room: save.potion_used_this_room,
            monsters_remaining: save.monsters_remaining,
            outcome: save.outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
