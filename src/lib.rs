//! # scoundrel-engine
//!
//! Rules engine for Scoundrel, a single-player card-based dungeon crawl:
//! a deterministic state machine tracking a shuffled 44-card dungeon
//! deck, a four-card room, player health, an equipped weapon with a
//! dulling constraint, and room-by-room progression until victory or
//! defeat.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, input handling, or file I/O. The
//!    surrounding program reads [`Snapshot`]s and issues actions; the
//!    save/load layer round-trips [`SaveState`] records.
//!
//! 2. **Caller-owned state**: a [`GameState`] is an explicit value, not a
//!    process-wide singleton. Any number of games can run side by side.
//!
//! 3. **Deterministic**: the only randomness is the setup shuffle, driven
//!    by an injectable [`GameRng`]. A fixed seed replays the exact game.
//!
//! 4. **Atomic actions**: every call either succeeds with a state
//!    transition or fails with an [`ActionError`] and an unchanged state.
//!
//! ## Modules
//!
//! - `cards`: the card model and the 44-card dungeon deck
//! - `rng`: deterministic, injectable shuffle RNG
//! - `combat`: pure damage math and the weapon-use check
//! - `weapon`: equipped weapon state and the dulling rule
//! - `room`: the four-card room and the three-play rule
//! - `game`: the state machine, actions, errors, snapshots, saves
//!
//! ## Example
//!
//! ```
//! use scoundrel_engine::{Action, GameState, Outcome};
//!
//! let mut game = GameState::with_seed(42);
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.room.len(), 4);
//!
//! // Play the first room card with one of its legal actions.
//! let view = &snapshot.room[0];
//! let outcome = game.play_card(view.index, view.legal_actions[0]).unwrap();
//! assert_eq!(outcome.card, view.card);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

pub mod cards;
pub mod combat;
pub mod game;
pub mod rng;
pub mod room;
pub mod weapon;

// Re-export commonly used types
pub use crate::cards::{Card, CardKind, Deck, Suit};
pub use crate::combat::{can_use_weapon, resolve_damage};
pub use crate::game::{
    Action, ActionError, CardEffect, GameState, InvalidActionReason, Outcome, PlayOutcome,
    RoomCardView, SaveState, Snapshot, WeaponView, STARTING_HEALTH,
};
pub use crate::rng::GameRng;
pub use crate::room::{Room, RoomPhase, PLAYS_PER_ROOM, ROOM_SIZE};
pub use crate::weapon::WeaponState;
