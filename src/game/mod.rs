//! The game state machine and its external contracts.
//!
//! ## Key Types
//!
//! - `GameState`: the aggregate root; one per game, owned by the caller
//! - `Action` / `PlayOutcome`: one player decision in, structured facts out
//! - `ActionError`: the closed set of recoverable rejections
//! - `Snapshot`: read-only view consumed by the UI layer
//! - `SaveState`: persisted record consumed by the save/load layer

pub mod action;
pub mod error;
pub mod save;
pub mod snapshot;
pub mod state;

pub use action::{Action, CardEffect, PlayOutcome};
pub use error::{ActionError, InvalidActionReason};
pub use save::SaveState;
pub use snapshot::{RoomCardView, Snapshot, WeaponView};
pub use state::{GameState, Outcome, STARTING_HEALTH};
