//! Engine error kinds.
//!
//! Every error is local and recoverable: a rejected action leaves the
//! game state exactly as it was, so the caller can re-prompt and retry.
//! There is no fatal path out of the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardKind;
use crate::game::action::Action;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// The action does not fit the current room or card.
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidActionReason),

    /// Running twice in a row, or running after a card was played.
    #[error("running is not allowed right now")]
    IllegalRun,

    /// The game has already ended; no further actions are accepted.
    #[error("the game is over")]
    GameOver,
}

/// Detail behind an [`ActionError::InvalidAction`] rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidActionReason {
    /// No card at the given room index.
    #[error("no card at room index {index}")]
    NoSuchCard { index: usize },

    /// Three cards were already played; the room awaits replenishment.
    #[error("the room is already resolved")]
    RoomResolved,

    /// Action type does not match the card type.
    #[error("{action} cannot be applied to a {kind:?} card")]
    WrongCardKind { action: Action, kind: CardKind },

    /// Fighting with a weapon while none is equipped.
    #[error("no weapon is equipped")]
    NoWeapon,

    /// The equipped weapon has dulled below the monster's value.
    #[error("the weapon has dulled at {threshold} and cannot strike a {monster}")]
    WeaponDulled { threshold: u8, monster: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reason_converts() {
        let err: ActionError = InvalidActionReason::NoWeapon.into();
        assert_eq!(err, ActionError::InvalidAction(InvalidActionReason::NoWeapon));
    }

    #[test]
    fn test_messages() {
        let err = ActionError::InvalidAction(InvalidActionReason::WeaponDulled {
            threshold: 7,
            monster: 9,
        });
        let msg = err.to_string();
        assert!(msg.contains("dulled at 7"));

        assert_eq!(ActionError::GameOver.to_string(), "the game is over");
    }
}
