//! Combat resolution - pure damage math.
//!
//! Kept separate from the state machine so the dulling arithmetic can be
//! tested in isolation. Nothing here mutates state; the game state machine
//! applies the results.

use crate::weapon::WeaponState;

/// Damage taken from fighting a monster.
///
/// Barehanded the monster deals its full value. With a weapon, damage is
/// the monster's value minus the weapon's, floored at zero.
#[must_use]
pub fn resolve_damage(monster_value: u8, weapon_value: Option<u8>) -> u8 {
    match weapon_value {
        None => monster_value,
        Some(weapon) => monster_value.saturating_sub(weapon),
    }
}

/// Whether the equipped weapon (if any) may be used against a monster of
/// the given value. Delegates the dulling rule to [`WeaponState`].
#[must_use]
pub fn can_use_weapon(weapon: Option<&WeaponState>, monster_value: u8) -> bool {
    weapon.is_some_and(|w| w.can_defeat(monster_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    #[test]
    fn test_barehanded_full_damage() {
        assert_eq!(resolve_damage(8, None), 8);
        assert_eq!(resolve_damage(14, None), 14);
    }

    #[test]
    fn test_weapon_reduces_damage() {
        assert_eq!(resolve_damage(10, Some(5)), 5);
        assert_eq!(resolve_damage(14, Some(2)), 12);
    }

    #[test]
    fn test_damage_never_negative() {
        assert_eq!(resolve_damage(3, Some(9)), 0);
        assert_eq!(resolve_damage(5, Some(5)), 0);
    }

    #[test]
    fn test_can_use_weapon_without_weapon() {
        assert!(!can_use_weapon(None, 5));
    }

    #[test]
    fn test_can_use_weapon_respects_dulling() {
        let mut weapon = WeaponState::equip(Card::new(Suit::Diamonds, 7));
        assert!(can_use_weapon(Some(&weapon), 14));

        weapon.record_kill(10);
        assert!(can_use_weapon(Some(&weapon), 9));
        assert!(!can_use_weapon(Some(&weapon), 10));
    }
}
