//! One-on-one melee resolution
//!
//! Blows alternate, the first combatant striking first. After every blow the
//! struck side is checked and the duel ends the moment it drops, so both
//! sides can never fall together. There is no initiative and no to-hit roll.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Combatant;
use crate::rng::GameRng;

/// Result of a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelOutcome {
    FirstWins,
    SecondWins,
    /// Neither side could ever deal damage
    Stalemate,
}

/// Fight until one side drops
///
/// Both sides record an engagement. Awards are left to the caller.
pub fn duel(
    first: &mut dyn Combatant,
    second: &mut dyn Combatant,
    rng: &mut GameRng,
) -> DuelOutcome {
    first.record_engagement();
    second.record_engagement();

    match (first.is_alive(), second.is_alive()) {
        (true, true) => {}
        (true, false) => return DuelOutcome::FirstWins,
        (false, true) => return DuelOutcome::SecondWins,
        (false, false) => return DuelOutcome::Stalemate,
    }

    if first.max_damage() <= 0 && second.max_damage() <= 0 {
        debug!(
            first = first.name(),
            second = second.name(),
            "stalemate, neither side can deal damage"
        );
        return DuelOutcome::Stalemate;
    }

    let mut blows = 0u32;
    let outcome = loop {
        let damage = first.roll_damage(rng);
        blows += 1;
        let standing = second.take_damage(damage);
        trace!(attacker = first.name(), damage, hp = second.hit_points(), "blow");
        if !standing {
            break DuelOutcome::FirstWins;
        }

        let damage = second.roll_damage(rng);
        blows += 1;
        let standing = first.take_damage(damage);
        trace!(attacker = second.name(), damage, hp = first.hit_points(), "blow");
        if !standing {
            break DuelOutcome::SecondWins;
        }
    };

    debug!(
        first = first.name(),
        second = second.name(),
        ?outcome,
        blows,
        "duel resolved"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Attack, CombatantId};
    use crate::dice::Dice;
    use crate::monster::{Monster, MonsterStats};

    fn monster(id: u32, hit_dice: Dice, damage: Dice, rng: &mut GameRng) -> Monster {
        let stats = MonsterStats {
            hit_dice,
            attack: Attack::new(1, damage),
            ..MonsterStats::default()
        };
        Monster::new(CombatantId(id), "Orc", stats, rng)
    }

    #[test]
    fn test_huge_weapon_wins_duel() {
        use crate::combat::HasEquipment;
        use crate::object::Weapon;
        use crate::player::{Character, CharacterClass};

        let mut rng = GameRng::new(21);
        let mut hero =
            Character::new(CombatantId(1), "Hero", CharacterClass::Fighter, 1, &mut rng);
        let huge = Weapon::new("Huge", Dice::parse("1d2147483647").unwrap(), 1, 5);
        hero.set_weapon(Some(huge));
        let mut ogre = monster(2, Dice::new(4, 8), Dice::new(1, 10), &mut rng);
        assert_eq!(hero.max_damage(), i32::MAX);
        assert_eq!(duel(&mut hero, &mut ogre, &mut rng), DuelOutcome::FirstWins);
        assert!(ogre.is_dead());
    }

    #[test]
    fn test_one_side_always_drops() {
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            let mut a = monster(1, Dice::new(2, 6), Dice::new(1, 6), &mut rng);
            let mut b = monster(2, Dice::new(2, 6), Dice::new(1, 6), &mut rng);
            match duel(&mut a, &mut b, &mut rng) {
                DuelOutcome::FirstWins => {
                    assert!(a.is_alive());
                    assert!(b.is_dead());
                }
                DuelOutcome::SecondWins => {
                    assert!(a.is_dead());
                    assert!(b.is_alive());
                }
                DuelOutcome::Stalemate => panic!("damaging duel ended in stalemate"),
            }
            assert_eq!(a.times_engaged(), 1);
            assert_eq!(b.times_engaged(), 1);
        }
    }

    #[test]
    fn test_first_striker_wins_a_one_blow_fight() {
        let mut rng = GameRng::new(6);
        // 1 HP each, every blow kills
        let mut a = monster(1, Dice::new(1, 1), Dice::new(1, 1).plus(5), &mut rng);
        let mut b = monster(2, Dice::new(1, 1), Dice::new(1, 1).plus(5), &mut rng);
        assert_eq!(duel(&mut a, &mut b, &mut rng), DuelOutcome::FirstWins);
        assert_eq!(a.hit_points(), 1);
    }

    #[test]
    fn test_zero_damage_is_stalemate() {
        let mut rng = GameRng::new(7);
        let zero = Dice::new(1, 1).plus(-1);
        let mut a = monster(1, Dice::new(1, 8), zero, &mut rng);
        let mut b = monster(2, Dice::new(1, 8), zero, &mut rng);
        let (hp_a, hp_b) = (a.hit_points(), b.hit_points());
        assert_eq!(duel(&mut a, &mut b, &mut rng), DuelOutcome::Stalemate);
        assert_eq!(a.hit_points(), hp_a);
        assert_eq!(b.hit_points(), hp_b);
    }

    #[test]
    fn test_harmless_side_loses() {
        let mut rng = GameRng::new(8);
        let zero = Dice::new(1, 1).plus(-1);
        let mut a = monster(1, Dice::new(4, 8), zero, &mut rng);
        let mut b = monster(2, Dice::new(1, 4), Dice::new(1, 4), &mut rng);
        assert_eq!(duel(&mut a, &mut b, &mut rng), DuelOutcome::SecondWins);
        assert_eq!(b.hit_points(), b.max_hit_points());
    }
}
