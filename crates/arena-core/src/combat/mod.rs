//! Combat system
//!
//! The [`Combatant`] trait is the capability surface shared by monsters and
//! characters. Everything a duel needs is reachable through it; equipment and
//! character-only state are optional capabilities looked up with
//! [`Combatant::as_equipped`] and [`Combatant::as_character`].

mod melee;
mod special;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::XP_PER_HIT_DIE;
use crate::dice::Dice;
use crate::monster::Monster;
use crate::object::{Armor, Weapon};
use crate::player::{Alignment, Character};
use crate::rng::GameRng;

pub use melee::{DuelOutcome, duel};
pub use special::{SpecialAbilities, SpecialType};

/// Unique identifier for a combatant within one simulation run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CombatantId(pub u32);

impl CombatantId {
    pub const NONE: CombatantId = CombatantId(0);

    pub fn next(self) -> Self {
        CombatantId(self.0 + 1)
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Natural attack routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Attacks per round
    pub rate: u32,
    /// Damage per hit
    pub damage: Dice,
    pub to_hit_bonus: i32,
}

impl Attack {
    pub const fn new(rate: u32, damage: Dice) -> Self {
        Self {
            rate,
            damage,
            to_hit_bonus: 0,
        }
    }

    pub fn roll_damage(&self, rng: &mut GameRng) -> i32 {
        self.damage.roll(rng)
    }

    pub fn max_damage(&self) -> i32 {
        self.damage.max_roll()
    }
}

impl Default for Attack {
    /// One 1d6 attack per round
    fn default() -> Self {
        Self::new(1, Dice::new(1, 6))
    }
}

/// XP for defeating something of the given difficulty
pub fn xp_for_difficulty(hit_dice: u32) -> u64 {
    XP_PER_HIT_DIE * u64::from(hit_dice.max(1))
}

/// Anything that can fight in the arena
///
/// Implementors supply their [`Monster`] base; hit points, counters and
/// special abilities all live there.
pub trait Combatant {
    fn base(&self) -> &Monster;
    fn base_mut(&mut self) -> &mut Monster;

    /// Level used for XP and reports
    fn level(&self) -> u32;

    /// Experience awarded to whoever defeats this combatant
    fn xp_value(&self) -> u64;

    fn name(&self) -> &str {
        self.base().race()
    }

    fn armor_class(&self) -> i32 {
        self.base().armor_class()
    }

    fn roll_damage(&self, rng: &mut GameRng) -> i32 {
        self.base().attack().roll_damage(rng)
    }

    /// Highest damage a single blow can deal
    fn max_damage(&self) -> i32 {
        self.base().attack().max_damage()
    }

    fn treasure_value(&self) -> u64 {
        self.base().treasure_value()
    }

    /// Award experience; returns the number of levels gained
    fn gain_experience(&mut self, _xp: u64, _rng: &mut GameRng) -> u32 {
        0
    }

    fn descriptor(&self) -> String {
        format!(
            "{} (AC {}, HP {}/{})",
            self.name(),
            self.armor_class(),
            self.hit_points(),
            self.max_hit_points()
        )
    }

    fn as_equipped(&self) -> Option<&dyn HasEquipment> {
        None
    }

    fn as_equipped_mut(&mut self) -> Option<&mut dyn HasEquipment> {
        None
    }

    fn as_character(&self) -> Option<&Character> {
        None
    }

    fn as_character_mut(&mut self) -> Option<&mut Character> {
        None
    }

    fn id(&self) -> CombatantId {
        self.base().id()
    }

    fn alignment(&self) -> Alignment {
        self.base().alignment()
    }

    fn hit_points(&self) -> i32 {
        self.base().hit_points()
    }

    fn max_hit_points(&self) -> i32 {
        self.base().max_hit_points()
    }

    fn is_alive(&self) -> bool {
        self.hit_points() > 0
    }

    fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    /// Subtract hit points; returns true while the combatant is still standing
    fn take_damage(&mut self, amount: i32) -> bool {
        self.base_mut().take_damage(amount)
    }

    fn heal(&mut self, amount: i32) {
        self.base_mut().heal(amount);
    }

    fn heal_fully(&mut self) {
        self.base_mut().heal_fully();
    }

    fn roll_hit_points(&mut self, rng: &mut GameRng) {
        self.base_mut().roll_hit_points(rng);
    }

    fn specials(&self) -> &SpecialAbilities {
        self.base().specials()
    }

    fn specials_mut(&mut self) -> &mut SpecialAbilities {
        self.base_mut().specials_mut()
    }

    fn kill_tally(&self) -> u32 {
        self.base().kill_tally()
    }

    fn record_kill(&mut self) {
        self.base_mut().record_kill();
    }

    fn times_engaged(&self) -> u32 {
        self.base().times_engaged()
    }

    fn record_engagement(&mut self) {
        self.base_mut().record_engagement();
    }

    fn clear_engagements(&mut self) {
        self.base_mut().clear_engagements();
    }
}

/// Equipment slots (armor, shield, weapon)
///
/// Setters return the previous occupant of the slot.
pub trait HasEquipment {
    fn armor(&self) -> Option<&Armor>;
    fn shield(&self) -> Option<&Armor>;
    fn weapon(&self) -> Option<&Weapon>;

    fn set_armor(&mut self, armor: Option<Armor>) -> Option<Armor>;
    fn set_shield(&mut self, shield: Option<Armor>) -> Option<Armor>;
    fn set_weapon(&mut self, weapon: Option<Weapon>) -> Option<Weapon>;

    /// Wield the best weapon available (a plain sword when empty-handed)
    fn draw_best_weapon(&mut self);

    /// Put the wielded weapon away, returning it
    fn sheathe_weapon(&mut self) -> Option<Weapon>;

    /// Raise every equipped item's magic bonus by one (capped)
    fn boost_magic_items_one_level(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_next() {
        assert_eq!(CombatantId::NONE.next(), CombatantId(1));
        assert_eq!(CombatantId(41).next().to_string(), "#42");
    }

    #[test]
    fn test_attack_damage_bounds() {
        let attack = Attack::new(1, Dice::new(2, 4).plus(1));
        let mut rng = GameRng::new(9);
        for _ in 0..200 {
            let d = attack.roll_damage(&mut rng);
            assert!((3..=9).contains(&d));
        }
        assert_eq!(attack.max_damage(), 9);
    }

    #[test]
    fn test_xp_for_difficulty() {
        assert_eq!(xp_for_difficulty(0), 100);
        assert_eq!(xp_for_difficulty(1), 100);
        assert_eq!(xp_for_difficulty(7), 700);
    }
}
