//! Monster instances

use serde::{Deserialize, Serialize};

use crate::combat::{Attack, Combatant, CombatantId, SpecialAbilities, xp_for_difficulty};
use crate::consts::{HIT_DIE_SIDES, MONSTER_ARMOR_CLASS, NORMAL_SPEED};
use crate::dice::Dice;
use crate::player::Alignment;
use crate::rng::GameRng;

const DEFAULT_RACE: &str = "Monster";

/// Stat block a monster is created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterStats {
    /// Lower is better
    pub armor_class: i32,
    /// Movement rate in inches
    pub move_rate: u32,
    pub hit_dice: Dice,
    pub attack: Attack,
    pub alignment: Alignment,
    /// Difficulty rating; defaults to the hit-dice count
    pub equivalent_hit_dice: Option<u32>,
    pub treasure_value: u64,
}

impl Default for MonsterStats {
    fn default() -> Self {
        Self {
            armor_class: MONSTER_ARMOR_CLASS,
            move_rate: NORMAL_SPEED,
            hit_dice: Dice::new(1, HIT_DIE_SIDES),
            attack: Attack::default(),
            alignment: Alignment::Neutral,
            equivalent_hit_dice: None,
            treasure_value: 0,
        }
    }
}

/// A monster instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    id: CombatantId,
    race: String,
    armor_class: i32,
    move_rate: u32,
    hit_dice: Dice,
    attack: Attack,
    alignment: Alignment,
    equivalent_hit_dice: Option<u32>,
    treasure_value: u64,

    hit_points: i32,
    max_hit_points: i32,

    kill_tally: u32,
    /// Fights this cycle
    times_engaged: u32,

    specials: SpecialAbilities,
}

impl Monster {
    /// Create a monster with hit points rolled from its hit dice
    ///
    /// An empty race falls back to "Monster".
    pub fn new(
        id: CombatantId,
        race: impl Into<String>,
        stats: MonsterStats,
        rng: &mut GameRng,
    ) -> Self {
        let mut race = race.into();
        if race.trim().is_empty() {
            race = DEFAULT_RACE.to_string();
        }
        let mut monster = Self {
            id,
            race,
            armor_class: stats.armor_class,
            move_rate: stats.move_rate,
            hit_dice: stats.hit_dice,
            attack: stats.attack,
            alignment: stats.alignment,
            equivalent_hit_dice: stats.equivalent_hit_dice,
            treasure_value: stats.treasure_value,
            hit_points: 0,
            max_hit_points: 0,
            kill_tally: 0,
            times_engaged: 0,
            specials: SpecialAbilities::new(),
        };
        monster.roll_hit_points(rng);
        monster
    }

    pub const fn id(&self) -> CombatantId {
        self.id
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    /// Rename; empty names are ignored
    pub fn set_race(&mut self, race: impl Into<String>) {
        let race = race.into();
        if !race.trim().is_empty() {
            self.race = race;
        }
    }

    pub const fn armor_class(&self) -> i32 {
        self.armor_class
    }

    pub fn set_armor_class(&mut self, ac: i32) {
        self.armor_class = ac;
    }

    pub const fn move_rate(&self) -> u32 {
        self.move_rate
    }

    pub const fn hit_dice(&self) -> Dice {
        self.hit_dice
    }

    /// Replace the hit dice; hit points are not re-rolled
    pub fn set_hit_dice(&mut self, hit_dice: Dice) {
        self.hit_dice = hit_dice;
    }

    pub const fn attack(&self) -> &Attack {
        &self.attack
    }

    pub fn set_attack(&mut self, attack: Attack) {
        self.attack = attack;
    }

    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Level is the number of hit dice
    pub const fn level(&self) -> u32 {
        self.hit_dice.count()
    }

    pub fn equivalent_hit_dice(&self) -> u32 {
        self.equivalent_hit_dice.unwrap_or(self.hit_dice.count())
    }

    pub const fn treasure_value(&self) -> u64 {
        self.treasure_value
    }

    pub fn set_treasure_value(&mut self, value: u64) {
        self.treasure_value = value;
    }

    pub const fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub const fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    pub const fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Roll fresh hit points; current and max both take the result
    pub fn roll_hit_points(&mut self, rng: &mut GameRng) {
        // A zero roll (e.g. 1d8-1) still yields 1 HP so nothing spawns dead
        let hp = self.hit_dice.roll(rng).max(1);
        self.max_hit_points = hp;
        self.hit_points = hp;
    }

    /// Subtract hit points with no floor; returns true while still alive
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if amount > 0 {
            self.hit_points = self.hit_points.saturating_sub(amount);
        }
        self.is_alive()
    }

    /// Restore up to max hit points
    pub fn heal(&mut self, amount: i32) {
        if amount > 0 {
            self.hit_points = self
                .hit_points
                .saturating_add(amount)
                .min(self.max_hit_points);
        }
    }

    pub fn heal_fully(&mut self) {
        self.hit_points = self.max_hit_points;
    }

    pub const fn specials(&self) -> &SpecialAbilities {
        &self.specials
    }

    pub fn specials_mut(&mut self) -> &mut SpecialAbilities {
        &mut self.specials
    }

    pub const fn kill_tally(&self) -> u32 {
        self.kill_tally
    }

    pub fn record_kill(&mut self) {
        self.kill_tally += 1;
    }

    pub const fn times_engaged(&self) -> u32 {
        self.times_engaged
    }

    pub fn record_engagement(&mut self) {
        self.times_engaged += 1;
    }

    pub fn clear_engagements(&mut self) {
        self.times_engaged = 0;
    }
}

impl Combatant for Monster {
    fn base(&self) -> &Monster {
        self
    }

    fn base_mut(&mut self) -> &mut Monster {
        self
    }

    fn level(&self) -> u32 {
        Monster::level(self)
    }

    fn xp_value(&self) -> u64 {
        xp_for_difficulty(self.equivalent_hit_dice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orc(rng: &mut GameRng) -> Monster {
        let stats = MonsterStats {
            armor_class: 6,
            hit_dice: Dice::new(1, 8),
            attack: Attack::new(1, Dice::new(1, 6)),
            alignment: Alignment::Chaotic,
            ..MonsterStats::default()
        };
        Monster::new(CombatantId(1), "Orc", stats, rng)
    }

    #[test]
    fn test_new_rolls_full_hit_points() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            let m = orc(&mut rng);
            assert!((1..=8).contains(&m.max_hit_points()));
            assert_eq!(m.hit_points(), m.max_hit_points());
            assert!(m.is_alive());
        }
    }

    #[test]
    fn test_zero_hit_point_roll_spawns_alive() {
        let stats = MonsterStats {
            hit_dice: Dice::new(1, 1).plus(-1),
            ..MonsterStats::default()
        };
        let mut rng = GameRng::new(6);
        let m = Monster::new(CombatantId(3), "Goblin", stats, &mut rng);
        assert_eq!(m.max_hit_points(), 1);
        assert!(m.is_alive());
    }

    #[test]
    fn test_empty_race_gets_default() {
        let mut rng = GameRng::new(1);
        let m = Monster::new(CombatantId(2), "  ", MonsterStats::default(), &mut rng);
        assert_eq!(m.race(), "Monster");
    }

    #[test]
    fn test_damage_has_no_floor() {
        let mut rng = GameRng::new(3);
        let mut m = orc(&mut rng);
        let max = m.max_hit_points();
        assert!(!m.take_damage(max + 5));
        assert_eq!(m.hit_points(), -5);
        assert!(m.is_dead());

        m.heal_fully();
        assert_eq!(m.hit_points(), max);
    }

    #[test]
    fn test_nonpositive_damage_is_noop() {
        let mut rng = GameRng::new(4);
        let mut m = orc(&mut rng);
        let hp = m.hit_points();
        assert!(m.take_damage(0));
        assert!(m.take_damage(-3));
        assert_eq!(m.hit_points(), hp);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut rng = GameRng::new(5);
        let stats = MonsterStats {
            hit_dice: Dice::new(1, 1).plus(9),
            ..MonsterStats::default()
        };
        let mut m = Monster::new(CombatantId(3), "Ogre", stats, &mut rng);
        m.take_damage(6);
        m.heal(2);
        assert_eq!(m.hit_points(), 6);
        m.heal(100);
        assert_eq!(m.hit_points(), 10);
    }

    #[test]
    fn test_level_and_xp_value() {
        let mut rng = GameRng::new(6);
        let stats = MonsterStats {
            hit_dice: Dice::new(4, 8),
            ..MonsterStats::default()
        };
        let mut m = Monster::new(CombatantId(4), "Gnoll", stats.clone(), &mut rng);
        assert_eq!(Combatant::level(&m), 4);
        assert_eq!(m.xp_value(), 400);

        let with_ehd = MonsterStats {
            equivalent_hit_dice: Some(6),
            ..stats
        };
        m = Monster::new(CombatantId(5), "Gnoll chief", with_ehd, &mut rng);
        assert_eq!(m.equivalent_hit_dice(), 6);
        assert_eq!(m.xp_value(), 600);

        let tiny = MonsterStats {
            hit_dice: Dice::new(0, 4).plus(2),
            ..MonsterStats::default()
        };
        let rat = Monster::new(CombatantId(6), "Rat", tiny, &mut rng);
        assert_eq!(rat.xp_value(), 100);
    }

    #[test]
    fn test_counters() {
        let mut rng = GameRng::new(7);
        let mut m = orc(&mut rng);
        m.record_kill();
        m.record_kill();
        m.record_engagement();
        assert_eq!(m.kill_tally(), 2);
        assert_eq!(m.times_engaged(), 1);
        m.clear_engagements();
        assert_eq!(m.times_engaged(), 0);
        assert_eq!(m.kill_tally(), 2);
    }

    #[test]
    fn test_descriptor() {
        let mut rng = GameRng::new(8);
        let m = orc(&mut rng);
        let hp = m.hit_points();
        assert_eq!(m.descriptor(), format!("Orc (AC 6, HP {hp}/{hp})"));
        assert!(m.as_equipped().is_none());
        assert!(m.as_character().is_none());
    }
}
