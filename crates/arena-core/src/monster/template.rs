//! Monster templates (species entries that spawn fresh instances)

use serde::{Deserialize, Serialize};

use super::{Monster, MonsterStats};
use crate::combat::{CombatantId, SpecialAbilities, SpecialType};
use crate::rng::GameRng;

/// A monster species: stat block plus special abilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub race: String,
    pub stats: MonsterStats,
    #[serde(default)]
    pub specials: SpecialAbilities,
}

impl MonsterTemplate {
    pub fn new(race: impl Into<String>, stats: MonsterStats) -> Self {
        Self {
            race: race.into(),
            stats,
            specials: SpecialAbilities::new(),
        }
    }

    pub fn with_special(mut self, kind: SpecialType, magnitude: Option<i32>) -> Self {
        self.specials.add(kind, magnitude);
        self
    }

    /// Difficulty used when matching templates to fighters
    pub fn equivalent_hit_dice(&self) -> u32 {
        self.stats
            .equivalent_hit_dice
            .unwrap_or(self.stats.hit_dice.count())
    }

    /// Create a new instance with freshly rolled hit points
    pub fn spawn(&self, id: CombatantId, rng: &mut GameRng) -> Monster {
        let mut monster = Monster::new(id, self.race.clone(), self.stats.clone(), rng);
        for (kind, magnitude) in self.specials.iter() {
            monster.specials_mut().add(kind, magnitude);
        }
        monster
    }
}
