//! Special abilities
//!
//! A combatant carries at most one entry per [`SpecialType`], each with an
//! optional integer magnitude (a poison save penalty, a regeneration rate and
//! so on).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Closed set of special ability tags
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpecialType {
    Npc,
    Poison,
    Paralysis,
    Petrification,
    BloodDrain,
    EnergyDrain,
    Constriction,
    Corrosion,
    Immolation,
    Rotting,
    Swallowing,
    SilverToHit,
    MagicToHit,
    ChopImmunity,
    DamageReduction,
    Multiheads,
    Berserking,
    HitBonus,
    Invisibility,
    Detection,
    Grabbing,
    SporeCloud,
    RockHurling,
    TailSpikes,
    Charm,
    Fear,
    SaveBonus,
    DodgeGiants,
    Regeneration,
    StrengthDrain,
    Absorption,
    Whirlwind,
    WallOfFire,
    ConeOfCold,
    AcidSpitting,
    Confusion,
    Displacement,
    Blinking,
    Phasing,
    CharmTouch,
    Dragon,
    FireBreath,
    ColdBreath,
    VoltBreath,
    AcidBreath,
    PoisonBreath,
    PetrifyingBreath,
    PetrifyingGaze,
    SummonVermin,
    SummonTrees,
    MindBlast,
    BrainConsumption,
    SappingStrands,
    Slowing,
    FireImmunity,
    ColdImmunity,
    AcidImmunity,
    VoltImmunity,
    SteamBreath,
    Stench,
    ResistStench,
    Webs,
    WebMove,
    Sleep,
    Hold,
    Blindness,
    Polymorphism,
    Undead,
    Golem,
    Death,
    Spells,
    ManyEyeFunctions,
    MagicResistance,
    MagicImmunity,
    UndeadImmunity,
    Fearlessness,
    ProtectionFromEvil,
}

impl SpecialType {
    /// Look up a tag by name, ignoring case and treating spaces as underscores
    ///
    /// `"Silver To Hit"`, `"silver_to_hit"` and `"SILVER_TO_HIT"` all match.
    pub fn find_by_name(name: &str) -> Option<Self> {
        let normalized = name.trim().replace([' ', '-'], "_");
        normalized.parse().ok()
    }
}

/// Set of special abilities keyed by type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAbilities {
    entries: HashMap<SpecialType, Option<i32>>,
}

impl SpecialAbilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an ability; returns the previous magnitude if present
    pub fn add(&mut self, kind: SpecialType, magnitude: Option<i32>) -> Option<Option<i32>> {
        self.entries.insert(kind, magnitude)
    }

    /// Remove an ability (no-op when absent)
    pub fn remove(&mut self, kind: SpecialType) -> Option<Option<i32>> {
        self.entries.remove(&kind)
    }

    pub fn has(&self, kind: SpecialType) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Magnitude of an ability, if it is present and carries one
    pub fn magnitude(&self, kind: SpecialType) -> Option<i32> {
        self.entries.get(&kind).copied().flatten()
    }

    /// Magnitude or 0 when absent or payload-less
    pub fn value(&self, kind: SpecialType) -> i32 {
        self.magnitude(kind).unwrap_or(0)
    }

    /// Entries in declaration order of [`SpecialType`]
    pub fn iter(&self) -> impl Iterator<Item = (SpecialType, Option<i32>)> + '_ {
        SpecialType::iter().filter_map(|kind| self.entries.get(&kind).map(|&m| (kind, m)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(SpecialType, Option<i32>)> for SpecialAbilities {
    fn from_iter<I: IntoIterator<Item = (SpecialType, Option<i32>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
