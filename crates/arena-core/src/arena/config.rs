//! Simulation configuration

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ConfigError;
use crate::object::{Armor, ArmorType};
use crate::player::AlignmentDistribution;

/// Body armor issued to recruits
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum BaseArmor {
    None,
    Leather,
    Chain,
    #[default]
    Plate,
}

impl BaseArmor {
    /// Numeric code: 0 none, 1 leather, 2 chain, 3 plate
    pub fn from_code(code: i64) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(BaseArmor::None),
            1 => Ok(BaseArmor::Leather),
            2 => Ok(BaseArmor::Chain),
            3 => Ok(BaseArmor::Plate),
            _ => Err(ConfigError::UnknownArmorCode(code)),
        }
    }

    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// A mundane suit of this armor, if any
    pub fn armor(&self) -> Option<Armor> {
        let kind = match self {
            BaseArmor::None => return None,
            BaseArmor::Leather => ArmorType::Leather,
            BaseArmor::Chain => ArmorType::Chain,
            BaseArmor::Plate => ArmorType::Plate,
        };
        Some(Armor::make(kind))
    }
}

/// Who the population fights
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum FightMode {
    /// Pair members against each other
    #[default]
    ManVsMan,
    /// Each member fights a freshly generated monster
    ManVsMonster,
}

/// Arena parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub num_years: u32,
    pub fights_per_year: u32,
    /// Population is topped up to this size every cycle
    pub population_size: u32,
    pub start_level: u32,
    /// Scales the encounter budget in man-vs-monster mode
    pub party_size: u32,
    pub base_armor: BaseArmor,
    pub mode: FightMode,
    /// Add monster treasure to XP awards (man-vs-monster only)
    pub use_monster_treasure: bool,
    pub alignment: AlignmentDistribution,
    /// `None` draws a seed from entropy
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            num_years: 50,
            fights_per_year: 12,
            population_size: 100,
            start_level: 1,
            party_size: 1,
            base_armor: BaseArmor::Plate,
            mode: FightMode::ManVsMan,
            use_monster_treasure: false,
            alignment: AlignmentDistribution::Normal,
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Reject counts that would make the run meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("num_years", self.num_years),
            ("fights_per_year", self.fights_per_year),
            ("population_size", self.population_size),
            ("start_level", self.start_level),
            ("party_size", self.party_size),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(ConfigError::ZeroCount { field, value });
            }
        }
        Ok(())
    }

    /// Treasure counts toward XP only when fighting monsters
    pub fn awards_treasure(&self) -> bool {
        self.use_monster_treasure && self.mode == FightMode::ManVsMonster
    }
}

bitflags! {
    /// Which sections of the report to print
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReportOptions: u8 {
        /// s: final population statistics
        const STATS = 0x01;
        /// d: per-fighter details
        const DETAILS = 0x02;
        /// k: per-fighter kill tallies
        const KILLS = 0x04;
        /// t: total monster kills
        const TOTAL_KILLS = 0x08;
        /// x: XP awarded
        const XP_AWARDS = 0x10;
        /// y: year-end status
        const YEAR_END = 0x20;
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions::STATS
    }
}

impl ReportOptions {
    /// Parse letter codes such as "sdy"; an empty string selects nothing
    pub fn parse(codes: &str) -> Result<Self, ConfigError> {
        let mut options = ReportOptions::empty();
        for c in codes.chars() {
            options |= match c {
                's' => ReportOptions::STATS,
                'd' => ReportOptions::DETAILS,
                'k' => ReportOptions::KILLS,
                't' => ReportOptions::TOTAL_KILLS,
                'x' => ReportOptions::XP_AWARDS,
                'y' => ReportOptions::YEAR_END,
                other => return Err(ConfigError::UnknownReportCode(other)),
            };
        }
        Ok(options)
    }
}
