//! Alignment and alignment distributions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::rng::GameRng;

/// Alignment type (lawful, neutral, chaotic)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Alignment {
    Lawful,
    #[default]
    Neutral,
    Chaotic,
}

impl Alignment {
    /// Single-letter code used in monster tables
    pub const fn code(&self) -> char {
        match self {
            Alignment::Lawful => 'L',
            Alignment::Neutral => 'N',
            Alignment::Chaotic => 'C',
        }
    }

    /// Parse a letter code or full word, case-insensitive
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LAWFUL" => Some(Alignment::Lawful),
            "N" | "NEUTRAL" => Some(Alignment::Neutral),
            "C" | "CHAOTIC" => Some(Alignment::Chaotic),
            _ => None,
        }
    }

    /// Check if alignment is opposite to another
    pub const fn is_opposite(&self, other: &Alignment) -> bool {
        matches!(
            (self, other),
            (Alignment::Lawful, Alignment::Chaotic) | (Alignment::Chaotic, Alignment::Lawful)
        )
    }
}

/// How recruits' alignments are drawn (one d6 per recruit)
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
pub enum AlignmentDistribution {
    /// Lawful 1/6, Neutral 4/6, Chaotic 1/6
    #[default]
    Normal,
    /// One third each
    Uniform,
    /// Lawful 4/6, Neutral 2/6
    Lawful,
    /// Neutral 2/6, Chaotic 4/6
    Chaotic,
}

impl AlignmentDistribution {
    /// Draw an alignment from this distribution
    pub fn roll(&self, rng: &mut GameRng) -> Alignment {
        let roll = rng.rnd(6);
        match self {
            AlignmentDistribution::Normal => match roll {
                1 => Alignment::Lawful,
                6 => Alignment::Chaotic,
                _ => Alignment::Neutral,
            },
            AlignmentDistribution::Uniform => match roll {
                1..=2 => Alignment::Lawful,
                3..=4 => Alignment::Neutral,
                _ => Alignment::Chaotic,
            },
            AlignmentDistribution::Lawful => match roll {
                1..=4 => Alignment::Lawful,
                _ => Alignment::Neutral,
            },
            AlignmentDistribution::Chaotic => match roll {
                1..=2 => Alignment::Neutral,
                _ => Alignment::Chaotic,
            },
        }
    }
}
