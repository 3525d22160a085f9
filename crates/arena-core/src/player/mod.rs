//! Characters and their attributes

mod alignment;
mod attributes;
mod character;

pub use alignment::{Alignment, AlignmentDistribution};
pub use attributes::{Ability, AbilityRollMethod, AbilityScores, ability_modifier};
pub use character::{Character, CharacterClass, xp_for_level};
