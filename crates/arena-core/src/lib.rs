//! arena-core: combat population simulation for the OED Arena
//!
//! Fighters are recruited, paired off and fought year after year; the
//! survivors gain experience and levels while the dead are replaced. This
//! crate holds the whole engine (dice, combatants, populations and the
//! simulation loop) with no I/O. All randomness flows through one seeded
//! [`GameRng`], so a run is reproducible from its seed.

pub mod arena;
pub mod combat;
pub mod monster;
pub mod object;
pub mod player;

mod consts;
mod dice;
mod error;
mod party;
mod rng;

pub use arena::{
    Arena, ArenaConfig, BaseArmor, CycleProgress, FightMode, FightTally, OpponentSource,
    ReportOptions, SimulationReport, TemplateOpponents, YearReport,
};
pub use combat::{Combatant, CombatantId, HasEquipment};
pub use consts::*;
pub use dice::{Dice, Scale};
pub use error::{ArenaError, ConfigError, DiceParseError, PartyError};
pub use party::{MemberSummary, Party, PopulationSnapshot};
pub use rng::GameRng;
