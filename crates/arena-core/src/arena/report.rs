//! Per-year and end-of-run reports

use serde::{Deserialize, Serialize};

use super::ArenaConfig;
use crate::party::{MemberSummary, PopulationSnapshot};

/// Counters accumulated while fights are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightTally {
    pub deaths: u32,
    pub recruits: u32,
    /// XP gained by population members, treasure included
    pub xp_awarded: u64,
    /// Share of `xp_awarded` that came from monster treasure
    pub treasure_xp: u64,
    pub monsters_slain: u32,
    /// Duels where neither side could deal damage
    pub stalemates: u32,
}

impl FightTally {
    pub fn merge(&mut self, other: &FightTally) {
        self.deaths = self.deaths.saturating_add(other.deaths);
        self.recruits = self.recruits.saturating_add(other.recruits);
        self.xp_awarded = self.xp_awarded.saturating_add(other.xp_awarded);
        self.treasure_xp = self.treasure_xp.saturating_add(other.treasure_xp);
        self.monsters_slain = self.monsters_slain.saturating_add(other.monsters_slain);
        self.stalemates = self.stalemates.saturating_add(other.stalemates);
    }
}

/// Status at the end of one simulated year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearReport {
    pub year: u32,
    pub snapshot: PopulationSnapshot,
    pub deaths: u32,
    pub recruits: u32,
    pub xp_awarded: u64,
    pub tally: FightTally,
}

impl YearReport {
    pub(crate) fn new(year: u32, snapshot: PopulationSnapshot, tally: FightTally) -> Self {
        Self {
            year,
            snapshot,
            deaths: tally.deaths,
            recruits: tally.recruits,
            xp_awarded: tally.xp_awarded,
            tally,
        }
    }
}

/// Where a run stands after a cycle, passed to progress callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleProgress {
    pub year: u32,
    pub cycle: u32,
    pub num_years: u32,
    pub fights_per_year: u32,
    pub living: usize,
}

impl CycleProgress {
    /// Cycles finished so far
    pub fn cycles_done(&self) -> u64 {
        u64::from(self.year - 1) * u64::from(self.fights_per_year) + u64::from(self.cycle)
    }

    pub fn cycles_total(&self) -> u64 {
        u64::from(self.num_years) * u64::from(self.fights_per_year)
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: ArenaConfig,
    /// Seed actually used, even when the config left it unset
    pub seed: u64,
    pub years: Vec<YearReport>,
    pub final_snapshot: PopulationSnapshot,
    /// Survivors, highest level first
    pub roster: Vec<MemberSummary>,
    pub totals: FightTally,
    /// False when a progress callback stopped the run early
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_merge() {
        let mut total = FightTally::default();
        let year = FightTally {
            deaths: 3,
            recruits: 4,
            xp_awarded: 500,
            treasure_xp: 200,
            monsters_slain: 2,
            stalemates: 1,
        };
        total.merge(&year);
        total.merge(&year);
        assert_eq!(total.deaths, 6);
        assert_eq!(total.xp_awarded, 1000);
        assert_eq!(total.stalemates, 2);
    }

    #[test]
    fn test_tally_merge_saturates() {
        let mut total = FightTally {
            xp_awarded: u64::MAX - 1,
            deaths: u32::MAX,
            ..FightTally::default()
        };
        let year = FightTally {
            xp_awarded: 10,
            treasure_xp: 10,
            deaths: 1,
            ..FightTally::default()
        };
        total.merge(&year);
        assert_eq!(total.xp_awarded, u64::MAX);
        assert_eq!(total.deaths, u32::MAX);
        assert_eq!(total.treasure_xp, 10);
    }

    #[test]
    fn test_cycle_progress_counts() {
        let progress = CycleProgress {
            year: 3,
            cycle: 2,
            num_years: 10,
            fights_per_year: 12,
            living: 5,
        };
        assert_eq!(progress.cycles_done(), 26);
        assert_eq!(progress.cycles_total(), 120);
    }
}
