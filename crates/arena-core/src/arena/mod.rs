//! Arena simulation loop
//!
//! A population of fighters is topped up, shuffled, paired off and fought
//! every cycle. The dead are removed, survivors healed and, at the end of each
//! year, aged by one year.
//!
//! ```text
//! for year in 1..=num_years
//!     for cycle in 1..=fights_per_year
//!         recruit, shuffle, duel, cull, heal, checkpoint
//!     year end
//! ```

mod config;
mod opponents;
mod report;

use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use crate::combat::{Combatant, CombatantId, DuelOutcome, HasEquipment, duel};
use crate::error::{ArenaError, ConfigError};
use crate::object::Weapon;
use crate::party::{MemberSummary, Party};
use crate::player::{Character, CharacterClass};
use crate::rng::GameRng;

pub use config::{ArenaConfig, BaseArmor, FightMode, ReportOptions};
pub use opponents::{OpponentSource, TemplateOpponents};
pub use report::{CycleProgress, FightTally, SimulationReport, YearReport};

/// The arena: configuration, population, generator and opponent source
pub struct Arena {
    config: ArenaConfig,
    rng: GameRng,
    population: Party<Character>,
    opponents: Option<Box<dyn OpponentSource>>,
    next_id: CombatantId,
    /// Counters since the last year end
    tally: FightTally,
}

impl Arena {
    /// Validate the configuration and seed the generator from it
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            population: Party::new(),
            opponents: None,
            next_id: CombatantId::NONE.next(),
            tally: FightTally::default(),
        })
    }

    /// Install the source of man-vs-monster opponents
    pub fn with_opponents(mut self, source: impl OpponentSource + 'static) -> Self {
        self.set_opponents(source);
        self
    }

    pub fn set_opponents(&mut self, source: impl OpponentSource + 'static) {
        self.opponents = Some(Box::new(source));
    }

    /// Restart the generator; the population is left as is
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn population(&self) -> &Party<Character> {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Party<Character> {
        &mut self.population
    }

    /// Counters since the last year end
    pub fn tally(&self) -> &FightTally {
        &self.tally
    }

    fn allocate_id(&mut self) -> CombatantId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Build a recruit: a fighter at the starting level with the configured
    /// armor and a sword
    pub fn new_fighter(&mut self) -> Character {
        let id = self.allocate_id();
        let mut fighter = Character::new(
            id,
            format!("Fighter {}", id.0),
            CharacterClass::Fighter,
            self.config.start_level,
            &mut self.rng,
        );
        fighter.set_alignment(self.config.alignment.roll(&mut self.rng));
        fighter.set_armor(self.config.base_armor.armor());
        fighter.set_weapon(Some(Weapon::sword()));
        fighter
    }

    /// Fill the population up to the configured size; returns the number added
    pub fn recruit_to_target_size(&mut self) -> usize {
        let target = self.config.population_size as usize;
        let mut recruited = 0;
        while self.population.len() < target {
            let fighter = self.new_fighter();
            self.population.add(fighter);
            recruited += 1;
        }
        if recruited > 0 {
            debug!(recruited, "recruits joined");
        }
        self.tally.recruits += recruited as u32;
        recruited
    }

    pub fn shuffle_population(&mut self) {
        self.population.shuffle(&mut self.rng);
    }

    /// Fight one round of duels in the configured mode
    ///
    /// Engagement counters are cleared first.
    pub fn resolve_duels(&mut self) -> Result<(), ArenaError> {
        self.population.clear_engagements();
        match self.config.mode {
            FightMode::ManVsMan => {
                self.resolve_man_vs_man();
                Ok(())
            }
            FightMode::ManVsMonster => self.resolve_man_vs_monster(),
        }
    }

    /// Neighbours in the current order fight; an odd last member sits out
    fn resolve_man_vs_man(&mut self) {
        let rng = &mut self.rng;
        let tally = &mut self.tally;
        for pair in self.population.members_mut().chunks_exact_mut(2) {
            let [first, second] = pair else {
                continue;
            };
            match duel(first, second, rng) {
                DuelOutcome::FirstWins => award_victory(first, second, false, rng, tally),
                DuelOutcome::SecondWins => award_victory(second, first, false, rng, tally),
                DuelOutcome::Stalemate => tally.stalemates += 1,
            }
        }
    }

    /// Every member fights a freshly generated opponent, striking first
    fn resolve_man_vs_monster(&mut self) -> Result<(), ArenaError> {
        let source = self
            .opponents
            .as_mut()
            .ok_or(ConfigError::MissingOpponentSource)?;
        let treasure = self.config.awards_treasure();
        let party_size = self.config.party_size;
        let rng = &mut self.rng;
        let tally = &mut self.tally;

        for fighter in self.population.iter_mut() {
            let id = self.next_id;
            let Some(mut monster) = source.next_opponent(fighter, party_size, id, rng) else {
                warn!(fighter = fighter.name(), "no opponent available");
                continue;
            };
            self.next_id = id.next();

            match duel(fighter, &mut *monster, rng) {
                DuelOutcome::FirstWins => {
                    tally.monsters_slain += 1;
                    award_victory(fighter, &*monster, treasure, rng, tally);
                }
                DuelOutcome::SecondWins => {
                    monster.record_kill();
                    debug!(
                        fighter = fighter.name(),
                        monster = monster.name(),
                        "fighter slain by monster"
                    );
                }
                DuelOutcome::Stalemate => tally.stalemates += 1,
            }
        }
        Ok(())
    }

    /// Remove the dead, returning them in their pre-removal order
    pub fn cull_dead(&mut self) -> Vec<Character> {
        let dead = self.population.cull_dead();
        self.tally.deaths += dead.len() as u32;
        if !dead.is_empty() {
            debug!(deaths = dead.len(), survivors = self.population.len(), "dead removed");
        }
        dead
    }

    pub fn heal_survivors(&mut self) {
        self.population.heal_all();
    }

    /// One full cycle: recruit, shuffle, duel, cull, heal
    pub fn run_cycle(&mut self) -> Result<Vec<Character>, ArenaError> {
        self.recruit_to_target_size();
        self.shuffle_population();
        self.resolve_duels()?;
        let dead = self.cull_dead();
        self.heal_survivors();
        Ok(dead)
    }

    /// Close out a year: age survivors and report
    pub fn year_end(&mut self, year: u32) -> YearReport {
        for member in self.population.iter_mut() {
            member.age_one_year();
        }
        let tally = std::mem::take(&mut self.tally);
        let report = YearReport::new(year, self.population.snapshot(), tally);
        info!(
            year,
            living = report.snapshot.living,
            deaths = report.deaths,
            recruits = report.recruits,
            average_level = report.snapshot.average_level,
            "year complete"
        );
        report
    }

    /// Run every year to completion
    pub fn run(&mut self) -> Result<SimulationReport, ArenaError> {
        self.run_with(|_| ControlFlow::Continue(()))
    }

    /// Run, calling `progress` after every cycle; `Break` stops the run
    /// between cycles and the report is marked incomplete.
    pub fn run_with<F>(&mut self, mut progress: F) -> Result<SimulationReport, ArenaError>
    where
        F: FnMut(CycleProgress) -> ControlFlow<()>,
    {
        self.config.validate()?;
        if self.config.mode == FightMode::ManVsMonster && self.opponents.is_none() {
            return Err(ConfigError::MissingOpponentSource.into());
        }

        info!(
            seed = self.seed(),
            years = self.config.num_years,
            fights_per_year = self.config.fights_per_year,
            population = self.config.population_size,
            mode = %self.config.mode,
            "simulation started"
        );

        let mut years = Vec::with_capacity(self.config.num_years as usize);
        let mut totals = FightTally::default();
        for year in 1..=self.config.num_years {
            for cycle in 1..=self.config.fights_per_year {
                self.run_cycle()?;
                let checkpoint = CycleProgress {
                    year,
                    cycle,
                    num_years: self.config.num_years,
                    fights_per_year: self.config.fights_per_year,
                    living: self.population.num_living(),
                };
                if progress(checkpoint).is_break() {
                    info!(year, cycle, "simulation stopped early");
                    totals.merge(&self.tally);
                    return Ok(self.report(years, totals, false));
                }
            }
            let report = self.year_end(year);
            totals.merge(&report.tally);
            years.push(report);
        }

        info!(survivors = self.population.len(), "simulation finished");
        Ok(self.report(years, totals, true))
    }

    fn report(
        &self,
        years: Vec<YearReport>,
        totals: FightTally,
        completed: bool,
    ) -> SimulationReport {
        let mut roster: Vec<MemberSummary> =
            self.population.iter().map(MemberSummary::of).collect();
        roster.sort_by(|a, b| b.level.cmp(&a.level));
        SimulationReport {
            config: self.config.clone(),
            seed: self.seed(),
            years,
            final_snapshot: self.population.snapshot(),
            roster,
            totals,
            completed,
        }
    }
}

/// Kill credit and experience for the winner of a duel
fn award_victory(
    winner: &mut dyn Combatant,
    loser: &dyn Combatant,
    with_treasure: bool,
    rng: &mut GameRng,
    tally: &mut FightTally,
) {
    winner.record_kill();
    let treasure = if with_treasure {
        loser.treasure_value()
    } else {
        0
    };
    let xp = loser.xp_value().saturating_add(treasure);
    let levels = winner.gain_experience(xp, rng);
    tally.xp_awarded = tally.xp_awarded.saturating_add(xp);
    tally.treasure_xp = tally.treasure_xp.saturating_add(treasure);
    if levels > 0 {
        debug!(
            winner = winner.name(),
            levels,
            level = winner.level(),
            "level gained"
        );
    }
}
