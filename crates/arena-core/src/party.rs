//! Populations of combatants
//!
//! Member order is meaningful (duels pair neighbours after a shuffle); the
//! aggregate queries ignore it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::{Combatant, CombatantId};
use crate::error::PartyError;
use crate::rng::GameRng;

/// An ordered, owned population
#[derive(Debug, Clone)]
pub struct Party<C: Combatant> {
    members: Vec<C>,
}

impl<C: Combatant> Default for Party<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Combatant> Party<C> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a member; ids must be unique within the party
    pub fn add(&mut self, member: C) {
        debug_assert!(
            self.get(member.id()).is_none(),
            "duplicate combatant id {}",
            member.id()
        );
        self.members.push(member);
    }

    /// Remove a member by id, preserving the order of the rest
    pub fn remove(&mut self, id: CombatantId) -> Option<C> {
        let idx = self.members.iter().position(|m| m.id() == id)?;
        Some(self.members.remove(idx))
    }

    pub fn get(&self, id: CombatantId) -> Option<&C> {
        self.members.iter().find(|m| m.id() == id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut C> {
        self.members.iter_mut().find(|m| m.id() == id)
    }

    pub fn members(&self) -> &[C] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [C] {
        &mut self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, C> {
        self.members.iter_mut()
    }

    /// Uniformly permute the members
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.members);
    }

    pub fn living(&self) -> Vec<&C> {
        self.members.iter().filter(|m| m.is_alive()).collect()
    }

    pub fn dead(&self) -> Vec<&C> {
        self.members.iter().filter(|m| m.is_dead()).collect()
    }

    pub fn num_living(&self) -> usize {
        self.members.iter().filter(|m| m.is_alive()).count()
    }

    pub fn num_dead(&self) -> usize {
        self.members.iter().filter(|m| m.is_dead()).count()
    }

    /// True for an empty party as well
    pub fn all_dead(&self) -> bool {
        !self.any_alive()
    }

    pub fn any_alive(&self) -> bool {
        self.members.iter().any(|m| m.is_alive())
    }

    /// Remove every dead member, returning them in their original order
    pub fn cull_dead(&mut self) -> Vec<C> {
        let (living, dead): (Vec<C>, Vec<C>) = std::mem::take(&mut self.members)
            .into_iter()
            .partition(|m| m.is_alive());
        self.members = living;
        dead
    }

    pub fn heal_all(&mut self) {
        for member in &mut self.members {
            member.heal_fully();
        }
    }

    pub fn clear_engagements(&mut self) {
        for member in &mut self.members {
            member.clear_engagements();
        }
    }

    pub fn random_living(&self, rng: &mut GameRng) -> Option<&C> {
        let living = self.living();
        rng.choose(&living).copied()
    }

    /// Mean level, 0.0 when empty
    pub fn average_level(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: u64 = self.members.iter().map(|m| u64::from(m.level())).sum();
        total as f64 / self.members.len() as f64
    }

    /// Highest-level member; the first one wins ties
    pub fn highest_level(&self) -> Result<&C, PartyError> {
        self.members
            .iter()
            .reduce(|best, m| if m.level() > best.level() { m } else { best })
            .ok_or(PartyError::EmptyPopulation)
    }

    /// Current hit points of the living
    pub fn total_hit_points(&self) -> i64 {
        self.members
            .iter()
            .filter(|m| m.is_alive())
            .map(|m| i64::from(m.hit_points()))
            .sum()
    }

    pub fn total_max_hit_points(&self) -> i64 {
        self.members
            .iter()
            .map(|m| i64::from(m.max_hit_points()))
            .sum()
    }

    /// Stable sort by level
    pub fn sort_by_level(&mut self, descending: bool) {
        if descending {
            self.members.sort_by(|a, b| b.level().cmp(&a.level()));
        } else {
            self.members.sort_by_key(|m| m.level());
        }
    }

    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            size: self.len(),
            living: self.num_living(),
            dead: self.num_dead(),
            average_level: self.average_level(),
            highest: self.highest_level().ok().map(MemberSummary::of),
        }
    }
}

impl<'a, C: Combatant> IntoIterator for &'a Party<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Combatant> fmt::Display for Party<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty party");
        }
        write!(
            f,
            "Party of {} ({} alive, avg level {:.1})",
            self.len(),
            self.num_living(),
            self.average_level()
        )
    }
}

/// Read-only summary of one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: CombatantId,
    pub name: String,
    pub level: u32,
    pub armor_class: i32,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub kill_tally: u32,
    /// Characters only
    pub experience: Option<u64>,
    /// Characters only
    pub age: Option<u32>,
    pub descriptor: String,
}

impl MemberSummary {
    pub fn of<C: Combatant + ?Sized>(member: &C) -> Self {
        let character = member.as_character();
        Self {
            id: member.id(),
            name: member.name().to_string(),
            level: member.level(),
            armor_class: member.armor_class(),
            hit_points: member.hit_points(),
            max_hit_points: member.max_hit_points(),
            kill_tally: member.kill_tally(),
            experience: character.map(|c| c.experience()),
            age: character.map(|c| c.age()),
            descriptor: member.descriptor(),
        }
    }
}

/// Population counts at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub size: usize,
    pub living: usize,
    pub dead: usize,
    pub average_level: f64,
    pub highest: Option<MemberSummary>,
}
