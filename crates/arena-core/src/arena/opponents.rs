//! Opponent generation for man-vs-monster fights

use tracing::trace;

use crate::combat::{Combatant, CombatantId};
use crate::monster::MonsterTemplate;
use crate::rng::GameRng;

/// Supplies a fresh opponent for a population member
pub trait OpponentSource {
    /// Build an opponent for `fighter`, using `id` for the new combatant.
    /// `party_size` scales the encounter. `None` means no opponent is
    /// available and the fighter sits out.
    fn next_opponent(
        &mut self,
        fighter: &dyn Combatant,
        party_size: u32,
        id: CombatantId,
        rng: &mut GameRng,
    ) -> Option<Box<dyn Combatant>>;
}

impl<F> OpponentSource for F
where
    F: FnMut(&dyn Combatant, u32, CombatantId, &mut GameRng) -> Option<Box<dyn Combatant>>,
{
    fn next_opponent(
        &mut self,
        fighter: &dyn Combatant,
        party_size: u32,
        id: CombatantId,
        rng: &mut GameRng,
    ) -> Option<Box<dyn Combatant>> {
        self(fighter, party_size, id, rng)
    }
}

/// Picks among monster templates by difficulty
///
/// The encounter budget is `fighter level × party size`. Any template whose
/// equivalent hit dice fit the budget is equally likely; when none fit, the
/// weakest template is used.
#[derive(Debug, Clone, Default)]
pub struct TemplateOpponents {
    templates: Vec<MonsterTemplate>,
}

impl TemplateOpponents {
    pub fn new(templates: Vec<MonsterTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[MonsterTemplate] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Choose a template for the given budget
    pub fn pick(&self, budget: u32, rng: &mut GameRng) -> Option<&MonsterTemplate> {
        let fitting: Vec<&MonsterTemplate> = self
            .templates
            .iter()
            .filter(|t| t.equivalent_hit_dice() <= budget)
            .collect();
        if let Some(&template) = rng.choose(&fitting) {
            return Some(template);
        }
        self.templates
            .iter()
            .reduce(|weakest, t| {
                if t.equivalent_hit_dice() < weakest.equivalent_hit_dice() {
                    t
                } else {
                    weakest
                }
            })
    }
}

impl OpponentSource for TemplateOpponents {
    fn next_opponent(
        &mut self,
        fighter: &dyn Combatant,
        party_size: u32,
        id: CombatantId,
        rng: &mut GameRng,
    ) -> Option<Box<dyn Combatant>> {
        let budget = fighter.level().max(1).saturating_mul(party_size.max(1));
        let template = self.pick(budget, rng)?;
        trace!(fighter = fighter.name(), budget, monster = %template.race, "opponent chosen");
        Some(Box::new(template.spawn(id, rng)))
    }
}
