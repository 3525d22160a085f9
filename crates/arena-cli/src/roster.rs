//! Built-in monster roster for man-vs-monster runs

use arena_core::combat::{Attack, SpecialType};
use arena_core::monster::{MonsterStats, MonsterTemplate};
use arena_core::player::Alignment;
use arena_core::{Dice, TemplateOpponents};

struct Entry {
    race: &'static str,
    armor_class: i32,
    move_rate: u32,
    hit_dice: Dice,
    attacks: u32,
    damage: Dice,
    alignment: Alignment,
    ehd: Option<u32>,
    treasure: u64,
    specials: &'static [(SpecialType, Option<i32>)],
}

const ROSTER: &[Entry] = &[
    Entry {
        race: "Kobold",
        armor_class: 7,
        move_rate: 6,
        hit_dice: Dice::new(1, 4),
        attacks: 1,
        damage: Dice::new(1, 4),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 5,
        specials: &[],
    },
    Entry {
        race: "Goblin",
        armor_class: 6,
        move_rate: 6,
        hit_dice: Dice::new(1, 8).plus(-1),
        attacks: 1,
        damage: Dice::new(1, 6),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 10,
        specials: &[],
    },
    Entry {
        race: "Orc",
        armor_class: 6,
        move_rate: 9,
        hit_dice: Dice::new(1, 8),
        attacks: 1,
        damage: Dice::new(1, 6),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 15,
        specials: &[],
    },
    Entry {
        race: "Hobgoblin",
        armor_class: 6,
        move_rate: 9,
        hit_dice: Dice::new(1, 8).plus(1),
        attacks: 1,
        damage: Dice::new(1, 8),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 20,
        specials: &[],
    },
    Entry {
        race: "Gnoll",
        armor_class: 5,
        move_rate: 9,
        hit_dice: Dice::new(2, 8),
        attacks: 1,
        damage: Dice::new(2, 4),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 40,
        specials: &[],
    },
    Entry {
        race: "Bugbear",
        armor_class: 5,
        move_rate: 9,
        hit_dice: Dice::new(3, 8).plus(1),
        attacks: 1,
        damage: Dice::new(2, 4),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 60,
        specials: &[],
    },
    Entry {
        race: "Wight",
        armor_class: 5,
        move_rate: 9,
        hit_dice: Dice::new(3, 8),
        attacks: 1,
        damage: Dice::new(1, 4),
        alignment: Alignment::Chaotic,
        ehd: Some(4),
        treasure: 150,
        specials: &[
            (SpecialType::Undead, None),
            (SpecialType::EnergyDrain, Some(1)),
            (SpecialType::SilverToHit, None),
        ],
    },
    Entry {
        race: "Ogre",
        armor_class: 5,
        move_rate: 9,
        hit_dice: Dice::new(4, 8).plus(1),
        attacks: 1,
        damage: Dice::new(1, 10),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 200,
        specials: &[],
    },
    Entry {
        race: "Troll",
        armor_class: 4,
        move_rate: 12,
        hit_dice: Dice::new(6, 8).plus(3),
        attacks: 3,
        damage: Dice::new(1, 6),
        alignment: Alignment::Chaotic,
        ehd: Some(7),
        treasure: 500,
        specials: &[(SpecialType::Regeneration, Some(3))],
    },
    Entry {
        race: "Hill Giant",
        armor_class: 4,
        move_rate: 12,
        hit_dice: Dice::new(8, 8),
        attacks: 1,
        damage: Dice::new(2, 8),
        alignment: Alignment::Chaotic,
        ehd: None,
        treasure: 1_000,
        specials: &[(SpecialType::RockHurling, None)],
    },
    Entry {
        race: "Red Dragon",
        armor_class: -1,
        move_rate: 9,
        hit_dice: Dice::new(10, 8),
        attacks: 3,
        damage: Dice::new(4, 8),
        alignment: Alignment::Chaotic,
        ehd: Some(13),
        treasure: 3_000,
        specials: &[
            (SpecialType::Dragon, None),
            (SpecialType::FireBreath, None),
            (SpecialType::FireImmunity, None),
        ],
    },
];

impl Entry {
    fn template(&self) -> MonsterTemplate {
        let stats = MonsterStats {
            armor_class: self.armor_class,
            move_rate: self.move_rate,
            hit_dice: self.hit_dice,
            attack: Attack::new(self.attacks, self.damage),
            alignment: self.alignment,
            equivalent_hit_dice: self.ehd,
            treasure_value: self.treasure,
        };
        self.specials
            .iter()
            .fold(MonsterTemplate::new(self.race, stats), |t, &(kind, magnitude)| {
                t.with_special(kind, magnitude)
            })
    }
}

/// Opponent source covering the built-in monsters
pub fn default_roster() -> TemplateOpponents {
    TemplateOpponents::new(ROSTER.iter().map(Entry::template).collect())
}
