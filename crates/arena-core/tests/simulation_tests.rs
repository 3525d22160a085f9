use std::ops::ControlFlow;

use arena_core::combat::{Attack, SpecialType};
use arena_core::monster::{Monster, MonsterStats, MonsterTemplate};
use arena_core::object::{Armor, ArmorType, Weapon};
use arena_core::player::{AbilityScores, Character, CharacterClass};
use arena_core::{
    Arena, ArenaConfig, ArenaError, Combatant, CombatantId, ConfigError, Dice, FightMode,
    GameRng, HasEquipment, Party, TemplateOpponents,
};

fn small_config(population: u32, seed: u64) -> ArenaConfig {
    ArenaConfig {
        num_years: 3,
        fights_per_year: 4,
        population_size: population,
        seed: Some(seed),
        ..ArenaConfig::default()
    }
}

fn harmless_stick() -> Weapon {
    Weapon::new("Stick", Dice::new(1, 1).plus(-1), 0, 0)
}

#[test]
fn test_same_seed_same_history() {
    let a = Arena::new(small_config(30, 2024)).unwrap().run().unwrap();
    let b = Arena::new(small_config(30, 2024)).unwrap().run().unwrap();
    assert_eq!(a.years, b.years);
    assert_eq!(a.final_snapshot, b.final_snapshot);
    assert_eq!(a.roster, b.roster);

    let c = Arena::new(small_config(30, 2025)).unwrap().run().unwrap();
    assert_ne!(a.roster, c.roster);
}

#[test]
fn test_reseed_replays_run() {
    let mut arena = Arena::new(small_config(16, 1)).unwrap();
    arena.reseed(99);
    let first = arena.run().unwrap();

    let replay = Arena::new(small_config(16, 99)).unwrap().run().unwrap();
    assert_eq!(first.seed, 99);
    assert_eq!(first.years, replay.years);
}

#[test]
fn test_unseeded_run_reports_its_seed() {
    let config = ArenaConfig {
        seed: None,
        ..small_config(6, 0)
    };
    let mut arena = Arena::new(config.clone()).unwrap();
    let report = arena.run().unwrap();
    assert_eq!(report.seed, arena.seed());

    let replay = Arena::new(ArenaConfig {
        seed: Some(report.seed),
        ..config
    })
    .unwrap()
    .run()
    .unwrap();
    assert_eq!(replay.years, report.years);
}

#[test]
fn test_harmless_population_survives_a_cycle() {
    let mut arena = Arena::new(small_config(10, 3)).unwrap();
    arena.recruit_to_target_size();
    for fighter in arena.population_mut().iter_mut() {
        fighter.set_weapon(Some(harmless_stick()));
    }

    let dead = arena.run_cycle().unwrap();
    assert!(dead.is_empty());
    assert_eq!(arena.population().len(), 10);
    assert!(
        arena
            .population()
            .iter()
            .all(|c| c.hit_points() == c.max_hit_points())
    );
    assert_eq!(arena.tally().stalemates, 5);
    assert_eq!(arena.tally().xp_awarded, 0);
}

#[test]
fn test_odd_population_leaves_one_unengaged() {
    let mut arena = Arena::new(small_config(11, 4)).unwrap();
    arena.recruit_to_target_size();
    arena.shuffle_population();
    arena.resolve_duels().unwrap();

    let members = arena.population().members();
    let idle: Vec<_> = members.iter().filter(|c| c.times_engaged() == 0).collect();
    assert_eq!(idle.len(), 1);
    assert_eq!(idle[0].id(), members[10].id());
    assert!(idle[0].is_alive());
    assert_eq!(
        members.iter().filter(|c| c.times_engaged() == 1).count(),
        10
    );
}

#[test]
fn test_engagements_reset_each_cycle() {
    let mut arena = Arena::new(small_config(8, 5)).unwrap();
    for _ in 0..3 {
        arena.run_cycle().unwrap();
        assert!(arena.population().iter().all(|c| c.times_engaged() <= 1));
    }
}

#[test]
fn test_armor_class_scenarios() {
    let mut rng = GameRng::new(6);
    let mut fighter = Character::with_abilities(
        CombatantId(1),
        "Fighter 1",
        CharacterClass::Fighter,
        1,
        AbilityScores::default(),
        &mut rng,
    );
    assert_eq!(fighter.armor_class(), 9);

    fighter.set_armor(Some(Armor::make(ArmorType::Plate)));
    fighter.set_shield(Some(Armor::make_magic(ArmorType::Shield, 1)));
    assert_eq!(fighter.armor_class(), 1);
}

#[test]
fn test_damage_and_healing() {
    let mut rng = GameRng::new(7);
    let mut fighter = Character::new(CombatantId(1), "Tess", CharacterClass::Fighter, 2, &mut rng);
    let max = fighter.max_hit_points();
    assert!(!fighter.take_damage(max));
    assert!(fighter.is_dead());
    fighter.heal_fully();
    assert_eq!(fighter.hit_points(), max);
}

// Documented behavior: leveling re-rolls hit points from scratch instead of
// keeping the wounded fraction.
#[test]
fn test_level_up_rerolls_hit_points() {
    let mut rng = GameRng::new(8);
    let mut fighter = Character::new(CombatantId(1), "Ana", CharacterClass::Fighter, 1, &mut rng);
    fighter.take_damage(fighter.max_hit_points() - 1);
    assert_eq!(fighter.gain_experience(2_000, &mut rng), 1);
    assert_eq!(fighter.level(), 2);
    assert_eq!(fighter.hit_points(), fighter.max_hit_points());
    assert!((2..=12).contains(&fighter.max_hit_points()));
}

#[test]
fn test_monster_party_aggregates() {
    let mut rng = GameRng::new(9);
    let mut monsters = Party::new();
    for i in 1..=4 {
        let stats = MonsterStats {
            hit_dice: Dice::new(i, 8),
            attack: Attack::new(1, Dice::new(1, 6)),
            ..MonsterStats::default()
        };
        monsters.add(Monster::new(CombatantId(i), "Gnoll", stats, &mut rng));
    }
    assert_eq!(monsters.highest_level().map(|m| m.id()), Ok(CombatantId(4)));
    assert_eq!(monsters.average_level(), 2.5);
}

#[test]
fn test_man_vs_monster_run() {
    let orc = MonsterTemplate::new(
        "Orc",
        MonsterStats {
            armor_class: 6,
            hit_dice: Dice::new(1, 8),
            attack: Attack::new(1, Dice::new(1, 6)),
            treasure_value: 25,
            ..MonsterStats::default()
        },
    );
    let troll = MonsterTemplate::new(
        "Troll",
        MonsterStats {
            armor_class: 4,
            hit_dice: Dice::new(6, 8).plus(3),
            attack: Attack::new(3, Dice::new(1, 6)),
            ..MonsterStats::default()
        },
    )
    .with_special(SpecialType::Regeneration, Some(3));

    let config = ArenaConfig {
        mode: FightMode::ManVsMonster,
        use_monster_treasure: true,
        ..small_config(20, 10)
    };
    let report = Arena::new(config)
        .unwrap()
        .with_opponents(TemplateOpponents::new(vec![orc, troll]))
        .run()
        .unwrap();
    assert!(report.completed);
    assert!(report.totals.monsters_slain > 0);
    assert!(report.totals.treasure_xp > 0);
    assert_eq!(report.totals.treasure_xp % 25, 0);
}

#[test]
fn test_monster_mode_without_source_is_rejected() {
    let config = ArenaConfig {
        mode: FightMode::ManVsMonster,
        ..small_config(4, 11)
    };
    let err = Arena::new(config).unwrap().run().unwrap_err();
    assert_eq!(err, ArenaError::Config(ConfigError::MissingOpponentSource));
    assert_eq!(
        err.to_string(),
        "invalid configuration: man-vs-monster mode needs an opponent source"
    );
}

#[test]
fn test_stop_after_first_year() {
    let mut arena = Arena::new(small_config(12, 12)).unwrap();
    let report = arena
        .run_with(|progress| {
            if progress.year == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
    assert!(!report.completed);
    assert_eq!(report.years.len(), 1);
}

#[test]
fn test_report_serializes() {
    let report = Arena::new(small_config(6, 13)).unwrap().run().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"], 13);
    assert_eq!(json["years"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["config"]["population_size"], 6);
}
