//! Text report output

use std::io::{self, Write};

use arena_core::{FightMode, ReportOptions, SimulationReport};

/// Print the selected report sections
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SimulationReport,
    options: ReportOptions,
) -> io::Result<()> {
    let config = &report.config;
    writeln!(out, "OED Arena - Battle Simulator")?;
    writeln!(out, "-----------------------------")?;
    let mode = match config.mode {
        FightMode::ManVsMan => "Man vs Man",
        FightMode::ManVsMonster => "Man vs Monster",
    };
    writeln!(out, "Fight mode: {mode}")?;
    writeln!(out, "Number of fighters: {}", config.population_size)?;
    writeln!(out, "Years: {}", config.num_years)?;
    writeln!(out, "Fights per year: {}", config.fights_per_year)?;
    writeln!(out, "Party size: {}", config.party_size)?;
    writeln!(out, "Starting level: {}", config.start_level)?;
    writeln!(out, "Base armor: {}", config.base_armor)?;
    writeln!(out, "Seed: {}", report.seed)?;
    if !report.completed {
        writeln!(out, "(stopped after {} of {} years)", report.years.len(), config.num_years)?;
    }

    if options.contains(ReportOptions::YEAR_END) {
        writeln!(out)?;
        for year in &report.years {
            writeln!(
                out,
                "Year {}: {} living, {} deaths, {} recruits, average level {:.1}",
                year.year,
                year.snapshot.living,
                year.deaths,
                year.recruits,
                year.snapshot.average_level
            )?;
        }
    }

    if options.contains(ReportOptions::XP_AWARDS) {
        writeln!(out)?;
        writeln!(out, "=== Experience Awards ===")?;
        for year in &report.years {
            writeln!(out, "Year {}: {} XP", year.year, year.xp_awarded)?;
        }
        writeln!(out, "Total XP awarded: {}", report.totals.xp_awarded)?;
        if config.awards_treasure() {
            writeln!(out, "Total treasure XP: {}", report.totals.treasure_xp)?;
        }
    }

    if options.contains(ReportOptions::STATS) {
        let snap = &report.final_snapshot;
        writeln!(out)?;
        writeln!(out, "=== Final Statistics ===")?;
        writeln!(out, "Total fighters: {}", snap.size)?;
        writeln!(out, "Living fighters: {}", snap.living)?;
        writeln!(out, "Dead fighters: {}", snap.dead)?;
        writeln!(out, "Average level: {:.1}", snap.average_level)?;
        if let Some(highest) = &snap.highest {
            writeln!(out, "Highest level: {} ({})", highest.level, highest.descriptor)?;
        }
    }

    if options.contains(ReportOptions::DETAILS) {
        writeln!(out)?;
        writeln!(out, "=== Fighters ===")?;
        for member in &report.roster {
            writeln!(
                out,
                "{}, age {}, XP {}",
                member.descriptor,
                member.age.unwrap_or_default(),
                member.experience.unwrap_or_default()
            )?;
        }
    }

    if options.contains(ReportOptions::KILLS) {
        writeln!(out)?;
        writeln!(out, "=== Kill Tallies ===")?;
        let mut by_kills: Vec<_> = report.roster.iter().collect();
        by_kills.sort_by(|a, b| b.kill_tally.cmp(&a.kill_tally));
        for member in by_kills.iter().filter(|m| m.kill_tally > 0) {
            writeln!(out, "{}: {}", member.name, member.kill_tally)?;
        }
    }

    if options.contains(ReportOptions::TOTAL_KILLS) {
        writeln!(out)?;
        writeln!(out, "Total monsters slain: {}", report.totals.monsters_slain)?;
        writeln!(out, "Total fighters lost: {}", report.totals.deaths)?;
    }

    Ok(())
}
