//! Command-line arguments

use clap::{ArgAction, Parser};

use arena_core::player::AlignmentDistribution;
use arena_core::{ArenaConfig, BaseArmor, ConfigError, FightMode, ReportOptions};

/// OED Arena battle simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(author, version, about = "OED Arena - battle simulator", long_about = None)]
pub struct Args {
    /// Number of years to simulate
    #[arg(short = 'y', long = "years", default_value_t = 50)]
    pub years: u32,

    /// Fights per year
    #[arg(short = 'f', long = "fights", default_value_t = 12)]
    pub fights: u32,

    /// Population size kept up by recruitment
    #[arg(short = 'n', long = "fighters", default_value_t = 100)]
    pub fighters: u32,

    /// Starting level of recruits
    #[arg(short = 'l', long = "level", default_value_t = 1)]
    pub level: u32,

    /// Fighter party size (scales monster encounters)
    #[arg(short = 'p', long = "party-size", default_value_t = 1)]
    pub party_size: u32,

    /// Base armor (0=none, 1=leather, 2=chain, 3=plate)
    #[arg(short = 'a', long = "armor", default_value_t = 3, allow_negative_numbers = true)]
    pub armor: i64,

    /// Fight man vs. monster
    #[arg(short = 'm', long = "monsters")]
    pub monsters: bool,

    /// Count monster treasure toward XP
    #[arg(short = 't', long = "treasure")]
    pub treasure: bool,

    /// Random seed (drawn from entropy when omitted)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Alignment of recruits (normal, uniform, lawful, chaotic)
    #[arg(long = "alignment", default_value = "normal")]
    pub alignment: AlignmentDistribution,

    /// Report sections: s stats, d details, k kills, t total kills, x XP, y year end
    #[arg(short = 'r', long = "report", default_value = "s")]
    pub report: String,

    /// Print the full report as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Simulation settings from the flags
    pub fn config(&self) -> Result<ArenaConfig, ConfigError> {
        let config = ArenaConfig {
            num_years: self.years,
            fights_per_year: self.fights,
            population_size: self.fighters,
            start_level: self.level,
            party_size: self.party_size,
            base_armor: BaseArmor::from_code(self.armor)?,
            mode: if self.monsters {
                FightMode::ManVsMonster
            } else {
                FightMode::ManVsMan
            },
            use_monster_treasure: self.treasure,
            alignment: self.alignment,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn report_options(&self) -> Result<ReportOptions, ConfigError> {
        ReportOptions::parse(&self.report)
    }

    /// Log filter directive for the verbosity count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("arena").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_config_defaults() {
        let args = parse(&[]);
        let config = args.config().unwrap();
        assert_eq!(
            config,
            ArenaConfig {
                seed: None,
                ..ArenaConfig::default()
            }
        );
        assert_eq!(args.report_options().unwrap(), ReportOptions::STATS);
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args = parse(&[
            "-y", "5", "-f", "2", "-n", "40", "-l", "3", "-p", "2", "-a", "1", "-m", "-t", "-s",
            "17", "--alignment", "lawful", "-r", "sdy", "-vv",
        ]);
        let config = args.config().unwrap();
        assert_eq!(config.num_years, 5);
        assert_eq!(config.fights_per_year, 2);
        assert_eq!(config.population_size, 40);
        assert_eq!(config.start_level, 3);
        assert_eq!(config.party_size, 2);
        assert_eq!(config.base_armor, BaseArmor::Leather);
        assert_eq!(config.mode, FightMode::ManVsMonster);
        assert!(config.use_monster_treasure);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.alignment, AlignmentDistribution::Lawful);
        assert_eq!(
            args.report_options().unwrap(),
            ReportOptions::STATS | ReportOptions::DETAILS | ReportOptions::YEAR_END
        );
        assert_eq!(args.log_level(), "trace");
    }

    #[test]
    fn test_bad_codes_rejected() {
        assert_eq!(
            parse(&["-a", "7"]).config(),
            Err(ConfigError::UnknownArmorCode(7))
        );
        assert_eq!(
            parse(&["-a", "-1"]).config(),
            Err(ConfigError::UnknownArmorCode(-1))
        );
        assert_eq!(
            parse(&["-r", "sz"]).report_options(),
            Err(ConfigError::UnknownReportCode('z'))
        );
        assert!(matches!(
            parse(&["-n", "0"]).config(),
            Err(ConfigError::ZeroCount { field: "population_size", .. })
        ));
        assert!(Args::try_parse_from(["arena", "--alignment", "sideways"]).is_err());
    }
}
