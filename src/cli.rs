use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tariff-calc")]
#[command(version, about = "Block-rate electricity tariff calculator")]
pub struct Cli {
    /// Use this config file instead of the default one
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output language (auto, en, th)
    #[arg(short = 'l', long = "lang", global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price one day's consumption in kWh
    Cost {
        #[arg(allow_negative_numbers = true)]
        energy: f64,

        /// Show how the energy was split across rate blocks
        #[arg(short = 'b', long = "breakdown")]
        breakdown: bool,
    },

    /// Price every reading in a JSON array of sensor readings ("-" for stdin)
    Readings {
        file: PathBuf,

        /// Show how the energy was split across rate blocks
        #[arg(short = 'b', long = "breakdown")]
        breakdown: bool,
    },

    /// Print both rate schedules
    Schedules,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost_with_negative_value() {
        let cli = Cli::try_parse_from(["tariff-calc", "cost", "-1.5"]).unwrap();
        match cli.command {
            Command::Cost { energy, breakdown } => {
                assert_eq!(energy, -1.5);
                assert!(!breakdown);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tariff-calc", "readings", "day.json", "-b", "--lang", "th"]).unwrap();
        assert_eq!(cli.lang.as_deref(), Some("th"));
        assert!(matches!(cli.command, Command::Readings { breakdown: true, .. }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tariff-calc"]).is_err());
    }
}
