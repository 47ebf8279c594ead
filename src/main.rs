//! Tariff Calculator - command line entry point
//!
//! Prices daily electricity consumption under the two-schedule block-rate
//! tariff, for a single value or a file of sensor readings.

use anyhow::Context;
use std::io::Read;
use tariff_calc::cli::{Cli, Command};
use tariff_calc::core::Config;
use tariff_calc::i18n::I18n;
use tariff_calc::report;
use tariff_calc::TariffCalculator;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };

    let language = cli.lang.as_deref().unwrap_or(&config.general.language);
    let i18n = I18n::new(language);
    let calculator = TariffCalculator::new(&config.pricing);

    match cli.command {
        Command::Cost { energy, breakdown } => {
            let result = calculator
                .calculate_breakdown(energy)
                .context("Cannot price this consumption")?;
            let show = breakdown || config.display.show_breakdown;
            print!("{}", report::render_cost(&calculator, &i18n, &result, show));
        }
        Command::Readings { file, breakdown } => {
            let json = if file.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read readings from stdin")?;
                buf
            } else {
                std::fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?
            };

            let readings = report::parse_readings(&json)?;
            log::info!("Pricing {} readings", readings.len());

            let show = breakdown || config.display.show_breakdown;
            let output = report::render_readings(&calculator, &i18n, &readings, show)
                .context("Cannot price readings")?;
            print!("{}", output);
        }
        Command::Schedules => {
            print!("{}", report::render_schedules(&calculator, &i18n));
        }
    }

    Ok(())
}
