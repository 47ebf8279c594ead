//! Plain-text rendering of costs and rate schedules for the command line

use crate::core::{Error, RateBlock, Result, SensorData};
use crate::i18n::I18n;
use crate::pricing::{CostBreakdown, ScheduleKind, TariffCalculator};
use std::fmt::Write;

/// Parse a JSON array of sensor readings
pub fn parse_readings(json: &str) -> Result<Vec<SensorData>> {
    serde_json::from_str(json).map_err(|e| Error::Serialization(format!("Invalid readings: {}", e)))
}

fn block_label(range: (f64, f64)) -> String {
    if range.1.is_infinite() {
        format!("{}+", range.0)
    } else {
        format!("{}-{}", range.0, range.1)
    }
}

/// One-line cost, optionally followed by the per-block detail
pub fn render_cost(
    calculator: &TariffCalculator,
    i18n: &I18n,
    breakdown: &CostBreakdown,
    show_breakdown: bool,
) -> String {
    let symbol = calculator.currency_symbol();
    let kwh = i18n.get("unit.kilowatt_hours");
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}: {} {}  {}: {:.2} {}",
        i18n.get("report.energy"),
        breakdown.energy,
        kwh,
        i18n.get("report.cost"),
        breakdown.total,
        symbol
    );

    if show_breakdown {
        if let Some(kind) = breakdown.schedule {
            let _ = writeln!(out, "  {}: {}", i18n.get("report.schedule"), i18n.get(kind.label_key()));
            let _ = writeln!(
                out,
                "  {:<10} {:>14} x {:<6} = {}",
                i18n.get("report.block"),
                i18n.get("report.units"),
                i18n.get("report.rate"),
                i18n.get("report.amount")
            );
        }
        for charge in &breakdown.blocks {
            let _ = writeln!(
                out,
                "  {:<10} {:>10.4} {} x {:.4} = {:.4} {}",
                block_label(charge.range),
                charge.units,
                kwh,
                charge.rate,
                charge.amount,
                symbol
            );
        }
        if breakdown.schedule.is_some() {
            let _ = writeln!(
                out,
                "  {}: {:.4} {}",
                i18n.get("report.service_charge"),
                breakdown.service_charge,
                symbol
            );
        }
    }

    out
}

/// Cost of each reading followed by the total
pub fn render_readings(
    calculator: &TariffCalculator,
    i18n: &I18n,
    readings: &[SensorData],
    show_breakdown: bool,
) -> Result<String> {
    let mut out = String::new();

    if readings.is_empty() {
        let _ = writeln!(out, "{}", i18n.get("report.no_readings"));
        return Ok(out);
    }

    let _ = writeln!(out, "{}: {}", i18n.get("report.readings"), readings.len());
    for reading in readings {
        let breakdown = calculator.calculate_breakdown(reading.energy)?;
        let _ = write!(out, "[{}] ", reading.timestamp.to_rfc3339());
        out.push_str(&render_cost(calculator, i18n, &breakdown, show_breakdown));
    }

    let total = calculator.calculate_total(readings)?;
    let _ = writeln!(
        out,
        "{}: {:.2} {}",
        i18n.get("report.total"),
        total,
        calculator.currency_symbol()
    );

    Ok(out)
}

fn render_blocks(out: &mut String, blocks: &[RateBlock], i18n: &I18n, symbol: &str) {
    for block in blocks {
        let _ = writeln!(
            out,
            "  {:<10} {:.4} {}{}",
            block_label(block.range),
            block.rate,
            symbol,
            i18n.get("unit.per_kwh")
        );
    }
}

/// Both schedules with their blocks and service charges
pub fn render_schedules(calculator: &TariffCalculator, i18n: &I18n) -> String {
    let symbol = calculator.currency_symbol();
    let mut out = String::new();

    for kind in ScheduleKind::all() {
        let _ = writeln!(out, "{}", i18n.get(kind.label_key()));
        render_blocks(&mut out, kind.schedule().blocks(), i18n, symbol);
        let _ = writeln!(
            out,
            "  {}: {:.2} {}",
            i18n.get("schedule.service_charge"),
            kind.service_charge().monthly(),
            symbol
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const READINGS: &str = r#"[
        {"timestamp": "2024-11-01T00:00:00Z", "voltage": 230.1, "current": 0.9, "power": 207.0, "energy": 1.0, "frequency": 50.0, "pf": 0.98},
        {"timestamp": "2024-11-02T00:00:00Z", "voltage": 229.8, "current": 2.1, "power": 483.0, "energy": 5.1, "frequency": 49.9, "pf": 0.97}
    ]"#;

    #[test]
    fn test_parse_readings() {
        let readings = parse_readings(READINGS).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].energy, 5.1);
    }

    #[test]
    fn test_parse_readings_without_offset() {
        let json = r#"[{"timestamp": "2024-11-01T08:30:00", "voltage": 230.0, "current": 0.5, "power": 115.0, "energy": 1, "frequency": 50.0, "pf": 1.0}]"#;
        let readings = parse_readings(json).unwrap();
        assert_eq!(readings.len(), 1);

        let calculator = TariffCalculator::default();
        assert_eq!(calculator.calculate_total(&readings).unwrap(), 2.62);
    }

    #[test]
    fn test_parse_readings_rejects_bad_json() {
        let err = parse_readings("[{\"energy\": 1.0}]").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_render_cost_with_breakdown() {
        let calculator = TariffCalculator::default();
        let i18n = I18n::new("en");
        let breakdown = calculator.calculate_breakdown(200.0).unwrap();

        let out = render_cost(&calculator, &i18n, &breakdown, true);
        assert!(out.contains("699.62"));
        assert!(out.contains("High usage"));
        assert!(out.contains("1-150"));
        assert!(out.contains("151-400"));
        assert!(out.contains("Service charge (daily)"));

        let header = out.lines().nth(2).unwrap();
        for column in ["Block", "Units", "Rate", "Amount"] {
            assert!(header.contains(column), "missing {} in {:?}", column, header);
        }
    }

    #[test]
    fn test_render_zero_cost_has_no_detail() {
        let calculator = TariffCalculator::default();
        let i18n = I18n::new("en");
        let breakdown = calculator.calculate_breakdown(0.0).unwrap();

        let out = render_cost(&calculator, &i18n, &breakdown, true);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("0.00"));
    }

    #[test]
    fn test_render_readings_total() {
        let calculator = TariffCalculator::default();
        let i18n = I18n::new("en");
        let readings = parse_readings(READINGS).unwrap();

        let out = render_readings(&calculator, &i18n, &readings, false).unwrap();
        assert!(out.contains("Readings: 2"));
        assert!(out.contains("2.62"));
        assert!(out.contains("17.84"));
        assert!(out.trim_end().ends_with("Total: 20.46 \u{0E3F}"));
    }

    #[test]
    fn test_render_readings_empty() {
        let calculator = TariffCalculator::default();
        let i18n = I18n::new("en");
        let out = render_readings(&calculator, &i18n, &[], false).unwrap();
        assert_eq!(out.trim(), "No readings found");
    }

    #[test]
    fn test_render_schedules() {
        let calculator = TariffCalculator::default();
        let i18n = I18n::new("en");
        let out = render_schedules(&calculator, &i18n);

        assert!(out.contains("401+"));
        assert!(out.contains("2.3488"));
        assert!(out.contains("8.19"));
        assert!(out.contains("38.22"));
    }
}
