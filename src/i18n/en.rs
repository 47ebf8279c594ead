//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Schedules
    t.insert("schedule.low".into(), "Low usage (up to 150 kWh/month)".into());
    t.insert("schedule.high".into(), "High usage (over 150 kWh/month)".into());
    t.insert("schedule.service_charge".into(), "Service charge (monthly)".into());

    // Report
    t.insert("report.energy".into(), "Energy".into());
    t.insert("report.schedule".into(), "Schedule".into());
    t.insert("report.block".into(), "Block".into());
    t.insert("report.rate".into(), "Rate".into());
    t.insert("report.units".into(), "Units".into());
    t.insert("report.amount".into(), "Amount".into());
    t.insert("report.service_charge".into(), "Service charge (daily)".into());
    t.insert("report.cost".into(), "Cost".into());
    t.insert("report.total".into(), "Total".into());
    t.insert("report.readings".into(), "Readings".into());
    t.insert("report.no_readings".into(), "No readings found".into());

    // Units
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.per_kwh".into(), "/kWh".into());

    t
}
