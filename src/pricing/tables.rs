//! Residential block-rate tables and their service charges

use crate::core::{RateBlock, RateSchedule, ServiceCharge};

/// Monthly-equivalent consumption (kWh) up to which the low schedule applies
pub const LOW_USAGE_THRESHOLD_KWH: f64 = 150.0;

static LOW_USAGE_BLOCKS: [RateBlock; 7] = [
    RateBlock::new(1.0, 15.0, 2.3488),
    RateBlock::new(16.0, 25.0, 2.9882),
    RateBlock::new(26.0, 35.0, 3.2405),
    RateBlock::new(36.0, 100.0, 3.6237),
    RateBlock::new(101.0, 150.0, 3.7171),
    RateBlock::new(151.0, 400.0, 4.2218),
    RateBlock::new(401.0, f64::INFINITY, 4.4217),
];

static HIGH_USAGE_BLOCKS: [RateBlock; 3] = [
    RateBlock::new(1.0, 150.0, 3.2484),
    RateBlock::new(151.0, 400.0, 4.2218),
    RateBlock::new(401.0, f64::INFINITY, 4.4217),
];

/// Schedule for households using at most 150 kWh a month
pub static LOW_USAGE_SCHEDULE: RateSchedule = RateSchedule::new(&LOW_USAGE_BLOCKS);

/// Schedule for households using more than 150 kWh a month
pub static HIGH_USAGE_SCHEDULE: RateSchedule = RateSchedule::new(&HIGH_USAGE_BLOCKS);

pub const SERVICE_CHARGE_LOW: ServiceCharge = ServiceCharge(8.19);
pub const SERVICE_CHARGE_HIGH: ServiceCharge = ServiceCharge(38.22);

/// Which of the two schedules a consumption figure is billed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    Low,
    High,
}

impl ScheduleKind {
    /// Pick the schedule from a daily figure projected to a 30-day month
    pub fn for_energy(energy: f64) -> Self {
        let monthly_equivalent = energy * ServiceCharge::DAYS_PER_MONTH;
        if monthly_equivalent <= LOW_USAGE_THRESHOLD_KWH {
            ScheduleKind::Low
        } else {
            ScheduleKind::High
        }
    }

    pub fn schedule(&self) -> &'static RateSchedule {
        match self {
            ScheduleKind::Low => &LOW_USAGE_SCHEDULE,
            ScheduleKind::High => &HIGH_USAGE_SCHEDULE,
        }
    }

    pub fn service_charge(&self) -> ServiceCharge {
        match self {
            ScheduleKind::Low => SERVICE_CHARGE_LOW,
            ScheduleKind::High => SERVICE_CHARGE_HIGH,
        }
    }

    /// Translation key for the schedule's display name
    pub fn label_key(&self) -> &'static str {
        match self {
            ScheduleKind::Low => "schedule.low",
            ScheduleKind::High => "schedule.high",
        }
    }

    pub fn all() -> [ScheduleKind; 2] {
        [ScheduleKind::Low, ScheduleKind::High]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_contiguous() {
        assert!(LOW_USAGE_SCHEDULE.is_contiguous());
        assert!(HIGH_USAGE_SCHEDULE.is_contiguous());
    }

    #[test]
    fn test_rates_never_decrease() {
        for kind in ScheduleKind::all() {
            let blocks = kind.schedule().blocks();
            assert!(blocks.windows(2).all(|pair| pair[0].rate <= pair[1].rate));
        }
    }

    #[test]
    fn test_threshold_selection() {
        assert_eq!(ScheduleKind::for_energy(0.0), ScheduleKind::Low);
        assert_eq!(ScheduleKind::for_energy(5.0), ScheduleKind::Low);
        assert_eq!(ScheduleKind::for_energy(5.1), ScheduleKind::High);
        assert_eq!(ScheduleKind::for_energy(100.0), ScheduleKind::High);
    }

    #[test]
    fn test_service_charges() {
        assert_eq!(ScheduleKind::Low.service_charge().monthly(), 8.19);
        assert_eq!(ScheduleKind::High.service_charge().monthly(), 38.22);
    }
}
