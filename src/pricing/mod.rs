//! Pricing engine for block-rate electricity tariffs
//!
//! Consumption is a daily kWh figure. It is projected to a 30-day month to
//! choose between the low and high usage schedules, then allocated across the
//! chosen schedule's blocks, lowest block first. The schedule's monthly service
//! charge is added pro-rated to one day and the total is rounded to cents.

mod tables;

pub use tables::{
    ScheduleKind, HIGH_USAGE_SCHEDULE, LOW_USAGE_SCHEDULE, LOW_USAGE_THRESHOLD_KWH,
    SERVICE_CHARGE_HIGH, SERVICE_CHARGE_LOW,
};

use crate::core::{Error, PricingConfig, RateSchedule, Result, SensorData, ServiceCharge};

/// Units billed in one block and what they cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockCharge {
    pub range: (f64, f64),
    pub rate: f64,
    pub units: f64,
    pub amount: f64,
}

/// Itemised result of a cost calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    pub energy: f64,
    /// `None` when nothing was consumed
    pub schedule: Option<ScheduleKind>,
    pub blocks: Vec<BlockCharge>,
    /// Daily share of the schedule's service charge
    pub service_charge: f64,
    /// Sum of block amounts and service charge before rounding
    pub subtotal: f64,
    /// Amount billed, rounded to two decimals
    pub total: f64,
}

impl CostBreakdown {
    fn empty() -> Self {
        Self {
            energy: 0.0,
            schedule: None,
            blocks: Vec::new(),
            service_charge: 0.0,
            subtotal: 0.0,
            total: 0.0,
        }
    }
}

/// Above this many cents every `f64` is already a whole number of cents
const MAX_EXACT_CENTS: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round to two decimal places, ties away from zero.
///
/// The direction is decided on the exact binary value, not on `value * 100`,
/// whose rounding error can turn 171.814999... into a tie.
pub fn round_to_cents(value: f64) -> f64 {
    let magnitude = value.abs();
    if !magnitude.is_finite() || magnitude * 100.0 >= MAX_EXACT_CENTS {
        return value;
    }

    // mul_add rounds once, so the sign of `magnitude * k - c` is exact
    let mut cents = (magnitude * 100.0).floor();
    if magnitude.mul_add(100.0, -cents) < 0.0 {
        cents -= 1.0;
    } else if magnitude.mul_add(100.0, -(cents + 1.0)) >= 0.0 {
        cents += 1.0;
    }

    if magnitude.mul_add(200.0, -(2.0 * cents + 1.0)) >= 0.0 {
        cents += 1.0;
    }

    (cents / 100.0).copysign(value)
}

/// Pick the schedule a daily consumption figure is billed under
pub fn select_schedule(energy: f64) -> ScheduleKind {
    ScheduleKind::for_energy(energy)
}

/// Cost of a day's consumption in kWh, rounded to two decimals.
///
/// Zero consumption costs exactly zero. Negative, NaN and infinite values, and
/// values too large to price, are rejected with [`Error::InvalidInput`].
pub fn compute_cost(energy: f64) -> Result<f64> {
    breakdown(energy).map(|b| b.total)
}

/// Same calculation as [`compute_cost`], keeping every intermediate amount
pub fn breakdown(energy: f64) -> Result<CostBreakdown> {
    validate_energy(energy)?;

    if energy == 0.0 {
        return Ok(CostBreakdown::empty());
    }

    let kind = select_schedule(energy);
    log::debug!(
        "{} kWh/day projects to {} kWh/month, using {:?} schedule",
        energy,
        energy * ServiceCharge::DAYS_PER_MONTH,
        kind
    );

    let blocks = allocate(kind.schedule(), energy);
    let mut subtotal = 0.0;
    for block in &blocks {
        subtotal += block.amount;
    }

    let service_charge = kind.service_charge().daily();
    subtotal += service_charge;

    if !subtotal.is_finite() {
        log::warn!("Cost of {} kWh overflows", energy);
        return Err(Error::InvalidInput(energy));
    }

    Ok(CostBreakdown {
        energy,
        schedule: Some(kind),
        blocks,
        service_charge,
        subtotal,
        total: round_to_cents(subtotal),
    })
}

/// Cost of the energy recorded by a sensor reading
pub fn cost_for_reading(reading: &SensorData) -> Result<f64> {
    compute_cost(reading.energy)
}

fn validate_energy(energy: f64) -> Result<()> {
    if !energy.is_finite() || energy < 0.0 {
        log::warn!("Rejected energy value {}", energy);
        return Err(Error::InvalidInput(energy));
    }
    Ok(())
}

/// Fill blocks in order until the energy runs out
fn allocate(schedule: &RateSchedule, energy: f64) -> Vec<BlockCharge> {
    let mut remaining = energy;
    let mut charges = Vec::new();

    for block in schedule.iter() {
        let units = remaining.min(block.capacity());
        if units <= 0.0 {
            break;
        }

        let amount = units * block.rate;
        log::debug!(
            "  block {:?}: {} kWh x {} = {}",
            block.range,
            units,
            block.rate,
            amount
        );
        charges.push(BlockCharge {
            range: block.range,
            rate: block.rate,
            units,
            amount,
        });

        remaining -= units;
        if remaining <= 0.0 {
            break;
        }
    }

    charges
}

/// Pricing engine bound to the user's currency settings
pub struct TariffCalculator {
    config: PricingConfig,
}

impl TariffCalculator {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Update the pricing configuration
    pub fn update_config(&mut self, config: &PricingConfig) {
        self.config = config.clone();
    }

    /// Calculate cost for a day's consumption in kWh
    pub fn calculate_cost(&self, kwh: f64) -> Result<f64> {
        compute_cost(kwh)
    }

    pub fn calculate_breakdown(&self, kwh: f64) -> Result<CostBreakdown> {
        breakdown(kwh)
    }

    pub fn calculate_reading_cost(&self, reading: &SensorData) -> Result<f64> {
        cost_for_reading(reading)
    }

    /// Sum of each reading's billed cost. Stops at the first invalid reading.
    pub fn calculate_total(&self, readings: &[SensorData]) -> Result<f64> {
        let mut total = 0.0;
        for reading in readings {
            total += self.calculate_reading_cost(reading)?;
        }
        Ok(round_to_cents(total))
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}

impl Default for TariffCalculator {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}
