//! Block-rate electricity tariff calculator
//!
//! This module exposes the pricing core for use in tests
//! and as a library.

pub mod cli;
pub mod core;
pub mod i18n;
pub mod pricing;
pub mod report;

pub use pricing::{breakdown, compute_cost, cost_for_reading, select_schedule, TariffCalculator};
