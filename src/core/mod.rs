//! Core module - Configuration, errors, and tariff data types

mod config;
mod error;
mod types;

pub use config::{Config, DisplayConfig, GeneralConfig, PricingConfig};
pub use error::{Error, Result};
pub use types::{RateBlock, RateSchedule, SensorData, ServiceCharge};
