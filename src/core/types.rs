//! Tariff data types and the sensor reading shape consumed by pricing

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One tier of a block-rate schedule: an inclusive kWh interval and its unit price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBlock {
    /// Inclusive `(min, max)` interval. The last block of a schedule has `max = f64::INFINITY`.
    pub range: (f64, f64),
    /// Price per kWh for consumption falling in this block
    pub rate: f64,
}

impl RateBlock {
    pub const fn new(min: f64, max: f64, rate: f64) -> Self {
        Self { range: (min, max), rate }
    }

    pub fn min(&self) -> f64 {
        self.range.0
    }

    pub fn max(&self) -> f64 {
        self.range.1
    }

    /// Number of units this block absorbs, counted the integer-tariff way (`max - min + 1`).
    ///
    /// For an unbounded block this is infinite.
    pub fn capacity(&self) -> f64 {
        self.max() - self.min() + 1.0
    }

    pub fn is_unbounded(&self) -> bool {
        self.max().is_infinite()
    }
}

/// Ordered list of rate blocks, lowest range first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSchedule {
    blocks: &'static [RateBlock],
}

impl RateSchedule {
    pub const fn new(blocks: &'static [RateBlock]) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &'static [RateBlock] {
        self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'static, RateBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check that blocks start at 1, follow each other without gaps or
    /// overlaps, and end with an unbounded block.
    pub fn is_contiguous(&self) -> bool {
        let Some(first) = self.blocks.first() else {
            return false;
        };
        if first.min() != 1.0 {
            return false;
        }

        let adjacent = self
            .blocks
            .windows(2)
            .all(|pair| pair[0].max() + 1.0 == pair[1].min() && pair[1].min() <= pair[1].max());

        adjacent && self.blocks.last().map_or(false, RateBlock::is_unbounded)
    }
}

/// Fixed monthly charge billed alongside a schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceCharge(pub f64);

impl ServiceCharge {
    pub const DAYS_PER_MONTH: f64 = 30.0;

    pub fn monthly(&self) -> f64 {
        self.0
    }

    /// Monthly charge pro-rated to a single day
    pub fn daily(&self) -> f64 {
        self.0 / Self::DAYS_PER_MONTH
    }
}

/// A meter reading as published by the sensor feed.
///
/// Only `energy` (kWh for the reading's day) takes part in pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    /// ISO-8601 timestamp of the reading. Timestamps without an offset are taken as UTC.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
    pub frequency: f64,
    /// Power factor
    pub pf: f64,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {}", raw))
    })
}

/// Parse an RFC 3339 timestamp, or a local `YYYY-MM-DDTHH:MM:SS[.fff]` one as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}
