//! Milliseconds to (amount, unit) codec for chain durations.
//!
//! Canonical storage is integer milliseconds. Editors display an amount in
//! the largest unit that divides the stored value evenly, and write back
//! through `duration_to_millis`, which rounds rather than truncates so
//! repeated unit switches do not drift.

use serde::{Deserialize, Serialize};

use super::number_to_string;

// ---------------------------------------------------------------------------
// DurationUnit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl DurationUnit {
    /// Units from largest to smallest, the order `default_duration_unit` tries.
    pub const DESCENDING: [DurationUnit; 4] = [
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
    ];

    pub const fn millis(self) -> i64 {
        match self {
            DurationUnit::Second => 1_000,
            DurationUnit::Minute => 60 * 1_000,
            DurationUnit::Hour => 60 * 60 * 1_000,
            DurationUnit::Day => 24 * 60 * 60 * 1_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DurationUnit::Second => "Seconds",
            DurationUnit::Minute => "Minutes",
            DurationUnit::Hour => "Hours",
            DurationUnit::Day => "Days",
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// The largest unit that is no larger than `duration_ms` and divides it
/// evenly; seconds when none qualifies.
pub fn default_duration_unit(duration_ms: i64) -> DurationUnit {
    for unit in [DurationUnit::Day, DurationUnit::Hour, DurationUnit::Minute] {
        if duration_ms >= unit.millis() && duration_ms % unit.millis() == 0 {
            return unit;
        }
    }
    DurationUnit::Second
}

/// Render the duration as an amount of `unit`, rounded to 2 decimal places.
pub fn format_duration_amount(duration_ms: i64, unit: DurationUnit) -> String {
    let raw = duration_ms as f64 / unit.millis() as f64;
    if !raw.is_finite() {
        return "0".to_string();
    }
    let rounded = (raw * 100.0).round() / 100.0;
    number_to_string(rounded)
}

/// Write an edited amount back to canonical milliseconds.
pub fn duration_to_millis(amount: f64, unit: DurationUnit) -> i64 {
    (amount * unit.millis() as f64).round() as i64
}
