//! Unit conversion utilities
//!
//! Lengths are stored in meters throughout the layout engine. This module
//! formats them for display in either the metric or the imperial system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const METERS_PER_INCH: f64 = 0.0254;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (m)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "m" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length for display.
///
/// Metric values keep up to three decimals with trailing zeros trimmed
/// (`0.6` → `"0.6m"`). Imperial values are rounded to whole inches and
/// split into feet and inches (`0.9144` → `"3' 0\""`).
pub fn format_length(value_m: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => {
            let text = format!("{:.3}", value_m);
            let text = text.trim_end_matches('0').trim_end_matches('.');
            // "-0" shows up for tiny negative values
            let text = if text == "-0" { "0" } else { text };
            format!("{}m", text)
        }
        MeasurementSystem::Imperial => {
            let total_inches = (value_m / METERS_PER_INCH).round() as i64;
            let sign = if total_inches < 0 { "-" } else { "" };
            let total_inches = total_inches.abs();
            format!("{}{}' {}\"", sign, total_inches / 12, total_inches % 12)
        }
    }
}

/// Get the unit label for the given system ("m" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "m",
        MeasurementSystem::Imperial => "in",
    }
}
