use std::io::Write;

use serde::Serialize;

use crate::constants::DISPLAY_DECIMALS;
use crate::control::simulation::{SimulationOutcome, Termination};
use crate::errors::SimulationError;

/// Rounds half away from zero to `decimals` places. NaN stays NaN.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Display-ready maxima of both variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSummary {
    pub max_with_drag: f64,
    pub max_without_drag: f64,
    pub samples: usize,
    pub termination: Termination,
}

impl AltitudeSummary {
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        AltitudeSummary {
            max_with_drag: round_to(outcome.max_altitude_with_drag(), DISPLAY_DECIMALS),
            max_without_drag: round_to(outcome.max_altitude_without_drag(), DISPLAY_DECIMALS),
            samples: outcome.len(),
            termination: outcome.termination,
        }
    }

    /// Altitude lost to drag, NaN when either maximum is undefined.
    pub fn drag_loss(&self) -> f64 {
        round_to(self.max_without_drag - self.max_with_drag, DISPLAY_DECIMALS)
    }

    pub fn format_lines(&self) -> Vec<String> {
        let termination = match self.termination {
            Termination::StepLimit => "step limit reached".to_string(),
            Termination::FuelExhausted { at_step } => {
                format!("mass exhausted at step {}", at_step)
            }
        };
        vec![
            format!("Max Altitude (With Drag): {}", format_metric(self.max_with_drag)),
            format!("Max Altitude (No Drag): {}", format_metric(self.max_without_drag)),
            format!("Altitude Lost to Drag: {}", format_metric(self.drag_loss())),
            format!("Samples: {} ({})", self.samples, termination),
        ]
    }
}

/// Formats a metric with two decimals, or "undefined" for NaN.
pub fn format_metric(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{:.2}", value)
    }
}

pub fn format_altitude(altitude: f64) -> String {
    if altitude.is_nan() {
        "undefined".to_string()
    } else if altitude.abs() >= 1000.0 {
        format!("{:.2} km", altitude / 1000.0)
    } else {
        format!("{:.2} m", altitude)
    }
}

#[derive(Serialize)]
struct ComparisonRow {
    #[serde(rename = "Time")]
    time: usize,
    #[serde(rename = "Altitude (With Drag)")]
    with_drag: f64,
    #[serde(rename = "Altitude (Without Drag)")]
    without_drag: f64,
}

/// Writes both series side by side, one row per time index.
pub fn write_comparison_csv<W: Write>(
    writer: W,
    outcome: &SimulationOutcome,
) -> Result<usize, SimulationError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for (drag, vacuum) in outcome
        .with_drag
        .points()
        .iter()
        .zip(outcome.without_drag.points())
    {
        wtr.serialize(ComparisonRow {
            time: drag.time,
            with_drag: drag.altitude,
            without_drag: vacuum.altitude,
        })?;
        rows += 1;
    }
    if rows == 0 {
        wtr.write_record(["Time", "Altitude (With Drag)", "Altitude (Without Drag)"])?;
    }
    wtr.flush()?;
    Ok(rows)
}
