//! Seeded synthetic mission table in the layout the loader expects.

use std::io::Write;

use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::errors::SimulationError;

const MISSION_TYPES: [&str; 5] = [
    "Exploration",
    "Research",
    "Satellite Deployment",
    "Colonization",
    "Resupply",
];

#[derive(Debug, Clone, Serialize)]
pub struct SampleMission {
    #[serde(rename = "Mission Name")]
    pub mission_name: String,
    #[serde(rename = "Launch Date")]
    pub launch_date: String,
    #[serde(rename = "Mission Type")]
    pub mission_type: String,
    #[serde(rename = "Mission Success")]
    pub mission_success: String,
    #[serde(rename = "Mission Cost")]
    pub mission_cost: f64,
    #[serde(rename = "Payload Weight")]
    pub payload_weight: f64,
    #[serde(rename = "Fuel Consumption")]
    pub fuel_consumption: f64,
    #[serde(rename = "Mission Duration")]
    pub mission_duration: f64,
    #[serde(rename = "Distance from Earth")]
    pub distance_from_earth: f64,
    #[serde(rename = "Crew Size")]
    pub crew_size: u32,
    #[serde(rename = "Scientific Yield")]
    pub scientific_yield: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn generate_sample(count: usize, seed: u64) -> Vec<SampleMission> {
    let mut rng = StdRng::seed_from_u64(seed);
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN);

    (0..count)
        .map(|i| {
            let payload_weight = round2(rng.gen_range(1_000.0..50_000.0));
            let mission_cost = round2(rng.gen_range(50.0..1_500.0));
            let distance_from_earth = round2(rng.gen_range(0.4..400.0));
            let success_odds = 0.6 + 0.3 * (mission_cost / 1_500.0);
            SampleMission {
                mission_name: format!("Mission-{}", i + 1),
                launch_date: (epoch + Duration::days(rng.gen_range(0..12_000)))
                    .format("%Y-%m-%d")
                    .to_string(),
                mission_type: MISSION_TYPES[rng.gen_range(0..MISSION_TYPES.len())].to_string(),
                mission_success: if rng.gen_bool(success_odds) {
                    "Success".to_string()
                } else {
                    "Failure".to_string()
                },
                mission_cost,
                payload_weight,
                fuel_consumption: round2(payload_weight * rng.gen_range(8.0..14.0)),
                mission_duration: round2(distance_from_earth * rng.gen_range(1.5..3.0)),
                distance_from_earth,
                crew_size: rng.gen_range(0..=8),
                scientific_yield: round2(rng.gen_range(0.0..100.0)),
            }
        })
        .collect()
}

/// Writes `count` synthetic missions as CSV and returns the row count.
pub fn write_sample<W: Write>(
    writer: W,
    count: usize,
    seed: u64,
) -> Result<usize, SimulationError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let missions = generate_sample(count, seed);
    for mission in &missions {
        wtr.serialize(mission)?;
    }
    wtr.flush()?;
    Ok(missions.len())
}
