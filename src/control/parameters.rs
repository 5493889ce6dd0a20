use crate::constants::{
    DEFAULT_PAYLOAD_MASS, DEFAULT_THRUST, DRAG_COEFFICIENT, DRY_MASS, FUEL_BURN_RATE, GRAVITY,
    MAX_STEPS, PAYLOAD_MASS_RANGE, THRUST_RANGE, TIME_STEP,
};
use crate::errors::SimulationError;

/// The two user-facing launch options.
///
/// `payload_mass` adds to the initial vehicle mass and `thrust` is the
/// constant accelerating force. Range checks happen here, never in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchConfig {
    pub payload_mass: u32, // kg
    pub thrust: u32,       // N
}

impl LaunchConfig {
    pub fn new(payload_mass: u32, thrust: u32) -> Self {
        LaunchConfig {
            payload_mass,
            thrust,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        check_range("payload_mass", self.payload_mass, PAYLOAD_MASS_RANGE)?;
        check_range("thrust", self.thrust, THRUST_RANGE)?;
        Ok(())
    }

    pub fn clamped(&self) -> Self {
        LaunchConfig {
            payload_mass: self
                .payload_mass
                .clamp(PAYLOAD_MASS_RANGE.0, PAYLOAD_MASS_RANGE.1),
            thrust: self.thrust.clamp(THRUST_RANGE.0, THRUST_RANGE.1),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig::new(DEFAULT_PAYLOAD_MASS, DEFAULT_THRUST)
    }
}

fn check_range(
    name: &'static str,
    value: u32,
    (min, max): (u32, u32),
) -> Result<(), SimulationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::ParameterOutOfRange {
            name,
            value: f64::from(value),
            min: f64::from(min),
            max: f64::from(max),
        })
    }
}

/// Immutable inputs of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub payload_mass: f64,     // kg
    pub thrust: f64,           // N
    pub gravity: f64,          // m/s²
    pub time_step: f64,        // s
    pub max_steps: usize,
    pub fuel_burn_rate: f64,   // kg/s
    pub drag_coefficient: f64,
    pub dry_mass: f64,         // kg
}

impl SimulationParameters {
    /// Parameters with the standard vehicle constants. No range checks.
    pub fn new(payload_mass: f64, thrust: f64) -> Self {
        SimulationParameters {
            payload_mass,
            thrust,
            gravity: GRAVITY,
            time_step: TIME_STEP,
            max_steps: MAX_STEPS,
            fuel_burn_rate: FUEL_BURN_RATE,
            drag_coefficient: DRAG_COEFFICIENT,
            dry_mass: DRY_MASS,
        }
    }

    pub fn with_dry_mass(mut self, dry_mass: f64) -> Self {
        self.dry_mass = dry_mass;
        self
    }

    pub fn with_fuel_burn_rate(mut self, fuel_burn_rate: f64) -> Self {
        self.fuel_burn_rate = fuel_burn_rate;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn initial_mass(&self) -> f64 {
        self.dry_mass + self.payload_mass
    }

    pub fn mass_loss_per_step(&self) -> f64 {
        self.fuel_burn_rate * self.time_step
    }
}

impl From<LaunchConfig> for SimulationParameters {
    fn from(config: LaunchConfig) -> Self {
        SimulationParameters::new(f64::from(config.payload_mass), f64::from(config.thrust))
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        LaunchConfig::default().into()
    }
}
