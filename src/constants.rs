// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Vehicle Constants
pub const DRY_MASS: f64 = 500_000.0; // kg
pub const FUEL_BURN_RATE: f64 = 2_000.0; // kg/s
pub const DRAG_COEFFICIENT: f64 = 0.00002; // N·s²/m², drag = k * v²

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const MAX_STEPS: usize = 200;

// Input Ranges
pub const PAYLOAD_MASS_RANGE: (u32, u32) = (1_000, 50_000); // kg
pub const THRUST_RANGE: (u32, u32) = (1_000_000, 15_000_000); // N

pub const DEFAULT_PAYLOAD_MASS: u32 = 10_000; // kg
pub const DEFAULT_THRUST: u32 = 7_000_000; // N

// Presentation
pub const DISPLAY_DECIMALS: u32 = 2;
