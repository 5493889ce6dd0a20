pub mod constants;
pub mod control;
pub mod errors;
pub mod mission_data;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::parameters::{LaunchConfig, SimulationParameters};
pub use control::propulsion::VehicleMass;
pub use control::simulation::{simulate, SimulationEngine, SimulationOutcome, Termination};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::{ForceModel, TrajectoryState};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::result_series::{ResultSeries, SeriesPoint};
pub use telemetry_system::telemetry::AltitudeSummary;

// Re-export commonly used items from mission_data
pub use mission_data::cache::DatasetCache;
pub use mission_data::dataset::{MissionDataset, MissionRecord, NumericColumn};
