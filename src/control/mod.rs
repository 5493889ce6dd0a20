pub mod parameters;
pub mod propulsion;
pub mod simulation;
