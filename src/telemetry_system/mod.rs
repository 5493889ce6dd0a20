pub mod result_series;
pub mod telemetry;
