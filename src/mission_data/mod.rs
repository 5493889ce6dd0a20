pub mod analytics;
pub mod cache;
pub mod dataset;
pub mod sample;
