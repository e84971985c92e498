pub mod assessment;
pub mod config;
pub mod context;
pub mod error;
pub mod portfolio;
pub mod telemetry;
