pub mod client;
pub mod config;
pub mod domain;
pub mod scenario;
pub mod telemetry;
