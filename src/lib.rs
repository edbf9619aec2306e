pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod extraction;
pub mod telemetry;
