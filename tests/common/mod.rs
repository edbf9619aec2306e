//! Common test utilities shared between the fake-backed and the live suites.
//! This module is accessible in both tests/api and tests/api-live.

pub mod listing_service;

// Re-export commonly used items for convenience
// Each suite uses a subset, the rest may remain unused.
#[allow(unused_imports)]
pub use helpers::{TestApp, connect_to_live_service, spawn_app, spawn_app_with};
#[allow(unused_imports)]
pub use listing_service::CreationShape;
pub use macros::scenario_tests_macro::scenario_tests;
