//! Service tests module
//!
//! Drives the create wizard and the edit form through their public API.

pub mod editor_tests;
pub mod metrics_tests;
pub mod wizard_flow_tests;
