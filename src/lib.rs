//! Orrery library
//!
//! This provides the core functionality of the orrery as a library
//! to enable integration testing and benchmarks.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod events;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
