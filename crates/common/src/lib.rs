//! Shared types for the crisis call coordinator.

pub mod types;

pub use types::CallId;
