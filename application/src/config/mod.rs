//! Application-level configuration.

pub mod orchestration;

pub use orchestration::{DelegationMode, OrchestrationParams};
