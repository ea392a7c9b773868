//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileConfig, FileOrchestrationConfig, FileReportsConfig, FileSpecialistsConfig,
};
pub use loader::ConfigLoader;
