//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types via
//! `parse_*` / `to_*` accessors.

mod orchestration;
mod reports;
mod specialists;

pub use orchestration::FileOrchestrationConfig;
pub use reports::FileReportsConfig;
pub use specialists::FileSpecialistsConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Delegation mode, round budget, timeout
    pub orchestration: FileOrchestrationConfig,
    /// Specialist data sources
    pub specialists: FileSpecialistsConfig,
    /// Report output settings
    pub reports: FileReportsConfig,
}

impl FileConfig {
    /// Validate the configuration, returning human-readable warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if let Err(e) = self.orchestration.parse_mode() {
            issues.push(format!(
                "orchestration.mode: {} (falling back to sequential)",
                e
            ));
        }
        if self.orchestration.debate_rounds == 0 {
            issues.push("orchestration.debate_rounds must be at least 1".to_string());
        }
        if self.orchestration.timeout_secs == 0 {
            issues.push("orchestration.timeout_secs must be positive".to_string());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[orchestration]
mode = "debate"
debate_rounds = 4
timeout_secs = 60

[specialists]
brave_api_key = "key-123"
http_timeout_secs = 10

[reports]
dir = "out/reports"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.orchestration.mode, "debate");
        assert_eq!(config.orchestration.debate_rounds, 4);
        assert_eq!(
            config.specialists.brave_api_key.as_deref(),
            Some("key-123")
        );
        assert_eq!(config.reports.dir.to_str(), Some("out/reports"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FileConfig = toml::from_str("[orchestration]\nmode = \"debate\"").unwrap();
        assert_eq!(config.orchestration.debate_rounds, 3);
        assert_eq!(config.reports.dir.to_str(), Some("reports"));
    }

    #[test]
    fn test_validate_flags_bad_mode_and_zero_rounds() {
        let config: FileConfig = toml::from_str(
            "[orchestration]\nmode = \"quorum\"\ndebate_rounds = 0",
        )
        .unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
    }
}
