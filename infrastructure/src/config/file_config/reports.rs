//! Report output configuration from TOML (`[reports]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw `[reports]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportsConfig {
    /// Directory markdown reports are written to
    pub dir: PathBuf,
    /// Optional JSONL audit log path; disabled when unset
    pub audit_log: Option<PathBuf>,
}

impl Default for FileReportsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("reports"),
            audit_log: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir() {
        let config = FileReportsConfig::default();
        assert_eq!(config.dir, PathBuf::from("reports"));
        assert!(config.audit_log.is_none());
    }
}
