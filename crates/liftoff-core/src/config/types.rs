//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::DEFAULT_CHANGELOG_FILE;

/// Main configuration for Liftoff, as read from `liftoff.toml` / `liftoff.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name announced in the release message
    pub service_name: Option<String>,

    /// Slack configuration
    pub slack: SlackConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Slack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Incoming webhook URL
    pub webhook_url: Option<String>,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog path, relative to the repository root unless absolute
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_changelog_path() {
        let config = Config::default();
        assert_eq!(config.changelog.file, PathBuf::from("docs/CHANGELOG.md"));
        assert!(config.service_name.is_none());
        assert!(config.slack.webhook_url.is_none());
    }

    #[test]
    fn test_full_toml() {
        let config: Config = toml::from_str(
            "service_name = \"billing\"\n\n[slack]\nwebhook_url = \"https://hooks.slack.com/services/T/B/X\"\n\n[changelog]\nfile = \"CHANGELOG.md\"\n",
        )
        .unwrap();
        assert_eq!(config.service_name.as_deref(), Some("billing"));
        assert_eq!(
            config.slack.webhook_url.as_deref(),
            Some("https://hooks.slack.com/services/T/B/X")
        );
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("service_name: billing\n").unwrap();
        assert_eq!(config.service_name.as_deref(), Some("billing"));
        assert_eq!(config.changelog.file, PathBuf::from("docs/CHANGELOG.md"));
    }
}
