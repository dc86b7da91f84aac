//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "liftoff.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "liftoff.yaml";

/// Changelog location relative to the repository root
pub const DEFAULT_CHANGELOG_FILE: &str = "docs/CHANGELOG.md";

/// Action input carrying the webhook URL
pub const INPUT_WEBHOOK_URL: &str = "slack-webhook-url";

/// Action input carrying the service name
pub const INPUT_SERVICE_NAME: &str = "service-name";

/// Action input carrying the repository root
pub const INPUT_REPOSITORY: &str = "repository";

/// Action input carrying the changelog path
pub const INPUT_CHANGELOG: &str = "changelog";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".liftoff.toml",
        ".liftoff.yaml",
    ]
}
