//! Configuration validation

use std::path::Path;

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

/// Require a non-blank value for the named input
pub fn require_input(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::MissingField(field.to_string()).into()),
    }
}

/// Validate a webhook URL: it must parse and use http or https
pub fn validate_webhook_url(raw: &str) -> Result<Url> {
    debug!("validating webhook url");
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        field: "slack-webhook-url".to_string(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "slack-webhook-url".to_string(),
            message: format!("unsupported scheme '{}', expected http or https", url.scheme()),
        }
        .into());
    }

    Ok(url)
}

/// Validate the configured changelog path
pub fn validate_changelog_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "path cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiftoffError;

    #[test]
    fn test_require_input() {
        assert_eq!(
            require_input("service-name", Some(" billing ".to_string())).unwrap(),
            "billing"
        );
        assert!(matches!(
            require_input("service-name", Some("  ".to_string())),
            Err(LiftoffError::Config(ConfigError::MissingField(f))) if f == "service-name"
        ));
        assert!(require_input("service-name", None).is_err());
    }

    #[test]
    fn test_validate_webhook_url() {
        let url = validate_webhook_url("https://hooks.slack.com/services/T/B/X").unwrap();
        assert_eq!(url.host_str(), Some("hooks.slack.com"));

        assert!(validate_webhook_url("not a url").is_err());
        assert!(validate_webhook_url("ftp://hooks.slack.com/x").is_err());
    }

    #[test]
    fn test_validate_changelog_path() {
        assert!(validate_changelog_path(Path::new("docs/CHANGELOG.md")).is_ok());
        assert!(validate_changelog_path(Path::new("")).is_err());
    }
}
