//! Resolved run settings
//!
//! Every value is taken from the first source that provides a non-blank
//! value: command-line flag (or its environment variable), action input,
//! config file, built-in default.

use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::defaults::{INPUT_CHANGELOG, INPUT_REPOSITORY, INPUT_SERVICE_NAME, INPUT_WEBHOOK_URL};
use super::inputs::InputSource;
use super::types::Config;
use super::validation::{require_input, validate_changelog_path, validate_webhook_url};

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub webhook_url: Option<String>,
    pub service_name: Option<String>,
    pub repository: Option<PathBuf>,
    pub changelog: Option<PathBuf>,
    pub dry_run: bool,
}

/// Fully resolved settings for one notification run
#[derive(Debug, Clone)]
pub struct NotifySettings {
    /// Destination webhook; `None` only for dry runs without one
    pub webhook_url: Option<Url>,
    /// Service name shown in the header block
    pub service_name: String,
    /// Changelog location
    pub changelog_path: PathBuf,
    /// Build the message but do not send it
    pub dry_run: bool,
}

impl NotifySettings {
    /// Resolve and validate settings
    pub fn resolve(overrides: &Overrides, config: &Config, inputs: &impl InputSource) -> Result<Self> {
        let service_name = require_input(
            INPUT_SERVICE_NAME,
            non_blank(overrides.service_name.clone())
                .or_else(|| inputs.input(INPUT_SERVICE_NAME))
                .or_else(|| non_blank(config.service_name.clone())),
        )?;

        let raw_webhook = non_blank(overrides.webhook_url.clone())
            .or_else(|| inputs.input(INPUT_WEBHOOK_URL))
            .or_else(|| non_blank(config.slack.webhook_url.clone()));

        let webhook_url = match raw_webhook {
            Some(raw) => Some(validate_webhook_url(&raw)?),
            None if overrides.dry_run => None,
            None => return Err(ConfigError::MissingField(INPUT_WEBHOOK_URL.to_string()).into()),
        };

        let repository = resolve_repository(overrides, inputs);
        let changelog_path = resolve_changelog_path(&repository, overrides, config, inputs)?;

        debug!(
            service_name = %service_name,
            changelog = %changelog_path.display(),
            dry_run = overrides.dry_run,
            "settings resolved"
        );

        Ok(Self {
            webhook_url,
            service_name,
            changelog_path,
            dry_run: overrides.dry_run,
        })
    }
}

/// Repository root: flag, then action input, then the working directory
pub fn resolve_repository(overrides: &Overrides, inputs: &impl InputSource) -> PathBuf {
    overrides
        .repository
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| inputs.input(INPUT_REPOSITORY).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Changelog path: absolute paths are kept, relative ones join the repository root
pub fn resolve_changelog_path(
    repository: &Path,
    overrides: &Overrides,
    config: &Config,
    inputs: &impl InputSource,
) -> Result<PathBuf> {
    let file = overrides
        .changelog
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| inputs.input(INPUT_CHANGELOG).map(PathBuf::from))
        .unwrap_or_else(|| config.changelog.file.clone());

    validate_changelog_path(&file)?;

    if file.is_absolute() {
        Ok(file)
    } else {
        Ok(repository.join(file))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
