//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `liftoff.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/liftoff.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
/// A relative `start_dir` is resolved against the working directory first.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_default();
    find_config_from(start_dir, &cwd)
}

fn find_config_from(start_dir: &Path, cwd: &Path) -> Option<PathBuf> {
    let mut current = absolute_dir(start_dir, cwd);
    debug!(start_dir = %current.display(), "searching for config file");

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// `dir` joined onto `cwd` when relative, with `.` components dropped.
///
/// `PathBuf::pop` stops at `""` for a bare `.`, so the parent walk needs an
/// absolute start.
fn absolute_dir(dir: &Path, cwd: &Path) -> PathBuf {
    let joined = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    };
    joined.components().collect()
}

/// Load configuration, or fall back to defaults when no file exists.
///
/// A file that exists but fails to parse is still an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}
