//! Liftoff Core - Shared foundations for the Liftoff release notifier
//!
//! This crate provides the error types and the configuration layer used by
//! the changelog parser, the Slack notifier and the CLI.

pub mod config;
pub mod error;

pub use config::{ActionInputs, Config, InputSource, NotifySettings, Overrides};
pub use error::{ChangelogError, ConfigError, DeliveryError, LiftoffError, Result};
