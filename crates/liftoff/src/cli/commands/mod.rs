//! CLI commands

mod notify;
mod preview;

pub use notify::NotifyCommand;
pub use preview::PreviewCommand;

use std::path::PathBuf;

use clap::Args;

/// Where to find the changelog
#[derive(Debug, Clone, Args)]
pub struct LocationArgs {
    /// Repository root (defaults to the working directory)
    #[arg(short, long, env = "LIFTOFF_REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Changelog path, relative to the repository root unless absolute
    /// [default: docs/CHANGELOG.md]
    #[arg(long)]
    pub changelog: Option<PathBuf>,
}
