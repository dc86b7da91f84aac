//! Liftoff - Announce the newest changelog release in Slack

mod cli;
mod exit_codes;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::{output, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose);

    let result = cli.execute();
    if let Err(e) = &result {
        tracing::debug!(error = %format!("{e:#}"), "liftoff failed");
        output::report_failure(&format!("{e:#}"));
    }
    ExitCode::from(exit_code(&result))
}

/// Map a command result to the process exit code
fn exit_code(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(_) => exit_codes::ERROR,
    }
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn, or debug with --verbose)
/// - File: always debug-level JSON to ~/.liftoff/logs/
fn init_tracing(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_level = if verbose { "debug" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "liftoff.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".liftoff").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> u8 {
        let cli = Cli::try_parse_from(args).unwrap();
        exit_code(&cli.execute())
    }

    #[test]
    fn test_missing_changelog_exits_with_error() {
        let temp = TempDir::new().unwrap();
        let repository = temp.path().to_string_lossy().to_string();

        let code = run(&[
            "liftoff",
            "--quiet",
            "notify",
            "--service-name",
            "billing",
            "--repository",
            &repository,
            "--changelog",
            "missing.md",
            "--dry-run",
        ]);
        assert_eq!(code, exit_codes::ERROR);
    }

    #[test]
    fn test_dry_run_exits_with_success() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("CHANGELOG.md"),
            "## [1.0.0](http://x/1.0.0)\n\n### Bug Fixes\n\n- **db:** close pool ([def](http://x/commit/def))\n",
        )
        .unwrap();
        let repository = temp.path().to_string_lossy().to_string();

        let code = run(&[
            "liftoff",
            "--quiet",
            "notify",
            "--service-name",
            "billing",
            "--repository",
            &repository,
            "--changelog",
            "CHANGELOG.md",
            "--dry-run",
        ]);
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(&Ok(())), exit_codes::SUCCESS);
        assert_eq!(exit_code(&Err(anyhow::anyhow!("boom"))), exit_codes::ERROR);
    }
}
