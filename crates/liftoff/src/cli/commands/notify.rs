//! Notify command

use clap::Args;
use console::style;
use tracing::{debug, info};

use liftoff_changelog::FileChangelog;
use liftoff_core::config::{load_config_or_default, resolve_repository};
use liftoff_core::{ActionInputs, NotifySettings, Overrides};
use liftoff_notify::{Pipeline, RunOutcome, SlackWebhook};

use super::LocationArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Post the newest changelog release to Slack
#[derive(Debug, Args)]
pub struct NotifyCommand {
    /// Slack incoming webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Service name shown in the announcement
    #[arg(long, env = "SERVICE_NAME")]
    pub service_name: Option<String>,

    #[command(flatten)]
    pub location: LocationArgs,

    /// Print the message instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl NotifyCommand {
    /// Execute the notify command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(dry_run = self.dry_run, "executing notify command");
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            webhook_url: self.webhook_url.clone(),
            service_name: self.service_name.clone(),
            repository: self.location.repository.clone(),
            changelog: self.location.changelog.clone(),
            dry_run: self.dry_run,
        }
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let overrides = self.overrides();
        let inputs = ActionInputs::from_env();

        let repository = resolve_repository(&overrides, &inputs);
        let (config, config_path) = load_config_or_default(&repository)?;
        debug!(repository = %repository.display(), config = ?config_path, "configuration loaded");

        let settings = NotifySettings::resolve(&overrides, &config, &inputs)?;

        let mut pipeline = Pipeline::new(
            &settings.service_name,
            FileChangelog::new(&settings.changelog_path),
        );
        if !settings.dry_run {
            if let Some(url) = settings.webhook_url.clone() {
                pipeline = pipeline.with_sender(SlackWebhook::new(url));
            }
        }

        let outcome = pipeline.run().await?;
        print_outcome(cli, &settings, &outcome)
    }
}

fn print_outcome(cli: &Cli, settings: &NotifySettings, outcome: &RunOutcome) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = match outcome {
                RunOutcome::Sent { version, .. } => serde_json::json!({
                    "status": "sent",
                    "service": settings.service_name,
                    "version": version,
                }),
                RunOutcome::DryRun { version, message } => serde_json::json!({
                    "status": "dry_run",
                    "service": settings.service_name,
                    "version": version,
                    "payload": message,
                }),
                RunOutcome::NoOp(reason) => serde_json::json!({
                    "status": "noop",
                    "reason": reason,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => match outcome {
            RunOutcome::Sent { version, .. } => {
                if !cli.quiet {
                    output::success(&format!(
                        "Announced {} {}",
                        style(&settings.service_name).bold(),
                        output::version_style().apply_to(format!("v{version}"))
                    ));
                }
            }
            RunOutcome::DryRun { version, message } => {
                if !cli.quiet {
                    output::info(&format!(
                        "Dry run for {} {}, message not sent:",
                        style(&settings.service_name).bold(),
                        output::version_style().apply_to(format!("v{version}"))
                    ));
                }
                println!("{}", serde_json::to_string_pretty(message)?);
            }
            RunOutcome::NoOp(reason) => {
                if !cli.quiet {
                    output::warning(&format!(
                        "Nothing to announce in {}: {}",
                        output::path_style().apply_to(settings.changelog_path.display()),
                        reason
                    ));
                }
            }
        },
    }

    Ok(())
}
