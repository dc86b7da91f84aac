//! Preview command

use clap::Args;
use console::style;
use tracing::info;

use liftoff_changelog::{parse_latest_release, ChangelogSource, FileChangelog, Release};
use liftoff_core::config::{load_config_or_default, resolve_changelog_path, resolve_repository};
use liftoff_core::{ActionInputs, Overrides};

use super::LocationArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Show what the newest changelog release parses to
#[derive(Debug, Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub location: LocationArgs,
}

impl PreviewCommand {
    /// Execute the preview command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing preview command");
        let overrides = Overrides {
            repository: self.location.repository.clone(),
            changelog: self.location.changelog.clone(),
            ..Default::default()
        };
        let inputs = ActionInputs::from_env();

        let repository = resolve_repository(&overrides, &inputs);
        let (config, _) = load_config_or_default(&repository)?;
        let path = resolve_changelog_path(&repository, &overrides, &config, &inputs)?;

        let runtime = tokio::runtime::Runtime::new()?;
        let text = runtime.block_on(FileChangelog::new(&path).load())?;

        match (parse_latest_release(&text), cli.format) {
            (Ok(release), OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(&release)?);
            }
            (Ok(release), OutputFormat::Text) => print_release(&release),
            (Err(reason), OutputFormat::Json) => {
                let output = serde_json::json!({ "status": "noop", "reason": reason });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            (Err(reason), OutputFormat::Text) => {
                if !cli.quiet {
                    output::warning(&format!(
                        "No release found in {}: {}",
                        output::path_style().apply_to(path.display()),
                        reason
                    ));
                }
            }
        }

        Ok(())
    }
}

fn print_release(release: &Release) {
    println!(
        "{} {} {}",
        output::version_style().apply_to(format!("v{}", release.header.version)),
        style(format!("({} commits)", release.commit_count())).dim(),
        style(&release.header.url).dim()
    );

    for section in &release.sections {
        println!();
        println!("{}", output::header(&section.heading));
        if section.is_empty() {
            println!("  {}", style("(no commits)").dim());
        }
        for commit in &section.commits {
            println!(
                "  • {}: {} {}",
                style(&commit.commit_type).bold(),
                commit.message.replace('\n', ""),
                style(&commit.hash).dim()
            );
        }
    }
}
