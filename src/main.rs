use std::fs;
use std::io::{self, Read};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bumptag::cli::orchestration::run_bump_workflow;
use bumptag::cli::{Cli, STDIN_MARKER};
use bumptag::config;
use bumptag::git::SystemGit;
use bumptag::guard::{SignatureGuard, INTERRUPTED_EXIT_CODE};
use bumptag::ui;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with annotation or tag output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli).await {
        ui::display_error(&format!("{:#}", e));
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = config::load_config(cli.config.as_deref())?;
    let changelog = read_changelog(cli.changelog.as_deref())?;
    let args = cli.workflow_args(changelog);

    let vcs = Arc::new(SystemGit::discover(".").context("Not in a git repository")?);
    let guard = SignatureGuard::arm(Arc::clone(&vcs))?;

    let workflow = {
        let vcs = Arc::clone(&vcs);
        tokio::task::spawn_blocking(move || {
            let mut stdout = io::stdout().lock();
            run_bump_workflow(vcs.as_ref(), &args, &settings, &mut stdout)
        })
    };

    tokio::select! {
        outcome = workflow => {
            let outcome = outcome
                .context("workflow task failed")
                .and_then(|result| result.map_err(anyhow::Error::from));
            let result = guard.finish(outcome)?;
            info!(?result, "done");
            Ok(())
        }
        Ok(()) = tokio::signal::ctrl_c() => {
            warn!("Received Ctrl+C, restoring repository configuration");
            if let Err(e) = guard.disarm() {
                ui::display_error(&e.to_string());
            }
            process::exit(INTERRUPTED_EXIT_CODE)
        }
    }
}

/// Read `--changelog` text from a file, or stdin for `-`
fn read_changelog(source: Option<&str>) -> Result<Option<String>> {
    let Some(source) = source else {
        return Ok(None);
    };
    let text = if source == STDIN_MARKER {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read changelog from stdin")?;
        text
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read changelog {}", source))?
    };
    Ok(Some(text))
}
