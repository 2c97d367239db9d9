// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule update command.
//!
//! ```text
//! resolve root --> read .gitmodules --> (sync) --> update each, 1/n .. n/n
//! ```
//!
//! A repository with zero configured submodules is fine: the step reports
//! completion and succeeds. Any git failure propagates and aborts the run.

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::setup::SubmodulesArgs;
use crate::config::Config;
use crate::error::{GitError, Result};
use crate::git::{Submodule, read_gitmodules};
use crate::tools::git::GitTool;
use crate::tools::{Tool, ToolContext};

/// Main handler for the submodules command.
///
/// # Errors
///
/// Returns an error if the repository root cannot be resolved, a requested
/// path is not a configured submodule, or any git invocation fails.
pub async fn run_submodules_command(
    args: &SubmodulesArgs,
    config: &Config,
    dry_run: bool,
) -> Result<()> {
    let root = super::resolve_root(config)?;
    let submodules = read_gitmodules(&root)?;
    let selected = select_submodules(&submodules, &args.paths)?;

    let config = Arc::new(config.clone());
    let cancel_token = CancellationToken::new();
    let ctx = ToolContext::new(Arc::clone(&config), cancel_token.clone(), dry_run);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, interrupting submodule update...");
            cancel_token.cancel();
        }
    });

    if args.sync && !selected.is_empty() {
        info!("Synchronizing submodule URLs");
        GitTool::new()
            .repo(&root)
            .recursive(config.submodules.recursive)
            .sync_op()
            .run(&ctx)
            .await?;
    }

    let jobs = args.jobs.unwrap_or(config.submodules.jobs);
    let total = selected.len();

    for (i, submodule) in selected.iter().enumerate() {
        info!(
            progress = %format!("{}/{total}", i + 1),
            submodule = %submodule.path.display(),
            "Updating submodule"
        );
        GitTool::new()
            .repo(&root)
            .path(&submodule.path)
            .init(config.submodules.init)
            .recursive(config.submodules.recursive)
            .jobs(jobs)
            .update_op()
            .run(&ctx)
            .await?;
    }

    if total == 0 {
        info!("No submodules configured");
    }
    info!("Finished updating submodules");
    Ok(())
}

/// Restrict the configured submodules to the requested paths.
///
/// An empty request selects everything. Order follows `.gitmodules`.
fn select_submodules(submodules: &[Submodule], paths: &[PathBuf]) -> Result<Vec<Submodule>> {
    if paths.is_empty() {
        return Ok(submodules.to_vec());
    }

    for path in paths {
        if !submodules.iter().any(|s| &s.path == path) {
            return Err(GitError::SubmoduleNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
    }

    Ok(submodules
        .iter()
        .filter(|s| paths.contains(&s.path))
        .cloned()
        .collect())
}
