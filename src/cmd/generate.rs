// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project-file generation command.
//!
//! ```text
//! resolve root --> select targets --> per target: (clean) + configure
//!                  exit codes collected, never short-circuited
//!                          |
//!                          v
//!            success iff every target exited 0
//! ```
//!
//! The original setup script only ever looked at the last CMake invocation
//! when deciding what to print, and compared the process object instead of
//! its exit code, so it reported success unconditionally. Here every
//! target's exit code counts.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::cli::setup::GenerateArgs;
use crate::config::Config;
use crate::config::types::GeneratorTarget;
use crate::error::Result;
use crate::tools::cmake::CmakeTool;
use crate::tools::{Tool, ToolContext};

/// Result of one generator target's configure step.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The target that ran.
    pub target: GeneratorTarget,
    /// CMake's exit code for that target.
    pub exit_code: i32,
}

/// Main handler for the generate command.
///
/// # Errors
///
/// Returns an error if the repository root cannot be resolved, a target
/// filter matches nothing, cmake cannot be invoked at all, or any target's
/// configure step exits non-zero (reported after every target has run).
pub async fn run_generate_command(
    args: &GenerateArgs,
    config: &Config,
    dry_run: bool,
) -> Result<()> {
    let root = super::resolve_root(config)?;
    let targets = select_targets(&config.generators, &args.targets)?;

    let config = Arc::new(config.clone());
    let cancel_token = CancellationToken::new();
    let ctx = ToolContext::new(Arc::clone(&config), cancel_token.clone(), dry_run);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, interrupting generation...");
            cancel_token.cancel();
        }
    });

    info!("The following project files will be generated:");
    for target in &targets {
        info!(
            generator = %target.generator,
            architecture = %target.architecture,
            build_dir = %target.build_dir.display(),
            "  target"
        );
    }

    let mut outcomes = Vec::with_capacity(targets.len());

    for target in targets {
        let build_dir = root.join(&target.build_dir);

        let tool = CmakeTool::new()
            .source_dir(&root)
            .build_dir(&build_dir)
            .generator(&target.generator)
            .architecture(target.architecture);

        if args.clean {
            tool.clone().clean_op().run(&ctx).await?;
        }

        info!(target = %target.display_name(), "Configuring");
        let exit_code = tool.configure(&ctx).await?;

        if exit_code == 0 {
            info!(target = %target.display_name(), "Project files generated");
        } else {
            error!(
                target = %target.display_name(),
                exit_code,
                "CMake configure failed"
            );
        }

        outcomes.push(GenerationOutcome { target, exit_code });
    }

    summarize(&outcomes)
}

/// Restrict the configured targets to those matching a name filter.
///
/// A filter string matches a target when the generator name or the build
/// directory contains it. An empty filter selects everything.
fn select_targets(targets: &[GeneratorTarget], filters: &[String]) -> Result<Vec<GeneratorTarget>> {
    if filters.is_empty() {
        return Ok(targets.to_vec());
    }

    let selected: Vec<GeneratorTarget> = targets
        .iter()
        .filter(|t| filters.iter().any(|f| target_matches(t, f)))
        .cloned()
        .collect();

    anyhow::ensure!(
        !selected.is_empty(),
        "no generator target matches {:?}",
        filters
    );
    Ok(selected)
}

fn target_matches(target: &GeneratorTarget, filter: &str) -> bool {
    target.generator.contains(filter) || target.build_dir.display().to_string().contains(filter)
}

/// Combine all targets' exit codes into the final result.
fn summarize(outcomes: &[GenerationOutcome]) -> Result<()> {
    let failed: Vec<&GenerationOutcome> =
        outcomes.iter().filter(|o| o.exit_code != 0).collect();

    if failed.is_empty() {
        info!("Project files have been generated successfully");
        return Ok(());
    }

    let names: Vec<String> = failed
        .iter()
        .map(|o| format!("{} (exit code {})", o.target.display_name(), o.exit_code))
        .collect();
    anyhow::bail!("CMake could not generate all project files: {}", names.join(", "))
}
