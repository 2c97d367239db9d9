// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git tool for submodule operations.
//!
//! ```text
//! GitTool
//! Operations: SubmoduleUpdate | SubmoduleSync
//! Builder: repo/path/init/recursive/jobs
//! Safety: warn on uncommitted changes in the submodule work tree
//! ```
//!
//! Uses the git CLI via `ProcessBuilder::run_with_cancellation()`: submodule
//! plumbing is the one area where shelling out beats gix, and it gives
//! real-time output streaming for long checkouts. Read-only queries go
//! through `crate::git`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info, warn};

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::ProcessBuilder;
use crate::git::has_uncommitted_changes;

/// Git operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GitOperation {
    /// Recursive, initializing update to the recorded commit.
    #[default]
    SubmoduleUpdate,
    /// Synchronize submodule remote URLs from `.gitmodules`.
    SubmoduleSync,
}

/// Git tool for submodule operations.
///
/// # Example
///
/// ```ignore
/// // Update a single submodule
/// let tool = GitTool::new()
///     .repo("./")
///     .path("external/glfw");
/// tool.run(&ctx).await?;
///
/// // Sync all submodule URLs
/// let tool = GitTool::new().repo("./").sync_op();
/// tool.run(&ctx).await?;
/// ```
#[derive(Debug, Clone)]
pub struct GitTool {
    repo: Option<PathBuf>,
    path: Option<PathBuf>,
    init: bool,
    recursive: bool,
    jobs: u32,
    operation: GitOperation,
}

impl GitTool {
    /// Creates a new `GitTool` with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            repo: None,
            path: None,
            init: true,
            recursive: true,
            jobs: 0,
            operation: GitOperation::SubmoduleUpdate,
        }
    }

    /// Sets the parent repository root.
    #[must_use]
    pub fn repo(mut self, repo: impl AsRef<Path>) -> Self {
        self.repo = Some(repo.as_ref().to_path_buf());
        self
    }

    /// Restricts the operation to one submodule path.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets whether uninitialized submodules are initialized (`--init`).
    #[must_use]
    pub const fn init(mut self, init: bool) -> Self {
        self.init = init;
        self
    }

    /// Sets whether nested submodules are updated (`--recursive`).
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the number of parallel fetch jobs. Zero lets git pick.
    #[must_use]
    pub const fn jobs(mut self, jobs: u32) -> Self {
        self.jobs = jobs;
        self
    }

    #[must_use]
    pub const fn update_op(mut self) -> Self {
        self.operation = GitOperation::SubmoduleUpdate;
        self
    }

    #[must_use]
    pub const fn sync_op(mut self) -> Self {
        self.operation = GitOperation::SubmoduleSync;
        self
    }

    fn repo_required(&self) -> Result<&Path> {
        self.repo.as_deref().context("GitTool: repo is required")
    }

    /// The argument list for the configured operation, as handed to git.
    #[must_use]
    pub fn command_args(&self) -> Vec<String> {
        let mut args = vec!["submodule".to_string()];
        match self.operation {
            GitOperation::SubmoduleUpdate => {
                args.push("update".to_string());
                if self.init {
                    args.push("--init".to_string());
                }
                if self.recursive {
                    args.push("--recursive".to_string());
                }
                if self.jobs > 0 {
                    args.push(format!("--jobs={}", self.jobs));
                }
            }
            GitOperation::SubmoduleSync => {
                args.push("sync".to_string());
                if self.recursive {
                    args.push("--recursive".to_string());
                }
            }
        }
        if let Some(ref path) = self.path {
            args.push("--".to_string());
            args.push(path.display().to_string());
        }
        args
    }

    fn git_builder(ctx: &ToolContext) -> Result<ProcessBuilder> {
        let builder = if ctx.config().tools.git.as_os_str().is_empty() {
            ProcessBuilder::which("git").context("git executable not found")?
        } else {
            ProcessBuilder::new(&ctx.config().tools.git)
        };
        // Never let git block on credential prompts
        Ok(builder
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0"))
    }

    async fn do_submodule_command(&self, ctx: &ToolContext, what: &str) -> Result<()> {
        let repo = self.repo_required()?;
        let args = self.command_args();

        if ctx.is_dry_run() {
            info!(
                repo = %repo.display(),
                cmd = %format!("git {}", args.join(" ")),
                "[dry-run] Would run git"
            );
            return Ok(());
        }

        if self.operation == GitOperation::SubmoduleUpdate
            && let Some(ref path) = self.path
        {
            let worktree = repo.join(path);
            if worktree.exists() && matches!(has_uncommitted_changes(&worktree), Ok(true)) {
                warn!(
                    submodule = %path.display(),
                    "uncommitted changes in submodule, update may discard them"
                );
            }
        }

        debug!(repo = %repo.display(), "{what}");

        let output = Self::git_builder(ctx)?
            .args(args)
            .cwd(repo)
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .with_context(|| format!("Failed to run git {what}"))?;

        if output.is_interrupted() {
            anyhow::bail!("git {what} was interrupted");
        }

        Ok(())
    }
}

impl Default for GitTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for GitTool {
    fn name(&self) -> &'static str {
        "git"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.operation {
                GitOperation::SubmoduleUpdate => {
                    self.do_submodule_command(ctx, "submodule update").await
                }
                GitOperation::SubmoduleSync => {
                    self.do_submodule_command(ctx, "submodule sync").await
                }
            }
        })
    }
}

#[cfg(test)]
mod tests;
