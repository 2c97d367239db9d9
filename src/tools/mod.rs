// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for external commands.
//!
//! ```text
//! cmd --> ToolContext --> ProcessBuilder --> Tools
//!   Git (submodules), CMake (project generation)
//! ToolContext: cancel token --> run_with_cancellation
//! ```
//!
//! All tools support graceful cancellation via `CancellationToken`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::Result;

pub mod cmake;
pub mod git;

use futures_util::future::BoxFuture;

/// Context provided to tools during execution.
///
/// Contains references to configuration, cancellation tokens, and execution flags.
#[derive(Clone)]
pub struct ToolContext {
    /// Cancellation token for cooperative cancellation.
    /// Tools should check this token periodically and abort if cancelled.
    cancel_token: CancellationToken,

    /// Whether this is a dry-run execution.
    /// When true, tools should log what they would do without making changes.
    dry_run: bool,

    /// Reference to the configuration.
    config: Arc<Config>,
}

impl ToolContext {
    /// Creates a new `ToolContext`.
    #[must_use]
    pub const fn new(config: Arc<Config>, cancel_token: CancellationToken, dry_run: bool) -> Self {
        Self {
            cancel_token,
            dry_run,
            config,
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns a reference to the cancellation token.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Checks if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Trait for tools that execute external processes.
///
/// Each tool encapsulates a specific external operation (git submodule
/// update, cmake configure, ...).
///
/// # Implementation Notes
///
/// - Tools should use `ProcessBuilder::run_with_cancellation()` for process execution
/// - Tools should respect `ctx.dry_run` and only log actions without executing
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "git", "cmake").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    ///
    /// # Arguments
    /// * `ctx` - The tool context with cancellation token and configuration
    ///
    /// # Returns
    /// * `Ok(())` if the operation completed successfully
    /// * `Err(...)` if the operation failed or was cancelled
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}
