// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   setup, submodules, generate, options, configs
//! ```

pub mod config;
pub mod generate;
pub mod setup;
pub mod submodules;

use std::path::PathBuf;

use anyhow::Context;

use crate::config::Config;
use crate::error::Result;

/// Resolve the repository root for a run.
///
/// Uses `paths.root` when configured, otherwise discovers the enclosing
/// repository's work tree from the current directory.
///
/// # Errors
///
/// Returns an error if the configured root does not exist, or if discovery
/// fails because the current directory is not inside a git repository.
pub(crate) fn resolve_root(config: &Config) -> Result<PathBuf> {
    if let Some(ref root) = config.paths.root {
        anyhow::ensure!(
            root.is_dir(),
            "configured paths.root does not exist: {}",
            root.display()
        );
        return Ok(root.clone());
    }

    let cwd = std::env::current_dir().context("failed to get current directory")?;
    crate::git::repo_root(&cwd)
        .with_context(|| format!("not inside a git repository: {}", cwd.display()))
}
