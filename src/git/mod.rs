// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only git queries and `.gitmodules` parsing.
//!
//! ```text
//! query: gix --> .git/ (no subprocess)
//!   is_git_repo / repo_root / has_uncommitted_changes
//! submodules: .gitmodules --> [Submodule { name, path, url, branch }]
//! ```
//!
//! Mutations (submodule sync/update, cmake invocations) go through the
//! `tools` module, which shells out with cancellation support.

pub mod submodules;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::error::{GitError, GixError, SetupResult};

pub use submodules::{Submodule, parse_gitmodules, read_gitmodules};

/// Check if path is inside a git work tree.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    gix::discover(path).is_ok()
}

/// Discover the repository containing `path` and return its work-tree root.
///
/// # Errors
///
/// Returns a `GitError` if no repository is found or the repository is bare.
pub fn repo_root(path: &Path) -> SetupResult<PathBuf> {
    let repo = gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| GitError::Gix(GixError::BareRepository).into())
}

/// Check for uncommitted changes (staged, unstaged, or untracked files).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or status check fails.
pub fn has_uncommitted_changes(path: &Path) -> SetupResult<bool> {
    use gix::status::UntrackedFiles;

    let repo = gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;

    let has_changes = repo
        .status(gix::progress::Discard)
        .map_err(|_| GitError::CommandFailed {
            command: "status".to_string(),
            message: "failed to prepare status check".to_string(),
        })?
        .untracked_files(UntrackedFiles::Files)
        .into_iter(None)
        .map_err(|_| GitError::CommandFailed {
            command: "status".to_string(),
            message: "failed to check repository status".to_string(),
        })?
        .next()
        .is_some();

    Ok(has_changes)
}
