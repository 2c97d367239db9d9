// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.gitmodules` parsing.
//!
//! ```text
//! [submodule "external/glfw"]
//!     path = external/glfw
//!     url = https://github.com/glfw/glfw.git
//!     branch = master        (optional)
//! ```
//!
//! Entries without a `path` are skipped with a warning; git itself ignores
//! them too. Enumeration order follows file order so updates are
//! deterministic.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{GitError, SetupResult};

/// One submodule entry from `.gitmodules`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    /// Section name (the quoted part of `[submodule "..."]`).
    pub name: String,
    /// Work-tree path relative to the repository root.
    pub path: PathBuf,
    /// Clone URL.
    pub url: String,
    /// Tracking branch, if configured.
    pub branch: Option<String>,
}

/// In-progress section state while parsing.
#[derive(Default)]
struct Section {
    name: String,
    path: Option<PathBuf>,
    url: Option<String>,
    branch: Option<String>,
}

impl Section {
    fn finish(self, out: &mut Vec<Submodule>) {
        let Some(path) = self.path else {
            if !self.name.is_empty() {
                warn!(submodule = %self.name, "entry has no path, skipping");
            }
            return;
        };
        out.push(Submodule {
            name: self.name,
            path,
            url: self.url.unwrap_or_default(),
            branch: self.branch,
        });
    }
}

/// Parse `.gitmodules` content.
///
/// # Errors
///
/// Returns a `GitError::GitmodulesParse` on malformed section headers or
/// key/value lines.
pub fn parse_gitmodules(content: &str) -> SetupResult<Vec<Submodule>> {
    let mut submodules = Vec::new();
    let mut current: Option<Section> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = idx + 1;

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            if let Some(section) = current.take() {
                section.finish(&mut submodules);
            }
            current = parse_section_header(line, line_no)?;
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(GitError::GitmodulesParse {
                line: line_no,
                message: format!("expected 'key = value', got '{line}'"),
            }
            .into());
        };

        if let Some(ref mut section) = current {
            match key.trim() {
                "path" => section.path = Some(PathBuf::from(value.trim())),
                "url" => section.url = Some(value.trim().to_string()),
                "branch" => section.branch = Some(value.trim().to_string()),
                // git allows arbitrary extra keys (update, ignore, ...)
                _ => {}
            }
        }
    }

    if let Some(section) = current {
        section.finish(&mut submodules);
    }

    Ok(submodules)
}

/// Parse a `[submodule "name"]` header. Non-submodule sections yield `None`.
fn parse_section_header(line: &str, line_no: usize) -> SetupResult<Option<Section>> {
    let Some(inner) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
        return Err(GitError::GitmodulesParse {
            line: line_no,
            message: format!("unterminated section header '{line}'"),
        }
        .into());
    };

    let Some(rest) = inner.strip_prefix("submodule") else {
        return Ok(None);
    };
    // "[submodulefoo]" is some other section, not a submodule
    if !rest.starts_with([' ', '\t', '"']) {
        return Ok(None);
    }

    let name = rest.trim();
    let Some(name) = name
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    else {
        return Err(GitError::GitmodulesParse {
            line: line_no,
            message: format!("expected quoted submodule name, got '{name}'"),
        }
        .into());
    };

    Ok(Some(Section {
        name: name.to_string(),
        ..Section::default()
    }))
}

/// Read and parse `<root>/.gitmodules`.
///
/// A missing file means the repository has no submodules configured; this
/// returns an empty list, not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_gitmodules(root: &Path) -> SetupResult<Vec<Submodule>> {
    let path = root.join(".gitmodules");
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    parse_gitmodules(&content)
}
