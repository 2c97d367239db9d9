// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` tool for project-file generation.
//!
//! ```text
//! CmakeTool
//! Operations: Configure | Clean
//! Builder: source_dir/build_dir/generator/architecture/definition
//! Configure never fails the run by itself: callers inspect the exit code
//! so every target gets its turn.
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tokio::fs;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::config::types::CmakeArchitecture;
use crate::core::process::ProcessBuilder;

/// `CMake` operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CmakeOperation {
    /// Configure a `CMake` build directory (generate project files).
    #[default]
    Configure,
    /// Clean the build directory.
    Clean,
}

/// `CMake` tool for configure/clean operations.
#[derive(Debug, Clone)]
pub struct CmakeTool {
    source_dir: Option<PathBuf>,
    build_dir: Option<PathBuf>,
    generator: Option<String>,
    architecture: Option<CmakeArchitecture>,
    definitions: BTreeMap<String, String>,
    operation: CmakeOperation,
}

impl CmakeTool {
    /// Creates a new `CmakeTool` with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source_dir: None,
            build_dir: None,
            generator: None,
            architecture: None,
            definitions: BTreeMap::new(),
            operation: CmakeOperation::Configure,
        }
    }

    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn build_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.build_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    #[must_use]
    pub const fn architecture(mut self, architecture: CmakeArchitecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    #[must_use]
    pub fn definition(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.definitions.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn configure_op(mut self) -> Self {
        self.operation = CmakeOperation::Configure;
        self
    }

    #[must_use]
    pub const fn clean_op(mut self) -> Self {
        self.operation = CmakeOperation::Clean;
        self
    }

    fn build_dir_required(&self) -> Result<&Path> {
        self.build_dir
            .as_deref()
            .context("CmakeTool: build_dir is required")
    }

    fn source_dir_required(&self) -> Result<&Path> {
        self.source_dir
            .as_deref()
            .context("CmakeTool: source_dir is required")
    }

    /// The argument list for a configure invocation, as handed to cmake.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_dir` or `build_dir` is missing.
    pub fn configure_args(&self) -> Result<Vec<String>> {
        let source = self.source_dir_required()?;
        let build = self.build_dir_required()?;

        let mut args = vec![
            "-S".to_string(),
            source.display().to_string(),
            "-B".to_string(),
            build.display().to_string(),
        ];

        if let Some(ref generator) = self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }

        if let Some(architecture) = self.architecture {
            args.push("-A".to_string());
            args.push(architecture.as_str().to_string());
        }

        for (key, value) in &self.definitions {
            args.push(format!("-D{key}={value}"));
        }

        Ok(args)
    }

    fn cmake_builder(ctx: &ToolContext) -> Result<ProcessBuilder> {
        if ctx.config().tools.cmake.as_os_str().is_empty() {
            Ok(ProcessBuilder::which("cmake").context("cmake executable not found")?)
        } else {
            Ok(ProcessBuilder::new(&ctx.config().tools.cmake))
        }
    }

    /// Runs the configure step and returns the cmake exit code.
    ///
    /// Exit codes are reported, not turned into errors: the caller decides
    /// how to combine the results of several targets. Dry runs report 0.
    ///
    /// # Errors
    ///
    /// Returns an error if cmake cannot be found or spawned, or if the run
    /// is interrupted.
    pub async fn configure(&self, ctx: &ToolContext) -> Result<i32> {
        let args = self.configure_args()?;

        if ctx.is_dry_run() {
            info!(
                generator = ?self.generator,
                architecture = self.architecture.map(CmakeArchitecture::as_str),
                build = ?self.build_dir,
                "[dry-run] Would configure CMake"
            );
            return Ok(0);
        }

        debug!("Configuring CMake");

        let output = Self::cmake_builder(ctx)?
            .args(args)
            .allow_failure()
            .run_with_cancellation(ctx.cancel_token().clone())
            .await
            .context("Failed to run CMake configure")?;

        if output.is_interrupted() {
            anyhow::bail!("CMake configure was interrupted");
        }

        Ok(output.exit_code())
    }

    async fn do_clean(&self, ctx: &ToolContext) -> Result<()> {
        let build = self.build_dir_required()?;

        if ctx.is_dry_run() {
            info!(build = %build.display(), "[dry-run] Would clean build directory");
            return Ok(());
        }

        if build.exists() {
            fs::remove_dir_all(build)
                .await
                .with_context(|| format!("Failed to clean build directory: {}", build.display()))?;
        }

        info!(build = %build.display(), "Build directory cleaned");
        Ok(())
    }
}

impl Default for CmakeTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CmakeTool {
    fn name(&self) -> &'static str {
        "cmake"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.operation {
                CmakeOperation::Configure => {
                    let code = self.configure(ctx).await?;
                    if code != 0 {
                        anyhow::bail!("CMake configure exited with code {code}");
                    }
                    Ok(())
                }
                CmakeOperation::Clean => self.do_clean(ctx).await,
            }
        })
    }
}
