// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for vkn-setup.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (the two Visual Studio targets)
//! 2. vkn-setup.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. VKN_* env vars
//! 5. CLI overrides (--root, --dry, --log-level)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VKN_GLOBAL_DRY=true   → global.dry = true
//! VKN_PATHS_ROOT=/path  → paths.root = "/path"
//! VKN_TOOLS_CMAKE=/opt/cmake/bin/cmake → tools.cmake
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GeneratorTarget, GlobalConfig, PathsConfig, SubmodulesConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Submodule update behavior.
    pub submodules: SubmodulesConfig,
    /// Project-file generation targets, run in order.
    pub generators: Vec<GeneratorTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            paths: PathsConfig::default(),
            tools: ToolsConfig::default(),
            submodules: SubmodulesConfig::default(),
            generators: types::default_generators(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vkn_setup::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_default_file()
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// Called by the loader after deserialization.
    ///
    /// # Errors
    ///
    /// Returns an error if no generator target is configured, if a target is
    /// missing its generator name or build directory, or if two targets share
    /// a build directory.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.generators.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "generators".to_string(),
                key: "generator".to_string(),
            }
            .into());
        }

        let mut seen_dirs = BTreeSet::new();
        for target in &self.generators {
            if target.generator.is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "generators".to_string(),
                    key: "generator".to_string(),
                }
                .into());
            }
            if target.build_dir.as_os_str().is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "generators".to_string(),
                    key: "build_dir".to_string(),
                }
                .into());
            }
            if !seen_dirs.insert(target.build_dir.clone()) {
                return Err(ConfigError::InvalidValue {
                    section: "generators".to_string(),
                    key: "build_dir".to_string(),
                    message: format!(
                        "duplicate build directory '{}'",
                        target.build_dir.display()
                    ),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`, with generator
    /// targets appended in configuration order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry".to_string(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global.log_file.display().to_string(),
        );
        options.insert(
            "paths.root".to_string(),
            self.paths
                .root
                .as_ref()
                .map_or_else(|| "<discover>".to_string(), |p| p.display().to_string()),
        );
        options.insert("tools.git".to_string(), self.tools.git.display().to_string());
        options.insert(
            "tools.cmake".to_string(),
            self.tools.cmake.display().to_string(),
        );
        options.insert(
            "submodules.init".to_string(),
            self.submodules.init.to_string(),
        );
        options.insert(
            "submodules.recursive".to_string(),
            self.submodules.recursive.to_string(),
        );
        options.insert(
            "submodules.jobs".to_string(),
            self.submodules.jobs.to_string(),
        );

        for (i, target) in self.generators.iter().enumerate() {
            options.insert(
                format!("generators[{i}].generator"),
                target.generator.clone(),
            );
            options.insert(
                format!("generators[{i}].architecture"),
                target.architecture.to_string(),
            );
            options.insert(
                format!("generators[{i}].build_dir"),
                target.build_dir.display().to_string(),
            );
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
