// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_default_file()        vkn-setup.toml in the cwd, optional
//!   .add_toml_file(path)       --config FILE, required
//!   .set("paths.root", ...)    CLI overrides, highest priority
//!        |
//!        v
//!    build()
//!      files -> VKN_* env -> overrides -> Config (validated)
//! ```
//!
//! The `VKN_*` environment layer is always applied between files and
//! overrides; it is not optional.

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// Environment variables are read as `VKN_<SECTION>_<KEY>`,
/// e.g. `VKN_GLOBAL_DRY=true` or `VKN_PATHS_ROOT=/work/vulkanic`.
const ENV_PREFIX: &str = "VKN";

/// File picked up from the working directory unless `--no-default-configs`.
pub const DEFAULT_CONFIG_FILE: &str = "vkn-setup.toml";

/// A file source added to the loader, for `configs` output.
#[derive(Debug, Clone)]
struct FileSource {
    path: PathBuf,
    required: bool,
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    files: Vec<FileSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            files: Vec::new(),
        }
    }

    /// Adds the optional `vkn-setup.toml` from the working directory.
    #[must_use]
    pub fn add_default_file(self) -> Self {
        self.add_toml_file_optional(DEFAULT_CONFIG_FILE)
    }

    /// Adds a required TOML configuration file.
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML fails the build.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(FileSource {
            path: p.to_path_buf(),
            required: true,
        });
        self
    }

    /// Adds a TOML configuration file that may be absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(FileSource {
                path: p.to_path_buf(),
                required: false,
            });
        }
        self
    }

    /// Adds inline TOML content. Not listed by `configs`.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Sets a single override, taking precedence over files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be
    /// converted to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// `VKN_*` environment variables are layered between the file sources
    /// and the `set()` overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing or has invalid TOML.
    /// - The merged configuration cannot be deserialized into `Config`.
    /// - Validation of the merged configuration fails.
    pub fn build(self) -> Result<Config> {
        let cfg = self
            .builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;
        let mut config: Config = cfg.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// Paths of the file sources that will actually be read, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }

    /// One line per file source, for the `configs` command.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let kind = if f.required { "file" } else { "optional" };
                format!("{}. [{}] {}", i + 1, kind, f.path.display())
            })
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
