// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for vkn-setup.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ToolsConfig, SubmodulesConfig,
//!         generators: [GeneratorTarget]
//! ```
//!
//! # Architecture
//!
//! ```text
//! CmakeArchitecture: X86 (Win32) | X64 (default)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Target architecture passed to `CMake` via `-A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CmakeArchitecture {
    /// 32-bit x86 (Win32).
    X86,
    /// 64-bit x86-64.
    #[default]
    X64,
}

impl CmakeArchitecture {
    /// The value `CMake` expects after `-A`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "Win32",
            Self::X64 => "x64",
        }
    }
}

impl std::fmt::Display for CmakeArchitecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CmakeArchitecture {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x86" | "win32" => Ok(Self::X86),
            "x64" | "x86_64" | "amd64" => Ok(Self::X64),
            _ => Err(ConfigError::InvalidValue {
                section: "generators".to_string(),
                key: "architecture".to_string(),
                message: format!("expected 'x86' or 'x64', got '{s}'"),
            }),
        }
    }
}

/// One project-file generation target: a `CMake` generator, an architecture
/// and the build directory the project files land in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorTarget {
    /// `CMake` generator identifier, e.g. `Visual Studio 16 2019`.
    pub generator: String,
    /// Architecture passed via `-A`.
    pub architecture: CmakeArchitecture,
    /// Build directory, relative to the repository root.
    pub build_dir: PathBuf,
}

impl Default for GeneratorTarget {
    fn default() -> Self {
        Self {
            generator: String::new(),
            architecture: CmakeArchitecture::X64,
            build_dir: PathBuf::new(),
        }
    }
}

impl GeneratorTarget {
    /// Creates a target from its three parts.
    pub fn new(
        generator: impl Into<String>,
        architecture: CmakeArchitecture,
        build_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator: generator.into(),
            architecture,
            build_dir: build_dir.into(),
        }
    }

    /// Display name used in logs and reports.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.generator, self.architecture)
    }
}

/// The two targets the Vulkanic project has always generated.
#[must_use]
pub fn default_generators() -> Vec<GeneratorTarget> {
    vec![
        GeneratorTarget::new(
            "Visual Studio 15 2017",
            CmakeArchitecture::X64,
            "build_vs_15_2017_win64",
        ),
        GeneratorTarget::new(
            "Visual Studio 16 2019",
            CmakeArchitecture::X64,
            "build_vs_16_2019_win64",
        ),
    ]
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Simulate external invocations without running them.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables the file layer.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::INFO,
            log_file: PathBuf::new(),
        }
    }
}

/// Paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Repository root. When unset, the root is discovered from the
    /// current directory via git.
    pub root: Option<PathBuf>,
}

/// External tool paths. Empty values mean PATH lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to the git executable.
    pub git: PathBuf,
    /// Path to the cmake executable.
    pub cmake: PathBuf,
}

/// Submodule update behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmodulesConfig {
    /// Initialize submodules that have not been checked out yet.
    pub init: bool,
    /// Recurse into nested submodules.
    pub recursive: bool,
    /// Parallel fetch jobs (`--jobs`). Zero lets git pick.
    pub jobs: u32,
}

impl Default for SubmodulesConfig {
    fn default() -> Self {
        Self {
            init: true,
            recursive: true,
            jobs: 0,
        }
    }
}
