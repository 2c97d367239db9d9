// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the setup, submodules and generate commands.
//!
//! # Flag Effects
//!
//! ```text
//! setup --no-submodules     skip the submodule phase
//! setup --no-generate       skip the generation phase
//! setup --clean             wipe build dirs before configuring
//! setup --sync              sync submodule URLs before updating
//! ```

use clap::ArgAction;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Skips the submodule update phase.
    #[arg(long = "no-submodules", action = ArgAction::SetTrue)]
    pub no_submodules: bool,

    /// Skips the project-file generation phase.
    #[arg(long = "no-generate", action = ArgAction::SetTrue)]
    pub no_generate: bool,

    /// Deletes each target's build directory before configuring.
    #[arg(long, action = ArgAction::SetTrue)]
    pub clean: bool,

    /// Synchronizes submodule remote URLs from .gitmodules before updating.
    #[arg(long, action = ArgAction::SetTrue)]
    pub sync: bool,
}

impl SetupArgs {
    /// The submodule phase arguments implied by this setup invocation.
    #[must_use]
    pub fn submodule_args(&self) -> SubmodulesArgs {
        SubmodulesArgs {
            sync: self.sync,
            jobs: None,
            paths: Vec::new(),
        }
    }

    /// The generation phase arguments implied by this setup invocation.
    #[must_use]
    pub fn generate_args(&self) -> GenerateArgs {
        GenerateArgs {
            clean: self.clean,
            targets: Vec::new(),
        }
    }
}

/// Arguments for the `submodules` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SubmodulesArgs {
    /// Synchronizes submodule remote URLs from .gitmodules before updating.
    #[arg(long, action = ArgAction::SetTrue)]
    pub sync: bool,

    /// Number of parallel fetch jobs. Overrides submodules.jobs.
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<u32>,

    /// Restricts the update to the given submodule paths.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Deletes each target's build directory before configuring.
    #[arg(long, action = ArgAction::SetTrue)]
    pub clean: bool,

    /// Restricts generation to targets whose generator name or build
    /// directory contains one of the given strings.
    #[arg(value_name = "NAME")]
    pub targets: Vec<String>,
}
