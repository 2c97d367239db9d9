// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Full setup command: submodules, then generation.
//!
//! The ordering is fixed. A submodule failure aborts the run before any
//! project files are generated.

use tracing::info;

use crate::cli::setup::SetupArgs;
use crate::config::Config;
use crate::error::Result;

use super::generate::run_generate_command;
use super::submodules::run_submodules_command;

/// Main handler for the setup command.
///
/// # Errors
///
/// Returns an error if either phase fails; generation is not attempted
/// when the submodule phase fails.
pub async fn run_setup_command(args: &SetupArgs, config: &Config, dry_run: bool) -> Result<()> {
    if args.no_submodules {
        info!("Skipping submodule update");
    } else {
        run_submodules_command(&args.submodule_args(), config, dry_run).await?;
    }

    if args.no_generate {
        info!("Skipping project-file generation");
    } else {
        run_generate_command(&args.generate_args(), config, dry_run).await?;
    }

    info!("Setup finished");
    Ok(())
}
