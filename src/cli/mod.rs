// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vkn-setup using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! vkn-setup [global options] <command>
//! setup [--no-submodules] [--no-generate] [--clean] [--sync]
//! submodules [--sync] [--jobs N] [PATH]...
//! generate [--clean] [NAME]...
//! options
//! configs
//! ```

pub mod global;
pub mod setup;


use crate::cli::global::GlobalOptions;
use crate::cli::setup::{GenerateArgs, SetupArgs, SubmodulesArgs};
use clap::{Parser, Subcommand};

/// Vulkanic Developer Setup Tool
///
/// Prepares a Vulkanic working copy for development.
#[derive(Debug, Parser)]
#[command(
    name = "vkn-setup",
    author,
    version,
    about = "Vulkanic Developer Setup Tool",
    long_about = "Prepares a Vulkanic working copy for development: checks out\n\
                  the git submodules the renderer depends on (GLFW, GLM, Assimp,\n\
                  ...) and generates Visual Studio project files with CMake, once\n\
                  per configured generator target.\n\n\
                  Run `vkn-setup setup` from anywhere inside the repository to do\n\
                  both steps. See `vkn-setup <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, vkn-setup looks for `vkn-setup.toml` in the current\n\
                  directory. Additional files can be specified with --config;\n\
                  those are loaded afterwards and override the defaults. Settings\n\
                  can also come from VKN_* environment variables and command-line\n\
                  flags, which take precedence over all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by vkn-setup.
    Configs,

    /// Updates submodules, then generates project files.
    Setup(SetupArgs),

    /// Updates the repository's git submodules.
    Submodules(SubmodulesArgs),

    /// Generates project files for every configured generator target.
    Generate(GenerateArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
