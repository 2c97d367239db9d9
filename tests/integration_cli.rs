// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use std::path::PathBuf;
use vkn_setup::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["vkn-setup", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["vkn-setup", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Setup Command
// =============================================================================

#[test]
fn cli_setup_no_args() {
    let cli = Cli::try_parse_from(["vkn-setup", "setup"]).unwrap();
    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert!(!args.no_submodules && !args.no_generate && !args.clean && !args.sync);
}

#[test]
fn cli_setup_all_flags() {
    let cli = Cli::try_parse_from([
        "vkn-setup",
        "setup",
        "--no-submodules",
        "--no-generate",
        "--clean",
        "--sync",
    ])
    .unwrap();
    let Some(Command::Setup(args)) = cli.command else {
        panic!("expected setup command");
    };
    assert!(args.no_submodules && args.no_generate && args.clean && args.sync);
}

// =============================================================================
// Submodules Command
// =============================================================================

#[test]
fn cli_submodules_paths_are_positional() {
    let cli =
        Cli::try_parse_from(["vkn-setup", "submodules", "external/glfw", "external/glm"]).unwrap();
    let Some(Command::Submodules(args)) = cli.command else {
        panic!("expected submodules command");
    };
    assert_eq!(args.paths.len(), 2);
    assert_eq!(args.paths[0], PathBuf::from("external/glfw"));
}

#[test]
fn cli_submodules_jobs_must_be_numeric() {
    let result = Cli::try_parse_from(["vkn-setup", "submodules", "--jobs", "lots"]);
    assert!(result.is_err());
}

// =============================================================================
// Generate Command
// =============================================================================

#[test]
fn cli_generate_with_filters() {
    let cli = Cli::try_parse_from(["vkn-setup", "generate", "2017", "2019"]).unwrap();
    let Some(Command::Generate(args)) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.targets, ["2017", "2019"]);
    assert!(!args.clean);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "vkn-setup",
        "--root",
        "/work/vulkanic",
        "--dry",
        "--log-file",
        "setup.log",
        "generate",
    ])
    .unwrap();
    assert_eq!(cli.global.root, Some(PathBuf::from("/work/vulkanic")));
    assert!(cli.global.dry);
    assert_eq!(cli.global.log_file, Some(PathBuf::from("setup.log")));
}

#[test]
fn cli_repeated_config_files() {
    let cli = Cli::try_parse_from([
        "vkn-setup",
        "-c",
        "base.toml",
        "-c",
        "ci.toml",
        "--no-default-configs",
        "options",
    ])
    .unwrap();
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("base.toml"), PathBuf::from("ci.toml")]
    );
    assert!(cli.global.no_default_configs);
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["vkn-setup", "install"]).is_err());
}
