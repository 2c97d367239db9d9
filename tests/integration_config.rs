// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Exercises the layered loader with real files on disk.

use std::fs;
use std::path::PathBuf;

use vkn_setup::config::Config;
use vkn_setup::config::types::CmakeArchitecture;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn default_config_carries_both_visual_studio_targets() {
    let config = Config::default();
    assert_eq!(config.generators.len(), 2);
    assert_eq!(
        config.generators[0].build_dir,
        PathBuf::from("build_vs_15_2017_win64")
    );
    assert_eq!(
        config.generators[1].build_dir,
        PathBuf::from("build_vs_16_2019_win64")
    );
    assert!(
        config
            .generators
            .iter()
            .all(|t| t.architecture == CmakeArchitecture::X64)
    );
}

// =============================================================================
// File Loading
// =============================================================================

#[test]
fn load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vkn-setup.toml");
    fs::write(
        &path,
        r#"
[global]
dry = true

[tools]
cmake = "/opt/cmake/bin/cmake"

[[generators]]
generator = "Ninja"
architecture = "x64"
build_dir = "build_ninja"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.global.dry);
    assert_eq!(config.tools.cmake, PathBuf::from("/opt/cmake/bin/cmake"));
    assert_eq!(config.generators.len(), 1);
    assert_eq!(config.generators[0].generator, "Ninja");
}

#[test]
fn missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("nonexistent.toml"));
    assert!(result.is_err());
}

#[test]
fn missing_optional_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .add_toml_file_optional(dir.path().join("nonexistent.toml"))
        .build()
        .unwrap();
    assert_eq!(config.generators.len(), 2);
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn later_file_overrides_earlier_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let over = dir.path().join("override.toml");
    fs::write(&base, "[submodules]\njobs = 4\n").unwrap();
    fs::write(&over, "[submodules]\njobs = 8\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&over)
        .build()
        .unwrap();
    assert_eq!(config.submodules.jobs, 8);
}

#[test]
fn set_override_beats_file_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("base.toml");
    fs::write(&path, "[global]\ndry = false\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&path)
        .set("global.dry", true)
        .unwrap()
        .build()
        .unwrap();
    assert!(config.global.dry);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn duplicate_build_dirs_rejected_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.toml");
    fs::write(
        &path,
        r#"
[[generators]]
generator = "Visual Studio 15 2017"
build_dir = "build"

[[generators]]
generator = "Visual Studio 16 2019"
build_dir = "build"
"#,
    )
    .unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn unknown_section_rejected() {
    assert!(Config::from_toml_str("[nonsense]\nfoo = 1\n").is_err());
}

// =============================================================================
// Loaded File Tracking
// =============================================================================

#[test]
fn loader_reports_loaded_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.toml");
    let b = dir.path().join("b.toml");
    fs::write(&a, "").unwrap();
    fs::write(&b, "").unwrap();

    let loader = Config::builder()
        .add_toml_file(&a)
        .add_toml_file_optional(&b)
        .add_toml_file_optional(dir.path().join("absent.toml"));

    let files = loader.loaded_files();
    assert_eq!(files, [a, b]);

    let formatted = loader.format_loaded_files();
    assert!(formatted[0].starts_with("1. [file]"));
    assert!(formatted[1].starts_with("2. [optional]"));
}
