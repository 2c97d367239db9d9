// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::Config;
use super::types::{CmakeArchitecture, GeneratorTarget};

#[test]
fn test_default_config_has_both_visual_studio_targets() {
    let config = Config::default();
    assert_eq!(config.generators.len(), 2);
    assert_eq!(config.generators[0].generator, "Visual Studio 15 2017");
    assert_eq!(
        config.generators[0].build_dir,
        PathBuf::from("build_vs_15_2017_win64")
    );
    assert_eq!(config.generators[1].generator, "Visual Studio 16 2019");
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

#[test]
fn test_default_config_validates() {
    let mut config = Config::default();
    assert!(config.resolve_and_validate().is_ok());
}

#[test]
fn test_from_toml_str_overrides_generators() {
    let config = Config::from_toml_str(
        r#"
        [[generators]]
        generator = "Visual Studio 17 2022"
        architecture = "x64"
        build_dir = "build_vs_17_2022_win64"
        "#,
    )
    .unwrap();

    assert_eq!(config.generators.len(), 1);
    assert_eq!(config.generators[0].generator, "Visual Studio 17 2022");
}

#[test]
fn test_from_toml_str_partial_sections_keep_defaults() {
    let config = Config::from_toml_str(
        r#"
        [global]
        dry = true

        [tools]
        cmake = "/opt/cmake/bin/cmake"
        "#,
    )
    .unwrap();

    assert!(config.global.dry);
    assert_eq!(config.tools.cmake, PathBuf::from("/opt/cmake/bin/cmake"));
    // untouched sections keep their defaults
    assert!(config.submodules.init);
    assert!(config.submodules.recursive);
    assert_eq!(config.generators.len(), 2);
}

#[test]
fn test_empty_generators_rejected() {
    let result = Config::from_toml_str("generators = []");
    assert!(result.is_err());
}

#[test]
fn test_duplicate_build_dirs_rejected() {
    let result = Config::from_toml_str(
        r#"
        [[generators]]
        generator = "Visual Studio 15 2017"
        build_dir = "build"

        [[generators]]
        generator = "Visual Studio 16 2019"
        build_dir = "build"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_generator_without_name_rejected() {
    let result = Config::from_toml_str(
        r#"
        [[generators]]
        build_dir = "build"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let result = Config::from_toml_str("does_not_exist = 1");
    assert!(result.is_err());
}

#[test]
fn test_architecture_parsing() {
    assert_eq!(
        "x64".parse::<CmakeArchitecture>().unwrap(),
        CmakeArchitecture::X64
    );
    assert_eq!(
        "Win32".parse::<CmakeArchitecture>().unwrap(),
        CmakeArchitecture::X86
    );
    assert!("arm64".parse::<CmakeArchitecture>().is_err());
}

#[test]
fn test_architecture_display_matches_cmake_values() {
    assert_eq!(CmakeArchitecture::X64.to_string(), "x64");
    assert_eq!(CmakeArchitecture::X86.to_string(), "Win32");
}

#[test]
fn test_generator_target_display_name() {
    let target = GeneratorTarget::new(
        "Visual Studio 16 2019",
        CmakeArchitecture::X64,
        "build_vs_16_2019_win64",
    );
    assert_eq!(target.display_name(), "Visual Studio 16 2019 (x64)");
}

#[test]
fn test_format_options_contains_generators() {
    let config = Config::default();
    let options = config.format_options();
    assert!(
        options
            .iter()
            .any(|line| line.contains("generators[0].generator") && line.contains("2017"))
    );
    assert!(
        options
            .iter()
            .any(|line| line.contains("paths.root") && line.contains("<discover>"))
    );
}

#[test]
fn test_string_sources_are_not_listed() {
    let loader = Config::builder().add_toml_str("[global]\ndry = false");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.format_loaded_files().is_empty());
}

#[test]
fn test_missing_default_file_is_not_listed() {
    // no vkn-setup.toml in the test working directory
    let loader = Config::builder().add_default_file();
    assert!(loader.loaded_files().is_empty());
}
