// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::submodules::{parse_gitmodules, read_gitmodules};
use super::{is_git_repo, repo_root};

#[test]
fn test_parse_single_submodule() {
    let submodules = parse_gitmodules(
        r#"
[submodule "external/glfw"]
    path = external/glfw
    url = https://github.com/glfw/glfw.git
"#,
    )
    .unwrap();

    assert_eq!(submodules.len(), 1);
    assert_eq!(submodules[0].name, "external/glfw");
    assert_eq!(submodules[0].path, PathBuf::from("external/glfw"));
    assert_eq!(submodules[0].url, "https://github.com/glfw/glfw.git");
    assert!(submodules[0].branch.is_none());
}

#[test]
fn test_parse_multiple_submodules_keeps_order() {
    let submodules = parse_gitmodules(
        r#"
[submodule "external/glfw"]
    path = external/glfw
    url = https://github.com/glfw/glfw.git
[submodule "external/glm"]
    path = external/glm
    url = https://github.com/g-truc/glm.git
    branch = master
[submodule "external/assimp"]
    path = external/assimp
    url = https://github.com/assimp/assimp.git
"#,
    )
    .unwrap();

    let names: Vec<_> = submodules.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["external/glfw", "external/glm", "external/assimp"]
    );
    assert_eq!(submodules[1].branch.as_deref(), Some("master"));
}

#[test]
fn test_parse_empty_content() {
    assert!(parse_gitmodules("").unwrap().is_empty());
    assert!(parse_gitmodules("\n# just a comment\n").unwrap().is_empty());
}

#[test]
fn test_parse_ignores_unknown_keys_and_sections() {
    let submodules = parse_gitmodules(
        r#"
[core]
    autocrlf = false
[submodule "dep"]
    path = dep
    url = https://example.com/dep.git
    update = checkout
    ignore = dirty
"#,
    )
    .unwrap();
    assert_eq!(submodules.len(), 1);
    assert_eq!(submodules[0].name, "dep");
}

#[test]
fn test_parse_entry_without_path_is_skipped() {
    let submodules = parse_gitmodules(
        r#"
[submodule "broken"]
    url = https://example.com/broken.git
[submodule "ok"]
    path = ok
    url = https://example.com/ok.git
"#,
    )
    .unwrap();
    assert_eq!(submodules.len(), 1);
    assert_eq!(submodules[0].name, "ok");
}

#[test]
fn test_parse_malformed_header() {
    assert!(parse_gitmodules("[submodule \"x\"\npath = x\n").is_err());
    assert!(parse_gitmodules("[submodule unquoted]\npath = x\n").is_err());
}

#[test]
fn test_parse_malformed_key_value() {
    assert!(parse_gitmodules("[submodule \"x\"]\nthis is not a key value\n").is_err());
}

#[test]
fn test_read_gitmodules_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let submodules = read_gitmodules(dir.path()).unwrap();
    assert!(submodules.is_empty());
}

#[test]
fn test_read_gitmodules_from_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".gitmodules"),
        "[submodule \"dep\"]\n\tpath = dep\n\turl = https://example.com/dep.git\n",
    )
    .unwrap();
    let submodules = read_gitmodules(dir.path()).unwrap();
    assert_eq!(submodules.len(), 1);
    assert_eq!(submodules[0].path, PathBuf::from("dep"));
}

#[test]
fn test_is_git_repo_on_plain_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!is_git_repo(dir.path()));
    assert!(repo_root(dir.path()).is_err());
}
