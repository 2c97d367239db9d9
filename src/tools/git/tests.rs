// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::GitTool;
use crate::config::Config;
use crate::tools::{Tool, ToolContext};

#[test]
fn test_update_args_defaults() {
    let tool = GitTool::new().repo("/repo");
    assert_eq!(
        tool.command_args(),
        ["submodule", "update", "--init", "--recursive"]
    );
}

#[test]
fn test_update_args_without_init_or_recursion() {
    let tool = GitTool::new().repo("/repo").init(false).recursive(false);
    assert_eq!(tool.command_args(), ["submodule", "update"]);
}

#[test]
fn test_update_args_with_jobs_and_path() {
    let tool = GitTool::new().repo("/repo").jobs(4).path("external/glfw");
    assert_eq!(
        tool.command_args(),
        [
            "submodule",
            "update",
            "--init",
            "--recursive",
            "--jobs=4",
            "--",
            "external/glfw"
        ]
    );
}

#[test]
fn test_sync_args() {
    let tool = GitTool::new().repo("/repo").sync_op();
    assert_eq!(tool.command_args(), ["submodule", "sync", "--recursive"]);
}

#[test]
fn test_tool_name() {
    assert_eq!(GitTool::new().name(), "git");
}

#[tokio::test(flavor = "current_thread")]
async fn test_dry_run_does_not_execute() {
    let config = Arc::new(Config::default());
    let ctx = ToolContext::new(config, CancellationToken::new(), true);

    // Nonexistent repo path: a real invocation would fail to spawn
    let tool = GitTool::new().repo("/nonexistent/repo");
    assert!(tool.run(&ctx).await.is_ok());
}

#[tokio::test(flavor = "current_thread")]
async fn test_missing_repo_is_error() {
    let config = Arc::new(Config::default());
    let ctx = ToolContext::new(config, CancellationToken::new(), true);

    let tool = GitTool::new();
    assert!(tool.run(&ctx).await.is_err());
}
