// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, ProcessError, SetupError, SetupResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "root".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "missing required config key 'root' in section '[paths]'"
    );
}

#[test]
fn test_git_error_display() {
    let err = GitError::CommandFailed {
        command: "submodule update".to_string(),
        message: "exit code 128".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "git command failed: submodule update - exit code 128"
    );
}

#[test]
fn test_process_error_display() {
    let err = ProcessError::NonZeroExit {
        command: "cmake".to_string(),
        code: 1,
    };
    assert_eq!(err.to_string(), "process 'cmake' exited with code 1");
}

#[test]
fn test_boxed_conversion() {
    let err: SetupError = GitError::SubmoduleNotFound {
        path: "external/glfw".to_string(),
    }
    .into();
    assert!(matches!(err, SetupError::Git(_)));
}

#[test]
fn test_setup_error_size() {
    // every variant carries one Box: pointer plus tag
    let size = std::mem::size_of::<SetupError>();
    assert!(size <= 16, "SetupError is {size} bytes, expected <= 16");
}

#[test]
fn test_setup_result_size() {
    let size = std::mem::size_of::<SetupResult<()>>();
    assert!(size <= 16, "SetupResult<()> is {size} bytes, expected <= 16");
}
