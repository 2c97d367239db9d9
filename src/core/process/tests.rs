// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags, StreamFlags};

#[test]
fn test_command_line_quotes_spaced_args() {
    let builder = ProcessBuilder::new("cmake")
        .arg("-G")
        .arg("Visual Studio 16 2019")
        .arg("-A")
        .arg("x64");
    assert_eq!(
        builder.command_line(),
        "cmake -G \"Visual Studio 16 2019\" -A x64"
    );
}

#[test]
fn test_builder_defaults() {
    let builder = ProcessBuilder::new("git");
    assert!(builder.args_slice().is_empty());
    assert_eq!(builder.program(), &std::path::PathBuf::from("git"));
}

#[test]
fn test_flags_default_empty() {
    let flags = ProcessFlags::default();
    assert!(!flags.contains(ProcessFlags::ALLOW_FAILURE));
}

#[test]
fn test_stream_flags_default_forwards_to_log() {
    assert_eq!(StreamFlags::default(), StreamFlags::FORWARD_TO_LOG);
}

#[test]
fn test_which_missing_executable() {
    let result = ProcessBuilder::which("definitely-not-a-real-binary-4711");
    assert!(result.is_err());
    assert!(!ProcessBuilder::exists("definitely-not-a-real-binary-4711"));
}

#[cfg(unix)]
mod spawning {
    use super::super::builder::ProcessBuilder;
    use crate::error::ProcessError;
    use tokio_util::sync::CancellationToken;

    #[tokio::test(flavor = "current_thread")]
    async fn test_run_captures_stdout() {
        let output = ProcessBuilder::new("/bin/sh")
            .arg("-c")
            .arg("echo hello")
            .capture_output()
            .run()
            .await
            .unwrap();
        assert_eq!(output.exit_code(), 0);
        assert_eq!(output.stdout().trim(), "hello");
        assert!(!output.is_interrupted());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_non_zero_exit_is_typed_error() {
        let err = ProcessBuilder::new("/bin/sh")
            .arg("-c")
            .arg("exit 3")
            .quiet()
            .run()
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::NonZeroExit { code: 3, .. })
        ));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_spawn_failure_is_typed_error() {
        let err = ProcessBuilder::new("/nonexistent/bin/tool-4711")
            .quiet()
            .run()
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::SpawnFailed { .. })
        ));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_allow_failure_returns_exit_code() {
        let output = ProcessBuilder::new("/bin/sh")
            .arg("-c")
            .arg("exit 3")
            .quiet()
            .allow_failure()
            .run()
            .await
            .unwrap();
        assert_eq!(output.exit_code(), 3);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_custom_success_codes() {
        let result = ProcessBuilder::new("/bin/sh")
            .arg("-c")
            .arg("exit 2")
            .quiet()
            .success_codes([0, 2])
            .run()
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_pre_cancelled_token_skips_spawn() {
        let token = CancellationToken::new();
        token.cancel();

        let output = ProcessBuilder::new("/bin/sh")
            .arg("-c")
            .arg("echo should-not-run")
            .capture_output()
            .run_with_cancellation(token)
            .await
            .unwrap();
        assert!(output.is_interrupted());
        assert!(output.stdout().is_empty());
    }
}
