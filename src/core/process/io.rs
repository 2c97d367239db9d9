// vkn-setup: Vulkanic Developer Setup Tool
//
// SPDX-FileCopyrightText: 2026 Vulkanic Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child() / run_child_with_cancellation()
//!   stdout/stderr reader tasks
//!   mpsc channels buffer lines
//!   wait (or cancel)
//!   --> ProcessOutput { stdout, stderr, exit_code, interrupted }
//! ```

use crate::error::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Configuration for spawning a stream reader task.
struct StreamReaderConfig {
    flags: StreamFlags,
    process_name: String,
}

/// Spawns a reader task for stdout if needed.
fn spawn_stdout_reader(
    stdout: Option<ChildStdout>,
    config: &StreamReaderConfig,
    tx: mpsc::Sender<String>,
) -> Option<JoinHandle<()>> {
    if !config
        .flags
        .intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
    {
        return None;
    }
    stdout.map(|stdout| {
        let flags = config.flags;
        let name = config.process_name.clone();
        tokio::spawn(async move {
            read_stream(stdout, flags, &name, "stdout", tx).await;
        })
    })
}

/// Spawns a reader task for stderr if needed.
fn spawn_stderr_reader(
    stderr: Option<ChildStderr>,
    config: &StreamReaderConfig,
    tx: mpsc::Sender<String>,
) -> Option<JoinHandle<()>> {
    if !config
        .flags
        .intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
    {
        return None;
    }
    stderr.map(|stderr| {
        let flags = config.flags;
        let name = config.process_name.clone();
        tokio::spawn(async move {
            read_stream(stderr, flags, &name, "stderr", tx).await;
        })
    })
}

/// Reads a stream line by line, forwarding to logs and/or the capture channel.
async fn read_stream<R>(
    stream: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
    tx: mpsc::Sender<String>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(stream).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            trace!(process = %process_name, stream = %stream_name, "{line}");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) && tx.send(line).await.is_err() {
            break;
        }
    }
}

/// Collects output from a channel into a string.
fn collect_output(rx: &mut mpsc::Receiver<String>, flags: StreamFlags) -> String {
    if !flags.contains(StreamFlags::KEEP_IN_STRING) {
        return String::new();
    }
    let mut output = String::new();
    while let Ok(line) = rx.try_recv() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&line);
    }
    output
}

/// Waits for reader tasks to complete.
async fn await_readers(
    stdout_handle: Option<JoinHandle<()>>,
    stderr_handle: Option<JoinHandle<()>>,
) {
    if let Some(handle) = stdout_handle {
        let _ = handle.await;
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.await;
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let (stdout_tx, mut stdout_rx) = mpsc::channel::<String>(100);
        let (stderr_tx, mut stderr_rx) = mpsc::channel::<String>(100);

        let stdout_config = StreamReaderConfig {
            flags: self.stdout_config().flags(),
            process_name: name.to_string(),
        };
        let stderr_config = StreamReaderConfig {
            flags: self.stderr_config().flags(),
            process_name: name.to_string(),
        };

        let stdout_handle = spawn_stdout_reader(child.stdout.take(), &stdout_config, stdout_tx);
        let stderr_handle = spawn_stderr_reader(child.stderr.take(), &stderr_config, stderr_tx);

        let exit_status = child.wait().await?;

        await_readers(stdout_handle, stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            collect_output(&mut stdout_rx, self.stdout_config().flags()),
            collect_output(&mut stderr_rx, self.stderr_config().flags()),
            false,
        ))
    }

    /// Runs the child process with cancellation support.
    pub(super) async fn run_child_with_cancellation(
        &self,
        name: &str,
        child: &mut Child,
        token: CancellationToken,
    ) -> Result<ProcessOutput> {
        let (stdout_tx, mut stdout_rx) = mpsc::channel::<String>(100);
        let (stderr_tx, mut stderr_rx) = mpsc::channel::<String>(100);

        let stdout_config = StreamReaderConfig {
            flags: self.stdout_config().flags(),
            process_name: name.to_string(),
        };
        let stderr_config = StreamReaderConfig {
            flags: self.stderr_config().flags(),
            process_name: name.to_string(),
        };

        let stdout_handle = spawn_stdout_reader(child.stdout.take(), &stdout_config, stdout_tx);
        let stderr_handle = spawn_stderr_reader(child.stderr.take(), &stderr_config, stderr_tx);

        let (exit_status, interrupted) = tokio::select! {
            status = child.wait() => (status?, false),
            () = token.cancelled() => {
                debug!(process = %name, "cancellation requested, killing process");
                child.kill().await.ok();
                (child.wait().await?, true)
            }
        };

        await_readers(stdout_handle, stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            collect_output(&mut stdout_rx, self.stdout_config().flags()),
            collect_output(&mut stderr_rx, self.stderr_config().flags()),
            interrupted,
        ))
    }
}
