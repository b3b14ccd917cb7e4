//! # Command Execution Module / 命令执行模块
//!
//! Spawns the test executable with inherited stdio and waits for it.
//!
//! 以继承的标准输入输出派生测试可执行文件并等待其结束。

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::task::JoinHandle;

use crate::infra::t;

/// Spawns `cmd` with stdin, stdout and stderr inherited, then waits for it.
///
/// While the child runs, Ctrl-C is ignored by the launcher. The child is in
/// the same process group and receives the interrupt itself; its resulting
/// status is what gets reported back.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
/// * `program` - The program path, used for error context.
///
/// 派生 `cmd`（继承 stdin、stdout 和 stderr）并等待其结束。
/// 子进程运行期间启动器忽略 Ctrl-C；子进程会自行收到中断信号，
/// 其最终状态即为返回结果。
pub async fn run_inherited(mut cmd: tokio::process::Command, program: &Path) -> Result<ExitStatus> {
    let interrupts = match ignore_interrupts() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "could not install interrupt handler");
            None
        }
    };

    let status = match cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(mut child) => child
            .wait()
            .await
            .with_context(|| t!("launch.wait_failed", path = program.display())),
        Err(e) => Err(e).with_context(|| t!("launch.spawn_failed", path = program.display())),
    };

    if let Some(handle) = interrupts {
        handle.abort();
    }
    status
}

/// Registers the interrupt listener before returning, so there is no window
/// in which Ctrl-C still carries its default action, then drains it on a task.
fn ignore_interrupts() -> std::io::Result<JoinHandle<()>> {
    #[cfg(unix)]
    let mut interrupts =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
    #[cfg(windows)]
    let mut interrupts = tokio::signal::windows::ctrl_c()?;

    Ok(tokio::spawn(async move {
        while interrupts.recv().await.is_some() {
            tracing::debug!("interrupt received, waiting for the test executable to exit");
        }
    }))
}

/// Renders a program and its arguments as a single shell-quoted line.
///
/// Falls back to plain space-joining when an argument cannot be quoted
/// (for example, one containing a NUL byte).
pub fn render_command_line(program: &Path, args: &[OsString]) -> String {
    let parts: Vec<String> = std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| part.to_string_lossy().into_owned())
        .collect();

    shlex::try_join(parts.iter().map(String::as_str)).unwrap_or_else(|_| parts.join(" "))
}
