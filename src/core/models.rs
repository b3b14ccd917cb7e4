//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures for a single launch: the
//! `Invocation` assembled from the command line and settings, and the
//! `LaunchOutcome` reduced from the child's exit status.
//!
//! 此模块定义单次启动所用的数据结构：由命令行和设置组装而成的
//! `Invocation`，以及由子进程退出状态归约而来的 `LaunchOutcome`。

use anyhow::{Result, anyhow};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::core::config::Settings;
use crate::infra::t;

/// Prefix of the per-executable log file name.
pub const LOG_FILE_PREFIX: &str = "testLog";
/// Extension of the per-executable log file name.
pub const LOG_FILE_EXTENSION: &str = "txt";

/// Everything needed to run one test executable.
/// 运行单个测试可执行文件所需的全部信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The test binary to run / 要运行的测试二进制文件
    pub executable: PathBuf,
    /// Reporter name, appended as `-r <NAME>` / 报告器名称，以 `-r <NAME>` 追加
    pub reporter: Option<String>,
    /// Directory for the log file, appended as `-o <FILE>` / 日志目录，以 `-o <FILE>` 追加
    pub output_dir: Option<PathBuf>,
    /// Arguments forwarded unchanged / 原样转发的参数
    pub extra_args: Vec<OsString>,
}

impl Invocation {
    pub fn new(executable: impl Into<PathBuf>, extra_args: Vec<OsString>, settings: Settings) -> Self {
        Self {
            executable: executable.into(),
            reporter: settings.reporter,
            output_dir: settings.output_dir,
            extra_args,
        }
    }

    /// The log file the executable is asked to write, if an output directory is set.
    pub fn log_file_path(&self) -> Result<Option<PathBuf>> {
        match &self.output_dir {
            Some(dir) => Ok(Some(dir.join(log_file_name(&self.executable)?))),
            None => Ok(None),
        }
    }

    /// Builds the child's argument list: forwarded arguments first, then
    /// `-r <reporter>`, then `-o <log file>`.
    pub fn child_args(&self) -> Result<Vec<OsString>> {
        let mut args = self.extra_args.clone();

        if let Some(reporter) = &self.reporter {
            args.push("-r".into());
            args.push(reporter.into());
        }
        if let Some(log_file) = self.log_file_path()? {
            args.push("-o".into());
            args.push(log_file.into_os_string());
        }
        Ok(args)
    }
}

/// Derives `testLog<stem>.txt` from the executable path, where `<stem>` is
/// the file name without its last extension.
pub fn log_file_name(executable: &Path) -> Result<OsString> {
    let stem = executable
        .file_stem()
        .ok_or_else(|| anyhow!(t!("launch.no_file_name", path = executable.display())))?;

    let mut name = OsString::from(LOG_FILE_PREFIX);
    name.push(stem);
    name.push(".");
    name.push(LOG_FILE_EXTENSION);
    Ok(name)
}

/// The result of running the test executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub status: ExitStatus,
}

impl LaunchOutcome {
    pub fn new(status: ExitStatus) -> Self {
        Self { status }
    }

    /// The code the launcher should exit with.
    ///
    /// A normal exit maps to its own code. On Unix a child killed by a
    /// signal maps to `128 + signal`. Anything else becomes 1.
    pub fn exit_code(&self) -> i32 {
        if let Some(code) = self.status.code() {
            return code;
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = self.status.signal() {
                return 128 + signal;
            }
        }
        1
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (exit code {})", self.status, self.exit_code())
    }
}
