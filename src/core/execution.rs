//! # Launch Module / 启动模块
//!
//! This module runs one test executable: it prepares the log directory,
//! builds the child's command line and waits for the child to exit.
//!
//! 此模块运行单个测试可执行文件：准备日志目录、
//! 构建子进程命令行并等待子进程退出。

use anyhow::Result;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::{
    core::models::{Invocation, LaunchOutcome},
    infra::{command, fs},
};

/// The program and arguments that will be run, computed without touching
/// the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchPlan {
    pub fn for_invocation(invocation: &Invocation) -> Result<Self> {
        Ok(Self {
            program: invocation.executable.clone(),
            args: invocation.child_args()?,
        })
    }

    /// The shell-quoted command line, for display.
    pub fn command_line(&self) -> String {
        command::render_command_line(&self.program, &self.args)
    }
}

/// Runs the test executable described by `invocation`.
///
/// The output directory is created before the child starts. Failing to
/// create it is fatal and the child is never run.
pub async fn launch(invocation: &Invocation) -> Result<LaunchOutcome> {
    let plan = LaunchPlan::for_invocation(invocation)?;

    if let Some(dir) = &invocation.output_dir {
        fs::ensure_dir(dir)?;
    }

    tracing::debug!(command = %plan.command_line(), "launching test executable");

    let mut cmd = tokio::process::Command::new(&plan.program);
    cmd.args(&plan.args);

    let status = command::run_inherited(cmd, &plan.program).await?;
    let outcome = LaunchOutcome::new(status);

    tracing::debug!(%outcome, "test executable finished");
    Ok(outcome)
}
