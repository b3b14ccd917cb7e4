//! # Configuration Module / 配置模块
//!
//! Settings reach the launcher through three layers. Highest precedence first:
//! command-line options, then the `CATCH_REPORTER` / `CATCH_OUTPUT_DIR`
//! environment variables, then an optional TOML file. An empty value at any
//! layer counts as unset.
//!
//! 设置通过三层传入启动器，优先级从高到低：命令行选项、
//! `CATCH_REPORTER` / `CATCH_OUTPUT_DIR` 环境变量、可选的 TOML 文件。
//! 任何一层中的空值都视为未设置。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::{fs::expand_home, t};

/// Environment variable holding the reporter name.
pub const REPORTER_ENV: &str = "CATCH_REPORTER";
/// Environment variable holding the log output directory.
pub const OUTPUT_DIR_ENV: &str = "CATCH_OUTPUT_DIR";

/// Represents the optional launcher configuration file.
/// 代表可选的启动器配置文件。
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Default reporter name, passed to the executable as `-r <NAME>`.
    /// 默认报告器名称，以 `-r <NAME>` 传给可执行文件。
    #[serde(default)]
    pub reporter: Option<String>,
    /// Default log directory. A leading `~` is expanded first; relative paths
    /// are then resolved against the directory containing the config file.
    /// 默认日志目录。先展开开头的 `~`，相对路径再相对于配置文件所在目录解析。
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// The language for the launcher's own messages (e.g., "en", "zh-CN").
    /// 启动器自身消息使用的语言（例如 "en", "zh-CN"）。
    #[serde(default)]
    pub language: Option<String>,
}

impl LauncherConfig {
    /// Reads and parses a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", path = path.display()))?;
        let mut config: LauncherConfig = toml::from_str(&content)
            .with_context(|| t!("config.parse_failed", path = path.display()))?;

        if let Some(dir) = config.output_dir.take() {
            let dir = expand_home(&dir);
            config.output_dir = Some(match path.parent() {
                Some(base) if dir.is_relative() => base.join(dir),
                _ => dir,
            });
        }
        Ok(config)
    }
}

/// The reporter and output directory from one layer of configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub reporter: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Builds a layer, dropping empty values so they fall through.
    pub fn new(reporter: Option<String>, output_dir: Option<PathBuf>) -> Self {
        Self {
            reporter: reporter.filter(|r| !r.is_empty()),
            output_dir: output_dir.filter(|d| !d.as_os_str().is_empty()),
        }
    }

    /// Reads the layer provided by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Reads the environment layer through `lookup`, so callers can supply
    /// something other than the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self::new(
            lookup(REPORTER_ENV).map(|r| r.to_string_lossy().into_owned()),
            lookup(OUTPUT_DIR_ENV).map(PathBuf::from),
        )
    }

    /// Fills every unset value from `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            reporter: self.reporter.or(fallback.reporter),
            output_dir: self.output_dir.or(fallback.output_dir),
        }
    }
}

impl From<&LauncherConfig> for Settings {
    fn from(config: &LauncherConfig) -> Self {
        Settings::new(config.reporter.clone(), config.output_dir.clone())
    }
}
