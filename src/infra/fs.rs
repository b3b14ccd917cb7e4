//! # File System Operations Module / 文件系统操作模块
//!
//! Helpers for preparing the log output directory.
//!
//! 用于准备日志输出目录的辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Creates `dir` and any missing parents.
///
/// An existing directory is left untouched, so two launchers racing on the
/// same directory both succeed. A file at `dir` is an error.
///
/// # Arguments
/// * `dir` - Directory to create
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if is_directory(dir) {
        return Ok(());
    }
    tracing::debug!(path = %dir.display(), "creating output directory");
    fs::create_dir_all(dir).with_context(|| t!("launch.create_dir_failed", path = dir.display()))
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}
