//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the launcher:
//! settings resolution, the invocation model and the launch flow.
//!
//! 此模块包含启动器的核心功能：
//! 设置解析、调用模型和启动流程。

pub mod config;
pub mod execution;
pub mod models;

// Re-exports
pub use config::{LauncherConfig, Settings};
pub use execution::launch;
pub use models::{Invocation, LaunchOutcome};
