//! # Catch Launcher Library / Catch Launcher 库
//!
//! This library provides the functionality behind the `catch-launcher` binary,
//! a thin wrapper that a build/test orchestrator calls to run one compiled test
//! executable. It appends reporter and log-file flags, creates the log
//! directory, runs the executable and hands back its exit code unchanged.
//!
//! 此库为 `catch-launcher` 可执行文件提供功能。它是一个轻量包装器，
//! 由构建/测试编排系统调用来运行单个已编译的测试可执行文件：
//! 追加报告器和日志文件参数、创建日志目录、运行可执行文件并原样返回其退出码。
//!
//! ## Modules / 模块
//!
//! - `core` - Invocation model, settings resolution and the launch flow
//! - `infra` - Process spawning and file system helpers
//! - `cli` - Command-line interface
//!
//! - `core` - 调用模型、设置解析和启动流程
//! - `infra` - 进程派生和文件系统辅助函数
//! - `cli` - 命令行接口

pub mod cli;
pub mod core;
pub mod infra;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Initializes the application's internationalization (i18n).
///
/// `preferred` is the language requested explicitly (via `--lang`). Without it
/// the system locale is used, and anything unsupported falls back to "en".
pub fn init(preferred: Option<&str>) {
    let locale = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    rust_i18n::set_locale(match_locale(&locale, &available_locales));
}

/// Picks the best supported locale for `locale`.
///
/// Tries the full locale first (e.g. "zh-CN"), then just the language part
/// (e.g. "en" from "en-US"), and finally falls back to "en".
pub fn match_locale<'a>(locale: &str, available: &[&'a str]) -> &'a str {
    if let Some(exact) = available.iter().find(|l| **l == locale) {
        return *exact;
    }
    locale
        .split('-')
        .next()
        .and_then(|lang_code| available.iter().find(|l| **l == lang_code))
        .copied()
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
