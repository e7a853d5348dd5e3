//! # 进度条工具
//!
//! 封装 `indicatif`：网格计算用计数进度条，读表用 spinner。
//!
//! ## 依赖关系
//! - 被 `commands/landscape.rs`, `commands/mod.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({eta}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// 创建 spinner（用于读表等不确定进度的任务）
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
