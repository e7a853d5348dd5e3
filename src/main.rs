//! # bmex - 核质量模型命令行工具
//!
//! ## 子命令
//! - `single` - 单个核素的物理量
//! - `chain` - 同位素 / 同中子素 / 同量异位素链
//! - `landscape` - 全核素图网格
//! - `models` - 列出质量表中的模型
//! - `surrogate` - 代理模型预测
//!
//! ## 依赖关系
//! - 使用 `bmex::cli` 解析参数，`bmex::commands` 执行

use bmex::cli::Cli;
use bmex::{commands, utils};
use clap::Parser;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
