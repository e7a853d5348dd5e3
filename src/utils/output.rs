//! # 美化输出工具
//!
//! 提供统一的终端输出样式：状态行、标题栏、物理量结果行。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::models::{Quantity, QuantityResult};

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印缺失数据（不是错误）
pub fn print_unavailable(msg: &str) {
    println!("{} {}", "[N/A]".dimmed(), msg.dimmed());
}

/// 打印单个物理量结果，如 "EXP Binding Energy: -127.6193 MeV"
pub fn print_quantity(model: &str, quantity: Quantity, result: &QuantityResult) {
    match result {
        Ok(value) => println!(
            "{} {} {}: {} {}",
            "[=]".cyan().bold(),
            model.bold(),
            quantity.display_name(),
            format!("{:.4}", value).bold(),
            quantity.unit()
        ),
        Err(reason) => print_unavailable(&reason.to_string()),
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
