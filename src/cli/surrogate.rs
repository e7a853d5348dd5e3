//! # surrogate 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/surrogate.rs`

use crate::utils::range::parse_range_arg;

use clap::Args;
use std::path::PathBuf;

/// surrogate 子命令参数
#[derive(Args, Debug)]
pub struct SurrogateArgs {
    /// Precomputed prediction table (N, Z, baseline, mean, band)
    #[arg(short, long)]
    pub table: PathBuf,

    /// Proton number of the isotopic chain
    #[arg(short = 'z', long)]
    pub protons: u32,

    /// Neutron range (e.g., "60-90"); defaults to the table coverage
    #[arg(short, long, value_parser = parse_range_arg)]
    pub range: Option<(u32, u32)>,
}
