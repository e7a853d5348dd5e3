//! # landscape 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/landscape.rs`

use crate::cli::parse_quantity;
use crate::models::Quantity;

use clap::Args;
use std::path::PathBuf;

/// landscape 子命令参数
#[derive(Args, Debug)]
pub struct LandscapeArgs {
    /// Quantity code
    #[arg(short, long, default_value = "BE", value_parser = parse_quantity)]
    pub quantity: Quantity,

    /// Mass model / dataset name
    #[arg(short, long, default_value = "EXP")]
    pub model: String,

    /// Wigner adjustment key (0 = none)
    #[arg(short, long, default_value_t = 0)]
    pub wigner: u8,

    /// Grid step in N and Z
    #[arg(short, long, default_value_t = 2)]
    pub step: u32,

    /// Largest neutron number to scan
    #[arg(long, default_value_t = 156)]
    pub n_max: u32,

    /// Largest proton number to scan
    #[arg(long, default_value_t = 120)]
    pub z_max: u32,

    /// Write populated cells to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
