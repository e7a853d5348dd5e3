//! # single 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/single.rs`

use clap::Args;

/// single 子命令参数
#[derive(Args, Debug)]
pub struct SingleArgs {
    /// Neutron number
    #[arg(short = 'n', long)]
    pub neutrons: u32,

    /// Proton number
    #[arg(short = 'z', long)]
    pub protons: u32,

    /// Quantity code (BE, OneNSE, TwoNSGap, WignerEC, ...) or 'all'
    #[arg(short, long, default_value = "all")]
    pub quantity: String,

    /// Mass model / dataset name
    #[arg(short, long, default_value = "EXP")]
    pub model: String,

    /// Wigner adjustment key (0 = none)
    #[arg(short, long, default_value_t = 0)]
    pub wigner: u8,
}
