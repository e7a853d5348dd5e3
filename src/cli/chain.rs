//! # chain 子命令 CLI 定义
//!
//! 多个 `--fixed` 与多个 `--model` 组合成多条独立系列。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/chain.rs`

use crate::aggregate::ChainKind;
use crate::cli::{parse_chain_kind, parse_quantity};
use crate::models::Quantity;
use crate::utils::range::parse_range_arg;

use clap::Args;
use std::path::PathBuf;

/// chain 子命令参数
#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Chain type: isotopic (fixed Z), isotonic (fixed N) or isobaric (fixed A)
    #[arg(short, long, default_value = "isotopic", value_parser = parse_chain_kind)]
    pub kind: ChainKind,

    /// Fixed Z / N / A of the chain (repeatable)
    #[arg(short, long, required = true, num_args = 1..)]
    pub fixed: Vec<u32>,

    /// Quantity code
    #[arg(short, long, default_value = "BE", value_parser = parse_quantity)]
    pub quantity: Quantity,

    /// Mass model / dataset name (repeatable)
    #[arg(short, long = "model", default_value = "EXP", num_args = 1..)]
    pub models: Vec<String>,

    /// Wigner adjustment key (0 = none)
    #[arg(short, long, default_value_t = 0)]
    pub wigner: u8,

    /// Restrict the varying number to an inclusive range (e.g., "20-40")
    #[arg(short, long, value_parser = parse_range_arg)]
    pub range: Option<(u32, u32)>,

    /// Write all series to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
