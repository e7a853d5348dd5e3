//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `single`: 单个核素的物理量
//! - `chain`: 同位素 / 同中子素 / 同量异位素链
//! - `landscape`: 全核素图网格
//! - `models`: 列出已加载的模型
//! - `surrogate`: 代理模型预测链
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: single, chain, landscape, surrogate

pub mod chain;
pub mod landscape;
pub mod single;
pub mod surrogate;

use crate::aggregate::ChainKind;
use crate::models::Quantity;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// BMEX - 核质量模型数据浏览工具
#[derive(Parser)]
#[command(name = "bmex")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Explore derived nuclear mass observables across mass models", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate quantities for a single nucleus
    Single(single::SingleArgs),

    /// Evaluate a quantity along an isotopic, isotonic or isobaric chain
    Chain(chain::ChainArgs),

    /// Evaluate a quantity over the whole nuclear chart
    Landscape(landscape::LandscapeArgs),

    /// List models available in the mass table
    Models,

    /// Show surrogate (GP/emulator) predictions along an isotopic chain
    Surrogate(surrogate::SurrogateArgs),
}

/// 质量表位置（所有子命令共享）
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path to the mass table CSV (N, Z, Model, BE, ...)
    #[arg(long, global = true, env = "BMEX_DATA", default_value = "data/masses.csv")]
    pub data: PathBuf,
}

/// 解析物理量代码
pub fn parse_quantity(input: &str) -> Result<Quantity, String> {
    input.parse::<Quantity>().map_err(|_| {
        let codes: Vec<&str> = Quantity::ALL.iter().map(|q| q.code()).collect();
        format!(
            "Unknown quantity '{}'. Available: {}",
            input,
            codes.join(", ")
        )
    })
}

/// 解析链类型
pub fn parse_chain_kind(input: &str) -> Result<ChainKind, String> {
    input.parse::<ChainKind>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chain_args() {
        let cli = Cli::try_parse_from([
            "bmex", "--data", "masses.csv", "chain", "--kind", "isotonic", "--fixed", "20",
            "--fixed", "28", "--quantity", "TwoPSE", "--model", "EXP", "--model", "SLY4",
            "--range", "10-30",
        ])
        .unwrap();

        assert_eq!(cli.data.data, PathBuf::from("masses.csv"));
        match cli.command {
            Commands::Chain(args) => {
                assert_eq!(args.kind, ChainKind::Isotonic);
                assert_eq!(args.fixed, vec![20, 28]);
                assert_eq!(args.quantity, Quantity::TwoProtonSeparation);
                assert_eq!(args.models, vec!["EXP".to_string(), "SLY4".to_string()]);
                assert_eq!(args.range, Some((10, 30)));
            }
            _ => panic!("expected chain command"),
        }
    }

    #[test]
    fn test_reject_unknown_quantity() {
        let result = Cli::try_parse_from([
            "bmex", "landscape", "--quantity", "bogus",
        ]);
        assert!(result.is_err());
    }
}
