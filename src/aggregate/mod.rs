//! # 聚合模块
//!
//! 在核素图上批量调用计算引擎：
//! - `chain`: 同位素 / 同中子素 / 同量异位素链
//! - `landscape`: 全核素图 (Z × N) 稀疏网格
//! - `export`: 结果导出为 CSV
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `engine/` 逐点计算
//! - 使用 `rayon` 并行计算多条链和网格行

pub mod chain;
pub mod export;
pub mod landscape;

pub use chain::{chain, chains, data_extent, Chain, ChainKind, ChainPoint, ChainRequest};
pub use landscape::{landscape, landscape_with_progress, Landscape, LandscapeCell};

/// 核素图的遍历上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBounds {
    /// 最大中子数
    pub n_max: u32,
    /// 最大质子数
    pub z_max: u32,
}

impl Default for ChartBounds {
    fn default() -> Self {
        ChartBounds {
            n_max: 156,
            z_max: 120,
        }
    }
}
