//! # 核素链聚合
//!
//! 固定一个量子数，扫描另一个量子数的全部取值，逐点调用引擎。
//!
//! ## 链类型
//! - 同位素链 (isotopic): 固定 Z，扫描 N ∈ [0, n_max]
//! - 同中子素链 (isotonic): 固定 N，扫描 Z ∈ [0, z_max]
//! - 同量异位素链 (isobaric): 固定 A，扫描 Z，N = A - Z
//!
//! 数据缺失的点直接省略（不留占位），结果按扫描量升序。
//! 空链是合法结果。
//!
//! ## 依赖关系
//! - 被 `commands/chain.rs` 调用
//! - 使用 `engine/` 逐点计算
//! - 使用 `rayon` 并行计算多条链

use crate::aggregate::ChartBounds;
use crate::engine::Engine;
use crate::error::{BmexError, Result};
use crate::models::Quantity;
use crate::store::BindingEnergyStore;

use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// 链类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    Isotopic,
    Isotonic,
    Isobaric,
}

impl ChainKind {
    /// 固定量的符号
    pub fn fixed_symbol(&self) -> &'static str {
        match self {
            ChainKind::Isotopic => "Z",
            ChainKind::Isotonic => "N",
            ChainKind::Isobaric => "A",
        }
    }

    /// 扫描量的符号
    pub fn varying_symbol(&self) -> &'static str {
        match self {
            ChainKind::Isotopic => "N",
            ChainKind::Isotonic | ChainKind::Isobaric => "Z",
        }
    }

    /// (固定量, 扫描量) -> (N, Z)
    pub fn nuclide(&self, fixed: u32, varying: u32) -> Option<(u32, u32)> {
        match self {
            ChainKind::Isotopic => Some((varying, fixed)),
            ChainKind::Isotonic => Some((fixed, varying)),
            ChainKind::Isobaric => fixed.checked_sub(varying).map(|n| (n, varying)),
        }
    }

    /// 扫描量的取值上限
    fn varying_max(&self, fixed: u32, bounds: &ChartBounds) -> u32 {
        match self {
            ChainKind::Isotopic => bounds.n_max,
            ChainKind::Isotonic => bounds.z_max,
            ChainKind::Isobaric => fixed.min(bounds.z_max),
        }
    }
}

impl FromStr for ChainKind {
    type Err = BmexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "isotopic" => Ok(ChainKind::Isotopic),
            "isotonic" => Ok(ChainKind::Isotonic),
            "isobaric" => Ok(ChainKind::Isobaric),
            _ => Err(BmexError::UnknownChainKind(s.to_string())),
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainKind::Isotopic => write!(f, "isotopic"),
            ChainKind::Isotonic => write!(f, "isotonic"),
            ChainKind::Isobaric => write!(f, "isobaric"),
        }
    }
}

/// 链请求（一条数据系列）
#[derive(Debug, Clone, PartialEq)]
pub struct ChainRequest {
    pub kind: ChainKind,
    pub quantity: Quantity,
    pub model: String,
    /// 固定的 Z / N / A
    pub fixed: u32,
    pub wigner: u8,
    /// 扫描量的闭区间限制
    pub range: Option<(u32, u32)>,
    pub bounds: ChartBounds,
}

impl ChainRequest {
    pub fn new(kind: ChainKind, quantity: Quantity, model: impl Into<String>, fixed: u32) -> Self {
        Self {
            kind,
            quantity,
            model: model.into(),
            fixed,
            wigner: 0,
            range: None,
            bounds: ChartBounds::default(),
        }
    }

    pub fn with_wigner(mut self, wigner: u8) -> Self {
        self.wigner = wigner;
        self
    }

    pub fn with_range(mut self, lo: u32, hi: u32) -> Self {
        self.range = Some((lo, hi));
        self
    }

    pub fn with_bounds(mut self, bounds: ChartBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// 系列标签，如 "EXP Z=8"
    pub fn label(&self) -> String {
        format!("{} {}={}", self.model, self.kind.fixed_symbol(), self.fixed)
    }

    /// 实际扫描区间
    fn sweep(&self) -> Result<std::ops::RangeInclusive<u32>> {
        let mut lo = 0;
        let mut hi = self.kind.varying_max(self.fixed, &self.bounds);
        if let Some((r_lo, r_hi)) = self.range {
            if r_lo > r_hi {
                return Err(BmexError::InvalidRange(format!("{}-{}", r_lo, r_hi)));
            }
            lo = lo.max(r_lo);
            hi = hi.min(r_hi);
        }
        Ok(lo..=hi)
    }
}

/// 链上的一个有效点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainPoint {
    /// 扫描量的值
    pub varying: u32,
    pub n: u32,
    pub z: u32,
    pub value: f64,
}

/// 一条计算完成的链
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub request: ChainRequest,
    /// 有效点，按扫描量升序
    pub points: Vec<ChainPoint>,
    /// 被省略的点数
    pub skipped: usize,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (扫描量, 数值) 序列
    pub fn pairs(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().map(|p| (p.varying, p.value))
    }

    /// 数值范围 (min, max)
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.value, p.value)),
            Some((lo, hi)) => Some((lo.min(p.value), hi.max(p.value))),
        })
    }
}

/// 计算一条链
pub fn chain(engine: &Engine, request: &ChainRequest) -> Result<Chain> {
    let mut points = Vec::new();
    let mut skipped = 0;

    for varying in request.sweep()? {
        let Some((n, z)) = request.kind.nuclide(request.fixed, varying) else {
            continue;
        };
        if n > request.bounds.n_max || z > request.bounds.z_max {
            continue;
        }

        match engine.evaluate(
            request.quantity,
            n as i64,
            z as i64,
            &request.model,
            request.wigner,
        ) {
            Ok(value) => points.push(ChainPoint {
                varying,
                n,
                z,
                value,
            }),
            Err(_) => skipped += 1,
        }
    }

    Ok(Chain {
        request: request.clone(),
        points,
        skipped,
    })
}

/// 并行计算多条链，结果顺序与请求一致
pub fn chains(engine: &Engine, requests: &[ChainRequest]) -> Result<Vec<Chain>> {
    requests
        .par_iter()
        .map(|request| chain(engine, request))
        .collect()
}

/// 质量表中该链实际存在记录的扫描量范围
pub fn data_extent(store: &BindingEnergyStore, request: &ChainRequest) -> Option<(u32, u32)> {
    let table = store.table(&request.model)?;
    match request.kind {
        ChainKind::Isotopic => table.n_extent(request.fixed, request.wigner),
        ChainKind::Isotonic => table.z_extent(request.fixed, request.wigner),
        ChainKind::Isobaric => table.isobar_extent(request.fixed, request.wigner),
    }
}
