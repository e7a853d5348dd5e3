//! # 计算结果类型
//!
//! 每个物理量的计算结果要么是数值 (MeV)，要么是 [`Unavailable`]。
//! `Unavailable` 是普通的值而不是错误：数据缺失在质量表中非常常见，
//! 上层聚合器据此跳过该点。
//!
//! ## 依赖关系
//! - 被 `store/`, `engine/`, `aggregate/` 使用

use thiserror::Error;

/// 单点计算结果
pub type QuantityResult = std::result::Result<f64, Unavailable>;

/// 数据缺失或定义域不满足的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// 质量表中没有对应记录
    #[error("{model} data does not have Binding Energy available for Nuclei with N={n} and Z={z}")]
    MissingRecord { model: String, n: i64, z: i64 },

    /// 记录存在但缺少某一列
    #[error("{model} data does not have {column} available for Nuclei with N={n} and Z={z}")]
    MissingColumn {
        model: String,
        column: &'static str,
        n: i64,
        z: i64,
    },

    /// Wigner 能系数只对 N=Z 的偶偶核有定义
    #[error("Wigner Energy Coefficient must be even-even, N=Z (got N={n} and Z={z})")]
    NotEvenEvenSymmetric { n: i64, z: i64 },

    /// A = 0 时每核子结合能无定义
    #[error("Binding Energy per Nucleon is undefined for A=0")]
    ZeroMassNumber,
}

impl Unavailable {
    /// 缺失记录对应的 (N, Z)，定义域错误返回 None
    pub fn nuclide(&self) -> Option<(i64, i64)> {
        match self {
            Unavailable::MissingRecord { n, z, .. } | Unavailable::MissingColumn { n, z, .. } => {
                Some((*n, *z))
            }
            _ => None,
        }
    }
}

/// 保留 6 位小数
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_message() {
        let reason = Unavailable::MissingRecord {
            model: "EXP".to_string(),
            n: 7,
            z: 8,
        };
        let msg = reason.to_string();
        assert!(msg.contains("EXP"));
        assert!(msg.contains("N=7"));
        assert!(msg.contains("Z=8"));
        assert_eq!(reason.nuclide(), Some((7, 8)));
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(-4.7 - (-0.8)), -3.9);
        assert_eq!(round6(1.23456749), 1.234567);
        assert_eq!(round6(round6(8.0 / 3.0)), round6(8.0 / 3.0));
    }
}
