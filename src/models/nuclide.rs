//! # 核素记录数据模型
//!
//! 质量表中的一行：某个模型在 (N, Z, Wigner) 下的结合能及附加列。
//!
//! ## 表格列
//! ```text
//! N, Z, Model, BE [, Wigner] [, uncertainty] [, estimated] [, QDB2t]
//! ```
//! 其余派生列（旧版表格中预先计算好的分离能等）在读取时被忽略。
//!
//! ## 依赖关系
//! - 被 `store/` 使用
//! - 被 `aggregate/landscape.rs` 读取不确定度和估计标记

use serde::{Deserialize, Serialize};

/// 质量表中的一条核素记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclideRecord {
    /// 中子数
    #[serde(rename = "N")]
    pub n: u32,

    /// 质子数
    #[serde(rename = "Z")]
    pub z: u32,

    /// 模型/数据集名称（EXP, SLY4, UNEDF1 ...）
    #[serde(rename = "Model")]
    pub model: String,

    /// 结合能 (MeV)
    #[serde(rename = "BE")]
    pub binding_energy: f64,

    /// Wigner 修正键（0 = 无修正）
    #[serde(rename = "Wigner", default)]
    pub wigner: u8,

    /// 结合能不确定度 (MeV)，仅实验数据提供
    #[serde(default)]
    pub uncertainty: Option<f64>,

    /// 是否为外推估计值
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub estimated: bool,

    /// 四极形变 β2
    #[serde(rename = "QDB2t", default)]
    pub beta2: Option<f64>,
}

impl NuclideRecord {
    pub fn new(n: u32, z: u32, model: impl Into<String>, binding_energy: f64) -> Self {
        NuclideRecord {
            n,
            z,
            model: model.into(),
            binding_energy,
            wigner: 0,
            uncertainty: None,
            estimated: false,
            beta2: None,
        }
    }

    pub fn with_wigner(mut self, wigner: u8) -> Self {
        self.wigner = wigner;
        self
    }

    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = Some(uncertainty);
        self
    }

    pub fn with_estimated(mut self, estimated: bool) -> Self {
        self.estimated = estimated;
        self
    }

    pub fn with_beta2(mut self, beta2: f64) -> Self {
        self.beta2 = Some(beta2);
        self
    }

    /// 质量数 A = N + Z
    pub fn mass_number(&self) -> u32 {
        self.n + self.z
    }
}

/// 解析布尔标记列，兼容 pandas 导出的 True/False 与 1/0，空值视为 false
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(s) => match s.to_lowercase().as_str() {
            "true" | "1" | "1.0" | "yes" => Ok(true),
            "false" | "0" | "0.0" | "no" | "nan" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean flag '{}'",
                other
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = NuclideRecord::new(8, 8, "EXP", -127.6)
            .with_uncertainty(0.0001)
            .with_estimated(true);

        assert_eq!(record.mass_number(), 16);
        assert_eq!(record.wigner, 0);
        assert_eq!(record.uncertainty, Some(0.0001));
        assert!(record.estimated);
        assert_eq!(record.beta2, None);
    }

    #[test]
    fn test_deserialize_minimal_row() {
        let data = "N,Z,Model,BE\n8,8,EXP,-127.619\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let record: NuclideRecord = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(record.n, 8);
        assert_eq!(record.z, 8);
        assert_eq!(record.model, "EXP");
        assert_eq!(record.wigner, 0);
        assert!(!record.estimated);
        assert_eq!(record.uncertainty, None);
    }

    #[test]
    fn test_deserialize_full_row() {
        let data = "N,Z,Model,BE,Wigner,uncertainty,estimated,QDB2t,TwoNSE\n\
                    10,8,SLY4,-131.2,1,,True,0.12,12.5\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let record: NuclideRecord = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(record.wigner, 1);
        assert_eq!(record.uncertainty, None);
        assert!(record.estimated);
        assert_eq!(record.beta2, Some(0.12));
    }
}
