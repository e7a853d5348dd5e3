//! # 预测结果表
//!
//! 读取离线计算好的代理模型输出：
//! ```text
//! N,Z,baseline,mean,band
//! 82,50,13.002,12.915,0.171
//! ```
//! 典型来源是对 FRDM 两中子分离能做高斯过程修正后的结果。
//!
//! ## 依赖关系
//! - 被 `surrogate/mod.rs` 导出
//! - 使用 `csv` + `serde` 读取

use crate::error::{BmexError, Result};
use crate::surrogate::{Prediction, SurrogatePredictor};

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PredictionRow {
    #[serde(rename = "N")]
    n: u32,
    #[serde(rename = "Z")]
    z: u32,
    baseline: f64,
    mean: f64,
    band: f64,
}

/// 基于查找表的预测器
#[derive(Debug, Clone)]
pub struct PredictionTable {
    name: String,
    rows: HashMap<(u32, u32), Prediction>,
}

impl PredictionTable {
    /// 从文件读取，表名取文件名
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| BmexError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("surrogate")
            .to_string();
        Self::from_reader(name, file)
    }

    /// 从读取器解析
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let name = name.into();
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = HashMap::new();
        for row in rdr.deserialize() {
            let row: PredictionRow = row?;
            let prediction = Prediction {
                baseline: row.baseline,
                mean: row.mean,
                band: row.band.abs(),
            };
            if rows.insert((row.n, row.z), prediction).is_some() {
                return Err(BmexError::DuplicateRecord {
                    model: name,
                    n: row.n,
                    z: row.z,
                    wigner: 0,
                });
            }
        }

        Ok(Self { name, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 给定 Z 的 N 覆盖范围
    pub fn n_extent(&self, z: u32) -> Option<(u32, u32)> {
        let mut ns = self.rows.keys().filter(|k| k.1 == z).map(|k| k.0);
        let first = ns.next()?;
        Some(ns.fold((first, first), |(lo, hi), n| (lo.min(n), hi.max(n))))
    }
}

impl SurrogatePredictor for PredictionTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, n: u32, z: u32) -> Option<Prediction> {
        self.rows.get(&(n, z)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surrogate::isotopic_predictions;

    const SAMPLE: &str = "\
N,Z,baseline,mean,band
80,50,14.1,14.0,0.2
82,50,13.0,12.9,-0.15
84,50,6.2,6.4,0.3
82,52,13.5,13.4,0.2
";

    #[test]
    fn test_table_predictions() {
        let table = PredictionTable::from_reader("gp", SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.name(), "gp");

        let p = table.predict(82, 50).unwrap();
        assert_eq!(p.mean, 12.9);
        // 负的置信带取绝对值
        assert_eq!(p.band, 0.15);
        assert!(table.predict(81, 50).is_none());
        assert_eq!(table.n_extent(50), Some((80, 84)));
        assert_eq!(table.n_extent(40), None);
    }

    #[test]
    fn test_chain_from_table() {
        let table = PredictionTable::from_reader("gp", SAMPLE.as_bytes()).unwrap();
        let points = isotopic_predictions(&table, 50, (0, 200));
        assert_eq!(
            points.iter().map(|p| p.n).collect::<Vec<_>>(),
            vec![80, 82, 84]
        );
    }

    #[test]
    fn test_duplicate_prediction_rows() {
        let data = "N,Z,baseline,mean,band\n82,50,1,1,0\n82,50,2,2,0\n";
        let result = PredictionTable::from_reader("gp", data.as_bytes());
        assert!(matches!(result, Err(BmexError::DuplicateRecord { .. })));
    }
}
