//! # 代理模型预测
//!
//! 高斯过程修正、神经网络和约化基模拟器都被视为黑盒：
//! 只需要对给定核素返回预测值。这里定义统一接口，
//! 并提供从预先计算结果表读取预测的实现。
//!
//! ## 依赖关系
//! - 被 `commands/surrogate.rs` 使用
//! - 子模块: table

pub mod table;

pub use table::PredictionTable;

/// 单个核素的预测
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 基准模型值
    pub baseline: f64,
    /// 修正后的预测均值
    pub mean: f64,
    /// 1σ 置信带半宽
    pub band: f64,
}

impl Prediction {
    /// 置信带 (下界, 上界)
    pub fn interval(&self) -> (f64, f64) {
        (self.mean - self.band, self.mean + self.band)
    }

    /// 修正量 mean - baseline
    pub fn correction(&self) -> f64 {
        self.mean - self.baseline
    }
}

/// 黑盒预测器接口
pub trait SurrogatePredictor: Send + Sync {
    /// 预测器名称
    fn name(&self) -> &str;

    /// 对 (N, Z) 给出预测，不覆盖的核素返回 None
    fn predict(&self, n: u32, z: u32) -> Option<Prediction>;
}

/// 沿同位素链的预测点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionPoint {
    pub n: u32,
    pub prediction: Prediction,
}

/// 沿固定 Z 扫描 N，省略预测器不覆盖的点
pub fn isotopic_predictions(
    predictor: &dyn SurrogatePredictor,
    z: u32,
    n_range: (u32, u32),
) -> Vec<PredictionPoint> {
    (n_range.0..=n_range.1)
        .filter_map(|n| {
            predictor
                .predict(n, z)
                .map(|prediction| PredictionPoint { n, prediction })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear;

    impl SurrogatePredictor for Linear {
        fn name(&self) -> &str {
            "linear"
        }

        fn predict(&self, n: u32, z: u32) -> Option<Prediction> {
            if n % 2 == 1 {
                return None;
            }
            let baseline = n as f64 - z as f64;
            Some(Prediction {
                baseline,
                mean: baseline + 0.5,
                band: 0.1,
            })
        }
    }

    #[test]
    fn test_isotopic_predictions_skip_uncovered() {
        let points = isotopic_predictions(&Linear, 50, (60, 66));
        assert_eq!(
            points.iter().map(|p| p.n).collect::<Vec<_>>(),
            vec![60, 62, 64, 66]
        );
        assert_eq!(points[0].prediction.correction(), 0.5);

        let (lo, hi) = points[0].prediction.interval();
        assert!((lo - 10.4).abs() < 1e-12);
        assert!((hi - 10.6).abs() < 1e-12);
    }
}
