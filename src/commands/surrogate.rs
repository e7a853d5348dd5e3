//! # surrogate 子命令实现
//!
//! 从预测表读取代理模型结果，沿同位素链显示均值与不确定带。
//!
//! ## 依赖关系
//! - 使用 `cli/surrogate.rs` 定义的参数
//! - 使用 `surrogate/`, `utils/output.rs`

use crate::cli::surrogate::SurrogateArgs;
use crate::error::Result;
use crate::surrogate::{isotopic_predictions, PredictionTable, SurrogatePredictor};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct PredictionRow {
    #[tabled(rename = "N")]
    n: u32,
    #[tabled(rename = "Baseline")]
    baseline: String,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Lower")]
    lower: String,
    #[tabled(rename = "Upper")]
    upper: String,
    #[tabled(rename = "Correction")]
    correction: String,
}

/// 执行代理模型链查询
pub fn execute(args: SurrogateArgs) -> Result<()> {
    let table = PredictionTable::load(&args.table)?;
    output::print_info(&format!(
        "Loaded {} predictions from '{}'",
        table.len(),
        args.table.display()
    ));

    let n_range = match args.range {
        Some(range) => range,
        None => match table.n_extent(args.protons) {
            Some(extent) => extent,
            None => {
                output::print_warning(&format!(
                    "No predictions for Z={} in '{}'",
                    args.protons,
                    table.name()
                ));
                return Ok(());
            }
        },
    };

    let points = isotopic_predictions(&table, args.protons, n_range);

    output::print_header(&format!(
        "{} predictions for Z={} (N={}-{})",
        table.name(),
        args.protons,
        n_range.0,
        n_range.1
    ));

    if points.is_empty() {
        output::print_unavailable("No predictions in range");
        return Ok(());
    }

    let rows: Vec<PredictionRow> = points
        .iter()
        .map(|p| {
            let (lower, upper) = p.prediction.interval();
            PredictionRow {
                n: p.n,
                baseline: format!("{:.4}", p.prediction.baseline),
                mean: format!("{:.4}", p.prediction.mean),
                lower: format!("{:.4}", lower),
                upper: format!("{:.4}", upper),
                correction: format!("{:+.4}", p.prediction.correction()),
            }
        })
        .collect();
    println!("{}", Table::new(&rows));

    Ok(())
}
