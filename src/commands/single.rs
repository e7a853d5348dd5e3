//! # single 子命令实现
//!
//! 计算单个核素的一个或全部物理量。缺失数据逐项报告，不中断其他物理量。
//!
//! ## 依赖关系
//! - 使用 `cli/single.rs` 定义的参数
//! - 使用 `engine/`, `utils/output.rs`

use crate::cli::single::SingleArgs;
use crate::commands::{load_store, warn_unknown_model};
use crate::engine::Engine;
use crate::error::Result;
use crate::models::{Quantity, QuantityResult};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct QuantityRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Quantity")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

impl QuantityRow {
    fn new(quantity: Quantity, result: &QuantityResult) -> Self {
        QuantityRow {
            code: quantity.code(),
            name: quantity.display_name(),
            value: match result {
                Ok(v) => format!("{:.6}", v),
                Err(_) => "-".to_string(),
            },
            unit: quantity.unit(),
        }
    }
}

/// 执行单核素计算
pub fn execute(args: SingleArgs, data: &Path) -> Result<()> {
    let store = load_store(data)?;
    warn_unknown_model(&store, &args.model);
    let engine = Engine::new(&store);

    let n = args.neutrons as i64;
    let z = args.protons as i64;

    if args.quantity.eq_ignore_ascii_case("all") {
        output::print_header(&format!(
            "{} quantities for N={} Z={} (A={})",
            args.model,
            n,
            z,
            n + z
        ));

        let results = engine.evaluate_all(n, z, &args.model, args.wigner);
        let rows: Vec<QuantityRow> = results
            .iter()
            .map(|(q, r)| QuantityRow::new(*q, r))
            .collect();
        println!("{}", Table::new(&rows));

        let available = results.iter().filter(|(_, r)| r.is_ok()).count();
        if available == 0 {
            output::print_warning("No quantity is available for this nucleus.");
        } else {
            output::print_success(&format!(
                "{}/{} quantities available",
                available,
                results.len()
            ));
        }
        return Ok(());
    }

    let quantity: Quantity = args.quantity.parse()?;
    let result = engine.evaluate(quantity, n, z, &args.model, args.wigner);
    output::print_quantity(&args.model, quantity, &result);

    Ok(())
}
