//! # chain 子命令实现
//!
//! 为每个 (模型, 固定值) 组合构建一条链，并行计算后逐条显示。
//!
//! ## 依赖关系
//! - 使用 `cli/chain.rs` 定义的参数
//! - 使用 `aggregate/chain.rs`, `aggregate/export.rs`
//! - 使用 `utils/output.rs`

use crate::aggregate::{self, export, Chain, ChainRequest};
use crate::cli::chain::ChainArgs;
use crate::commands::{load_store, thread_pool, warn_unknown_model};
use crate::engine::Engine;
use crate::error::Result;
use crate::store::BindingEnergyStore;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 链上一行
#[derive(Debug, Clone, Tabled)]
struct PointRow {
    #[tabled(rename = "N")]
    n: u32,
    #[tabled(rename = "Z")]
    z: u32,
    #[tabled(rename = "A")]
    a: u32,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行链计算
pub fn execute(args: ChainArgs, data: &Path) -> Result<()> {
    let store = load_store(data)?;
    for model in &args.models {
        warn_unknown_model(&store, model);
    }

    let requests = build_requests(&args);
    if let Some((lo, hi)) = args.range {
        for request in &requests {
            check_range(&store, request, lo, hi);
        }
    }

    let engine = Engine::new(&store);
    let pool = thread_pool(args.jobs)?;
    let results = pool.install(|| aggregate::chains(&engine, &requests))?;

    for series in &results {
        print_chain(series);
    }

    let total: usize = results.iter().map(Chain::len).sum();
    if total == 0 {
        output::print_warning("No data points available for the requested chains.");
        return Ok(());
    }

    if let Some(ref path) = args.output {
        export::chains_to_csv(&results, path)?;
        output::print_success(&format!(
            "{} series ({} points) saved to '{}'",
            results.len(),
            total,
            path.display()
        ));
    }

    Ok(())
}

/// 模型 × 固定值 的笛卡尔积，模型在外层
fn build_requests(args: &ChainArgs) -> Vec<ChainRequest> {
    let mut requests = Vec::with_capacity(args.models.len() * args.fixed.len());
    for model in &args.models {
        for &fixed in &args.fixed {
            let mut request = ChainRequest::new(args.kind, args.quantity, model.clone(), fixed)
                .with_wigner(args.wigner);
            if let Some((lo, hi)) = args.range {
                request = request.with_range(lo, hi);
            }
            requests.push(request);
        }
    }
    requests
}

/// 请求范围超出表中已有数据时给出提示
fn check_range(store: &BindingEnergyStore, request: &ChainRequest, lo: u32, hi: u32) {
    let symbol = request.kind.varying_symbol();
    match aggregate::data_extent(store, request) {
        Some((d_lo, d_hi)) if lo < d_lo || hi > d_hi => {
            output::print_warning(&format!(
                "{}: requested {}={}-{} exceeds tabulated data ({}={}-{})",
                request.label(),
                symbol,
                lo,
                hi,
                symbol,
                d_lo,
                d_hi
            ));
        }
        Some(_) => {}
        None => {
            output::print_warning(&format!("{}: no tabulated data", request.label()));
        }
    }
}

fn print_chain(series: &Chain) {
    let request = &series.request;
    output::print_header(&format!(
        "{} chain {} ({})",
        request.kind,
        request.label(),
        request.quantity.display_name()
    ));

    if series.is_empty() {
        output::print_unavailable("No available points");
        return;
    }

    let rows: Vec<PointRow> = series
        .points
        .iter()
        .map(|p| PointRow {
            n: p.n,
            z: p.z,
            a: p.n + p.z,
            value: format!("{:.6}", p.value),
        })
        .collect();
    println!("{}", Table::new(&rows));

    if let Some((lo, hi)) = series.value_range() {
        output::print_info(&format!(
            "{} points, {} unavailable, range [{:.4}, {:.4}] {}",
            series.len(),
            series.skipped,
            lo,
            hi,
            request.quantity.unit()
        ));
    }
}
