//! # landscape 子命令实现
//!
//! 在局部线程池中按行并行计算核素图网格，显示进度并可导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/landscape.rs` 定义的参数
//! - 使用 `aggregate/landscape.rs`, `aggregate/export.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::aggregate::{self, export, ChartBounds};
use crate::cli::landscape::LandscapeArgs;
use crate::commands::{load_store, thread_pool, warn_unknown_model};
use crate::engine::Engine;
use crate::error::{BmexError, Result};
use crate::utils::{output, progress};

use std::path::Path;

/// 执行全景计算
pub fn execute(args: LandscapeArgs, data: &Path) -> Result<()> {
    if args.step == 0 {
        return Err(BmexError::InvalidArgument(
            "--step must be at least 1".to_string(),
        ));
    }

    let store = load_store(data)?;
    warn_unknown_model(&store, &args.model);

    output::print_header(&format!(
        "{} landscape of {} (step {})",
        args.model,
        args.quantity.display_name(),
        args.step
    ));

    let bounds = ChartBounds {
        n_max: args.n_max,
        z_max: args.z_max,
    };
    let engine = Engine::new(&store);
    let pool = thread_pool(args.jobs)?;

    let rows = (bounds.z_max / args.step) as u64 + 1;
    let pb = progress::create_progress_bar(rows, "Evaluating");
    let grid = pool.install(|| {
        aggregate::landscape_with_progress(
            &engine,
            args.quantity,
            &args.model,
            args.wigner,
            args.step,
            bounds,
            || pb.inc(1),
        )
    });
    pb.finish_and_clear();
    let grid = grid?;

    let (z_rows, n_cols) = grid.shape();
    output::print_info(&format!(
        "Grid: {} Z rows × {} N columns, {} populated cells",
        z_rows,
        n_cols,
        grid.count()
    ));

    match grid.value_range() {
        Some((lo, hi)) => output::print_info(&format!(
            "Value range: [{:.4}, {:.4}] {}",
            lo,
            hi,
            args.quantity.unit()
        )),
        None => {
            output::print_warning("No cells available for this quantity and model.");
            return Ok(());
        }
    }

    if let Some(ref path) = args.output {
        export::landscape_to_csv(&grid, path)?;
        output::print_success(&format!("Landscape saved to '{}'", path.display()));
    }

    Ok(())
}
