//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `store/`, `engine/`, `aggregate/`, `surrogate/`, `utils/`
//! - 子模块: single, chain, landscape, models, surrogate

pub mod chain;
pub mod landscape;
pub mod models;
pub mod single;
pub mod surrogate;

use crate::cli::{Cli, Commands};
use crate::error::{BmexError, Result};
use crate::store::BindingEnergyStore;
use crate::utils::{output, progress};

use std::path::Path;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let data = cli.data.data;
    match cli.command {
        Commands::Single(args) => single::execute(args, &data),
        Commands::Chain(args) => chain::execute(args, &data),
        Commands::Landscape(args) => landscape::execute(args, &data),
        Commands::Models => models::execute(&data),
        Commands::Surrogate(args) => surrogate::execute(args),
    }
}

/// 读取质量表（显示 spinner）
pub(crate) fn load_store(path: &Path) -> Result<BindingEnergyStore> {
    let spinner = progress::create_spinner(&format!("Loading '{}'", path.display()));
    let result = BindingEnergyStore::load(path);
    spinner.finish_and_clear();

    let store = result?;
    output::print_info(&format!(
        "Loaded {} records across {} models from '{}'",
        store.len(),
        store.model_names().count(),
        path.display()
    ));
    Ok(store)
}

/// 模型不在表中时给出提示（所有结果都会是缺失）
pub(crate) fn warn_unknown_model(store: &BindingEnergyStore, model: &str) {
    if store.table(model).is_none() {
        let known: Vec<&str> = store.model_names().collect();
        output::print_warning(&format!(
            "Model '{}' not found in mass table. Available: {}",
            model,
            known.join(", ")
        ));
    }
}

/// 构建局部线程池；`jobs == 0` 时使用全部 CPU
pub(crate) fn thread_pool(jobs: usize) -> Result<rayon::ThreadPool> {
    let num_threads = if jobs == 0 { num_cpus::get() } else { jobs };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| BmexError::ThreadPool(e.to_string()))
}
