//! # models 子命令实现
//!
//! 列出质量表中的模型、记录数、Wigner 键与核素覆盖范围。
//!
//! ## 依赖关系
//! - 使用 `store/`, `utils/output.rs`

use crate::commands::load_store;
use crate::error::Result;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct ModelRow {
    #[tabled(rename = "Model")]
    name: String,
    #[tabled(rename = "Records")]
    records: usize,
    #[tabled(rename = "Wigner keys")]
    wigner: String,
    #[tabled(rename = "Max N")]
    n_max: String,
    #[tabled(rename = "Max Z")]
    z_max: String,
}

/// 执行模型列表
pub fn execute(data: &Path) -> Result<()> {
    let store = load_store(data)?;

    if store.is_empty() {
        output::print_warning("Mass table contains no records.");
        return Ok(());
    }

    let rows: Vec<ModelRow> = store
        .tables()
        .map(|table| {
            let keys: Vec<String> = table.wigner_keys().iter().map(|k| k.to_string()).collect();
            let extent = table.max_nz();
            ModelRow {
                name: table.name().to_string(),
                records: table.len(),
                wigner: keys.join(","),
                n_max: extent.map(|(n, _)| n.to_string()).unwrap_or_default(),
                z_max: extent.map(|(_, z)| z.to_string()).unwrap_or_default(),
            }
        })
        .collect();

    output::print_header("Available Mass Models");
    println!("{}", Table::new(&rows));

    Ok(())
}
