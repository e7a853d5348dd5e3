//! # 聚合结果导出
//!
//! 导出核素链和全景网格到 CSV。
//!
//! ## 支持格式
//! - 链: 长表 `series, model, chain, fixed, varying, N, Z, <quantity>`
//! - 全景: 非空单元 `Z, N, <quantity>`，实验数据附加 `uncertainty, estimated`
//!
//! ## 依赖关系
//! - 被 `commands/chain.rs`, `commands/landscape.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::aggregate::{Chain, Landscape};
use crate::error::{BmexError, Result};

use std::io::Write;
use std::path::Path;

/// 导出多条链到 CSV 文件
pub fn chains_to_csv(chains: &[Chain], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| BmexError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_chains(chains, file)?;
    Ok(())
}

/// 写出多条链
pub fn write_chains<W: Write>(chains: &[Chain], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let quantity_header = chains
        .first()
        .map(|c| c.request.quantity.code())
        .unwrap_or("value");
    wtr.write_record([
        "series",
        "model",
        "chain",
        "fixed",
        "varying",
        "N",
        "Z",
        quantity_header,
    ])?;

    for (i, chain) in chains.iter().enumerate() {
        let request = &chain.request;
        for point in &chain.points {
            wtr.write_record(&[
                (i + 1).to_string(),
                request.model.clone(),
                request.kind.to_string(),
                request.fixed.to_string(),
                point.varying.to_string(),
                point.n.to_string(),
                point.z.to_string(),
                format!("{:.6}", point.value),
            ])?;
        }
    }

    wtr.flush().map_err(|e| BmexError::FileWriteError {
        path: "<chain output>".to_string(),
        source: e,
    })?;
    Ok(())
}

/// 导出全景网格到 CSV 文件
pub fn landscape_to_csv(landscape: &Landscape, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| BmexError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_landscape(landscape, file)?;
    Ok(())
}

/// 写出全景网格的非空单元
pub fn write_landscape<W: Write>(landscape: &Landscape, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let with_side = landscape.uncertainty.is_some();

    let mut header = vec!["Z", "N", landscape.quantity.code()];
    if with_side {
        header.push("uncertainty");
        header.push("estimated");
    }
    wtr.write_record(&header)?;

    for cell in landscape.populated() {
        let mut row = vec![
            cell.z.to_string(),
            cell.n.to_string(),
            format!("{:.6}", cell.value),
        ];
        if with_side {
            row.push(cell.uncertainty.map(|u| format!("{:.6}", u)).unwrap_or_default());
            row.push(cell.estimated.to_string());
        }
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(|e| BmexError::FileWriteError {
        path: "<landscape output>".to_string(),
        source: e,
    })?;
    Ok(())
}
