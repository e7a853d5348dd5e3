//! # 范围字符串解析
//!
//! 解析命令行中的闭区间，如 "20-40"。
//!
//! ## 依赖关系
//! - 被 `cli/` 参数解析和 `commands/` 使用

use crate::error::{BmexError, Result};

/// 解析 "lo-hi"（闭区间，lo <= hi）
pub fn parse_range(range: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = range.split('-').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(BmexError::InvalidRange(range.to_string()));
    }

    let lo: u32 = parts[0]
        .parse()
        .map_err(|_| BmexError::InvalidRange(range.to_string()))?;
    let hi: u32 = parts[1]
        .parse()
        .map_err(|_| BmexError::InvalidRange(range.to_string()))?;

    if hi < lo {
        return Err(BmexError::InvalidRange(range.to_string()));
    }

    Ok((lo, hi))
}

/// clap 的 value_parser 版本
pub fn parse_range_arg(range: &str) -> std::result::Result<(u32, u32), String> {
    parse_range(range).map_err(|e| e.to_string())
}
