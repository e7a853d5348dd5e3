//! # 统一错误处理模块
//!
//! 定义 BMEX 的错误类型，使用 `thiserror` 派生。
//!
//! 注意：数据缺失（某个核素/模型组合没有记录）不属于错误，
//! 由 `engine::Unavailable` 作为普通结果值返回。
//! 这里只收录调用方错误（未知物理量、非法范围）和真正的异常（重复记录、I/O）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// BMEX 统一错误类型
#[derive(Error, Debug)]
pub enum BmexError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 数据表错误
    // ─────────────────────────────────────────────────────────────
    #[error("Duplicate record in table: model={model} N={n} Z={z} Wigner={wigner}")]
    DuplicateRecord {
        model: String,
        n: u32,
        z: u32,
        wigner: u8,
    },

    #[error("Failed to parse table {path}\nReason: {reason}")]
    ParseError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown quantity code: '{0}'")]
    UnknownQuantity(String),

    #[error("Unknown chain type: '{0}' (expected isotopic, isotonic or isobaric)")]
    UnknownChainKind(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BmexError>;
