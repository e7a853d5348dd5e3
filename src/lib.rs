//! # BMEX - 核质量模型数据浏览引擎
//!
//! 从各质量模型的结合能表出发，计算分离能、壳隙、奇偶差等导出物理量，
//! 并沿核素链或在整个核素图上批量求值。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── models/     (核素记录、物理量目录、结果类型)
//!   ├── store/      (结合能表读取与查找)
//!   ├── engine/     (导出物理量公式)
//!   ├── aggregate/  (链、全景网格、CSV 导出)
//!   ├── surrogate/  (代理模型预测)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── utils/      (输出、进度条、范围解析)
//!   └── error.rs    (错误处理)
//! ```

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod surrogate;
pub mod utils;

pub use engine::Engine;
pub use error::{BmexError, Result};
pub use models::{Quantity, QuantityResult, Unavailable};
pub use store::{BindingEnergyStore, StoreHandle};
