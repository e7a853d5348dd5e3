//! # 数据模型模块
//!
//! 定义核素记录、物理量目录和计算结果类型。
//!
//! ## 依赖关系
//! - 被 `store/`, `engine/` 和 `commands/` 使用
//! - 子模块: nuclide, quantity, result

pub mod nuclide;
pub mod quantity;
pub mod result;

pub use nuclide::NuclideRecord;
pub use quantity::{output_string, Quantity, QUANTITY_NOT_FOUND};
pub use result::{round6, QuantityResult, Unavailable};
