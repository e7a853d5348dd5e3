//! # 结合能存储模块
//!
//! 启动时一次性加载的只读质量表，按模型名称查找。
//!
//! ## 功能
//! - 精确查找 (N, Z, Model, Wigner) 的结合能，缺失时返回 `Unavailable`
//! - 拒绝重复记录（上游数据损坏）
//! - `StoreHandle` 提供快照读取和整表重新加载
//!
//! ## 依赖关系
//! - 被 `engine/`, `aggregate/`, `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: table, loader

pub mod loader;
pub mod table;

pub use loader::{load_csv, read_records};
pub use table::ModelTable;

use crate::error::Result;
use crate::models::{NuclideRecord, QuantityResult, Unavailable};

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// 只读结合能存储
#[derive(Debug, Clone, Default)]
pub struct BindingEnergyStore {
    tables: BTreeMap<String, ModelTable>,
}

impl BindingEnergyStore {
    /// 从记录构建存储，按 Model 列分表
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = NuclideRecord>,
    {
        let mut tables: BTreeMap<String, ModelTable> = BTreeMap::new();
        for record in records {
            tables
                .entry(record.model.clone())
                .or_insert_with(|| ModelTable::new(record.model.clone()))
                .insert(record)?;
        }
        Ok(Self { tables })
    }

    /// 从 CSV 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        load_csv(path)
    }

    /// 按名称获取模型表
    pub fn table(&self, model: &str) -> Option<&ModelTable> {
        self.tables.get(model)
    }

    /// 所有模型名称（字典序）
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// 所有模型表（字典序）
    pub fn tables(&self) -> impl Iterator<Item = &ModelTable> {
        self.tables.values()
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.tables.values().map(ModelTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 获取原始记录；负的 N/Z（公式偏移越界）没有记录
    pub fn record(&self, n: i64, z: i64, model: &str, wigner: u8) -> Option<&NuclideRecord> {
        let n = u32::try_from(n).ok()?;
        let z = u32::try_from(z).ok()?;
        self.tables.get(model)?.get(n, z, wigner)
    }

    /// 精确查找结合能 (MeV)
    pub fn lookup_be(&self, n: i64, z: i64, model: &str, wigner: u8) -> QuantityResult {
        self.record(n, z, model, wigner)
            .map(|r| r.binding_energy)
            .ok_or_else(|| Unavailable::MissingRecord {
                model: model.to_string(),
                n,
                z,
            })
    }
}

/// 可重新加载的共享存储句柄
///
/// 读取方通过 [`StoreHandle::snapshot`] 拿到 `Arc` 快照后不再持锁；
/// [`StoreHandle::reload`] 在锁外完成加载，再原子替换。
#[derive(Debug, Default)]
pub struct StoreHandle {
    current: RwLock<Arc<BindingEnergyStore>>,
}

impl StoreHandle {
    pub fn new(store: BindingEnergyStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// 当前存储快照
    pub fn snapshot(&self) -> Arc<BindingEnergyStore> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// 替换为新的存储，返回旧快照
    pub fn replace(&self, store: BindingEnergyStore) -> Arc<BindingEnergyStore> {
        let next = Arc::new(store);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }

    /// 从文件重新加载；加载失败时保留原存储
    pub fn reload(&self, path: &Path) -> Result<Arc<BindingEnergyStore>> {
        let store = load_csv(path)?;
        self.replace(store);
        Ok(self.snapshot())
    }
}
