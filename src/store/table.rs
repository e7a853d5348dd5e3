//! # 单模型质量表
//!
//! 一个模型/数据集的全部核素记录，按 (N, Z, Wigner) 精确索引。
//!
//! ## 依赖关系
//! - 被 `store/mod.rs` 持有
//! - 使用 `models/nuclide.rs`

use crate::error::{BmexError, Result};
use crate::models::NuclideRecord;

use std::collections::HashMap;

/// 记录键 (N, Z, Wigner)
type RecordKey = (u32, u32, u8);

/// 单个模型的不可变质量表
#[derive(Debug, Clone)]
pub struct ModelTable {
    name: String,
    records: HashMap<RecordKey, NuclideRecord>,
}

impl ModelTable {
    /// 创建空表
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: HashMap::new(),
        }
    }

    /// 插入记录，同键重复视为上游数据损坏
    pub(crate) fn insert(&mut self, record: NuclideRecord) -> Result<()> {
        let key = (record.n, record.z, record.wigner);
        if self.records.contains_key(&key) {
            return Err(BmexError::DuplicateRecord {
                model: self.name.clone(),
                n: record.n,
                z: record.z,
                wigner: record.wigner,
            });
        }
        self.records.insert(key, record);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 精确查找
    pub fn get(&self, n: u32, z: u32, wigner: u8) -> Option<&NuclideRecord> {
        self.records.get(&(n, z, wigner))
    }

    /// 遍历所有记录（无序）
    pub fn records(&self) -> impl Iterator<Item = &NuclideRecord> {
        self.records.values()
    }

    /// 表中出现过的 Wigner 键（升序）
    pub fn wigner_keys(&self) -> Vec<u8> {
        let mut keys: Vec<u8> = self.records.keys().map(|k| k.2).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// 给定 Z 的同位素链在表中的 N 范围
    pub fn n_extent(&self, z: u32, wigner: u8) -> Option<(u32, u32)> {
        extent(
            self.records
                .keys()
                .filter(|k| k.1 == z && k.2 == wigner)
                .map(|k| k.0),
        )
    }

    /// 给定 N 的同中子素链在表中的 Z 范围
    pub fn z_extent(&self, n: u32, wigner: u8) -> Option<(u32, u32)> {
        extent(
            self.records
                .keys()
                .filter(|k| k.0 == n && k.2 == wigner)
                .map(|k| k.1),
        )
    }

    /// 给定 A 的同量异位素链在表中的 Z 范围
    pub fn isobar_extent(&self, a: u32, wigner: u8) -> Option<(u32, u32)> {
        extent(
            self.records
                .keys()
                .filter(|k| k.0 + k.1 == a && k.2 == wigner)
                .map(|k| k.1),
        )
    }

    /// 全表最大 (N, Z)
    pub fn max_nz(&self) -> Option<(u32, u32)> {
        let max_n = self.records.keys().map(|k| k.0).max()?;
        let max_z = self.records.keys().map(|k| k.1).max()?;
        Some((max_n, max_z))
    }
}

fn extent(values: impl Iterator<Item = u32>) -> Option<(u32, u32)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
