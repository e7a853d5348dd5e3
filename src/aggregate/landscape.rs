//! # 核素图全景网格
//!
//! 在 (Z, N) 平面上按固定步长计算某个物理量，用于热图展示。
//!
//! ## 算法
//! 1. 分配 (z_max/step + 1) × (n_max/step + 1) 网格，单元 (r, c) 对应 Z = r·step, N = c·step
//! 2. 逐行并行调用引擎，`Unavailable` 记为空单元
//! 3. 裁剪到非空单元的包围盒，记录包围盒原点 (z_origin, n_origin)
//!
//! 实验数据集 (EXP) 额外携带每个单元的不确定度和估计标记。
//!
//! ## 依赖关系
//! - 被 `commands/landscape.rs` 调用
//! - 使用 `engine/` 逐点计算
//! - 使用 `rayon` 并行填充网格行

use crate::aggregate::ChartBounds;
use crate::engine::Engine;
use crate::error::{BmexError, Result};
use crate::models::Quantity;

use rayon::prelude::*;
use std::ops::Range;

/// 实验数据集名称
pub const EXPERIMENTAL_MODEL: &str = "EXP";

/// 判断是否为实验数据集（大小写不敏感）
pub fn is_experimental(model: &str) -> bool {
    model.eq_ignore_ascii_case(EXPERIMENTAL_MODEL)
}

/// 一个非空单元
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandscapeCell {
    pub n: u32,
    pub z: u32,
    pub value: f64,
    pub uncertainty: Option<f64>,
    pub estimated: bool,
}

/// 全景网格
#[derive(Debug, Clone, PartialEq)]
pub struct Landscape {
    pub quantity: Quantity,
    pub model: String,
    pub wigner: u8,
    pub step: u32,
    /// 第 0 行对应的 Z
    pub z_origin: u32,
    /// 第 0 列对应的 N
    pub n_origin: u32,
    /// values[(Z - z_origin)/step][(N - n_origin)/step]
    pub values: Vec<Vec<Option<f64>>>,
    /// 仅实验数据集
    pub uncertainty: Option<Vec<Vec<Option<f64>>>>,
    /// 仅实验数据集
    pub estimated: Option<Vec<Vec<bool>>>,
}

impl Landscape {
    /// (行数, 列数)
    pub fn shape(&self) -> (usize, usize) {
        let rows = self.values.len();
        let cols = self.values.first().map_or(0, Vec::len);
        (rows, cols)
    }

    /// 按 (Z, N) 取值
    pub fn get(&self, z: u32, n: u32) -> Option<f64> {
        let (r, c) = self.index_of(z, n)?;
        self.values.get(r)?.get(c).copied().flatten()
    }

    /// (Z, N) 对应的 (行, 列)；不在网格步长上时为 None
    fn index_of(&self, z: u32, n: u32) -> Option<(usize, usize)> {
        if self.step == 0 {
            return None;
        }
        let dz = z.checked_sub(self.z_origin)?;
        let dn = n.checked_sub(self.n_origin)?;
        if dz % self.step != 0 || dn % self.step != 0 {
            return None;
        }
        Some(((dz / self.step) as usize, (dn / self.step) as usize))
    }

    /// 遍历非空单元（行优先）
    pub fn populated(&self) -> impl Iterator<Item = LandscapeCell> + '_ {
        self.values.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|value| LandscapeCell {
                    n: self.n_origin + c as u32 * self.step,
                    z: self.z_origin + r as u32 * self.step,
                    value,
                    uncertainty: self
                        .uncertainty
                        .as_ref()
                        .and_then(|u| u[r][c]),
                    estimated: self.estimated.as_ref().map_or(false, |e| e[r][c]),
                })
            })
        })
    }

    /// 非空单元数
    pub fn count(&self) -> usize {
        self.values.iter().flatten().filter(|v| v.is_some()).count()
    }

    /// 数值范围 (min, max)
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// 一行计算结果
struct RowData {
    values: Vec<Option<f64>>,
    uncertainty: Vec<Option<f64>>,
    estimated: Vec<bool>,
}

/// 计算全景网格
pub fn landscape(
    engine: &Engine,
    quantity: Quantity,
    model: &str,
    wigner: u8,
    step: u32,
    bounds: ChartBounds,
) -> Result<Landscape> {
    landscape_with_progress(engine, quantity, model, wigner, step, bounds, || {})
}

/// 计算全景网格，每完成一行回调一次
pub fn landscape_with_progress<F>(
    engine: &Engine,
    quantity: Quantity,
    model: &str,
    wigner: u8,
    step: u32,
    bounds: ChartBounds,
    on_row: F,
) -> Result<Landscape>
where
    F: Fn() + Sync + Send,
{
    if step == 0 {
        return Err(BmexError::InvalidArgument(
            "landscape step must be positive".to_string(),
        ));
    }

    let rows = (bounds.z_max / step) as usize + 1;
    let cols = (bounds.n_max / step) as usize + 1;
    let experimental = is_experimental(model);
    let store = engine.store();

    let grid: Vec<RowData> = (0..rows)
        .into_par_iter()
        .map(|r| {
            let z = r as u32 * step;
            let mut row = RowData {
                values: vec![None; cols],
                uncertainty: vec![None; cols],
                estimated: vec![false; cols],
            };
            for c in 0..cols {
                let n = c as u32 * step;
                if let Ok(value) = engine.evaluate(quantity, n as i64, z as i64, model, wigner) {
                    row.values[c] = Some(value);
                    if experimental {
                        if let Some(record) = store.record(n as i64, z as i64, model, wigner) {
                            row.uncertainty[c] = record.uncertainty;
                            row.estimated[c] = record.estimated;
                        }
                    }
                }
            }
            on_row();
            row
        })
        .collect();

    let mut values: Vec<Vec<Option<f64>>> = Vec::with_capacity(rows);
    let mut uncertainty: Vec<Vec<Option<f64>>> = Vec::with_capacity(rows);
    let mut estimated: Vec<Vec<bool>> = Vec::with_capacity(rows);
    for row in grid {
        values.push(row.values);
        uncertainty.push(row.uncertainty);
        estimated.push(row.estimated);
    }

    let (row_span, col_span) = bounding_box(&values).unwrap_or((0..0, 0..0));
    let z_origin = row_span.start as u32 * step;
    let n_origin = col_span.start as u32 * step;
    let values = crop(values, &row_span, &col_span);
    let uncertainty = crop(uncertainty, &row_span, &col_span);
    let estimated = crop(estimated, &row_span, &col_span);

    Ok(Landscape {
        quantity,
        model: model.to_string(),
        wigner,
        step,
        z_origin,
        n_origin,
        values,
        uncertainty: experimental.then_some(uncertainty),
        estimated: experimental.then_some(estimated),
    })
}

/// 非空单元的包围盒 (行区间, 列区间)；全空时为 None
fn bounding_box(values: &[Vec<Option<f64>>]) -> Option<(Range<usize>, Range<usize>)> {
    let mut rows: Option<(usize, usize)> = None;
    let mut cols: Option<(usize, usize)> = None;

    for (r, row) in values.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_some() {
                rows = Some(rows.map_or((r, r), |(lo, hi)| (lo.min(r), hi.max(r))));
                cols = Some(cols.map_or((c, c), |(lo, hi)| (lo.min(c), hi.max(c))));
            }
        }
    }

    let (r0, r1) = rows?;
    let (c0, c1) = cols?;
    Some((r0..r1 + 1, c0..c1 + 1))
}

fn crop<T: Clone>(grid: Vec<Vec<T>>, rows: &Range<usize>, cols: &Range<usize>) -> Vec<Vec<T>> {
    grid.into_iter()
        .skip(rows.start)
        .take(rows.len())
        .map(|row| row[cols.clone()].to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NuclideRecord;
    use crate::store::BindingEnergyStore;

    /// Z ∈ [2, 20], N ∈ [2, 40] 的矩形区域
    fn block_store(model: &str) -> BindingEnergyStore {
        let mut records = Vec::new();
        for z in 2..=20 {
            for n in 2..=40 {
                let mut record = NuclideRecord::new(n, z, model, -8.0 * (n + z) as f64);
                if n == 10 && z == 10 {
                    record = record.with_uncertainty(0.25).with_estimated(true);
                }
                records.push(record);
            }
        }
        BindingEnergyStore::from_records(records).unwrap()
    }

    #[test]
    fn test_trim_to_populated_box() {
        let store = block_store("SLY4");
        let engine = Engine::new(&store);

        let grid = landscape(
            &engine,
            Quantity::BindingEnergy,
            "SLY4",
            0,
            2,
            ChartBounds::default(),
        )
        .unwrap();

        // Z=2..20, N=2..40，步长 2
        assert_eq!(grid.shape(), (10, 20));
        assert_eq!((grid.z_origin, grid.n_origin), (2, 2));
        assert_eq!(grid.get(10, 10), Some(-160.0));
        assert_eq!(grid.get(2, 2), Some(-32.0));
        assert_eq!(grid.get(20, 40), Some(-480.0));
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(11, 10), None);
        assert_eq!(grid.get(22, 10), None);
        assert_eq!(grid.count(), 10 * 20);
        assert!(grid.uncertainty.is_none());
        assert!(grid.estimated.is_none());
    }

    #[test]
    fn test_derived_quantity_keeps_every_available_cell() {
        let store = block_store("SLY4");
        let engine = Engine::new(&store);
        let bounds = ChartBounds::default();

        let grid = landscape(
            &engine,
            Quantity::TwoNeutronSeparation,
            "SLY4",
            0,
            2,
            bounds,
        )
        .unwrap();

        let mut direct = 0;
        for z in (0..=bounds.z_max).step_by(2) {
            for n in (0..=bounds.n_max).step_by(2) {
                let expected = engine
                    .evaluate(Quantity::TwoNeutronSeparation, n as i64, z as i64, "SLY4", 0)
                    .ok();
                if expected.is_some() {
                    direct += 1;
                }
                assert_eq!(grid.get(z, n), expected, "Z={} N={}", z, n);
            }
        }

        // N=2 缺少 BE(0,Z)，包围盒从 N=4 开始
        assert_eq!(direct, 10 * 19);
        assert_eq!(grid.count(), direct);
        assert_eq!(grid.shape(), (10, 19));
        assert_eq!((grid.z_origin, grid.n_origin), (2, 4));
        assert_eq!(grid.get(10, 2), None);
        assert_eq!(grid.get(10, 4), Some(-16.0));
    }

    #[test]
    fn test_empty_landscape() {
        let store = block_store("SLY4");
        let engine = Engine::new(&store);

        let grid = landscape(
            &engine,
            Quantity::BindingEnergy,
            "UNEDF1",
            0,
            2,
            ChartBounds::default(),
        )
        .unwrap();

        assert_eq!(grid.shape(), (0, 0));
        assert_eq!(grid.count(), 0);
        assert_eq!(grid.value_range(), None);
        assert_eq!(grid.populated().count(), 0);
    }

    #[test]
    fn test_get_with_zero_step() {
        let grid = Landscape {
            quantity: Quantity::BindingEnergy,
            model: "SLY4".to_string(),
            wigner: 0,
            step: 0,
            z_origin: 0,
            n_origin: 0,
            values: vec![vec![Some(1.0)]],
            uncertainty: None,
            estimated: None,
        };
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_experimental_side_arrays() {
        let store = block_store("EXP");
        let engine = Engine::new(&store);

        let grid = landscape(
            &engine,
            Quantity::BindingEnergy,
            "EXP",
            0,
            2,
            ChartBounds::default(),
        )
        .unwrap();

        let uncertainty = grid.uncertainty.as_ref().unwrap();
        let estimated = grid.estimated.as_ref().unwrap();
        // (Z=10, N=10) 位于 [(10-2)/2][(10-2)/2]
        assert_eq!(uncertainty[4][4], Some(0.25));
        assert!(estimated[4][4]);
        assert_eq!(uncertainty[4][5], None);
        assert!(!estimated[4][5]);

        let cell = grid.populated().find(|c| c.n == 10 && c.z == 10).unwrap();
        assert_eq!(cell.uncertainty, Some(0.25));
        assert!(cell.estimated);
    }

    #[test]
    fn test_zero_step_rejected() {
        let store = block_store("EXP");
        let engine = Engine::new(&store);

        let result = landscape(
            &engine,
            Quantity::BindingEnergy,
            "EXP",
            0,
            0,
            ChartBounds::default(),
        );
        assert!(matches!(result, Err(BmexError::InvalidArgument(_))));
    }

    #[test]
    fn test_deterministic_output() {
        let store = block_store("EXP");
        let engine = Engine::new(&store);
        let bounds = ChartBounds::default();

        let a = landscape(&engine, Quantity::OneNeutronSeparation, "EXP", 0, 1, bounds).unwrap();
        let b = landscape(&engine, Quantity::OneNeutronSeparation, "EXP", 0, 1, bounds).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounding_box_spans_interior_gaps() {
        let grid = vec![
            vec![None, None, None, None, None],
            vec![None, Some(1.0), None, Some(2.0), None],
            vec![None, Some(1.0), None, None, None],
            vec![None, None, None, None, None],
            vec![None, Some(3.0), None, None, None],
            vec![None, None, None, None, None],
        ];
        assert_eq!(bounding_box(&grid), Some((1..5, 1..4)));

        let cropped = crop(grid, &(1..5), &(1..4));
        assert_eq!(cropped.len(), 4);
        assert_eq!(cropped[0], vec![Some(1.0), None, Some(2.0)]);
        assert_eq!(cropped[3], vec![Some(3.0), None, None]);

        let empty: Vec<Vec<Option<f64>>> = vec![vec![None; 3]; 2];
        assert_eq!(bounding_box(&empty), None);
    }
}
