//! # 派生物理量计算引擎
//!
//! 按物理量代码分派到 `formulas` 中的纯函数，结果统一保留 6 位小数。
//!
//! ## 错误约定
//! - 数据缺失 → 内层 `Err(Unavailable)`，是正常结果
//! - 未知物理量代码 → 外层 `Err(BmexError::UnknownQuantity)`，是调用方错误
//!
//! ## 依赖关系
//! - 被 `aggregate/`, `commands/` 使用
//! - 使用 `store/` 和 `models/`
//! - 子模块: formulas

pub mod formulas;

pub use formulas::Lookup;

use crate::error::Result;
use crate::models::{round6, Quantity, QuantityResult};
use crate::store::BindingEnergyStore;

/// 派生物理量引擎（无状态，仅借用存储）
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    store: &'a BindingEnergyStore,
}

impl<'a> Engine<'a> {
    pub fn new(store: &'a BindingEnergyStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a BindingEnergyStore {
        self.store
    }

    /// 结合能查找（带舍入）
    pub fn lookup_be(&self, n: i64, z: i64, model: &str, wigner: u8) -> QuantityResult {
        self.store.lookup_be(n, z, model, wigner).map(round6)
    }

    /// 计算单个核素的某个物理量
    pub fn evaluate(
        &self,
        quantity: Quantity,
        n: i64,
        z: i64,
        model: &str,
        wigner: u8,
    ) -> QuantityResult {
        let ctx = Lookup::new(self.store, model, wigner);
        let value = match quantity {
            Quantity::BindingEnergy => formulas::binding_energy(&ctx, n, z),
            Quantity::OneNeutronSeparation => formulas::one_neutron_separation(&ctx, n, z),
            Quantity::OneProtonSeparation => formulas::one_proton_separation(&ctx, n, z),
            Quantity::TwoNeutronSeparation => formulas::two_neutron_separation(&ctx, n, z),
            Quantity::TwoProtonSeparation => formulas::two_proton_separation(&ctx, n, z),
            Quantity::AlphaSeparation => formulas::alpha_separation(&ctx, n, z),
            Quantity::TwoNeutronShellGap => formulas::two_neutron_shell_gap(&ctx, n, z),
            Quantity::TwoProtonShellGap => formulas::two_proton_shell_gap(&ctx, n, z),
            Quantity::DoubleMassDifference => formulas::double_mass_difference(&ctx, n, z),
            Quantity::NeutronOddEven => formulas::neutron_odd_even(&ctx, n, z),
            Quantity::ProtonOddEven => formulas::proton_odd_even(&ctx, n, z),
            Quantity::SingleNeutronSplitting => formulas::single_neutron_splitting(&ctx, n, z),
            Quantity::SingleProtonSplitting => formulas::single_proton_splitting(&ctx, n, z),
            Quantity::WignerCoefficient => formulas::wigner_coefficient(&ctx, n, z),
            Quantity::BindingEnergyPerNucleon => formulas::binding_energy_per_nucleon(&ctx, n, z),
            Quantity::QuadrupoleDeformation => formulas::quadrupole_deformation(&ctx, n, z),
        }?;
        Ok(round6(value))
    }

    /// 按代码计算；未知代码返回 `BmexError::UnknownQuantity`
    pub fn evaluate_code(
        &self,
        code: &str,
        n: i64,
        z: i64,
        model: &str,
        wigner: u8,
    ) -> Result<QuantityResult> {
        let quantity: Quantity = code.parse()?;
        Ok(self.evaluate(quantity, n, z, model, wigner))
    }

    /// 按目录顺序计算全部物理量
    pub fn evaluate_all(
        &self,
        n: i64,
        z: i64,
        model: &str,
        wigner: u8,
    ) -> Vec<(Quantity, QuantityResult)> {
        Quantity::ALL
            .iter()
            .map(|&q| (q, self.evaluate(q, n, z, model, wigner)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BmexError;
    use crate::models::{NuclideRecord, Unavailable};

    fn oxygen_store() -> BindingEnergyStore {
        BindingEnergyStore::from_records(vec![
            NuclideRecord::new(8, 8, "EXP", -4.7),
            NuclideRecord::new(7, 8, "EXP", -0.8),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_neutron_separation_example() {
        let store = oxygen_store();
        let engine = Engine::new(&store);

        let value = engine.evaluate_code("OneNSE", 8, 8, "EXP", 0).unwrap();
        assert_eq!(value, Ok(-3.9));
    }

    #[test]
    fn test_lookup_be_rounds_and_reports_missing() {
        let store = BindingEnergyStore::from_records(vec![NuclideRecord::new(
            8,
            8,
            "EXP",
            -127.619_296_4,
        )])
        .unwrap();
        let engine = Engine::new(&store);

        assert_eq!(engine.lookup_be(8, 8, "EXP", 0), Ok(-127.619296));
        assert_eq!(
            engine.lookup_be(9, 8, "EXP", 0),
            Err(Unavailable::MissingRecord {
                model: "EXP".to_string(),
                n: 9,
                z: 8
            })
        );
    }

    #[test]
    fn test_missing_neighbour_is_named() {
        let store =
            BindingEnergyStore::from_records(vec![NuclideRecord::new(8, 8, "EXP", -4.7)])
                .unwrap();
        let engine = Engine::new(&store);

        let reason = engine
            .evaluate(Quantity::OneNeutronSeparation, 8, 8, "EXP", 0)
            .unwrap_err();
        assert_eq!(
            reason,
            Unavailable::MissingRecord {
                model: "EXP".to_string(),
                n: 7,
                z: 8
            }
        );
        let msg = reason.to_string();
        assert!(msg.contains("N=7") && msg.contains("Z=8") && msg.contains("EXP"));
    }

    #[test]
    fn test_unknown_code_is_distinct_from_unavailable() {
        let store = oxygen_store();
        let engine = Engine::new(&store);

        let err = engine.evaluate_code("bogus", 8, 8, "EXP", 0).unwrap_err();
        assert!(matches!(err, BmexError::UnknownQuantity(_)));

        // 已知代码但缺数据：外层 Ok，内层 Err
        let inner = engine.evaluate_code("TwoNSE", 8, 8, "EXP", 0).unwrap();
        assert!(inner.is_err());
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let store = BindingEnergyStore::from_records(vec![
            NuclideRecord::new(10, 8, "EXP", -131.762_443),
            NuclideRecord::new(8, 8, "EXP", -127.619_296),
            NuclideRecord::new(9, 8, "EXP", -131.762_443 / 3.0),
        ])
        .unwrap();
        let engine = Engine::new(&store);

        let first = engine.evaluate(Quantity::NeutronOddEven, 9, 8, "EXP", 0);
        for _ in 0..10 {
            assert_eq!(engine.evaluate(Quantity::NeutronOddEven, 9, 8, "EXP", 0), first);
        }
        let s2n = engine
            .evaluate(Quantity::TwoNeutronSeparation, 10, 8, "EXP", 0)
            .unwrap();
        assert_eq!(s2n, round6(s2n));
        assert_eq!(s2n, -4.143147);
    }

    #[test]
    fn test_wigner_key_selects_rows() {
        let store = BindingEnergyStore::from_records(vec![
            NuclideRecord::new(8, 8, "SLY4", -128.0),
            NuclideRecord::new(7, 8, "SLY4", -112.0),
            NuclideRecord::new(8, 8, "SLY4", -127.0).with_wigner(1),
            NuclideRecord::new(7, 8, "SLY4", -112.5).with_wigner(1),
        ])
        .unwrap();
        let engine = Engine::new(&store);

        assert_eq!(
            engine.evaluate(Quantity::OneNeutronSeparation, 8, 8, "SLY4", 0),
            Ok(-16.0)
        );
        assert_eq!(
            engine.evaluate(Quantity::OneNeutronSeparation, 8, 8, "SLY4", 1),
            Ok(-14.5)
        );
        assert!(engine
            .evaluate(Quantity::OneNeutronSeparation, 8, 8, "SLY4", 2)
            .is_err());
    }

    #[test]
    fn test_wigner_coefficient_never_defined_off_diagonal() {
        let store = oxygen_store();
        let engine = Engine::new(&store);

        for n in 0..12 {
            for z in 0..12 {
                if n == z && n % 2 == 0 {
                    continue;
                }
                let result = engine.evaluate(Quantity::WignerCoefficient, n, z, "EXP", 0);
                assert!(matches!(
                    result,
                    Err(Unavailable::NotEvenEvenSymmetric { .. })
                ));
            }
        }
    }

    #[test]
    fn test_evaluate_all_order() {
        let store = oxygen_store();
        let engine = Engine::new(&store);

        let all = engine.evaluate_all(8, 8, "EXP", 0);
        assert_eq!(all.len(), Quantity::ALL.len());
        assert_eq!(all[0], (Quantity::BindingEnergy, Ok(-4.7)));
        assert_eq!(all[1], (Quantity::OneNeutronSeparation, Ok(-3.9)));
        assert_eq!(all[14], (Quantity::BindingEnergyPerNucleon, Ok(round6(-4.7 / 16.0))));
    }
}
