//! # 物理量目录
//!
//! 所有可计算观测量的封闭枚举：代码、显示名称与单位。
//! 代码与质量表/前端使用的字符串一一对应（"BE", "OneNSE", "BE/A" ...）。
//!
//! ## 依赖关系
//! - 被 `engine/` 用于分派公式
//! - 被 `cli/`, `commands/` 用于解析参数和显示

use crate::error::{BmexError, Result};

use std::fmt;
use std::str::FromStr;

/// 未知代码的显示名称
pub const QUANTITY_NOT_FOUND: &str = "Quantity not found!";

/// 可计算的物理量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    BindingEnergy,
    OneNeutronSeparation,
    OneProtonSeparation,
    TwoNeutronSeparation,
    TwoProtonSeparation,
    AlphaSeparation,
    TwoNeutronShellGap,
    TwoProtonShellGap,
    DoubleMassDifference,
    NeutronOddEven,
    ProtonOddEven,
    SingleNeutronSplitting,
    SingleProtonSplitting,
    WignerCoefficient,
    BindingEnergyPerNucleon,
    QuadrupoleDeformation,
}

impl Quantity {
    /// 目录顺序（"all" 查询按此顺序输出）
    pub const ALL: [Quantity; 16] = [
        Quantity::BindingEnergy,
        Quantity::OneNeutronSeparation,
        Quantity::OneProtonSeparation,
        Quantity::TwoNeutronSeparation,
        Quantity::TwoProtonSeparation,
        Quantity::AlphaSeparation,
        Quantity::TwoNeutronShellGap,
        Quantity::TwoProtonShellGap,
        Quantity::DoubleMassDifference,
        Quantity::NeutronOddEven,
        Quantity::ProtonOddEven,
        Quantity::SingleNeutronSplitting,
        Quantity::SingleProtonSplitting,
        Quantity::WignerCoefficient,
        Quantity::BindingEnergyPerNucleon,
        Quantity::QuadrupoleDeformation,
    ];

    /// 表格/命令行中使用的代码
    pub fn code(&self) -> &'static str {
        match self {
            Quantity::BindingEnergy => "BE",
            Quantity::OneNeutronSeparation => "OneNSE",
            Quantity::OneProtonSeparation => "OnePSE",
            Quantity::TwoNeutronSeparation => "TwoNSE",
            Quantity::TwoProtonSeparation => "TwoPSE",
            Quantity::AlphaSeparation => "AlphaSE",
            Quantity::TwoNeutronShellGap => "TwoNSGap",
            Quantity::TwoProtonShellGap => "TwoPSGap",
            Quantity::DoubleMassDifference => "DoubleMDiff",
            Quantity::NeutronOddEven => "N3PointOED",
            Quantity::ProtonOddEven => "P3PointOED",
            Quantity::SingleNeutronSplitting => "SNESplitting",
            Quantity::SingleProtonSplitting => "SPESplitting",
            Quantity::WignerCoefficient => "WignerEC",
            Quantity::BindingEnergyPerNucleon => "BE/A",
            Quantity::QuadrupoleDeformation => "QDB2t",
        }
    }

    /// 人类可读名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::BindingEnergy => "Binding Energy",
            Quantity::OneNeutronSeparation => "One Neutron Separation Energy",
            Quantity::OneProtonSeparation => "One Proton Separation Energy",
            Quantity::TwoNeutronSeparation => "Two Neutron Separation Energy",
            Quantity::TwoProtonSeparation => "Two Proton Separation Energy",
            Quantity::AlphaSeparation => "Alpha Separation Energy",
            Quantity::TwoNeutronShellGap => "Two Neutron Shell Gap",
            Quantity::TwoProtonShellGap => "Two Proton Shell Gap",
            Quantity::DoubleMassDifference => "Double Mass Difference",
            Quantity::NeutronOddEven => "Neutron 3-Point Odd-Even Binding Energy Difference",
            Quantity::ProtonOddEven => "Proton 3-Point Odd-Even Binding Energy Difference",
            Quantity::SingleNeutronSplitting => "Single-Neutron Energy Splitting",
            Quantity::SingleProtonSplitting => "Single-Proton Energy Splitting",
            Quantity::WignerCoefficient => "Wigner Energy Coefficient",
            Quantity::BindingEnergyPerNucleon => "Binding Energy per Nucleon",
            Quantity::QuadrupoleDeformation => "Quad Def Beta2",
        }
    }

    /// 单位（β2 无量纲）
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::QuadrupoleDeformation => "",
            _ => "MeV",
        }
    }
}

impl FromStr for Quantity {
    type Err = BmexError;

    fn from_str(s: &str) -> Result<Self> {
        Quantity::ALL
            .iter()
            .copied()
            .find(|q| q.code() == s)
            .ok_or_else(|| BmexError::UnknownQuantity(s.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 代码 -> 显示名称，未知代码返回 [`QUANTITY_NOT_FOUND`]
pub fn output_string(code: &str) -> &'static str {
    code.parse::<Quantity>()
        .map(|q| q.display_name())
        .unwrap_or(QUANTITY_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_string() {
        assert_eq!(output_string("TwoNSE"), "Two Neutron Separation Energy");
        assert_eq!(output_string("BE"), "Binding Energy");
        assert_eq!(output_string("BE/A"), "Binding Energy per Nucleon");
        assert_eq!(output_string("bogus"), "Quantity not found!");
        assert_eq!(output_string(""), QUANTITY_NOT_FOUND);
    }

    #[test]
    fn test_code_round_trip() {
        for q in Quantity::ALL {
            assert_eq!(q.code().parse::<Quantity>().unwrap(), q);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = "twonse".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, BmexError::UnknownQuantity(ref c) if c == "twonse"));
    }
}
