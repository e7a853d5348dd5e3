//! # 派生物理量公式
//!
//! 所有公式都由结合能查找组合而成，子结果按固定顺序求值，
//! 遇到第一个 `Unavailable` 立即返回（`?` 短路）。
//!
//! ## 公式目录 (MeV)
//! ```text
//! S_n    = BE(N,Z) - BE(N-1,Z)          S_p    = BE(N,Z) - BE(N,Z-1)
//! S_2n   = BE(N,Z) - BE(N-2,Z)          S_2p   = BE(N,Z) - BE(N,Z-2)
//! S_α    = BE(N,Z) - BE(N-2,Z-2) - 28.3
//! δ_2n   = 2BE(N,Z) - BE(N+2,Z) - BE(N-2,Z)
//! δ_2p   = 2BE(N,Z) - BE(N,Z+2) - BE(N,Z-2)
//! δV_pn  = (S_2p(N,Z) - S_2p(N-2,Z)) / 4
//! Δ_3n   = (-1)^N (S_n(N,Z) - S_n(N+1,Z)) / 2
//! Δe_n   = (-1)^N (S_n(N,Z) - S_n(N+2,Z))
//! W      = δV_pn(N,Z) - (δV_pn(N,Z-2) + δV_pn(N+2,Z)) / 2   (仅 N=Z 偶偶核)
//! ```
//!
//! ## 依赖关系
//! - 被 `engine/mod.rs` 调用
//! - 使用 `store/` 查找结合能

use crate::models::{QuantityResult, Unavailable};
use crate::store::BindingEnergyStore;

/// α 粒子结合能 (MeV)
pub const ALPHA_BINDING_ENERGY: f64 = 28.3;

/// 一次查询的上下文：存储 + 模型 + Wigner 键
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    pub store: &'a BindingEnergyStore,
    pub model: &'a str,
    pub wigner: u8,
}

impl<'a> Lookup<'a> {
    pub fn new(store: &'a BindingEnergyStore, model: &'a str, wigner: u8) -> Self {
        Self {
            store,
            model,
            wigner,
        }
    }

    pub fn be(&self, n: i64, z: i64) -> QuantityResult {
        self.store.lookup_be(n, z, self.model, self.wigner)
    }
}

/// (-1)^k
fn parity_sign(k: i64) -> f64 {
    if k.rem_euclid(2) == 0 {
        1.0
    } else {
        -1.0
    }
}

pub fn binding_energy(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    ctx.be(n, z)
}

pub fn one_neutron_separation(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_n1 = ctx.be(n - 1, z)?;
    Ok(be - be_n1)
}

pub fn one_proton_separation(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_z1 = ctx.be(n, z - 1)?;
    Ok(be - be_z1)
}

pub fn two_neutron_separation(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_n2 = ctx.be(n - 2, z)?;
    Ok(be - be_n2)
}

pub fn two_proton_separation(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_z2 = ctx.be(n, z - 2)?;
    Ok(be - be_z2)
}

pub fn alpha_separation(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_alpha = ctx.be(n - 2, z - 2)?;
    Ok(be - be_alpha - ALPHA_BINDING_ENERGY)
}

pub fn two_neutron_shell_gap(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_up = ctx.be(n + 2, z)?;
    let be_down = ctx.be(n - 2, z)?;
    Ok(2.0 * be - be_up - be_down)
}

pub fn two_proton_shell_gap(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let be_up = ctx.be(n, z + 2)?;
    let be_down = ctx.be(n, z - 2)?;
    Ok(2.0 * be - be_up - be_down)
}

pub fn double_mass_difference(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let s2p = two_proton_separation(ctx, n, z)?;
    let s2p_n2 = two_proton_separation(ctx, n - 2, z)?;
    Ok((s2p - s2p_n2) / 4.0)
}

pub fn neutron_odd_even(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let sn = one_neutron_separation(ctx, n, z)?;
    let sn_up = one_neutron_separation(ctx, n + 1, z)?;
    Ok(parity_sign(n) * (sn - sn_up) / 2.0)
}

pub fn proton_odd_even(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let sp = one_proton_separation(ctx, n, z)?;
    let sp_up = one_proton_separation(ctx, n, z + 1)?;
    Ok(parity_sign(z) * (sp - sp_up) / 2.0)
}

pub fn single_neutron_splitting(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let sn = one_neutron_separation(ctx, n, z)?;
    let sn_up = one_neutron_separation(ctx, n + 2, z)?;
    Ok(parity_sign(n) * (sn - sn_up))
}

pub fn single_proton_splitting(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let sp = one_proton_separation(ctx, n, z)?;
    let sp_up = one_proton_separation(ctx, n, z + 2)?;
    Ok(parity_sign(z) * (sp - sp_up))
}

pub fn wigner_coefficient(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    // 定义域检查先于任何查找
    if n != z || n.rem_euclid(2) != 0 {
        return Err(Unavailable::NotEvenEvenSymmetric { n, z });
    }
    let dvpn = double_mass_difference(ctx, n, z)?;
    let dvpn_z2 = double_mass_difference(ctx, n, z - 2)?;
    let dvpn_n2 = double_mass_difference(ctx, n + 2, z)?;
    Ok(dvpn - 0.5 * (dvpn_z2 + dvpn_n2))
}

pub fn binding_energy_per_nucleon(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let be = ctx.be(n, z)?;
    let a = n + z;
    if a == 0 {
        return Err(Unavailable::ZeroMassNumber);
    }
    Ok(be / a as f64)
}

pub fn quadrupole_deformation(ctx: &Lookup, n: i64, z: i64) -> QuantityResult {
    let record = ctx
        .store
        .record(n, z, ctx.model, ctx.wigner)
        .ok_or_else(|| Unavailable::MissingRecord {
            model: ctx.model.to_string(),
            n,
            z,
        })?;
    record.beta2.ok_or_else(|| Unavailable::MissingColumn {
        model: ctx.model.to_string(),
        column: "Quad Def Beta2",
        n,
        z,
    })
}
