//! Transverse kinematics of leptons and missing transverse energy
use itertools::izip;

use crate::{
    error::{Error, Result},
    momentum::{FourMomentum, PtEtaPhiM},
};

fn check_phi_len(pt: &[f32], phi: &[f32]) -> Result<()> {
    if pt.len() == phi.len() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "column `phi` has {} entries, but `pt` has {}",
            phi.len(),
            pt.len()
        )))
    }
}

/// Magnitude of the summed transverse momentum vectors
pub fn transverse_momentum(pt: &[f32], phi: &[f32]) -> Result<f64> {
    check_phi_len(pt, phi)?;
    let (px, py) = pt
        .iter()
        .zip(phi)
        .map(|(&pt, &phi)| (pt as f64, phi as f64))
        .fold((0., 0.), |(px, py), (pt, phi)| {
            (px + pt * phi.cos(), py + pt * phi.sin())
        });
    Ok(px.hypot(py))
}

/// Invariant mass of the sum of all given momenta
pub fn invariant_mass(pt: &[f32], eta: &[f32], phi: &[f32], mass: &[f32]) -> Result<f64> {
    let n = pt.len();
    if eta.len() != n || phi.len() != n || mass.len() != n {
        return Err(Error::InvalidArgument(format!(
            "momentum columns differ in length: pt {n}, eta {}, phi {}, mass {}",
            eta.len(),
            phi.len(),
            mass.len()
        )));
    }
    let total: FourMomentum = izip!(pt, eta, phi, mass)
        .map(|(&pt, &eta, &phi, &m)| {
            FourMomentum::from(PtEtaPhiM::new(pt as f64, eta as f64, phi as f64, m as f64))
        })
        .sum();
    Ok(total.mass())
}

/// Transverse momentum of a lepton plus missing transverse momentum
pub fn pt_lep_met(pt1: f64, phi1: f64, pt2: f64, phi2: f64) -> f64 {
    let pt2_sum = pt1 * pt1 + pt2 * pt2 + 2. * pt1 * pt2 * (phi1 - phi2).cos();
    // rounding can push back-to-back configurations below zero
    pt2_sum.max(0.).sqrt()
}

/// Transverse mass of a lepton plus missing transverse momentum
pub fn mt_lep_met(pt1: f64, phi1: f64, pt2: f64, phi2: f64) -> f64 {
    (2. * pt1 * pt2 * (1. - (phi1 - phi2).cos())).max(0.).sqrt()
}

/// [pt_lep_met] for each lepton in a column with the same missing momentum
pub fn pt_lep_met_each(
    pt: &[f32],
    phi: &[f32],
    met_pt: f64,
    met_phi: f64,
) -> Result<Vec<f64>> {
    check_phi_len(pt, phi)?;
    Ok(pt
        .iter()
        .zip(phi)
        .map(|(&pt, &phi)| pt_lep_met(pt as f64, phi as f64, met_pt, met_phi))
        .collect())
}

/// [mt_lep_met] for each lepton in a column with the same missing momentum
pub fn mt_lep_met_each(
    pt: &[f32],
    phi: &[f32],
    met_pt: f64,
    met_phi: f64,
) -> Result<Vec<f64>> {
    check_phi_len(pt, phi)?;
    Ok(pt
        .iter()
        .zip(phi)
        .map(|(&pt, &phi)| mt_lep_met(pt as f64, phi as f64, met_pt, met_phi))
        .collect())
}
