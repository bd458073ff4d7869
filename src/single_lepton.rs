//! Single leptons with missing transverse momentum, as in W decays
use crate::{
    error::{Error, Result},
    transverse::{mt_lep_met, pt_lep_met},
};

/// Lower bound (exclusive) on the transverse momentum of a hard lepton
pub const LEPTON_PT_MIN: f64 = 50.;

/// The leading lepton combined with the missing transverse momentum
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct LeptonMet {
    /// Index of the leading lepton
    pub lepton: usize,
    pub lepton_pt: f64,
    pub lepton_eta: f64,
    pub lepton_phi: f64,
    /// Scalar sum of lepton and missing transverse momentum
    pub lt: f64,
    /// Transverse momentum of the lepton-neutrino system
    pub w_pt: f64,
    /// Transverse mass of the lepton-neutrino system
    pub w_mt: f64,
}

fn is_hard(pt: f32) -> bool {
    pt as f64 > LEPTON_PT_MIN
}

/// Index of the leading lepton in events with a single hard flavour
///
/// Requires at least one lepton with `pt > LEPTON_PT_MIN` and no such
/// lepton in `other_flavour_pt`. For equal transverse momenta the first
/// lepton is the leading one.
pub fn select_leading_lepton(pt: &[f32], other_flavour_pt: &[f32]) -> Option<usize> {
    if other_flavour_pt.iter().any(|&pt| is_hard(pt)) {
        return None;
    }
    pt.iter()
        .enumerate()
        .filter(|&(_, &pt)| is_hard(pt))
        .fold(None, |leading: Option<(usize, f32)>, (idx, &pt)| match leading {
            Some((_, max)) if max >= pt => leading,
            _ => Some((idx, pt)),
        })
        .map(|(idx, _)| idx)
}

/// Scalar sum of lepton and missing transverse momentum
pub fn lt(lepton_pt: f64, met_pt: f64) -> f64 {
    lepton_pt + met_pt
}

/// Select the leading lepton and combine it with the missing momentum
///
/// `pt`, `eta` and `phi` are the columns of the chosen lepton flavour,
/// `other_flavour_pt` the transverse momenta of the other flavour.
pub fn lepton_met(
    pt: &[f32],
    eta: &[f32],
    phi: &[f32],
    other_flavour_pt: &[f32],
    met_pt: f64,
    met_phi: f64,
) -> Result<Option<LeptonMet>> {
    for (name, len) in [("eta", eta.len()), ("phi", phi.len())] {
        if len != pt.len() {
            return Err(Error::InvalidArgument(format!(
                "column `{name}` has {len} entries, but `pt` has {}",
                pt.len()
            )));
        }
    }
    let Some(lepton) = select_leading_lepton(pt, other_flavour_pt) else {
        return Ok(None);
    };
    let (lepton_pt, lepton_eta, lepton_phi) =
        (pt[lepton] as f64, eta[lepton] as f64, phi[lepton] as f64);
    Ok(Some(LeptonMet {
        lepton,
        lepton_pt,
        lepton_eta,
        lepton_phi,
        lt: lt(lepton_pt, met_pt),
        w_pt: pt_lep_met(lepton_pt, lepton_phi, met_pt, met_phi),
        w_mt: mt_lep_met(lepton_pt, lepton_phi, met_pt, met_phi),
    }))
}
