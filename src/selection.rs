/// Kinematic acceptance for a reconstructed Drell-Yan lepton pair
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct DySelection {
    /// Lower bound (exclusive) on the softer lepton's transverse momentum
    pub min_pt: f64,
    /// Lower bound (exclusive) on the harder lepton's transverse momentum
    pub max_pt: f64,
    /// Upper bound (exclusive) on |η| of both leptons, if any
    pub max_abs_eta: Option<f64>,
}

impl DySelection {
    /// Selection used for the dilepton transverse momentum
    pub const fn pt_variant() -> Self {
        Self {
            min_pt: 15.,
            max_pt: 40.,
            max_abs_eta: Some(1.5),
        }
    }

    /// Selection used for the dilepton invariant mass
    ///
    /// Same transverse momentum thresholds as [DySelection::pt_variant],
    /// but without a pseudorapidity cut.
    pub const fn mass_variant() -> Self {
        Self {
            min_pt: 15.,
            max_pt: 40.,
            max_abs_eta: None,
        }
    }

    /// Check whether two leptons with the given (p_T, η) pass
    pub fn accepts(&self, (pt1, eta1): (f64, f64), (pt2, eta2): (f64, f64)) -> bool {
        if pt1.min(pt2) <= self.min_pt || pt1.max(pt2) <= self.max_pt {
            return false;
        }
        match self.max_abs_eta {
            Some(max) => eta1.abs() < max && eta2.abs() < max,
            None => true,
        }
    }
}

impl Default for DySelection {
    fn default() -> Self {
        Self::pt_variant()
    }
}
