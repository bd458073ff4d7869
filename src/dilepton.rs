//! Reconstructed opposite-charge lepton pairs
use crate::{
    error::{Error, Result},
    scale_factor::ScaleFactor,
};

/// Lower bound (exclusive) on the leading lepton's transverse momentum
pub const LEADING_PT_MIN: f64 = 40.;

/// Indices of the two leptons of a selected pair, ordered by p_T
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecoDilepton {
    pub leading: usize,
    pub subleading: usize,
}

fn check_len(name: &str, len: usize, expected: usize) -> Result<()> {
    if len == expected {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "column `{name}` has {len} entries, but `pt` has {expected}"
        )))
    }
}

/// Select events with exactly two leptons of opposite charge
///
/// `pt` and `charge` describe the leptons that already passed the
/// identification and isolation requirements. The leading lepton must
/// have `pt > LEADING_PT_MIN`. For equal transverse momenta the first
/// lepton is the leading one.
pub fn select_reco_dilepton(pt: &[f32], charge: &[i32]) -> Result<Option<RecoDilepton>> {
    check_len("charge", charge.len(), pt.len())?;
    let (&[pt0, pt1], &[q0, q1]) = (pt, charge) else {
        return Ok(None);
    };
    if (pt0.max(pt1) as f64) <= LEADING_PT_MIN || q0 != -q1 {
        return Ok(None);
    }
    let pair = if pt1 > pt0 {
        RecoDilepton {
            leading: 1,
            subleading: 0,
        }
    } else {
        RecoDilepton {
            leading: 0,
            subleading: 1,
        }
    };
    Ok(Some(pair))
}

/// Product of the scale factors of both leptons
pub fn lepton_weight<S: ScaleFactor>(
    sf: &S,
    pt: &[f32],
    eta: &[f32],
    pair: RecoDilepton,
) -> Result<f64> {
    check_len("eta", eta.len(), pt.len())?;
    let mut weight = 1.;
    for idx in [pair.leading, pair.subleading] {
        let (Some(&lep_pt), Some(&lep_eta)) = (pt.get(idx), eta.get(idx)) else {
            return Err(Error::InvalidArgument(format!(
                "lepton index {idx} out of range for {} leptons",
                pt.len()
            )));
        };
        weight *= sf.scale_factor(lep_pt as f64, lep_eta as f64)?;
    }
    Ok(weight)
}
