//! Lepton efficiency scale factors
use std::{fmt, path::Path};

use crate::{
    correction::{Correction, CorrectionSet, Input, LoadCorrectionSet},
    error::{Error, Result},
};

/// Name of the electron identification correction
pub const ELECTRON_ID_CORRECTION: &str = "UL-Electron-ID-SF";

/// Per-lepton efficiency scale factor
pub trait ScaleFactor {
    fn scale_factor(&self, pt: f64, eta: f64) -> Result<f64>;
}

impl<T: ScaleFactor + ?Sized> ScaleFactor for &T {
    fn scale_factor(&self, pt: f64, eta: f64) -> Result<f64> {
        (**self).scale_factor(pt, eta)
    }
}

/// Scale factor of one, for collision data or disabled corrections
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct UnitScaleFactor;

impl ScaleFactor for UnitScaleFactor {
    fn scale_factor(&self, _pt: f64, _eta: f64) -> Result<f64> {
        Ok(1.)
    }
}

/// Strip a leading "Run" from a data-taking period
///
/// `Run2016preVFP` becomes `2016preVFP`, other names are unchanged.
pub fn period_key(period: &str) -> &str {
    period.strip_prefix("Run").unwrap_or(period)
}

fn lookup<S: CorrectionSet>(cset: &S, name: &str, id: &str) -> Result<S::Correction> {
    cset.get(name).ok_or_else(|| Error::Configuration { id: id.to_owned() })
}

/// Muon scale factors from the `NUM_<id>_DEN_genTracks` corrections
#[derive(Clone)]
pub struct MuonScaleFactor<C> {
    correction: C,
    period: String,
}

impl<C: Correction> MuonScaleFactor<C> {
    /// Look up the correction for the muon identification `muon_id`
    ///
    /// Fails with [Error::Configuration] if the correction set has no
    /// correction for `muon_id`.
    pub fn new<S>(period: &str, cset: &S, muon_id: &str) -> Result<Self>
    where
        S: CorrectionSet<Correction = C>,
    {
        let name = format!("NUM_{muon_id}_DEN_genTracks");
        let correction = lookup(cset, &name, muon_id)?;
        let period = format!("{}_UL", period_key(period));
        log::debug!("Muon scale factors from {name} for period {period}");
        Ok(Self { correction, period })
    }

    /// Load the corrections from `path` and look up `muon_id`
    pub fn from_file<S>(period: &str, path: impl AsRef<Path>, muon_id: &str) -> Result<Self>
    where
        S: LoadCorrectionSet<Correction = C>,
    {
        let cset = S::from_file(path.as_ref())?;
        Self::new(period, &cset, muon_id)
    }

    /// Period as passed to the correction, e.g. `2016preVFP_UL`
    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn evaluate(&self, pt: f64, eta: f64) -> Result<f64> {
        self.correction.evaluate(&[
            Input::Str(&self.period),
            Input::Real(eta.abs()),
            Input::Real(pt),
            Input::Str("sf"),
        ])
    }
}

impl<C> fmt::Debug for MuonScaleFactor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MuonScaleFactor")
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

impl<C: Correction> ScaleFactor for MuonScaleFactor<C> {
    fn scale_factor(&self, pt: f64, eta: f64) -> Result<f64> {
        self.evaluate(pt, eta)
    }
}

/// Electron identification scale factors
#[derive(Clone)]
pub struct ElectronScaleFactor<C> {
    correction: C,
    period: String,
    working_point: String,
}

impl<C: Correction> ElectronScaleFactor<C> {
    /// Look up the electron identification correction
    ///
    /// Fails with [Error::Configuration] if the correction set has no
    /// [ELECTRON_ID_CORRECTION].
    pub fn new<S>(period: &str, cset: &S, working_point: &str) -> Result<Self>
    where
        S: CorrectionSet<Correction = C>,
    {
        let correction = lookup(cset, ELECTRON_ID_CORRECTION, ELECTRON_ID_CORRECTION)?;
        let period = period_key(period).to_owned();
        log::debug!("Electron scale factors for working point {working_point} and period {period}");
        Ok(Self {
            correction,
            period,
            working_point: working_point.to_owned(),
        })
    }

    /// Load the corrections from `path`
    pub fn from_file<S>(period: &str, path: impl AsRef<Path>, working_point: &str) -> Result<Self>
    where
        S: LoadCorrectionSet<Correction = C>,
    {
        let cset = S::from_file(path.as_ref())?;
        Self::new(period, &cset, working_point)
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn working_point(&self) -> &str {
        &self.working_point
    }

    pub fn evaluate(&self, pt: f64, eta: f64) -> Result<f64> {
        self.correction.evaluate(&[
            Input::Str(&self.period),
            Input::Str("sf"),
            Input::Str(&self.working_point),
            Input::Real(eta),
            Input::Real(pt),
        ])
    }
}

impl<C> fmt::Debug for ElectronScaleFactor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElectronScaleFactor")
            .field("period", &self.period)
            .field("working_point", &self.working_point)
            .finish_non_exhaustive()
    }
}

impl<C: Correction> ScaleFactor for ElectronScaleFactor<C> {
    fn scale_factor(&self, pt: f64, eta: f64) -> Result<f64> {
        self.evaluate(pt, eta)
    }
}
