//! Four-momentum arithmetic
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Particle kinematics in the (p_T, η, φ, m) parametrisation
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct PtEtaPhiM {
    /// Transverse momentum in GeV
    pub pt: f64,
    /// Pseudorapidity
    pub eta: f64,
    /// Azimuthal angle
    pub phi: f64,
    /// Mass in GeV
    pub m: f64,
}

impl PtEtaPhiM {
    pub fn new(pt: f64, eta: f64, phi: f64, m: f64) -> Self {
        Self { pt, eta, phi, m }
    }
}

/// Four-momentum with components (E, p_x, p_y, p_z)
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct FourMomentum(pub [f64; 4]);

impl FourMomentum {
    pub fn e(&self) -> f64 {
        self.0[0]
    }

    pub fn px(&self) -> f64 {
        self.0[1]
    }

    pub fn py(&self) -> f64 {
        self.0[2]
    }

    pub fn pz(&self) -> f64 {
        self.0[3]
    }

    /// Transverse momentum
    pub fn pt(&self) -> f64 {
        self.px().hypot(self.py())
    }

    /// Squared invariant mass, E² - |p|²
    ///
    /// Can be slightly negative for (nearly) massless momenta due to
    /// rounding.
    pub fn mass2(&self) -> f64 {
        let [e, px, py, pz] = self.0;
        e * e - px * px - py * py - pz * pz
    }

    /// Invariant mass
    ///
    /// Negative squared masses are clamped to zero.
    pub fn mass(&self) -> f64 {
        self.mass2().max(0.).sqrt()
    }
}

impl From<PtEtaPhiM> for FourMomentum {
    fn from(p: PtEtaPhiM) -> Self {
        let PtEtaPhiM { pt, eta, phi, m } = p;
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let e = (px * px + py * py + pz * pz + m * m).sqrt();
        Self([e, px, py, pz])
    }
}

impl AddAssign for FourMomentum {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for FourMomentum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Kinematics of a two-particle system
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct PairKinematics {
    /// Transverse momentum of the summed four-momentum
    pub pt: f64,
    /// Invariant mass of the summed four-momentum
    pub mass: f64,
}

/// Sum two momenta and return transverse momentum and invariant mass
pub fn pair_kinematics(p1: PtEtaPhiM, p2: PtEtaPhiM) -> PairKinematics {
    let sum = FourMomentum::from(p1) + FourMomentum::from(p2);
    PairKinematics {
        pt: sum.pt(),
        mass: sum.mass(),
    }
}
