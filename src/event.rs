use itertools::izip;
use particle_id::ParticleID;

use crate::{
    error::{Error, Result},
    momentum::PtEtaPhiM,
};

/// Bits of the NanoAOD `GenPart_statusFlags` column
pub mod status_flags {
    pub const IS_PROMPT: i32 = 1 << 0;
    pub const IS_DECAYED_LEPTON_HADRON: i32 = 1 << 1;
    pub const IS_TAU_DECAY_PRODUCT: i32 = 1 << 2;
    pub const IS_PROMPT_TAU_DECAY_PRODUCT: i32 = 1 << 3;
    pub const IS_DIRECT_TAU_DECAY_PRODUCT: i32 = 1 << 4;
    pub const IS_DIRECT_PROMPT_TAU_DECAY_PRODUCT: i32 = 1 << 5;
    pub const IS_DIRECT_HADRON_DECAY_PRODUCT: i32 = 1 << 6;
    pub const IS_HARD_PROCESS: i32 = 1 << 7;
    pub const FROM_HARD_PROCESS: i32 = 1 << 8;
    pub const IS_HARD_PROCESS_TAU_DECAY_PRODUCT: i32 = 1 << 9;
    pub const IS_DIRECT_HARD_PROCESS_TAU_DECAY_PRODUCT: i32 = 1 << 10;
    pub const FROM_HARD_PROCESS_BEFORE_FSR: i32 = 1 << 11;
    pub const IS_FIRST_COPY: i32 = 1 << 12;
    pub const IS_LAST_COPY: i32 = 1 << 13;
    pub const IS_LAST_COPY_BEFORE_FSR: i32 = 1 << 14;

    /// Prompt hard-process leptons as they leave the boson decay
    ///
    /// Equal to `0x1181`.
    pub const DY_LEPTON: i32 = IS_PROMPT | IS_HARD_PROCESS | FROM_HARD_PROCESS | IS_FIRST_COPY;
}

/// Generator-level particles of one event, stored as parallel columns
///
/// All columns have the same length, which is checked on construction.
#[derive(Copy, Clone, Debug)]
pub struct GenParticles<'a> {
    pt: &'a [f32],
    eta: &'a [f32],
    phi: &'a [f32],
    mass: &'a [f32],
    pdg_id: &'a [i32],
    status: &'a [i32],
    status_flags: &'a [i32],
}

impl<'a> GenParticles<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pt: &'a [f32],
        eta: &'a [f32],
        phi: &'a [f32],
        mass: &'a [f32],
        pdg_id: &'a [i32],
        status: &'a [i32],
        status_flags: &'a [i32],
    ) -> Result<Self> {
        let n = pt.len();
        let lengths = [
            ("eta", eta.len()),
            ("phi", phi.len()),
            ("mass", mass.len()),
            ("pdgId", pdg_id.len()),
            ("status", status.len()),
            ("statusFlags", status_flags.len()),
        ];
        for (column, len) in lengths {
            if len != n {
                return Err(Error::InvalidArgument(format!(
                    "column `{column}` has {len} entries, but `pt` has {n}"
                )));
            }
        }
        Ok(Self {
            pt,
            eta,
            phi,
            mass,
            pdg_id,
            status,
            status_flags,
        })
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.pt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pt.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<GenParticle> {
        if idx >= self.len() {
            return None;
        }
        Some(GenParticle {
            id: ParticleID::new(self.pdg_id[idx]),
            p: PtEtaPhiM::new(
                self.pt[idx] as f64,
                self.eta[idx] as f64,
                self.phi[idx] as f64,
                self.mass[idx] as f64,
            ),
            status: self.status[idx],
            status_flags: self.status_flags[idx],
        })
    }

    /// Iterate over the particles in column order
    pub fn iter(&self) -> impl Iterator<Item = GenParticle> + 'a {
        izip!(
            self.pt,
            self.eta,
            self.phi,
            self.mass,
            self.pdg_id,
            self.status,
            self.status_flags
        )
        .map(|(&pt, &eta, &phi, &m, &id, &status, &status_flags)| GenParticle {
            id: ParticleID::new(id),
            p: PtEtaPhiM::new(pt as f64, eta as f64, phi as f64, m as f64),
            status,
            status_flags,
        })
    }
}

/// A generator-level particle
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct GenParticle {
    /// Particle type
    pub id: ParticleID,
    /// Kinematics
    pub p: PtEtaPhiM,
    /// Generator status code
    pub status: i32,
    /// Provenance bits, see [status_flags]
    pub status_flags: i32,
}

impl GenParticle {
    /// Whether all bits in `mask` are set in the status flags
    pub fn has_flags(&self, mask: i32) -> bool {
        self.status_flags & mask == mask
    }

    /// Electrons, muons, taus and their antiparticles
    ///
    /// Fourth-generation leptons are not included.
    pub fn is_charged_lepton(&self) -> bool {
        use particle_id::sm_elementary_particles::{
            anti_muon, electron, muon, positron, tau, tau_bar,
        };
        matches!(
            self.id,
            electron | positron | muon | anti_muon | tau | tau_bar
        )
    }

    /// Whether `self` is the antiparticle of `other`
    pub fn is_anti_of(&self, other: &GenParticle) -> bool {
        // `i32::MIN` has no antiparticle id
        other.id.id() != i32::MIN && self.id == other.id.anti()
    }
}

/// Owned columns of generator-level particles
///
/// Useful when particles are available one at a time instead of as
/// columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenParticleColumns {
    pub pt: Vec<f32>,
    pub eta: Vec<f32>,
    pub phi: Vec<f32>,
    pub mass: Vec<f32>,
    pub pdg_id: Vec<i32>,
    pub status: Vec<i32>,
    pub status_flags: Vec<i32>,
}

impl GenParticleColumns {
    pub fn push(&mut self, particle: GenParticle) {
        let GenParticle { id, p, status, status_flags } = particle;
        self.pt.push(p.pt as f32);
        self.eta.push(p.eta as f32);
        self.phi.push(p.phi as f32);
        self.mass.push(p.m as f32);
        self.pdg_id.push(id.id());
        self.status.push(status);
        self.status_flags.push(status_flags);
    }

    /// Borrow as [GenParticles]
    ///
    /// Fails if the public columns were modified to different lengths.
    pub fn view(&self) -> Result<GenParticles<'_>> {
        GenParticles::new(
            &self.pt,
            &self.eta,
            &self.phi,
            &self.mass,
            &self.pdg_id,
            &self.status,
            &self.status_flags,
        )
    }
}

impl FromIterator<GenParticle> for GenParticleColumns {
    fn from_iter<I: IntoIterator<Item = GenParticle>>(iter: I) -> Self {
        let mut columns = Self::default();
        for particle in iter {
            columns.push(particle);
        }
        columns
    }
}
