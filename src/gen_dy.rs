//! Generator-level Drell-Yan lepton pair reconstruction
use std::ops::ControlFlow;

use crate::{
    event::{status_flags::DY_LEPTON, GenParticle, GenParticles},
    momentum::{pair_kinematics, PairKinematics},
    selection::DySelection,
};

/// Value reported instead of a kinematic quantity if there is no valid pair
pub const SENTINEL: f64 = -1.;

/// Indices of the two leptons from the boson decay
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DyPair {
    /// The first lepton in column order
    pub first: usize,
    /// Its antiparticle, always after `first`
    pub second: usize,
}

/// State while scanning an event for the lepton pair
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DyScan {
    Searching,
    FoundFirst(usize),
    FoundPair(DyPair),
}

impl DyScan {
    /// Advance the scan by the particle at `idx`
    fn step(self, idx: usize, particle: &GenParticle, particles: &GenParticles) -> Self {
        match self {
            Self::Searching if particle.is_charged_lepton() => Self::FoundFirst(idx),
            Self::FoundFirst(first)
                if particles
                    .get(first)
                    .is_some_and(|l1| particle.is_anti_of(&l1)) =>
            {
                Self::FoundPair(DyPair { first, second: idx })
            }
            state => state,
        }
    }

    pub fn pair(self) -> Option<DyPair> {
        match self {
            Self::FoundPair(pair) => Some(pair),
            _ => None,
        }
    }
}

/// Find the lepton pair from the Drell-Yan boson decay
///
/// The first charged lepton with all [DY_LEPTON] status flags set is
/// paired with the first later particle that has the same flags and
/// the opposite PDG id.
pub fn select_dy_leptons(particles: &GenParticles) -> Option<DyPair> {
    let scan = particles
        .iter()
        .enumerate()
        .filter(|(_, particle)| particle.has_flags(DY_LEPTON))
        .try_fold(DyScan::Searching, |scan, (idx, particle)| {
            match scan.step(idx, &particle, particles) {
                done @ DyScan::FoundPair(_) => ControlFlow::Break(done),
                next => ControlFlow::Continue(next),
            }
        });
    let (ControlFlow::Break(scan) | ControlFlow::Continue(scan)) = scan;
    let pair = scan.pair();
    if pair.is_none() {
        log::info!("not all leptons found");
    }
    pair
}

fn dy_pair_kinematics(
    particles: &GenParticles,
    selection: &DySelection,
) -> Option<PairKinematics> {
    let DyPair { first, second } = select_dy_leptons(particles)?;
    let l1 = particles.get(first)?.p;
    let l2 = particles.get(second)?.p;
    if !selection.accepts((l1.pt, l1.eta), (l2.pt, l2.eta)) {
        return None;
    }
    Some(pair_kinematics(l1, l2))
}

/// Transverse momentum of the Drell-Yan lepton pair
pub fn dy_pt(particles: &GenParticles) -> Option<f64> {
    // NOTE: this applies |η| < 1.5 to both leptons, `dy_mass` does not
    dy_pt_with(particles, &DySelection::pt_variant())
}

/// Invariant mass of the Drell-Yan lepton pair
pub fn dy_mass(particles: &GenParticles) -> Option<f64> {
    // NOTE: no η cut here, unlike `dy_pt`
    dy_mass_with(particles, &DySelection::mass_variant())
}

/// Transverse momentum of the Drell-Yan lepton pair with a custom selection
pub fn dy_pt_with(particles: &GenParticles, selection: &DySelection) -> Option<f64> {
    dy_pair_kinematics(particles, selection).map(|kin| kin.pt)
}

/// Invariant mass of the Drell-Yan lepton pair with a custom selection
pub fn dy_mass_with(particles: &GenParticles, selection: &DySelection) -> Option<f64> {
    dy_pair_kinematics(particles, selection).map(|kin| kin.mass)
}

/// Like [dy_pt], but returns [SENTINEL] if there is no valid pair
pub fn dy_pt_or_sentinel(particles: &GenParticles) -> f64 {
    dy_pt(particles).unwrap_or(SENTINEL)
}

/// Like [dy_mass], but returns [SENTINEL] if there is no valid pair
pub fn dy_mass_or_sentinel(particles: &GenParticles) -> f64 {
    dy_mass(particles).unwrap_or(SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::GenParticleColumns, momentum::PtEtaPhiM};
    use particle_id::ParticleID;

    fn lepton(id: i32, flags: i32) -> GenParticle {
        GenParticle {
            id: ParticleID::new(id),
            p: PtEtaPhiM::new(30., 0., 0., 0.),
            status: 1,
            status_flags: flags,
        }
    }

    fn scan(particles: &[GenParticle]) -> Option<DyPair> {
        let columns: GenParticleColumns = particles.iter().copied().collect();
        select_dy_leptons(&columns.view().unwrap())
    }

    #[test]
    fn empty_event() {
        assert_eq!(scan(&[]), None);
    }

    #[test]
    fn pair_after_other_particles() {
        let event = [
            lepton(2212, 0),
            lepton(23, 0x1181),
            lepton(-11, 0x1181),
            lepton(21, 0x1181),
            lepton(11, 0x1181),
        ];
        assert_eq!(scan(&event), Some(DyPair { first: 2, second: 4 }));
    }

    #[test]
    fn first_match_wins() {
        let event = [
            lepton(13, 0x1181),
            lepton(-13, 0x1181),
            lepton(-13, 0x1181),
            lepton(11, 0x1181),
            lepton(-11, 0x1181),
        ];
        assert_eq!(scan(&event), Some(DyPair { first: 0, second: 1 }));
    }

    #[test]
    fn partner_needs_flags() {
        let event = [lepton(13, 0x1181), lepton(-13, 0x1180), lepton(-13, 0x3181)];
        assert_eq!(scan(&event), Some(DyPair { first: 0, second: 2 }));
    }

    #[test]
    fn same_charge_is_no_partner() {
        let event = [lepton(15, 0x1181), lepton(15, 0x1181), lepton(-13, 0x1181)];
        assert_eq!(scan(&event), None);
    }

    #[test]
    fn first_lepton_is_fixed() {
        // a later lepton of another flavour does not replace the first one
        let event = [lepton(11, 0x1181), lepton(13, 0x1181), lepton(-13, 0x1181)];
        assert_eq!(scan(&event), None);
    }

    #[test]
    fn sentinel_without_pair() {
        let columns: GenParticleColumns = [lepton(11, 0x1181)].into_iter().collect();
        let particles = columns.view().unwrap();
        assert_eq!(dy_pt(&particles), None);
        assert_eq!(dy_mass(&particles), None);
        assert_eq!(dy_pt_or_sentinel(&particles), SENTINEL);
        assert_eq!(dy_mass_or_sentinel(&particles), -1.);
    }
}
