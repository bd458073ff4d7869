pub mod correction;
pub mod dilepton;
pub mod error;
pub mod event;
pub mod gen_dy;
pub mod hex;
pub mod momentum;
pub mod scale_factor;
pub mod selection;
pub mod single_lepton;
pub mod transverse;

pub use crate::error::{Error, Result};
pub use crate::event::{GenParticle, GenParticleColumns, GenParticles};
pub use crate::gen_dy::{dy_mass, dy_pt, select_dy_leptons, DyPair};
pub use crate::momentum::{pair_kinematics, FourMomentum, PtEtaPhiM};
pub use crate::scale_factor::{ElectronScaleFactor, MuonScaleFactor, ScaleFactor};
pub use crate::selection::DySelection;
pub use crate::single_lepton::{lepton_met, LeptonMet};
