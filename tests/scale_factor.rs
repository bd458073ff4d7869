use std::thread;

use approx::assert_relative_eq;
use dyreco::{
    correction::{expect_inputs, FnCorrection, Input, MemoryCorrectionSet},
    dilepton::{lepton_weight, select_reco_dilepton},
    scale_factor::UnitScaleFactor,
    ElectronScaleFactor, Error, MuonScaleFactor, ScaleFactor,
};

// binned in |eta| with edges 0, 0.9, 1.2, 2.1, 2.4
fn muon_medium_id(inputs: &[Input<'_>]) -> dyreco::Result<f64> {
    expect_inputs(inputs, 4)?;
    let abs_eta = inputs[1]
        .as_real()
        .ok_or_else(|| Error::Evaluation("abseta must be a number".to_owned()))?;
    let sf = match abs_eta {
        x if x < 0.9 => 0.99,
        x if x < 1.2 => 0.98,
        x if x < 2.1 => 0.97,
        x if x <= 2.4 => 0.95,
        x => return Err(Error::Evaluation(format!("abseta {x} out of range"))),
    };
    Ok(sf)
}

fn electron_id(inputs: &[Input<'_>]) -> dyreco::Result<f64> {
    expect_inputs(inputs, 5)?;
    match inputs[2].as_str() {
        Some("Loose") => Ok(0.96),
        Some("Medium") => Ok(0.93),
        wp => Err(Error::Evaluation(format!("unknown working point {wp:?}"))),
    }
}

fn pog_corrections() -> MemoryCorrectionSet {
    MemoryCorrectionSet::new()
        .with("NUM_MediumID_DEN_genTracks", FnCorrection(muon_medium_id))
        .with("NUM_TightID_DEN_genTracks", FnCorrection(muon_medium_id))
        .with("UL-Electron-ID-SF", FnCorrection(electron_id))
}

#[test]
fn muon_scale_factors_use_abs_eta() {
    let sf = MuonScaleFactor::new("Run2016preVFP", &pog_corrections(), "MediumID").unwrap();
    for eta in [-1.5, -0.5, 0.5, 1.5] {
        for pt in [15., 25., 35., 45.] {
            let expected = if f64::abs(eta) < 0.9 { 0.99 } else { 0.97 };
            assert_eq!(sf.scale_factor(pt, eta).unwrap(), expected);
        }
    }
    assert!(sf.scale_factor(30., 2.5).is_err());
}

#[test]
fn unknown_muon_id() {
    let err = MuonScaleFactor::new("Run2018", &pog_corrections(), "LooseID").unwrap_err();
    assert!(matches!(err, Error::Configuration { ref id } if id == "LooseID"));
}

#[test]
fn electron_working_points() {
    let cset = pog_corrections();
    let loose = ElectronScaleFactor::new("Run2016postVFP", &cset, "Loose").unwrap();
    let veto = ElectronScaleFactor::new("Run2016postVFP", &cset, "Veto").unwrap();
    assert_eq!(loose.period(), "2016postVFP");
    assert_eq!(loose.scale_factor(50., -1.2).unwrap(), 0.96);
    assert!(veto.scale_factor(50., -1.2).is_err());
}

#[test]
fn dilepton_event_weight() {
    let sf = MuonScaleFactor::new("Run2017", &pog_corrections(), "TightID").unwrap();
    let pt = [25., 62.];
    let eta = [1.0, -0.3];
    let pair = select_reco_dilepton(&pt, &[-1, 1]).unwrap().unwrap();
    assert_eq!(pair.leading, 1);
    assert_relative_eq!(
        lepton_weight(&sf, &pt, &eta, pair).unwrap(),
        0.99 * 0.98,
        epsilon = 1e-12
    );
    assert_eq!(lepton_weight(&UnitScaleFactor, &pt, &eta, pair).unwrap(), 1.);
}

#[test]
fn shared_between_threads() {
    let sf = MuonScaleFactor::new("Run2018", &pog_corrections(), "MediumID").unwrap();
    let results: Vec<f64> = thread::scope(|s| {
        let handles: Vec<_> = [0.1, 1.0, 1.5, 2.2]
            .into_iter()
            .map(|eta| {
                let sf = &sf;
                s.spawn(move || sf.scale_factor(40., eta).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, [0.99, 0.98, 0.97, 0.95]);
}
