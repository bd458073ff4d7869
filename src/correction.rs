//! Interface to an external correction evaluation service
//!
//! Corrections are looked up by name in a [CorrectionSet] and evaluated
//! for a list of [Input]s. How corrections are stored and evaluated is up
//! to the backend.
use std::{fmt, path::Path, sync::Arc};

use ahash::AHashMap;

use crate::error::{Error, Result};

/// A single input value for a correction
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub enum Input<'a> {
    Real(f64),
    Str(&'a str),
}

impl<'a> Input<'a> {
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(x) => Some(*x),
            Self::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            Self::Real(_) => None,
        }
    }
}

impl From<f64> for Input<'_> {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// A correction that maps inputs to a single number
pub trait Correction {
    fn evaluate(&self, inputs: &[Input<'_>]) -> Result<f64>;
}

/// Adapter turning a function or closure into a [Correction]
#[derive(Copy, Clone, Debug, Default)]
pub struct FnCorrection<F>(pub F);

impl<F> FnCorrection<F>
where
    F: Fn(&[Input<'_>]) -> Result<f64>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Correction for FnCorrection<F>
where
    F: Fn(&[Input<'_>]) -> Result<f64>,
{
    fn evaluate(&self, inputs: &[Input<'_>]) -> Result<f64> {
        (self.0)(inputs)
    }
}

impl<C: Correction + ?Sized> Correction for Arc<C> {
    fn evaluate(&self, inputs: &[Input<'_>]) -> Result<f64> {
        (**self).evaluate(inputs)
    }
}

/// A collection of named corrections
pub trait CorrectionSet {
    type Correction: Correction;

    /// Look up a correction by name
    fn get(&self, name: &str) -> Option<Self::Correction>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A correction set that can be read from a file
pub trait LoadCorrectionSet: CorrectionSet + Sized {
    fn from_file(path: &Path) -> Result<Self>;
}

pub type SharedCorrection = Arc<dyn Correction + Send + Sync>;

/// Correction set held in memory
#[derive(Clone, Default)]
pub struct MemoryCorrectionSet {
    corrections: AHashMap<String, SharedCorrection>,
}

impl MemoryCorrectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a correction, replacing any previous one with the same name
    pub fn insert<C>(&mut self, name: impl Into<String>, correction: C)
    where
        C: Correction + Send + Sync + 'static,
    {
        self.corrections.insert(name.into(), Arc::new(correction));
    }

    pub fn with<C>(mut self, name: impl Into<String>, correction: C) -> Self
    where
        C: Correction + Send + Sync + 'static,
    {
        self.insert(name, correction);
        self
    }

    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.corrections.keys().map(|name| name.as_str())
    }
}

impl CorrectionSet for MemoryCorrectionSet {
    type Correction = SharedCorrection;

    fn get(&self, name: &str) -> Option<Self::Correction> {
        self.corrections.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.corrections.contains_key(name)
    }
}

impl FromIterator<(String, SharedCorrection)> for MemoryCorrectionSet {
    fn from_iter<I: IntoIterator<Item = (String, SharedCorrection)>>(iter: I) -> Self {
        Self {
            corrections: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for MemoryCorrectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::from_iter(self.names());
        names.sort_unstable();
        f.debug_struct("MemoryCorrectionSet")
            .field("corrections", &names)
            .finish()
    }
}

/// Check the number of inputs passed to a correction
pub fn expect_inputs(inputs: &[Input<'_>], n: usize) -> Result<()> {
    if inputs.len() == n {
        Ok(())
    } else {
        Err(Error::Evaluation(format!(
            "expected {n} inputs, got {}",
            inputs.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(inputs: &[Input<'_>]) -> Result<f64> {
        expect_inputs(inputs, 1)?;
        inputs[0]
            .as_real()
            .map(|x| 2. * x)
            .ok_or_else(|| Error::Evaluation(format!("not a number: {}", inputs[0])))
    }

    #[test]
    fn lookup_and_evaluate() {
        let cset = MemoryCorrectionSet::new()
            .with("double", FnCorrection(double))
            .with("one", FnCorrection::new(|_| Ok(1.)));
        assert_eq!(cset.len(), 2);
        assert!(cset.contains("double"));
        assert!(!cset.contains("triple"));
        assert!(cset.get("triple").is_none());

        let corr = cset.get("double").unwrap();
        assert_eq!(corr.evaluate(&[Input::Real(1.5)]).unwrap(), 3.);
        assert!(corr.evaluate(&["x".into()]).is_err());
        assert!(corr.evaluate(&[]).is_err());
        assert_eq!(cset.get("one").unwrap().evaluate(&[]).unwrap(), 1.);
    }

    #[test]
    fn inputs() {
        let x = Input::from(0.5);
        let s: Input = "sf".into();
        assert_eq!(x.as_real(), Some(0.5));
        assert_eq!(x.as_str(), None);
        assert_eq!(s.as_str(), Some("sf"));
        assert_eq!(s.to_string(), "\"sf\"");
    }

    #[test]
    fn debug_lists_names() {
        let cset = MemoryCorrectionSet::new()
            .with("b", FnCorrection(double))
            .with("a", FnCorrection(double));
        assert_eq!(
            format!("{cset:?}"),
            r#"MemoryCorrectionSet { corrections: ["a", "b"] }"#
        );
    }
}
