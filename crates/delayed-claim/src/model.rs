// File: crates/delayed-claim/src/model.rs
// Summary: Exchange-rate change after a delayed claim, and the curve family plotted from it.
//
// x = e/E₂ is the fraction of total ETH claimed, r = ρ₂/ρ₁ the exchange-rate
// change between request and claim. The result is ρ₃/ρ₂, the exchange-rate
// change caused by the claim itself.

use chart_core::grid::linspace;

use crate::error::ModelError;

/// Denominators closer to zero than this are treated as the pole.
pub const SINGULARITY_EPS: f64 = 1e-12;

/// `(1 - x) / (1 - r * x)`, rejecting non-finite inputs and the pole at `r * x = 1`.
pub fn exchange_rate_change(x: f64, r: f64) -> Result<f64, ModelError> {
    if !x.is_finite() || !r.is_finite() {
        return Err(ModelError::NonFinite { x, r });
    }
    let denom = 1.0 - r * x;
    if denom.abs() < SINGULARITY_EPS {
        return Err(ModelError::Singular { x, r });
    }
    Ok((1.0 - x) / denom)
}

/// Closed interval sampled at `count` evenly spaced points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl SampleRange {
    pub const fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    /// The sample points, first and last equal to `start` and `end`.
    pub fn samples(&self) -> Result<Vec<f64>, ModelError> {
        if self.count == 0 || !self.start.is_finite() || !self.end.is_finite() {
            return Err(ModelError::InvalidRange { start: self.start, end: self.end, count: self.count });
        }
        Ok(linspace(self.start, self.end, self.count))
    }
}

/// Outputs for one ratio across the domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub ratio: f64,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn evaluate(ratio: f64, xs: &[f64]) -> Result<Self, ModelError> {
        let points = xs
            .iter()
            .map(|&x| exchange_rate_change(x, ratio).map(|y| (x, y)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ratio, points })
    }

    /// Legend label: the ratio to two decimals.
    pub fn label(&self) -> String {
        format!("{:.2}", self.ratio)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurveFamily {
    pub curves: Vec<Curve>,
}

impl CurveFamily {
    /// One curve per ratio sample, each over every domain sample.
    pub fn evaluate(domain: &SampleRange, ratios: &SampleRange) -> Result<Self, ModelError> {
        let xs = domain.samples()?;
        let curves = ratios
            .samples()?
            .into_iter()
            .map(|r| Curve::evaluate(r, &xs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { curves })
    }

    /// (min, max) of all outputs, `None` for an empty family.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.curves.iter().flat_map(Curve::values).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}
