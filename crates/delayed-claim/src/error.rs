// File: crates/delayed-claim/src/error.rs
// Summary: Error types for the exchange-rate model and the chart generator.

use chart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// `r * x` equals 1, where the ratio has a pole.
    #[error("singular point: r * x = 1 at x = {x}, r = {r}")]
    Singular { x: f64, r: f64 },

    #[error("non-finite input: x = {x}, r = {r}")]
    NonFinite { x: f64, r: f64 },

    #[error("invalid sample range [{start}, {end}] with {count} samples")]
    InvalidRange { start: f64, end: f64, count: usize },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}
