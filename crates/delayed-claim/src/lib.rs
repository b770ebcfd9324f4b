// File: crates/delayed-claim/src/lib.rs
// Summary: Delayed-claim exchange-rate model and chart generator.

pub mod config;
pub mod error;
pub mod generate;
pub mod model;

pub use config::GeneratorConfig;
pub use error::{GenerateError, ModelError};
pub use generate::{build_chart, generate};
pub use model::{exchange_rate_change, Curve, CurveFamily, SampleRange};
