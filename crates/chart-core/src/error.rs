// File: crates/chart-core/src/error.rs
// Summary: Error type for chart rendering and PNG output.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels back from raster surface")]
    ReadPixels,

    /// Labels were requested but the font manager reports no families.
    #[error("no system fonts available for text rendering")]
    FontsUnavailable,

    #[error("chart has no series to render")]
    EmptyChart,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
