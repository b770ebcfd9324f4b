// File: crates/delayed-claim/src/config.rs
// Summary: Fixed generator settings: sample ranges, figure geometry, labels and output path.

use std::path::PathBuf;

use chart_core::LegendLocation;

use crate::model::SampleRange;

pub const OUTPUT_FILE: &str = "delayed_claim_er_change.png";

/// Fraction of total ETH claimed, e/E₂.
pub const CLAIM_FRACTION: SampleRange = SampleRange::new(0.0, 0.4, 200);
/// Exchange-rate change between request and claim, ρ₂/ρ₁.
pub const RATE_RATIO: SampleRange = SampleRange::new(0.9, 1.1, 5);

pub const X_LABEL: &str = "Fraction of total ETH claimed, e/E₂";
pub const Y_LABEL: &str = "Fractional exchange rate change after claim, ρ₃/ρ₂";
pub const LEGEND_TITLE: &str = "Fractional exchange rate change\nbetween request and claim, ρ₂/ρ₁";

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub domain: SampleRange,
    pub ratios: SampleRange,
    pub output: PathBuf,
    pub dpi: f32,
    /// (width, height) in inches.
    pub figure_size_in: (f32, f32),
    /// Axis padding as a fraction of the data span on each side.
    pub margin: f64,
    pub legend_columns: usize,
    pub legend_location: LegendLocation,
    pub legend_title: String,
    pub x_label: String,
    pub y_label: String,
    /// Render text (ticks, axis labels, legend). Needs system fonts.
    pub draw_labels: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            domain: CLAIM_FRACTION,
            ratios: RATE_RATIO,
            output: PathBuf::from(OUTPUT_FILE),
            dpi: 300.0,
            figure_size_in: (6.4, 4.8),
            margin: chart_core::view::DEFAULT_MARGIN,
            legend_columns: 2,
            legend_location: LegendLocation::Best,
            legend_title: LEGEND_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            draw_labels: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_figure() {
        let c = GeneratorConfig::default();
        assert_eq!(c.output, PathBuf::from("delayed_claim_er_change.png"));
        assert_eq!(c.dpi, 300.0);
        assert_eq!(c.domain, SampleRange::new(0.0, 0.4, 200));
        assert_eq!(c.ratios, SampleRange::new(0.9, 1.1, 5));
        assert_eq!(c.legend_columns, 2);
        assert_eq!(c.legend_location, LegendLocation::Best);
        assert!(c.legend_title.contains('\n'));
    }
}
