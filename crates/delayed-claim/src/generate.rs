// File: crates/delayed-claim/src/generate.rs
// Summary: Evaluate the curve family, build the chart and write it as PNG.

use std::path::PathBuf;

use chart_core::{Axis, Chart, Legend, RenderOptions, Series};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::model::CurveFamily;

/// Chart with one labeled line per curve, autoscaled axes and a legend.
pub fn build_chart(family: &CurveFamily, config: &GeneratorConfig) -> Chart {
    let mut chart = Chart::new();
    for curve in &family.curves {
        chart.add_series(Series::line(curve.points.clone()).with_label(curve.label()));
    }
    chart.x_axis = Axis::new(config.x_label.clone(), 0.0, 1.0);
    chart.y_axis = Axis::new(config.y_label.clone(), 0.0, 1.0);
    chart.autoscale_axes(config.margin);
    chart.set_legend(
        Legend::new()
            .with_title(config.legend_title.clone())
            .with_columns(config.legend_columns)
            .with_location(config.legend_location),
    );
    chart
}

pub fn render_options(config: &GeneratorConfig) -> RenderOptions {
    let (w, h) = config.figure_size_in;
    let mut opts = RenderOptions::for_figure(w, h, config.dpi);
    opts.draw_labels = config.draw_labels;
    opts
}

/// Compute, render and write the chart. Returns the written path.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf, GenerateError> {
    let family = CurveFamily::evaluate(&config.domain, &config.ratios)?;
    info!(
        curves = family.curves.len(),
        samples = config.domain.count,
        "evaluated curve family"
    );
    if let Some((lo, hi)) = family.y_range() {
        debug!(y_min = lo, y_max = hi, "output range");
    }

    let chart = build_chart(&family, config);
    let opts = render_options(config);
    chart.render_to_png(&opts, &config.output)?;
    info!(
        path = %config.output.display(),
        width = opts.width,
        height = opts.height,
        dpi = opts.dpi,
        "wrote chart"
    );
    Ok(config.output.clone())
}
