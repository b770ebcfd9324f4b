// File: crates/chart-core/src/series.rs
// Summary: Line series model: XY data plus optional legend label, color and stroke width.

use skia_safe as skia;

/// Default line width in points.
pub const DEFAULT_LINE_WIDTH_PT: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    /// Legend entry text; unlabeled series are left out of the legend.
    pub label: Option<String>,
    /// Explicit stroke color; `None` takes the next palette color.
    pub color: Option<skia::Color>,
    pub line_width_pt: f32,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, label: None, color: None, line_width_pt: DEFAULT_LINE_WIDTH_PT }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_width(mut self, pt: f32) -> Self {
        self.line_width_pt = pt.max(0.0);
        self
    }

    /// (min, max) over finite x values, or `None` when there are none.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        finite_range(self.data_xy.iter().map(|p| p.0))
    }

    /// (min, max) over finite y values, or `None` when there are none.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_range(self.data_xy.iter().map(|p| p.1))
    }
}

fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::Series;

    #[test]
    fn ranges_skip_non_finite() {
        let s = Series::line(vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, -3.0)]);
        assert_eq!(s.x_range(), Some((0.0, 2.0)));
        assert_eq!(s.y_range(), Some((-3.0, 1.0)));
        assert_eq!(Series::line(Vec::new()).y_range(), None);
    }

    #[test]
    fn builder_sets_label() {
        let s = Series::line(vec![(0.0, 0.0)]).with_label("0.90").with_line_width(-1.0);
        assert_eq!(s.label.as_deref(), Some("0.90"));
        assert_eq!(s.line_width_pt, 0.0);
    }
}
