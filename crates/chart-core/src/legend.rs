// File: crates/chart-core/src/legend.rs
// Summary: Legend model, multi-column layout and automatic placement inside the plot area.

use crate::geometry::RectF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLocation {
    /// Corner with the least overlap with plotted data.
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendLocation {
    /// Candidate order for `Best`; earlier wins ties.
    pub const CORNERS: [LegendLocation; 4] = [
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
    ];
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub title: Option<String>,
    pub columns: usize,
    pub location: LegendLocation,
}

impl Default for Legend {
    fn default() -> Self {
        Self { title: None, columns: 1, location: LegendLocation::Best }
    }
}

impl Legend {
    pub fn new() -> Self { Self::default() }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn with_location(mut self, location: LegendLocation) -> Self {
        self.location = location;
        self
    }
}

/// Number of rows needed for `entries` spread over `columns`.
pub fn rows_for(entries: usize, columns: usize) -> usize {
    let c = columns.max(1);
    entries.div_ceil(c)
}

/// Column-major cell of entry `index`: (column, row).
pub fn cell_of(index: usize, entries: usize, columns: usize) -> (usize, usize) {
    let rows = rows_for(entries, columns).max(1);
    (index / rows, index % rows)
}

/// Legend box of size `w` x `h` anchored at `loc`, inset from `plot` by `pad`.
/// `Best` is treated as upper right; resolve it with [`best_location`] first.
pub fn place(plot: RectF, w: f32, h: f32, pad: f32, loc: LegendLocation) -> RectF {
    let left = plot.left + pad;
    let right = plot.right - pad - w;
    let top = plot.top + pad;
    let bottom = plot.bottom - pad - h;
    match loc {
        LegendLocation::Best | LegendLocation::UpperRight => RectF::from_ltwh(right, top, w, h),
        LegendLocation::UpperLeft => RectF::from_ltwh(left, top, w, h),
        LegendLocation::LowerLeft => RectF::from_ltwh(left, bottom, w, h),
        LegendLocation::LowerRight => RectF::from_ltwh(right, bottom, w, h),
    }
}

/// Corner whose legend box covers the fewest of `points` (pixel coordinates).
pub fn best_location(plot: RectF, w: f32, h: f32, pad: f32, points: &[(f32, f32)]) -> LegendLocation {
    let mut best = LegendLocation::UpperRight;
    let mut best_hits = usize::MAX;
    for loc in LegendLocation::CORNERS {
        let rect = place(plot, w, h, pad, loc);
        let hits = points.iter().filter(|&&(x, y)| rect.contains(x, y)).count();
        if hits < best_hits {
            best_hits = hits;
            best = loc;
        }
    }
    best
}
