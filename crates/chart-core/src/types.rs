// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, paddings).

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 6.4;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 4.8;
/// Default output resolution in dots per inch.
pub const DEFAULT_DPI: f32 = 100.0;

/// Points per inch; font sizes and stroke widths are specified in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert a length in points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / POINTS_PER_INCH
}

/// Figure size in pixels for a size in inches at `dpi`.
pub fn figure_px(width_in: f32, height_in: f32, dpi: f32) -> (i32, i32) {
    ((width_in * dpi).round() as i32, (height_in * dpi).round() as i32)
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Insets from subplot fractions of the figure, measured from the
    /// left/bottom edge the way figure-relative layouts express them.
    pub fn from_fractions(width: i32, height: i32, left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let w = width.max(0) as f32;
        let h = height.max(0) as f32;
        Self::new(
            (w * left).round() as u32,
            (w * (1.0 - right)).round() as u32,
            (h * (1.0 - top)).round() as u32,
            (h * bottom).round() as u32,
        )
    }

    /// Standard single-subplot layout (0.125, 0.9, 0.11, 0.88).
    pub fn subplot(width: i32, height: i32) -> Self {
        Self::from_fractions(width, height, 0.125, 0.9, 0.11, 0.88)
    }
}

impl Default for Insets {
    fn default() -> Self {
        let (w, h) = figure_px(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN, DEFAULT_DPI);
        Self::subplot(w, h)
    }
}
