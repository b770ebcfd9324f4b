// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// reversed (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub start_px: f32,
    pub end_px: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, start_px: f32, end_px: f32) -> Self {
        let mut s = Self { min, max, start_px, end_px };
        if (s.max - s.min).abs() < 1e-12 { s.max = s.min + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.min) / (self.max - self.min);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let s = LinearScale::new(0.0, 0.4, 100.0, 500.0);
        assert_eq!(s.to_px(0.0), 100.0);
        assert_eq!(s.to_px(0.4), 500.0);
        assert_eq!(s.to_px(0.2), 300.0);
    }

    #[test]
    fn reversed_pixels_for_y() {
        let s = LinearScale::new(1.0, 2.0, 400.0, 0.0);
        assert_eq!(s.to_px(1.0), 400.0);
        assert_eq!(s.to_px(2.0), 0.0);
    }

    #[test]
    fn empty_span_is_widened() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 10.0);
        assert_eq!(s.max, 4.0);
    }
}
