// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick generation.

use crate::grid::{format_ticks, nice_ticks};

/// Upper bound on tick intervals per axis.
pub const MAX_TICK_INTERVALS: usize = 8;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("x", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("y", 0.0, 1.0) }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Tick positions inside the axis range.
    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, MAX_TICK_INTERVALS)
    }

    /// Tick positions paired with their labels.
    pub fn labeled_ticks(&self) -> Vec<(f64, String)> {
        let ticks = self.ticks();
        let labels = format_ticks(&ticks);
        ticks.into_iter().zip(labels).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn labeled_ticks_share_precision() {
        let a = Axis::new("y", 0.93, 1.08);
        let t = a.labeled_ticks();
        assert_eq!(t.first().map(|(_, s)| s.as_str()), Some("0.94"));
        assert_eq!(t.last().map(|(_, s)| s.as_str()), Some("1.08"));
        assert!(t.iter().all(|(_, s)| s.len() == 4));
    }
}
