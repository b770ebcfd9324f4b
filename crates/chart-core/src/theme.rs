// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series color cycle.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Series colors, cycled in insertion order.
    pub palette: [skia::Color; 10],
}

/// The "tab10" categorical palette.
const TAB10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

impl Theme {
    /// White figure for documentation assets.
    pub fn light() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            palette: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(204, 28, 28, 32),
            legend_border: skia::Color::from_argb(204, 90, 90, 100),
            palette: TAB10,
        }
    }

    /// Palette color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        assert_eq!(t.series_color(0), skia::Color::new(0xff1f77b4));
        assert_eq!(t.series_color(10), t.series_color(0));
        assert_eq!(t.series_color(4), skia::Color::new(0xff9467bd));
    }
}
