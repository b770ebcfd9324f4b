// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::error::{ChartError, ChartResult};

/// Sans-serif families tried in order before the font manager's fallback.
const SANS_FAMILIES: [&str; 6] = ["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    /// Build a shaper over the system font manager.
    /// Fails when the system exposes no font families at all.
    pub fn try_new() -> ChartResult<Self> {
        let mgr = skia::FontMgr::default();
        if mgr.count_families() == 0 {
            return Err(ChartError::FontsUnavailable);
        }
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(mgr, None);
        Ok(Self { fonts: fc })
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&SANS_FAMILIES);
        ts
    }

    /// Lay out `text` (may contain newlines) within `width` pixels.
    pub fn layout_aligned(&self, text: &str, size: f32, color: skia::Color, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width);
        paragraph
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        self.layout_aligned(text, size, color, TextAlign::Left, 10_000.0)
    }

    /// (width of the longest line, total height).
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw with the top-left corner of the text box at (x, y).
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }

    /// Draw horizontally centered on `cx` with the top edge at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (cx - p.longest_line() * 0.5, y));
    }

    /// Draw right-aligned at `right`, vertically centered on `cy`.
    pub fn draw_right_middle(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (right - p.longest_line(), cy - p.height() * 0.5));
    }

    /// Draw rotated 90° counter-clockwise, centered on `cy`, with the text's
    /// top edge facing `left`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, left: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((left, cy + w * 0.5));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (0.0, 0.0));
        canvas.restore();
    }
}
