// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::encode::encode_png;
use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::legend::{self, Legend, LegendLocation};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{figure_px, pt_to_px, Insets, DEFAULT_DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Resolution used to convert point sizes to pixels and stored in the PNG.
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, axis labels and legend. Off means no fonts are touched.
    pub draw_labels: bool,
    pub font_size_pt: f32,
}

impl RenderOptions {
    /// Options for a figure of `width_in` x `height_in` inches at `dpi`.
    pub fn for_figure(width_in: f32, height_in: f32, dpi: f32) -> Self {
        let (width, height) = figure_px(width_in, height_in, dpi);
        Self {
            width,
            height,
            dpi,
            insets: Insets::subplot(width, height),
            theme: Theme::light(),
            draw_labels: true,
            font_size_pt: 10.0,
        }
    }

    #[inline]
    fn px(&self, pt: f32) -> f32 {
        pt_to_px(pt, self.dpi)
    }

    fn plot_rect(&self) -> RectF {
        RectF::from_ltrb(
            self.insets.left as f32,
            self.insets.top as f32,
            (self.width - self.insets.right as i32) as f32,
            (self.height - self.insets.bottom as i32) as f32,
        )
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_figure(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN, DEFAULT_DPI)
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Fit both axes to the data, padded by `margin` times the span per side.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render into a tightly packed RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        if self.series.is_empty() {
            return Err(ChartError::EmptyChart);
        }
        let shaper = if opts.draw_labels { Some(TextShaper::try_new()?) } else { None };

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts, shaper.as_ref());

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    /// Render and encode as PNG bytes carrying `opts.dpi`.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(&pixels, w, h, opts.dpi)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> ChartResult<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: Option<&TextShaper>) {
        let theme = &opts.theme;
        let plot = opts.plot_rect();
        let sx = LinearScale::new(self.x_axis.min, self.x_axis.max, plot.left, plot.right);
        let sy = LinearScale::new(self.y_axis.min, self.y_axis.max, plot.bottom, plot.top);
        let x_ticks = self.x_axis.labeled_ticks();
        let y_ticks = self.y_axis.labeled_ticks();

        canvas.clear(theme.background);

        draw_grid(canvas, opts, plot, &sx, &sy, &x_ticks, &y_ticks);

        let paths: Vec<Vec<skia::Point>> = self
            .series
            .iter()
            .map(|s| project(&s.data_xy, &sx, &sy))
            .collect();

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (i, (s, pts)) in self.series.iter().zip(&paths).enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, pts, color, opts.px(s.line_width_pt));
        }
        canvas.restore();

        draw_axes(canvas, opts, plot, &sx, &sy, &x_ticks, &y_ticks);

        if let Some(shaper) = shaper {
            draw_labels(
                canvas,
                opts,
                shaper,
                plot,
                &sx,
                &sy,
                &self.x_axis,
                &self.y_axis,
                &x_ticks,
                &y_ticks,
            );
            if let Some(legend) = &self.legend {
                let points: Vec<(f32, f32)> = paths.iter().flatten().map(|p| (p.x, p.y)).collect();
                draw_legend(canvas, opts, shaper, plot, legend, self.legend_entries(theme), &points);
            }
        }
    }

    fn legend_entries(&self, theme: &Theme) -> Vec<(String, skia::Color, f32)> {
        self.series
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let color = s.color.unwrap_or_else(|| theme.series_color(i));
                s.label.clone().map(|l| (l, color, s.line_width_pt))
            })
            .collect()
    }
}

// ---- helpers ----------------------------------------------------------------

/// Data to pixel coordinates; non-finite samples become NaN break markers.
fn project(data: &[(f64, f64)], sx: &LinearScale, sy: &LinearScale) -> Vec<skia::Point> {
    data.iter()
        .map(|&(x, y)| {
            if x.is_finite() && y.is_finite() {
                skia::Point::new(sx.to_px(x), sy.to_px(y))
            } else {
                skia::Point::new(f32::NAN, f32::NAN)
            }
        })
        .collect()
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
) {
    let paint = stroke_paint(opts.theme.grid, opts.px(0.8));
    for (x, _) in x_ticks {
        let px = sx.to_px(*x);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for (y, _) in y_ticks {
        let py = sy.to_px(*y);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, pts: &[skia::Point], color: skia::Color, width: f32) {
    let mut stroke = stroke_paint(color, width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    // split at NaN markers so gaps stay gaps
    for run in pts.split(|p| !p.x.is_finite() || !p.y.is_finite()) {
        if run.len() >= 2 {
            canvas.draw_points(skia::canvas::PointMode::Polygon, run, &stroke);
        }
    }
}

/// Frame around the plot area plus outward tick marks.
fn draw_axes(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
) {
    let frame = stroke_paint(opts.theme.axis_line, opts.px(0.8));
    canvas.draw_rect(plot.to_skia(), &frame);

    let tick = stroke_paint(opts.theme.tick, opts.px(0.8));
    let len = opts.px(3.5);
    for (x, _) in x_ticks {
        let px = sx.to_px(*x);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + len), &tick);
    }
    for (y, _) in y_ticks {
        let py = sy.to_px(*y);
        canvas.draw_line((plot.left - len, py), (plot.left, py), &tick);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    shaper: &TextShaper,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
) {
    let size = opts.px(opts.font_size_pt);
    let color = opts.theme.axis_label;
    let offset = opts.px(3.5) + opts.px(3.5);
    let label_pad = opts.px(4.0);

    let mut tick_h: f32 = 0.0;
    for (x, text) in x_ticks {
        shaper.draw_centered(canvas, text, sx.to_px(*x), plot.bottom + offset, size, color);
        tick_h = tick_h.max(shaper.measure(text, size).1);
    }
    let mut tick_w: f32 = 0.0;
    for (y, text) in y_ticks {
        shaper.draw_right_middle(canvas, text, plot.left - offset, sy.to_px(*y), size, color);
        tick_w = tick_w.max(shaper.measure(text, size).0);
    }

    if !x_axis.label.is_empty() {
        let top = plot.bottom + offset + tick_h + label_pad;
        shaper.draw_centered(canvas, &x_axis.label, (plot.left + plot.right) * 0.5, top, size, color);
    }
    if !y_axis.label.is_empty() {
        let (_, h) = shaper.measure(&y_axis.label, size);
        let left = plot.left - offset - tick_w - label_pad - h;
        shaper.draw_vertical(canvas, &y_axis.label, left, (plot.top + plot.bottom) * 0.5, size, color);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    shaper: &TextShaper,
    plot: RectF,
    legend: &Legend,
    entries: Vec<(String, skia::Color, f32)>,
    points: &[(f32, f32)],
) {
    if entries.is_empty() {
        return;
    }
    let size = opts.px(opts.font_size_pt);
    let em = size;
    let handle_len = 2.0 * em;
    let handle_pad = 0.8 * em;
    let col_spacing = 2.0 * em;
    let label_spacing = 0.5 * em;
    let border_pad = 0.4 * em;
    let axes_pad = 0.5 * em;

    let n = entries.len();
    let columns = legend.columns.clamp(1, n);
    let rows = legend::rows_for(n, columns);

    let mut col_w = vec![0.0f32; columns];
    let mut row_h: f32 = 0.0;
    for (i, (label, _, _)) in entries.iter().enumerate() {
        let (w, h) = shaper.measure(label, size);
        let (c, _) = legend::cell_of(i, n, columns);
        col_w[c] = col_w[c].max(w);
        row_h = row_h.max(h);
    }
    let entries_w: f32 = col_w.iter().map(|w| handle_len + handle_pad + w).sum::<f32>()
        + col_spacing * (columns - 1) as f32;
    let entries_h = rows as f32 * row_h + (rows - 1) as f32 * label_spacing;

    let (title_w, title_h) = legend
        .title
        .as_deref()
        .map(|t| shaper.measure(t, size))
        .unwrap_or((0.0, 0.0));
    let title_gap = if legend.title.is_some() { label_spacing } else { 0.0 };
    let content_w = entries_w.max(title_w);
    let box_w = content_w + 2.0 * border_pad;
    let box_h = title_h + title_gap + entries_h + 2.0 * border_pad;

    let loc = match legend.location {
        LegendLocation::Best => legend::best_location(plot, box_w, box_h, axes_pad, points),
        other => other,
    };
    let rect = legend::place(plot, box_w, box_h, axes_pad, loc);
    debug!(?loc, width = box_w, height = box_h, "legend placed");

    let radius = 0.2 * em;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(opts.theme.legend_background);
    canvas.draw_round_rect(rect.to_skia(), radius, radius, &fill);
    let border = stroke_paint(opts.theme.legend_border, opts.px(0.8));
    canvas.draw_round_rect(rect.to_skia(), radius, radius, &border);

    let inner_left = rect.left + border_pad;
    let inner_top = rect.top + border_pad;
    if let Some(title) = &legend.title {
        let p = shaper.layout_aligned(
            title,
            size,
            opts.theme.axis_label,
            skia::textlayout::TextAlign::Center,
            content_w,
        );
        p.paint(canvas, (inner_left, inner_top));
    }

    let entries_top = inner_top + title_h + title_gap;
    let entries_left = inner_left + (content_w - entries_w) * 0.5;
    let mut col_x = Vec::with_capacity(columns);
    let mut x = entries_left;
    for w in &col_w {
        col_x.push(x);
        x += handle_len + handle_pad + w + col_spacing;
    }
    for (i, (label, color, width_pt)) in entries.iter().enumerate() {
        let (c, r) = legend::cell_of(i, n, columns);
        let x = col_x[c];
        let y = entries_top + r as f32 * (row_h + label_spacing);
        let mid = y + row_h * 0.5;
        let handle = stroke_paint(*color, opts.px(*width_pt));
        canvas.draw_line((x, mid), (x + handle_len, mid), &handle);
        shaper.draw_top_left(canvas, label, x + handle_len + handle_pad, y, size, opts.theme.axis_label);
    }
}
