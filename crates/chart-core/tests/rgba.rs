// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series, Theme};

fn diagonal() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line(vec![(0.0, 0.0), (4.0, 4.0)]));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let chart = diagonal();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits outside the plot: opaque white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let chart = diagonal();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn line_uses_first_palette_color() {
    let chart = diagonal();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // The diagonal passes through the center of the plot area.
    let plot_l = opts.insets.left as f32;
    let plot_r = (w - opts.insets.right) as f32;
    let plot_t = opts.insets.top as f32;
    let plot_b = (h - opts.insets.bottom) as f32;
    let cx = ((plot_l + plot_r) / 2.0) as usize;
    let cy = ((plot_t + plot_b) / 2.0) as usize;
    let i = cy * stride + cx * 4;
    let (r, g, b) = (px[i], px[i + 1], px[i + 2]);
    // tab10 blue (0x1f, 0x77, 0xb4), allowing for antialiasing
    assert!(b > r && b > g, "expected a blue pixel, got ({r}, {g}, {b})");
}

/// Column of pixels at data x inside the plot area, top to bottom.
fn plot_column(px: &[u8], stride: usize, opts: &RenderOptions, w: u32, h: u32, x: f64) -> Vec<[u8; 4]> {
    let left = opts.insets.left as f64;
    let right = (w - opts.insets.right) as f64;
    let col = (left + x / 4.0 * (right - left)) as usize;
    let top = opts.insets.top as usize + 2;
    let bottom = (h - opts.insets.bottom) as usize - 2;
    (top..bottom)
        .map(|row| {
            let i = row * stride + col * 4;
            [px[i], px[i + 1], px[i + 2], px[i + 3]]
        })
        .collect()
}

fn has_color(column: &[[u8; 4]]) -> bool {
    column.iter().any(|p| p[2] as i32 - p[0] as i32 > 30)
}

#[test]
fn nan_sample_breaks_the_line() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line(vec![(0.0, 1.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 2.0), (4.0, 3.0)]));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // x = 0.75 and 3.25 lie on drawn segments; x = 1.75 and 2.25 fall in the gap.
    // None of these columns carries a grid line (ticks every 0.5).
    assert!(has_color(&plot_column(&px, stride, &opts, w, h, 0.75)));
    assert!(has_color(&plot_column(&px, stride, &opts, w, h, 3.25)));
    assert!(!has_color(&plot_column(&px, stride, &opts, w, h, 1.75)));
    assert!(!has_color(&plot_column(&px, stride, &opts, w, h, 2.25)));
}
