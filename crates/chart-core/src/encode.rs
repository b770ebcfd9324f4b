// File: crates/chart-core/src/encode.rs
// Summary: PNG encoding of RGBA8 buffers with physical pixel dimensions (DPI).

use crate::error::ChartResult;

const METERS_PER_INCH: f64 = 0.0254;

/// Pixels per meter for a resolution in dots per inch.
pub fn dpi_to_ppm(dpi: f32) -> u32 {
    (dpi.max(0.0) as f64 / METERS_PER_INCH).round() as u32
}

/// Encode unpremultiplied RGBA8 pixels (tightly packed rows) as PNG,
/// recording `dpi` in the pHYs chunk.
pub fn encode_png(rgba: &[u8], width: u32, height: u32, dpi: f32) -> ChartResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let ppm = dpi_to_ppm(dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions { xppu: ppm, yppu: ppm, unit: png::Unit::Meter }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
    }
    Ok(out)
}
