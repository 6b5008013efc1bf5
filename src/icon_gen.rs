use crate::glyphs::{Calendar, MemoPad};
use crate::palette::Palette;
use crate::shapes::{fill, Rect, RoundedRect};
use anyhow::{bail, Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, GrayImage, ImageBuffer, ImageEncoder, Luma, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Edge length of the square icon in pixels
pub const ICON_SIZE: u32 = 1024;

/// Radius of the background's rounded corners
pub const CORNER_RADIUS: f32 = 220.0;

/// Output location relative to the crate root
pub const OUTPUT_PATH: &str = "assets/icon/app_icon.png";

// Define Args struct for library compilation
#[derive(Debug, Default)]
pub struct Args {
    pub output: Option<PathBuf>,
}

pub fn generate_app_icon(args: Args) -> Result<()> {
    let output = resolve_output_path(args.output)?;

    let icon = render_icon()?;
    save_png(&icon, &output)?;

    println!("✓ Generated app icon: {}", output.display());
    println!("  Image size: {}x{}", icon.width(), icon.height());
    Ok(())
}

/// `assets/icon/app_icon.png` next to this crate's Cargo.toml
pub fn default_output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_PATH)
}

/// Absolute path the icon is written to, falling back to
/// [`default_output_path`] when no override is given
pub fn resolve_output_path(output: Option<PathBuf>) -> Result<PathBuf> {
    let path = output.unwrap_or_else(default_output_path);
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = std::env::current_dir().context("Can't resolve the current directory")?;
    Ok(cwd.join(path))
}

/// Compose the full icon in memory
pub fn render_icon() -> Result<RgbaImage> {
    let palette = Palette::load()?;

    let mut canvas = RgbaImage::new(ICON_SIZE, ICON_SIZE);
    draw_background(&mut canvas, &palette);
    MemoPad::new().draw(&mut canvas, &palette);
    Calendar::new().draw(&mut canvas, &palette);

    Ok(canvas)
}

/// Rounded-corner gradient tile composited over the canvas
fn draw_background(canvas: &mut RgbaImage, palette: &Palette) {
    let size = canvas.width().min(canvas.height());
    let mut gradient = diagonal_gradient(size, palette.gradient_start, palette.gradient_end);
    let mask = rounded_mask(size, CORNER_RADIUS);
    apply_mask(&mut gradient, &mask);

    image::imageops::overlay(canvas, &gradient, 0, 0);
}

/// Linear gradient running from the top-left to the bottom-right corner
///
/// Each channel is interpolated on `t = (x + y) / (2 * size)` and truncated.
/// The result is fully opaque.
pub fn diagonal_gradient(size: u32, start: Rgba<u8>, end: Rgba<u8>) -> RgbaImage {
    let span = 2.0 * size as f64;

    ImageBuffer::from_fn(size, size, |x, y| {
        let t = (x + y) as f64 / span;
        let lerp = |c: usize| {
            let from = start[c] as f64;
            let to = end[c] as f64;
            (from + (to - from) * t) as u8
        };
        Rgba([lerp(0), lerp(1), lerp(2), 255])
    })
}

/// Single-channel mask: opaque inside a rounded square covering the whole
/// image, transparent in the cut-off corners
pub fn rounded_mask(size: u32, radius: f32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    if size == 0 {
        return mask;
    }

    let edge = (size - 1) as f32;
    let shape = RoundedRect::new(Rect::new(0.0, 0.0, edge, edge), radius);
    fill(&mut mask, &shape, Luma([255]));
    mask
}

/// Replace the image's alpha channel with the mask
pub fn apply_mask(img: &mut RgbaImage, mask: &GrayImage) {
    for (pixel, coverage) in img.pixels_mut().zip(mask.pixels()) {
        pixel[3] = coverage[0];
    }
}

/// The four extreme pixels, clockwise from the top-left
pub fn image_corners(width: u32, height: u32) -> Result<[(u32, u32); 4]> {
    if width == 0 || height == 0 {
        bail!("Image is empty ({width}x{height})");
    }

    let (right, bottom) = (width - 1, height - 1);
    Ok([(0, 0), (right, 0), (right, bottom), (0, bottom)])
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Can't create output directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width(), image.height())
        .context("Failed to write PNG")?;
    out_file.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}
