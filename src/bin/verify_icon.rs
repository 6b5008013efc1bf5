use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use memo_icon_gen::glyphs::Calendar;
use memo_icon_gen::icon_gen::{default_output_path, image_corners};
use memo_icon_gen::palette::Palette;
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_output_path);

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .decode()
        .context("Failed to decode image")?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();
    let corners = image_corners(width, height)
        .with_context(|| format!("Nothing to check in {}", path.display()))?;

    println!("Checking app icon: {}", path.display());
    println!("Image dimensions: {}x{}", width, height);

    let transparent_corners = corners
        .iter()
        .filter(|&&(x, y)| rgba_img.get_pixel(x, y)[3] == 0)
        .count();
    let center = rgba_img.get_pixel(width / 2, height / 2);

    println!("\nBackground:");
    println!("  {} of 4 corners transparent", transparent_corners);
    println!("  Center alpha: {}", center[3]);

    // Sample each date dot at its center, and the highlight ring between the
    // punch-out and the outer edge
    let palette = Palette::load()?;
    let grid = Calendar::new().date_grid();
    let mut highlighted = 0;
    let mut plain = 0;
    for cell in grid.cells() {
        let offset = if cell.highlighted {
            cell.dot_radius + 2.0
        } else {
            0.0
        };
        let x = (cell.center.x + offset).round() as u32;
        let y = cell.center.y.round() as u32;
        let p = *rgba_img.get_pixel(x, y);

        if p == palette.highlight {
            highlighted += 1;
        } else if p == palette.date_dot {
            plain += 1;
        }
    }

    println!("\nCalendar grid:");
    println!("  {} highlighted, {} plain dots", highlighted, plain);

    if transparent_corners == 4 && center[3] == 255 && highlighted == 1 && plain == 8 {
        println!("✓ App icon looks right!");
    } else {
        println!("⚠ App icon does not match the expected layout");
    }

    Ok(())
}
