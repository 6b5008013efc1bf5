use image::{Rgba, RgbaImage};
use memo_icon_gen::glyphs::{Calendar, MemoPad};
use memo_icon_gen::icon_gen::{
    apply_mask, default_output_path, diagonal_gradient, image_corners, render_icon,
    resolve_output_path, rounded_mask, CORNER_RADIUS, ICON_SIZE,
};
use memo_icon_gen::palette::Palette;
use std::path::{Path, PathBuf};

#[test]
fn test_render_is_deterministic() {
    let first = render_icon().expect("First render failed");
    let second = render_icon().expect("Second render failed");

    assert_eq!(first.dimensions(), (ICON_SIZE, ICON_SIZE));
    assert!(
        first.as_raw() == second.as_raw(),
        "Two renders should produce identical pixels"
    );
}

#[test]
fn test_gradient_is_monotonic_along_diagonal() {
    let start = Rgba([0x62, 0x00, 0xEE, 255]);
    let end = Rgba([0x9C, 0x27, 0xB0, 255]);
    let gradient = diagonal_gradient(ICON_SIZE, start, end);

    assert_eq!(*gradient.get_pixel(0, 0), start);

    let mut previous = *gradient.get_pixel(0, 0);
    for i in 1..ICON_SIZE {
        let p = *gradient.get_pixel(i, i);
        assert!(p[0] >= previous[0], "Red should rise at ({i}, {i})");
        assert!(p[1] >= previous[1], "Green should rise at ({i}, {i})");
        assert!(p[2] <= previous[2], "Blue should fall at ({i}, {i})");
        assert_eq!(p[3], 255, "Gradient should be opaque");
        previous = p;
    }

    // t never quite reaches 1, so the far corner sits one step short of `end`
    let last = gradient.get_pixel(ICON_SIZE - 1, ICON_SIZE - 1);
    assert_eq!(*last, Rgba([0x9B, 0x26, 0xB0, 255]));
}

#[test]
fn test_gradient_truncates_channels() {
    // t = (1 + 0) / 8 = 0.125, red = 0 + 255 * 0.125 = 31.875
    let gradient = diagonal_gradient(4, Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255]));
    assert_eq!(gradient.get_pixel(1, 0)[0], 31);
    assert_eq!(gradient.get_pixel(0, 1)[0], 31);
}

#[test]
fn test_rounded_mask_clips_corners() {
    let mask = rounded_mask(ICON_SIZE, CORNER_RADIUS);
    let last = ICON_SIZE - 1;

    for (x, y) in [(0, 0), (last, 0), (0, last), (last, last), (40, 40)] {
        assert_eq!(mask.get_pixel(x, y)[0], 0, "({x}, {y}) should be masked out");
    }
    for (x, y) in [(512, 0), (0, 512), (512, 512), (220, 0), (last, 700)] {
        assert_eq!(mask.get_pixel(x, y)[0], 255, "({x}, {y}) should be kept");
    }
}

#[test]
fn test_apply_mask_replaces_alpha() {
    let mut gradient = diagonal_gradient(64, Rgba([10, 20, 30, 255]), Rgba([40, 50, 60, 255]));
    let mask = rounded_mask(64, 16.0);
    apply_mask(&mut gradient, &mask);

    assert_eq!(gradient.get_pixel(0, 0)[3], 0);
    assert_eq!(gradient.get_pixel(32, 32)[3], 255);
    assert_eq!(gradient.get_pixel(32, 32)[0], 25);
}

#[test]
fn test_masked_gradient_overlay_keeps_background_pixels() {
    let mut gradient = diagonal_gradient(64, Rgba([10, 20, 30, 255]), Rgba([40, 50, 60, 255]));
    let mask = rounded_mask(64, 16.0);
    apply_mask(&mut gradient, &mask);

    let mut canvas = RgbaImage::new(64, 64);
    image::imageops::overlay(&mut canvas, &gradient, 0, 0);

    // Masked-out corners stay fully transparent
    for (x, y) in image_corners(64, 64).expect("Canvas is not empty") {
        assert_eq!(*canvas.get_pixel(x, y), Rgba([0, 0, 0, 0]), "({x}, {y})");
    }

    // Everything the mask keeps is copied over unchanged
    for (x, y, pixel) in canvas.enumerate_pixels() {
        if mask.get_pixel(x, y)[0] == 255 {
            assert_eq!(pixel, gradient.get_pixel(x, y), "({x}, {y})");
        }
    }
}

#[test]
fn test_image_corners() {
    assert_eq!(
        image_corners(ICON_SIZE, ICON_SIZE).expect("Icon is not empty"),
        [(0, 0), (1023, 0), (1023, 1023), (0, 1023)]
    );
    assert_eq!(image_corners(1, 1).expect("1x1 is not empty"), [(0, 0); 4]);
    assert!(image_corners(0, 0).is_err());
    assert!(image_corners(16, 0).is_err());
}

#[test]
fn test_default_output_path_sits_in_crate_assets() {
    let path = default_output_path();

    assert_eq!(
        path,
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/icon/app_icon.png")
    );
    assert!(path.is_absolute(), "{} should be absolute", path.display());
}

#[test]
fn test_resolve_output_path() {
    assert_eq!(
        resolve_output_path(None).expect("Default path resolves"),
        default_output_path()
    );

    let relative = resolve_output_path(Some(PathBuf::from("out/icon.png")))
        .expect("Relative path resolves");
    assert!(relative.is_absolute(), "{} should be absolute", relative.display());
    assert!(relative.ends_with("out/icon.png"));
    assert_eq!(
        relative,
        std::env::current_dir()
            .expect("Current directory")
            .join("out/icon.png")
    );

    let absolute = std::env::temp_dir().join("icon.png");
    assert_eq!(
        resolve_output_path(Some(absolute.clone())).expect("Absolute path resolves"),
        absolute
    );
}

#[test]
fn test_icon_corners_transparent_and_center_opaque() {
    let icon = render_icon().expect("Render failed");
    let last = ICON_SIZE - 1;

    for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
        assert_eq!(icon.get_pixel(x, y)[3], 0, "Corner ({x}, {y}) should be transparent");
    }
    assert_eq!(icon.get_pixel(ICON_SIZE / 2, ICON_SIZE / 2)[3], 255);
}

#[test]
fn test_background_shows_gradient_outside_glyphs() {
    let palette = Palette::load().expect("Palette should parse");
    let icon = render_icon().expect("Render failed");
    let gradient = diagonal_gradient(ICON_SIZE, palette.gradient_start, palette.gradient_end);

    for (x, y) in [(512, 60), (100, 512), (950, 300), (300, 950)] {
        assert_eq!(icon.get_pixel(x, y), gradient.get_pixel(x, y), "({x}, {y})");
    }
}

#[test]
fn test_memo_pad_paints_page_fold_and_lines() {
    let palette = Palette::load().expect("Palette should parse");
    let icon = render_icon().expect("Render failed");
    let memo = MemoPad::new();

    // Plain paper between the title and the first body line
    assert_eq!(*icon.get_pixel(300, 300), palette.paper);

    // Inside the folded corner, away from the crease
    let fold_x = (memo.right - memo.fold / 4.0) as u32;
    let fold_y = (memo.top + memo.fold * 3.0 / 4.0) as u32;
    assert_eq!(*icon.get_pixel(fold_x - 20, fold_y), palette.fold);

    // Above the crease the corner is cut away, so the background shows
    let cut_x = (memo.right - 5.0) as u32;
    let cut_y = (memo.top + 5.0) as u32;
    assert_ne!(*icon.get_pixel(cut_x, cut_y), palette.paper);
    assert_ne!(*icon.get_pixel(cut_x, cut_y), palette.fold);

    // Crease midpoint
    let crease = memo.fold_edge();
    let mid_x = ((crease.from.x + crease.to.x) / 2.0) as u32;
    let mid_y = ((crease.from.y + crease.to.y) / 2.0) as u32;
    assert_eq!(*icon.get_pixel(mid_x, mid_y), palette.fold_shadow);

    let title = memo.title_line();
    assert_eq!(*icon.get_pixel(400, title.from.y as u32), palette.title_line);

    let body_lines: Vec<_> = memo.body_lines().collect();
    assert_eq!(body_lines.len(), 3);
    for line in &body_lines {
        assert_eq!(*icon.get_pixel(400, line.from.y as u32), palette.body_line);
    }
    assert_eq!(body_lines[1].from.y - body_lines[0].from.y, 100.0);
    assert_eq!(body_lines[2].from.y - body_lines[1].from.y, 100.0);
}

#[test]
fn test_calendar_card_header_and_hooks() {
    let palette = Palette::load().expect("Palette should parse");
    let icon = render_icon().expect("Render failed");
    let calendar = Calendar::new();

    let left = calendar.left as u32;
    let top = calendar.top as u32;
    let right = calendar.right() as u32;
    let bottom = calendar.bottom() as u32;

    // Header bar is square at the bottom and rounded at the top
    assert_eq!(*icon.get_pixel(left + 110, top + 40), palette.header);
    assert_eq!(*icon.get_pixel(left, top + 80), palette.header);
    assert_ne!(*icon.get_pixel(left, top), palette.header);

    // Card body below the header
    assert_eq!(*icon.get_pixel(left + 10, bottom - 40), palette.paper);
    assert_ne!(*icon.get_pixel(right, bottom), palette.paper);

    // Hooks poke out above the card
    for hook in calendar.hooks() {
        let x = hook.rect.center().x as u32;
        assert_eq!(*icon.get_pixel(x, top - 10), palette.hook);
        assert_eq!(*icon.get_pixel(x, top + 10), palette.hook);
    }
}

#[test]
fn test_exactly_one_date_dot_is_highlighted() {
    let palette = Palette::load().expect("Palette should parse");
    let icon = render_icon().expect("Render failed");
    let grid = Calendar::new().date_grid();

    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells.iter().filter(|cell| cell.highlighted).count(), 1);

    let mut highlighted = 0;
    let mut plain = 0;
    for cell in &cells {
        let center_x = cell.center.x.round() as u32;
        let center_y = cell.center.y.round() as u32;
        let ring_x = (cell.center.x + cell.dot_radius + 2.0).round() as u32;

        if *icon.get_pixel(ring_x, center_y) == palette.highlight {
            highlighted += 1;
            assert_eq!((cell.row, cell.col), (1, 1));
            assert_eq!(
                *icon.get_pixel(center_x, center_y),
                palette.paper,
                "Highlighted dot should have a white punch-out"
            );
        } else {
            assert_eq!(*icon.get_pixel(center_x, center_y), palette.date_dot);
            plain += 1;
        }
    }

    assert_eq!(highlighted, 1);
    assert_eq!(plain, 8);
}

#[test]
fn test_date_grid_divides_card_interior() {
    let calendar = Calendar::new();
    let grid = calendar.date_grid();

    assert_eq!(grid.left, calendar.left + 45.0);
    assert_eq!(grid.top, calendar.top + calendar.bar_height + 30.0);
    assert!((grid.cell_width * 3.0 - 170.0).abs() < 1e-3);
    assert!((grid.cell_height * 3.0 - 125.0).abs() < 1e-3);

    let middle = grid
        .cells()
        .find(|cell| cell.highlighted)
        .expect("Grid should have a highlighted cell");
    assert!((middle.center.x - 710.0).abs() < 1e-3);
    assert!((middle.center.y - 752.5).abs() < 1e-3);
}
