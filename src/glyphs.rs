//! Memo-pad and calendar glyphs
//!
//! Each glyph is a small layout struct holding the handful of numbers the
//! artwork was designed around. Every primitive is derived from those numbers,
//! so moving a glyph means changing one field.

use crate::palette::Palette;
use crate::shapes::{fill, Ellipse, Line, Point, Polygon, Rect, RoundedRect};
use image::RgbaImage;

const FOLD_EDGE_WIDTH: f32 = 3.0;
const LINE_MARGIN: f32 = 60.0;
const TITLE_OFFSET: f32 = 100.0;
const TITLE_SHORTENING: f32 = 100.0;
const TITLE_WIDTH: f32 = 8.0;
const BODY_LINE_COUNT: usize = 3;
const BODY_LINE_OFFSET: f32 = 180.0;
const BODY_LINE_SPACING: f32 = 100.0;
const BODY_LINE_WIDTH: f32 = 5.0;

const HOOK_HALF_WIDTH: f32 = 8.0;
const HOOK_RADIUS: f32 = 4.0;
const HOOK_OVERHANG: f32 = 15.0;
const HOOK_DEPTH: f32 = 25.0;
const HOOK_INSET: f32 = 70.0;

const GRID_MARGIN: f32 = 45.0;
const GRID_GAP: f32 = 30.0;
const GRID_ROWS: u32 = 3;
const GRID_COLS: u32 = 3;
const DOT_RADIUS: f32 = 10.0;
const HIGHLIGHT_GROWTH: f32 = 6.0;
const PUNCH_SHRINK: f32 = 2.0;

/// A sheet of paper with its top-right corner folded over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoPad {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Length of the folded corner along each edge
    pub fold: f32,
}

impl MemoPad {
    pub const fn new() -> Self {
        Self {
            left: 200.0,
            top: 160.0,
            right: 720.0,
            bottom: 780.0,
            fold: 110.0,
        }
    }

    /// Page outline with the top-right corner cut off
    pub fn body(&self) -> Polygon {
        Polygon::new(vec![
            Point::new(self.left, self.top),
            Point::new(self.right - self.fold, self.top),
            Point::new(self.right, self.top + self.fold),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ])
    }

    pub fn fold_triangle(&self) -> Polygon {
        Polygon::new(vec![
            Point::new(self.right - self.fold, self.top),
            Point::new(self.right, self.top + self.fold),
            Point::new(self.right - self.fold, self.top + self.fold),
        ])
    }

    /// Diagonal crease between the page and the fold
    pub fn fold_edge(&self) -> Line {
        Line::new(
            Point::new(self.right - self.fold, self.top),
            Point::new(self.right, self.top + self.fold),
            FOLD_EDGE_WIDTH,
        )
    }

    pub fn title_line(&self) -> Line {
        let y = self.top + TITLE_OFFSET;
        Line::new(
            Point::new(self.left + LINE_MARGIN, y),
            Point::new(self.right - LINE_MARGIN - TITLE_SHORTENING, y),
            TITLE_WIDTH,
        )
    }

    pub fn body_lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..BODY_LINE_COUNT).map(move |i| {
            let y = self.top + BODY_LINE_OFFSET + i as f32 * BODY_LINE_SPACING;
            Line::new(
                Point::new(self.left + LINE_MARGIN, y),
                Point::new(self.right - LINE_MARGIN, y),
                BODY_LINE_WIDTH,
            )
        })
    }

    pub fn draw(&self, canvas: &mut RgbaImage, palette: &Palette) {
        fill(canvas, &self.body(), palette.paper);
        fill(canvas, &self.fold_triangle(), palette.fold);
        fill(canvas, &self.fold_edge(), palette.fold_shadow);

        for line in self.body_lines() {
            fill(canvas, &line, palette.body_line);
        }
        fill(canvas, &self.title_line(), palette.title_line);
    }
}

impl Default for MemoPad {
    fn default() -> Self {
        Self::new()
    }
}

/// A tear-off calendar card with a dot per day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calendar {
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub radius: f32,
    pub bar_height: f32,
}

impl Calendar {
    pub const fn new() -> Self {
        Self {
            left: 580.0,
            top: 600.0,
            size: 260.0,
            radius: 30.0,
            bar_height: 60.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.size
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.size
    }

    pub fn card(&self) -> RoundedRect {
        RoundedRect::new(
            Rect::new(self.left, self.top, self.right(), self.bottom()),
            self.radius,
        )
    }

    /// Header bar as a rounded cap plus a square-cornered strip covering the
    /// cap's lower corners, so only the top two corners stay round
    pub fn header(&self) -> (RoundedRect, Rect) {
        let bar_bottom = self.top + self.bar_height;
        let cap = RoundedRect::new(
            Rect::new(self.left, self.top, self.right(), bar_bottom + self.radius),
            self.radius,
        );
        let strip = Rect::new(self.left, bar_bottom, self.right(), bar_bottom + self.radius);
        (cap, strip)
    }

    /// Binding rings straddling the top edge
    pub fn hooks(&self) -> [RoundedRect; 2] {
        let hook = |x: f32| {
            RoundedRect::new(
                Rect::new(
                    x - HOOK_HALF_WIDTH,
                    self.top - HOOK_OVERHANG,
                    x + HOOK_HALF_WIDTH,
                    self.top + HOOK_DEPTH,
                ),
                HOOK_RADIUS,
            )
        };
        [hook(self.left + HOOK_INSET), hook(self.right() - HOOK_INSET)]
    }

    pub fn date_grid(&self) -> DateGrid {
        let rows = GRID_ROWS;
        let cols = GRID_COLS;
        DateGrid {
            left: self.left + GRID_MARGIN,
            top: self.top + self.bar_height + GRID_GAP,
            cell_width: (self.size - 2.0 * GRID_MARGIN) / cols as f32,
            cell_height: (self.size - self.bar_height - GRID_GAP - GRID_MARGIN) / rows as f32,
            rows,
            cols,
            dot_radius: DOT_RADIUS,
        }
    }

    pub fn draw(&self, canvas: &mut RgbaImage, palette: &Palette) {
        fill(canvas, &self.card(), palette.paper);

        let (cap, strip) = self.header();
        fill(canvas, &cap, palette.header);
        fill(canvas, &strip, palette.header);

        for hook in &self.hooks() {
            fill(canvas, hook, palette.hook);
        }

        for cell in self.date_grid().cells() {
            if cell.highlighted {
                fill(canvas, &cell.highlight_dot(), palette.highlight);
                fill(canvas, &cell.punch_out(), palette.paper);
            } else {
                fill(canvas, &cell.dot(), palette.date_dot);
            }
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Evenly spaced day dots below the calendar header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateGrid {
    pub left: f32,
    pub top: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: u32,
    pub cols: u32,
    pub dot_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
    pub center: Point,
    pub dot_radius: f32,
    pub highlighted: bool,
}

impl DateGrid {
    /// Cells in row-major order; the middle cell is the highlighted one
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let (mid_row, mid_col) = (self.rows / 2, self.cols / 2);
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| GridCell {
                row,
                col,
                center: Point::new(
                    self.left + col as f32 * self.cell_width + self.cell_width / 2.0,
                    self.top + row as f32 * self.cell_height + self.cell_height / 2.0,
                ),
                dot_radius: self.dot_radius,
                highlighted: row == mid_row && col == mid_col,
            })
        })
    }
}

impl GridCell {
    pub fn dot(&self) -> Ellipse {
        Ellipse::circle(self.center, self.dot_radius)
    }

    pub fn highlight_dot(&self) -> Ellipse {
        Ellipse::circle(self.center, self.dot_radius + HIGHLIGHT_GROWTH)
    }

    pub fn punch_out(&self) -> Ellipse {
        Ellipse::circle(self.center, self.dot_radius - PUNCH_SHRINK)
    }
}
