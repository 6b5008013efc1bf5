//! Raster primitives used to paint the icon
//!
//! Every shape answers two questions: which pixel box it may touch
//! ([`Shape::bounds`]) and whether a given pixel lies inside it
//! ([`Shape::contains`]). [`fill`] walks the box and paints the covered
//! pixels, replacing whatever was there before (alpha included).
//!
//! Coordinates are pixel indices, so a rectangle from `(0, 0)` to `(9, 9)`
//! covers a 10×10 block.

use image::GenericImage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, inclusive on all four edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square box of half-side `radius` around a center point
    pub fn around(center: Point, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }
}

/// Ellipse inscribed in its bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub bounds: Rect,
}

impl Ellipse {
    pub fn circle(center: Point, radius: f32) -> Self {
        Self {
            bounds: Rect::around(center, radius),
        }
    }
}

/// Closed polygon; the last point connects back to the first
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Straight stroke with flat caps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub width: f32,
}

impl Line {
    pub const fn new(from: Point, to: Point, width: f32) -> Self {
        Self { from, to, width }
    }
}

pub trait Shape {
    /// Box that encloses every pixel the shape can cover
    fn bounds(&self) -> Rect;

    /// Whether the pixel at `(x, y)` is covered
    fn contains(&self, x: f32, y: f32) -> bool;
}

impl Shape for Rect {
    fn bounds(&self) -> Rect {
        *self
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

impl Shape for RoundedRect {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        if !self.rect.contains(x, y) {
            return false;
        }

        let radius = self
            .radius
            .min(self.rect.width() / 2.0)
            .min(self.rect.height() / 2.0)
            .max(0.0);

        // Distance to the inner rectangle whose corners are the arc centers
        let nearest_x = x.clamp(self.rect.left + radius, self.rect.right - radius);
        let nearest_y = y.clamp(self.rect.top + radius, self.rect.bottom - radius);
        let dx = x - nearest_x;
        let dy = y - nearest_y;

        dx * dx + dy * dy <= radius * radius
    }
}

impl Shape for Ellipse {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let center = self.bounds.center();
        let rx = self.bounds.width() / 2.0;
        let ry = self.bounds.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        let nx = (x - center.x) / rx;
        let ny = (y - center.y) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

impl Shape for Polygon {
    fn bounds(&self) -> Rect {
        let mut bounds = Rect::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        for p in &self.points {
            bounds.left = bounds.left.min(p.x);
            bounds.top = bounds.top.min(p.y);
            bounds.right = bounds.right.max(p.x);
            bounds.bottom = bounds.bottom.max(p.y);
        }
        bounds
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let p = Point::new(x, y);
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];

            // Pixels sitting on the outline count as filled
            if distance_to_segment(p, a, b) <= 0.5 {
                return true;
            }

            if (a.y > y) != (b.y > y) {
                let cross_x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
                if x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }
}

impl Shape for Line {
    fn bounds(&self) -> Rect {
        let half = self.width / 2.0;
        Rect::new(
            self.from.x.min(self.to.x) - half,
            self.from.y.min(self.to.y) - half,
            self.from.x.max(self.to.x) + half,
            self.from.y.max(self.to.y) + half,
        )
    }

    fn contains(&self, x: f32, y: f32) -> bool {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let len_sq = dx * dx + dy * dy;
        let p = Point::new(x, y);

        if len_sq == 0.0 {
            return distance(p, self.from) * 2.0 <= self.width;
        }

        let t = ((x - self.from.x) * dx + (y - self.from.y) * dy) / len_sq;
        if !(0.0..=1.0).contains(&t) {
            return false;
        }

        let foot = Point::new(self.from.x + t * dx, self.from.y + t * dy);
        distance(p, foot) * 2.0 <= self.width
    }
}

/// Paint every pixel covered by `shape` with `color`
///
/// Pixels outside the image are skipped, so shapes may hang over the edge.
pub fn fill<I, S>(img: &mut I, shape: &S, color: I::Pixel)
where
    I: GenericImage,
    S: Shape + ?Sized,
{
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let bounds = shape.bounds();
    let x_end = bounds.right.ceil().min((width - 1) as f32);
    let y_end = bounds.bottom.ceil().min((height - 1) as f32);
    if x_end < 0.0 || y_end < 0.0 {
        return;
    }

    let x_start = bounds.left.floor().max(0.0) as u32;
    let y_start = bounds.top.floor().max(0.0) as u32;
    let (x_end, y_end) = (x_end as u32, y_end as u32);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            if shape.contains(x as f32, y as f32) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}
