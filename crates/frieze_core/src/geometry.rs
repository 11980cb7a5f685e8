//! Pixel geometry
//!
//! Border geometry is computed in integer device pixels, matching the host
//! toolkit's layout units. Curve control points are the one exception and use
//! [`Vec2`].

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Points
// ─────────────────────────────────────────────────────────────────────────────

/// An integer pixel position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A floating point 2D vector, used for curve control points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between two vectors
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Squared euclidean distance to `other`
    pub fn distance_sq(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Snap to the nearest pixel, rounding halves toward positive infinity
    pub fn round(self) -> Point {
        Point::new(
            (self.x + 0.5).floor() as i32,
            (self.y + 0.5).floor() as i32,
        )
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x as f32, p.y as f32)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rectangles
// ─────────────────────────────────────────────────────────────────────────────

/// An integer rectangle: origin plus size
///
/// Two rectangles are the same rectangle only by value; hosts hand out fresh
/// copies on every paint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rectangle covering both; empty operands are ignored
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Shrink by per-side insets. The result may have a negative size.
    pub fn inset(&self, insets: &Insets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Insets
// ─────────────────────────────────────────────────────────────────────────────

/// Space reserved on each side of a component for its border
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(size: i32) -> Self {
        Self::new(size, size, size, size)
    }

    /// left + right
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// top + bottom
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Polygons
// ─────────────────────────────────────────────────────────────────────────────

/// A closed polygon given by its vertices in drawing order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from parallel coordinate arrays; extra entries in the longer
    /// array are ignored
    pub fn from_coords(xs: &[i32], ys: &[i32]) -> Self {
        Self {
            points: xs
                .iter()
                .zip(ys)
                .map(|(&x, &y)| Point::new(x, y))
                .collect(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of the vertices
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
