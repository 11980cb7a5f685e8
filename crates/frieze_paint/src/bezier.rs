//! Cubic Bezier flattening
//!
//! Curved borders are described as lists of cubic Bezier segments and drawn as
//! straight pixel lines. A segment is split in half with de Casteljau's
//! construction until the chord between its end points is shorter than
//! [`FLATNESS_THRESHOLD`]; each flat piece becomes one line between the
//! rounded end points.
//!
//! Because the two halves of a split share their middle point, consecutive
//! lines always join exactly and the whole sequence runs from `p0` to `p3`.

use frieze_core::{BorderError, Point, Result, Surface, Vec2};

/// Chord length below which a segment is drawn as a single line
pub const FLATNESS_THRESHOLD: f32 = 4.0;

/// Squared form of [`FLATNESS_THRESHOLD`], compared against the squared chord
const FLATNESS_THRESHOLD_SQ: f32 = FLATNESS_THRESHOLD * FLATNESS_THRESHOLD;

/// Deepest recursion allowed before flattening gives up
///
/// Every split roughly halves the chord, so any curve inside pixel space is
/// flat long before this.
pub const MAX_SUBDIVISION_DEPTH: u32 = 64;

/// Largest coordinate magnitude accepted for a control point
///
/// Every integer up to 2^24 is exact in `f32`, so rounded end points land on
/// the intended pixel. Work still grows with curve length: a curve spanning
/// this whole range flattens into millions of lines.
pub const MAX_CONTROL_COORDINATE: f32 = 16_777_216.0;

/// A cubic Bezier segment: start, two control points, end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub const fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Build from four `(x, y)` pairs
    pub fn from_points(points: [(f32, f32); 4]) -> Self {
        let [a, b, c, d] = points.map(|(x, y)| Vec2::new(x, y));
        Self::new(a, b, c, d)
    }

    /// Control points in order
    pub fn points(&self) -> [Vec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Squared distance between the end points
    pub fn chord_length_sq(&self) -> f32 {
        self.p0.distance_sq(self.p3)
    }

    pub fn is_finite(&self) -> bool {
        self.points().iter().all(|p| p.is_finite())
    }

    /// Whether every control point lies inside integer pixel space
    pub fn in_pixel_range(&self) -> bool {
        self.points()
            .iter()
            .all(|p| p.x.abs() <= MAX_CONTROL_COORDINATE && p.y.abs() <= MAX_CONTROL_COORDINATE)
    }

    /// Whether the segment is short enough to draw as a straight line
    pub fn is_flat(&self) -> bool {
        self.chord_length_sq() < FLATNESS_THRESHOLD_SQ
    }

    /// Split at `t = 0.5`
    ///
    /// The two halves trace the same curve; the left half ends where the
    /// right half starts.
    pub fn subdivide(&self) -> (CubicBezier, CubicBezier) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let mid = p012.midpoint(p123);

        (
            CubicBezier::new(self.p0, p01, p012, mid),
            CubicBezier::new(mid, p123, p23, self.p3),
        )
    }
}

/// Flatten `curve`, handing each line to `sink` in drawing order
///
/// Fails with `InvalidGeometry` for non-finite control points or points
/// outside `i32` pixel space, and with `SubdivisionLimit` if the curve does
/// not become flat within [`MAX_SUBDIVISION_DEPTH`] splits. `sink` may already
/// have received lines when the depth limit is hit; use [`flatten_to_vec`] to
/// get all or nothing.
pub fn flatten<F>(curve: &CubicBezier, sink: F) -> Result<()>
where
    F: FnMut(Point, Point),
{
    flatten_with_depth(curve, MAX_SUBDIVISION_DEPTH, sink)
}

/// [`flatten`] with an explicit recursion limit
pub fn flatten_with_depth<F>(curve: &CubicBezier, max_depth: u32, mut sink: F) -> Result<()>
where
    F: FnMut(Point, Point),
{
    if !curve.is_finite() {
        return Err(BorderError::InvalidGeometry(format!(
            "non-finite Bezier control point in {:?}",
            curve
        )));
    }
    if !curve.in_pixel_range() {
        return Err(BorderError::InvalidGeometry(format!(
            "Bezier control point outside pixel space in {:?}",
            curve
        )));
    }
    flatten_at(curve, 0, max_depth, &mut sink)
}

fn flatten_at<F>(curve: &CubicBezier, depth: u32, max_depth: u32, sink: &mut F) -> Result<()>
where
    F: FnMut(Point, Point),
{
    if curve.is_flat() {
        sink(curve.p0.round(), curve.p3.round());
        return Ok(());
    }
    if depth >= max_depth {
        return Err(BorderError::SubdivisionLimit { depth });
    }

    let (left, right) = curve.subdivide();
    flatten_at(&left, depth + 1, max_depth, sink)?;
    flatten_at(&right, depth + 1, max_depth, sink)
}

/// Flatten `curve` into a list of `(from, to)` lines
pub fn flatten_to_vec(curve: &CubicBezier) -> Result<Vec<(Point, Point)>> {
    let mut lines = Vec::new();
    flatten(curve, |from, to| lines.push((from, to)))?;
    Ok(lines)
}

/// Draws Bezier segments on a [`Surface`] as flattened lines
///
/// Curves are flattened before anything is drawn, so a curve that fails to
/// flatten leaves no partial output behind.
pub struct BezierRenderer;

impl BezierRenderer {
    /// Draw a single segment with the surface's current color and stroke
    pub fn draw<S: Surface + ?Sized>(surface: &mut S, curve: &CubicBezier) -> Result<()> {
        for (from, to) in flatten_to_vec(curve)? {
            surface.draw_line(from, to);
        }
        Ok(())
    }

    /// Draw every segment in order
    pub fn draw_all<'a, S, I>(surface: &mut S, curves: I) -> Result<()>
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = &'a CubicBezier>,
    {
        let mut lines = Vec::new();
        for curve in curves {
            flatten(curve, |from, to| lines.push((from, to)))?;
        }
        for (from, to) in lines {
            surface.draw_line(from, to);
        }
        Ok(())
    }
}
