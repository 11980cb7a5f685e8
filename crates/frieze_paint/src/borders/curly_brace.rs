//! Curly brace border
//!
//! Every active edge is drawn as a brace: two mirrored cubic curves that meet
//! at the middle of the edge. The outer control points sit one thickness
//! beyond the bounds and the inner ones two thicknesses in, which gives the
//! brace its pronounced bulge.

use frieze_core::{Color, HostRef, Insets, Rect, Result, Stroke, Surface, SurfaceGuard};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bezier::{BezierRenderer, CubicBezier};
use crate::border::{check_bounds, check_insets, check_line_width, Border};
use crate::cache::GeometryCache;

const NAME: &str = "curly-brace";

/// Two curves for each of the four edges
pub type BraceCurves = SmallVec<[CubicBezier; 8]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurlyBraceOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub color: Color,
    pub line_width: i32,
}

impl Default for CurlyBraceOptions {
    fn default() -> Self {
        Self {
            top: 20,
            left: 20,
            bottom: 20,
            right: 20,
            color: Color::BLACK,
            line_width: 1,
        }
    }
}

edge_options!(CurlyBraceOptions);

impl CurlyBraceOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_width(mut self, width: i32) -> Self {
        self.line_width = width;
        self
    }
}

fn curve(points: [(i32, i32); 4]) -> CubicBezier {
    CubicBezier::from_points(points.map(|(x, y)| (x as f32, y as f32)))
}

/// Brace curves for every edge with a positive thickness
///
/// The middle of each edge uses integer halving of the bounds size.
pub fn brace_curves(bounds: Rect, options: &CurlyBraceOptions) -> BraceCurves {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    let (t, l, b, r) = (options.top, options.left, options.bottom, options.right);
    let mid_x = x + w / 2;
    let mid_y = y + h / 2;
    let mut curves = BraceCurves::new();

    if t > 0 {
        curves.push(curve([(x, y + t), (x, y - t), (mid_x, y + 2 * t), (mid_x, y)]));
        curves.push(curve([
            (x + w, y + t),
            (x + w, y - t),
            (mid_x, y + 2 * t),
            (mid_x, y),
        ]));
    }
    if l > 0 {
        curves.push(curve([(x + l, y), (x - l, y), (x + 2 * l, mid_y), (x, mid_y)]));
        curves.push(curve([
            (x, mid_y),
            (x + 2 * l, mid_y),
            (x - l, y + h),
            (x + l, y + h),
        ]));
    }
    if b > 0 {
        curves.push(curve([
            (x, y + h - b),
            (x, y + h + b),
            (mid_x, y + h - 2 * b),
            (mid_x, y + h),
        ]));
        curves.push(curve([
            (x + w, y + h - b),
            (x + w, y + h + b),
            (mid_x, y + h - 2 * b),
            (mid_x, y + h),
        ]));
    }
    if r > 0 {
        curves.push(curve([
            (x + w - r, y),
            (x + w + r, y),
            (x + w - 2 * r, mid_y),
            (x + w, mid_y),
        ]));
        curves.push(curve([
            (x + w, mid_y),
            (x + w - 2 * r, mid_y),
            (x + w + r, y + h),
            (x + w - r, y + h),
        ]));
    }
    curves
}

pub struct CurlyBraceBorder {
    options: CurlyBraceOptions,
    curves: GeometryCache<BraceCurves>,
}

impl CurlyBraceBorder {
    pub fn new(options: CurlyBraceOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        check_line_width(NAME, options.line_width)?;
        Ok(Self {
            options,
            curves: GeometryCache::new(),
        })
    }

    pub fn options(&self) -> &CurlyBraceOptions {
        &self.options
    }
}

impl Border for CurlyBraceBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn paint(&mut self, _host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        let options = &self.options;
        let curves = self
            .curves
            .get_or_compute(bounds, |b| brace_curves(b, options));

        let mut g = SurfaceGuard::new(surface);
        g.set_color(options.color);
        g.set_stroke(Stroke::new(options.line_width as f32));
        g.set_antialiasing(true);
        BezierRenderer::draw_all(&mut *g, curves)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{NullHost, TEST_BOUNDS};
    use frieze_core::{Point, RecordingSurface, Vec2};

    #[test]
    fn test_two_curves_per_active_edge() {
        let options = CurlyBraceOptions::default();
        assert_eq!(brace_curves(TEST_BOUNDS, &options).len(), 8);

        let options = options.with_left(0).with_right(0);
        assert_eq!(brace_curves(TEST_BOUNDS, &options).len(), 4);
    }

    #[test]
    fn test_top_halves_meet_in_the_middle() {
        let curves = brace_curves(Rect::new(0, 0, 101, 60), &CurlyBraceOptions::default());
        let (left, right) = (curves[0], curves[1]);
        assert_eq!(left.p3, right.p3);
        assert_eq!(left.p3, Vec2::new(50.0, 0.0));
        assert_eq!(left.p1, Vec2::new(0.0, -20.0));
        assert_eq!(left.p2, Vec2::new(50.0, 40.0));
    }

    #[test]
    fn test_paint_requests_antialiasing_and_restores() {
        let host = NullHost::new_ref();
        let mut surface = RecordingSurface::new();
        let mut border = CurlyBraceBorder::new(CurlyBraceOptions::default()).unwrap();
        border.paint(&host, &mut surface, TEST_BOUNDS).unwrap();

        assert!(!surface.lines().is_empty());
        assert!(!surface.antialiasing());
        assert_eq!(surface.lines()[0].0, Point::new(0, 20));
    }
}
