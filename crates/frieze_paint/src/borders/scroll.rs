//! Parchment scroll border
//!
//! Each active edge is a rolled scroll: a curl at each end joined by a long
//! S-shaped sweep between the one-fifth and four-fifths points, plus a small
//! chevron accent at the middle of the edge. The curl offsets are fixed pixel
//! sizes and do not scale with the thickness.
//!
//! Color and line width have no defaults and must be set.

use frieze_core::{
    BorderError, Color, HostRef, Insets, Point, Rect, Result, Stroke, Surface, SurfaceGuard,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bezier::{BezierRenderer, CubicBezier};
use crate::border::{check_bounds, check_insets, check_line_width, Border};
use crate::cache::GeometryCache;

const NAME: &str = "scroll";

/// Horizontal reach of an end curl
const CURL: f32 = 10.0;
/// Control point reach of the sweep between the curls
const SWEEP: f32 = 30.0;
/// Half width of the accent chevron
const ACCENT: i32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<i32>,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            top: 16,
            left: 16,
            bottom: 16,
            right: 16,
            color: None,
            line_width: None,
        }
    }
}

edge_options!(ScrollOptions);

impl ScrollOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: i32) -> Self {
        self.line_width = Some(width);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    /// Three curves per active edge: near curl, sweep, far curl
    pub curves: SmallVec<[CubicBezier; 12]>,
    /// Two accent lines per active edge
    pub accents: SmallVec<[(Point, Point); 8]>,
}

/// Curl, sweep, curl along a horizontal edge; curls run from row `base` out
/// to row `tip`
fn horizontal_scroll(curves: &mut SmallVec<[CubicBezier; 12]>, bounds: Rect, tip: i32, base: i32) {
    let left_x = bounds.x as f32 + bounds.width as f32 / 5.0;
    let right_x = bounds.x as f32 + bounds.width as f32 * 4.0 / 5.0;
    let (tip, base) = (tip as f32, base as f32);
    curves.extend([
        CubicBezier::from_points([
            (left_x, base),
            (left_x - CURL, base),
            (left_x - CURL, tip),
            (left_x, tip),
        ]),
        CubicBezier::from_points([
            (left_x, tip),
            (left_x + SWEEP, tip),
            (right_x - SWEEP, base),
            (right_x, base),
        ]),
        CubicBezier::from_points([
            (right_x, base),
            (right_x + CURL, base),
            (right_x + CURL, tip),
            (right_x, tip),
        ]),
    ]);
}

/// Curl, sweep, curl along a vertical edge; curls run from column `base` out
/// to column `tip`
fn vertical_scroll(curves: &mut SmallVec<[CubicBezier; 12]>, bounds: Rect, base: i32, tip: i32) {
    let top_y = bounds.y as f32 + bounds.height as f32 / 5.0;
    let bottom_y = bounds.y as f32 + bounds.height as f32 * 4.0 / 5.0;
    let (base, tip) = (base as f32, tip as f32);
    curves.extend([
        CubicBezier::from_points([
            (base, top_y),
            (base, top_y - CURL),
            (tip, top_y - CURL),
            (tip, top_y),
        ]),
        CubicBezier::from_points([
            (tip, top_y),
            (tip, top_y + SWEEP),
            (base, bottom_y - SWEEP),
            (base, bottom_y),
        ]),
        CubicBezier::from_points([
            (base, bottom_y),
            (base, bottom_y + CURL),
            (tip, bottom_y + CURL),
            (tip, bottom_y),
        ]),
    ]);
}

/// Scroll curves and accents for every edge with a positive thickness
///
/// Edges are emitted top, left, bottom, right.
pub fn scroll_geometry(bounds: Rect, insets: Insets, line_width: i32) -> ScrollGeometry {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    let lw = line_width;
    let mut geometry = ScrollGeometry::default();

    if insets.top > 0 {
        horizontal_scroll(&mut geometry.curves, bounds, y + 1, y + insets.top - lw);
    }
    if insets.left > 0 {
        vertical_scroll(&mut geometry.curves, bounds, x + insets.left - lw, x + lw);
    }
    if insets.bottom > 0 {
        horizontal_scroll(
            &mut geometry.curves,
            bounds,
            y + h - insets.bottom + lw,
            y + h - lw,
        );
    }
    if insets.right > 0 {
        vertical_scroll(
            &mut geometry.curves,
            bounds,
            x + w - insets.right + lw,
            x + w - lw,
        );
    }

    let mid_x = x + w / 2;
    let mid_y = y + h / 2;
    let p = Point::new;
    if insets.top > 0 {
        let (low, high) = (y + insets.top - lw, y + lw);
        geometry.accents.push((p(mid_x - ACCENT, low), p(mid_x, high)));
        geometry.accents.push((p(mid_x, low), p(mid_x + ACCENT, high)));
    }
    if insets.left > 0 {
        let (outer, inner) = (x + lw, x + insets.left - lw);
        geometry.accents.push((p(outer, mid_y - ACCENT), p(inner, mid_y)));
        geometry.accents.push((p(outer, mid_y), p(inner, mid_y + ACCENT)));
    }
    if insets.bottom > 0 {
        let (outer, inner) = (y + h - lw, y + h - insets.bottom + lw);
        geometry.accents.push((p(mid_x - ACCENT, outer), p(mid_x, inner)));
        geometry.accents.push((p(mid_x, outer), p(mid_x + ACCENT, inner)));
    }
    if insets.right > 0 {
        let (inner, outer) = (x + w - insets.right - lw, x + w - lw);
        geometry.accents.push((p(inner, mid_y - ACCENT), p(outer, mid_y)));
        geometry.accents.push((p(inner, mid_y), p(outer, mid_y + ACCENT)));
    }

    geometry
}

pub struct ScrollBorder {
    options: ScrollOptions,
    color: Color,
    line_width: i32,
    geometry: GeometryCache<ScrollGeometry>,
}

impl ScrollBorder {
    /// Fails with `MissingConfiguration` when color or line width is unset
    pub fn new(options: ScrollOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        let color = options.color.ok_or(BorderError::MissingConfiguration {
            border: NAME,
            field: "color",
        })?;
        let line_width = options.line_width.ok_or(BorderError::MissingConfiguration {
            border: NAME,
            field: "line_width",
        })?;
        check_line_width(NAME, line_width)?;

        Ok(Self {
            options,
            color,
            line_width,
            geometry: GeometryCache::new(),
        })
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }
}

impl Border for ScrollBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn paint(&mut self, _host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        let insets = self.options.insets();
        let line_width = self.line_width;
        let geometry = self
            .geometry
            .get_or_compute(bounds, |b| scroll_geometry(b, insets, line_width));

        let mut g = SurfaceGuard::new(surface);
        g.set_color(self.color);
        g.set_stroke(Stroke::new(line_width as f32));
        g.set_antialiasing(true);
        BezierRenderer::draw_all(&mut *g, &geometry.curves)?;
        for &(from, to) in &geometry.accents {
            g.draw_line(from, to);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{NullHost, TEST_BOUNDS};
    use frieze_core::{RecordingSurface, Vec2};

    #[test]
    fn test_requires_color_and_line_width() {
        assert_eq!(
            ScrollBorder::new(ScrollOptions::default().with_line_width(1)).err(),
            Some(BorderError::MissingConfiguration {
                border: "scroll",
                field: "color"
            })
        );
        assert_eq!(
            ScrollBorder::new(ScrollOptions::default().with_color(Color::BLACK)).err(),
            Some(BorderError::MissingConfiguration {
                border: "scroll",
                field: "line_width"
            })
        );
        assert!(ScrollBorder::new(
            ScrollOptions::default()
                .with_color(Color::BLACK)
                .with_line_width(1)
        )
        .is_ok());
    }

    #[test]
    fn test_counts_per_edge() {
        let geometry = scroll_geometry(TEST_BOUNDS, Insets::uniform(16), 1);
        assert_eq!(geometry.curves.len(), 12);
        assert_eq!(geometry.accents.len(), 8);

        let geometry = scroll_geometry(TEST_BOUNDS, Insets::new(16, 0, 0, 0), 1);
        assert_eq!(geometry.curves.len(), 3);
        assert_eq!(geometry.accents.len(), 2);
    }

    #[test]
    fn test_top_edge_layout() {
        let geometry = scroll_geometry(Rect::new(0, 0, 200, 100), Insets::new(16, 0, 0, 0), 1);
        let [curl, sweep, far] = [geometry.curves[0], geometry.curves[1], geometry.curves[2]];

        assert_eq!(curl.p0, Vec2::new(40.0, 15.0));
        assert_eq!(curl.p3, Vec2::new(40.0, 1.0));
        assert_eq!(sweep.p0, curl.p3);
        assert_eq!(sweep.p3, Vec2::new(160.0, 15.0));
        assert_eq!(far.p0, sweep.p3);
        assert_eq!(far.p1, Vec2::new(170.0, 15.0));

        assert_eq!(
            geometry.accents[0],
            (Point::new(90, 15), Point::new(100, 1))
        );
    }

    #[test]
    fn test_paint_draws_curves_then_accents() {
        let host = NullHost::new_ref();
        let mut surface = RecordingSurface::new();
        let mut border = ScrollBorder::new(
            ScrollOptions::default()
                .with_color(Color::BLUE)
                .with_line_width(2),
        )
        .unwrap();
        border.paint(&host, &mut surface, TEST_BOUNDS).unwrap();

        let lines = surface.lines();
        let geometry = scroll_geometry(TEST_BOUNDS, Insets::uniform(16), 2);
        assert_eq!(&lines[lines.len() - 8..], geometry.accents.as_slice());
        assert_eq!(surface.color(), Color::BLACK);
    }
}
