//! Scalloped border
//!
//! Each active edge is two shallow arcs, each spanning half the edge and
//! dipping inward by the edge thickness at its quarter points.

use frieze_core::{Color, HostRef, Insets, Rect, Result, Stroke, Surface, SurfaceGuard};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bezier::{BezierRenderer, CubicBezier};
use crate::border::{check_bounds, check_insets, check_line_width, Border};
use crate::cache::GeometryCache;

const NAME: &str = "scallop";

/// Two arcs for each of the four edges
pub type ScallopCurves = SmallVec<[CubicBezier; 8]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScallopOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub line_color: Color,
    pub line_width: i32,
}

impl Default for ScallopOptions {
    fn default() -> Self {
        Self {
            top: 12,
            left: 12,
            bottom: 12,
            right: 12,
            line_color: Color::BLACK,
            line_width: 1,
        }
    }
}

edge_options!(ScallopOptions);

impl ScallopOptions {
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_line_width(mut self, width: i32) -> Self {
        self.line_width = width;
        self
    }
}

/// An arc from `start` to `end` whose two control points coincide at `peak`
fn arc(start: (f32, f32), peak: (f32, f32), end: (f32, f32)) -> CubicBezier {
    CubicBezier::from_points([start, peak, peak, end])
}

/// Scallop arcs for every edge with a positive thickness
///
/// Quarter points are computed in floating point.
pub fn scallop_curves(bounds: Rect, options: &ScallopOptions) -> ScallopCurves {
    let x = bounds.x as f32;
    let y = bounds.y as f32;
    let w = bounds.width as f32;
    let h = bounds.height as f32;
    let (t, l, b, r) = (
        options.top as f32,
        options.left as f32,
        options.bottom as f32,
        options.right as f32,
    );
    let mut curves = ScallopCurves::new();

    if options.top > 0 {
        curves.push(arc((x, y), (x + w / 4.0, y + t), (x + w / 2.0, y)));
        curves.push(arc((x + w / 2.0, y), (x + 3.0 * w / 4.0, y + t), (x + w, y)));
    }
    if options.left > 0 {
        curves.push(arc((x, y), (x + l, y + h / 4.0), (x, y + h / 2.0)));
        curves.push(arc((x, y + h / 2.0), (x + l, y + 3.0 * h / 4.0), (x, y + h)));
    }
    if options.bottom > 0 {
        let edge = y + h;
        curves.push(arc((x, edge), (x + w / 4.0, edge - b), (x + w / 2.0, edge)));
        curves.push(arc(
            (x + w / 2.0, edge),
            (x + 3.0 * w / 4.0, edge - b),
            (x + w, edge),
        ));
    }
    if options.right > 0 {
        let edge = x + w;
        curves.push(arc((edge, y), (edge - r, y + h / 4.0), (edge, y + h / 2.0)));
        curves.push(arc(
            (edge, y + h / 2.0),
            (edge - r, y + 3.0 * h / 4.0),
            (edge, y + h),
        ));
    }
    curves
}

pub struct ScallopBorder {
    options: ScallopOptions,
    curves: GeometryCache<ScallopCurves>,
}

impl ScallopBorder {
    pub fn new(options: ScallopOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        check_line_width(NAME, options.line_width)?;
        Ok(Self {
            options,
            curves: GeometryCache::new(),
        })
    }

    pub fn options(&self) -> &ScallopOptions {
        &self.options
    }

    pub fn cache(&self) -> &GeometryCache<ScallopCurves> {
        &self.curves
    }
}

impl Border for ScallopBorder {
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
            .get_or_compute(bounds, |b| scallop_curves(b, options));

        let mut g = SurfaceGuard::new(surface);
        g.set_color(options.line_color);
        g.set_stroke(Stroke::new(options.line_width as f32));
        g.set_antialiasing(true);
        BezierRenderer::draw_all(&mut *g, curves)?;
        Ok(())
    }
}
