//! Round-cornered border
//!
//! Each corner gets an oval twice as large as the adjacent edge thicknesses,
//! clipped to the edge bands so only its outer quarter shows. The straight
//! edges between the corners are either one rectangle outline or eight short
//! line segments that join the ovals.

use frieze_core::{
    ClipShape, Color, HostRef, Insets, Point, Rect, Result, Stroke, Surface, SurfaceGuard,
};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, check_insets, check_line_width, Border};
use crate::cache::GeometryCache;

const NAME: &str = "circle-corners";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleCornersOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub fill_color: Color,
    pub line_color: Color,
    /// Outline the inner edge as one rectangle instead of joining segments
    pub draw_edges: bool,
    pub line_width: i32,
}

impl Default for CircleCornersOptions {
    fn default() -> Self {
        Self {
            top: 8,
            left: 8,
            bottom: 8,
            right: 8,
            fill_color: Color::WHITE,
            line_color: Color::BLACK,
            draw_edges: false,
            line_width: 1,
        }
    }
}

edge_options!(CircleCornersOptions);

impl CircleCornersOptions {
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_draw_edges(mut self, draw_edges: bool) -> Self {
        self.draw_edges = draw_edges;
        self
    }

    pub fn with_line_width(mut self, width: i32) -> Self {
        self.line_width = width;
        self
    }
}

/// How the straight stretches between the corner ovals are drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CornerEdges {
    /// A single rectangle outline along the inner edge
    Outline(Rect),
    /// Two segments per corner joining the oval to the inner edge
    Segments(Vec<(Point, Point)>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CornerGeometry {
    /// Edge bands the ovals are clipped to: top, left, bottom, right
    pub bands: [Rect; 4],
    /// Oval bounds: top-left, bottom-left, bottom-right, top-right
    pub ovals: [Rect; 4],
    pub edges: CornerEdges,
}

pub fn corner_geometry(bounds: Rect, options: &CircleCornersOptions) -> CornerGeometry {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    let (t, l, b, r) = (options.top, options.left, options.bottom, options.right);
    let lw = options.line_width;

    let bands = [
        Rect::new(x, y, w, t),
        Rect::new(x, y, l, h),
        Rect::new(x, y + h - b, w, b),
        Rect::new(x + w - r, y, r, h),
    ];

    // The bottom and right ovals are pulled in by the line width
    let ovals = [
        Rect::new(x, y, 2 * l, 2 * t),
        Rect::new(x, y + h - 2 * b - lw, 2 * l, 2 * b),
        Rect::new(x + w - 2 * r - lw, y + h - 2 * b - lw, 2 * r, 2 * b),
        Rect::new(x + w - 2 * r - lw, y, 2 * r, 2 * t),
    ];

    let edges = if options.draw_edges {
        CornerEdges::Outline(Rect::new(
            x + l - lw,
            y + t - lw,
            w - (l + r - lw),
            h - (t + b - lw),
        ))
    } else {
        let left_x = x + l - lw;
        let right_x = x + w - r;
        let top_y = y + t - lw;
        let bottom_y = y + h - b;

        let p = Point::new;
        CornerEdges::Segments(vec![
            (p(left_x, top_y), p(x + 2 * l, top_y)),
            (p(left_x, top_y), p(left_x, y + 2 * t)),
            (p(left_x, bottom_y), p(x + 2 * l, bottom_y)),
            (p(left_x, bottom_y), p(left_x, y + h - 2 * b - lw)),
            (p(x + w - 2 * r, bottom_y), p(right_x, bottom_y)),
            (p(right_x, bottom_y), p(right_x, y + h - 2 * b)),
            (p(x + w - 2 * r, top_y), p(right_x, top_y)),
            (p(right_x, top_y), p(right_x, y + 2 * t - lw)),
        ])
    };

    CornerGeometry {
        bands,
        ovals,
        edges,
    }
}

pub struct CircleCornersBorder {
    options: CircleCornersOptions,
    geometry: GeometryCache<CornerGeometry>,
}

impl CircleCornersBorder {
    pub fn new(options: CircleCornersOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        check_line_width(NAME, options.line_width)?;
        Ok(Self {
            options,
            geometry: GeometryCache::new(),
        })
    }

    pub fn options(&self) -> &CircleCornersOptions {
        &self.options
    }
}

impl Border for CircleCornersBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn paint(&mut self, _host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        let options = &self.options;
        let geometry = self
            .geometry
            .get_or_compute(bounds, |b| corner_geometry(b, options));

        let mut g = SurfaceGuard::new(surface);
        g.set_stroke(Stroke::new(options.line_width as f32));
        let clip = ClipShape::union(geometry.bands).intersect(g.saved().clip.clone());
        g.set_clip(Some(clip));

        g.set_color(options.fill_color);
        for oval in geometry.ovals {
            g.fill_oval(oval);
        }
        g.set_color(options.line_color);
        for oval in geometry.ovals {
            g.draw_oval(oval);
        }

        match &geometry.edges {
            CornerEdges::Outline(rect) => g.draw_rect(*rect),
            CornerEdges::Segments(segments) => {
                for &(from, to) in segments {
                    g.draw_line(from, to);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{NullHost, TEST_BOUNDS};
    use frieze_core::{RecordingSurface, SurfaceCommand};

    #[test]
    fn test_oval_placement() {
        let geometry = corner_geometry(TEST_BOUNDS, &CircleCornersOptions::default());
        assert_eq!(
            geometry.ovals,
            [
                Rect::new(0, 0, 16, 16),
                Rect::new(0, 83, 16, 16),
                Rect::new(183, 83, 16, 16),
                Rect::new(183, 0, 16, 16),
            ]
        );
    }

    #[test]
    fn test_segments_stay_inside_bounds() {
        let bounds = Rect::new(40, 30, 200, 100);
        let geometry = corner_geometry(bounds, &CircleCornersOptions::default());
        let CornerEdges::Segments(segments) = geometry.edges else {
            panic!("expected segments");
        };
        assert_eq!(segments.len(), 8);
        for (from, to) in segments {
            for p in [from, to] {
                assert!(p.x >= bounds.x && p.x <= bounds.right(), "{:?}", p);
                assert!(p.y >= bounds.y && p.y <= bounds.bottom(), "{:?}", p);
            }
        }
    }

    #[test]
    fn test_top_right_segment_is_horizontal() {
        let geometry = corner_geometry(TEST_BOUNDS, &CircleCornersOptions::default());
        let CornerEdges::Segments(segments) = geometry.edges else {
            panic!("expected segments");
        };
        assert_eq!(segments[6], (Point::new(184, 7), Point::new(192, 7)));
    }

    #[test]
    fn test_draw_edges_outline() {
        let options = CircleCornersOptions::default().with_draw_edges(true);
        let geometry = corner_geometry(TEST_BOUNDS, &options);
        assert_eq!(geometry.edges, CornerEdges::Outline(Rect::new(7, 7, 185, 85)));
    }

    #[test]
    fn test_paint_clips_to_bands_within_existing_clip() {
        let host = NullHost::new_ref();
        let mut surface = RecordingSurface::new();
        let existing = ClipShape::rect(Rect::new(0, 0, 100, 100));
        surface.set_clip(Some(existing.clone()));
        surface.clear();

        let mut border = CircleCornersBorder::new(CircleCornersOptions::default()).unwrap();
        border.paint(&host, &mut surface, TEST_BOUNDS).unwrap();

        let geometry = corner_geometry(TEST_BOUNDS, border.options());
        let expected = ClipShape::union(geometry.bands).intersect(Some(existing.clone()));
        assert!(surface
            .commands()
            .contains(&SurfaceCommand::SetClip(Some(expected))));

        let fills = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::FillOval(_)))
            .count();
        assert_eq!(fills, 4);
        assert_eq!(surface.lines().len(), 8);
        assert_eq!(surface.clip(), Some(existing));
    }
}
