//! Crenellated castle-wall border
//!
//! The outline is one 21-vertex polygon: a notch in the middle of each edge
//! and a square tower at each corner, all derived from the edge thicknesses.
//! Half thicknesses use integer division, so odd thicknesses give slightly
//! lopsided notches.

use frieze_core::{
    ClipShape, Color, HostRef, Insets, Polygon, Rect, Result, Stroke, Surface, SurfaceGuard,
};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, check_insets, check_line_width, Border};
use crate::cache::GeometryCache;

const NAME: &str = "castle";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastleOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub fill_color: Color,
    pub line_color: Color,
    pub line_width: i32,
}

impl Default for CastleOptions {
    fn default() -> Self {
        Self {
            top: 12,
            left: 12,
            bottom: 12,
            right: 12,
            fill_color: Color::LIGHT_GRAY,
            line_color: Color::BLACK,
            line_width: 1,
        }
    }
}

edge_options!(CastleOptions);

impl CastleOptions {
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_line_width(mut self, width: i32) -> Self {
        self.line_width = width;
        self
    }
}

/// The castle wall outline, clockwise from the top-left corner
pub fn castle_outline(bounds: Rect, options: &CastleOptions) -> Polygon {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    let (t, l, b, r) = (options.top, options.left, options.bottom, options.right);

    #[rustfmt::skip]
    let xs = [
        x, x + 2 * l, x + 2 * l, x + w - 2 * r, x + w - 2 * r, x + w, x + w,
        x + w - r / 2, x + w - r / 2, x + w, x + w, x + w - 2 * r, x + w - 2 * r,
        x + 2 * l, x + 2 * l, x, x, x + l / 2, x + l / 2, x, x,
    ];
    #[rustfmt::skip]
    let ys = [
        y, y, y + t / 2, y + t / 2, y, y, y + 2 * t,
        y + 2 * t, y + h - 2 * b, y + h - 2 * b, y + h, y + h, y + h - b / 2,
        y + h - b / 2, y + h, y + h, y + h - 2 * b, y + h - 2 * b, y + 2 * t, y + 2 * t, y,
    ];

    Polygon::from_coords(&xs, &ys)
}

pub struct CastleBorder {
    options: CastleOptions,
    outline: GeometryCache<Polygon>,
}

impl CastleBorder {
    pub fn new(options: CastleOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        check_line_width(NAME, options.line_width)?;
        Ok(Self {
            options,
            outline: GeometryCache::new(),
        })
    }

    pub fn options(&self) -> &CastleOptions {
        &self.options
    }

    pub fn cache(&self) -> &GeometryCache<Polygon> {
        &self.outline
    }
}

impl Border for CastleBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn paint(&mut self, _host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        let options = &self.options;
        let outline = self
            .outline
            .get_or_compute(bounds, |b| castle_outline(b, options));
        let inner = bounds.inset(&options.insets());

        let mut g = SurfaceGuard::new(surface);
        g.set_stroke(Stroke::new(options.line_width as f32));

        let wall = ClipShape::frame(bounds, inner).intersect(g.saved().clip.clone());
        g.set_clip(Some(wall));
        g.set_color(options.fill_color);
        g.fill_polygon(outline);
        g.set_color(options.line_color);
        g.draw_polygon(outline);

        g.restore_clip();
        g.draw_rect(inner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{MAX_COORDINATE, MAX_THICKNESS};
    use crate::test_support::{NullHost, TEST_BOUNDS};
    use frieze_core::{BorderError, Point, RecordingSurface, SurfaceCommand};

    #[test]
    fn test_outline_has_21_vertices() {
        let options = CastleOptions::default();
        for bounds in [
            Rect::new(0, 0, 200, 100),
            Rect::new(-30, 15, 64, 64),
            Rect::new(5, 5, 0, 0),
        ] {
            assert_eq!(castle_outline(bounds, &options).len(), 21);
        }
    }

    #[test]
    fn test_outline_is_closed_and_notched() {
        let polygon = castle_outline(Rect::new(0, 0, 200, 100), &CastleOptions::default());
        let points = polygon.points();
        assert_eq!(points[0], points[20]);
        // Top notch between the towers at half depth
        assert_eq!(points[2], Point::new(24, 6));
        assert_eq!(points[3], Point::new(176, 6));
        // Bottom-right tower corner
        assert_eq!(points[10], Point::new(200, 100));
    }

    #[test]
    fn test_odd_thickness_truncates() {
        let options = CastleOptions::default().with_edges(7);
        let points = castle_outline(Rect::new(0, 0, 100, 100), &options);
        assert_eq!(points.points()[2], Point::new(14, 3));
        assert_eq!(points.points()[7], Point::new(97, 14));
    }

    #[test]
    fn test_paint_sequence() {
        let host = NullHost::new_ref();
        let mut surface = RecordingSurface::new();
        let mut border = CastleBorder::new(CastleOptions::default()).unwrap();
        border.paint(&host, &mut surface, TEST_BOUNDS).unwrap();

        let outline = castle_outline(TEST_BOUNDS, border.options());
        let inner = Rect::new(12, 12, 176, 76);
        let draws: Vec<_> = surface.draw_commands().cloned().collect();
        assert_eq!(
            draws,
            vec![
                SurfaceCommand::FillPolygon(outline.clone()),
                SurfaceCommand::DrawPolygon(outline),
                SurfaceCommand::DrawRect(inner),
            ]
        );
        assert!(surface.commands().contains(&SurfaceCommand::SetClip(Some(
            ClipShape::frame(TEST_BOUNDS, inner)
        ))));
        assert_eq!(surface.clip(), None);
        assert_eq!(surface.stroke(), Stroke::default());
    }

    #[test]
    fn test_repeated_paint_uses_cache() {
        let host = NullHost::new_ref();
        let mut border = CastleBorder::new(CastleOptions::default()).unwrap();
        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();

        border.paint(&host, &mut first, TEST_BOUNDS).unwrap();
        border.paint(&host, &mut second, TEST_BOUNDS).unwrap();

        assert_eq!(first.commands(), second.commands());
        assert_eq!(border.cache().misses(), 1);
        assert_eq!(border.cache().hits(), 1);
    }

    #[test]
    fn test_bounds_past_i32_are_rejected() {
        let host = NullHost::new_ref();
        let mut surface = RecordingSurface::new();
        let mut border = CastleBorder::new(CastleOptions::default()).unwrap();

        let result = border.paint(&host, &mut surface, Rect::new(i32::MAX - 50, 0, 100, 100));
        assert!(matches!(result, Err(BorderError::InvalidGeometry(_))));
        assert!(surface.commands().is_empty());
        assert_eq!(border.cache().misses(), 0);
    }

    #[test]
    fn test_rejects_thickness_that_would_overflow() {
        let options = CastleOptions::default().with_edges(i32::MAX / 2 + 1);
        assert!(matches!(
            CastleBorder::new(options),
            Err(BorderError::InvalidConfiguration { border: "castle", .. })
        ));
    }

    #[test]
    fn test_largest_accepted_sizes_paint() {
        let host = NullHost::new_ref();
        let mut border = CastleBorder::new(
            CastleOptions::default()
                .with_edges(MAX_THICKNESS)
                .with_line_width(MAX_THICKNESS),
        )
        .unwrap();

        for bounds in [
            Rect::new(MAX_COORDINATE - 10, MAX_COORDINATE - 10, 10, 10),
            Rect::new(-MAX_COORDINATE, -MAX_COORDINATE, 2 * MAX_COORDINATE, 2 * MAX_COORDINATE),
        ] {
            let mut surface = RecordingSurface::new();
            border.paint(&host, &mut surface, bounds).unwrap();
            assert_eq!(surface.draw_commands().count(), 3);
        }
    }
}
