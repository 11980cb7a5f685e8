//! Hatched border with pointer highlight
//!
//! Short hatch lines run across each edge band at `line_spacing` intervals,
//! covering the inner half of the band. Lines within one spacing of the
//! pointer are drawn across the full band in the highlight color.
//!
//! The border never listens for pointer events itself. The host forwards
//! pointer positions through [`HairBorder::pointer_moved`] and repaints the
//! region it returns.

use frieze_core::{
    BorderError, Color, HostRef, Insets, Point, Rect, Result, Stroke, Surface, SurfaceGuard,
};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, check_insets, check_line_width, Border, MAX_THICKNESS};

const NAME: &str = "hair";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HairOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub line_color: Color,
    pub highlight_color: Color,
    pub line_width: i32,
    /// Distance between hatch lines, must be positive
    pub line_spacing: i32,
}

impl Default for HairOptions {
    fn default() -> Self {
        Self {
            top: 14,
            left: 14,
            bottom: 14,
            right: 14,
            line_color: Color::BLACK,
            highlight_color: Color::BLUE,
            line_width: 1,
            line_spacing: 4,
        }
    }
}

edge_options!(HairOptions);

impl HairOptions {
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn with_line_width(mut self, width: i32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_line_spacing(mut self, spacing: i32) -> Self {
        self.line_spacing = spacing;
        self
    }
}

/// Pointer position along each edge; at most one is set at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    /// x coordinate of a pointer over the top band
    pub top: Option<i32>,
    /// y coordinate of a pointer over the left band
    pub left: Option<i32>,
    /// x coordinate of a pointer over the bottom band
    pub bottom: Option<i32>,
    /// y coordinate of a pointer over the right band
    pub right: Option<i32>,
}

impl Highlight {
    pub const NONE: Highlight = Highlight {
        top: None,
        left: None,
        bottom: None,
        right: None,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HairLine {
    pub from: Point,
    pub to: Point,
    pub highlighted: bool,
}

fn near(position: Option<i32>, at: i32, spacing: i32) -> bool {
    position.map_or(false, |p| (at - p).abs() < spacing)
}

/// Every hatch line, top band first, then left, bottom and right
///
/// Bands of one pixel or less are not hatched.
pub fn hair_lines(bounds: Rect, options: &HairOptions, highlight: &Highlight) -> Vec<HairLine> {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    let (t, l, b, r) = (options.top, options.left, options.bottom, options.right);
    let spacing = options.line_spacing.max(1);
    let step = spacing as usize;
    let mut lines = Vec::new();

    let mut line = |from: Point, to: Point, highlighted: bool| {
        lines.push(HairLine {
            from,
            to,
            highlighted,
        })
    };

    if t > 1 {
        for i in (x + l..x + w - r).step_by(step) {
            let hl = near(highlight.top, i, spacing);
            let start = if hl { y } else { y + t / 2 };
            line(Point::new(i, start), Point::new(i, y + t), hl);
        }
    }
    if l > 1 {
        for i in (y + t..y + h - b).step_by(step) {
            let hl = near(highlight.left, i, spacing);
            let start = if hl { x } else { x + l / 2 };
            line(Point::new(start, i), Point::new(x + l, i), hl);
        }
    }
    if b > 1 {
        for i in (x + l..x + w - r).step_by(step) {
            let hl = near(highlight.bottom, i, spacing);
            let end = if hl { y + h } else { y + h - b / 2 };
            line(Point::new(i, y + h - b), Point::new(i, end), hl);
        }
    }
    if r > 1 {
        for i in (y + t..y + h - b).step_by(step) {
            let hl = near(highlight.right, i, spacing);
            let end = if hl { x + w } else { x + w - r / 2 };
            line(Point::new(x + w - r, i), Point::new(end, i), hl);
        }
    }
    lines
}

pub struct HairBorder {
    options: HairOptions,
    highlight: Highlight,
    /// Area covered by the current highlight
    highlight_region: Option<Rect>,
}

impl HairBorder {
    pub fn new(options: HairOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        check_line_width(NAME, options.line_width)?;
        if !(1..=MAX_THICKNESS).contains(&options.line_spacing) {
            return Err(BorderError::InvalidConfiguration {
                border: NAME,
                reason: format!(
                    "line spacing must be between 1 and {}, got {}",
                    MAX_THICKNESS, options.line_spacing
                ),
            });
        }
        Ok(Self {
            options,
            highlight: Highlight::NONE,
            highlight_region: None,
        })
    }

    pub fn options(&self) -> &HairOptions {
        &self.options
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Track the pointer at `point` over a host with `bounds`
    ///
    /// Returns the region the host should repaint: the old and new highlight
    /// areas combined, or `None` when nothing visible changed. Bounds that
    /// could not be painted leave the highlight alone.
    pub fn pointer_moved(&mut self, bounds: Rect, point: Point) -> Option<Rect> {
        check_bounds(bounds).ok()?;
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = bounds;
        let (t, l, b, r) = (
            self.options.top,
            self.options.left,
            self.options.bottom,
            self.options.right,
        );
        let gap = self.options.line_spacing + self.options.line_width;
        let Point { x: px, y: py } = point;

        let between_columns = px > x + l && px < x + w - r;
        let between_rows = py > y + t && py < y + h - b;

        let (highlight, region) = if py < y + t && between_columns {
            (
                Highlight {
                    top: Some(px),
                    ..Highlight::NONE
                },
                Some(Rect::new(px - gap, y, 2 * gap, t)),
            )
        } else if px < x + l && between_rows {
            (
                Highlight {
                    left: Some(py),
                    ..Highlight::NONE
                },
                Some(Rect::new(x, py - gap, l, 2 * gap)),
            )
        } else if py > y + h - b && between_columns {
            (
                Highlight {
                    bottom: Some(px),
                    ..Highlight::NONE
                },
                Some(Rect::new(px - gap, y + h - b, 2 * gap, b)),
            )
        } else if px > x + w - r && between_rows {
            (
                Highlight {
                    right: Some(py),
                    ..Highlight::NONE
                },
                Some(Rect::new(x + w - r, py - gap, r, 2 * gap)),
            )
        } else {
            (Highlight::NONE, None)
        };

        if highlight == self.highlight {
            return None;
        }
        self.highlight = highlight;
        let previous = std::mem::replace(&mut self.highlight_region, region);

        match (previous, region) {
            (Some(old), Some(new)) => Some(old.union(&new)),
            (old, new) => old.or(new),
        }
    }
}

impl Border for HairBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn paint(&mut self, _host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        let mut g = SurfaceGuard::new(surface);
        g.set_stroke(Stroke::new(self.options.line_width as f32));
        g.set_color(self.options.line_color);

        let mut highlighted = false;
        for line in hair_lines(bounds, &self.options, &self.highlight) {
            if line.highlighted != highlighted {
                highlighted = line.highlighted;
                g.set_color(if highlighted {
                    self.options.highlight_color
                } else {
                    self.options.line_color
                });
            }
            g.draw_line(line.from, line.to);
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
    fn test_top_hatching() {
        let options = HairOptions::default().with_edges(0).with_top(14);
        let lines = hair_lines(Rect::new(0, 0, 40, 40), &options, &Highlight::NONE);
        let xs: Vec<i32> = lines.iter().map(|l| l.from.x).collect();
        assert_eq!(xs, vec![0, 4, 8, 12, 16, 20, 24, 28, 32, 36]);
        assert_eq!(lines[0].from, Point::new(0, 7));
        assert_eq!(lines[0].to, Point::new(0, 14));
    }

    #[test]
    fn test_bands_stay_between_corners() {
        let lines = hair_lines(TEST_BOUNDS, &HairOptions::default(), &Highlight::NONE);
        for line in &lines {
            for p in [line.from, line.to] {
                assert!(TEST_BOUNDS.contains(p) || p.x == 200 || p.y == 100, "{:?}", p);
            }
        }
        // Top band runs from the left inset to the right inset
        assert_eq!(lines[0].from.x, 14);
        assert!(lines.iter().all(|l| l.from.x < 186 || l.from.y >= 14));
    }

    #[test]
    fn test_highlight_draws_full_depth() {
        let options = HairOptions::default();
        let highlight = Highlight {
            top: Some(50),
            ..Highlight::NONE
        };
        let lines = hair_lines(TEST_BOUNDS, &options, &highlight);
        let lit: Vec<&HairLine> = lines.iter().filter(|l| l.highlighted).collect();

        // 50 is on the grid (14 + 9 * 4), neighbours are a full spacing away
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].from, Point::new(50, 0));
        assert_eq!(lit[0].to, Point::new(50, 14));
    }

    #[test]
    fn test_bottom_and_right_mirror_top_and_left() {
        let options = HairOptions::default();
        let lines = hair_lines(Rect::new(0, 0, 100, 100), &options, &Highlight::NONE);
        let bottom = lines
            .iter()
            .find(|l| l.from.y == 86 && l.from.x == 14)
            .copied();
        assert_eq!(
            bottom,
            Some(HairLine {
                from: Point::new(14, 86),
                to: Point::new(14, 93),
                highlighted: false
            })
        );
        let right = lines.iter().find(|l| l.from.x == 86).copied();
        assert_eq!(right.map(|l| l.to), Some(Point::new(93, 14)));
    }

    #[test]
    fn test_pointer_moved_regions() {
        let mut border = HairBorder::new(HairOptions::default()).unwrap();

        let region = border.pointer_moved(TEST_BOUNDS, Point::new(50, 5));
        assert_eq!(region, Some(Rect::new(45, 0, 10, 14)));
        assert_eq!(border.highlight().top, Some(50));

        // Same spot again: nothing to repaint
        assert_eq!(border.pointer_moved(TEST_BOUNDS, Point::new(50, 5)), None);

        // Moving along the band repaints both old and new spots
        let region = border.pointer_moved(TEST_BOUNDS, Point::new(60, 5));
        assert_eq!(region, Some(Rect::new(45, 0, 20, 14)));

        // Leaving the border clears the highlight
        let region = border.pointer_moved(TEST_BOUNDS, Point::new(100, 50));
        assert_eq!(region, Some(Rect::new(55, 0, 10, 14)));
        assert!(border.highlight().is_none());
        assert_eq!(border.pointer_moved(TEST_BOUNDS, Point::new(101, 50)), None);
    }

    #[test]
    fn test_pointer_in_left_band() {
        let mut border = HairBorder::new(HairOptions::default()).unwrap();
        let region = border.pointer_moved(TEST_BOUNDS, Point::new(3, 40));
        assert_eq!(region, Some(Rect::new(0, 35, 14, 10)));
        assert_eq!(border.highlight().left, Some(40));
    }

    #[test]
    fn test_rejects_zero_spacing() {
        assert!(HairBorder::new(HairOptions::default().with_line_spacing(0)).is_err());
        assert!(HairBorder::new(HairOptions::default().with_line_spacing(i32::MAX)).is_err());
    }

    #[test]
    fn test_pointer_over_unpaintable_bounds_is_ignored() {
        let mut border = HairBorder::new(HairOptions::default()).unwrap();
        let bounds = Rect::new(i32::MAX - 50, 0, 100, 100);
        assert_eq!(border.pointer_moved(bounds, Point::new(i32::MAX, 5)), None);
        assert!(border.highlight().is_none());
    }

    #[test]
    fn test_paint_switches_color_around_highlight() {
        let host = NullHost::new_ref();
        let mut surface = RecordingSurface::new();
        let mut border = HairBorder::new(HairOptions::default()).unwrap();
        border.pointer_moved(TEST_BOUNDS, Point::new(50, 5));
        border.paint(&host, &mut surface, TEST_BOUNDS).unwrap();

        let colors: Vec<Color> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::SetColor(color) => Some(*color),
                _ => None,
            })
            .collect();
        // line, highlight, line, then the guard restores the original color
        assert_eq!(
            colors,
            vec![Color::BLACK, Color::BLUE, Color::BLACK, Color::BLACK]
        );
    }
}
