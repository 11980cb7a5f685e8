//! Dog-eared page with a drop shadow
//!
//! The page outline is a rectangle with its top-right corner folded down; the
//! shadow is offset by `(shadow_x_offset, shadow_y_offset)`. Only the sides
//! the shadow hangs over reserve any space.

use frieze_core::{Color, HostRef, Insets, Point, Polygon, Rect, Result, Surface, SurfaceGuard};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, check_insets, Border};
use crate::cache::GeometryCache;

const NAME: &str = "shadowed-page";

/// Size of the folded corner
const FOLD: i32 = 20;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowedPageOptions {
    pub shadow_x_offset: i32,
    pub shadow_y_offset: i32,
    pub shadow_color: Color,
    pub line_color: Color,
}

impl Default for ShadowedPageOptions {
    fn default() -> Self {
        Self {
            shadow_x_offset: 8,
            shadow_y_offset: 8,
            shadow_color: Color::LIGHT_GRAY,
            line_color: Color::BLACK,
        }
    }
}

impl ShadowedPageOptions {
    pub fn with_shadow_x_offset(mut self, offset: i32) -> Self {
        self.shadow_x_offset = offset;
        self
    }

    pub fn with_shadow_y_offset(mut self, offset: i32) -> Self {
        self.shadow_y_offset = offset;
        self
    }

    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Negative offsets reserve the top/left side, positive ones the
    /// bottom/right side
    pub fn insets(&self) -> Insets {
        let (dx, dy) = (self.shadow_x_offset, self.shadow_y_offset);
        Insets::new(
            dy.saturating_neg().max(0),
            dx.saturating_neg().max(0),
            dy.max(0),
            dx.max(0),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageGeometry {
    /// The two shadow rectangles, filled in the shadow color
    pub shadow: [Rect; 2],
    /// Six-vertex page outline with the diagonal fold
    pub page: Polygon,
    /// The two edges of the folded flap
    pub fold: [(Point, Point); 2],
}

pub fn page_geometry(bounds: Rect, options: &ShadowedPageOptions) -> PageGeometry {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    let insets = options.insets();
    let (top, left, bottom, right) = (insets.top, insets.left, insets.bottom, insets.right);

    let shadow = match (options.shadow_x_offset < 0, options.shadow_y_offset < 0) {
        (true, true) => [
            Rect::new(x, y, w - left - FOLD, top),
            Rect::new(x, y, left, h - top),
        ],
        (true, false) => [
            Rect::new(x, y + bottom, left, h),
            Rect::new(x, y + h - bottom, w - left, h),
        ],
        (false, true) => [
            Rect::new(x + right, y, w, top),
            Rect::new(x + w - right, y, w, h - top),
        ],
        (false, false) => [
            Rect::new(x + w - right, y + bottom + FOLD, w, h),
            Rect::new(x + right, y + h - bottom, w, h),
        ],
    };

    // The page sits one pixel up and left so its outline lands on the edge
    let px = x + left - 1;
    let py = y + top - 1;
    let pw = w - (left + right);
    let ph = h - (top + bottom);

    let page = Polygon::from_coords(
        &[px, px + pw - FOLD, px + pw, px + pw, px, px],
        &[py, py, py + FOLD, py + ph, py + ph, py],
    );
    let crease = Point::new(px + pw - FOLD, py + FOLD);
    let fold = [
        (Point::new(px + pw - FOLD, py), crease),
        (crease, Point::new(px + pw, py + FOLD)),
    ];

    PageGeometry { shadow, page, fold }
}

pub struct ShadowedPageBorder {
    options: ShadowedPageOptions,
    geometry: GeometryCache<PageGeometry>,
}

impl ShadowedPageBorder {
    pub fn new(options: ShadowedPageOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        Ok(Self {
            options,
            geometry: GeometryCache::new(),
        })
    }

    pub fn options(&self) -> &ShadowedPageOptions {
        &self.options
    }
}

impl Border for ShadowedPageBorder {
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
            .get_or_compute(bounds, |b| page_geometry(b, options));

        let mut g = SurfaceGuard::new(surface);
        g.set_color(options.shadow_color);
        for rect in geometry.shadow {
            g.fill_rect(rect);
        }

        g.set_color(options.line_color);
        g.draw_polygon(&geometry.page);
        for (from, to) in geometry.fold {
            g.draw_line(from, to);
        }
        Ok(())
    }
}
