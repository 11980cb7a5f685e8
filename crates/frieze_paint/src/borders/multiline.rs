//! Concentric rectangle border
//!
//! Draws `num_lines` rectangle outlines, each one `line_size + gap_size` in
//! from the previous on every side.

use frieze_core::{BorderError, Color, HostRef, Insets, Rect, Result, Stroke, Surface, SurfaceGuard};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, Border, MAX_THICKNESS};

const NAME: &str = "multiline";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultilineOptions {
    pub num_lines: u32,
    pub color: Color,
    pub line_size: i32,
    pub gap_size: i32,
}

impl Default for MultilineOptions {
    fn default() -> Self {
        Self {
            num_lines: 3,
            color: Color::BLACK,
            line_size: 1,
            gap_size: 1,
        }
    }
}

impl MultilineOptions {
    pub fn with_num_lines(mut self, num_lines: u32) -> Self {
        self.num_lines = num_lines;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_size(mut self, line_size: i32) -> Self {
        self.line_size = line_size;
        self
    }

    pub fn with_gap_size(mut self, gap_size: i32) -> Self {
        self.gap_size = gap_size;
        self
    }

    /// `num_lines * line_size + (num_lines - 1) * gap_size`, or `None` if
    /// that does not fit in `i32`
    pub fn thickness(&self) -> Option<i32> {
        let n = i32::try_from(self.num_lines).ok()?;
        let lines = n.checked_mul(self.line_size)?;
        let gaps = (n - 1).checked_mul(self.gap_size)?;
        lines.checked_add(gaps)
    }

    /// [`thickness`](Self::thickness) on every side, never negative;
    /// saturates at `i32::MAX`
    pub fn insets(&self) -> Insets {
        Insets::uniform(self.thickness().unwrap_or(i32::MAX).max(0))
    }
}

/// The rectangles to outline, outermost first
///
/// Rectangles that would have a negative width or height are left out, and
/// so is everything inside them. With zero line and gap size every rectangle
/// is the same, and it is listed once.
pub fn concentric_rects(bounds: Rect, options: &MultilineOptions) -> Vec<Rect> {
    let shrink = options.line_size + options.gap_size;
    let mut rect = Rect::new(
        bounds.x,
        bounds.y,
        bounds.width - options.line_size,
        bounds.height - options.line_size,
    );

    let mut rects = Vec::new();
    for _ in 0..options.num_lines {
        if rect.width < 0 || rect.height < 0 {
            break;
        }
        rects.push(rect);
        if shrink == 0 {
            break;
        }
        rect = Rect::new(
            rect.x + shrink,
            rect.y + shrink,
            rect.width - 2 * shrink,
            rect.height - 2 * shrink,
        );
    }
    rects
}

pub struct MultilineBorder {
    options: MultilineOptions,
}

impl MultilineBorder {
    pub fn new(options: MultilineOptions) -> Result<Self> {
        let sizes = 0..=MAX_THICKNESS;
        if !sizes.contains(&options.line_size) || !sizes.contains(&options.gap_size) {
            return Err(BorderError::InvalidConfiguration {
                border: NAME,
                reason: format!(
                    "line size and gap size must be between 0 and {} (line {}, gap {})",
                    MAX_THICKNESS, options.line_size, options.gap_size
                ),
            });
        }
        match options.thickness() {
            Some(thickness) if thickness <= MAX_THICKNESS => Ok(Self { options }),
            _ => Err(BorderError::InvalidConfiguration {
                border: NAME,
                reason: format!(
                    "{} lines of size {} with gap {} are thicker than {}",
                    options.num_lines, options.line_size, options.gap_size, MAX_THICKNESS
                ),
            }),
        }
    }

    pub fn options(&self) -> &MultilineOptions {
        &self.options
    }
}

impl Border for MultilineBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn paint(&mut self, _host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        let mut g = SurfaceGuard::new(surface);
        g.set_color(self.options.color);
        g.set_stroke(Stroke::new(self.options.line_size as f32));
        for rect in concentric_rects(bounds, &self.options) {
            g.draw_rect(rect);
        }
        Ok(())
    }
}
