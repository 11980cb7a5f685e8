//! Checkerboard border
//!
//! Each edge band is tiled with square cells as deep as the band, cycling
//! through a palette. Every paint moves the palette's start index on by one,
//! so with a blink delay the pattern appears to march.

use frieze_animation::{ColorCycle, RepaintTimer};
use frieze_core::{BorderError, Color, HostRef, Insets, Rect, Result, Surface, SurfaceGuard};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, check_insets, Border};

const NAME: &str = "checkerboard";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerboardOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    /// Palette the cells cycle through, at least one color
    pub colors: Vec<Color>,
    /// Milliseconds between animation frames; zero disables animation
    pub blink_delay_ms: u64,
}

impl Default for CheckerboardOptions {
    fn default() -> Self {
        Self {
            top: 8,
            left: 8,
            bottom: 8,
            right: 8,
            colors: vec![Color::BLACK, Color::WHITE],
            blink_delay_ms: 0,
        }
    }
}

edge_options!(CheckerboardOptions);

impl CheckerboardOptions {
    pub fn with_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.colors = colors.into();
        self
    }

    pub fn with_blink_delay_ms(mut self, delay_ms: u64) -> Self {
        self.blink_delay_ms = delay_ms;
        self
    }
}

/// Cells of every band with their palette index
///
/// Bands are laid out top, left, bottom, right; each starts at
/// `cycle.start()`. Cells are whole squares, so the last one in a band may run
/// past the far edge.
pub fn checker_cells(bounds: Rect, insets: Insets, cycle: &ColorCycle) -> Vec<(Rect, usize)> {
    let Rect {
        x,
        y,
        width,
        height,
    } = bounds;
    let mut cells = Vec::new();

    let mut band = |size: i32, origins: &mut dyn Iterator<Item = (i32, i32)>| {
        for ((cx, cy), index) in origins.zip(cycle.iter()) {
            cells.push((Rect::new(cx, cy, size, size), index));
        }
    };

    if insets.top > 0 {
        let step = insets.top as usize;
        band(insets.top, &mut (x..x + width).step_by(step).map(|i| (i, y)));
    }
    if insets.left > 0 {
        let step = insets.left as usize;
        band(insets.left, &mut (y..y + height).step_by(step).map(|i| (x, i)));
    }
    if insets.bottom > 0 {
        let step = insets.bottom as usize;
        let row = y + height - insets.bottom;
        band(insets.bottom, &mut (x..x + width).step_by(step).map(|i| (i, row)));
    }
    if insets.right > 0 {
        let step = insets.right as usize;
        let column = x + width - insets.right;
        band(insets.right, &mut (y..y + height).step_by(step).map(|i| (column, i)));
    }
    cells
}

pub struct CheckerboardBorder {
    options: CheckerboardOptions,
    cycle: ColorCycle,
    timer: RepaintTimer,
}

impl CheckerboardBorder {
    pub fn new(options: CheckerboardOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        if options.colors.is_empty() {
            return Err(BorderError::MissingConfiguration {
                border: NAME,
                field: "colors",
            });
        }

        Ok(Self {
            cycle: ColorCycle::new(options.colors.len()),
            timer: RepaintTimer::from_millis(options.blink_delay_ms, options.insets()),
            options,
        })
    }

    pub fn options(&self) -> &CheckerboardOptions {
        &self.options
    }

    /// Palette index the next paint starts each band with
    pub fn start_index(&self) -> usize {
        self.cycle.start()
    }

    pub fn timer(&self) -> &RepaintTimer {
        &self.timer
    }
}

impl Border for CheckerboardBorder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insets(&self) -> Insets {
        self.options.insets()
    }

    fn is_opaque(&self) -> bool {
        true
    }

    fn paint(&mut self, host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()> {
        check_bounds(bounds)?;

        {
            let mut g = SurfaceGuard::new(surface);
            for (cell, index) in checker_cells(bounds, self.options.insets(), &self.cycle) {
                g.set_color(self.options.colors[index]);
                g.fill_rect(cell);
            }
        }

        self.cycle.advance();
        if self.timer.is_enabled() {
            self.timer.arm(host);
        }
        Ok(())
    }
}
