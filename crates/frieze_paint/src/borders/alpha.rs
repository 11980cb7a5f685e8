//! Translucent solid border
//!
//! Fills the four edge bands with one color at a configurable transparency.
//! With a positive transition delay the transparency steps once per paint and
//! bounces between fully transparent and fully opaque.

use frieze_animation::{AlphaPhase, RepaintTimer};
use frieze_core::{
    BorderError, Color, Composite, CompositeRule, HostRef, Insets, Rect, Result, Surface,
    SurfaceGuard,
};
use serde::{Deserialize, Serialize};

use crate::border::{check_bounds, check_insets, Border};

const NAME: &str = "alpha";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaOptions {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub color: Color,
    /// Starting alpha, `0.0..=1.0`
    pub transparency: f32,
    pub composite: CompositeRule,
    /// Alpha change per animated paint
    pub step: f32,
    /// Milliseconds between animation frames; zero disables animation
    pub transition_delay_ms: u64,
}

impl Default for AlphaOptions {
    fn default() -> Self {
        Self {
            top: 8,
            left: 8,
            bottom: 8,
            right: 8,
            color: Color::BLACK,
            transparency: 0.5,
            composite: CompositeRule::SrcOver,
            step: AlphaPhase::DEFAULT_STEP,
            transition_delay_ms: 0,
        }
    }
}

edge_options!(AlphaOptions);

impl AlphaOptions {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_composite(mut self, composite: CompositeRule) -> Self {
        self.composite = composite;
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn with_transition_delay_ms(mut self, delay_ms: u64) -> Self {
        self.transition_delay_ms = delay_ms;
        self
    }
}

/// The solid bands covering `insets` inside `bounds`
///
/// Top and bottom span the full width; left and right fill the height
/// between them. Sides with zero thickness are skipped.
pub fn alpha_bands(bounds: Rect, insets: Insets) -> Vec<Rect> {
    let Rect {
        x,
        y,
        width,
        height,
    } = bounds;
    let Insets {
        top,
        left,
        bottom,
        right,
    } = insets;
    let side_height = height - bottom - top;

    let mut bands = Vec::with_capacity(4);
    if top > 0 {
        bands.push(Rect::new(x, y, width, top));
    }
    if left > 0 {
        bands.push(Rect::new(x, y + top, left, side_height));
    }
    if bottom > 0 {
        bands.push(Rect::new(x, y + height - bottom, width, bottom));
    }
    if right > 0 {
        bands.push(Rect::new(x + width - right, y + top, right, side_height));
    }
    bands
}

pub struct AlphaBorder {
    options: AlphaOptions,
    composite: Composite,
    phase: AlphaPhase,
    timer: RepaintTimer,
}

impl AlphaBorder {
    pub fn new(options: AlphaOptions) -> Result<Self> {
        check_insets(NAME, options.insets())?;
        if !options.step.is_finite() {
            return Err(BorderError::InvalidConfiguration {
                border: NAME,
                reason: format!("step must be finite, got {}", options.step),
            });
        }
        let composite = Composite::new(options.composite, options.transparency).map_err(|_| {
            BorderError::InvalidConfiguration {
                border: NAME,
                reason: format!(
                    "transparency {} is outside 0.0..=1.0",
                    options.transparency
                ),
            }
        })?;

        Ok(Self {
            phase: AlphaPhase::new(options.transparency, options.step),
            timer: RepaintTimer::from_millis(options.transition_delay_ms, options.insets()),
            composite,
            options,
        })
    }

    pub fn options(&self) -> &AlphaOptions {
        &self.options
    }

    /// Alpha used by the next paint
    pub fn alpha(&self) -> f32 {
        self.phase.alpha()
    }

    pub fn timer(&self) -> &RepaintTimer {
        &self.timer
    }
}

impl Border for AlphaBorder {
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
            g.set_color(self.options.color);
            g.set_composite(self.composite.derive(self.phase.alpha()));
            for band in alpha_bands(bounds, self.options.insets()) {
                g.fill_rect(band);
            }
        }

        if self.timer.is_enabled() {
            self.phase.advance();
            self.timer.arm(host);
        }
        Ok(())
    }
}
