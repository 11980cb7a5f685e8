//! Drawing surface contract
//!
//! `Surface` is what a host toolkit hands a border during painting. It is a
//! deliberately small, stateful, immediate-mode API: the current color,
//! stroke, clip, composite and antialiasing flag apply to every following
//! draw call.
//!
//! Because that state is shared with whatever paints after the border,
//! borders never mutate a surface directly. They wrap it in a
//! [`SurfaceGuard`], which snapshots the state up front and writes it back in
//! `Drop`, whether painting returns normally, bails out with `?`, or unwinds.
//!
//! # Example
//!
//! ```ignore
//! fn paint(surface: &mut dyn Surface) -> Result<()> {
//!     let mut g = SurfaceGuard::new(surface);
//!     g.set_color(Color::RED);
//!     g.set_stroke(Stroke::new(2.0));
//!     g.draw_rect(Rect::new(0, 0, 10, 10));
//!     Ok(())
//! } // color and stroke restored here
//! ```

use std::ops::{Deref, DerefMut};

use crate::clip::ClipShape;
use crate::color::{Color, Composite};
use crate::geometry::{Point, Polygon, Rect};

/// Stroke configuration (width only)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
}

impl Stroke {
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Immediate-mode drawing surface provided by the host
pub trait Surface {
    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    fn stroke(&self) -> Stroke;

    fn set_stroke(&mut self, stroke: Stroke);

    /// Current clip; `None` means unclipped
    fn clip(&self) -> Option<ClipShape>;

    fn set_clip(&mut self, clip: Option<ClipShape>);

    /// Current composite. Surfaces without compositing report opaque source-over.
    fn composite(&self) -> Composite {
        Composite::SRC_OVER
    }

    fn set_composite(&mut self, _composite: Composite) {
        // Default implementation does nothing (for surfaces without compositing)
    }

    fn antialiasing(&self) -> bool {
        false
    }

    fn set_antialiasing(&mut self, _enabled: bool) {
        // Default implementation does nothing
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing
    // ─────────────────────────────────────────────────────────────────────────

    fn fill_rect(&mut self, rect: Rect);

    /// Outline a rectangle; covers `width + 1` by `height + 1` pixels
    fn draw_rect(&mut self, rect: Rect);

    fn fill_polygon(&mut self, polygon: &Polygon);

    fn draw_polygon(&mut self, polygon: &Polygon);

    /// Fill the oval inscribed in `bounds`
    fn fill_oval(&mut self, bounds: Rect);

    /// Outline the oval inscribed in `bounds`
    fn draw_oval(&mut self, bounds: Rect);

    fn draw_line(&mut self, from: Point, to: Point);
}

/// Snapshot of every piece of surface state a border may touch
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    pub color: Color,
    pub stroke: Stroke,
    pub clip: Option<ClipShape>,
    pub composite: Composite,
    pub antialiasing: bool,
}

impl SurfaceState {
    /// Capture the current state of `surface`
    pub fn capture<S: Surface + ?Sized>(surface: &S) -> Self {
        Self {
            color: surface.color(),
            stroke: surface.stroke(),
            clip: surface.clip(),
            composite: surface.composite(),
            antialiasing: surface.antialiasing(),
        }
    }

    /// Write this state back onto `surface`
    pub fn restore<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_color(self.color);
        surface.set_stroke(self.stroke);
        surface.set_clip(self.clip.clone());
        surface.set_composite(self.composite);
        surface.set_antialiasing(self.antialiasing);
    }
}

/// Scoped borrow of a surface that restores its state on drop
pub struct SurfaceGuard<'a, S: Surface + ?Sized + 'a> {
    surface: &'a mut S,
    saved: SurfaceState,
}

impl<'a, S: Surface + ?Sized + 'a> SurfaceGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let saved = SurfaceState::capture(&*surface);
        Self { surface, saved }
    }

    /// The state that will be restored
    pub fn saved(&self) -> &SurfaceState {
        &self.saved
    }

    /// Put the saved clip back without waiting for the guard to drop
    pub fn restore_clip(&mut self) {
        self.surface.set_clip(self.saved.clip.clone());
    }
}

impl<'a, S: Surface + ?Sized + 'a> Deref for SurfaceGuard<'a, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<'a, S: Surface + ?Sized + 'a> DerefMut for SurfaceGuard<'a, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<'a, S: Surface + ?Sized + 'a> Drop for SurfaceGuard<'a, S> {
    fn drop(&mut self) {
        self.saved.restore(&mut *self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut surface = RecordingSurface::new();
        surface.set_clip(Some(ClipShape::rect(Rect::new(0, 0, 5, 5))));
        let before = SurfaceState::capture(&surface);

        {
            let mut g = SurfaceGuard::new(&mut surface);
            g.set_color(Color::RED);
            g.set_stroke(Stroke::new(4.0));
            g.set_clip(None);
            g.set_antialiasing(true);
        }

        assert_eq!(SurfaceState::capture(&surface), before);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn failing(surface: &mut dyn Surface) -> Result<(), &'static str> {
            let mut g = SurfaceGuard::new(surface);
            g.set_color(Color::BLUE);
            let geometry: Result<(), &'static str> = Err("geometry failed");
            geometry?;
            g.set_color(Color::GREEN);
            Ok(())
        }

        let mut surface = RecordingSurface::new();
        assert!(failing(&mut surface).is_err());
        assert_eq!(surface.color(), Color::BLACK);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let mut surface = RecordingSurface::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut g = SurfaceGuard::new(&mut surface);
            g.set_stroke(Stroke::new(9.0));
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(surface.stroke(), Stroke::default());
    }
}
