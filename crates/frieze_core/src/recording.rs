//! Recording surface
//!
//! `RecordingSurface` implements [`Surface`] by recording every state change
//! and draw call as a [`SurfaceCommand`]. Hosts can replay the commands onto
//! a real renderer; tests compare them directly.

use crate::clip::ClipShape;
use crate::color::{Color, Composite};
use crate::geometry::{Point, Polygon, Rect};
use crate::surface::{Stroke, Surface, SurfaceState};

/// A surface command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    // State
    SetColor(Color),
    SetStroke(Stroke),
    SetClip(Option<ClipShape>),
    SetComposite(Composite),
    SetAntialiasing(bool),

    // Drawing
    FillRect(Rect),
    DrawRect(Rect),
    FillPolygon(Polygon),
    DrawPolygon(Polygon),
    FillOval(Rect),
    DrawOval(Rect),
    DrawLine { from: Point, to: Point },
}

impl SurfaceCommand {
    /// True for commands that put pixels on the surface
    pub fn is_draw(&self) -> bool {
        !matches!(
            self,
            SurfaceCommand::SetColor(_)
                | SurfaceCommand::SetStroke(_)
                | SurfaceCommand::SetClip(_)
                | SurfaceCommand::SetComposite(_)
                | SurfaceCommand::SetAntialiasing(_)
        )
    }
}

/// A surface that records commands for deferred execution
#[derive(Debug)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    state: SurfaceState,
}

impl RecordingSurface {
    /// Create a recording surface in the default state: black, 1px stroke,
    /// unclipped, opaque source-over, no antialiasing
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            state: SurfaceState {
                color: Color::BLACK,
                stroke: Stroke::default(),
                clip: None,
                composite: Composite::SRC_OVER,
                antialiasing: false,
            },
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded commands that draw, skipping state changes
    pub fn draw_commands(&self) -> impl Iterator<Item = &SurfaceCommand> {
        self.commands.iter().filter(|c| c.is_draw())
    }

    /// Endpoints of every recorded line, in order
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::DrawLine { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Current state
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// Clear recorded commands (keeps state)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn color(&self) -> Color {
        self.state.color
    }

    fn set_color(&mut self, color: Color) {
        self.state.color = color;
        self.commands.push(SurfaceCommand::SetColor(color));
    }

    fn stroke(&self) -> Stroke {
        self.state.stroke
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.state.stroke = stroke;
        self.commands.push(SurfaceCommand::SetStroke(stroke));
    }

    fn clip(&self) -> Option<ClipShape> {
        self.state.clip.clone()
    }

    fn set_clip(&mut self, clip: Option<ClipShape>) {
        self.state.clip = clip.clone();
        self.commands.push(SurfaceCommand::SetClip(clip));
    }

    fn composite(&self) -> Composite {
        self.state.composite
    }

    fn set_composite(&mut self, composite: Composite) {
        self.state.composite = composite;
        self.commands.push(SurfaceCommand::SetComposite(composite));
    }

    fn antialiasing(&self) -> bool {
        self.state.antialiasing
    }

    fn set_antialiasing(&mut self, enabled: bool) {
        self.state.antialiasing = enabled;
        self.commands.push(SurfaceCommand::SetAntialiasing(enabled));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::FillRect(rect));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.commands.push(SurfaceCommand::DrawRect(rect));
    }

    fn fill_polygon(&mut self, polygon: &Polygon) {
        self.commands.push(SurfaceCommand::FillPolygon(polygon.clone()));
    }

    fn draw_polygon(&mut self, polygon: &Polygon) {
        self.commands.push(SurfaceCommand::DrawPolygon(polygon.clone()));
    }

    fn fill_oval(&mut self, bounds: Rect) {
        self.commands.push(SurfaceCommand::FillOval(bounds));
    }

    fn draw_oval(&mut self, bounds: Rect) {
        self.commands.push(SurfaceCommand::DrawOval(bounds));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(SurfaceCommand::DrawLine { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_state_and_draws() {
        let mut surface = RecordingSurface::new();
        surface.set_color(Color::RED);
        surface.fill_rect(Rect::new(0, 0, 10, 10));
        surface.draw_line(Point::new(0, 0), Point::new(5, 5));

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.draw_commands().count(), 2);
        assert_eq!(surface.color(), Color::RED);
        assert_eq!(surface.lines(), vec![(Point::new(0, 0), Point::new(5, 5))]);
    }

    #[test]
    fn test_take_commands_keeps_state() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke(Stroke::new(3.0));
        let taken = surface.take_commands();
        assert_eq!(taken, vec![SurfaceCommand::SetStroke(Stroke::new(3.0))]);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.stroke(), Stroke::new(3.0));
    }
}
