//! Frieze Core
//!
//! Foundational types shared by every frieze crate:
//!
//! - **Geometry**: integer pixel rectangles, insets, polygons and float vectors
//! - **Color**: RGBA colors and Porter-Duff composites
//! - **Surface**: the drawing contract a host toolkit implements, plus a scoped
//!   guard that restores surface state on every exit path
//! - **Host**: bounds, repaint requests, one-shot scheduling and error reporting
//! - **Recording**: a `Surface` that records commands for replay or inspection
//!
//! # Example
//!
//! ```rust
//! use frieze_core::{Color, Rect, RecordingSurface, Surface, SurfaceGuard};
//!
//! let mut surface = RecordingSurface::new();
//! {
//!     let mut g = SurfaceGuard::new(&mut surface);
//!     g.set_color(Color::RED);
//!     g.fill_rect(Rect::new(0, 0, 10, 10));
//! }
//! // The guard put the original color back
//! assert_eq!(surface.color(), Color::BLACK);
//! ```

pub mod clip;
pub mod color;
pub mod error;
pub mod geometry;
pub mod host;
pub mod recording;
pub mod surface;

pub use clip::ClipShape;
pub use color::{Color, Composite, CompositeRule};
pub use error::{BorderError, Result};
pub use geometry::{Insets, Point, Polygon, Rect, Vec2};
pub use host::{Host, HostRef, Task, WeakHostRef};
pub use recording::{RecordingSurface, SurfaceCommand};
pub use surface::{Stroke, Surface, SurfaceGuard, SurfaceState};
