//! Frieze Paint
//!
//! Decorative borders for rectangular UI components.
//!
//! A border reserves [`Insets`] around its host's content and paints inside
//! that band on demand. Painting only ever touches the surface through a
//! [`SurfaceGuard`], so the surface's color, stroke, clip, composite and
//! antialiasing settings are put back however the paint exits.
//!
//! # Borders
//!
//! - **Alpha**: translucent edge bands, optionally pulsing
//! - **Checkerboard**: square cells cycling through a palette, optionally blinking
//! - **Castle**: crenellated battlement outline
//! - **CircleCorners**: rounded corner ovals joined by edge lines
//! - **CurlyBrace**: brace curves on the left and right
//! - **Multiline**: concentric rectangle outlines
//! - **Scallop**: arcs along each edge
//! - **Scroll**: rolled parchment edges
//! - **ShadowedPage**: dog-eared page with a drop shadow
//! - **Hair**: hatched bands with a pointer highlight
//!
//! Named border definitions can be loaded from TOML with [`BorderCatalog`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use frieze_core::{Color, Host, HostRef, Rect, RecordingSurface, Task};
//! use frieze_paint::{paint_border, Border, MultilineBorder, MultilineOptions};
//!
//! struct Panel;
//!
//! impl Host for Panel {
//!     fn bounds(&self) -> Rect {
//!         Rect::new(0, 0, 120, 80)
//!     }
//!     fn request_repaint(&self, _region: Rect) {}
//!     fn schedule_once(&self, _delay: Duration, _task: Task) {}
//! }
//!
//! let host: HostRef = Arc::new(Panel);
//! let mut border = MultilineBorder::new(
//!     MultilineOptions::default().with_num_lines(2).with_color(Color::BLUE),
//! )?;
//! assert_eq!(border.insets().top, 3);
//!
//! let mut surface = RecordingSurface::new();
//! assert!(paint_border(&mut border, &host, &mut surface, host.bounds()));
//! assert_eq!(surface.draw_commands().count(), 2);
//! # Ok::<(), frieze_core::BorderError>(())
//! ```
//!
//! [`Insets`]: frieze_core::Insets
//! [`SurfaceGuard`]: frieze_core::SurfaceGuard

pub mod bezier;
pub mod border;
pub mod borders;
pub mod cache;
pub mod catalog;

pub use bezier::{
    flatten, flatten_to_vec, flatten_with_depth, BezierRenderer, CubicBezier, FLATNESS_THRESHOLD,
    MAX_CONTROL_COORDINATE, MAX_SUBDIVISION_DEPTH,
};
pub use border::{paint_border, Border, MAX_COORDINATE, MAX_THICKNESS};
pub use borders::{
    alpha_bands, brace_curves, castle_outline, checker_cells, concentric_rects, corner_geometry,
    hair_lines, page_geometry, scallop_curves, scroll_geometry, AlphaBorder, AlphaOptions,
    CastleBorder, CastleOptions, CheckerboardBorder, CheckerboardOptions, CircleCornersBorder,
    CircleCornersOptions, CornerEdges, CornerGeometry, CurlyBraceBorder, CurlyBraceOptions,
    HairBorder, HairLine, HairOptions, Highlight, MultilineBorder, MultilineOptions, PageGeometry,
    ScallopBorder, ScallopOptions, ScrollBorder, ScrollGeometry, ScrollOptions, ShadowedPageBorder,
    ShadowedPageOptions,
};
pub use cache::GeometryCache;
pub use catalog::{BorderCatalog, BorderSpec};
