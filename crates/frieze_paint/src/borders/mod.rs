//! Border variants
//!
//! Every variant follows the same shape: an `XxxOptions` record with serde
//! support and fluent `with_*` setters, an `XxxBorder` built from it, and a
//! pure geometry function that maps bounds plus options to drawable shapes.
//! Borders with non-trivial geometry keep it in a [`GeometryCache`] keyed by
//! bounds.
//!
//! [`GeometryCache`]: crate::cache::GeometryCache

/// Fluent per-side setters and `insets()` for options with
/// `top`/`left`/`bottom`/`right` thickness fields
macro_rules! edge_options {
    ($options:ty) => {
        impl $options {
            pub fn with_top(mut self, top: i32) -> Self {
                self.top = top;
                self
            }

            pub fn with_left(mut self, left: i32) -> Self {
                self.left = left;
                self
            }

            pub fn with_bottom(mut self, bottom: i32) -> Self {
                self.bottom = bottom;
                self
            }

            pub fn with_right(mut self, right: i32) -> Self {
                self.right = right;
                self
            }

            /// Same thickness on all four sides
            pub fn with_edges(self, size: i32) -> Self {
                self.with_top(size)
                    .with_left(size)
                    .with_bottom(size)
                    .with_right(size)
            }

            pub fn insets(&self) -> frieze_core::Insets {
                frieze_core::Insets::new(self.top, self.left, self.bottom, self.right)
            }
        }
    };
}

pub mod alpha;
pub mod castle;
pub mod checkerboard;
pub mod circle_corners;
pub mod curly_brace;
pub mod hair;
pub mod multiline;
pub mod scallop;
pub mod scroll;
pub mod shadowed_page;

pub use alpha::{alpha_bands, AlphaBorder, AlphaOptions};
pub use castle::{castle_outline, CastleBorder, CastleOptions};
pub use checkerboard::{checker_cells, CheckerboardBorder, CheckerboardOptions};
pub use circle_corners::{corner_geometry, CircleCornersBorder, CircleCornersOptions, CornerEdges, CornerGeometry};
pub use curly_brace::{brace_curves, CurlyBraceBorder, CurlyBraceOptions};
pub use hair::{hair_lines, HairBorder, HairLine, HairOptions, Highlight};
pub use multiline::{concentric_rects, MultilineBorder, MultilineOptions};
pub use scallop::{scallop_curves, ScallopBorder, ScallopOptions};
pub use scroll::{scroll_geometry, ScrollBorder, ScrollGeometry, ScrollOptions};
pub use shadowed_page::{page_geometry, PageGeometry, ShadowedPageBorder, ShadowedPageOptions};
