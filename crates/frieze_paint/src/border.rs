//! The border contract
//!
//! A border reserves [`Insets`] around a host component and paints into those
//! edge bands. Painting is a call-and-return operation on the UI thread:
//! the border reads the bounds it is given, draws through a [`Surface`], and
//! animated borders schedule their next frame through the host.

use frieze_core::{BorderError, HostRef, Insets, Rect, Result, Surface};

/// A decorative border around a rectangular host component
pub trait Border {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Space to reserve on each side. Depends on configuration only, never on
    /// the bounds being painted.
    fn insets(&self) -> Insets;

    /// Whether the border fills every pixel of its insets
    fn is_opaque(&self) -> bool {
        false
    }

    /// Paint the border around `bounds`
    ///
    /// All surface state touched while painting is restored before this
    /// returns, whether or not it succeeds.
    fn paint(&mut self, host: &HostRef, surface: &mut dyn Surface, bounds: Rect) -> Result<()>;
}

/// Paint `border`, routing any failure to the host's error channel
///
/// A failed paint is not retried; the frame is simply missing for this pass.
/// Returns whether the border painted.
pub fn paint_border(
    border: &mut dyn Border,
    host: &HostRef,
    surface: &mut dyn Surface,
    bounds: Rect,
) -> bool {
    match border.paint(host, surface, bounds) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("{} border: paint failed at {}: {}", border.name(), bounds, err);
            host.paint_failed(&err);
            false
        }
    }
}

/// Largest coordinate, in either direction, a border paints at
///
/// Generators offset the bounds by up to twice an edge thickness plus a line
/// width, so coordinates and thicknesses are capped well inside `i32`.
pub const MAX_COORDINATE: i32 = i32::MAX / 4;

/// Largest edge thickness, line width, line spacing or shadow offset
pub const MAX_THICKNESS: i32 = i32::MAX / 8;

/// Reject bounds with a negative size or with edges outside
/// `±MAX_COORDINATE`
pub fn check_bounds(bounds: Rect) -> Result<()> {
    if bounds.width < 0 || bounds.height < 0 {
        return Err(BorderError::InvalidGeometry(format!(
            "negative bounds size {}",
            bounds
        )));
    }
    let right = bounds.x.checked_add(bounds.width);
    let bottom = bounds.y.checked_add(bounds.height);
    let in_range = |v: i32| (-MAX_COORDINATE..=MAX_COORDINATE).contains(&v);
    match (right, bottom) {
        (Some(right), Some(bottom))
            if in_range(bounds.x) && in_range(bounds.y) && in_range(right) && in_range(bottom) =>
        {
            Ok(())
        }
        _ => Err(BorderError::InvalidGeometry(format!(
            "bounds {} outside pixel space",
            bounds
        ))),
    }
}

/// Reject edge thickness that is negative or above `MAX_THICKNESS`
pub(crate) fn check_insets(border: &'static str, insets: Insets) -> Result<()> {
    let sides = [insets.top, insets.left, insets.bottom, insets.right];
    if sides.iter().any(|&side| side < 0) {
        return Err(BorderError::InvalidConfiguration {
            border,
            reason: format!(
                "edge thickness must not be negative (top {}, left {}, bottom {}, right {})",
                insets.top, insets.left, insets.bottom, insets.right
            ),
        });
    }
    if sides.iter().any(|&side| side > MAX_THICKNESS) {
        return Err(BorderError::InvalidConfiguration {
            border,
            reason: format!(
                "edge thickness must be at most {} (top {}, left {}, bottom {}, right {})",
                MAX_THICKNESS, insets.top, insets.left, insets.bottom, insets.right
            ),
        });
    }
    Ok(())
}

/// Reject a line width that is negative or above `MAX_THICKNESS`
pub(crate) fn check_line_width(border: &'static str, width: i32) -> Result<()> {
    if !(0..=MAX_THICKNESS).contains(&width) {
        return Err(BorderError::InvalidConfiguration {
            border,
            reason: format!(
                "line width must be between 0 and {}, got {}",
                MAX_THICKNESS, width
            ),
        });
    }
    Ok(())
}
