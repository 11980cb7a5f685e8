//! Clip regions
//!
//! Borders only ever clip to combinations of axis-aligned rectangles, so the
//! region is kept as a small expression tree rather than a rasterized mask.

use crate::geometry::{Point, Rect};

/// A clip region built from rectangles
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipShape {
    /// Axis-aligned rectangle clip
    Rect(Rect),
    /// Everything inside `outer` that is not inside `inner`
    Frame { outer: Rect, inner: Rect },
    /// Union of rectangles
    Union(Vec<Rect>),
    /// Points inside both regions
    Intersect(Box<ClipShape>, Box<ClipShape>),
}

impl ClipShape {
    /// Create a rectangular clip
    pub fn rect(rect: Rect) -> Self {
        ClipShape::Rect(rect)
    }

    /// Create a frame clip: `outer` with `inner` cut out
    pub fn frame(outer: Rect, inner: Rect) -> Self {
        ClipShape::Frame { outer, inner }
    }

    /// Create a union of rectangles; empty rectangles are dropped
    pub fn union(rects: impl IntoIterator<Item = Rect>) -> Self {
        ClipShape::Union(rects.into_iter().filter(|r| !r.is_empty()).collect())
    }

    /// Narrow this clip by an existing one. `None` means "unclipped".
    pub fn intersect(self, existing: Option<ClipShape>) -> Self {
        match existing {
            Some(other) => ClipShape::Intersect(Box::new(self), Box::new(other)),
            None => self,
        }
    }

    /// Whether the pixel at `point` survives this clip
    pub fn contains(&self, point: Point) -> bool {
        match self {
            ClipShape::Rect(r) => r.contains(point),
            ClipShape::Frame { outer, inner } => outer.contains(point) && !inner.contains(point),
            ClipShape::Union(rects) => rects.iter().any(|r| r.contains(point)),
            ClipShape::Intersect(a, b) => a.contains(point) && b.contains(point),
        }
    }

    /// Bounding box of the region (conservative for intersections)
    pub fn bounds(&self) -> Rect {
        match self {
            ClipShape::Rect(r) => *r,
            ClipShape::Frame { outer, .. } => *outer,
            ClipShape::Union(rects) => rects.iter().fold(Rect::ZERO, |acc, r| acc.union(r)),
            ClipShape::Intersect(a, _) => a.bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_excludes_inner() {
        let clip = ClipShape::frame(Rect::new(0, 0, 100, 100), Rect::new(10, 10, 80, 80));
        assert!(clip.contains(Point::new(5, 50)));
        assert!(!clip.contains(Point::new(50, 50)));
        assert!(!clip.contains(Point::new(150, 50)));
    }

    #[test]
    fn test_union_drops_empty_rects() {
        let clip = ClipShape::union([Rect::new(0, 0, 10, 10), Rect::new(5, 5, 0, 10)]);
        assert_eq!(clip, ClipShape::Union(vec![Rect::new(0, 0, 10, 10)]));
    }

    #[test]
    fn test_intersect_with_existing() {
        let bands = ClipShape::union([Rect::new(0, 0, 100, 10), Rect::new(0, 90, 100, 10)]);
        let clip = bands.intersect(Some(ClipShape::rect(Rect::new(0, 0, 50, 100))));
        assert!(clip.contains(Point::new(20, 5)));
        assert!(!clip.contains(Point::new(70, 5)));
        assert!(!clip.contains(Point::new(20, 50)));
    }

    #[test]
    fn test_intersect_with_none_is_identity() {
        let clip = ClipShape::rect(Rect::new(1, 2, 3, 4));
        assert_eq!(clip.clone().intersect(None), clip);
    }
}
