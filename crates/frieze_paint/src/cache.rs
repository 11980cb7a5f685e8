//! Bounds-keyed geometry memo
//!
//! Border geometry is a pure function of the bounds and the border's options.
//! Options never change after construction, so the only key is the bounds
//! rectangle: equal bounds reuse the stored geometry, anything else
//! recomputes it.

use frieze_core::{Rect, Result};

/// Single-entry cache of geometry derived from a bounds rectangle
#[derive(Debug)]
pub struct GeometryCache<G> {
    entry: Option<(Rect, G)>,
    hits: u64,
    misses: u64,
}

impl<G> GeometryCache<G> {
    pub fn new() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Geometry for `bounds`, computing it only when the bounds changed
    ///
    /// A failed computation leaves the cache empty.
    pub fn get_or_try_compute<F>(&mut self, bounds: Rect, compute: F) -> Result<&G>
    where
        F: FnOnce(Rect) -> Result<G>,
    {
        let geometry = match self.entry.take() {
            Some((cached, geometry)) if cached == bounds => {
                self.hits += 1;
                tracing::trace!("GeometryCache: hit for {}", bounds);
                geometry
            }
            _ => {
                self.misses += 1;
                tracing::debug!("GeometryCache: recomputing for {}", bounds);
                compute(bounds)?
            }
        };
        Ok(&self.entry.insert((bounds, geometry)).1)
    }

    /// Infallible form of [`get_or_try_compute`](Self::get_or_try_compute)
    pub fn get_or_compute<F>(&mut self, bounds: Rect, compute: F) -> &G
    where
        F: FnOnce(Rect) -> G,
    {
        let geometry = match self.entry.take() {
            Some((cached, geometry)) if cached == bounds => {
                self.hits += 1;
                geometry
            }
            _ => {
                self.misses += 1;
                tracing::debug!("GeometryCache: recomputing for {}", bounds);
                compute(bounds)
            }
        };
        &self.entry.insert((bounds, geometry)).1
    }

    /// Cached geometry, if it was computed for exactly `bounds`
    pub fn get(&self, bounds: Rect) -> Option<&G> {
        match &self.entry {
            Some((cached, geometry)) if *cached == bounds => Some(geometry),
            _ => None,
        }
    }

    /// Forget the stored geometry
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Bounds the stored geometry was computed for
    pub fn cached_bounds(&self) -> Option<Rect> {
        self.entry.as_ref().map(|(bounds, _)| *bounds)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<G> Default for GeometryCache<G> {
    fn default() -> Self {
        Self::new()
    }
}
