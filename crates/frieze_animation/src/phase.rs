//! Per-paint animation phases
//!
//! Animated borders do not run on a clock. Each paint draws the current phase
//! and steps it exactly once, so the animation speed is set by the repaint
//! delay alone.

/// Transparency that bounces between fully transparent and fully opaque
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaPhase {
    alpha: f32,
    delta: f32,
}

impl AlphaPhase {
    /// Default step size per paint
    pub const DEFAULT_STEP: f32 = 0.1;

    /// Start at `alpha` (clamped into `0.0..=1.0`), moving up by `step`
    pub fn new(alpha: f32, step: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            delta: step,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Signed step applied by the next `advance`
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Step once, reversing direction when a bound is crossed
    pub fn advance(&mut self) -> f32 {
        let mut alpha = self.alpha + self.delta;
        if alpha < 0.0 {
            alpha = 0.0;
            self.delta = -self.delta;
        } else if alpha > 1.0 {
            alpha = 1.0;
            self.delta = -self.delta;
        }
        self.alpha = alpha;
        alpha
    }
}

/// Rotating start index into a palette of `len` colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCycle {
    len: usize,
    start: usize,
}

impl ColorCycle {
    /// A cycle over `len` colors starting at index 0. `len` of zero is
    /// treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            start: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index the next sequence starts at
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index following `index`
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len
    }

    /// Move the start index forward by one
    pub fn advance(&mut self) {
        self.start = self.next_index(self.start);
    }

    /// Endless index sequence `start, start + 1, ...` modulo `len`
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let (len, start) = (self.len, self.start);
        (0..).map(move |k| (start + k) % len)
    }
}
