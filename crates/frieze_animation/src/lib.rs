//! Frieze Animation
//!
//! Animated borders advance a small piece of state on every paint and then
//! ask their host to paint them again a little later.
//!
//! # Features
//!
//! - **TimerQueue**: one-shot delayed tasks a host can drive from its event loop
//! - **RepaintTimer**: the idle/armed repaint state machine for a border's edge bands
//! - **AlphaPhase**: ping-pong transparency stepping
//! - **ColorCycle**: rotating palette start index

pub mod phase;
pub mod repaint;
pub mod timer;

pub use phase::{AlphaPhase, ColorCycle};
pub use repaint::{edge_regions, RepaintTimer, TimerState};
pub use timer::{TimerHandle, TimerId, TimerQueue};
