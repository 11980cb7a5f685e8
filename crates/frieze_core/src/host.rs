//! Host component contract
//!
//! The host is the widget a border decorates. Borders read its bounds on
//! every paint, and animated borders use it to schedule a delayed repaint of
//! their edge bands.
//!
//! Hosts are shared as `Arc<dyn Host>`. Anything a border schedules for later
//! captures only a [`WeakHostRef`], so a destroyed or detached host turns a
//! late callback into a no-op instead of keeping the host alive.

use std::sync::{Arc, Weak};
use std::time::Duration;

use crate::error::BorderError;
use crate::geometry::Rect;

/// A one-shot unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Shared host reference
pub type HostRef = Arc<dyn Host>;

/// Non-owning host reference held by scheduled callbacks
pub type WeakHostRef = Weak<dyn Host>;

/// Capabilities a host component provides to its border
pub trait Host: Send + Sync {
    /// Current bounds of the component
    fn bounds(&self) -> Rect;

    /// Ask the host to redraw a sub-region on its UI thread
    fn request_repaint(&self, region: Rect);

    /// Run `task` once after `delay`, on the host's UI thread
    fn schedule_once(&self, delay: Duration, task: Task);

    /// Error channel for paints that failed; the frame is simply not drawn
    fn paint_failed(&self, error: &BorderError) {
        tracing::warn!("border paint failed: {}", error);
    }
}
