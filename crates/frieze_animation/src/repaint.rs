//! Delayed edge repaint
//!
//! An animated border paints one frame, advances its phase, and arms a
//! [`RepaintTimer`]. When the timer fires it asks the host to repaint just the
//! border's four edge bands, which triggers the next frame.
//!
//! States are `Idle` and `Armed`. Every `arm` schedules a fresh one-shot; a
//! callback that is still pending from an earlier paint is left alone, so
//! rapid repaints can have several callbacks in flight at once. Each callback
//! holds only a weak host reference and does nothing if the host is gone.

use frieze_core::{HostRef, Insets, Rect};
use smallvec::SmallVec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Repaint timer state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// No callback pending
    Idle,
    /// At least one callback scheduled and not yet fired
    Armed,
}

/// The four edge bands of `bounds` reserved by `insets`, skipping empty ones
///
/// Order is top, left, bottom, right.
pub fn edge_regions(bounds: Rect, insets: Insets) -> SmallVec<[Rect; 4]> {
    [
        Rect::new(bounds.x, bounds.y, bounds.width, insets.top),
        Rect::new(bounds.x, bounds.y, insets.left, bounds.height),
        Rect::new(
            bounds.x,
            bounds.bottom() - insets.bottom,
            bounds.width,
            insets.bottom,
        ),
        Rect::new(
            bounds.right() - insets.right,
            bounds.y,
            insets.right,
            bounds.height,
        ),
    ]
    .into_iter()
    .filter(|r| !r.is_empty())
    .collect()
}

/// Decrements the pending count when the scheduled callback runs or is dropped
struct PendingTicket(Arc<AtomicUsize>);

impl Drop for PendingTicket {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// One-shot repaint scheduler for an animated border
#[derive(Debug)]
pub struct RepaintTimer {
    delay: Duration,
    insets: Insets,
    pending: Arc<AtomicUsize>,
}

impl RepaintTimer {
    pub fn new(delay: Duration, insets: Insets) -> Self {
        Self {
            delay,
            insets,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_millis(delay_ms: u64, insets: Insets) -> Self {
        Self::new(Duration::from_millis(delay_ms), insets)
    }

    /// A zero delay disables animation
    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a repaint of the edge bands. No-op when disabled.
    pub fn arm(&self, host: &HostRef) {
        if !self.is_enabled() {
            return;
        }

        self.pending.fetch_add(1, Ordering::AcqRel);
        let ticket = PendingTicket(Arc::clone(&self.pending));
        let weak = Arc::downgrade(host);
        let insets = self.insets;

        tracing::debug!(
            "RepaintTimer: armed for {:?} ({} pending)",
            self.delay,
            self.pending()
        );

        host.schedule_once(
            self.delay,
            Box::new(move || {
                let _ticket = ticket;
                match weak.upgrade() {
                    Some(host) => {
                        for region in edge_regions(host.bounds(), insets) {
                            host.request_repaint(region);
                        }
                    }
                    None => tracing::trace!("RepaintTimer: host dropped, skipping repaint"),
                }
            }),
        );
    }

    /// Number of scheduled callbacks that have not fired yet
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    pub fn state(&self) -> TimerState {
        if self.pending() > 0 {
            TimerState::Armed
        } else {
            TimerState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{TimerHandle, TimerQueue};
    use frieze_core::{Host, Task};
    use std::sync::Mutex;

    struct TestHost {
        bounds: Rect,
        timers: TimerHandle,
        repaints: Mutex<Vec<Rect>>,
    }

    impl Host for TestHost {
        fn bounds(&self) -> Rect {
            self.bounds
        }

        fn request_repaint(&self, region: Rect) {
            self.repaints.lock().unwrap().push(region);
        }

        fn schedule_once(&self, delay: Duration, task: Task) {
            self.timers.schedule(delay, task);
        }
    }

    fn host(queue: &TimerQueue) -> Arc<TestHost> {
        Arc::new(TestHost {
            bounds: Rect::new(0, 0, 100, 50),
            timers: queue.handle(),
            repaints: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn test_edge_regions() {
        let regions = edge_regions(Rect::new(10, 20, 100, 50), Insets::new(4, 0, 6, 8));
        assert_eq!(
            regions.as_slice(),
            &[
                Rect::new(10, 20, 100, 4),
                Rect::new(10, 64, 100, 6),
                Rect::new(102, 20, 8, 50),
            ]
        );
    }

    #[test]
    fn test_arm_then_fire_repaints_edges() {
        let queue = TimerQueue::new();
        let test_host = host(&queue);
        let host_ref: HostRef = test_host.clone();
        let timer = RepaintTimer::from_millis(200, Insets::uniform(8));

        assert_eq!(timer.state(), TimerState::Idle);
        timer.arm(&host_ref);
        assert_eq!(timer.state(), TimerState::Armed);

        queue.fire_all();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(test_host.repaints.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_each_arm_schedules_a_new_one_shot() {
        let queue = TimerQueue::new();
        let host_ref: HostRef = host(&queue);
        let timer = RepaintTimer::from_millis(100, Insets::uniform(2));

        timer.arm(&host_ref);
        timer.arm(&host_ref);
        timer.arm(&host_ref);

        // Earlier callbacks are not cancelled
        assert_eq!(timer.pending(), 3);
        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.fire_all(), 3);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_zero_delay_never_arms() {
        let queue = TimerQueue::new();
        let host_ref: HostRef = host(&queue);
        let timer = RepaintTimer::from_millis(0, Insets::uniform(8));

        timer.arm(&host_ref);
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_fired_callback_tolerates_dropped_host() {
        let queue = TimerQueue::new();
        let timer = RepaintTimer::from_millis(50, Insets::uniform(8));
        {
            let host_ref: HostRef = host(&queue);
            timer.arm(&host_ref);
        }

        assert_eq!(queue.fire_all(), 1);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_dropped_queue_releases_pending() {
        let timer = RepaintTimer::from_millis(50, Insets::uniform(8));
        let queue = TimerQueue::new();
        let host_ref: HostRef = host(&queue);
        timer.arm(&host_ref);
        assert_eq!(timer.pending(), 1);

        drop(queue);
        assert_eq!(timer.pending(), 0);
    }
}
