//! One-shot timer queue
//!
//! A minimal scheduler for delayed one-shot tasks. The queue does not own a
//! thread: the host's event loop calls [`TimerQueue::fire_due`] on its UI
//! thread, which keeps task execution serialized with painting.
//!
//! ```ignore
//! let timers = TimerQueue::new();
//! let handle = timers.handle();
//!
//! // Anywhere that needs to defer work:
//! handle.schedule(Duration::from_millis(200), Box::new(|| repaint()));
//!
//! // In the event loop:
//! timers.fire_due(Instant::now());
//! ```

use frieze_core::Task;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a pending one-shot timer
    pub struct TimerId;
}

struct PendingTimer {
    deadline: Instant,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
    task: Task,
}

/// Internal state of the timer queue
struct QueueInner {
    timers: SlotMap<TimerId, PendingTimer>,
    next_seq: u64,
}

impl QueueInner {
    fn insert(&mut self, deadline: Instant, task: Task) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(PendingTimer {
            deadline,
            seq,
            task,
        })
    }
}

/// Queue of pending one-shot tasks
pub struct TimerQueue {
    inner: Arc<Mutex<QueueInner>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueInner {
                timers: SlotMap::with_key(),
                next_seq: 0,
            })),
        }
    }

    /// Get a weak handle for scheduling from components
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Run `task` once, `delay` from now
    pub fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        self.schedule_at(Instant::now() + delay, task)
    }

    /// Run `task` once at or after `deadline`
    pub fn schedule_at(&self, deadline: Instant, task: Task) -> TimerId {
        self.inner.lock().unwrap().insert(deadline, task)
    }

    /// Drop a pending task without running it
    pub fn cancel(&self, id: TimerId) -> bool {
        self.inner.lock().unwrap().timers.remove(id).is_some()
    }

    /// Number of tasks waiting to fire
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().timers.len()
    }

    /// Earliest pending deadline, for sizing the event loop's wait
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .lock()
            .unwrap()
            .timers
            .values()
            .map(|t| t.deadline)
            .min()
    }

    /// Run every task whose deadline is at or before `now`
    ///
    /// Tasks run in deadline order, outside the queue lock, so a task may
    /// schedule further timers. Returns the number of tasks run.
    pub fn fire_due(&self, now: Instant) -> usize {
        let due = {
            let mut inner = self.inner.lock().unwrap();
            let ids: Vec<TimerId> = inner
                .timers
                .iter()
                .filter(|(_, t)| t.deadline <= now)
                .map(|(id, _)| id)
                .collect();
            let mut due: Vec<PendingTimer> = ids
                .into_iter()
                .filter_map(|id| inner.timers.remove(id))
                .collect();
            due.sort_by_key(|t| (t.deadline, t.seq));
            due
        };

        let count = due.len();
        if count > 0 {
            tracing::trace!("TimerQueue: firing {} task(s)", count);
        }
        for timer in due {
            (timer.task)();
        }
        count
    }

    /// Run every pending task regardless of deadline
    pub fn fire_all(&self) -> usize {
        let latest = self.next_deadline_max();
        match latest {
            Some(deadline) => self.fire_due(deadline),
            None => 0,
        }
    }

    fn next_deadline_max(&self) -> Option<Instant> {
        self.inner
            .lock()
            .unwrap()
            .timers
            .values()
            .map(|t| t.deadline)
            .max()
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to a timer queue
///
/// It won't keep the queue alive; once the queue is dropped every operation
/// is a no-op.
#[derive(Clone)]
pub struct TimerHandle {
    inner: Weak<Mutex<QueueInner>>,
}

impl TimerHandle {
    /// Schedule a task; `None` if the queue no longer exists
    pub fn schedule(&self, delay: Duration, task: Task) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().insert(Instant::now() + delay, task))
    }

    /// Cancel a pending task
    pub fn cancel(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().timers.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Check if the queue is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
