//! Clock and scheduler seams, plus the cancellable [`Playback`] that arms
//! one timer per step offset.
//!
//! DESIGN
//! ======
//! A [`Scheduler`] hands back a [`TaskHandle`] for every job. `Playback` owns
//! all handles for a run and cancels whatever is still pending when it is
//! dropped, so a view that owns its playback cannot receive a callback after
//! teardown.
//!
//! [`ManualScheduler`] runs jobs against virtual time and is what tests use;
//! the browser implementation lives in the client crate.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Source of elapsed time since some origin.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn start() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Handle to a scheduled job.
pub trait TaskHandle {
    /// Prevent the job from running if it has not run yet.
    fn cancel(self);
}

/// Runs boxed jobs after a delay on the current thread.
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay: Duration, job: Box<dyn FnOnce()>) -> Self::Handle;
}

// =============================================================================
// PLAYBACK
// =============================================================================

/// Timers armed for one timeline run. Dropping it cancels them.
pub struct Playback<H: TaskHandle> {
    handles: Vec<H>,
}

impl<H: TaskHandle> Playback<H> {
    /// Arm one job per offset. `on_due` receives the offset that fired and is
    /// expected to call [`crate::driver::Driver::advance_to`] with it.
    pub fn arm<S>(scheduler: &S, offsets: &[Duration], on_due: Rc<dyn Fn(Duration)>) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let handles = offsets
            .iter()
            .map(|&at| {
                let on_due = Rc::clone(&on_due);
                scheduler.schedule(at, Box::new(move || on_due(at)))
            })
            .collect();
        Self { handles }
    }

    /// An empty playback holding no timers.
    #[must_use]
    pub fn idle() -> Self {
        Self { handles: Vec::new() }
    }

    /// Track an extra handle so it shares this run's lifetime.
    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    /// Take over every handle of `other`, leaving it empty.
    pub fn absorb(&mut self, mut other: Self) {
        self.handles.append(&mut other.handles);
    }

    /// Cancel every job still pending.
    pub fn cancel(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H: TaskHandle> Drop for Playback<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

struct PendingJob {
    due: Duration,
    seq: u64,
    job: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_seq: u64,
    queue: Vec<PendingJob>,
}

/// Virtual-time scheduler. Time only moves on [`ManualScheduler::advance_by`]
/// or [`ManualScheduler::advance_to`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

pub struct ManualHandle {
    seq: u64,
    inner: Weak<RefCell<ManualInner>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().queue.retain(|p| p.seq != self.seq);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, job: Box<dyn FnOnce()>) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let due = inner.now + delay;
        inner.queue.push(PendingJob { due, seq, job });
        ManualHandle { seq, inner: Rc::downgrade(&self.inner) }
    }
}

impl Clock for ManualScheduler {
    fn elapsed(&self) -> Duration {
        self.inner.borrow().now
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`, running due jobs in order.
    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.elapsed() + delta;
        self.advance_to(target)
    }

    /// Move time to `target`, running every job due by then. Jobs scheduled
    /// by a running job are picked up in the same call. Returns jobs run.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let idx = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let pending = inner.queue.swap_remove(i);
                    inner.now = inner.now.max(pending.due);
                    pending.job
                })
            };
            // Borrow released: the job may schedule or cancel.
            let Some(job) = next else { break };
            job();
            ran += 1;
        }
        let mut inner = self.inner.borrow_mut();
        inner.now = inner.now.max(target);
        ran
    }

    /// Jobs still waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }
}
