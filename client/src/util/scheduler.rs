//! Browser-backed [`Scheduler`] using `gloo-timers`.
//!
//! On the server no timer is armed: SSR renders the state as it stands at
//! invocation, and hydration re-runs the page with real timers.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::time::Duration;

use timeline::{Scheduler, TaskHandle};

/// Schedules jobs with `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// A pending `setTimeout`. Dropping or cancelling clears it.
pub struct BrowserTask {
    #[cfg(feature = "hydrate")]
    timeout: gloo_timers::callback::Timeout,
}

impl TaskHandle for BrowserTask {
    fn cancel(self) {
        #[cfg(feature = "hydrate")]
        drop(self.timeout);
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTask;

    fn schedule(&self, delay: Duration, job: Box<dyn FnOnce()>) -> BrowserTask {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            BrowserTask { timeout: gloo_timers::callback::Timeout::new(millis, job) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, job);
            BrowserTask {}
        }
    }
}
