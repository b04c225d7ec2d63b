//! Replace-on-schedule timers.
//!
//! [`DelayedTask`] runs a future after a fixed delay, and every new
//! `schedule()` call aborts whatever was pending: last write wins within
//! the window. The event loop uses two of these — one for the 250 ms
//! input debounce, one for the 120 ms blur grace period.

use std::future::Future;
use std::time::Duration;

use tokio::task::AbortHandle;

pub struct DelayedTask {
    delay: Duration,
    handle: Option<AbortHandle>,
}

impl DelayedTask {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            handle: None,
        }
    }

    /// Schedule `task` to run after the configured delay, replacing any
    /// previously scheduled task that hasn't started yet.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let join = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        self.handle = Some(join.abort_handle());
    }

    /// Drop the pending task, if any. A task whose delay has already
    /// elapsed may still run to completion.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_schedules_collapse_to_last() {
        let fired = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel();
        let mut timer = DelayedTask::new(Duration::from_millis(250));

        for query in ["b", "ba", "bat"] {
            let fired = fired.clone();
            let tx = tx.clone();
            let query = query.to_string();
            timer.schedule(async move {
                fired.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(query);
            });
            // Keystrokes 50ms apart, well inside the debounce window.
            tokio::time::advance(Duration::from_millis(50)).await;
        }

        // Let the surviving spawned task's sleep elapse and its body run.
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(rx.try_recv().unwrap(), "bat");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_schedules_all_fire() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = DelayedTask::new(Duration::from_millis(250));

        for _ in 0..2 {
            let fired = fired.clone();
            timer.schedule(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(300)).await;
        }

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timer = DelayedTask::new(Duration::from_millis(120));

        let counter = fired.clone();
        timer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::advance(Duration::from_millis(50)).await;
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
