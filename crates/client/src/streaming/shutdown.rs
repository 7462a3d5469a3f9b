//! Client-wide shutdown signal.
//!
//! A [`crate::SplunkClient`] and every clone of it hold the same signal, so
//! stopping one clone stops the event streams started from any of them.
//! Stopping is one-way: a client cannot be restarted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    stopped: AtomicBool,
    wakeup: Notify,
}

/// Stop flag shared by a client, its clones, and their polling tasks.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal {
    inner: Arc<Inner>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop every stream sharing this signal. Polling tasks parked in a
    /// backoff sleep wake at once; a fetch already in flight finishes first.
    pub fn trigger(&self) {
        if !self.inner.stopped.swap(true, Ordering::AcqRel) {
            self.inner.wakeup.notify_waiters();
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.inner.stopped.load(Ordering::Acquire)
    }

    /// Resolve once [`ShutdownSignal::trigger`] has been called on any clone.
    pub async fn cancelled(&self) {
        // Register before reading the flag; notify_waiters stores no permit.
        let wakeup = self.inner.wakeup.notified();
        if self.is_triggered() {
            return;
        }
        wakeup.await;
    }
}
