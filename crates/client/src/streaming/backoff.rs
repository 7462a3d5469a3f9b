//! Delay policy for polling a search that has nothing new.
//!
//! The delay after `n` consecutive empty fetches is `base * 2^min(n, max_exponent)`.
//! With the defaults that is 500ms, 1s, 2s, 4s, then 8s for every later
//! empty fetch. Any non-empty fetch resets the counter.

use std::time::Duration;

use stailf_config::constants::{DEFAULT_BACKOFF_BASE_MS, DEFAULT_MAX_BACKOFF_EXPONENT};

/// Exponential backoff counter owned by one streaming loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backoff {
    base: Duration,
    max_exponent: u32,
    attempts: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_BACKOFF_BASE_MS),
            DEFAULT_MAX_BACKOFF_EXPONENT,
        )
    }
}

impl Backoff {
    pub fn new(base: Duration, max_exponent: u32) -> Self {
        Self {
            base,
            max_exponent,
            attempts: 0,
        }
    }

    /// Delay to wait before the next fetch.
    pub fn delay(&self) -> Duration {
        let exponent = self.attempts.min(self.max_exponent);
        self.base.saturating_mul(2u32.saturating_pow(exponent))
    }

    /// Count one more empty fetch.
    pub fn record_empty(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    /// Forget all empty fetches.
    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    /// Consecutive empty fetches since the last reset.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
