// src/core/retry.rs
//! Bounded retry with a uniformly jittered pause between attempts.

use std::{fmt::Display, thread, time::Duration};

use rand::Rng;
use tracing::{debug, warn};

use crate::config::consts::{FETCH_ATTEMPTS, RETRY_MAX_DELAY_MS, RETRY_MIN_DELAY_MS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: FETCH_ATTEMPTS,
            min_delay: Duration::from_millis(RETRY_MIN_DELAY_MS),
            max_delay: Duration::from_millis(RETRY_MAX_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// No pause between attempts.
    pub fn immediate(attempts: u32) -> Self {
        Self { attempts, min_delay: Duration::ZERO, max_delay: Duration::ZERO }
    }

    /// Pause before the next attempt, drawn from `[min_delay, max_delay)`.
    pub fn jitter(&self) -> Duration {
        if self.max_delay <= self.min_delay {
            return self.min_delay;
        }
        let secs = rand::thread_rng()
            .gen_range(self.min_delay.as_secs_f64()..self.max_delay.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

/// Run `op` until it succeeds or `policy.attempts` calls have failed.
/// `op` receives the 1-based attempt number. The last error is returned unchanged.
pub fn with_retry<T, E, F>(policy: &RetryPolicy, what: &str, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
    E: Display,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt) {
            Ok(value) => {
                if attempt > 1 {
                    debug!("{what} succeeded on attempt {attempt}/{attempts}");
                }
                return Ok(value);
            }
            Err(e) if attempt >= attempts => {
                warn!("{what} failed on final attempt {attempt}/{attempts} ({e}), giving up");
                return Err(e);
            }
            Err(e) => {
                let delay = policy.jitter();
                warn!("{what} failed on attempt {attempt}/{attempts} ({e}), retrying in {delay:?}");
                thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeds_on_third_attempt_without_a_fourth_call() {
        let mut calls = 0;
        let out: Result<&str, String> = with_retry(&RetryPolicy::immediate(3), "fetch", |n| {
            calls += 1;
            if n < 3 { Err(format!("boom {n}")) } else { Ok("<html>") }
        });
        assert_eq!(out, Ok("<html>"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn exhausted_attempts_return_last_error() {
        let mut calls = 0;
        let out: Result<(), String> = with_retry(&RetryPolicy::immediate(3), "fetch", |n| {
            calls += 1;
            Err(format!("boom {n}"))
        });
        assert_eq!(out, Err(s!("boom 3")));
        assert_eq!(calls, 3);
    }

    #[test]
    fn first_success_is_not_retried() {
        let mut calls = 0;
        let out: Result<u8, String> = with_retry(&RetryPolicy::immediate(3), "fetch", |_| {
            calls += 1;
            Ok(7)
        });
        assert_eq!(out, Ok(7));
        assert_eq!(calls, 1);
    }

    #[test]
    fn zero_attempts_still_calls_once() {
        let mut calls = 0;
        let _: Result<(), &str> = with_retry(&RetryPolicy::immediate(0), "fetch", |_| {
            calls += 1;
            Err("nope")
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn jitter_stays_in_default_window() {
        let p = RetryPolicy::default();
        for _ in 0..200 {
            let d = p.jitter();
            assert!(d >= Duration::from_secs(1) && d <= Duration::from_secs(3), "{d:?}");
        }
    }

    #[test]
    fn degenerate_window_uses_min_delay() {
        let p = RetryPolicy {
            attempts: 3,
            min_delay: Duration::from_millis(5),
            max_delay: Duration::from_millis(5),
        };
        assert_eq!(p.jitter(), Duration::from_millis(5));
    }
}
