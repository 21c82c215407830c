// src/shared/rate_limit.rs
//! Fixed-window rate limiting, keyed by client network address.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Counter for one client address within its current window.
struct Window {
    started: Instant,
    count: u32,
}

/// Process-local limiter. Counters do not survive a restart.
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
    window: Duration,
    max_requests: u32,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            window,
            max_requests,
        }
    }

    /// The contact endpoint allows 10 submissions per address per 15 minutes.
    pub fn contact_default() -> Self {
        Self::new(Duration::from_secs(15 * 60), 10)
    }

    /// Records one request from `key` and reports whether it is allowed.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count < self.max_requests {
            entry.count += 1;
            true
        } else {
            false
        }
    }
}
