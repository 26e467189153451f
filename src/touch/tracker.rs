use std::collections::VecDeque;

use crate::foundation::core::TimeMs;

/// Default lifetime of a touch ripple.
pub const DEFAULT_RIPPLE_LIFETIME_MS: u64 = 3_000;
/// Default number of ripples kept at once.
pub const DEFAULT_MAX_RIPPLES: usize = 5;

/// One touch-originated ripple.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TouchRipple {
    /// Horizontal position as a fraction of the viewport width, in `[0, 1]`.
    pub x: f64,
    /// Vertical position as a fraction of the viewport height, in `[0, 1]`.
    pub y: f64,
    pub start: TimeMs,
}

impl TouchRipple {
    /// Build a ripple, clamping the ratios into `[0, 1]`. Non-finite ratios map to `0`.
    pub fn new(x: f64, y: f64, start: TimeMs) -> Self {
        fn ratio(v: f64) -> f64 {
            if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
        }
        Self {
            x: ratio(x),
            y: ratio(y),
            start,
        }
    }

    pub fn age_ms(&self, now: TimeMs) -> u64 {
        now.since(self.start)
    }

    /// Whether the ripple is still within `lifetime_ms` of its start (inclusive).
    pub fn is_active(&self, now: TimeMs, lifetime_ms: u64) -> bool {
        self.age_ms(now) <= lifetime_ms
    }
}

/// FIFO collection of live touch ripples, bounded in size and age.
#[derive(Clone, Debug)]
pub struct TouchTracker {
    ripples: VecDeque<TouchRipple>,
    capacity: usize,
    lifetime_ms: u64,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RIPPLES, DEFAULT_RIPPLE_LIFETIME_MS)
    }
}

impl TouchTracker {
    /// A zero capacity is raised to one so the newest touch is always kept.
    pub fn new(capacity: usize, lifetime_ms: u64) -> Self {
        let capacity = capacity.max(1);
        Self {
            ripples: VecDeque::with_capacity(capacity),
            capacity,
            lifetime_ms,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    /// Append a ripple, evicting the oldest first when at capacity. Returns the evicted ripple.
    pub fn add_touch(&mut self, x: f64, y: f64, time: TimeMs) -> Option<TouchRipple> {
        let evicted = if self.ripples.len() >= self.capacity {
            self.ripples.pop_front()
        } else {
            None
        };
        self.ripples.push_back(TouchRipple::new(x, y, time));
        evicted
    }

    /// Drop every ripple older than the lifetime. Returns how many were removed.
    pub fn prune_expired(&mut self, now: TimeMs) -> usize {
        let before = self.ripples.len();
        let lifetime_ms = self.lifetime_ms;
        self.ripples.retain(|r| r.is_active(now, lifetime_ms));
        before - self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn reset(&mut self) {
        self.ripples.clear();
    }

    /// Live ripples, oldest first.
    pub fn ripples(&self) -> &VecDeque<TouchRipple> {
        &self.ripples
    }
}

#[cfg(test)]
#[path = "../../tests/unit/touch/tracker.rs"]
mod tests;
