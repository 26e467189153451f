//! Time sources.
//!
//! Renderers never read the wall clock themselves; hosts sample a [`Clock`] into a
//! [`FrameTime`] and pass it to each render call.

use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

use chrono::Timelike as _;

use crate::foundation::core::{FrameTime, TimeMs};

/// Source of the current time and local hour of day.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> TimeMs;

    /// Local hour in `0..24`.
    fn local_hour(&self) -> u8;

    fn sample(&self) -> FrameTime {
        FrameTime {
            now: self.now_ms(),
            local_hour: self.local_hour(),
        }
    }
}

/// Wall clock in the system's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimeMs {
        TimeMs(chrono::Local::now().timestamp_millis().max(0) as u64)
    }

    fn local_hour(&self) -> u8 {
        chrono::Local::now().hour() as u8
    }

    fn sample(&self) -> FrameTime {
        let now = chrono::Local::now();
        FrameTime {
            now: TimeMs(now.timestamp_millis().max(0) as u64),
            local_hour: now.hour() as u8,
        }
    }
}

/// Manually driven clock for tests and offline rendering.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicU64,
    hour: AtomicU8,
}

impl ManualClock {
    pub fn new(now: TimeMs, local_hour: u8) -> Self {
        Self {
            now: AtomicU64::new(now.0),
            hour: AtomicU8::new(local_hour % 24),
        }
    }

    pub fn set(&self, now: TimeMs) {
        self.now.store(now.0, Ordering::Relaxed);
    }

    pub fn advance(&self, ms: u64) -> TimeMs {
        TimeMs(self.now.fetch_add(ms, Ordering::Relaxed).saturating_add(ms))
    }

    pub fn set_hour(&self, local_hour: u8) {
        self.hour.store(local_hour % 24, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimeMs {
        TimeMs(self.now.load(Ordering::Relaxed))
    }

    fn local_hour(&self) -> u8 {
        self.hour.load(Ordering::Relaxed)
    }
}
