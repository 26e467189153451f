//! Cycle-phase computation and ambient segment dispatch.
//!
//! The ambient animation repeats every `cycle_ms`. Each frame re-derives its position in the cycle
//! from the wall clock, so the scheduler itself carries no mutable state.

use crate::animation::ease::Ease;
use crate::foundation::core::TimeMs;
use crate::foundation::error::{GardenError, GardenResult};

/// Normalized position of `now` within a repeating cycle, in `[0, 1)`.
///
/// A zero-length cycle has no meaningful position; it maps to `0`.
pub fn cycle_phase(now: TimeMs, cycle_ms: u64) -> f64 {
    if cycle_ms == 0 {
        return 0.0;
    }
    (now.0 % cycle_ms) as f64 / cycle_ms as f64
}

/// Index of the cycle containing `now` (`now / cycle_ms`).
pub fn cycle_index(now: TimeMs, cycle_ms: u64) -> u64 {
    if cycle_ms == 0 {
        return 0;
    }
    now.0 / cycle_ms
}

/// Upper bounds of the ambient segments over the unit cycle.
///
/// Each bound is inclusive: a phase exactly on `appear_end` still belongs to Appear.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhaseSegments {
    pub appear_end: f64,
    pub hold_end: f64,
    pub emerge_end: f64,
    /// Fraction of the max ripple radius reached at the end of Emerge.
    pub emerge_radius: f64,
}

impl Default for PhaseSegments {
    fn default() -> Self {
        Self {
            appear_end: 0.10,
            hold_end: 0.15,
            emerge_end: 0.25,
            emerge_radius: 0.3,
        }
    }
}

impl PhaseSegments {
    pub fn validate(&self) -> GardenResult<()> {
        let ordered = 0.0 < self.appear_end
            && self.appear_end <= self.hold_end
            && self.hold_end < self.emerge_end
            && self.emerge_end < 1.0;
        if !ordered {
            return Err(GardenError::config(format!(
                "phase segments must satisfy 0 < appear <= hold < emerge < 1, got {} / {} / {}",
                self.appear_end, self.hold_end, self.emerge_end
            )));
        }
        if !(0.0..=1.0).contains(&self.emerge_radius) {
            return Err(GardenError::config("emerge_radius must be within [0, 1]"));
        }
        Ok(())
    }

    /// Dispatch a cycle phase to its segment. `fade` shapes the Expand fade-out.
    pub fn segment_at(&self, phase: f64, fade: Ease) -> AmbientSegment {
        if phase <= self.appear_end {
            AmbientSegment::Appear {
                dot_alpha: phase / self.appear_end,
            }
        } else if phase <= self.hold_end {
            AmbientSegment::Hold
        } else if phase <= self.emerge_end {
            let p = (phase - self.hold_end) / (self.emerge_end - self.hold_end);
            AmbientSegment::Emerge {
                dot_alpha: 1.0 - p,
                radius_frac: p * self.emerge_radius,
            }
        } else {
            let p = (phase - self.emerge_end) / (1.0 - self.emerge_end);
            AmbientSegment::Expand {
                radius_frac: self.emerge_radius + p * (1.0 - self.emerge_radius),
                alpha: fade.fade_out(p),
            }
        }
    }
}

/// What the ambient animation shows at a given phase.
///
/// Radii are fractions of the configured max ripple radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbientSegment {
    /// The droplet fades in.
    Appear { dot_alpha: f64 },
    /// The droplet is fully visible.
    Hold,
    /// The droplet fades out while a small ripple starts.
    Emerge { dot_alpha: f64, radius_frac: f64 },
    /// The ripple expands to the max radius and fades out.
    Expand { radius_frac: f64, alpha: f64 },
}

impl AmbientSegment {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Appear { .. } => "appear",
            Self::Hold => "hold",
            Self::Emerge { .. } => "emerge",
            Self::Expand { .. } => "expand",
        }
    }
}

/// Maps wall-clock time onto the ambient cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseScheduler {
    cycle_ms: u64,
    segments: PhaseSegments,
    fade: Ease,
}

impl PhaseScheduler {
    pub fn new(cycle_ms: u64, segments: PhaseSegments, fade: Ease) -> GardenResult<Self> {
        if cycle_ms == 0 {
            return Err(GardenError::config("cycle duration must be > 0 ms"));
        }
        segments.validate()?;
        Ok(Self {
            cycle_ms,
            segments,
            fade,
        })
    }

    pub fn cycle_ms(&self) -> u64 {
        self.cycle_ms
    }

    pub fn segments(&self) -> &PhaseSegments {
        &self.segments
    }

    pub fn phase(&self, now: TimeMs) -> f64 {
        cycle_phase(now, self.cycle_ms)
    }

    pub fn cycle_index(&self, now: TimeMs) -> u64 {
        cycle_index(now, self.cycle_ms)
    }

    pub fn segment(&self, now: TimeMs) -> AmbientSegment {
        self.segments.segment_at(self.phase(now), self.fade)
    }

    /// Fade-out factor for a phase driven by the configured curve.
    pub fn fade_at(&self, phase: f64) -> f64 {
        self.fade.fade_out(phase)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
