use crate::animation::ease::Ease;
use crate::foundation::error::{GardenError, GardenResult};
use crate::foundation::math::clamp01;

/// Local timeline of one touch ripple over its lifetime.
///
/// Progress runs from 0 at touch-down to 1 at the end of the ripple lifetime. Radii are fractions
/// of the configured max ripple radius and may exceed 1 in the Large stage.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RippleTimeline {
    /// End of the Dot stage (inclusive).
    pub dot_end: f64,
    /// End of the Small stage (inclusive).
    pub small_end: f64,
    /// Radius reached at the end of the Small stage.
    pub small_radius: f64,
    /// Radius added over the Large stage.
    pub large_growth: f64,
    /// Scales Large-stage progress before the fade curve; below 1 the ripple never fully fades.
    pub fade_scale: f64,
    /// Large-stage ripples at or below this alpha are not drawn.
    pub min_alpha: f64,
    /// Alpha multiplier for the fading dot during the Small stage.
    pub small_dot_alpha: f64,
}

impl RippleTimeline {
    /// Timeline used when several ripples are composited together.
    pub const MULTI: Self = Self {
        dot_end: 0.10,
        small_end: 0.25,
        small_radius: 0.4,
        large_growth: 1.8,
        fade_scale: 0.9,
        min_alpha: 0.05,
        small_dot_alpha: 0.8,
    };

    /// Timeline used for a lone ripple rendered on its own.
    pub const SINGLE: Self = Self {
        dot_end: 0.10,
        small_end: 0.30,
        small_radius: 0.5,
        large_growth: 1.5,
        fade_scale: 0.8,
        min_alpha: 0.1,
        small_dot_alpha: 1.0,
    };

    pub fn validate(&self) -> GardenResult<()> {
        if !(0.0 < self.dot_end && self.dot_end < self.small_end && self.small_end < 1.0) {
            return Err(GardenError::config(format!(
                "ripple timeline must satisfy 0 < dot_end < small_end < 1, got {} / {}",
                self.dot_end, self.small_end
            )));
        }
        let non_negative = [
            self.small_radius,
            self.large_growth,
            self.fade_scale,
            self.min_alpha,
            self.small_dot_alpha,
        ];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(GardenError::config(
                "ripple timeline radii, fade scale and alphas must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Stage at a given progress. `fade` shapes the Large-stage fade-out.
    pub fn stage_at(&self, progress: f64, fade: Ease) -> RippleStage {
        let progress = clamp01(progress);
        if progress <= self.dot_end {
            RippleStage::Dot {
                alpha: progress / self.dot_end,
            }
        } else if progress <= self.small_end {
            let p = (progress - self.dot_end) / (self.small_end - self.dot_end);
            RippleStage::Small {
                dot_alpha: (1.0 - p) * self.small_dot_alpha,
                radius_frac: p * self.small_radius,
            }
        } else {
            let p = (progress - self.small_end) / (1.0 - self.small_end);
            let alpha = fade.fade_out(p * self.fade_scale);
            if alpha <= self.min_alpha {
                return RippleStage::Faded;
            }
            RippleStage::Large {
                radius_frac: self.small_radius + p * self.large_growth,
                alpha,
            }
        }
    }
}

impl Default for RippleTimeline {
    fn default() -> Self {
        Self::MULTI
    }
}

/// Normalized progress of a ripple: `clamp(age / lifetime, 0, 1)`.
pub fn ripple_progress(age_ms: u64, lifetime_ms: u64) -> f64 {
    if lifetime_ms == 0 {
        return 1.0;
    }
    clamp01(age_ms as f64 / lifetime_ms as f64)
}

/// What a touch ripple shows at a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RippleStage {
    /// A dot fades in at the touch point.
    Dot { alpha: f64 },
    /// The dot fades out while a small ripple grows.
    Small { dot_alpha: f64, radius_frac: f64 },
    /// The ripple grows past the max radius and fades.
    Large { radius_frac: f64, alpha: f64 },
    /// Too faint to draw.
    Faded,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ripple.rs"]
mod tests;
