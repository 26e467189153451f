//! Engine configuration.
//!
//! Everything is JSON-deserializable and every field has a default, so `{}` is a valid config.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::animation::phase::PhaseSegments;
use crate::animation::ripple::RippleTimeline;
use crate::foundation::core::Grid;
use crate::foundation::error::{GardenError, GardenResult};

/// Default side length of rendered frames, in pixels.
pub const DEFAULT_BITMAP_SIZE: u32 = 512;
/// Default number of logical grid cells per side.
pub const DEFAULT_GRID_SIZE: u32 = 32;
/// Largest accepted frame side; the rasterizer addresses pixels with `u16`.
pub const MAX_BITMAP_SIZE: u32 = 4096;
/// Largest accepted max ripple radius, in multiples of the grid size.
pub const MAX_RIPPLE_RADIUS_GRIDS: f64 = 4.0;

/// Ambient rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Black background, droplet dot and stroked concentric ripple rings.
    #[default]
    DotRipple,
    /// Time-of-day background, seeded stones, per-cell distance-field ripple.
    DistanceField,
}

impl RenderStyle {
    pub fn default_cycle_ms(self) -> u64 {
        match self {
            Self::DotRipple => 6_000,
            Self::DistanceField => 10_000,
        }
    }
}

/// How many decorative stones each cycle gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneCount {
    Fixed(u32),
    Range { min: u32, max: u32 },
}

impl Default for StoneCount {
    fn default() -> Self {
        Self::Range { min: 3, max: 7 }
    }
}

impl StoneCount {
    pub fn bounds(self) -> (u32, u32) {
        match self {
            Self::Fixed(n) => (n, n),
            Self::Range { min, max } => (min, max),
        }
    }
}

/// Where the ambient droplet lands each cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropletPlacement {
    #[default]
    Centered,
    /// A new cell per cycle, drawn from the cycle's seeded layout.
    Reseeded,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub style: RenderStyle,
    /// Cycle length; `None` uses the style's default.
    pub cycle_ms: Option<u64>,
    pub segments: PhaseSegments,
    /// Curve for the ambient ripple fade-out.
    pub fade: Ease,
    pub droplet: DropletPlacement,
    pub stones: StoneCount,
    /// Half-width of the distance-field ripple band, in cells.
    pub ripple_band: f64,
    /// Extra salt mixed into the per-cycle layout seed.
    pub seed: u64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            cycle_ms: None,
            segments: PhaseSegments::default(),
            fade: Ease::SmoothStep,
            droplet: DropletPlacement::default(),
            stones: StoneCount::default(),
            ripple_band: 1.5,
            seed: 0,
        }
    }
}

impl AmbientConfig {
    pub fn cycle_ms(&self) -> u64 {
        self.cycle_ms
            .unwrap_or_else(|| self.style.default_cycle_ms())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    /// How long a touch ripple lives before it is pruned.
    pub lifetime_ms: u64,
    /// Concurrent ripple capacity; the oldest is evicted beyond it.
    pub max_ripples: usize,
    /// Curve for touch ripple fade-outs.
    pub fade: Ease,
    /// Timeline for the multi-ripple composite.
    pub multi: RippleTimeline,
    /// Timeline for a single ripple rendered on its own.
    pub single: RippleTimeline,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: 3_000,
            max_ripples: 5,
            fade: Ease::SmoothStep,
            multi: RippleTimeline::MULTI,
            single: RippleTimeline::SINGLE,
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub bitmap_size: u32,
    pub grid_size: u32,
    /// Max ripple radius, in cells.
    pub max_ripple_radius: f64,
    pub ambient: AmbientConfig,
    pub touch: TouchConfig,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            bitmap_size: DEFAULT_BITMAP_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            max_ripple_radius: 15.0,
            ambient: AmbientConfig::default(),
            touch: TouchConfig::default(),
        }
    }
}

impl GardenConfig {
    /// Default config with a different ambient style.
    pub fn with_style(style: RenderStyle) -> Self {
        let mut cfg = Self::default();
        cfg.ambient.style = style;
        cfg
    }

    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> GardenResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| GardenError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GardenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GardenError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn grid(&self) -> GardenResult<Grid> {
        Grid::new(self.bitmap_size, self.grid_size)
    }

    pub fn validate(&self) -> GardenResult<()> {
        if self.bitmap_size == 0 || self.bitmap_size > MAX_BITMAP_SIZE {
            return Err(GardenError::config(format!(
                "bitmap_size must be within 1..={MAX_BITMAP_SIZE}, got {}",
                self.bitmap_size
            )));
        }
        self.grid()?;
        if !self.max_ripple_radius.is_finite() || self.max_ripple_radius <= 0.0 {
            return Err(GardenError::config("max_ripple_radius must be > 0"));
        }
        let radius_cap = f64::from(self.grid_size) * MAX_RIPPLE_RADIUS_GRIDS;
        if self.max_ripple_radius > radius_cap {
            return Err(GardenError::config(format!(
                "max_ripple_radius must be <= {radius_cap} cells for a {} grid, got {}",
                self.grid_size, self.max_ripple_radius
            )));
        }

        let ambient = &self.ambient;
        if ambient.cycle_ms() == 0 {
            return Err(GardenError::config("ambient cycle_ms must be > 0"));
        }
        ambient.segments.validate()?;
        if !ambient.ripple_band.is_finite() || ambient.ripple_band <= 0.0 {
            return Err(GardenError::config("ripple_band must be > 0"));
        }
        let (min, max) = ambient.stones.bounds();
        if min > max {
            return Err(GardenError::config(format!(
                "stone count range is empty: {min}..={max}"
            )));
        }
        let cells = u64::from(self.grid_size) * u64::from(self.grid_size);
        if u64::from(max) > cells / 4 {
            return Err(GardenError::config(format!(
                "at most {} stones fit a {}x{} grid, got {max}",
                cells / 4,
                self.grid_size,
                self.grid_size
            )));
        }

        let touch = &self.touch;
        if touch.lifetime_ms == 0 {
            return Err(GardenError::config("touch lifetime_ms must be > 0"));
        }
        if touch.max_ripples == 0 {
            return Err(GardenError::config("touch max_ripples must be >= 1"));
        }
        touch.multi.validate()?;
        touch.single.validate()?;
        Ok(())
    }
}
