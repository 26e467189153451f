use crate::foundation::error::{GardenError, GardenResult};
use crate::foundation::math::alpha_to_u8;

pub use kurbo::{Point, Rect};

/// Wall-clock timestamp in milliseconds.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Milliseconds elapsed since `earlier`, saturating at zero for timestamps in the future.
    pub fn since(self, earlier: TimeMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This timestamp shifted forward by `ms`.
    pub fn add_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// Time inputs for one frame, sampled once from a [`crate::Clock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameTime {
    /// Current wall-clock time.
    pub now: TimeMs,
    /// Local hour of day in `0..24`, used for time-of-day backgrounds.
    pub local_hour: u8,
}

impl FrameTime {
    /// Frame time at `now` with a midday hour.
    pub fn at(now: TimeMs) -> Self {
        Self {
            now,
            local_hour: 12,
        }
    }

    /// Replace the local hour.
    pub fn with_hour(self, local_hour: u8) -> Self {
        Self {
            local_hour: local_hour % 24,
            ..self
        }
    }
}

/// Pixel size of a host surface (view or widget).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn validate(self) -> GardenResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GardenError::viewport(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Straight (non-premultiplied) RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach a float alpha in `[0, 1]`, converted with `round(alpha * 255)`.
    pub fn with_alpha(self, alpha: f64) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha_to_u8(alpha),
        }
    }

    pub fn opaque(self) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 255,
        }
    }
}

/// Straight-alpha RGBA8 paint color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Premultiplied channel values, as stored in rendered frames.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// A cell of the logical grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Mapping between the logical `size x size` grid and raster pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cells per side.
    pub size: u32,
    /// Pixels per cell (`bitmap_size / size`, truncated).
    pub step: u32,
}

impl Grid {
    pub fn new(bitmap_size: u32, grid_size: u32) -> GardenResult<Self> {
        if grid_size == 0 {
            return Err(GardenError::config("grid size must be > 0"));
        }
        let step = bitmap_size / grid_size;
        if step == 0 {
            return Err(GardenError::config(format!(
                "grid size {grid_size} exceeds bitmap size {bitmap_size}"
            )));
        }
        Ok(Self {
            size: grid_size,
            step,
        })
    }

    pub fn center(self) -> GridPoint {
        GridPoint::new(self.size / 2, self.size / 2)
    }

    /// Cell containing the normalized viewport position `(x, y)`, clamped onto the grid.
    pub fn cell_at_ratio(self, x: f64, y: f64) -> GridPoint {
        let max = f64::from(self.size - 1);
        let to_cell = |r: f64| (r * f64::from(self.size)).floor().clamp(0.0, max) as u32;
        GridPoint::new(to_cell(x), to_cell(y))
    }

    /// Pixel center of a cell: `cell * step + step / 2`.
    pub fn cell_center(self, p: GridPoint) -> Point {
        let step = f64::from(self.step);
        Point::new(
            f64::from(p.x) * step + step / 2.0,
            f64::from(p.y) * step + step / 2.0,
        )
    }

    /// Pixel bounds of a cell.
    pub fn cell_rect(self, p: GridPoint) -> Rect {
        let step = f64::from(self.step);
        let x0 = f64::from(p.x) * step;
        let y0 = f64::from(p.y) * step;
        Rect::new(x0, y0, x0 + step, y0 + step)
    }

    /// Convert a length in cells to pixels.
    pub fn to_px(self, cells: f64) -> f64 {
        cells * f64::from(self.step)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
