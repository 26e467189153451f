use crate::animation::phase::{AmbientSegment, PhaseScheduler};
use crate::config::{AmbientConfig, GardenConfig, RenderStyle, StoneCount};
use crate::foundation::core::{Canvas, FrameTime, Grid, GridPoint, Rgb8};
use crate::foundation::error::GardenResult;
use crate::foundation::math::distance;
use crate::render::fallback_frame;
use crate::render::frame::FrameRGBA;
use crate::render::layout::{StoneLayout, seeded_layout};
use crate::render::motif::{AMBIENT_RINGS, draw_dot, draw_rings};
use crate::render::painter::Painter;

/// Expand-segment ripples at or below this alpha are not drawn.
const EXPAND_MIN_ALPHA: f64 = 0.1;

const STONE_INSET_CELLS: f64 = 0.1;
const STONE_CORNER_CELLS: f64 = 0.4;
const CENTER_STONE_INSET_CELLS: f64 = 0.15;

/// Background for the distance-field style, by local hour.
pub fn background_for_hour(hour: u8) -> Rgb8 {
    match hour {
        6..=17 => Rgb8::WHITE,
        18..=19 => Rgb8::new(255, 191, 0),
        _ => Rgb8::new(0, 0, 128),
    }
}

/// Ink used for ripples and the center stone on a given background.
fn ink_for(background: Rgb8) -> Rgb8 {
    if background == Rgb8::WHITE {
        Rgb8::new(70, 70, 70)
    } else {
        Rgb8::new(240, 240, 240)
    }
}

fn stone_color_for(background: Rgb8) -> Rgb8 {
    if background == Rgb8::WHITE {
        Rgb8::new(120, 120, 120)
    } else {
        Rgb8::new(150, 150, 150)
    }
}

/// Renders the non-interactive cyclic animation.
#[derive(Clone, Debug)]
pub struct AmbientRenderer {
    bitmap_size: u32,
    grid: Grid,
    max_radius: f64,
    scheduler: PhaseScheduler,
    ambient: AmbientConfig,
}

impl AmbientRenderer {
    pub fn new(cfg: &GardenConfig) -> GardenResult<Self> {
        cfg.validate()?;
        let ambient = cfg.ambient.clone();
        let scheduler = PhaseScheduler::new(ambient.cycle_ms(), ambient.segments, ambient.fade)?;
        Ok(Self {
            bitmap_size: cfg.bitmap_size,
            grid: cfg.grid()?,
            max_radius: cfg.max_ripple_radius,
            scheduler,
            ambient,
        })
    }

    pub fn style(&self) -> RenderStyle {
        self.ambient.style
    }

    pub fn scheduler(&self) -> &PhaseScheduler {
        &self.scheduler
    }

    /// Layout of the cycle containing `time`. The dot style carries no stones.
    pub fn layout(&self, time: FrameTime) -> StoneLayout {
        let stones = match self.ambient.style {
            RenderStyle::DotRipple => StoneCount::Fixed(0),
            RenderStyle::DistanceField => self.ambient.stones,
        };
        seeded_layout(
            self.scheduler.cycle_index(time.now),
            self.ambient.seed,
            self.grid,
            stones,
            self.ambient.droplet,
        )
    }

    /// Render the frame for `time`. Never fails: errors yield the fallback frame.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render(&self, time: FrameTime, viewport: Canvas) -> FrameRGBA {
        match self.try_render(time, viewport) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(error = %e, "ambient render failed, using fallback frame");
                fallback_frame(self.bitmap_size)
            }
        }
    }

    pub fn try_render(&self, time: FrameTime, viewport: Canvas) -> GardenResult<FrameRGBA> {
        viewport.validate()?;
        let mut painter = Painter::new(self.bitmap_size)?;
        let layout = self.layout(time);
        match self.ambient.style {
            RenderStyle::DotRipple => self.paint_dot_ripple(&mut painter, time, layout.droplet),
            RenderStyle::DistanceField => self.paint_distance_field(&mut painter, time, &layout),
        }
        Ok(painter.finish())
    }

    fn paint_dot_ripple(&self, p: &mut Painter, time: FrameTime, droplet: GridPoint) {
        p.fill_background(Rgb8::BLACK);
        let segment = self.scheduler.segment(time.now);
        tracing::debug!(segment = segment.name(), ?segment, "dot-ripple frame");
        match segment {
            AmbientSegment::Appear { dot_alpha } => draw_dot(p, self.grid, droplet, dot_alpha),
            AmbientSegment::Hold => draw_dot(p, self.grid, droplet, 1.0),
            AmbientSegment::Emerge {
                dot_alpha,
                radius_frac,
            } => {
                draw_dot(p, self.grid, droplet, dot_alpha);
                let radius = radius_frac * self.max_radius;
                draw_rings(p, self.grid, droplet, radius, 1.0, &AMBIENT_RINGS);
            }
            AmbientSegment::Expand { radius_frac, alpha } => {
                if alpha > EXPAND_MIN_ALPHA {
                    let radius = radius_frac * self.max_radius;
                    draw_rings(p, self.grid, droplet, radius, alpha, &AMBIENT_RINGS);
                }
            }
        }
    }

    fn paint_distance_field(&self, p: &mut Painter, time: FrameTime, layout: &StoneLayout) {
        let background = background_for_hour(time.local_hour);
        let ink = ink_for(background);
        p.fill_background(background);

        let phase = self.scheduler.phase(time.now);
        let radius = phase * self.max_radius;
        let fade = self.scheduler.fade_at(phase);
        let band = self.ambient.ripple_band;
        tracing::debug!(phase, radius, fade, stones = layout.stones.len(), "distance-field frame");

        let (cx, cy) = (f64::from(layout.droplet.x), f64::from(layout.droplet.y));
        for y in 0..self.grid.size {
            for x in 0..self.grid.size {
                let cell = GridPoint::new(x, y);
                if cell == layout.droplet || layout.stone_at(cell) {
                    continue;
                }
                let offset = (distance(f64::from(x), f64::from(y), cx, cy) - radius).abs();
                if offset > band {
                    continue;
                }
                let alpha = (1.0 - offset / band) * fade;
                p.fill_rect(self.grid.cell_rect(cell), ink.with_alpha(alpha));
            }
        }

        let stone_color = stone_color_for(background).opaque();
        let inset = self.grid.to_px(STONE_INSET_CELLS);
        let corner = self.grid.to_px(STONE_CORNER_CELLS);
        for stone in &layout.stones {
            let rect = stone.rect(self.grid).inset(-inset);
            p.fill_rounded_rect(rect, corner, stone_color);
        }

        let appear = (phase / self.scheduler.segments().appear_end).min(1.0);
        let rect = self
            .grid
            .cell_rect(layout.droplet)
            .inset(-self.grid.to_px(CENTER_STONE_INSET_CELLS));
        p.fill_rounded_rect(rect, corner, ink.with_alpha(appear));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/ambient.rs"]
mod tests;
