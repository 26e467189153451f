use crate::animation::ease::Ease;
use crate::animation::ripple::{RippleStage, RippleTimeline, ripple_progress};
use crate::config::GardenConfig;
use crate::foundation::core::{Canvas, FrameTime, Grid, GridPoint, Rgb8};
use crate::foundation::error::{GardenError, GardenResult};
use crate::render::fallback_frame;
use crate::render::frame::FrameRGBA;
use crate::render::motif::{TOUCH_RINGS, draw_dot, draw_rings, draw_touch_center};
use crate::render::painter::Painter;
use crate::touch::tracker::TouchRipple;

/// Renders touch ripples, each on its own local timeline.
#[derive(Clone, Debug)]
pub struct RippleCompositor {
    bitmap_size: u32,
    grid: Grid,
    max_radius: f64,
    lifetime_ms: u64,
    fade: Ease,
    multi: RippleTimeline,
    single: RippleTimeline,
}

impl RippleCompositor {
    pub fn new(cfg: &GardenConfig) -> GardenResult<Self> {
        cfg.validate()?;
        Ok(Self {
            bitmap_size: cfg.bitmap_size,
            grid: cfg.grid()?,
            max_radius: cfg.max_ripple_radius,
            lifetime_ms: cfg.touch.lifetime_ms,
            fade: cfg.touch.fade,
            multi: cfg.touch.multi,
            single: cfg.touch.single,
        })
    }

    /// Stage of `ripple` at `time` on the multi-ripple timeline.
    pub fn stage(&self, ripple: &TouchRipple, time: FrameTime) -> RippleStage {
        self.stage_on(&self.multi, ripple, time)
    }

    /// Stage of `ripple` at `time` on the single-ripple timeline.
    pub fn single_stage(&self, ripple: &TouchRipple, time: FrameTime) -> RippleStage {
        self.stage_on(&self.single, ripple, time)
    }

    /// Composite every ripple in order (later ripples on top). Never fails.
    #[tracing::instrument(level = "debug", skip(self, ripples))]
    pub fn render<'a, I>(&self, ripples: I, time: FrameTime, viewport: Canvas) -> FrameRGBA
    where
        I: IntoIterator<Item = &'a TouchRipple>,
    {
        self.try_render(ripples, time, viewport)
            .unwrap_or_else(|e| self.fallback(e))
    }

    /// Render one ripple on the single-ripple timeline. Never fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn render_single(
        &self,
        ripple: &TouchRipple,
        time: FrameTime,
        viewport: Canvas,
    ) -> FrameRGBA {
        self.try_render_single(ripple, time, viewport)
            .unwrap_or_else(|e| self.fallback(e))
    }

    pub fn try_render<'a, I>(
        &self,
        ripples: I,
        time: FrameTime,
        viewport: Canvas,
    ) -> GardenResult<FrameRGBA>
    where
        I: IntoIterator<Item = &'a TouchRipple>,
    {
        viewport.validate()?;
        let mut painter = Painter::new(self.bitmap_size)?;
        painter.fill_background(Rgb8::BLACK);
        for ripple in ripples {
            self.paint_ripple(&mut painter, &self.multi, ripple, time);
        }
        Ok(painter.finish())
    }

    pub fn try_render_single(
        &self,
        ripple: &TouchRipple,
        time: FrameTime,
        viewport: Canvas,
    ) -> GardenResult<FrameRGBA> {
        viewport.validate()?;
        let mut painter = Painter::new(self.bitmap_size)?;
        painter.fill_background(Rgb8::BLACK);
        self.paint_ripple(&mut painter, &self.single, ripple, time);
        Ok(painter.finish())
    }

    fn stage_on(
        &self,
        timeline: &RippleTimeline,
        ripple: &TouchRipple,
        time: FrameTime,
    ) -> RippleStage {
        let progress = ripple_progress(ripple.age_ms(time.now), self.lifetime_ms);
        timeline.stage_at(progress, self.fade)
    }

    fn paint_ripple(
        &self,
        p: &mut Painter,
        timeline: &RippleTimeline,
        ripple: &TouchRipple,
        time: FrameTime,
    ) {
        let cell = self.grid.cell_at_ratio(ripple.x, ripple.y);
        let stage = self.stage_on(timeline, ripple, time);
        tracing::trace!(?cell, ?stage, "touch ripple");
        match stage {
            RippleStage::Dot { alpha } => draw_dot(p, self.grid, cell, alpha),
            RippleStage::Small {
                dot_alpha,
                radius_frac,
            } => {
                draw_dot(p, self.grid, cell, dot_alpha);
                self.paint_touch_rings(p, cell, radius_frac * self.max_radius, 1.0);
            }
            RippleStage::Large { radius_frac, alpha } => {
                self.paint_touch_rings(p, cell, radius_frac * self.max_radius, alpha);
            }
            RippleStage::Faded => {}
        }
    }

    fn paint_touch_rings(
        &self,
        p: &mut Painter,
        cell: GridPoint,
        radius: f64,
        alpha: f64,
    ) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        draw_rings(p, self.grid, cell, radius, alpha, &TOUCH_RINGS);
        if radius < self.max_radius * 0.5 {
            draw_touch_center(p, self.grid, cell, alpha);
        }
    }

    fn fallback(&self, e: GardenError) -> FrameRGBA {
        tracing::warn!(error = %e, "ripple composite failed, using fallback frame");
        fallback_frame(self.bitmap_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
