use crate::clock::Clock;
use crate::config::GardenConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameTime, TimeMs};
use crate::foundation::error::GardenResult;
use crate::render::ambient::AmbientRenderer;
use crate::render::compositor::RippleCompositor;
use crate::render::frame::FrameRGBA;
use crate::touch::tracker::TouchTracker;

/// Which renderer drives the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GardenMode {
    /// The deterministic cyclic animation.
    Ambient,
    /// Touch ripples are live and composited instead.
    Interactive,
}

/// Output of one tick.
#[derive(Clone, Debug)]
pub struct TickFrame {
    pub frame: FrameRGBA,
    /// Mode after this tick.
    pub mode: GardenMode,
    /// Whether this tick switched modes.
    pub mode_changed: bool,
}

/// A garden surface: ambient animation plus touch ripples.
///
/// Hosts feed it touch-down events and periodic ticks; every tick yields a displayable frame.
/// The session is `Send` but not internally synchronized; share it behind one `Mutex`.
#[derive(Clone, Debug)]
pub struct ZenGarden {
    config: GardenConfig,
    ambient: AmbientRenderer,
    compositor: RippleCompositor,
    tracker: TouchTracker,
    mode: GardenMode,
}

impl ZenGarden {
    pub fn new(config: GardenConfig) -> GardenResult<Self> {
        config.validate()?;
        let ambient = AmbientRenderer::new(&config)?;
        let compositor = RippleCompositor::new(&config)?;
        let tracker = TouchTracker::new(config.touch.max_ripples, config.touch.lifetime_ms);
        tracing::debug!(style = ?ambient.style(), cycle_ms = ambient.scheduler().cycle_ms(), "garden created");
        Ok(Self {
            config,
            ambient,
            compositor,
            tracker,
            mode: GardenMode::Ambient,
        })
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn mode(&self) -> GardenMode {
        self.mode
    }

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    pub fn ambient(&self) -> &AmbientRenderer {
        &self.ambient
    }

    pub fn compositor(&self) -> &RippleCompositor {
        &self.compositor
    }

    /// Record a touch at pixel `(x_px, y_px)` of a `view`-sized surface.
    ///
    /// Fails only for an empty view, whose ratios are undefined. Returns the mode afterwards.
    pub fn on_touch_down(
        &mut self,
        x_px: f64,
        y_px: f64,
        view: Canvas,
        time: TimeMs,
    ) -> GardenResult<GardenMode> {
        view.validate()?;
        let x = x_px / f64::from(view.width);
        let y = y_px / f64::from(view.height);
        if let Some(evicted) = self.tracker.add_touch(x, y, time) {
            tracing::debug!(?evicted, "ripple capacity reached, evicted oldest");
        }
        tracing::debug!(x, y, at = time.0, "touch ripple added");
        if self.mode == GardenMode::Ambient {
            self.mode = GardenMode::Interactive;
            tracing::info!("touch received, switching to interactive mode");
        }
        Ok(self.mode)
    }

    /// Produce the frame for `time`. Expired ripples are pruned first; once none remain the
    /// session returns to ambient mode.
    pub fn on_tick(&mut self, time: FrameTime, viewport: Canvas) -> TickFrame {
        let previous = self.mode;
        let pruned = self.tracker.prune_expired(time.now);
        if pruned > 0 {
            tracing::debug!(pruned, live = self.tracker.len(), "expired ripples pruned");
        }

        let frame = if self.mode == GardenMode::Interactive && !self.tracker.is_empty() {
            self.compositor
                .render(self.tracker.ripples(), time, viewport)
        } else {
            if self.mode == GardenMode::Interactive {
                self.mode = GardenMode::Ambient;
                tracing::info!("all ripples completed, returning to ambient mode");
            }
            self.ambient.render(time, viewport)
        };

        TickFrame {
            frame,
            mode: self.mode,
            mode_changed: previous != self.mode,
        }
    }

    /// [`Self::on_tick`] with time sampled from `clock`.
    pub fn tick(&mut self, clock: &dyn Clock, viewport: Canvas) -> TickFrame {
        self.on_tick(clock.sample(), viewport)
    }

    /// Drop all touch state and resume the ambient animation.
    pub fn reset_to_auto_mode(&mut self) {
        self.tracker.reset();
        if self.mode != GardenMode::Ambient {
            tracing::info!("reset to ambient mode");
        }
        self.mode = GardenMode::Ambient;
    }

    /// Render `count` ticks spaced `interval_ms` apart, starting at `start`, into `sink`.
    #[tracing::instrument(level = "debug", skip(self, sink))]
    pub fn render_sequence(
        &mut self,
        start: FrameTime,
        interval_ms: u64,
        count: u64,
        viewport: Canvas,
        sink: &mut dyn FrameSink,
    ) -> GardenResult<()> {
        sink.begin(SinkConfig {
            width: self.config.bitmap_size,
            height: self.config.bitmap_size,
            interval_ms,
        })?;
        for idx in 0..count {
            let time = FrameTime {
                now: start.now.add_ms(idx.saturating_mul(interval_ms)),
                ..start
            };
            let tick = self.on_tick(time, viewport);
            sink.push_frame(idx, time.now, &tick.frame)?;
        }
        sink.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/garden.rs"]
mod tests;
