use std::path::{Path, PathBuf};

use crate::foundation::core::TimeMs;
use crate::foundation::error::{GardenError, GardenResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Time between consecutive frames.
    pub interval_ms: u64,
}

/// Consumer of finished frames: an on-screen view, a widget surface, a file sequence.
///
/// Ordering contract: `push_frame` is called with strictly increasing `idx`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GardenResult<()>;
    /// Push one frame, rendered for `time`.
    fn push_frame(&mut self, idx: u64, time: TimeMs, frame: &FrameRGBA) -> GardenResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> GardenResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(TimeMs, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(TimeMs, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GardenResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, _idx: u64, time: TimeMs, frame: &FrameRGBA) -> GardenResult<()> {
        self.frames.push((time, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> GardenResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes each frame as `<prefix>_<idx>.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}_{idx:06}.png", self.prefix))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> GardenResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            GardenError::sink(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, _time: TimeMs, frame: &FrameRGBA) -> GardenResult<()> {
        let path = self.path_for(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> GardenResult<()> {
        tracing::info!(frames = self.written.len(), dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

/// Save one frame as an RGBA PNG.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> GardenResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GardenError::sink(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
