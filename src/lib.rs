//! Zengarden is a procedural raster animation engine for a minimalist "zen stone garden".
//!
//! Frames are square RGBA8 bitmaps rasterized on the CPU. The public API is session-oriented:
//!
//! - Build a [`GardenConfig`] (defaults, or JSON via [`GardenConfig::from_path`])
//! - Create a [`ZenGarden`]
//! - Feed it touch-down events and ticks; each tick returns a displayable frame
//! - Or stream a fixed run of ticks into a [`FrameSink`]
//!
//! Rendering is a pure function of configuration, time and live ripples: identical inputs give
//! identical frames.
#![forbid(unsafe_code)]

/// Time-to-visual-state mapping.
pub mod animation;
/// Time sources.
pub mod clock;
/// Configuration and its JSON boundary.
pub mod config;
/// Frame sinks.
pub mod encode;
pub mod foundation;
/// CPU rendering.
pub mod render;
/// Session-oriented API.
pub mod session;
/// Touch ripple bookkeeping.
pub mod touch;

pub use crate::animation::ease::Ease;
pub use crate::animation::phase::{
    AmbientSegment, PhaseScheduler, PhaseSegments, cycle_index, cycle_phase,
};
pub use crate::animation::ripple::{RippleStage, RippleTimeline, ripple_progress};
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::config::{
    AmbientConfig, DropletPlacement, GardenConfig, RenderStyle, StoneCount, TouchConfig,
};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::foundation::core::{
    Canvas, FrameTime, Grid, GridPoint, Point, Rect, Rgb8, Rgba8, TimeMs,
};
pub use crate::foundation::error::{GardenError, GardenResult};
pub use crate::render::ambient::{AmbientRenderer, background_for_hour};
pub use crate::render::compositor::RippleCompositor;
pub use crate::render::fallback_frame;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::layout::{Stone, StoneLayout, seeded_layout};
pub use crate::session::garden::{GardenMode, TickFrame, ZenGarden};
pub use crate::touch::tracker::{TouchRipple, TouchTracker};
