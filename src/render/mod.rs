//! CPU rasterization of garden frames.

/// Ambient cycle renderer for both styles.
pub mod ambient;
/// Touch ripple compositor.
pub mod compositor;
/// Output frame buffer.
pub mod frame;
/// Per-cycle droplet and stone placement.
pub mod layout;
pub(crate) mod motif;
pub(crate) mod painter;

use crate::foundation::core::Rgb8;
use crate::render::frame::FrameRGBA;

/// Frame shown when rendering fails: solid black, `side` pixels square.
pub fn fallback_frame(side: u32) -> FrameRGBA {
    FrameRGBA::solid(side, Rgb8::BLACK)
}
