//! Time-to-visual-state mapping: easing curves, the ambient cycle and touch ripple timelines.
//!
//! Everything here is pure; renderers turn the resulting stages into pixels.

/// Easing curves.
pub mod ease;
/// Ambient cycle phase and segments.
pub mod phase;
/// Touch ripple timelines.
pub mod ripple;
