//! Frame sinks.
//!
//! Sinks consume rendered frames in tick order and are used by `ZenGarden::render_sequence`.

/// Generic frame sink trait and built-in sinks.
pub mod sink;
