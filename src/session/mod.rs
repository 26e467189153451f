//! Session-oriented entrypoint: one [`garden::ZenGarden`] per displayed surface.

/// Mode switching between the ambient animation and touch ripples.
pub mod garden;
