/// Convenience result type used across the garden engine.
pub type GardenResult<T> = Result<T, GardenError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Render entry points never surface these to hosts; they are collapsed into the fallback frame
/// at the public boundary. Configuration and sink APIs do return them.
#[derive(thiserror::Error, Debug)]
pub enum GardenError {
    /// Invalid configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Viewport or touch-surface dimensions that cannot be rendered or normalized.
    #[error("viewport error: {0}")]
    Viewport(String),

    /// Errors raised while synthesizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised by a frame sink.
    #[error("sink error: {0}")]
    Sink(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GardenError {
    /// Build a [`GardenError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GardenError::Viewport`] value.
    pub fn viewport(msg: impl Into<String>) -> Self {
        Self::Viewport(msg.into())
    }

    /// Build a [`GardenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GardenError::Sink`] value.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
