//! Error types for swipe tracking

use thiserror::Error;

use crate::gesture::SwipeEvent;

/// Errors produced while building or driving a swipe tracker
#[derive(Debug, Error)]
pub enum SwipeError {
    /// Tracker built without a target surface
    #[error("swipe tracker requires a target surface")]
    MissingTarget,

    /// Target surface does not cover a usable area
    #[error("target surface `{name}` has an invalid area ({width}x{height})")]
    InvalidSurface {
        name: String,
        width: f32,
        height: f32,
    },

    /// A listener returned an error; remaining emissions were skipped
    #[error("`{event}` listener failed")]
    Listener {
        event: SwipeEvent,
        #[source]
        source: anyhow::Error,
    },

    /// Logging filter directive could not be parsed
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// Global subscriber was already installed
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
