//! Swipe gesture detection
//!
//! Tracks a single pointer from press to release and classifies the net
//! displacement as left/right and up/down.

/// Demo application - window and input wiring
pub mod app;

/// Build-time information (git SHA, rustc, timestamp, etc.)
pub mod build_info;

/// Profile-based configuration
pub mod config;

/// Error types
pub mod error;

/// Gesture tracking - contacts, events, and the tracker state machine
pub mod gesture;

/// Health checks for configuration, build metadata, and the tracker
pub mod health;

/// Input plumbing - pointer events, contact samples, and surfaces
pub mod input;

/// Log subscriber setup
pub mod logging;

pub use error::SwipeError;
pub use gesture::{Contact, Disposition, Swipe, SwipeEvent, SwipeTracker};
