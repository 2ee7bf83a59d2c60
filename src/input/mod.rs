//! Input plumbing for swipe tracking
//!
//! Turns host input into the three discrete samples a tracker consumes:
//! - Collects raw winit window events
//! - Produces platform-shaped pointer events (mouse and touch)
//! - Reduces them to contact start / move / end samples
//! - Describes the surfaces a tracker is bound to
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → InputCollector → PointerEvent
//!                                          ↓
//!                                    ContactSample
//!                                          ↓
//!                            SwipeTracker::dispatch
//!                          (hit tests target/release)
//! ```

mod collector;
mod events;
mod surface;

pub use collector::InputCollector;
pub use events::{ContactSample, PointerEvent, PointerKind, TouchPoint};
pub use surface::{Rect, ReleaseSurface, Surface, SurfaceId};
