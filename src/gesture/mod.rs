//! Swipe gesture tracking
//!
//! A [`SwipeTracker`] follows a single pointer from press to release and
//! classifies the net displacement:
//!
//! ```text
//! idle ──start──▶ tracking ──move──▶ tracking
//!   ▲                │  └──start (replaces contact)
//!   └──────end───────┘
//! ```
//!
//! Every release emits `swipe-end`, then exactly one of
//! `swipe-left`/`swipe-right` and exactly one of `swipe-up`/`swipe-down`.
//! Zero displacement counts as right and down.
//!
//! # Usage
//!
//! ```
//! use swipe_gesture::gesture::{SwipeEvent, SwipeTracker};
//! use swipe_gesture::input::{Rect, Surface, SurfaceId};
//!
//! let surface = Surface::new(SurfaceId(0), "carousel", Rect::new(0.0, 0.0, 320.0, 240.0));
//! let mut tracker = SwipeTracker::new(surface)?;
//! tracker.on(SwipeEvent::SwipeLeft, |contact| {
//!     println!("left by {}px", -contact.dx);
//!     Ok(())
//! });
//!
//! tracker.on_contact_start([200.0, 100.0], 0.0);
//! tracker.on_contact_end([80.0, 100.0], 120.0)?;
//! # Ok::<(), swipe_gesture::SwipeError>(())
//! ```

mod contact;
mod emitter;
mod tracker;

pub use contact::{Contact, Horizontal, Swipe, Vertical};
pub use emitter::{Emitter, Listener, ListenerId, SwipeEvent};
pub use tracker::{Disposition, SwipeTracker, SwipeTrackerBuilder};
