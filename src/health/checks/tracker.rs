//! Swipe tracker health check

use std::cell::RefCell;
use std::rc::Rc;

use crate::gesture::{SwipeEvent, SwipeTracker};
use crate::health::check::{CheckResult, SystemCheck};
use crate::input::{PointerEvent, Rect, Surface, SurfaceId};

/// Replays a left swipe through a fresh tracker and verifies the emissions
pub struct TrackerCheck;

impl TrackerCheck {
    pub fn new() -> Self {
        Self
    }

    const EXPECTED: [SwipeEvent; 4] = [
        SwipeEvent::Move,
        SwipeEvent::SwipeEnd,
        SwipeEvent::SwipeLeft,
        SwipeEvent::SwipeDown,
    ];

    fn replay() -> anyhow::Result<Vec<(SwipeEvent, f32, f32)>> {
        let surface = Surface::new(SurfaceId(0), "health", Rect::new(0.0, 0.0, 200.0, 200.0));
        let mut tracker = SwipeTracker::new(surface)?;

        let seen = Rc::new(RefCell::new(Vec::new()));
        for event in SwipeEvent::ALL {
            let seen = Rc::clone(&seen);
            tracker.on(event, move |contact| {
                seen.borrow_mut().push((event, contact.dx, contact.dy));
                Ok(())
            });
        }

        let events = [
            PointerEvent::MouseDown {
                pos: [100.0, 100.0],
                time: 0.0,
            },
            PointerEvent::MouseMove {
                pos: [40.0, 100.0],
                time: 50.0,
            },
            PointerEvent::MouseUp {
                pos: [40.0, 100.0],
                time: 100.0,
            },
        ];
        for sample in events.iter().filter_map(PointerEvent::to_sample) {
            tracker.dispatch(sample)?;
        }

        let seen = seen.borrow().clone();
        Ok(seen)
    }
}

impl Default for TrackerCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for TrackerCheck {
    fn name(&self) -> &'static str {
        "Swipe Tracker"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Replays a left swipe and checks emitted events")
    }

    fn check(&self) -> CheckResult {
        let seen = match Self::replay() {
            Ok(seen) => seen,
            Err(e) => return CheckResult::fail(format!("Replay failed: {:#}", e)),
        };

        let details = seen
            .iter()
            .map(|(event, dx, dy)| format!("  {} dx={} dy={}", event, dx, dy))
            .collect::<Vec<_>>()
            .join("\n");

        let events: Vec<SwipeEvent> = seen.iter().map(|(event, _, _)| *event).collect();
        if events != Self::EXPECTED {
            return CheckResult::fail("Unexpected event sequence").with_details(details);
        }
        if seen.iter().any(|(_, dx, dy)| *dx != -60.0 || *dy != 0.0) {
            return CheckResult::fail("Unexpected displacement").with_details(details);
        }

        CheckResult::pass("Left swipe classified").with_details(details)
    }
}
