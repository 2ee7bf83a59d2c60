//! Pointer events and the contact samples derived from them

/// A single touch point in a touch list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform identifier of the finger
    pub id: u64,
    /// Position in the input source's coordinate space
    pub pos: [f32; 2],
}

impl TouchPoint {
    pub fn new(id: u64, pos: [f32; 2]) -> Self {
        Self { id, pos }
    }
}

/// Platform-shaped pointer events, as delivered by a host input layer
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse button pressed
    MouseDown { pos: [f32; 2], time: f64 },

    /// Mouse moved (with or without a button held)
    MouseMove { pos: [f32; 2], time: f64 },

    /// Mouse button released
    MouseUp { pos: [f32; 2], time: f64 },

    /// A finger touched down
    TouchStart {
        /// All fingers currently on the surface
        touches: Vec<TouchPoint>,
        time: f64,
    },

    /// One or more fingers moved
    TouchMove {
        /// All fingers currently on the surface
        touches: Vec<TouchPoint>,
        time: f64,
    },

    /// One or more fingers lifted
    TouchEnd {
        /// Fingers that lifted in this event
        changed_touches: Vec<TouchPoint>,
        time: f64,
    },
}

impl PointerEvent {
    /// Reduce to the contact sample a swipe tracker consumes
    ///
    /// Touch events use the first point of their list. Returns `None` for
    /// touch events with an empty list.
    pub fn to_sample(&self) -> Option<ContactSample> {
        match self {
            Self::MouseDown { pos, time } => Some(ContactSample::Start {
                position: *pos,
                time: *time,
            }),
            Self::MouseMove { pos, time } => Some(ContactSample::Move {
                position: *pos,
                time: *time,
                pointer: PointerKind::Mouse,
                pointer_count: 1,
            }),
            Self::MouseUp { pos, time } => Some(ContactSample::End {
                position: *pos,
                time: *time,
            }),
            Self::TouchStart { touches, time } => {
                touches.first().map(|touch| ContactSample::Start {
                    position: touch.pos,
                    time: *time,
                })
            }
            Self::TouchMove { touches, time } => touches.first().map(|touch| ContactSample::Move {
                position: touch.pos,
                time: *time,
                pointer: PointerKind::Touch,
                pointer_count: touches.len(),
            }),
            Self::TouchEnd {
                changed_touches,
                time,
            } => changed_touches.first().map(|touch| ContactSample::End {
                position: touch.pos,
                time: *time,
            }),
        }
    }
}

/// Device that produced a sample
///
/// Touch moves stay with the surface the touch began on, even after the
/// finger leaves it; mouse moves are only seen while over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Discrete input consumed by a swipe tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactSample {
    /// Pointer pressed
    Start { position: [f32; 2], time: f64 },

    /// Pointer moved
    Move {
        position: [f32; 2],
        time: f64,
        pointer: PointerKind,
        /// Number of simultaneous contact points
        pointer_count: usize,
    },

    /// Pointer released
    End { position: [f32; 2], time: f64 },
}

impl ContactSample {
    pub fn position(&self) -> [f32; 2] {
        match self {
            Self::Start { position, .. }
            | Self::Move { position, .. }
            | Self::End { position, .. } => *position,
        }
    }

    pub fn time(&self) -> f64 {
        match self {
            Self::Start { time, .. } | Self::Move { time, .. } | Self::End { time, .. } => *time,
        }
    }
}
