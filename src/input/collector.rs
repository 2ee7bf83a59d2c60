//! Pointer event collection from winit window events

use std::time::Instant;

use tracing::trace;
use winit::event::{ElementState, TouchPhase, WindowEvent};

use super::events::{PointerEvent, TouchPoint};

/// Collects raw window input and turns it into [`PointerEvent`]s
///
/// Keeps the state browsers keep for us elsewhere: the last cursor position
/// (mouse buttons carry no position in winit) and the ordered list of fingers
/// currently down. Times are milliseconds since the collector was created.
pub struct InputCollector {
    clock: Instant,
    scale_factor: f32,
    cursor_pos: Option<[f32; 2]>,
    /// Active touches in touch-down order
    touches: Vec<TouchPoint>,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            clock: Instant::now(),
            scale_factor: 1.0,
            cursor_pos: None,
            touches: Vec::new(),
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Milliseconds elapsed on the collector's clock
    pub fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        let time = self.now();

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_logical(position.x, position.y);
                Some(self.cursor_moved(pos, time))
            }

            WindowEvent::MouseInput { state, .. } => match state {
                ElementState::Pressed => self.button_pressed(time),
                ElementState::Released => self.button_released(time),
            },

            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }

            WindowEvent::Touch(touch) => {
                let pos = self.to_logical(touch.location.x, touch.location.y);
                match touch.phase {
                    TouchPhase::Started => Some(self.touch_started(touch.id, pos, time)),
                    TouchPhase::Moved => self.touch_moved(touch.id, pos, time),
                    TouchPhase::Ended => self.touch_ended(touch.id, pos, time),
                    TouchPhase::Cancelled => {
                        self.touch_cancelled(touch.id);
                        None
                    }
                }
            }

            _ => None,
        }
    }

    /// Cursor moved to `pos`
    pub fn cursor_moved(&mut self, pos: [f32; 2], time: f64) -> PointerEvent {
        self.cursor_pos = Some(pos);
        PointerEvent::MouseMove { pos, time }
    }

    /// Cursor left the window
    ///
    /// The last position is kept: a button released outside the window is
    /// still reported there, so a drag off the edge can complete.
    pub fn cursor_left(&mut self) {
        trace!(pos = ?self.cursor_pos, "Cursor left window");
    }

    /// A mouse button went down at the last known cursor position
    pub fn button_pressed(&mut self, time: f64) -> Option<PointerEvent> {
        self.cursor_pos
            .map(|pos| PointerEvent::MouseDown { pos, time })
    }

    /// A mouse button was released at the last known cursor position
    pub fn button_released(&mut self, time: f64) -> Option<PointerEvent> {
        self.cursor_pos.map(|pos| PointerEvent::MouseUp { pos, time })
    }

    /// A finger touched down
    pub fn touch_started(&mut self, id: u64, pos: [f32; 2], time: f64) -> PointerEvent {
        match self.touches.iter_mut().find(|t| t.id == id) {
            Some(existing) => existing.pos = pos,
            None => self.touches.push(TouchPoint::new(id, pos)),
        }
        PointerEvent::TouchStart {
            touches: self.touches.clone(),
            time,
        }
    }

    /// A finger moved; ignored for fingers that never touched down
    pub fn touch_moved(&mut self, id: u64, pos: [f32; 2], time: f64) -> Option<PointerEvent> {
        let touch = self.touches.iter_mut().find(|t| t.id == id)?;
        touch.pos = pos;
        Some(PointerEvent::TouchMove {
            touches: self.touches.clone(),
            time,
        })
    }

    /// A finger lifted; ignored for fingers that never touched down
    pub fn touch_ended(&mut self, id: u64, pos: [f32; 2], time: f64) -> Option<PointerEvent> {
        let index = self.touches.iter().position(|t| t.id == id)?;
        self.touches.remove(index);
        Some(PointerEvent::TouchEnd {
            changed_touches: vec![TouchPoint::new(id, pos)],
            time,
        })
    }

    /// A touch was cancelled by the platform
    pub fn touch_cancelled(&mut self, id: u64) {
        self.touches.retain(|t| t.id != id);
    }

    /// Number of fingers currently down
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Last known cursor position in logical pixels
    pub fn cursor_pos(&self) -> Option<[f32; 2]> {
        self.cursor_pos
    }

    fn to_logical(&self, x: f64, y: f64) -> [f32; 2] {
        [x as f32 / self.scale_factor, y as f32 / self.scale_factor]
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
