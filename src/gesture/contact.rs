//! Contact records and swipe classification

use serde::Serialize;

/// Snapshot of one press-move-release sequence
///
/// Listeners receive a fresh copy at every emission; the tracker's own
/// record is never shared.
///
/// Positions and deltas are `f32` logical pixels, matching the input layer.
/// That keeps sub-pixel movement but has about 7 significant digits, so
/// coordinates beyond roughly 2^24 px lose integer precision. Times stay `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub start_x: f32,
    pub start_y: f32,
    /// Milliseconds, on the input source's clock
    pub start_time: f64,
    /// Latest position; absent until the first move or the release
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub dx: f32,
    pub dy: f32,
    /// Set only when the contact ends
    pub end_time: Option<f64>,
    pub dt: Option<f64>,
}

impl Contact {
    /// Open a contact at `pos`
    pub(crate) fn start(pos: [f32; 2], time: f64) -> Self {
        Self {
            start_x: pos[0],
            start_y: pos[1],
            start_time: time,
            x: None,
            y: None,
            dx: 0.0,
            dy: 0.0,
            end_time: None,
            dt: None,
        }
    }

    /// Move the contact's current position and recompute the displacement
    pub(crate) fn update(&mut self, pos: [f32; 2]) {
        self.x = Some(pos[0]);
        self.y = Some(pos[1]);
        self.dx = pos[0] - self.start_x;
        self.dy = pos[1] - self.start_y;
    }

    /// Close the contact at `pos`
    pub(crate) fn finish(mut self, pos: [f32; 2], time: f64) -> Self {
        self.update(pos);
        self.end_time = Some(time);
        self.dt = Some(time - self.start_time);
        self
    }

    pub fn start_pos(&self) -> [f32; 2] {
        [self.start_x, self.start_y]
    }

    /// Latest position, if the contact has moved or ended
    pub fn pos(&self) -> Option<[f32; 2]> {
        self.x.zip(self.y).map(|(x, y)| [x, y])
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }
}

/// Horizontal swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    /// Negative displacement is left; zero counts as right
    pub fn classify(dx: f32) -> Self {
        if dx < 0.0 { Self::Left } else { Self::Right }
    }
}

/// Vertical swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vertical {
    Up,
    Down,
}

impl Vertical {
    /// Negative displacement is up; zero counts as down
    pub fn classify(dy: f32) -> Self {
        if dy < 0.0 { Self::Up } else { Self::Down }
    }
}

/// A completed, classified contact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swipe {
    pub contact: Contact,
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Swipe {
    pub(crate) fn from_contact(contact: Contact) -> Self {
        Self {
            horizontal: Horizontal::classify(contact.dx),
            vertical: Vertical::classify(contact.dy),
            contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_has_no_position() {
        let contact = Contact::start([100.0, 100.0], 0.0);
        assert_eq!(contact.start_pos(), [100.0, 100.0]);
        assert_eq!(contact.pos(), None);
        assert_eq!((contact.dx, contact.dy), (0.0, 0.0));
        assert!(!contact.is_finished());
    }

    #[test]
    fn test_update_and_finish() {
        let mut contact = Contact::start([100.0, 100.0], 10.0);
        contact.update([40.0, 120.0]);
        assert_eq!(contact.pos(), Some([40.0, 120.0]));
        assert_eq!((contact.dx, contact.dy), (-60.0, 20.0));

        let done = contact.finish([30.0, 90.0], 110.0);
        assert_eq!((done.dx, done.dy), (-70.0, -10.0));
        assert_eq!(done.end_time, Some(110.0));
        assert_eq!(done.dt, Some(100.0));
        assert!(done.is_finished());
    }

    #[test]
    fn test_zero_displacement_tie_break() {
        assert_eq!(Horizontal::classify(0.0), Horizontal::Right);
        assert_eq!(Horizontal::classify(-0.0), Horizontal::Right);
        assert_eq!(Horizontal::classify(-0.5), Horizontal::Left);
        assert_eq!(Vertical::classify(0.0), Vertical::Down);
        assert_eq!(Vertical::classify(-3.0), Vertical::Up);
    }

    #[test]
    fn test_sub_pixel_motion_is_kept() {
        let mut contact = Contact::start([10.25, 20.5], 0.0);
        contact.update([10.75, 20.0]);
        assert_eq!((contact.dx, contact.dy), (0.5, -0.5));
        assert_eq!(Horizontal::classify(contact.dx), Horizontal::Right);
        assert_eq!(Vertical::classify(contact.dy), Vertical::Up);
    }
}
