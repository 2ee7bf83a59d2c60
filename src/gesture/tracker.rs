//! Single-pointer swipe tracker

use tracing::{debug, trace};

use super::contact::{Contact, Horizontal, Swipe, Vertical};
use super::emitter::{Emitter, ListenerId, SwipeEvent};
use crate::config::{ReleaseMode, TrackerConfig};
use crate::error::SwipeError;
use crate::input::{ContactSample, PointerKind, Rect, ReleaseSurface, Surface};

/// What the input source should do with the raw event after the tracker saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not handled; let it propagate
    Pass,
    /// Handled; stop propagation
    Consume,
    /// Handled; stop propagation and suppress native scrolling/selection
    ConsumeAndPreventDefault,
}

impl Disposition {
    pub fn is_consumed(self) -> bool {
        !matches!(self, Self::Pass)
    }

    pub fn prevents_default(self) -> bool {
        matches!(self, Self::ConsumeAndPreventDefault)
    }
}

/// Tracks one pointer from press to release and emits swipe events
///
/// Idle until a contact starts; a new start always replaces the contact in
/// flight. Listeners run synchronously inside the handler that emits.
#[derive(Debug)]
pub struct SwipeTracker {
    target: Surface,
    release: ReleaseSurface,
    bound: bool,
    contact: Option<Contact>,
    emitter: Emitter,
}

impl SwipeTracker {
    /// Starts building a tracker
    pub fn builder() -> SwipeTrackerBuilder {
        SwipeTrackerBuilder::default()
    }

    /// Creates a bound tracker for `target`, accepting releases anywhere
    pub fn new(target: Surface) -> Result<Self, SwipeError> {
        Self::builder().target(target).build()
    }

    /// Register a listener for `event`
    pub fn on<F>(&mut self, event: SwipeEvent, listener: F) -> ListenerId
    where
        F: FnMut(&Contact) -> anyhow::Result<()> + 'static,
    {
        self.emitter.on(event, listener)
    }

    /// Register a listener that runs only for the next `event`
    pub fn once<F>(&mut self, event: SwipeEvent, listener: F) -> ListenerId
    where
        F: FnMut(&Contact) -> anyhow::Result<()> + 'static,
    {
        self.emitter.once(event, listener)
    }

    /// Remove a listener
    pub fn off(&mut self, event: SwipeEvent, id: ListenerId) -> bool {
        self.emitter.off(event, id)
    }

    /// Remove every listener for `event`
    pub fn off_event(&mut self, event: SwipeEvent) {
        self.emitter.off_event(event);
    }

    /// Listener registry, for inspection and bulk removal
    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }

    /// Attach to the target and release surfaces
    pub fn bind(&mut self) -> &mut Self {
        if !self.bound {
            debug!(surface = %self.target.name, "Binding swipe tracker");
        }
        self.bound = true;
        self
    }

    /// Detach from this tracker's own surfaces; a contact in flight is kept
    pub fn unbind(&mut self) -> &mut Self {
        if self.bound {
            debug!(surface = %self.target.name, "Unbinding swipe tracker");
        }
        self.bound = false;
        self
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn target(&self) -> &Surface {
        &self.target
    }

    pub fn release_surface(&self) -> ReleaseSurface {
        self.release
    }

    /// The contact in flight, if any
    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.contact.is_some()
    }

    /// Route a sample from the input source
    ///
    /// Presses and mouse moves must land on the target surface, releases on
    /// the release surface. Touch moves keep reaching the tracker after the
    /// finger leaves the target. Unbound trackers pass everything through.
    pub fn dispatch(&mut self, sample: ContactSample) -> Result<Disposition, SwipeError> {
        if !self.bound {
            return Ok(Disposition::Pass);
        }

        match sample {
            ContactSample::Start { position, time } => {
                if !self.target.contains(position) {
                    return Ok(Disposition::Pass);
                }
                Ok(self.on_contact_start(position, time))
            }
            ContactSample::Move {
                position,
                time,
                pointer,
                pointer_count,
            } => {
                if pointer == PointerKind::Mouse && !self.target.contains(position) {
                    return Ok(Disposition::Pass);
                }
                self.on_contact_move(position, time, pointer_count > 1)
            }
            ContactSample::End { position, time } => {
                if !self.release.accepts(&self.target, position) {
                    return Ok(Disposition::Pass);
                }
                let swipe = self.on_contact_end(position, time)?;
                Ok(match swipe {
                    Some(_) => Disposition::Consume,
                    None => Disposition::Pass,
                })
            }
        }
    }

    /// Open a new contact, discarding any contact in flight
    pub fn on_contact_start(&mut self, position: [f32; 2], time: f64) -> Disposition {
        if let Some(stale) = self.contact.take() {
            debug!(
                start = ?stale.start_pos(),
                "Discarding unfinished contact"
            );
        }
        debug!(?position, time, "Contact started");
        self.contact = Some(Contact::start(position, time));
        Disposition::Consume
    }

    /// Update the contact in flight and emit `move`
    ///
    /// Ignored while idle or while more than one pointer is down.
    pub fn on_contact_move(
        &mut self,
        position: [f32; 2],
        time: f64,
        multi_touch: bool,
    ) -> Result<Disposition, SwipeError> {
        if multi_touch {
            return Ok(Disposition::Pass);
        }
        let Some(contact) = self.contact.as_mut() else {
            return Ok(Disposition::Pass);
        };

        contact.update(position);
        let snapshot = contact.clone();
        trace!(?position, time, dx = snapshot.dx, dy = snapshot.dy, "Contact moved");

        self.emitter.emit(SwipeEvent::Move, &snapshot)?;
        Ok(Disposition::ConsumeAndPreventDefault)
    }

    /// Close the contact in flight and emit its classification
    ///
    /// Emits `swipe-end`, then one of `swipe-left`/`swipe-right`, then one
    /// of `swipe-up`/`swipe-down`. The tracker is idle again before any
    /// listener runs. Returns `None` while idle.
    pub fn on_contact_end(
        &mut self,
        position: [f32; 2],
        time: f64,
    ) -> Result<Option<Swipe>, SwipeError> {
        let Some(contact) = self.contact.take() else {
            return Ok(None);
        };

        let swipe = Swipe::from_contact(contact.finish(position, time));
        debug!(
            dx = swipe.contact.dx,
            dy = swipe.contact.dy,
            dt = swipe.contact.dt,
            horizontal = ?swipe.horizontal,
            vertical = ?swipe.vertical,
            "Contact ended"
        );

        let horizontal = match swipe.horizontal {
            Horizontal::Left => SwipeEvent::SwipeLeft,
            Horizontal::Right => SwipeEvent::SwipeRight,
        };
        let vertical = match swipe.vertical {
            Vertical::Up => SwipeEvent::SwipeUp,
            Vertical::Down => SwipeEvent::SwipeDown,
        };

        for event in [SwipeEvent::SwipeEnd, horizontal, vertical] {
            self.emitter.emit(event, &swipe.contact)?;
        }

        Ok(Some(swipe))
    }
}

/// Builder for [`SwipeTracker`]
#[derive(Debug, Default)]
pub struct SwipeTrackerBuilder {
    target: Option<Surface>,
    release: ReleaseSurface,
}

impl SwipeTrackerBuilder {
    /// Surface that receives presses and moves
    pub fn target(mut self, target: Surface) -> Self {
        self.target = Some(target);
        self
    }

    /// Region that still reports releases after the pointer leaves the target
    pub fn release(mut self, release: ReleaseSurface) -> Self {
        self.release = release;
        self
    }

    /// Release region restricted to `rect`
    pub fn release_region(self, rect: Rect) -> Self {
        self.release(ReleaseSurface::Region(rect))
    }

    /// Apply tracker settings from configuration
    pub fn with_config(self, config: &TrackerConfig) -> Self {
        let release = match config.release {
            ReleaseMode::Anywhere => ReleaseSurface::Anywhere,
            ReleaseMode::Target => ReleaseSurface::Target,
        };
        self.release(release)
    }

    /// Build a bound tracker
    pub fn build(self) -> Result<SwipeTracker, SwipeError> {
        let target = self.target.ok_or(SwipeError::MissingTarget)?;
        if !target.rect.is_valid() {
            return Err(SwipeError::InvalidSurface {
                name: target.name,
                width: target.rect.width,
                height: target.rect.height,
            });
        }

        let mut tracker = SwipeTracker {
            target,
            release: self.release,
            bound: false,
            contact: None,
            emitter: Emitter::new(),
        };
        tracker.bind();
        Ok(tracker)
    }
}
