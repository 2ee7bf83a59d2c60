//! Named swipe events and the listener registry that delivers them

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::contact::Contact;
use crate::error::SwipeError;

/// Events a swipe tracker emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwipeEvent {
    Move,
    SwipeEnd,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
}

impl SwipeEvent {
    /// Every event, in emission order for a completed gesture
    pub const ALL: [SwipeEvent; 6] = [
        SwipeEvent::Move,
        SwipeEvent::SwipeEnd,
        SwipeEvent::SwipeLeft,
        SwipeEvent::SwipeRight,
        SwipeEvent::SwipeUp,
        SwipeEvent::SwipeDown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::SwipeEnd => "swipe-end",
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::SwipeUp => "swipe-up",
            Self::SwipeDown => "swipe-down",
        }
    }
}

impl fmt::Display for SwipeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned on registration, used to remove a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the snapshot of the emitting contact
pub type Listener = Box<dyn FnMut(&Contact) -> anyhow::Result<()>>;

struct Registration {
    id: ListenerId,
    once: bool,
    listener: Listener,
}

/// Listener registry keyed by event name
///
/// Listeners for an event run in registration order. The first failing
/// listener stops the emission and its error is returned.
#[derive(Default)]
pub struct Emitter {
    listeners: HashMap<SwipeEvent, Vec<Registration>>,
    next_id: u64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event`
    pub fn on<F>(&mut self, event: SwipeEvent, listener: F) -> ListenerId
    where
        F: FnMut(&Contact) -> anyhow::Result<()> + 'static,
    {
        self.register(event, false, Box::new(listener))
    }

    /// Register a listener that is removed after its first invocation
    pub fn once<F>(&mut self, event: SwipeEvent, listener: F) -> ListenerId
    where
        F: FnMut(&Contact) -> anyhow::Result<()> + 'static,
    {
        self.register(event, true, Box::new(listener))
    }

    fn register(&mut self, event: SwipeEvent, once: bool, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(event).or_default().push(Registration {
            id,
            once,
            listener,
        });
        id
    }

    /// Remove one listener; returns false if it was not registered for `event`
    pub fn off(&mut self, event: SwipeEvent, id: ListenerId) -> bool {
        let Some(registrations) = self.listeners.get_mut(&event) else {
            return false;
        };
        let before = registrations.len();
        registrations.retain(|r| r.id != id);
        before != registrations.len()
    }

    /// Remove every listener for `event`
    pub fn off_event(&mut self, event: SwipeEvent) {
        self.listeners.remove(&event);
    }

    /// Remove every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self, event: SwipeEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    pub fn has_listeners(&self, event: SwipeEvent) -> bool {
        self.listener_count(event) > 0
    }

    /// Invoke the listeners for `event` with `contact`
    pub(crate) fn emit(&mut self, event: SwipeEvent, contact: &Contact) -> Result<(), SwipeError> {
        let Some(registrations) = self.listeners.get_mut(&event) else {
            return Ok(());
        };

        let mut failure = None;
        let mut index = 0;
        while index < registrations.len() {
            let registration = &mut registrations[index];
            let result = (registration.listener)(contact);

            if registration.once {
                registrations.remove(index);
            } else {
                index += 1;
            }

            if let Err(source) = result {
                warn!(%event, error = %source, "Swipe listener failed");
                failure = Some(source);
                break;
            }
        }

        match failure {
            Some(source) => Err(SwipeError::Listener { event, source }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<SwipeEvent, usize> = self
            .listeners
            .iter()
            .map(|(event, regs)| (*event, regs.len()))
            .collect();
        f.debug_struct("Emitter")
            .field("listeners", &counts)
            .finish()
    }
}
