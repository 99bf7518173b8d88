//! Payload: what a handler receives for one emission.
//!
//! Application events arrive as [`Payload::Data`]. The hub itself emits
//! [`Payload::ListenerAdded`] / [`Payload::ListenerRemoved`] on the
//! `listenerAdded` / `listenerRemoved` actions whenever its listener list
//! changes.

use std::fmt;

use super::hub::Handler;

/// A single delivery to a handler.
pub enum Payload<'a, T> {
    /// An event emitted through [`EventHub::emit`](super::EventHub::emit).
    Data(&'a T),
    /// `handler` was registered for `action`.
    ListenerAdded {
        action: &'a str,
        handler: &'a Handler<T>,
    },
    /// `handler` was removed from `action`.
    ListenerRemoved {
        action: &'a str,
        handler: &'a Handler<T>,
    },
}

impl<'a, T> Payload<'a, T> {
    /// The event data, if this is an application event.
    pub fn data(&self) -> Option<&'a T> {
        match *self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }

    /// The `(action, handler)` pair carried by listener bookkeeping events.
    pub fn listener(&self) -> Option<(&'a str, &'a Handler<T>)> {
        match *self {
            Self::ListenerAdded { action, handler } | Self::ListenerRemoved { action, handler } => {
                Some((action, handler))
            }
            Self::Data(_) => None,
        }
    }
}

impl<T> Clone for Payload<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Payload<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Payload<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(data) => f.debug_tuple("Data").field(data).finish(),
            Self::ListenerAdded { action, handler } => f
                .debug_struct("ListenerAdded")
                .field("action", action)
                .field("handler", handler)
                .finish(),
            Self::ListenerRemoved { action, handler } => f
                .debug_struct("ListenerRemoved")
                .field("action", action)
                .field("handler", handler)
                .finish(),
        }
    }
}
