//! Emitter: event-handling capability for any type that embeds an
//! [`EventHub`].
//!
//! Implementors only provide [`Emitter::event_hub`]; every other method
//! forwards to the hub. Handlers receive the embedded hub as their receiver.

use super::hub::{EventHub, Handler};

pub trait Emitter {
    /// Payload type of application events.
    type Event: 'static;

    fn event_hub(&self) -> &EventHub<Self::Event>;

    fn on(&self, actions: &str, handler: Handler<Self::Event>) -> Handler<Self::Event> {
        self.event_hub().on(actions, handler)
    }

    fn off(&self, handler: &Handler<Self::Event>) -> &Self {
        self.event_hub().off(handler);
        self
    }

    fn once(&self, actions: &str, handler: Handler<Self::Event>) -> Handler<Self::Event> {
        self.event_hub().once(actions, handler)
    }

    fn emit(&self, action: &str, data: &Self::Event) -> &Self {
        self.event_hub().emit(action, data);
        self
    }

    /// Re-emit `action` from `source` on this emitter.
    fn proxy<S>(&self, source: &S, action: &str) -> Handler<Self::Event>
    where
        S: Emitter<Event = Self::Event> + ?Sized,
    {
        self.event_hub().proxy(source.event_hub(), action)
    }

    fn discard_event_handlers(&self, silent: bool) -> &Self {
        self.event_hub().discard_event_handlers(silent);
        self
    }
}

impl<T: 'static> Emitter for EventHub<T> {
    type Event = T;

    fn event_hub(&self) -> &EventHub<T> {
        self
    }
}
