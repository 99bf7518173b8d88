//! EventHub<T>: named-action pub/sub with safe mutation during emission.
//!
//! Listeners are `(action, handler)` records kept in registration order.
//! Handlers are stored as `Arc<dyn Fn>` so snapshots are cheap, and two
//! handlers are the same listener only if they share the same allocation
//! (`Arc::ptr_eq`). Callers must keep the [`Handler`] returned by `on()` /
//! `once()` to remove it later.
//!
//! Snapshot-on-emit semantics mean:
//!   - A listener removed *during* emission is still called in that round.
//!   - A listener added *during* emission is NOT called until the next emit.
//!
//! Panics inside a handler propagate to the caller of `emit()` and skip the
//! remaining handlers of that round.
//!
//! All methods take `&self` (interior mutability via `parking_lot::Mutex`).
//! The lock is never held while a handler runs, so handlers may call
//! `on()` / `off()` / `emit()` on the hub they receive.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::payload::Payload;
use crate::collection::partition;

/// Action emitted after every registration, carrying `(action, handler)`.
pub const LISTENER_ADDED: &str = "listenerAdded";

/// Action emitted after every removal, carrying `(action, handler)`.
pub const LISTENER_REMOVED: &str = "listenerRemoved";

/// Closure type for event handlers. The first argument is the emitting hub.
pub type HandlerFn<T> = dyn Fn(&EventHub<T>, Payload<'_, T>) + Send + Sync;

// ============================================================================
// Handler
// ============================================================================

/// A registered callback, compared by identity.
pub struct Handler<T>(Arc<HandlerFn<T>>);

impl<T> Handler<T> {
    pub fn new(callback: impl Fn(&EventHub<T>, Payload<'_, T>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    /// Invoke the handler with `hub` as the receiver.
    pub fn call(&self, hub: &EventHub<T>, payload: Payload<'_, T>) {
        (self.0)(hub, payload)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Handler<T> {}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Late-bound weak link from a handler's closure to the handler itself.
///
/// Lets a handler call `off()` on itself without a reference cycle.
struct SelfRef<T>(Arc<Mutex<Option<Weak<HandlerFn<T>>>>>);

impl<T> SelfRef<T> {
    fn new() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }

    fn share(&self) -> Self {
        Self(Arc::clone(&self.0))
    }

    fn bind(&self, handler: &Handler<T>) {
        *self.0.lock() = Some(Arc::downgrade(&handler.0));
    }

    fn get(&self) -> Option<Handler<T>> {
        self.0.lock().as_ref().and_then(Weak::upgrade).map(Handler)
    }
}

// ============================================================================
// Listener
// ============================================================================

/// One `(action, handler)` registration.
pub struct Listener<T> {
    action: String,
    handler: Handler<T>,
}

impl<T> Listener<T> {
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn handler(&self) -> &Handler<T> {
        &self.handler
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("action", &self.action)
            .field("handler", &self.handler)
            .finish()
    }
}

// ============================================================================
// EventHub
// ============================================================================

struct HubInner<T> {
    listeners: Mutex<Vec<Listener<T>>>,
}

/// Typed synchronous event hub.
///
/// `T` is the payload type of application events. Cloning an `EventHub`
/// yields another handle to the same listener list.
pub struct EventHub<T> {
    inner: Arc<HubInner<T>>,
}

impl<T: 'static> EventHub<T> {
    /// Create a new, empty hub.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register `handler` for every space-separated name in `actions`.
    ///
    /// Emits `listenerAdded` after each registration and returns the handler
    /// so it can later be passed to [`off`](Self::off).
    pub fn on(&self, actions: &str, handler: Handler<T>) -> Handler<T> {
        for action in actions.split(' ') {
            self.inner.listeners.lock().push(Listener {
                action: action.to_string(),
                handler: handler.clone(),
            });
            tracing::trace!(action, "listener added");
            self.emit_payload(
                LISTENER_ADDED,
                Payload::ListenerAdded {
                    action,
                    handler: &handler,
                },
            );
        }
        handler
    }

    /// Remove every registration of `handler`, whatever its action.
    ///
    /// Scans from the most recent registration backwards and emits
    /// `listenerRemoved` after each removal. Unknown handlers are ignored.
    pub fn off(&self, handler: &Handler<T>) -> &Self {
        let mut index = usize::MAX;
        loop {
            // Re-read the list each round: listenerRemoved handlers may have
            // changed it in the meantime.
            let removed = {
                let mut listeners = self.inner.listeners.lock();
                index = index.min(listeners.len());
                let mut found = None;
                while index > 0 {
                    index -= 1;
                    if listeners[index].handler == *handler {
                        found = Some(listeners.remove(index));
                        break;
                    }
                }
                found
            };
            let Some(listener) = removed else { break };
            tracing::trace!(action = %listener.action, "listener removed");
            self.emit_payload(
                LISTENER_REMOVED,
                Payload::ListenerRemoved {
                    action: &listener.action,
                    handler: &listener.handler,
                },
            );
        }
        self
    }

    /// Register a handler that runs at most once.
    ///
    /// The returned wrapper removes itself from every action before calling
    /// `handler`, so `handler` may freely re-register. Pass the wrapper to
    /// [`off`](Self::off) to cancel before it fires.
    pub fn once(&self, actions: &str, handler: Handler<T>) -> Handler<T> {
        let this = SelfRef::new();
        let own = this.share();
        let fired = AtomicBool::new(false);

        let wrapper = Handler::new(move |hub, payload| {
            if fired.swap(true, Ordering::SeqCst) {
                return;
            }
            if let Some(me) = own.get() {
                hub.off(&me);
            }
            handler.call(hub, payload);
        });
        this.bind(&wrapper);

        self.on(actions, wrapper)
    }

    /// Deliver `data` to every listener currently registered for `action`.
    pub fn emit(&self, action: &str, data: &T) -> &Self {
        self.emit_payload(action, Payload::Data(data))
    }

    /// Re-emit `action` from `source` on this hub with the same payload.
    ///
    /// `action` is a single name. The forwarder only holds a weak reference
    /// to this hub and unregisters itself from `source` the first time it
    /// fires after this hub is gone. Pass the returned handler to
    /// `source.off()` to stop earlier.
    pub fn proxy(&self, source: &EventHub<T>, action: &str) -> Handler<T> {
        let target = Arc::downgrade(&self.inner);
        let forwarded = action.to_string();
        let this = SelfRef::new();
        let own = this.share();

        let forwarder = Handler::new(move |hub, payload| {
            match target.upgrade() {
                Some(inner) => {
                    EventHub { inner }.emit_payload(&forwarded, payload);
                }
                None => {
                    if let Some(me) = own.get() {
                        tracing::trace!(action = %forwarded, "proxy target dropped");
                        hub.off(&me);
                    }
                }
            }
        });
        this.bind(&forwarder);

        source.on(action, forwarder)
    }

    /// Remove all listeners.
    ///
    /// With `silent` the list is simply cleared. Otherwise regular listeners
    /// are removed first, so `listenerRemoved` handlers observe every one of
    /// them, and the `listenerRemoved` handlers are removed last.
    pub fn discard_event_handlers(&self, silent: bool) -> &Self {
        if silent {
            self.inner.listeners.lock().clear();
            tracing::debug!("event handlers discarded silently");
            return self;
        }

        let (watchers, regular) =
            partition(&self.listeners(), |l: &Listener<T>| l.action == LISTENER_REMOVED);
        tracing::debug!(
            regular = regular.len(),
            watchers = watchers.len(),
            "discarding event handlers"
        );
        for listener in regular.iter().chain(watchers.iter()) {
            self.off(&listener.handler);
        }
        self
    }

    /// Snapshot of all registrations in registration order.
    pub fn listeners(&self) -> Vec<Listener<T>> {
        self.inner.listeners.lock().clone()
    }

    /// Number of registrations for `action`.
    pub fn listener_count(&self, action: &str) -> usize {
        self.inner
            .listeners
            .lock()
            .iter()
            .filter(|l| l.action == action)
            .count()
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn emit_payload(&self, action: &str, payload: Payload<'_, T>) -> &Self {
        // Copy the whole list under the lock, then call with the lock released.
        let snapshot: Vec<Listener<T>> = self.inner.listeners.lock().clone();
        for listener in snapshot.iter().filter(|l| l.action == action) {
            listener.handler.call(self, payload);
        }
        self
    }
}

impl<T> Clone for EventHub<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.inner.listeners.lock().len())
            .finish()
    }
}
