//! Event layer named-action pub/sub.
//!
//! # Modules
//!
//! - [`payload`]: [`Payload`] delivered to handlers.
//! - [`hub`]: [`EventHub<T>`], [`Handler`] and [`Listener`].
//! - [`emitter`]: [`Emitter`] trait for types that embed a hub.

pub mod emitter;
pub mod hub;
pub mod payload;

pub use emitter::Emitter;
pub use hub::{EventHub, Handler, HandlerFn, Listener, LISTENER_ADDED, LISTENER_REMOVED};
pub use payload::Payload;
