//! Tests for the `Emitter` trait on types embedding an `EventHub`.

use less_util::events::{Emitter, EventHub, Handler, Payload};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum PlayerEvent {
    Started(String),
    Progress(u32),
}

/// A type that gains event handling by embedding a hub.
#[derive(Default)]
struct Player {
    hub: EventHub<PlayerEvent>,
    title: String,
}

impl Player {
    fn new(title: &str) -> Self {
        Self {
            hub: EventHub::new(),
            title: title.to_string(),
        }
    }

    fn start(&self) {
        self.emit("started", &PlayerEvent::Started(self.title.clone()));
    }
}

impl Emitter for Player {
    type Event = PlayerEvent;

    fn event_hub(&self) -> &EventHub<PlayerEvent> {
        &self.hub
    }
}

fn collect<E: Emitter<Event = PlayerEvent>>(
    emitter: &E,
    actions: &str,
) -> Arc<Mutex<Vec<PlayerEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    emitter.on(
        actions,
        Handler::new(move |_, payload: Payload<'_, PlayerEvent>| {
            if let Some(event) = payload.data() {
                sink.lock().unwrap().push(event.clone());
            }
        }),
    );
    seen
}

#[test]
fn embedded_hub_delivers_events() {
    let player = Player::new("intro");
    let seen = collect(&player, "started");

    player.start();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![PlayerEvent::Started("intro".to_string())]
    );
}

#[test]
fn trait_methods_chain_on_the_embedding_type() {
    let player = Player::new("intro");
    let seen = collect(&player, "progress");

    player
        .emit("progress", &PlayerEvent::Progress(10))
        .emit("progress", &PlayerEvent::Progress(20));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![PlayerEvent::Progress(10), PlayerEvent::Progress(20)]
    );
}

#[test]
fn once_and_off_through_the_trait() {
    let player = Player::new("intro");
    let once_seen = Arc::new(Mutex::new(0));
    let always_seen = Arc::new(Mutex::new(0));

    {
        let once_seen = Arc::clone(&once_seen);
        player.once(
            "progress",
            Handler::new(move |_, _| *once_seen.lock().unwrap() += 1),
        );
    }
    let always = {
        let always_seen = Arc::clone(&always_seen);
        player.on(
            "progress",
            Handler::new(move |_, _| *always_seen.lock().unwrap() += 1),
        )
    };

    player.emit("progress", &PlayerEvent::Progress(1));
    player.off(&always).emit("progress", &PlayerEvent::Progress(2));

    assert_eq!(*once_seen.lock().unwrap(), 1);
    assert_eq!(*always_seen.lock().unwrap(), 1);
}

#[test]
fn proxy_between_emitters() {
    let source = Player::new("source");
    let mirror = Player::default();
    let seen = collect(&mirror, "started");

    let handle = mirror.proxy(&source, "started");
    source.start();
    source.off(&handle);
    source.start();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![PlayerEvent::Started("source".to_string())]
    );
}

#[test]
fn handlers_receive_the_embedded_hub() {
    let player = Player::new("intro");
    let seen = collect(&player, "progress");

    player.on(
        "started",
        Handler::new(|hub: &EventHub<PlayerEvent>, _| {
            hub.emit("progress", &PlayerEvent::Progress(0));
        }),
    );
    player.start();

    assert_eq!(*seen.lock().unwrap(), vec![PlayerEvent::Progress(0)]);
}

#[test]
fn discard_through_the_trait() {
    let player = Player::new("intro");
    let _seen = collect(&player, "started progress");

    player.discard_event_handlers(false);

    assert!(player.event_hub().is_empty());
}
