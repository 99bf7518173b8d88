//! Throttle: rate-limit a callback to once per threshold window.
//!
//! The first call runs immediately (leading edge). Later calls arm a single
//! timer for the rest of the window; calls made while it is armed only
//! replace the arguments it will deliver (trailing edge, last write wins).

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::Instant;

use crate::error::{Result, UtilError};

/// Threshold used when none is given.
pub const DEFAULT_THRESHOLD_MS: u64 = 1000;

// ============================================================================
// Throttle
// ============================================================================

/// A throttled wrapper around a callback taking `A`.
///
/// Cloning yields another handle to the same throttle state.
pub struct Throttle<A> {
    inner: Arc<ThrottleInner<A>>,
}

struct ThrottleInner<A> {
    threshold: Duration,
    callback: Box<dyn Fn(A) + Send + Sync>,
    state: Mutex<ThrottleState<A>>,
    runtime: Handle,
}

/// Internal per-throttle state.
struct ThrottleState<A> {
    last_invocation: Option<Instant>,
    timer_armed: bool,
    /// Arguments for the armed timer.
    trailing: Option<A>,
}

/// What `call()` should do after updating the state.
enum Dispatch<A> {
    /// Leading edge: invoke right away.
    Now(A),
    /// Arm the trailing timer.
    Arm(Instant),
    /// A timer is already armed and will pick up the new arguments.
    Coalesced,
}

impl<A: Send + 'static> Throttle<A> {
    /// Wrap `callback` so it runs at most once per `threshold_ms`
    /// (default: 1000).
    ///
    /// Must be called inside a tokio runtime; the trailing timer is spawned
    /// on that runtime.
    pub fn new(
        threshold_ms: Option<u64>,
        callback: impl Fn(A) + Send + Sync + 'static,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| UtilError::NoRuntime)?;
        Ok(Self {
            inner: Arc::new(ThrottleInner {
                threshold: Duration::from_millis(threshold_ms.unwrap_or(DEFAULT_THRESHOLD_MS)),
                callback: Box::new(callback),
                state: Mutex::new(ThrottleState {
                    last_invocation: None,
                    timer_armed: false,
                    trailing: None,
                }),
                runtime,
            }),
        })
    }

    /// Request an invocation with `args`.
    pub fn call(&self, args: A) {
        let dispatch = {
            let mut state = self.inner.state.lock();
            let now = Instant::now();
            match state.last_invocation {
                None => {
                    state.last_invocation = Some(now);
                    Dispatch::Now(args)
                }
                Some(last) => {
                    state.trailing = Some(args);
                    if state.timer_armed {
                        Dispatch::Coalesced
                    } else {
                        state.timer_armed = true;
                        let elapsed = now.saturating_duration_since(last);
                        Dispatch::Arm(now + self.inner.threshold.saturating_sub(elapsed))
                    }
                }
            }
        };

        // No lock held from here on: the callback may call back into us.
        match dispatch {
            Dispatch::Now(args) => (self.inner.callback)(args),
            Dispatch::Arm(deadline) => {
                let inner = Arc::clone(&self.inner);
                self.inner.runtime.spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    inner.fire_trailing();
                });
            }
            Dispatch::Coalesced => {}
        }
    }

    /// The configured minimum interval between invocations.
    pub fn threshold(&self) -> Duration {
        self.inner.threshold
    }

    /// Whether a trailing invocation is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer_armed
    }
}

impl<A> ThrottleInner<A> {
    fn fire_trailing(&self) {
        let args = {
            let mut state = self.state.lock();
            state.timer_armed = false;
            state.last_invocation = Some(Instant::now());
            state.trailing.take()
        };
        if let Some(args) = args {
            tracing::trace!(threshold_ms = self.threshold.as_millis() as u64, "trailing call");
            (self.callback)(args);
        }
    }
}

impl<A> Clone for Throttle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
