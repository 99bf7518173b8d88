//! AutoThrottle: serialize an asynchronous callback.
//!
//! At most one invocation is in flight. Calls made while one runs collapse
//! into a single follow-up that starts as soon as the running one signals
//! completion through its [`Done`] token.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::error::{Result, UtilError};

// ============================================================================
// AutoThrottle
// ============================================================================

/// Coalescing wrapper around a callback that completes asynchronously.
///
/// Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct AutoThrottle {
    inner: Arc<AutoThrottleInner>,
}

struct AutoThrottleInner {
    callback: Box<dyn Fn(Done) + Send + Sync>,
    state: Mutex<AutoThrottleState>,
}

struct AutoThrottleState {
    running: bool,
    update_requested: bool,
}

impl AutoThrottle {
    /// Wrap `callback`. Each invocation receives a [`Done`] token that must
    /// be finished (or dropped) when its work is complete.
    pub fn new(callback: impl Fn(Done) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(AutoThrottleInner {
                callback: Box::new(callback),
                state: Mutex::new(AutoThrottleState {
                    running: false,
                    update_requested: false,
                }),
            }),
        }
    }

    /// Wrap a future factory: each invocation spawns `make_future()` on the
    /// current tokio runtime and completes when the future resolves.
    pub fn spawn<F, Fut>(make_future: F) -> Result<Self>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| UtilError::NoRuntime)?;
        Ok(Self::new(move |done| {
            let fut = make_future();
            runtime.spawn(async move {
                fut.await;
                done.finish();
            });
        }))
    }

    /// Start an invocation, or request a follow-up if one is in flight.
    pub fn call(&self) {
        {
            let mut state = self.inner.state.lock();
            if state.running {
                state.update_requested = true;
                return;
            }
            state.running = true;
        }
        start(&self.inner);
    }

    /// Whether an invocation is in flight.
    pub fn is_running(&self) -> bool {
        self.inner.state.lock().running
    }
}

fn start(inner: &Arc<AutoThrottleInner>) {
    (inner.callback)(Done {
        inner: Some(Arc::clone(inner)),
    });
}

// ============================================================================
// Done
// ============================================================================

/// Completion token for one [`AutoThrottle`] invocation.
///
/// Dropping an unfinished token completes it, so the throttle cannot stall
/// when the work returns early. When dropped during a panic the throttle goes
/// idle without starting a follow-up.
pub struct Done {
    inner: Option<Arc<AutoThrottleInner>>,
}

impl Done {
    /// Signal that the invocation has finished.
    pub fn finish(mut self) {
        self.complete();
    }

    fn complete(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let unwinding = std::thread::panicking();

        let follow_up = {
            let mut state = inner.state.lock();
            if state.update_requested && !unwinding {
                state.update_requested = false;
                true
            } else {
                state.running = false;
                state.update_requested = false;
                false
            }
        };

        if follow_up {
            tracing::debug!("starting coalesced auto-throttle invocation");
            start(&inner);
        }
    }
}

impl Drop for Done {
    fn drop(&mut self) {
        self.complete();
    }
}

impl std::fmt::Debug for Done {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Done")
            .field("pending", &self.inner.is_some())
            .finish()
    }
}
