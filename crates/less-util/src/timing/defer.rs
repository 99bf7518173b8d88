//! Small scheduling helpers on top of tokio timers.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::{Result, UtilError};

/// Poll interval used by [`wait_for`] when none is given.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Run `callback` once, `delay_ms` from now, on the current runtime.
pub fn defer(delay_ms: u64, callback: impl FnOnce() + Send + 'static) -> Result<JoinHandle<()>> {
    let runtime = Handle::try_current().map_err(|_| UtilError::NoRuntime)?;
    Ok(runtime.spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        callback();
    }))
}

/// Sleep for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Options for [`wait_for`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitForOptions {
    /// Time between checks (default: 100).
    pub interval_ms: Option<u64>,
    /// Give up after this long. `None` waits forever.
    pub timeout_ms: Option<u64>,
}

/// Check `condition` every interval until it holds.
///
/// The first check happens one interval after the call. With a timeout, the
/// wait before each check is cut short at the deadline, where the condition
/// gets one last check before `UtilError::Timeout` is returned.
pub async fn wait_for(mut condition: impl FnMut() -> bool, options: WaitForOptions) -> Result<()> {
    let interval = Duration::from_millis(
        options
            .interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .max(1),
    );
    let started = Instant::now();
    let deadline = options
        .timeout_ms
        .map(|ms| started + Duration::from_millis(ms));
    let mut next_check = started + interval;

    loop {
        let wake = deadline.map_or(next_check, |deadline| deadline.min(next_check));
        tokio::time::sleep_until(wake).await;
        if condition() {
            return Ok(());
        }
        let now = Instant::now();
        if deadline.is_some_and(|deadline| now >= deadline) {
            return Err(UtilError::Timeout {
                waited_ms: now.duration_since(started).as_millis() as u64,
            });
        }
        next_check = now + interval;
    }
}
