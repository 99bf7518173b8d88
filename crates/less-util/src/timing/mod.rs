//! Timing combinators and helpers.
//!
//! # Modules
//!
//! - [`throttle`]: [`Throttle`], leading + trailing edge rate limiting.
//! - [`auto_throttle`]: [`AutoThrottle`], one-in-flight coalescing of async work.
//! - [`defer`]: [`defer()`], [`delay`], [`wait_for`].
//!
//! Everything timer-based runs on tokio and captures the runtime handle at
//! construction time.

pub mod auto_throttle;
pub mod defer;
pub mod throttle;

pub use auto_throttle::{AutoThrottle, Done};
pub use defer::{defer, delay, wait_for, WaitForOptions, DEFAULT_POLL_INTERVAL_MS};
pub use throttle::{Throttle, DEFAULT_THRESHOLD_MS};
