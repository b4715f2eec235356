//! Nonce sources for private requests
//!
//! Bittrex rejects a private request whose nonce is lower than one it has
//! already seen for the same key. Nonce generation is therefore serialized
//! per source even when requests themselves run concurrently.

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the `nonce` parameter of private requests
///
/// Implementations must return non-decreasing values across calls on the
/// same instance, including calls from different threads.
pub trait NonceSource: Send + Sync + fmt::Debug {
    /// Draw the next nonce
    fn next_nonce(&self) -> u64;
}

fn unix_time() -> std::time::Duration {
    // A clock set before 1970 yields 0; the sources below clamp upward.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// Wall-clock seconds, clamped so a clock step backwards never lowers it
///
/// This is the default source. Two private calls within the same second
/// share a nonce; use [`IncrementingNonce`] when calls are issued faster
/// than once per second.
#[derive(Debug, Default)]
pub struct UnixSecondsNonce {
    last: Mutex<u64>,
}

impl UnixSecondsNonce {
    /// Create a new source
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for UnixSecondsNonce {
    fn next_nonce(&self) -> u64 {
        let now = unix_time().as_secs();
        let mut last = self.last.lock();
        *last = (*last).max(now);
        *last
    }
}

/// Strictly increasing counter seeded from the wall clock in milliseconds
///
/// Every call returns a distinct value, so rapid successive private calls
/// never collide.
#[derive(Debug)]
pub struct IncrementingNonce {
    counter: AtomicU64,
}

impl IncrementingNonce {
    /// Create a counter starting at the current Unix time in milliseconds
    pub fn new() -> Self {
        Self::starting_at(unix_time().as_millis() as u64)
    }

    /// Create a counter starting at `value`
    pub fn starting_at(value: u64) -> Self {
        Self {
            counter: AtomicU64::new(value),
        }
    }
}

impl Default for IncrementingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceSource for IncrementingNonce {
    fn next_nonce(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

/// Always returns the same value
///
/// Useful for reproducing a recorded signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}
