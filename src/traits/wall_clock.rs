//! Wall clock abstraction
//!
//! The clock only ever needs "milliseconds since the Unix epoch". Reading it through a trait
//! lets tests and simulations drive time by hand.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of physical time for a hybrid logical clock
pub trait WallClock {
    /// Returns the current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

impl<W: WallClock + ?Sized> WallClock for &W {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<W: WallClock + ?Sized> WallClock for Arc<W> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Operating system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now_millis(&self) -> u64 {
        // A host clock set before 1970 reads as the epoch; the HLC counter keeps us monotonic.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(saturating_millis)
            .unwrap_or_default()
    }
}

/// Whole milliseconds in `elapsed`, clamped to `u64::MAX`
fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Manually driven wall clock
///
/// Clones share the same underlying time, so a test can hold one handle while a clock owns
/// another.
///
/// # Example
/// ```rust
/// use hlclock::traits::{ManualClock, WallClock};
///
/// let time = ManualClock::new(1_000);
/// let handle = time.clone();
/// handle.advance(5);
/// assert_eq!(time.now_millis(), 1_005);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a manual clock reading `millis`
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    /// Sets the current time, which may move backwards
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Moves the current time forward by `delta` milliseconds
    pub fn advance(&self, delta: u64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl WallClock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
