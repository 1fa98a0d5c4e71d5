//! Thread-safe clock handle
//!
//! Tick and merge are not reentrant. [`SharedClock`] serializes them behind a mutex so one
//! clock can be used from many threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::{HlcTimestamp, HybridLogicalClock};
use crate::config::{ClockConfig, DefaultConfig};
use crate::error::ClockResult;
use crate::node::NodeId;
use crate::traits::{SystemClock, WallClock};

/// Cloneable, mutex-guarded handle to a [`HybridLogicalClock`]
///
/// All clones advance the same clock.
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
/// use std::thread;
///
/// let clock = SharedClock::new(HybridLogicalClock::new()?);
/// let worker = clock.clone();
/// let remote = thread::spawn(move || worker.tick()).join().unwrap()?;
/// assert!(clock.tick()? > remote);
/// # Ok::<(), hlclock::error::ClockError>(())
/// ```
#[derive(Debug)]
pub struct SharedClock<C: ClockConfig = DefaultConfig, W: WallClock = SystemClock> {
    inner: Arc<Mutex<HybridLogicalClock<C, W>>>,
}

impl<C: ClockConfig, W: WallClock> Clone for SharedClock<C, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ClockConfig, W: WallClock> From<HybridLogicalClock<C, W>> for SharedClock<C, W> {
    fn from(clock: HybridLogicalClock<C, W>) -> Self {
        Self::new(clock)
    }
}

impl<C: ClockConfig, W: WallClock> SharedClock<C, W> {
    /// Wraps a clock for shared use
    pub fn new(clock: HybridLogicalClock<C, W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(clock)),
        }
    }

    /// See [`HybridLogicalClock::tick`]
    pub fn tick(&self) -> ClockResult<HlcTimestamp> {
        self.lock().tick()
    }

    /// See [`HybridLogicalClock::merge`]
    pub fn merge(&self, remote: &str) -> ClockResult<HlcTimestamp> {
        self.lock().merge(remote)
    }

    /// See [`HybridLogicalClock::observe`]
    pub fn observe(&self, remote: &HlcTimestamp) -> ClockResult<HlcTimestamp> {
        self.lock().observe(remote)
    }

    /// Returns the last issued timestamp
    pub fn current(&self) -> HlcTimestamp {
        self.lock().current().clone()
    }

    /// Returns the id of the node owning the clock
    pub fn node_id(&self) -> NodeId {
        self.lock().node_id().clone()
    }

    // Clock operations commit with a single assignment, so a panic elsewhere while the lock
    // was held cannot leave a half-written state behind.
    fn lock(&self) -> MutexGuard<'_, HybridLogicalClock<C, W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ManualClock;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_concurrent_ticks_are_unique() {
        let time = ManualClock::new(1_000);
        let clock = SharedClock::new(
            HybridLogicalClock::<DefaultConfig, _>::with_node_id(time, NodeId::new("n1").unwrap())
                .unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = clock.clone();
                thread::spawn(move || (0..100).map(|_| clock.tick().unwrap()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            let stamps = handle.join().unwrap();
            // Each thread observes its own stamps in increasing order.
            assert!(stamps.windows(2).all(|w| w[0] < w[1]));
            seen.extend(stamps);
        }

        assert_eq!(seen.len(), 400);
        assert_eq!(clock.current().counter(), 400);
    }

    #[test]
    fn test_clones_share_state() {
        let clock = SharedClock::from(
            HybridLogicalClock::<DefaultConfig, _>::with_node_id(
                ManualClock::new(5),
                NodeId::new("n1").unwrap(),
            )
            .unwrap(),
        );
        let other = clock.clone();

        other.merge("5:0009:n2").unwrap();
        assert_eq!(clock.current().to_string(), "5:000A:n1");
        assert_eq!(clock.node_id().as_str(), "n1");
    }
}
