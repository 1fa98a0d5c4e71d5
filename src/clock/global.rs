//! Process-wide clock
//!
//! For hosts that want a single clock per process without threading a handle through their
//! code. These functions speak the wire format directly: they return the serialized clock
//! that the caller sends along with a message or persists.
//!
//! ```rust
//! use hlclock::clock::{HlcTimestamp, global};
//!
//! global::init()?;
//! let stamp = global::tick()?;
//! let after = global::merge(&stamp)?;
//! assert!(after.parse::<HlcTimestamp>()? > stamp.parse::<HlcTimestamp>()?);
//! # Ok::<(), hlclock::error::ClockError>(())
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::clock::HybridLogicalClock;
use crate::error::{ClockError, ClockResult};
use crate::node::NodeId;

static CLOCK: Mutex<Option<HybridLogicalClock>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<HybridLogicalClock>> {
    CLOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_clock<T>(f: impl FnOnce(&mut HybridLogicalClock) -> ClockResult<T>) -> ClockResult<T> {
    let mut guard = lock();
    let clock = guard.as_mut().ok_or(ClockError::UninitializedClock)?;
    f(clock)
}

/// Creates the process-wide clock with a fresh node id and returns that id
///
/// Calling it again replaces the clock and discards its state; only do so at process start.
pub fn init() -> ClockResult<NodeId> {
    Ok(install(HybridLogicalClock::new()?))
}

/// Installs an already constructed clock as the process-wide clock
pub fn install(clock: HybridLogicalClock) -> NodeId {
    let node_id = clock.node_id().clone();
    *lock() = Some(clock);
    node_id
}

/// Advances the process-wide clock for a local event
pub fn tick() -> ClockResult<String> {
    with_clock(|clock| clock.tick()).map(|ts| ts.to_string())
}

/// Advances the process-wide clock on receipt of a serialized remote clock
pub fn merge(remote: &str) -> ClockResult<String> {
    with_clock(|clock| clock.merge(remote)).map(|ts| ts.to_string())
}

/// Returns the node id of the process-wide clock
pub fn node_id() -> ClockResult<NodeId> {
    with_clock(|clock| Ok(clock.node_id().clone()))
}
