//! Hybrid Logical Clock state machine
//!
//! A [`HybridLogicalClock`] owns the latest timestamp it issued and advances it in exactly two
//! ways: [`tick`] for a locally originated event and [`merge`] when a timestamp arrives from
//! another node. Both return the new timestamp, which the caller transmits or persists.
//!
//! ```not_rust
//!  tick()                         merge(remote)
//!    |                                 |
//!  now > last?                  now > last and now > remote?
//!    |                                 |
//!  yes-+-no                      yes---+---no
//!   |     |                       |         |
//! (now,0) (last,c+1)           (now,0)   last == remote?  -> (last, max(c, rc) + 1)
//!                                        remote > last?   -> (remote, rc + 1)
//!                                        otherwise        -> (last, c + 1)
//! ```
//!
//! [`tick`]: HybridLogicalClock::tick
//! [`merge`]: HybridLogicalClock::merge

use core::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::clock::HlcTimestamp;
use crate::clock::codec;
use crate::config::{ClockConfig, ConfigValidator, DefaultConfig, OverflowPolicy};
use crate::error::{ClockError, ClockResult};
use crate::node::{NodeId, RngNodeIds};
use crate::traits::{NodeIdSource, SystemClock, WallClock};

/// Hybrid Logical Clock
///
/// Issues timestamps that strictly increase across every [`tick`](Self::tick) and
/// [`merge`](Self::merge) on the same instance, and that sort after every remote timestamp
/// merged into it.
///
/// # Type Parameters
/// - `C`: Clock configuration (node id length, overflow policy, drift bound)
/// - `W`: Source of physical time
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let mut clock = HybridLogicalClock::new()?;
/// let first = clock.tick()?;
/// let second = clock.tick()?;
/// assert!(first < second);
///
/// // A timestamp received from another node
/// let after = clock.merge("1700000000000:0001:ab12cd34")?;
/// assert!(second < after);
/// assert_eq!(after.node_id(), clock.node_id());
/// # Ok::<(), hlclock::error::ClockError>(())
/// ```
#[derive(Debug)]
pub struct HybridLogicalClock<C: ClockConfig = DefaultConfig, W: WallClock = SystemClock> {
    /// Last issued timestamp
    state: HlcTimestamp,

    /// Physical time source
    wall_clock: W,

    _config: PhantomData<C>,
}

impl HybridLogicalClock {
    /// Creates a clock on the system wall clock with a fresh node id from the OS RNG
    pub fn new() -> ClockResult<Self> {
        Self::with_config()
    }
}

impl<C: ClockConfig> HybridLogicalClock<C, SystemClock> {
    /// Creates a clock with configuration `C` on the system wall clock
    pub fn with_config() -> ClockResult<Self> {
        Self::with_sources(SystemClock, RngNodeIds::os())
    }
}

impl<C: ClockConfig, W: WallClock> HybridLogicalClock<C, W> {
    /// Creates a clock reading `wall_clock` and taking its id from `node_ids`
    ///
    /// The id is `C::NODE_ID_LENGTH` characters long.
    pub fn with_sources<S: NodeIdSource>(wall_clock: W, mut node_ids: S) -> ClockResult<Self> {
        let node_id = node_ids.generate(C::NODE_ID_LENGTH)?;
        Self::with_node_id(wall_clock, node_id)
    }

    /// Creates a clock for a node whose id was assigned elsewhere
    pub fn with_node_id(wall_clock: W, node_id: NodeId) -> ClockResult<Self> {
        let now = wall_clock.now_millis();
        Self::from_timestamp(wall_clock, HlcTimestamp::new(now, 0, node_id))
    }

    /// Resumes a clock from a previously issued timestamp
    ///
    /// The next timestamp will sort after `last`, even if the wall clock is now behind it.
    pub fn from_timestamp(wall_clock: W, last: HlcTimestamp) -> ClockResult<Self> {
        ConfigValidator::validate::<C>()?;
        debug!(
            node_id = %last.node_id(),
            physical_time = last.physical_time(),
            counter = last.counter(),
            "hybrid logical clock initialized"
        );
        Ok(Self {
            state: last,
            wall_clock,
            _config: PhantomData,
        })
    }

    /// Advances the clock for a local event and returns the new timestamp
    ///
    /// Fails only with [`ClockError::CounterOverflow`]: under [`OverflowPolicy::Reject`] when the
    /// counter is exhausted, or under [`OverflowPolicy::AdvancePhysical`] when physical time is
    /// already `u64::MAX`. The clock is unchanged in either case.
    pub fn tick(&mut self) -> ClockResult<HlcTimestamp> {
        let now = self.wall_clock.now_millis();
        let last = &self.state;

        let (physical_time, counter) = if now > last.physical_time() {
            (now, 0)
        } else {
            Self::increment(last.physical_time(), last.counter())?
        };

        Ok(self.commit(physical_time, counter, "tick"))
    }

    /// Advances the clock on receipt of a serialized remote timestamp
    ///
    /// Malformed input fails with [`ClockError::InvalidClockFormat`] before the clock is
    /// touched.
    pub fn merge(&mut self, remote: &str) -> ClockResult<HlcTimestamp> {
        let remote = codec::parse(remote).inspect_err(|err| {
            warn!(
                input_len = remote.len(),
                input_prefix = log_prefix(remote),
                error = %err,
                "rejected malformed remote clock"
            );
        })?;
        self.observe(&remote)
    }

    /// Advances the clock on receipt of an already parsed remote timestamp
    ///
    /// The result keeps this clock's node id; the remote id is never adopted.
    ///
    /// Fails with [`ClockError::ClockSkew`] when the remote is beyond the configured drift, or
    /// with [`ClockError::CounterOverflow`] under the same conditions as [`tick`](Self::tick).
    /// The clock is unchanged on failure.
    pub fn observe(&mut self, remote: &HlcTimestamp) -> ClockResult<HlcTimestamp> {
        let now = self.wall_clock.now_millis();
        ConfigValidator::check_drift::<C>(remote.physical_time(), now).inspect_err(|err| {
            warn!(remote = %remote, now, error = %err, "rejected remote clock");
        })?;

        let last = &self.state;
        let (physical_time, counter) =
            if now > last.physical_time() && now > remote.physical_time() {
                (now, 0)
            } else if last.physical_time() == remote.physical_time() {
                Self::increment(last.physical_time(), last.counter().max(remote.counter()))?
            } else if remote.physical_time() > last.physical_time() {
                Self::increment(remote.physical_time(), remote.counter())?
            } else {
                Self::increment(last.physical_time(), last.counter())?
            };

        Ok(self.commit(physical_time, counter, "merge"))
    }

    /// Returns the last issued timestamp without advancing the clock
    pub fn current(&self) -> &HlcTimestamp {
        &self.state
    }

    /// Returns the id of the node owning this clock
    pub fn node_id(&self) -> &NodeId {
        self.state.node_id()
    }

    /// Returns the physical component of the last issued timestamp
    pub fn physical_time(&self) -> u64 {
        self.state.physical_time()
    }

    /// Returns the logical counter of the last issued timestamp
    pub fn counter(&self) -> u16 {
        self.state.counter()
    }

    /// Returns the wall clock this clock reads
    pub fn wall_clock(&self) -> &W {
        &self.wall_clock
    }

    /// Next `(physical_time, counter)` after `counter` within `physical_time`
    fn increment(physical_time: u64, counter: u16) -> ClockResult<(u64, u16)> {
        if let Some(next) = counter.checked_add(1) {
            return Ok((physical_time, next));
        }

        match C::OVERFLOW_POLICY {
            OverflowPolicy::AdvancePhysical => {
                warn!(physical_time, "logical counter exhausted, advancing physical time");
                physical_time
                    .checked_add(1)
                    .map(|next| (next, 0))
                    .ok_or(ClockError::CounterOverflow)
            }
            OverflowPolicy::Reject => {
                warn!(physical_time, "logical counter exhausted");
                Err(ClockError::CounterOverflow)
            }
        }
    }

    fn commit(&mut self, physical_time: u64, counter: u16, operation: &'static str) -> HlcTimestamp {
        self.state = HlcTimestamp::new(physical_time, counter, self.state.node_id().clone());
        trace!(
            operation,
            physical_time,
            counter,
            node_id = %self.state.node_id(),
            "clock advanced"
        );
        self.state.clone()
    }
}

/// Characters of untrusted input echoed into logs
const LOGGED_INPUT_CHARS: usize = 32;

fn log_prefix(input: &str) -> &str {
    input
        .char_indices()
        .nth(LOGGED_INPUT_CHARS)
        .map_or(input, |(end, _)| &input[..end])
}
