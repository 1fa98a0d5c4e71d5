//! Clock configuration trait and default implementation

/// What a clock does when the logical counter would exceed 16 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Move physical time forward by one millisecond and restart the counter at zero
    #[default]
    AdvancePhysical,
    /// Fail the operation with [`ClockError::CounterOverflow`](crate::error::ClockError)
    Reject,
}

/// Compile-time configuration for a [`HybridLogicalClock`]
///
/// [`HybridLogicalClock`]: crate::clock::HybridLogicalClock
pub trait ClockConfig: Clone {
    /// Length of node ids generated for new clocks
    const NODE_ID_LENGTH: usize;

    /// Behavior when more than 65536 events share one millisecond
    const OVERFLOW_POLICY: OverflowPolicy;

    /// Largest distance a remote clock may be ahead of local wall time, if bounded
    const MAX_DRIFT_MS: Option<u64>;

    /// Validates that the configuration is consistent and within bounds
    fn validate() -> Result<(), &'static str> {
        if Self::NODE_ID_LENGTH == 0 {
            return Err("NODE_ID_LENGTH must be at least 1");
        }

        if Self::NODE_ID_LENGTH > 64 {
            return Err("NODE_ID_LENGTH cannot exceed 64");
        }

        if let Some(0) = Self::MAX_DRIFT_MS {
            return Err("MAX_DRIFT_MS must be greater than 0 when set");
        }

        Ok(())
    }
}

/// Default configuration: 8-character node ids, overflow rolls into the next
/// millisecond, no drift bound
#[derive(Debug, Clone, Copy)]
pub struct DefaultConfig;

impl Default for DefaultConfig {
    fn default() -> Self {
        Self
    }
}

impl ClockConfig for DefaultConfig {
    const NODE_ID_LENGTH: usize = 8;
    const OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::AdvancePhysical;
    const MAX_DRIFT_MS: Option<u64> = None;
}
