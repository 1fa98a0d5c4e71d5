//! Configuration presets module
//!
//! This module provides pre-defined clock configurations for common deployments.

use crate::config::{OverflowPolicy, define_clock_config};

// Replicated stores that must never fabricate physical time
define_clock_config! {
    name: StrictConfig,
    node_id_length: 8,
    overflow_policy: OverflowPolicy::Reject,
    max_drift_ms: Some(60_000),
}

// Large fleets where 8 characters of id leave too much room for collisions
define_clock_config! {
    name: LongIdConfig,
    node_id_length: 16,
}

// Networks with well-synchronized clocks, where a far-future remote indicates a bad peer
define_clock_config! {
    name: BoundedDriftConfig,
    max_drift_ms: Some(5_000),
}
