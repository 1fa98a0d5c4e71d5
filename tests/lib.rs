//! Common utilities and shared code for clock property tests
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Generators for timestamps, node ids and clock operations
//! - Helpers for building deterministic clocks and checking ordering

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use hlclock::prelude::*;
use proptest::prelude::*;

/// Standard proptest configuration for clock property tests
pub fn clock_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        timeout: 2000,
        ..ProptestConfig::default()
    }
}

/// Fewer, longer cases for multi-node simulations
pub fn simulation_config() -> ProptestConfig {
    ProptestConfig {
        cases: 32,
        max_shrink_iters: 100,
        timeout: 5000,
        ..ProptestConfig::default()
    }
}

/// Physical times in a realistic range of epoch milliseconds
pub fn physical_time_strategy() -> impl Strategy<Value = u64> {
    1_600_000_000_000u64..1_600_000_001_000
}

/// Any 16-bit counter value
pub fn counter_strategy() -> impl Strategy<Value = u16> {
    any::<u16>()
}

/// Node ids drawn from the generated-id alphabet
pub fn node_id_strategy() -> impl Strategy<Value = NodeId> {
    "[a-z0-9]{1,16}".prop_map(|id| NodeId::new(id).unwrap())
}

/// Arbitrary well-formed timestamps
pub fn timestamp_strategy() -> impl Strategy<Value = HlcTimestamp> {
    (physical_time_strategy(), counter_strategy(), node_id_strategy())
        .prop_map(|(time, counter, node)| HlcTimestamp::new(time, counter, node))
}

/// A step applied to a clock under test
#[derive(Debug, Clone)]
pub enum ClockOp {
    /// Local event
    Tick,
    /// Wall clock moves forward
    Advance(u64),
    /// Wall clock jumps backwards
    Rewind(u64),
    /// Remote timestamp arrives
    Receive(HlcTimestamp),
}

/// Generate clock operations, weighted toward ticks
pub fn clock_op_strategy() -> impl Strategy<Value = ClockOp> {
    prop_oneof![
        4 => Just(ClockOp::Tick),
        2 => (0u64..5).prop_map(ClockOp::Advance),
        1 => (0u64..5).prop_map(ClockOp::Rewind),
        2 => timestamp_strategy().prop_map(ClockOp::Receive),
    ]
}

/// Generate sequences of clock operations
pub fn operation_sequence_strategy() -> impl Strategy<Value = Vec<ClockOp>> {
    prop::collection::vec(clock_op_strategy(), 1..60)
}

/// Clock for node `id` reading a manual wall clock that starts at `millis`
pub fn manual_clock(millis: u64, id: &str) -> (ManualClock, HybridLogicalClock<DefaultConfig, ManualClock>) {
    let time = ManualClock::new(millis);
    let clock = HybridLogicalClock::with_node_id(time.clone(), NodeId::new(id).unwrap()).unwrap();
    (time, clock)
}

/// Clock for node `id` resumed from `(millis, counter)`, with wall time at `now`
pub fn resumed_clock(
    millis: u64,
    counter: u16,
    id: &str,
    now: u64,
) -> (ManualClock, HybridLogicalClock<DefaultConfig, ManualClock>) {
    let time = ManualClock::new(now);
    let last = HlcTimestamp::new(millis, counter, NodeId::new(id).unwrap());
    let clock = HybridLogicalClock::from_timestamp(time.clone(), last).unwrap();
    (time, clock)
}

/// Applies one operation, returning the timestamp it issued if any
pub fn apply<C: ClockConfig>(
    clock: &mut HybridLogicalClock<C, ManualClock>,
    time: &ManualClock,
    op: &ClockOp,
) -> Option<HlcTimestamp> {
    match op {
        ClockOp::Tick => Some(clock.tick().unwrap()),
        ClockOp::Advance(delta) => {
            time.advance(*delta);
            None
        }
        ClockOp::Rewind(delta) => {
            time.set(time.now_millis().saturating_sub(*delta));
            None
        }
        ClockOp::Receive(remote) => Some(clock.observe(remote).unwrap()),
    }
}

/// True if every timestamp is logically later than the one before it
pub fn assert_strictly_increasing(stamps: &[HlcTimestamp]) -> bool {
    stamps.windows(2).all(|pair| pair[0].happens_before(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_increasing_helper() {
        let node = NodeId::new("n1").unwrap();
        let a = HlcTimestamp::new(1, 0, node.clone());
        let b = HlcTimestamp::new(1, 1, node.clone());
        let c = HlcTimestamp::new(2, 0, node);

        assert!(assert_strictly_increasing(&[a.clone(), b.clone(), c]));
        assert!(!assert_strictly_increasing(&[b, a]));
    }

    #[test]
    fn test_apply_moves_manual_time() {
        let (time, mut clock) = manual_clock(100, "n1");
        assert!(apply(&mut clock, &time, &ClockOp::Advance(3)).is_none());
        assert_eq!(time.now_millis(), 103);
        assert!(apply(&mut clock, &time, &ClockOp::Rewind(200)).is_none());
        assert_eq!(time.now_millis(), 0);
        assert_eq!(apply(&mut clock, &time, &ClockOp::Tick).unwrap().physical_time(), 100);
    }
}
