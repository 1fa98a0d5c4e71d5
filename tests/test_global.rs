//! Tests for the process-wide clock
//!
//! Everything runs in one test so the shared clock is observed in a known order.

use hlclock::clock::global;
use hlclock::prelude::*;

#[test]
fn global_clock_lifecycle() {
    assert_eq!(global::tick(), Err(ClockError::UninitializedClock));
    assert_eq!(global::merge("1:0000:n2"), Err(ClockError::UninitializedClock));
    assert_eq!(global::node_id(), Err(ClockError::UninitializedClock));

    let node_id = global::init().unwrap();
    assert_eq!(node_id.len(), DefaultConfig::NODE_ID_LENGTH);
    assert_eq!(global::node_id().unwrap(), node_id);

    let first: HlcTimestamp = global::tick().unwrap().parse().unwrap();
    let second: HlcTimestamp = global::merge(&first.to_string()).unwrap().parse().unwrap();
    assert!(first.happens_before(&second));
    assert_eq!(second.node_id(), &node_id);

    assert!(matches!(
        global::merge("not-a-clock"),
        Err(ClockError::InvalidClockFormat(_))
    ));

    let replaced = global::install(
        HybridLogicalClock::with_node_id(SystemClock, NodeId::new("fixed").unwrap()).unwrap(),
    );
    assert_eq!(replaced.as_str(), "fixed");
    assert!(global::tick().unwrap().ends_with(":fixed"));
}
