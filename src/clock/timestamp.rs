//! Hybrid logical clock timestamps

use core::cmp::Ordering;

use crate::node::NodeId;

/// A point in hybrid logical time
///
/// Ordered by physical time, then logical counter, then node id. The node id only separates
/// timestamps that two different nodes issued for the same `(physical_time, counter)` pair.
///
/// # Example
/// ```rust
/// use hlclock::clock::HlcTimestamp;
/// use hlclock::node::NodeId;
///
/// let n1 = NodeId::new("n1")?;
/// let earlier = HlcTimestamp::new(100, 7, n1.clone());
/// let later = HlcTimestamp::new(101, 0, n1);
/// assert!(earlier < later);
/// assert!(earlier.happens_before(&later));
/// # Ok::<(), hlclock::error::ClockError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HlcTimestamp {
    physical_time: u64,
    counter: u16,
    node_id: NodeId,
}

impl HlcTimestamp {
    /// Creates a timestamp from its parts
    pub fn new(physical_time: u64, counter: u16, node_id: NodeId) -> Self {
        Self {
            physical_time,
            counter,
            node_id,
        }
    }

    /// Milliseconds since the Unix epoch
    pub const fn physical_time(&self) -> u64 {
        self.physical_time
    }

    /// Logical counter within the physical millisecond
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// Id of the node that issued this timestamp
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// Compares `(physical_time, counter)` only, ignoring node ids
    pub fn logical_cmp(&self, other: &Self) -> Ordering {
        (self.physical_time, self.counter).cmp(&(other.physical_time, other.counter))
    }

    /// Returns true if this timestamp is strictly earlier in logical time than `other`
    pub fn happens_before(&self, other: &Self) -> bool {
        self.logical_cmp(other) == Ordering::Less
    }

    /// Returns true if both timestamps carry the same logical time but come from different nodes
    pub fn is_concurrent(&self, other: &Self) -> bool {
        self.logical_cmp(other) == Ordering::Equal && self.node_id != other.node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    #[test]
    fn test_physical_time_dominates() {
        let a = HlcTimestamp::new(100, 0xFFFF, id("zz"));
        let b = HlcTimestamp::new(101, 0, id("aa"));
        assert!(a < b);
        assert!(a.happens_before(&b));
    }

    #[test]
    fn test_counter_breaks_time_ties() {
        let a = HlcTimestamp::new(100, 3, id("zz"));
        let b = HlcTimestamp::new(100, 4, id("aa"));
        assert!(a < b);
    }

    #[test]
    fn test_node_id_breaks_remaining_ties() {
        let a = HlcTimestamp::new(100, 3, id("n1"));
        let b = HlcTimestamp::new(100, 3, id("n2"));
        assert!(a < b);
        assert!(!a.happens_before(&b));
        assert!(a.is_concurrent(&b));
        assert!(!a.is_concurrent(&a));
        assert_eq!(a.logical_cmp(&b), Ordering::Equal);
    }
}
