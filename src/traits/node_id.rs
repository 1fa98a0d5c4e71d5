//! Node identifier generation strategy

use crate::error::ClockResult;
use crate::node::NodeId;

/// Strategy producing node identifiers for new clocks
///
/// A clock consults its source once, at construction.
pub trait NodeIdSource {
    /// Generates an identifier of exactly `length` characters from
    /// [`NODE_ID_ALPHABET`](crate::node::NODE_ID_ALPHABET)
    fn generate(&mut self, length: usize) -> ClockResult<NodeId>;
}

impl<S: NodeIdSource + ?Sized> NodeIdSource for &mut S {
    fn generate(&mut self, length: usize) -> ClockResult<NodeId> {
        (**self).generate(length)
    }
}
