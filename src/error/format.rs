//! Codec error details
//!
//! Describes which part of a serialized clock was rejected by the parser.

/// The reason a serialized clock value could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The text did not split into exactly three `:`-separated fields
    #[error("expected 3 fields separated by ':', found {0}")]
    FieldCount(usize),
    /// The physical time field is not a base-10 integer fitting in 64 bits
    #[error("physical time is not a decimal millisecond value")]
    PhysicalTime,
    /// The counter field is not 1 to 4 hexadecimal digits
    #[error("counter is not a hexadecimal value of at most 4 digits")]
    Counter,
    /// The node id field is empty
    #[error("node id is empty")]
    NodeId,
}

impl FormatError {
    /// Returns the name of the offending field
    pub const fn field(&self) -> &'static str {
        match self {
            Self::FieldCount(_) => "clock",
            Self::PhysicalTime => "physical_time",
            Self::Counter => "counter",
            Self::NodeId => "node_id",
        }
    }
}
