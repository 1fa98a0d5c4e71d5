//! Pluggable seams of the clock
//!
//! A clock depends on two things outside of itself: a reading of physical time and a source
//! of node identifiers. Both are injected through the traits defined here.

pub mod node_id;
pub mod wall_clock;

// Re-export main traits
pub use node_id::NodeIdSource;
pub use wall_clock::{ManualClock, SystemClock, WallClock};
