//! Error handling module for hlclock
//!
//! Every clock operation reports failure through [`ClockError`]. Nothing is logged and
//! swallowed: a caller either receives an advanced timestamp or a typed error.

pub mod format;
pub mod types;

// Re-export main types
pub use format::FormatError;
pub use types::{ClockError, ClockResult};
