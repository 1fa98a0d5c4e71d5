//! Clock module
//!
//! This module provides the [`HlcTimestamp`] value, its canonical codec, and the
//! [`HybridLogicalClock`] that issues timestamps. [`SharedClock`] and [`global`] wrap a clock
//! for concurrent and process-wide use.

pub mod codec;
pub mod global;
pub mod hlc;
pub mod shared;
pub mod timestamp;

// Re-export main types
pub use codec::{parse, serialize};
pub use hlc::HybridLogicalClock;
pub use shared::SharedClock;
pub use timestamp::HlcTimestamp;
