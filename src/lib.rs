#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Hybrid Logical Clock**
//!
//! hlclock issues timestamps for events on nodes that share no perfectly synchronized wall
//! clock. Timestamps are totally ordered, track physical time closely, and respect causality:
//! an event that caused another always sorts before it.
//!
//! A timestamp combines milliseconds since the Unix epoch, a 16-bit logical counter that
//! orders events within the same millisecond, and the id of the node that issued it. On the
//! wire it is a short string:
//!
//! ```not_rust
//! 1700000000000:0001:ab12cd34
//! ```
//!
//! ## Features
//!
//! - **Local events** - [`HybridLogicalClock::tick`] advances the clock for an event that
//!   originated on this node
//! - **Remote events** - [`HybridLogicalClock::merge`] folds in a timestamp received from
//!   another node
//! - **Typed errors** - malformed input, overflow and skew are reported as [`ClockError`],
//!   never swallowed
//! - **Pluggable sources** - wall time and node id generation are injected through
//!   [`traits`]
//! - **Compile-time configuration** - overflow policy and drift bound via [`ClockConfig`]
//!
//! ### Serialization Features
//! - `serde` - serializes [`HlcTimestamp`] as its canonical string
//!
//! ## Quick Start
//!
//! ```rust
//! use hlclock::prelude::*;
//!
//! fn example() -> Result<(), ClockError> {
//!     let mut alice = HybridLogicalClock::new()?;
//!     let mut bob = HybridLogicalClock::new()?;
//!
//!     // Alice timestamps an event and sends it to Bob
//!     let sent = alice.tick()?;
//!     let received = bob.merge(&sent.to_string())?;
//!
//!     // Bob's clock now sorts after the event that caused it
//!     assert!(sent.happens_before(&received));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! [`HybridLogicalClock::tick`]: crate::clock::HybridLogicalClock::tick
//! [`HybridLogicalClock::merge`]: crate::clock::HybridLogicalClock::merge
//! [`ClockError`]: crate::error::ClockError
//! [`ClockConfig`]: crate::config::ClockConfig
//! [`HlcTimestamp`]: crate::clock::HlcTimestamp

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core infrastructure modules
pub mod config;
pub mod error;
pub mod traits;

// Clock modules
pub mod clock;
pub mod node;

// Configuration presets
pub mod configs;

/// Prelude module of hlclock
///
/// Convenient re-exports for common hlclock types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export configuration
    pub use crate::config::{ClockConfig, DefaultConfig, OverflowPolicy, define_clock_config};

    // Re-export error types
    pub use crate::error::{ClockError, ClockResult, FormatError};

    // Re-export clock types
    pub use crate::clock::{HlcTimestamp, HybridLogicalClock, SharedClock};

    // Re-export node id types
    pub use crate::node::{NodeId, RngNodeIds};

    // Re-export configuration presets
    pub use crate::configs::*;
}
