//! Core error types for hlclock
//!
//! This module defines the main error type used throughout the library.

use crate::error::FormatError;

/// Main error type for clock operations
///
/// Both [`tick`] and [`merge`] leave the clock untouched when they return one of these.
///
/// [`tick`]: crate::clock::HybridLogicalClock::tick
/// [`merge`]: crate::clock::HybridLogicalClock::merge
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// A serialized clock did not match `<millis>:<hex counter>:<node id>`
    #[error("invalid clock format: {0}")]
    InvalidClockFormat(#[from] FormatError),

    /// The process-wide clock was used before [`init`](crate::clock::global::init)
    #[error("clock used before initialization")]
    UninitializedClock,

    /// The logical counter would exceed 16 bits within one millisecond
    #[error("logical counter overflow within a single millisecond")]
    CounterOverflow,

    /// A remote clock is further ahead of local wall time than the configured drift allows
    #[error("remote clock {remote}ms is more than {max_drift}ms ahead of local time {now}ms")]
    ClockSkew {
        /// Physical time carried by the remote clock
        remote: u64,
        /// Local wall clock reading at the time of the merge
        now: u64,
        /// Configured drift bound
        max_drift: u64,
    },

    /// A node id was empty or contained the `:` separator
    #[error("invalid node id")]
    InvalidNodeId,

    /// A clock configuration failed validation
    #[error("invalid clock configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl ClockError {
    /// Returns true if the clock remains usable after this error
    ///
    /// Configuration and initialization errors mean there is no usable clock at all.
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::UninitializedClock | Self::InvalidConfiguration(_) => false,

            Self::InvalidClockFormat(_)
            | Self::CounterOverflow
            | Self::ClockSkew { .. }
            | Self::InvalidNodeId => true,
        }
    }

    /// Returns true if the error was caused by input received from another node
    pub const fn is_remote_input(&self) -> bool {
        matches!(self, Self::InvalidClockFormat(_) | Self::ClockSkew { .. })
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidClockFormat(_) | Self::InvalidNodeId => "Codec",
            Self::UninitializedClock | Self::InvalidConfiguration(_) => "Lifecycle",
            Self::CounterOverflow | Self::ClockSkew { .. } => "Clock",
        }
    }
}

/// Result type for clock operations
pub type ClockResult<T> = Result<T, ClockError>;
