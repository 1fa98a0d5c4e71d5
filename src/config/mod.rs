//! Clock configuration module
//!
//! Clock behavior is configured at compile time through the [`ClockConfig`] trait, so a
//! clock's overflow and drift rules are part of its type.

pub mod clock;
pub mod macros;
pub mod validation;

// Re-export main types
pub use clock::{ClockConfig, DefaultConfig, OverflowPolicy};
pub use macros::define_clock_config;
pub use validation::ConfigValidator;
