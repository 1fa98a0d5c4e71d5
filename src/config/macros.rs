//! Clock configuration macros
//!
//! This module provides the `define_clock_config!` macro for easy creation
//! of custom clock configurations.

/// Macro to define a custom clock configuration
///
/// Creates a unit struct implementing [`ClockConfig`](crate::config::ClockConfig).
/// Omitted fields take the [`DefaultConfig`](crate::config::DefaultConfig) values.
///
/// # Example
///
/// ```rust
/// use hlclock::config::{ClockConfig, OverflowPolicy, define_clock_config};
///
/// define_clock_config! {
///     name: ReplicaConfig,
///     node_id_length: 12,
///     overflow_policy: OverflowPolicy::Reject,
///     max_drift_ms: Some(30_000),
/// }
///
/// assert!(ReplicaConfig::validate().is_ok());
/// ```
#[macro_export]
macro_rules! define_clock_config {
    (
        name: $name:ident
        $(, node_id_length: $length:expr)?
        $(, overflow_policy: $policy:expr)?
        $(, max_drift_ms: $drift:expr)?
        $(,)?
    ) => {
        /// Custom clock configuration
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $crate::config::ClockConfig for $name {
            const NODE_ID_LENGTH: usize = $crate::define_clock_config!(@default $($length)?, 8);
            const OVERFLOW_POLICY: $crate::config::OverflowPolicy = $crate::define_clock_config!(
                @default $($policy)?, $crate::config::OverflowPolicy::AdvancePhysical
            );
            const MAX_DRIFT_MS: Option<u64> = $crate::define_clock_config!(@default $($drift)?, None);
        }
    };

    // Helper macro for default values
    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

// Re-export the macro for convenience
pub use define_clock_config;
