//! Configuration validation utilities

use crate::config::ClockConfig;
use crate::error::{ClockError, ClockResult};

/// Configuration validator for runtime verification
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a clock configuration, converting failures into [`ClockError`]
    pub fn validate<C: ClockConfig>() -> ClockResult<()> {
        C::validate().map_err(ClockError::InvalidConfiguration)
    }

    /// Checks that a remote physical time is within the configured drift of `now`
    pub fn check_drift<C: ClockConfig>(remote: u64, now: u64) -> ClockResult<()> {
        match C::MAX_DRIFT_MS {
            Some(max_drift) if remote > now.saturating_add(max_drift) => Err(ClockError::ClockSkew {
                remote,
                now,
                max_drift,
            }),
            _ => Ok(()),
        }
    }
}
