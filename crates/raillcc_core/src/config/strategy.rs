//! Maintenance strategies
//!
//! A strategy fixes the grinding interval per rail and the shared
//! gauge-correction (tamping) interval, both in months.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Strategy for a single rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceStrategy {
    pub grinding_interval: u32,
    pub gauge_correction_interval: u32,
}

impl MaintenanceStrategy {
    pub fn new(grinding_interval: u32, gauge_correction_interval: u32) -> Self {
        Self {
            grinding_interval,
            gauge_correction_interval,
        }
    }
}

impl Default for MaintenanceStrategy {
    fn default() -> Self {
        Self::new(12, 48)
    }
}

/// Strategy for a two-rail track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackStrategy {
    pub grinding_interval_high: u32,
    pub grinding_interval_low: u32,
    pub gauge_correction_interval: u32,
}

impl TrackStrategy {
    pub fn new(
        grinding_interval_high: u32,
        grinding_interval_low: u32,
        gauge_correction_interval: u32,
    ) -> Self {
        Self {
            grinding_interval_high,
            grinding_interval_low,
            gauge_correction_interval,
        }
    }

    /// Both rails ground on the same interval
    pub fn uniform(grinding_interval: u32, gauge_correction_interval: u32) -> Self {
        Self::new(
            grinding_interval,
            grinding_interval,
            gauge_correction_interval,
        )
    }
}

impl Default for TrackStrategy {
    fn default() -> Self {
        Self::uniform(12, 48)
    }
}

/// Check a maintenance interval against the largest month it may reach
pub(crate) fn check_interval(name: &'static str, value: u32, max: u32) -> Result<(), ConfigError> {
    if value == 0 || value > max {
        Err(ConfigError::InvalidInterval { name, value, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_interval_bounds() {
        assert!(check_interval("grinding_interval", 1, 12).is_ok());
        assert!(check_interval("grinding_interval", 12, 12).is_ok());
        assert_eq!(
            check_interval("grinding_interval", 0, 12),
            Err(ConfigError::InvalidInterval {
                name: "grinding_interval",
                value: 0,
                max: 12
            })
        );
        assert!(check_interval("grinding_interval", 13, 12).is_err());
    }
}
