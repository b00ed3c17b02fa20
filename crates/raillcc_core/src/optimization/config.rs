//! Search-space types for strategy optimization

use serde::{Deserialize, Serialize};

use crate::config::TrackStrategy;
use crate::error::ConfigError;

/// Inclusive range of maintenance intervals in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRange {
    pub min: u32,
    pub max: u32,
    #[serde(default = "default_step")]
    pub step: u32,
}

fn default_step() -> u32 {
    1
}

impl IntervalRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max, step: 1 }
    }

    /// A range holding exactly one interval
    pub fn single(interval: u32) -> Self {
        Self::new(interval, interval)
    }

    #[must_use]
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + use<> {
        (self.min..=self.max).step_by(self.step.max(1) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub(crate) fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::InvalidInterval {
                name,
                value: 0,
                max: self.max,
            });
        }
        if self.step == 0 {
            return Err(ConfigError::InvalidParameter {
                name,
                value: 0.0,
                reason: "step must be at least one month",
            });
        }
        if self.is_empty() {
            return Err(ConfigError::EmptySearchSpace);
        }
        Ok(())
    }
}

impl Default for IntervalRange {
    /// Grinding intervals of one to twelve months
    fn default() -> Self {
        Self::new(1, 12)
    }
}

/// Strategies explored by [`optimize_strategy`](super::optimize_strategy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySpace {
    pub grinding_high: IntervalRange,
    pub grinding_low: IntervalRange,
    pub gauge_correction: IntervalRange,
}

impl Default for StrategySpace {
    fn default() -> Self {
        Self {
            grinding_high: IntervalRange::default(),
            grinding_low: IntervalRange::default(),
            gauge_correction: IntervalRange::new(12, 60).with_step(12),
        }
    }
}

impl StrategySpace {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.grinding_high.validate("grinding_interval_high")?;
        self.grinding_low.validate("grinding_interval_low")?;
        self.gauge_correction.validate("gauge_correction_interval")
    }

    /// Every strategy in the space, gauge correction varying slowest
    pub fn strategies(&self) -> Vec<TrackStrategy> {
        let mut strategies = Vec::new();
        for gauge in self.gauge_correction.iter() {
            for high in self.grinding_high.iter() {
                for low in self.grinding_low.iter() {
                    strategies.push(TrackStrategy::new(high, low, gauge));
                }
            }
        }
        strategies
    }
}
