//! Engine configuration
//!
//! [`LccParameters`] holds every cost constant and model option the engine
//! recognizes. It is an immutable value passed into every entry point; the
//! defaults reproduce the reference case (1 km of MB4 track on a 1465 m
//! curve, 30-year technical life, 4% discount rate).
//!
//! ```ignore
//! use raillcc_core::config::LccParameters;
//!
//! let params = LccParameters::default()
//!     .with_track_length(2_000.0)
//!     .with_technical_life(40)
//!     .with_discount_rate(0.035);
//! params.validate()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::interpolation::GaugeBoundary;

mod strategy;
mod track;

pub(crate) use strategy::check_interval;
pub use strategy::{MaintenanceStrategy, TrackStrategy};
pub use track::{RailSpec, TrackSpec};

/// Longest technical life the engine accepts (years)
pub const MAX_TECHNICAL_LIFE_YEARS: u32 = 1_000;

/// Cost constants and model options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LccParameters {
    // === Economics ===
    /// Annual discount rate for present values
    pub discount_rate: f64,
    /// Length of the analysed track section (m)
    pub track_length_m: f64,
    /// Technical life of the track; the simulation horizon (years)
    pub technical_life_years: u32,
    /// Cost of one hour of track possession (currency/h)
    pub capacity_cost_per_hour: f64,

    // === Maintenance ===
    pub grinding_cost_per_m: f64,
    pub tamping_cost_per_m: f64,
    pub grinding_possession_hours: f64,
    pub tamping_possession_hours: f64,
    /// Milling cost relative to one grinding pass
    pub milling_cost_factor: f64,
    pub milling_possession_hours: f64,

    // === Renewal ===
    /// Material and work for a single rail (currency/m)
    pub rail_renewal_cost_per_m: f64,
    /// Full track renewal, rails and sleepers (currency/m)
    pub track_renewal_cost_per_m: f64,
    /// New rail laid per possession hour (m/h)
    pub new_rail_laying_rate_m_per_hour: f64,

    // === Thresholds and track geometry ===
    /// Index (H) level at which a rail is due for renewal
    pub index_threshold: f64,
    /// RCF residual level that triggers milling
    pub rcf_threshold: f64,
    /// Gauge after construction and after each correction (mm)
    pub initial_gauge: f64,
    /// Gauge widening rate (mm/year)
    pub gauge_widening_per_year: f64,
    /// Annual traffic (million gross tonnes)
    pub annual_mgt: f64,

    // === Model options ===
    /// Subtract the natural-wear increment from the grinding-month index growth
    pub subtract_natural_wear_on_grinding: bool,
    pub gauge_boundary: GaugeBoundary,
}

impl Default for LccParameters {
    fn default() -> Self {
        let grinding_possession_hours = 2.0;
        Self {
            discount_rate: 0.04,
            track_length_m: 1_000.0,
            technical_life_years: 30,
            capacity_cost_per_hour: 50_293.0,
            grinding_cost_per_m: 60.0,
            tamping_cost_per_m: 40.0,
            grinding_possession_hours,
            tamping_possession_hours: 5.0,
            milling_cost_factor: 5.0 / 3.0,
            milling_possession_hours: grinding_possession_hours * 5.0 / 3.0,
            rail_renewal_cost_per_m: 1_500.0,
            track_renewal_cost_per_m: 6_500.0,
            new_rail_laying_rate_m_per_hour: 40.0,
            index_threshold: 14.0,
            rcf_threshold: 0.5,
            initial_gauge: 1_440.0,
            gauge_widening_per_year: 1.0,
            annual_mgt: 35.0,
            subtract_natural_wear_on_grinding: true,
            gauge_boundary: GaugeBoundary::Extrapolate,
        }
    }
}

impl LccParameters {
    /// Simulation horizon in months
    pub fn max_months(&self) -> u32 {
        self.technical_life_years.saturating_mul(12)
    }

    /// Possession hours needed to lay new rail over the whole section
    pub fn new_rail_possession_hours(&self) -> f64 {
        self.track_length_m / self.new_rail_laying_rate_m_per_hour
    }

    pub fn rail_renewal_cost(&self) -> f64 {
        self.rail_renewal_cost_per_m * self.track_length_m
    }

    pub fn track_renewal_cost(&self) -> f64 {
        self.track_renewal_cost_per_m * self.track_length_m
    }

    /// Cumulative traffic after `months` months (MGT)
    pub fn months_to_mgt(&self, months: u32) -> f64 {
        f64::from(months) * self.annual_mgt / 12.0
    }

    /// Reject configurations the engine cannot simulate
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("track_length_m", self.track_length_m)?;
        positive(
            "new_rail_laying_rate_m_per_hour",
            self.new_rail_laying_rate_m_per_hour,
        )?;
        if self.technical_life_years == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "technical_life_years",
                value: 0.0,
                reason: "horizon must be at least one year",
            });
        }
        if self.technical_life_years > MAX_TECHNICAL_LIFE_YEARS {
            return Err(ConfigError::InvalidParameter {
                name: "technical_life_years",
                value: f64::from(self.technical_life_years),
                reason: "horizon may not exceed 1000 years",
            });
        }
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "discount_rate",
                value: self.discount_rate,
                reason: "must be finite and greater than -1",
            });
        }
        positive("index_threshold", self.index_threshold)?;
        positive("rcf_threshold", self.rcf_threshold)?;

        for (name, value) in [
            ("capacity_cost_per_hour", self.capacity_cost_per_hour),
            ("grinding_cost_per_m", self.grinding_cost_per_m),
            ("tamping_cost_per_m", self.tamping_cost_per_m),
            ("grinding_possession_hours", self.grinding_possession_hours),
            ("tamping_possession_hours", self.tamping_possession_hours),
            ("milling_cost_factor", self.milling_cost_factor),
            ("milling_possession_hours", self.milling_possession_hours),
            ("rail_renewal_cost_per_m", self.rail_renewal_cost_per_m),
            ("track_renewal_cost_per_m", self.track_renewal_cost_per_m),
            ("annual_mgt", self.annual_mgt),
        ] {
            non_negative(name, value)?;
        }

        if !self.initial_gauge.is_finite() || !self.gauge_widening_per_year.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "initial_gauge",
                value: self.initial_gauge,
                reason: "gauge and widening rate must be finite",
            });
        }
        Ok(())
    }

    // === Builder-style setters ===

    #[must_use]
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    #[must_use]
    pub fn with_track_length(mut self, metres: f64) -> Self {
        self.track_length_m = metres;
        self
    }

    #[must_use]
    pub fn with_technical_life(mut self, years: u32) -> Self {
        self.technical_life_years = years;
        self
    }

    #[must_use]
    pub fn with_natural_wear_subtraction(mut self, enabled: bool) -> Self {
        self.subtract_natural_wear_on_grinding = enabled;
        self
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be zero or positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = LccParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.max_months(), 360);
        assert!((params.new_rail_possession_hours() - 25.0).abs() < 1e-12);
        assert!((params.milling_possession_hours - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_track_length_rejected() {
        let err = LccParameters::default()
            .with_track_length(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "track_length_m",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = LccParameters::default()
            .with_technical_life(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "technical_life_years",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let params = LccParameters::default().with_technical_life(400_000_000);
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidParameter {
                name: "technical_life_years",
                value: 400_000_000.0,
                reason: "horizon may not exceed 1000 years",
            })
        );
        assert_eq!(params.max_months(), u32::MAX);

        let longest = LccParameters::default().with_technical_life(MAX_TECHNICAL_LIFE_YEARS);
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn test_negative_costs_rejected() {
        let params = LccParameters {
            grinding_cost_per_m: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_months_to_mgt() {
        let params = LccParameters::default();
        assert!((params.months_to_mgt(24) - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_yaml_style_input_uses_defaults() {
        let params: LccParameters =
            serde_json::from_str(r#"{ "track_length_m": 500.0, "gauge_boundary": "clamp" }"#)
                .unwrap();
        assert_eq!(params.track_length_m, 500.0);
        assert_eq!(params.gauge_boundary, GaugeBoundary::Clamp);
        assert_eq!(params.technical_life_years, 30);
    }
}
