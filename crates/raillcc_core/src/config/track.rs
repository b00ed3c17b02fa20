//! Track situation used to select degradation curves

use serde::{Deserialize, Serialize};

use crate::model::{Condition, CurveKey, RailSide};

/// Which curves describe one rail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailSpec {
    pub profile: String,
    pub side: RailSide,
    pub radius: u32,
    /// Axle load in tonnes
    pub load: f64,
}

impl RailSpec {
    pub fn new(profile: impl Into<String>, side: RailSide, radius: u32, load: f64) -> Self {
        Self {
            profile: profile.into(),
            side,
            radius,
            load,
        }
    }

    pub fn curve_key(&self, condition: Condition) -> CurveKey {
        CurveKey::new(condition, self.profile.clone(), self.side, self.radius, self.load)
    }
}

/// A curved track: one radius and load, a profile per rail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSpec {
    pub radius: u32,
    pub load: f64,
    pub profile_high: String,
    pub profile_low: String,
}

impl Default for TrackSpec {
    fn default() -> Self {
        Self {
            radius: 1465,
            load: 32.5,
            profile_high: "MB4".to_string(),
            profile_low: "MB4".to_string(),
        }
    }
}

impl TrackSpec {
    pub fn rail(&self, side: RailSide) -> RailSpec {
        let profile = match side {
            RailSide::High => &self.profile_high,
            RailSide::Low => &self.profile_low,
        };
        RailSpec::new(profile.clone(), side, self.radius, self.load)
    }

    pub fn high(&self) -> RailSpec {
        self.rail(RailSide::High)
    }

    pub fn low(&self) -> RailSpec {
        self.rail(RailSide::Low)
    }
}
