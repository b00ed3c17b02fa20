//! Identifiers for degradation curves
//!
//! A curve is identified by the physical condition it describes and the
//! track situation it was measured for: rail profile, rail side, curve
//! radius and axle load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The degradation quantity a curve describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Index growth over a grinding cycle (H-index)
    #[serde(rename = "h-index", alias = "H-index")]
    IndexWear,
    /// Index growth from natural wear alone
    #[serde(rename = "wear", alias = "Wear")]
    NaturalWear,
    /// RCF left behind after a grinding pass
    #[serde(rename = "rcf-residual", alias = "RCF-residual")]
    RcfResidual,
    /// RCF crack depth built up since the last grinding
    #[serde(rename = "rcf-depth", alias = "RCF-depth")]
    RcfDepth,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::IndexWear,
        Condition::NaturalWear,
        Condition::RcfResidual,
        Condition::RcfDepth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::IndexWear => "h-index",
            Condition::NaturalWear => "wear",
            Condition::RcfResidual => "rcf-residual",
            Condition::RcfDepth => "rcf-depth",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rail of a curved track
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailSide {
    /// Outer rail
    #[serde(alias = "High", alias = "outer")]
    High,
    /// Inner rail
    #[serde(alias = "Low", alias = "inner", alias = "Inner")]
    Low,
}

impl RailSide {
    /// Short tag used in option labels ("H" / "L")
    pub fn tag(self) -> &'static str {
        match self {
            RailSide::High => "H",
            RailSide::Low => "L",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RailSide::High => "high",
            RailSide::Low => "low",
        }
    }
}

impl fmt::Display for RailSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RailSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "outer" | "h" => Ok(RailSide::High),
            "low" | "inner" | "l" => Ok(RailSide::Low),
            other => Err(format!("unknown rail side '{other}' (expected high or low)")),
        }
    }
}

/// Lookup key for one degradation curve set
///
/// The axle load is kept in tenths of a tonne so the key stays `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurveKey {
    pub condition: Condition,
    pub profile: String,
    pub side: RailSide,
    pub radius: u32,
    pub load_decitonnes: u32,
}

impl CurveKey {
    pub fn new(
        condition: Condition,
        profile: impl Into<String>,
        side: RailSide,
        radius: u32,
        load_tonnes: f64,
    ) -> Self {
        Self {
            condition,
            profile: profile.into(),
            side,
            radius,
            load_decitonnes: tonnes_to_decitonnes(load_tonnes),
        }
    }

    pub fn load_tonnes(&self) -> f64 {
        f64::from(self.load_decitonnes) / 10.0
    }
}

impl fmt::Display for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/R{}/{}t",
            self.condition,
            self.profile,
            self.side,
            self.radius,
            self.load_tonnes()
        )
    }
}

pub(crate) fn tonnes_to_decitonnes(load_tonnes: f64) -> u32 {
    (load_tonnes * 10.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_round_trips_through_decitonnes() {
        let key = CurveKey::new(Condition::IndexWear, "MB4", RailSide::High, 1465, 32.5);
        assert_eq!(key.load_decitonnes, 325);
        assert!((key.load_tonnes() - 32.5).abs() < 1e-12);
    }

    #[test]
    fn test_key_display_names_every_component() {
        let key = CurveKey::new(Condition::RcfDepth, "MB5", RailSide::Low, 600, 30.0);
        assert_eq!(key.to_string(), "rcf-depth/MB5/low/R600/30t");
    }

    #[test]
    fn test_rail_side_parsing_accepts_inner_outer() {
        assert_eq!("Outer".parse::<RailSide>(), Ok(RailSide::High));
        assert_eq!("inner".parse::<RailSide>(), Ok(RailSide::Low));
        assert!("middle".parse::<RailSide>().is_err());
    }

    #[test]
    fn test_condition_serde_names() {
        let json = serde_json::to_string(&Condition::RcfResidual).unwrap();
        assert_eq!(json, "\"rcf-residual\"");
        let parsed: Condition = serde_json::from_str("\"H-index\"").unwrap();
        assert_eq!(parsed, Condition::IndexWear);
    }
}
