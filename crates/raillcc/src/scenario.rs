//! Scenario files
//!
//! A scenario bundles everything one analysis needs: cost parameters, the
//! track situation, a maintenance strategy, an optional search space and
//! the degradation curves. Everything but the curves has defaults.
//!
//! ```yaml
//! parameters:
//!   discount_rate: 0.04
//!   track_length_m: 1000
//! track:
//!   radius: 1465
//!   load: 32.5
//!   profile_high: MB4
//!   profile_low: MB4
//! strategy:
//!   grinding_interval_high: 6
//!   grinding_interval_low: 9
//!   gauge_correction_interval: 48
//! curves:
//!   - condition: h-index
//!     profile: MB4
//!     side: high
//!     radius: 1465
//!     load: 32.5
//!     gauge_levels: [1440, 1445, 1450]
//!     months:
//!       - month: 1
//!         values: [0.10, 0.12, 0.15]
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use raillcc_core::config::{LccParameters, TrackSpec, TrackStrategy};
use raillcc_core::model::CurveStore;
use raillcc_core::optimization::StrategySpace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub parameters: LccParameters,
    #[serde(default)]
    pub track: TrackSpec,
    #[serde(default)]
    pub strategy: TrackStrategy,
    /// Search space for strategy optimization
    #[serde(default)]
    pub search: StrategySpace,
    pub curves: CurveStore,
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let yaml = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
        let scenario = Self::from_yaml(&yaml)
            .wrap_err_with(|| format!("failed to parse scenario {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            curves = scenario.curves.len(),
            "Scenario loaded"
        );
        Ok(scenario)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use raillcc_core::model::{Condition, CurveSet, RailSide};

    /// A small scenario with both rails of the default track covered
    pub(crate) fn sample_scenario() -> Scenario {
        let track = TrackSpec::default();
        let mut curves = CurveStore::new();
        for (side, severity) in [(RailSide::High, 1.3), (RailSide::Low, 1.0)] {
            let rail = track.rail(side);
            for (condition, rate) in [
                (Condition::IndexWear, 0.1),
                (Condition::NaturalWear, 0.05),
                (Condition::RcfResidual, 0.01),
                (Condition::RcfDepth, 0.03),
            ] {
                let curve = CurveSet::from_fn(
                    rail.curve_key(condition),
                    vec![1440.0, 1445.0, 1450.0],
                    1..=12,
                    |m, g| severity * rate * f64::from(m) * (1.0 + (g - 1440.0) * 0.02),
                )
                .unwrap();
                curves.insert(curve);
            }
        }
        Scenario {
            parameters: LccParameters::default(),
            track,
            strategy: TrackStrategy::new(6, 9, 48),
            search: StrategySpace::default(),
            curves,
        }
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let yaml = r#"
curves:
  - condition: h-index
    profile: MB4
    side: outer
    radius: 1465
    load: 32.5
    gauge_levels: [1440, 1445, 1450]
    months:
      - month: 1
        values: [0.1, 0.2, 0.3]
      - month: 2
        values: [0.2, 0.3, 0.4]
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.parameters, LccParameters::default());
        assert_eq!(scenario.track, TrackSpec::default());
        assert_eq!(scenario.strategy, TrackStrategy::default());
        assert_eq!(scenario.curves.len(), 1);

        let key = scenario.track.high().curve_key(Condition::IndexWear);
        assert!(scenario.curves.keys().contains(&&key));
    }

    #[test]
    fn test_partial_parameters_keep_other_defaults() {
        let yaml = r#"
parameters:
  discount_rate: 0.03
  track_length_m: 500
curves: []
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.parameters.discount_rate, 0.03);
        assert_eq!(scenario.parameters.track_length_m, 500.0);
        assert_eq!(scenario.parameters.index_threshold, 14.0);
        assert!(scenario.curves.is_empty());
    }

    #[test]
    fn test_malformed_curve_is_rejected() {
        let yaml = r#"
curves:
  - condition: wear
    profile: MB4
    side: low
    radius: 1465
    load: 32.5
    gauge_levels: [1450, 1440]
    months:
      - month: 1
        values: [0.1, 0.2]
"#;
        assert!(Scenario::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let scenario = sample_scenario();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        fs::write(&path, scenario.to_yaml().unwrap()).unwrap();

        let loaded = Scenario::load(&path).unwrap();
        assert_eq!(loaded.strategy, scenario.strategy);
        assert_eq!(loaded.track, scenario.track);
        assert_eq!(loaded.curves.len(), 8);
    }

    #[test]
    fn test_demo_scenario_runs() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/curved_track.yaml");
        let scenario = Scenario::load(&path).unwrap();
        assert_eq!(scenario.curves.len(), 8);
        assert_eq!(scenario.strategy, TrackStrategy::new(6, 9, 48));
        assert_eq!(scenario.search.gauge_correction.iter().count(), 3);

        let outcome = raillcc_core::simulate_track_with(
            &scenario.parameters,
            &scenario.curves,
            &scenario.track,
            &scenario.strategy,
            raillcc_core::RunOptions::default(),
        )
        .unwrap();
        assert!(outcome.annuity > 0.0);
        assert!(outcome.lifetime_years > 0.0 && outcome.lifetime_years <= 30.0);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = Scenario::load(&path).unwrap_err();
        assert!(format!("{err}").contains("missing.yaml"));
    }
}
