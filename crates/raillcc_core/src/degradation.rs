//! Rail degradation model
//!
//! Advances one rail by one month. In a grinding month the index grows by
//! the post-grinding index curve and the grinding-residual RCF accumulates;
//! in any other month the index grows by natural wear and the RCF residual
//! is the grinding residual plus the depth grown since the last pass.

use crate::config::LccParameters;
use crate::error::LookupError;
use crate::maintenance::grinding_due;
use crate::model::RailCurves;
use crate::simulation_state::RailState;

/// Advance `rail` by one month at the current `gauge`.
///
/// Returns `true` when this month was a grinding month.
pub fn advance_month(
    rail: &mut RailState,
    curves: &RailCurves<'_>,
    gauge: f64,
    grinding_interval: u32,
    params: &LccParameters,
) -> Result<bool, LookupError> {
    let boundary = params.gauge_boundary;
    let since = rail.months_since_grinding;
    let natural_wear = curves.wear.evaluate(since, gauge, boundary)?;

    if grinding_due(rail, grinding_interval) {
        let index_growth = curves.index.evaluate(grinding_interval, gauge, boundary)?;
        rail.index += if params.subtract_natural_wear_on_grinding {
            index_growth - natural_wear
        } else {
            index_growth
        };

        rail.rcf_from_grinding += curves
            .rcf_residual
            .evaluate(grinding_interval, gauge, boundary)?;
        rail.rcf_residual = rail.rcf_from_grinding;
        rail.months_since_grinding = 1;
        Ok(true)
    } else {
        rail.index += natural_wear;
        let depth = curves.rcf_depth.evaluate(since, gauge, boundary)?;
        rail.rcf_residual = rail.rcf_from_grinding + depth;
        rail.months_since_grinding += 1;
        Ok(false)
    }
}

/// Double grinding: removes two increments of index growth and all RCF
pub fn apply_milling(
    rail: &mut RailState,
    curves: &RailCurves<'_>,
    gauge: f64,
    params: &LccParameters,
) -> Result<(), LookupError> {
    let boundary = params.gauge_boundary;
    let look_ahead = (rail.months_since_grinding + 1).min(curves.index.last_month());

    let first = curves.index.evaluate(look_ahead, gauge, boundary)?;
    let second = curves.index.evaluate(1, gauge, boundary)?;
    rail.index += first + second;

    rail.rcf_from_grinding = 0.0;
    rail.rcf_residual = 0.0;
    rail.months_since_grinding = 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, CurveKey, CurveSet, RailSide};

    struct Curves {
        index: CurveSet,
        wear: CurveSet,
        rcf_residual: CurveSet,
        rcf_depth: CurveSet,
    }

    impl Curves {
        fn rail(&self) -> RailCurves<'_> {
            RailCurves {
                side: RailSide::High,
                index: &self.index,
                wear: &self.wear,
                rcf_residual: &self.rcf_residual,
                rcf_depth: &self.rcf_depth,
            }
        }
    }

    fn curve(condition: Condition, f: impl Fn(u32) -> f64) -> CurveSet {
        let key = CurveKey::new(condition, "MB4", RailSide::High, 1465, 32.5);
        CurveSet::from_fn(key, vec![1440.0, 1450.0], 1..=12, |m, _| f(m)).unwrap()
    }

    fn curves() -> Curves {
        Curves {
            index: curve(Condition::IndexWear, |m| 0.1 * f64::from(m)),
            wear: curve(Condition::NaturalWear, |_| 0.05),
            rcf_residual: curve(Condition::RcfResidual, |_| 0.02),
            rcf_depth: curve(Condition::RcfDepth, |m| 0.01 * f64::from(m)),
        }
    }

    #[test]
    fn test_non_grinding_month_adds_natural_wear_and_depth() {
        let data = curves();
        let params = LccParameters::default();
        let mut rail = RailState::new(RailSide::High);
        rail.months_since_grinding = 2;
        rail.rcf_from_grinding = 0.1;

        let ground = advance_month(&mut rail, &data.rail(), 1441.0, 3, &params).unwrap();

        assert!(!ground);
        assert!((rail.index - 0.05).abs() < 1e-12);
        assert!((rail.rcf_residual - 0.12).abs() < 1e-12);
        assert_eq!(rail.months_since_grinding, 3);
    }

    #[test]
    fn test_grinding_month_resets_rcf_to_grinding_residual() {
        let data = curves();
        let params = LccParameters::default();
        let mut rail = RailState::new(RailSide::High);
        rail.months_since_grinding = 3;
        rail.rcf_from_grinding = 0.1;
        rail.rcf_residual = 0.4;

        let ground = advance_month(&mut rail, &data.rail(), 1441.0, 3, &params).unwrap();

        assert!(ground);
        // index curve at month 3 minus natural wear
        assert!((rail.index - (0.3 - 0.05)).abs() < 1e-12);
        assert!((rail.rcf_from_grinding - 0.12).abs() < 1e-12);
        assert_eq!(rail.rcf_residual, rail.rcf_from_grinding);
        assert_eq!(rail.months_since_grinding, 1);
    }

    #[test]
    fn test_grinding_without_wear_subtraction() {
        let data = curves();
        let params = LccParameters::default().with_natural_wear_subtraction(false);
        let mut rail = RailState::new(RailSide::High);

        advance_month(&mut rail, &data.rail(), 1441.0, 1, &params).unwrap();

        assert!((rail.index - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_milling_clears_rcf_and_resets_counter() {
        let data = curves();
        let params = LccParameters::default();
        let mut rail = RailState::new(RailSide::High);
        rail.months_since_grinding = 4;
        rail.rcf_from_grinding = 0.3;
        rail.rcf_residual = 0.6;

        apply_milling(&mut rail, &data.rail(), 1441.0, &params).unwrap();

        // index curve at months 5 and 1
        assert!((rail.index - 0.6).abs() < 1e-12);
        assert_eq!(rail.rcf_residual, 0.0);
        assert_eq!(rail.rcf_from_grinding, 0.0);
        assert_eq!(rail.months_since_grinding, 1);
    }

    #[test]
    fn test_milling_look_ahead_capped_at_last_month() {
        let data = curves();
        let params = LccParameters::default();
        let mut rail = RailState::new(RailSide::High);
        rail.months_since_grinding = 12;

        apply_milling(&mut rail, &data.rail(), 1441.0, &params).unwrap();

        assert!((rail.index - (1.2 + 0.1)).abs() < 1e-12);
    }
}
