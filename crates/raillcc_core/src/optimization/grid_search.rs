//! Exhaustive strategy search with parallel evaluation
//!
//! Every combination of high-rail grinding, low-rail grinding and gauge
//! correction interval in the space is simulated; the minimum annuity wins.

use tracing::info;

use crate::annuity::select_minimum;
use crate::config::{LccParameters, TrackSpec};
use crate::error::{ConfigError, Result};
use crate::model::{CurveProvider, RailCurves};
use crate::simulation::{RunOptions, simulate_track};

use super::config::StrategySpace;
use super::map_evaluations;
use super::result::{EvaluationRecord, OptimizationResult};

/// Find the minimum-annuity strategy for a two-rail track
pub fn optimize_strategy<P>(
    params: &LccParameters,
    provider: &P,
    track: &TrackSpec,
    space: &StrategySpace,
) -> Result<OptimizationResult>
where
    P: CurveProvider + ?Sized,
{
    space.validate()?;
    let strategies = space.strategies();

    let high = RailCurves::resolve(provider, &track.high())?;
    let low = RailCurves::resolve(provider, &track.low())?;

    let evaluations = map_evaluations(&strategies, |strategy| {
        simulate_track(params, &high, &low, strategy, RunOptions::default()).map(|outcome| {
            EvaluationRecord {
                strategy: *strategy,
                annuity: outcome.annuity,
                lifetime_years: outcome.lifetime_years,
            }
        })
    })
    .into_iter()
    .collect::<Result<Vec<_>>>()?;

    let best = *select_minimum(&evaluations, |e| e.annuity).ok_or(ConfigError::EmptySearchSpace)?;

    info!(
        evaluations = evaluations.len(),
        grinding_high = best.strategy.grinding_interval_high,
        grinding_low = best.strategy.grinding_interval_low,
        gauge_correction = best.strategy.gauge_correction_interval,
        annuity = best.annuity,
        "Strategy search finished"
    );

    Ok(OptimizationResult { best, evaluations })
}
